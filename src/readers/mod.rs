//! Readers for page sources and template files.

mod tags;
mod template;

pub use tags::{
    expand_fiddle_tags, find_fiddle_tags, protect_fiddle_tags, restore_fiddle_tags, ProtectedFiddle,
    TagBlock,
};
pub use template::{load_template, template_file};
