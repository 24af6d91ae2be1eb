//! Core model types for fiddle tags, templates and pages.

mod options;
mod page;
mod template;

pub use options::{Attribute, Flag, ParsedOptions};
pub use page::Page;
pub use template::{escape_js_string, Template};
