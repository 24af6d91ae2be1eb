//! High-level interface for rendering and integrating pages.

mod context;
mod document;

pub use context::Site;
pub use document::{
    find_pages, integrate_page, integrate_pages, render_page, render_source, ProcessedPage,
};
