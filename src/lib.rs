//! ScalaFiddle - interactive code widgets for static-site pages
//!
//! This library renders `{% scalafiddle %}` block tags into fiddle containers
//! and post-processes rendered pages so the fiddles are activated in the browser.
//!
//! # Features
//!
//! - **Options**: Parse tag arguments into attributes, flags and filters
//! - **Tag**: Render a fiddle container with site-wide defaults and per-tag overrides
//! - **Integration**: Inject code templates and the activation script into finished pages
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use scalafiddle::interface::{render_page, Site};
//!
//! let site = Site::from_dir(std::env::current_dir().unwrap()).unwrap();
//! let page = render_page(&site, Path::new("docs/decoding.md")).unwrap();
//! println!("{}", page.output);
//! ```

pub mod commands;
pub mod config;
pub mod convert;
pub mod errors;
pub mod hooks;
pub mod interface;
pub mod io;
pub mod model;
pub mod readers;
pub mod tag;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use config::{FiddleConfig, SiteConfig};
pub use errors::{FiddleError, Result};
pub use hooks::{append_scalafiddle_code, ScalaFiddleIntegration};
pub use interface::Site;
pub use model::{Page, ParsedOptions, Template};
pub use tag::{FiddleTag, RenderContext};

// Re-export command options
pub use commands::{IntegrateOptions, RenderOptions};
