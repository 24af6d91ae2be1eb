//! Command implementations for the `scalafiddle` binary.

mod config;
mod integrate;
mod options;
mod render;

pub use config::config;
pub use integrate::{integrate, IntegrateOptions};
pub use options::options;
pub use render::{render, RenderOptions};
