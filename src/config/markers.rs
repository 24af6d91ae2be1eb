//! Markup contract shared by the tag renderer and the page integrator.
//!
//! The renderer emits attributes under these names and the integrator scans
//! for them, so both sides are built from the same constants.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker attribute carried by every fiddle container.
pub const FIDDLE_ATTR: &str = "data-scalafiddle";

/// Attribute naming the code template of a fiddle.
pub const TEMPLATE_ATTR: &str = "data-template";

/// Attribute emitted when the fiddle should run on load.
pub const AUTORUN_ATTR: &str = "data-autorun";

/// Prefix every fiddle data attribute shares.
pub const DATA_PREFIX: &str = "data-";

/// Line prefix splitting a template into its pre and post regions.
pub const TEMPLATE_SPLIT: &str = "////";

/// File extension of template sources.
pub const TEMPLATE_EXTENSION: &str = "scala";

/// Closing body tag the activation script is inserted before.
pub const BODY_END_TAG: &str = "</body>";

/// Opening of a rendered fiddle container, e.g. `<div data-scalafiddle=""`.
pub static FIDDLE_MARKER: Lazy<String> = Lazy::new(|| format!("<div {}=\"\"", FIDDLE_ATTR));

/// Matches a fiddle container whose first attribute after the marker is its template.
///
/// The template value may use either quote style.
pub static TEMPLATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"{}\s+{}=["'](?P<name>[^"']+)["']"#,
        regex::escape(&FIDDLE_MARKER),
        regex::escape(TEMPLATE_ATTR)
    ))
    .unwrap()
});

/// Formats the data attribute name for an option key.
pub fn data_attr(key: &str) -> String {
    format!("{}{}", DATA_PREFIX, key)
}
