//! Option parsing for fiddle tag arguments.
//!
//! Parses raw argument strings like `template="Intro" dependency='org %%% lib % 1.0' autorun`
//! into attributes, flags and filters.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

/// Pattern for `key = "value"` pairs. Quote characters need not match.
static OPTION_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\S+)\s*=\s*['"]+([^'"]+)['"]+"#).unwrap());

/// Attribute keys a fiddle tag understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Template,
    Prefix,
    Dependency,
    ScalaVersion,
    Selector,
    MinHeight,
    Layout,
    Theme,
}

impl Attribute {
    /// All allowed attributes.
    pub const ALL: [Attribute; 8] = [
        Attribute::Template,
        Attribute::Prefix,
        Attribute::Dependency,
        Attribute::ScalaVersion,
        Attribute::Selector,
        Attribute::MinHeight,
        Attribute::Layout,
        Attribute::Theme,
    ];

    /// Returns the key as written in a tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Template => "template",
            Attribute::Prefix => "prefix",
            Attribute::Dependency => "dependency",
            Attribute::ScalaVersion => "scalaversion",
            Attribute::Selector => "selector",
            Attribute::MinHeight => "minheight",
            Attribute::Layout => "layout",
            Attribute::Theme => "theme",
        }
    }
}

impl FromStr for Attribute {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Boolean flags a fiddle tag understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flag {
    Autorun,
}

impl Flag {
    /// All allowed flags.
    pub const ALL: [Flag; 1] = [Flag::Autorun];

    /// Returns the flag name as written in a tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Autorun => "autorun",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Options parsed from a fiddle tag's argument string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedOptions {
    /// Recognized attributes in order of first appearance.
    pub attributes: IndexMap<Attribute, String>,
    /// Flags; a flag is present only when set.
    pub flags: BTreeMap<Flag, bool>,
    /// Unrecognized `key="value"` pairs.
    pub filters: IndexMap<String, String>,
}

impl ParsedOptions {
    /// Parses a raw argument string. Never fails; malformed fragments are ignored.
    ///
    /// A flag is set whenever its name occurs anywhere in the input, even
    /// inside a value or an unrelated key.
    pub fn parse(raw: &str) -> Self {
        let mut options = Self::default();

        for caps in OPTION_PAIR.captures_iter(raw) {
            let key = &caps[1];
            let value = caps[2].to_string();
            match key.parse::<Attribute>() {
                Ok(attr) => {
                    options.attributes.insert(attr, value);
                }
                Err(()) => {
                    options.filters.insert(key.to_string(), value);
                }
            }
        }

        for flag in Flag::ALL {
            if raw.contains(flag.as_str()) {
                options.flags.insert(flag, true);
            }
        }

        options
    }

    /// Returns the value of an attribute, if given.
    pub fn attribute(&self, attr: Attribute) -> Option<&str> {
        self.attributes.get(&attr).map(String::as_str)
    }

    /// Returns true if the flag was set.
    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.get(&flag).copied().unwrap_or(false)
    }

    /// Returns the value of an unrecognized key, if given.
    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    /// Returns true if nothing was recognized.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.flags.is_empty() && self.filters.is_empty()
    }
}
