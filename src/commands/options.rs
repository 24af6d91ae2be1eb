//! Options command implementation.

use crate::errors::Result;
use crate::model::ParsedOptions;

/// Executes the options command -- prints how a tag argument string is parsed.
pub fn options(args: &str) -> Result<()> {
    let parsed = ParsedOptions::parse(args);
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_prints() {
        options(r#"template="A" autorun"#).unwrap();
    }
}
