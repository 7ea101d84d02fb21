//! Input loading for XML expression configuration files.
//!
//! The CLI performs the single file read; everything downstream operates on
//! the in-memory document. Parse and build failures keep their domain error
//! type so commands can render them with a stable taxonomy code.

use anyhow::{Context, Result};
use reweave_expression::{build_expressions, ExpressionDictionary, ExpressionError};
use reweave_xml::Document;
use std::path::Path;

/// Reads a configuration file into memory.
pub fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration file '{}'", path.display()))
}

/// Parses configuration text and builds the expression dictionary.
///
/// Group selection is scoped to the document root element.
pub fn build_dictionary(content: &str) -> Result<ExpressionDictionary, ExpressionError> {
    let document = Document::parse(content)?;
    let scope = document.root();
    build_expressions(&document, scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_config_missing_file_fails() {
        let result = read_config(Path::new("/nonexistent/config.xml"));
        assert!(result.is_err());
        let message = format!("{:#}", result.err().unwrap());
        assert!(message.contains("/nonexistent/config.xml"));
    }

    #[test]
    fn read_config_returns_file_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.xml");
        std::fs::write(&path, "<Application/>").unwrap();

        let content = read_config(&path).unwrap();
        assert_eq!(content, "<Application/>");
    }

    #[test]
    fn build_dictionary_collects_expressions() {
        let dictionary = build_dictionary(
            r#"<Application>
                 <Expressions name="fields">
                   <Expression name="year">
                     <Pattern eg="2026"><![CDATA[[0-9]{4}]]></Pattern>
                   </Expression>
                 </Expressions>
               </Application>"#,
        )
        .unwrap();

        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.contains_key("year"));
    }

    #[test]
    fn build_dictionary_malformed_xml_fails() {
        let result = build_dictionary("<Application><Expressions name=");
        assert!(matches!(result, Err(ExpressionError::Xml(_))));
    }
}
