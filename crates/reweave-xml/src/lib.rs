//! Reweave XML Support Library
//!
//! This crate provides the XML plumbing for reweave: an owned document tree,
//! node selection helpers, and a generic XML-to-structural-object converter.
//! Downstream crates consume the structural rendition (plain
//! [`serde_json::Value`] objects) instead of walking a DOM.
//!
//! # Example
//!
//! ```
//! use reweave_xml::{build, Document, ParseInfo};
//!
//! let document = Document::parse(
//!     r#"<Expression name="greeting"><Pattern><![CDATA[hello]]></Pattern></Expression>"#,
//! )
//! .unwrap();
//!
//! let built = build(&document, document.root(), &ParseInfo::default()).unwrap();
//! assert_eq!(built["_"], "Expression");
//! assert_eq!(built["name"], "greeting");
//! assert_eq!(built["_children"][0]["_text"], "hello");
//! ```
//!
//! # Modules
//!
//! - [`dom`]: Owned document tree and parsing
//! - [`select`]: Node selection helpers
//! - [`convert`]: Structural object conversion and its configuration
//! - [`error`]: Error types

pub mod convert;
pub mod dom;
pub mod error;
pub mod select;

// Re-export commonly used types at the crate root
pub use convert::{build, labels, DescendantsInfo, ElementInfo, ParseInfo};
pub use dom::{Document, NodeId};
pub use error::XmlError;
pub use select::{element_by_id, elements_by_tag};
