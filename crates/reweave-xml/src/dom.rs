//! Owned XML document tree.
//!
//! [`Document::parse`] reads a whole XML string into an arena of element
//! nodes addressed by [`NodeId`] handles. Only element structure, attributes,
//! and text content survive; comments, processing instructions, and the
//! prolog are discarded. Text segments are trimmed by the reader and
//! concatenated in encounter order, while CDATA sections are kept verbatim,
//! so an element's text is `Some` exactly when it had at least one
//! non-whitespace text segment or CDATA section.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::XmlError;

/// Handle to an element node within a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct NodeData {
    tag: String,
    /// Attributes in document order, values unescaped.
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
}

/// An owned XML element tree.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Document {
    /// Parses an XML string into an owned element tree.
    ///
    /// # Errors
    ///
    /// Fails when the reader rejects the input, an attribute is malformed,
    /// a closing tag does not match the open element, or the document has
    /// no root element.
    pub fn parse(xml: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut nodes: Vec<NodeData> = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut root: Option<NodeId> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let id = append_element(&mut nodes, &stack, &mut root, &start)?;
                    stack.push(id);
                }
                Event::Empty(start) => {
                    append_element(&mut nodes, &stack, &mut root, &start)?;
                }
                Event::End(end) => {
                    let tag = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                    match stack.pop() {
                        Some(open) if nodes[open.0].tag == tag => {}
                        _ => return Err(XmlError::UnmatchedClose(tag)),
                    }
                }
                Event::Text(text) => {
                    if let Some(&current) = stack.last() {
                        let segment = text.unescape()?;
                        if !segment.is_empty() {
                            nodes[current.0]
                                .text
                                .get_or_insert_with(String::new)
                                .push_str(&segment);
                        }
                    }
                }
                Event::CData(cdata) => {
                    if let Some(&current) = stack.last() {
                        let segment = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                        nodes[current.0]
                            .text
                            .get_or_insert_with(String::new)
                            .push_str(&segment);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        match root {
            Some(root) => Ok(Self { nodes, root }),
            None => Err(XmlError::NoRoot),
        }
    }

    /// The document's root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The element name of `node`.
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    /// The value of the named attribute on `node`, if present.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes of `node` in document order.
    pub fn attributes(&self, node: NodeId) -> &[(String, String)] {
        &self.nodes[node.0].attributes
    }

    /// The composed text content of `node`.
    ///
    /// `Some` exactly when the element had text or CDATA children; an empty
    /// CDATA section yields `Some("")`.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].text.as_deref()
    }

    /// The element children of `node` in document order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Renders `node` as its start tag, e.g. `<Expression eg="Ted">`.
    ///
    /// Used to cite an offending element in error messages.
    pub fn describe(&self, node: NodeId) -> String {
        let data = &self.nodes[node.0];
        let mut rendered = String::from("<");
        rendered.push_str(&data.tag);
        for (key, value) in &data.attributes {
            rendered.push(' ');
            rendered.push_str(key);
            rendered.push_str("=\"");
            rendered.push_str(value);
            rendered.push('"');
        }
        rendered.push('>');
        rendered
    }
}

fn append_element(
    nodes: &mut Vec<NodeData>,
    stack: &[NodeId],
    root: &mut Option<NodeId>,
    start: &quick_xml::events::BytesStart<'_>,
) -> Result<NodeId, XmlError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    let id = NodeId(nodes.len());
    nodes.push(NodeData {
        tag,
        attributes,
        text: None,
        children: Vec::new(),
    });

    if let Some(&parent) = stack.last() {
        nodes[parent.0].children.push(id);
    } else if root.is_none() {
        *root = Some(id);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_builds_element_tree() {
        let doc = Document::parse(
            r#"<Application name="pez">
                 <Expressions name="test-expressions">
                   <Expression name="one"/>
                   <Expression name="two"/>
                 </Expressions>
               </Application>"#,
        )
        .unwrap();

        let root = doc.root();
        assert_eq!(doc.tag(root), "Application");
        assert_eq!(doc.attribute(root, "name"), Some("pez"));

        let groups = doc.children(root);
        assert_eq!(groups.len(), 1);
        assert_eq!(doc.tag(groups[0]), "Expressions");

        let expressions = doc.children(groups[0]);
        assert_eq!(expressions.len(), 2);
        assert_eq!(doc.attribute(expressions[0], "name"), Some("one"));
        assert_eq!(doc.attribute(expressions[1], "name"), Some("two"));
    }

    #[test]
    fn test_parse_keeps_cdata_verbatim() {
        let doc = Document::parse(
            r#"<Pattern eg="Mick Mars"><![CDATA[[a-zA-Z\s']+]]></Pattern>"#,
        )
        .unwrap();
        assert_eq!(doc.text(doc.root()), Some(r"[a-zA-Z\s']+"));
    }

    #[test]
    fn test_parse_trims_plain_text() {
        let doc = Document::parse("<Pattern>\n    DAY\n  </Pattern>").unwrap();
        assert_eq!(doc.text(doc.root()), Some("DAY"));
    }

    #[test]
    fn test_parse_skips_whitespace_only_text() {
        let doc = Document::parse("<Outer>\n  <Inner/>\n</Outer>").unwrap();
        assert_eq!(doc.text(doc.root()), None);
        assert_eq!(doc.children(doc.root()).len(), 1);
    }

    #[test]
    fn test_parse_unescapes_attribute_values() {
        let doc = Document::parse(r#"<Pattern eg="Ted &amp; Ned"/>"#).unwrap();
        assert_eq!(doc.attribute(doc.root(), "eg"), Some("Ted & Ned"));
    }

    #[test]
    fn test_parse_empty_cdata_counts_as_text() {
        let doc = Document::parse("<Pattern><![CDATA[]]></Pattern>").unwrap();
        assert_eq!(doc.text(doc.root()), Some(""));
    }

    #[test]
    fn test_parse_without_root_fails() {
        let result = Document::parse("  ");
        assert!(matches!(result, Err(XmlError::NoRoot)));
    }

    #[test]
    fn test_parse_mismatched_close_fails() {
        assert!(Document::parse("<a><b></a></b>").is_err());
    }

    #[test]
    fn test_describe_renders_start_tag() {
        let doc = Document::parse(r#"<Expression eg="Ted" rank="1"/>"#).unwrap();
        assert_eq!(doc.describe(doc.root()), r#"<Expression eg="Ted" rank="1">"#);
    }
}
