//! Markup element tree and the layout XML writer.
//!
//! The writer reproduces the output conventions the consuming Android
//! toolchain expects: every attribute on its own line one indent level
//! deeper than its element, generic children separated by blank lines,
//! `data` section entries separated by single newlines, and childless
//! elements closing on their own indented line.

const INDENT_SPACE: &str = "    ";

/// One node of the emitted layout tree.
///
/// Attribute order is insertion order and is reproduced verbatim in the
/// output; setting an existing attribute replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupElement {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<MarkupElement>,
}

impl MarkupElement {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, keeping first-insertion position on replace.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(k, _)| *k == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Append a child element.
    pub fn add_child(&mut self, child: MarkupElement) {
        self.children.push(child);
    }

    /// Child elements in insertion order.
    pub fn children(&self) -> &[MarkupElement] {
        &self.children
    }

    /// Whether the element has any children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Serialize a markup tree to layout XML text.
pub fn to_xml_string(root: &MarkupElement) -> String {
    let mut out = String::from("<?xml version='1.0' encoding='utf-8'?>\n");
    write_element(&mut out, root, 0);
    out
}

fn write_element(out: &mut String, elem: &MarkupElement, level: usize) {
    out.push('<');
    out.push_str(&elem.tag);

    for (name, value) in &elem.attrs {
        out.push('\n');
        push_indent(out, level + 1);
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if elem.children.is_empty() {
        out.push('\n');
        push_indent(out, level);
    } else {
        // Entries of a data section sit on consecutive lines; everything
        // else gets a blank line between siblings.
        let separator = if elem.tag == "data" { "\n" } else { "\n\n" };
        for child in &elem.children {
            out.push_str(separator);
            push_indent(out, level + 1);
            write_element(out, child, level + 1);
        }
        out.push('\n');
        push_indent(out, level);
    }

    out.push_str("</");
    out.push_str(&elem.tag);
    out.push('>');
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT_SPACE);
    }
}

/// Escape an attribute value for XML output.
fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
