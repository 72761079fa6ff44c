//! Owned, mutable SVG element tree.
//!
//! `roxmltree` does the parsing; the read-only document is copied into plain owned nodes so
//! attributes can be rewritten and children detached before serializing back to markup.

use crate::foundation::error::{GlintError, GlintResult};

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// A parsed markup document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDocument {
    root: Element,
}

/// A node in the owned tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Character data (unescaped).
    Text(String),
    /// A comment body.
    Comment(String),
}

/// A single attribute, name kept in `prefix:local` form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// Qualified attribute name.
    pub name: String,
    /// Unescaped attribute value.
    pub value: String,
}

/// An element node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    namespaces: Vec<(Option<String>, String)>,
    attrs: Vec<Attribute>,
    children: Vec<Node>,
}

impl SvgDocument {
    /// Parse markup into an owned tree. DOCTYPE declarations are accepted.
    pub fn parse(text: &str) -> GlintResult<Self> {
        let opts = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, opts)
            .map_err(|e| GlintError::render(format!("parse svg markup: {e}")))?;
        let root = convert_element(doc.root_element(), &Scope::new());
        Ok(Self { root })
    }

    /// The document element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the document element.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// All elements with the given local name, root included, in document order.
    pub fn elements_named(&self, local: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        if self.root.local_name() == local {
            out.push(&self.root);
        }
        out.extend(self.root.descendants_named(local));
        out
    }

    /// Serialize the tree back to markup (no XML declaration).
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_element(&self.root, &mut out);
        out
    }
}

impl Element {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespaces: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Qualified name, e.g. `rect` or `svg:rect`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Attribute value by qualified name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// All attributes in source order.
    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    /// Overwrite an attribute in place, or append it when absent.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(a) => a.value = value,
            None => self.attrs.push(Attribute {
                name: name.to_owned(),
                value,
            }),
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let idx = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(idx).value)
    }

    /// Child nodes in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable child nodes.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Element children only.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Append a child node.
    pub fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Detach the child at `index`.
    pub fn remove_child(&mut self, index: usize) -> Option<Node> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Descendant elements (self excluded) with the given local name, in document order.
    pub fn descendants_named(&self, local: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_named(local, &mut out);
        out
    }

    fn collect_named<'a>(&'a self, local: &str, out: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.local_name() == local {
                out.push(child);
            }
            child.collect_named(local, out);
        }
    }
}

type Scope = Vec<(Option<String>, String)>;

fn convert_element(node: roxmltree::Node<'_, '_>, parent_scope: &Scope) -> Element {
    let scope: Scope = node
        .namespaces()
        .filter(|ns| ns.name() != Some("xml"))
        .map(|ns| (ns.name().map(str::to_owned), ns.uri().to_owned()))
        .collect();
    let namespaces = scope
        .iter()
        .filter(|ns| !parent_scope.contains(ns))
        .cloned()
        .collect();

    let tag = node.tag_name();
    let name = qualify(&scope, tag.namespace(), tag.name(), true);
    let attrs = node
        .attributes()
        .map(|a| Attribute {
            name: qualify(&scope, a.namespace(), a.name(), false),
            value: a.value().to_owned(),
        })
        .collect();

    let mut children = Vec::new();
    for child in node.children() {
        if child.is_element() {
            children.push(Node::Element(convert_element(child, &scope)));
        } else if child.is_text() {
            children.push(Node::Text(child.text().unwrap_or_default().to_owned()));
        } else if child.is_comment() {
            children.push(Node::Comment(child.text().unwrap_or_default().to_owned()));
        }
    }

    Element {
        name,
        namespaces,
        attrs,
        children,
    }
}

/// Element names may use the default namespace; attribute names need an explicit prefix.
fn qualify(scope: &Scope, uri: Option<&str>, local: &str, is_element: bool) -> String {
    let Some(uri) = uri else {
        return local.to_owned();
    };
    if uri == XML_NS {
        return format!("xml:{local}");
    }
    if is_element && scope.iter().any(|(p, u)| p.is_none() && u == uri) {
        return local.to_owned();
    }
    match scope.iter().find_map(|(p, u)| p.as_deref().filter(|_| u == uri)) {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_owned(),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.name);
    for (prefix, uri) in &el.namespaces {
        match prefix {
            Some(p) => out.push_str(&format!(" xmlns:{p}=\"")),
            None => out.push_str(" xmlns=\""),
        }
        escape_into(uri, true, out);
        out.push('"');
    }
    for a in &el.attrs {
        out.push(' ');
        out.push_str(&a.name);
        out.push_str("=\"");
        escape_into(&a.value, true, out);
        out.push('"');
    }

    if el.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in &el.children {
        match child {
            Node::Element(e) => write_element(e, out),
            Node::Text(t) => escape_into(t, false, out),
            Node::Comment(c) => {
                out.push_str("<!--");
                out.push_str(c);
                out.push_str("-->");
            }
        }
    }
    out.push_str("</");
    out.push_str(&el.name);
    out.push('>');
}

fn escape_into(text: &str, attr: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            '\n' if attr => out.push_str("&#10;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/svg/doc.rs"]
mod tests;
