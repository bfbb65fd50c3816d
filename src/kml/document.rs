use crate::error::{ConversionError, Result};
use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;
use std::fmt;
use std::ops::Range;

/// Index of an element inside a [`KmlDocument`].
///
/// Ids are handed out in document order, so comparing two ids compares
/// their position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
enum Content {
    Element(NodeId),
    Text(String),
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    parent: Option<NodeId>,
    content: Vec<Content>,
    // One past the last descendant id; descendants occupy `id + 1..subtree_end`.
    subtree_end: usize,
}

/// Read-only element tree of a parsed KML document.
///
/// Elements live in a flat arena in pre-order, each with a link to its
/// parent. Tag names are stored without their namespace prefix, so
/// `<kml:Placemark>` and `<Placemark>` are the same tag.
#[derive(Debug, Clone)]
pub struct KmlDocument {
    nodes: Vec<Element>,
    root: NodeId,
}

impl KmlDocument {
    /// Parse a complete KML document held in memory.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        // Whitespace is kept: text content is reported verbatim and callers trim.
        reader.config_mut().trim_text(false);

        let mut builder = TreeBuilder::default();

        loop {
            match reader.read_event()? {
                XmlEvent::Start(e) => builder.open(&e)?,
                XmlEvent::Empty(e) => {
                    builder.open(&e)?;
                    builder.close()?;
                }
                XmlEvent::End(_) => builder.close()?,
                XmlEvent::Text(e) => {
                    let text = e.unescape()?;
                    builder.text(&text)?;
                }
                XmlEvent::CData(e) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    builder.text(&text)?;
                }
                XmlEvent::Eof => break,
                _ => {}
            }
        }

        builder.finish()
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Local tag name of an element.
    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Walk from the parent of `id` up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&node| self.parent(node))
    }

    /// Direct child elements, in document order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id.0].content.iter().filter_map(|c| match c {
            Content::Element(child) => Some(*child),
            Content::Text(_) => None,
        })
    }

    /// First direct child with the given tag. Does not recurse.
    pub fn child_by_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.children(id).find(|&child| self.tag(child) == tag)
    }

    /// All descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        self.descendant_range(id).map(NodeId)
    }

    /// First descendant with the given tag, in document order.
    pub fn find_first(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(id).find(|&node| self.tag(node) == tag)
    }

    /// Every element in the document with the given tag, in document order.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(move |&node| self.tag(node) == tag)
    }

    /// Whether `ancestor` is a proper ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.descendant_range(ancestor).contains(&id.0)
    }

    /// Concatenated text and CDATA of the element and all of its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack: Vec<&Content> = self.nodes[id.0].content.iter().rev().collect();

        while let Some(content) = stack.pop() {
            match content {
                Content::Text(text) => out.push_str(text),
                Content::Element(child) => {
                    stack.extend(self.nodes[child.0].content.iter().rev());
                }
            }
        }

        out
    }

    fn descendant_range(&self, id: NodeId) -> Range<usize> {
        id.0 + 1..self.nodes[id.0].subtree_end
    }
}

#[derive(Default)]
struct TreeBuilder {
    nodes: Vec<Element>,
    open: Vec<NodeId>,
    root: Option<NodeId>,
}

impl TreeBuilder {
    fn open(&mut self, start: &BytesStart<'_>) -> Result<()> {
        for attr in start.attributes() {
            attr.map_err(|e| ConversionError::MalformedDocument(e.to_string()))?;
        }

        let tag = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let id = NodeId(self.nodes.len());
        let parent = self.open.last().copied();

        match parent {
            Some(parent) => self.nodes[parent.0].content.push(Content::Element(id)),
            None if self.root.is_some() => {
                return Err(ConversionError::MalformedDocument(format!(
                    "unexpected second root element <{}>",
                    tag
                )));
            }
            None => self.root = Some(id),
        }

        self.nodes.push(Element {
            tag,
            parent,
            content: Vec::new(),
            subtree_end: id.0 + 1,
        });
        self.open.push(id);

        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let id = self.open.pop().ok_or_else(|| {
            ConversionError::MalformedDocument("closing tag without matching opening tag".into())
        })?;
        self.nodes[id.0].subtree_end = self.nodes.len();
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        match self.open.last() {
            Some(current) => {
                self.nodes[current.0]
                    .content
                    .push(Content::Text(text.to_string()));
                Ok(())
            }
            None if text.trim().is_empty() => Ok(()),
            None => Err(ConversionError::MalformedDocument(
                "text content outside the root element".into(),
            )),
        }
    }

    fn finish(self) -> Result<KmlDocument> {
        if let Some(unclosed) = self.open.last() {
            return Err(ConversionError::MalformedDocument(format!(
                "element <{}> is never closed",
                self.nodes[unclosed.0].tag
            )));
        }

        let root = self.root.ok_or_else(|| {
            ConversionError::MalformedDocument("document has no root element".into())
        })?;

        Ok(KmlDocument {
            nodes: self.nodes,
            root,
        })
    }
}
