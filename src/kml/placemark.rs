use crate::kml::document::{KmlDocument, NodeId};
use crate::utils::constants::{
    COORDINATES_TAG, DESCRIPTION_TAG, NAME_TAG, PLACEMARK_TAG, POINT_TAG,
};

/// Borrowed view of a `<Placemark>` element.
#[derive(Debug, Clone, Copy)]
pub struct Placemark<'a> {
    document: &'a KmlDocument,
    node: NodeId,
}

impl<'a> Placemark<'a> {
    /// Wrap `node` if it is a placemark element.
    pub fn new(document: &'a KmlDocument, node: NodeId) -> Option<Self> {
        (document.tag(node) == PLACEMARK_TAG).then_some(Self { document, node })
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn document(&self) -> &'a KmlDocument {
        self.document
    }

    /// Text of the first `<name>` anywhere below the placemark, untrimmed.
    pub fn name(&self) -> Option<String> {
        self.field(NAME_TAG)
    }

    /// Text of the first `<description>` anywhere below the placemark, untrimmed.
    pub fn description(&self) -> Option<String> {
        self.field(DESCRIPTION_TAG)
    }

    /// Text of the first `<coordinates>` that sits inside a `<Point>` of
    /// this placemark.
    pub fn coordinates(&self) -> Option<String> {
        let doc = self.document;
        doc.descendants(self.node)
            .filter(|&node| doc.tag(node) == COORDINATES_TAG)
            .find(|&node| {
                doc.ancestors(node)
                    .take_while(|&ancestor| ancestor != self.node)
                    .any(|ancestor| doc.tag(ancestor) == POINT_TAG)
            })
            .map(|node| doc.text_content(node))
    }

    fn field(&self, tag: &str) -> Option<String> {
        self.document
            .find_first(self.node, tag)
            .map(|node| self.document.text_content(node))
    }
}
