use crate::kml::document::{KmlDocument, NodeId};
use crate::kml::placemark::Placemark;
use crate::utils::constants::{DEFAULT_EXCLUDED_FOLDER, FOLDER_TAG, NAME_TAG, PLACEMARK_TAG};
use tracing::debug;

/// Iterator over the placemarks of a document, in document order, that are
/// not nested inside the excluded folder.
///
/// A traversal is single-use; create a new one for each pass.
pub struct PlacemarkTraversal<'a> {
    document: &'a KmlDocument,
    excluded_folder: &'a str,
    candidates: std::vec::IntoIter<NodeId>,
    excluded: usize,
}

impl<'a> PlacemarkTraversal<'a> {
    pub fn new(document: &'a KmlDocument) -> Self {
        Self::with_excluded_folder(document, DEFAULT_EXCLUDED_FOLDER)
    }

    pub fn with_excluded_folder(document: &'a KmlDocument, excluded_folder: &'a str) -> Self {
        let candidates: Vec<NodeId> = document.find_all(PLACEMARK_TAG).collect();
        Self {
            document,
            excluded_folder,
            candidates: candidates.into_iter(),
            excluded: 0,
        }
    }

    /// Placemarks skipped by the folder rule so far.
    pub fn excluded(&self) -> usize {
        self.excluded
    }
}

impl<'a> Iterator for PlacemarkTraversal<'a> {
    type Item = Placemark<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for node in self.candidates.by_ref() {
            if is_in_excluded_folder(self.document, node, self.excluded_folder) {
                debug!(
                    "Skipping placemark {} inside folder '{}'",
                    node, self.excluded_folder
                );
                self.excluded += 1;
                continue;
            }
            return Placemark::new(self.document, node);
        }
        None
    }
}

/// Whether any ancestor of `node` is a `<Folder>` whose own `<name>` child
/// reads exactly `folder_name` once trimmed.
pub fn is_in_excluded_folder(document: &KmlDocument, node: NodeId, folder_name: &str) -> bool {
    document
        .ancestors(node)
        .filter(|&ancestor| document.tag(ancestor) == FOLDER_TAG)
        .any(|folder| {
            document
                .child_by_tag(folder, NAME_TAG)
                .is_some_and(|name| document.text_content(name).trim() == folder_name)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: &str = r#"<kml><Document>
        <Placemark><name>Root</name></Placemark>
        <Folder>
            <name> Waypoints </name>
            <Placemark><name>Hidden</name></Placemark>
            <Folder>
                <name>Inner</name>
                <Placemark><name>Deep</name></Placemark>
            </Folder>
        </Folder>
        <Folder>
            <name>Route</name>
            <Placemark><name>Kept</name></Placemark>
            <Placemark><name>Waypoints</name></Placemark>
        </Folder>
        <Folder>
            <Document><name>Waypoints</name></Document>
            <Placemark><name>NotDirectName</name></Placemark>
        </Folder>
        <Folder><name>waypoints</name><Placemark><name>Lowercase</name></Placemark></Folder>
    </Document></kml>"#;

    fn names(traversal: PlacemarkTraversal<'_>) -> Vec<String> {
        traversal
            .map(|p| p.name().unwrap_or_default().trim().to_string())
            .collect()
    }

    #[test]
    fn test_excludes_placemarks_at_any_depth() {
        let doc = KmlDocument::parse(NESTED).unwrap();
        assert_eq!(
            names(PlacemarkTraversal::new(&doc)),
            vec!["Root", "Kept", "Waypoints", "NotDirectName", "Lowercase"]
        );
    }

    #[test]
    fn test_custom_excluded_folder() {
        let doc = KmlDocument::parse(NESTED).unwrap();
        assert_eq!(
            names(PlacemarkTraversal::with_excluded_folder(&doc, "Route")),
            vec!["Root", "Hidden", "Deep", "NotDirectName", "Lowercase"]
        );
    }

    #[test]
    fn test_root_placemark_is_never_excluded() {
        let doc = KmlDocument::parse("<Placemark><name>Waypoints</name></Placemark>").unwrap();
        assert!(!is_in_excluded_folder(&doc, doc.root(), "Waypoints"));
        assert_eq!(PlacemarkTraversal::new(&doc).count(), 1);
    }

    #[test]
    fn test_traversal_is_fresh_per_call() {
        let doc = KmlDocument::parse(NESTED).unwrap();
        let mut first = PlacemarkTraversal::new(&doc);
        assert!(first.next().is_some());
        assert_eq!(first.count(), 4);
        assert_eq!(PlacemarkTraversal::new(&doc).count(), 5);
    }

    #[test]
    fn test_counts_excluded_placemarks() {
        let doc = KmlDocument::parse(NESTED).unwrap();
        let mut traversal = PlacemarkTraversal::new(&doc);
        assert_eq!(traversal.by_ref().count(), 5);
        assert_eq!(traversal.excluded(), 2);
    }
}
