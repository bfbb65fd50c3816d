use crate::error::{ConversionError, Result};
use crate::utils::constants::{KML_EXTENSION, KMZ_EXTENSION, KMZ_ROOT_DOCUMENT};
use encoding_rs::{Encoding, UTF_8};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};
use zip::ZipArchive;

/// Loads KML text from `.kml` files and `.kmz` archives.
pub struct KmlReader;

impl KmlReader {
    /// Read the KML document behind `path`, unpacking KMZ archives.
    pub fn read_path(path: &Path) -> Result<String> {
        if Self::is_kmz(path) {
            Self::read_kmz(path)
        } else {
            let bytes = std::fs::read(path)?;
            debug!("Read {} bytes from {}", bytes.len(), path.display());
            Ok(Self::decode(&bytes))
        }
    }

    /// Extract the main KML document of a KMZ archive.
    ///
    /// `doc.kml` at the archive root wins; otherwise the first `.kml` entry
    /// in archive order is used.
    pub fn read_kmz(path: &Path) -> Result<String> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;

        let mut entries = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            entries.push(archive.by_index(index)?.name().to_string());
        }

        let entry = entries
            .iter()
            .find(|name| name.as_str() == KMZ_ROOT_DOCUMENT)
            .or_else(|| entries.iter().find(|name| has_extension(name, KML_EXTENSION)))
            .ok_or_else(|| {
                ConversionError::InvalidInput(format!(
                    "KMZ archive {} does not contain a KML document",
                    path.display()
                ))
            })?;

        if entry != KMZ_ROOT_DOCUMENT {
            warn!(
                "{} has no {}, using {}",
                path.display(),
                KMZ_ROOT_DOCUMENT,
                entry
            );
        }

        let mut bytes = Vec::new();
        archive.by_name(entry)?.read_to_end(&mut bytes)?;
        debug!("Extracted {} ({} bytes) from {}", entry, bytes.len(), path.display());

        Ok(Self::decode(&bytes))
    }

    /// Decode raw document bytes.
    ///
    /// A byte order mark selects UTF-8 or UTF-16 and is stripped; without
    /// one the bytes are taken as UTF-8. Invalid sequences become U+FFFD.
    pub fn decode(bytes: &[u8]) -> String {
        let (encoding, bom_length) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
        if had_errors {
            warn!("Input contains invalid {} sequences", encoding.name());
        }
        text.into_owned()
    }

    pub fn is_kmz(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(KMZ_EXTENSION))
    }

    /// Whether `path` looks like something this reader understands
    pub fn is_supported(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                ext.eq_ignore_ascii_case(KML_EXTENSION) || ext.eq_ignore_ascii_case(KMZ_EXTENSION)
            })
    }
}

fn has_extension(name: &str, extension: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
