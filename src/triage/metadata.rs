//! Binary product-metadata capability.
//!
//! Reading embedded version information is platform-format-specific, so the
//! scorer only sees the `MetadataReader` trait; the production reader parses
//! PE version resources via `pelite`, and tests substitute fakes.

use crate::core::BinaryMetadata;
use std::path::Path;
use tracing::trace;

/// Best-effort access to an executable's embedded product strings.
///
/// Implementations must treat every failure as `None`; metadata is a
/// scoring bonus, never a requirement.
pub trait MetadataReader: Send + Sync {
    fn read(&self, path: &Path) -> Option<BinaryMetadata>;
}

/// Reader that never yields metadata. Useful on platforms without PE
/// support and as a baseline in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMetadataReader;

impl MetadataReader for NullMetadataReader {
    fn read(&self, _path: &Path) -> Option<BinaryMetadata> {
        None
    }
}

/// Production reader for PE32/PE32+ version-info resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeMetadataReader;

impl MetadataReader for PeMetadataReader {
    fn read(&self, path: &Path) -> Option<BinaryMetadata> {
        let map = pelite::FileMap::open(path).ok()?;
        // pelite can panic on malformed inputs; contain that so a corrupt
        // binary only costs this factor its points.
        let data: &[u8] = map.as_ref();
        let meta = std::panic::catch_unwind(move || read_version_info(data))
            .ok()
            .flatten();
        trace!(path = %path.display(), found = meta.is_some(), "read binary metadata");
        meta
    }
}

fn read_version_info(data: &[u8]) -> Option<BinaryMetadata> {
    let file = pelite::PeFile::from_bytes(data).ok()?;
    let resources = file.resources().ok()?;
    let version = resources.version_info().ok()?;
    let lang = version.translation().first().copied()?;
    let value = |key: &str| {
        version
            .value(lang, key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let meta = BinaryMetadata {
        product_name: value("ProductName"),
        description: value("FileDescription"),
        publisher: value("CompanyName"),
    };
    if meta.is_empty() {
        None
    } else {
        Some(meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn null_reader_reads_nothing() {
        assert!(NullMetadataReader.read(Path::new("/any")).is_none());
    }

    #[test]
    fn pe_reader_tolerates_missing_file() {
        assert!(PeMetadataReader.read(Path::new("/no/such.exe")).is_none());
    }

    #[test]
    fn pe_reader_tolerates_non_pe_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fake.exe");
        let mut f = File::create(&path).unwrap();
        f.write_all(b"this is not a portable executable").unwrap();
        assert!(PeMetadataReader.read(&path).is_none());
    }
}
