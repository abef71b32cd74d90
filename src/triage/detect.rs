//! Content type detection from filesystem shape.

use super::patterns;
use crate::core::{ClassificationResult, ContentType, DetectionSignals};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Classify a resolved content root from its current on-disk contents.
///
/// A pure function of the directory tree at call time: identical trees
/// classify identically. Any I/O error while scanning degrades the result
/// to `Unknown` rather than failing the analysis.
pub fn classify(root: &Path) -> ClassificationResult {
    let content_type = match collect_signals(root) {
        Ok(signals) => decide_type(signals),
        Err(err) => {
            warn!(root = %root.display(), error = %err, "scan failed, classifying as Unknown");
            ContentType::Unknown
        }
    };
    debug!(root = %root.display(), %content_type, "classified content root");
    ClassificationResult {
        content_type,
        root: root.to_path_buf(),
    }
}

/// Apply the fixed decision order to a signal set. First match wins.
fn decide_type(signals: DetectionSignals) -> ContentType {
    if signals.has_install_marker && signals.has_archive_volumes {
        return ContentType::Repack;
    }
    if signals.has_asset_folders || signals.has_packed_data {
        return ContentType::Portable;
    }
    if signals.has_any_executable {
        // A lone installer without archive volumes still reads as a repack.
        return if signals.has_install_marker {
            ContentType::Repack
        } else {
            ContentType::Portable
        };
    }
    ContentType::Unknown
}

/// Evaluate every signal in one pass over the tree.
fn collect_signals(root: &Path) -> io::Result<DetectionSignals> {
    let mut signals = DetectionSignals::default();

    // Root level only: install markers, archive volumes, asset folders.
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            if patterns::is_asset_folder(&name) {
                signals.has_asset_folders = true;
            }
        } else if file_type.is_file() {
            if patterns::is_install_marker(&name) {
                signals.has_install_marker = true;
            }
            if patterns::has_archive_volume_ext(&name) {
                signals.has_archive_volumes = true;
            }
        }
    }

    // Whole tree: packed data containers and any executable.
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::other)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if let Some((_, ext)) = name.rsplit_once('.') {
            if patterns::is_packed_data_ext(ext) {
                signals.has_packed_data = true;
            }
            if ext.eq_ignore_ascii_case("exe") {
                signals.has_any_executable = true;
            }
        }
        if signals.has_packed_data && signals.has_any_executable {
            break;
        }
    }

    Ok(signals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn setup_plus_volumes_is_repack() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("setup.exe"));
        touch(&dir.path().join("disk1.bin"));
        let result = classify(dir.path());
        assert_eq!(result.content_type, ContentType::Repack);
        assert_eq!(result.root, dir.path());
    }

    #[test]
    fn asset_folder_wins_over_lone_installer() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("setup.exe"));
        fs::create_dir(dir.path().join("Textures")).unwrap();
        assert_eq!(classify(dir.path()).content_type, ContentType::Portable);
    }

    #[test]
    fn packed_data_anywhere_is_portable() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("deep/nested")).unwrap();
        touch(&dir.path().join("deep/nested/core.pak"));
        assert_eq!(classify(dir.path()).content_type, ContentType::Portable);
    }

    #[test]
    fn lone_installer_with_other_exe_is_repack() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("setup.exe"));
        touch(&dir.path().join("readme.txt"));
        assert_eq!(classify(dir.path()).content_type, ContentType::Repack);
    }

    #[test]
    fn plain_exe_is_portable() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Game.exe"));
        assert_eq!(classify(dir.path()).content_type, ContentType::Portable);
    }

    #[test]
    fn nothing_recognizable_is_unknown() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("readme.txt"));
        assert_eq!(classify(dir.path()).content_type, ContentType::Unknown);
    }

    #[test]
    fn missing_root_is_unknown() {
        let result = classify(Path::new("/no/such/root"));
        assert_eq!(result.content_type, ContentType::Unknown);
    }

    #[test]
    fn classification_is_repeatable() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Models")).unwrap();
        touch(&dir.path().join("Game.exe"));
        let first = classify(dir.path());
        let second = classify(dir.path());
        assert_eq!(first, second);
    }
}
