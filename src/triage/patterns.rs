//! Fixed pattern tables used by detection, enumeration, and scoring.
//!
//! All matching is case-insensitive. The tables are deliberately static:
//! the heuristic is a flat rule set, not a learned model, and changing a
//! table is a code change reviewed like any other.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;

/// Root-level executables that mark installer content.
pub const INSTALL_MARKER_NAMES: &[&str] = &["setup.exe", "install.exe"];

/// `setup<anything>.exe`, the common pattern for repack installers.
pub static SETUP_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^setup.*\.exe$").expect("setup name regex"));

/// Extensions of split-archive installer volumes.
pub const ARCHIVE_VOLUME_EXTS: &[&str] = &["bin", "rar", "r00"];

/// Folder-name keywords typical of an unpacked game tree.
pub const ASSET_FOLDER_KEYWORDS: &[&str] = &[
    "textures",
    "models",
    "levels",
    "maps",
    "sounds",
    "music",
    "shaders",
    "assets",
    "data",
    "localization",
    "movies",
    "sfx",
];

static ASSET_FOLDER_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(ASSET_FOLDER_KEYWORDS)
        .expect("asset folder matcher")
});

/// Extensions of packed game-data containers.
pub const PACKED_DATA_EXTS: &[&str] = &[
    "pak", "bundle", "vpk", "pck", "bsa", "big", "wad", "arc", "assets", "unity3d", "forge",
];

/// Name substrings that disqualify an executable from candidacy:
/// uninstallers, installers, config utilities, redistributable installers,
/// crash reporters, updaters and patchers.
pub const CANDIDATE_DENYLIST: &[&str] = &[
    "unins",
    "uninst",
    "remove",
    "setup",
    "install",
    "config",
    "settings",
    "redist",
    "vcredist",
    "dxsetup",
    "directx",
    "dotnet",
    "crash",
    "report",
    "error",
    "updater",
    "update",
    "patcher",
    "patch",
    "cleanup",
    "helper",
    "register",
    "activat",
];

static DENYLIST_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(CANDIDATE_DENYLIST)
        .expect("denylist matcher")
});

/// Publisher strings of studios/publishers that ship games.
pub const KNOWN_GAME_PUBLISHERS: &[&str] = &[
    "valve",
    "ubisoft",
    "electronic arts",
    "ea games",
    "bethesda",
    "cd projekt",
    "rockstar",
    "square enix",
    "sega",
    "capcom",
    "activision",
    "blizzard",
    "konami",
    "bandai namco",
    "thq",
    "paradox",
    "devolver",
    "focus entertainment",
    "505 games",
    "deep silver",
    "warner bros",
    "2k",
];

static GAME_PUBLISHER_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(KNOWN_GAME_PUBLISHERS)
        .expect("game publisher matcher")
});

/// Publisher strings of installer-authoring toolchains; an executable
/// carrying one of these is an installer, not a game.
pub const INSTALLER_TOOL_PUBLISHERS: &[&str] = &[
    "inno setup",
    "jrsoftware",
    "nullsoft",
    "nsis",
    "installshield",
    "flexera",
    "wise solutions",
    "caphyon",
    "advanced installer",
    "wix",
    "clickteam",
];

static INSTALLER_TOOL_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(INSTALLER_TOOL_PUBLISHERS)
        .expect("installer tool matcher")
});

/// Description words that give away installer/maintenance binaries.
pub const INSTALLER_DESCRIPTION_WORDS: &[&str] = &["setup", "install", "uninstall"];

static INSTALLER_DESCRIPTION_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(INSTALLER_DESCRIPTION_WORDS)
        .expect("installer description matcher")
});

/// Sibling file-name prefixes of store/runtime API libraries.
pub const RUNTIME_DLL_PREFIXES: &[&str] = &["steam_api", "steamclient", "galaxy", "eossdk"];

/// Sibling file-name substrings of 3D graphics API libraries.
pub const GFX_DLL_MARKERS: &[&str] = &["d3d", "dxgi", "opengl32", "vulkan-1"];

/// Broader game-engine and middleware markers.
pub const ENGINE_DLL_MARKERS: &[&str] = &[
    "unity", "unreal", "ue4", "cryengine", "godot", "fmod", "physx", "openal", "mono", "havok",
];

/// Whether a root-level file name marks installer content.
pub fn is_install_marker(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    INSTALL_MARKER_NAMES.contains(&lower.as_str()) || SETUP_NAME_RE.is_match(&lower)
}

/// Whether a file name carries a split-archive volume extension.
pub fn has_archive_volume_ext(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ARCHIVE_VOLUME_EXTS
            .iter()
            .any(|e| ext.eq_ignore_ascii_case(e)),
        None => false,
    }
}

/// Whether an extension (without dot) is a packed game-data container.
pub fn is_packed_data_ext(ext: &str) -> bool {
    PACKED_DATA_EXTS.iter().any(|e| ext.eq_ignore_ascii_case(e))
}

/// Whether a folder name contains a game-asset keyword.
pub fn is_asset_folder(folder_name: &str) -> bool {
    ASSET_FOLDER_MATCHER.is_match(folder_name)
}

/// Whether a file name contains a denylisted substring.
pub fn is_denylisted(file_name: &str) -> bool {
    DENYLIST_MATCHER.is_match(file_name)
}

/// Whether a publisher string belongs to a known game publisher.
pub fn is_known_game_publisher(publisher: &str) -> bool {
    GAME_PUBLISHER_MATCHER.is_match(publisher)
}

/// Whether a publisher string belongs to an installer-authoring tool.
pub fn is_installer_tool(publisher: &str) -> bool {
    INSTALLER_TOOL_MATCHER.is_match(publisher)
}

/// Whether a description mentions setup/install/uninstall.
pub fn description_mentions_installer(description: &str) -> bool {
    INSTALLER_DESCRIPTION_MATCHER.is_match(description)
}

/// Whether a sibling file name starts with a runtime API prefix.
pub fn is_runtime_library(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    RUNTIME_DLL_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Whether a sibling file name contains a 3D graphics API marker.
pub fn is_gfx_library(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    GFX_DLL_MARKERS.iter().any(|m| lower.contains(m))
}

/// Whether a sibling file name matches the broader engine marker list.
pub fn is_engine_library(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    ENGINE_DLL_MARKERS.iter().any(|m| lower.contains(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_markers() {
        assert!(is_install_marker("Setup.exe"));
        assert!(is_install_marker("INSTALL.EXE"));
        assert!(is_install_marker("setup_v2.exe"));
        assert!(is_install_marker("setup-part1.exe"));
        assert!(!is_install_marker("game.exe"));
        assert!(!is_install_marker("presetup.exe"));
    }

    #[test]
    fn archive_volumes() {
        assert!(has_archive_volume_ext("disk1.bin"));
        assert!(has_archive_volume_ext("data.RAR"));
        assert!(has_archive_volume_ext("data.r00"));
        assert!(!has_archive_volume_ext("data.r01"));
        assert!(!has_archive_volume_ext("readme"));
    }

    #[test]
    fn denylist_hits() {
        for name in [
            "Uninstall.exe",
            "unins000.exe",
            "DXSETUP.exe",
            "vcredist_x64.exe",
            "CrashReporter.exe",
            "UpdaterService.exe",
            "ConfigTool.exe",
            "GameHelper.exe",
        ] {
            assert!(is_denylisted(name), "{name} should be denylisted");
        }
        for name in ["Game.exe", "Launcher.exe", "Witcher3.exe"] {
            assert!(!is_denylisted(name), "{name} should pass");
        }
    }

    #[test]
    fn publisher_tables() {
        assert!(is_known_game_publisher("CD PROJEKT RED"));
        assert!(is_known_game_publisher("Valve Corporation"));
        assert!(!is_known_game_publisher("Contoso Ltd"));
        assert!(is_installer_tool("Jordan Russell (Inno Setup)"));
        assert!(is_installer_tool("Nullsoft Install System"));
        assert!(!is_installer_tool("Valve Corporation"));
    }

    #[test]
    fn sibling_library_markers() {
        assert!(is_runtime_library("steam_api64.dll"));
        assert!(is_gfx_library("D3DCompiler_47.dll"));
        assert!(is_engine_library("UnityPlayer.dll"));
        assert!(!is_runtime_library("game.dll"));
    }

    #[test]
    fn asset_folders_and_packed_exts() {
        assert!(is_asset_folder("Textures"));
        assert!(is_asset_folder("GameData"));
        assert!(!is_asset_folder("bin64"));
        assert!(is_packed_data_ext("pak"));
        assert!(is_packed_data_ext("Bundle"));
        assert!(!is_packed_data_ext("txt"));
    }
}
