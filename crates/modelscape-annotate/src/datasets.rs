//! Known training-dataset names in free-form `data_sources` text.

use std::cmp::Reverse;

use modelscape_types::has_value;

/// Dataset and embodiment names recognised in data-source descriptions.
/// Aliases are listed next to each other; extraction keeps whichever is
/// longest in the text.
pub const KNOWN_DATASETS: &[&str] = &[
    "Open X-Embodiment",
    "OXE",
    "Open-X",
    "DROID",
    "BridgeData",
    "BridgeData V2",
    "Bridge V2",
    "Bridge",
    "RoboSet",
    "RoboMimic",
    "MimicGen",
    "DexMimicGen",
    "RH20T",
    "LIBERO",
    "RoboCasa",
    "Ego4D",
    "Something-Something",
    "Something Something",
    "Kinetics",
    "Epic-Kitchens",
    "EPIC-KITCHENS",
    "RoboTurk",
    "RoboNet",
    "BC-Z",
    "Language Table",
    "CALVIN",
    "MetaWorld",
    "RLBench",
    "Franka Kitchen",
    "ALOHA",
    "Mobile ALOHA",
    "RT-1",
    "RT-2",
    "Google Robot",
    "UR5",
    "Franka",
    "xArm",
    "Sawyer",
    "Kuka",
    "HumanoidBench",
    "DexArt",
    "Maniskill",
    "ManiSkill",
    "Isaac",
    "Isaac Gym",
    "IsaacGym",
    "Habitat",
    "AI2-THOR",
    "Ravens",
    "CLIPort",
];

/// Known dataset names occurring in `text`, longest first.
///
/// Matching is a case-insensitive substring test, not word-bounded. A name
/// that contains, or is contained in, one already found is skipped, so
/// `"BridgeData V2"` suppresses `"Bridge"` and only one spelling of
/// `"ManiSkill"` is reported.
pub fn extract_datasets(text: &str) -> Vec<&'static str> {
    if !has_value(text) {
        return Vec::new();
    }
    let haystack = text.to_lowercase();

    let mut names: Vec<&'static str> = KNOWN_DATASETS.to_vec();
    names.sort_by_key(|name| Reverse(name.chars().count()));

    let mut found: Vec<&'static str> = Vec::new();
    let mut found_lower: Vec<String> = Vec::new();
    for name in names {
        let lower = name.to_lowercase();
        if !haystack.contains(&lower) {
            continue;
        }
        let duplicate = found_lower
            .iter()
            .any(|f| f.contains(&lower) || lower.contains(f.as_str()));
        if !duplicate {
            found.push(name);
            found_lower.push(lower);
        }
    }
    found
}
