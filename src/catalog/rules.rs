//! Fixed lookup tables and filename conventions used while building the catalog.
//!
//! Every table is an ordered association list. Description lookup stops at
//! the first keyword found in the part id, so more specific keywords sit above
//! the general ones they contain. Image rules are all evaluated in order and
//! the last matching rule wins.

use crate::model::{ColorType, Part, SubPartMetadata};

pub const GENERIC_DESCRIPTION: &str = "Generic part.";

const DESCRIPTIONS: &[(&str, &str)] = &[
    ("archimedes-racing", "Switch to start the race."),
    (
        "archimedes-screw-lift-extension",
        "Up to 5 modular extensions can be added to each powered screw lift.",
    ),
    (
        "archimedes-screw-lift",
        "Return your marble to the top for an endless loop.",
    ),
    (
        "audio",
        "Record anything you want and it plays when the marble goes through the tunnel.",
    ),
    ("led", "Lights up when a marble hits it. How cool is that?"),
    ("stairs", "Every single step forward is important."),
    ("hill", "Journey over obstacles to reach your destination."),
    (
        "mini-straight",
        "A mini straight section to get your marble moving.",
    ),
    ("arm", "A simple arm to move your marble to the next section."),
    ("curve", "Gently redirect your marble to the next section."),
    ("mini-bend", "A smaller curve to get your marble moving."),
    (
        "switchback",
        "Sometimes going backwards is the best way to go forward.",
    ),
    ("switch", "Take a different path to your destination."),
    (
        "orbit",
        "Round and round we go until we run out of energy and move onto the next plane.",
    ),
    ("flex", "The perfect track section for free form design."),
    ("corner", "Go around corners with ease."),
    ("wheel", "Go round and round."),
    ("third-dimension", "Route around obstacles in 3D."),
    (
        "valley",
        "Whenever we go down, we always come out the other side.",
    ),
    ("double-back-flip", "Make it go upside down!"),
    ("manual-launcher", "Launch your marble manually."),
    (
        "flip-down-letters-letters",
        "A fun way to spell out your message.",
    ),
    (
        "flip-down-letters-letter-mechanism",
        "The mechanism that makes the letters flip down.",
    ),
    ("straight", "Key component to building larger tracks."),
    ("start", "The start of the track!"),
    (
        "overtaking",
        "Entering the overtaking maze in first place means very little.",
    ),
    ("zig-zag", "A zig-zag section to get your marble moving."),
];

/// How an override rule tests a part id.
#[derive(Debug, Clone, Copy)]
pub enum IdMatch {
    Exact(&'static str),
    Contains(&'static str),
    /// Contains the first needle but not the second.
    ContainsWithout(&'static str, &'static str),
}

impl IdMatch {
    #[must_use]
    pub fn matches(self, id: &str) -> bool {
        match self {
            Self::Exact(needle) => id == needle,
            Self::Contains(needle) => id.contains(needle),
            Self::ContainsWithout(needle, excluded) => {
                id.contains(needle) && !id.contains(excluded)
            }
        }
    }
}

const IMAGE_RULES: &[(IdMatch, &str)] = &[
    (IdMatch::Contains("mini-bend"), "curve"),
    (IdMatch::Contains("flip-down-letters"), "letters"),
    (IdMatch::Exact("orbit-right"), "orbit"),
    (IdMatch::Exact("orbit-left"), "orbit"),
    (IdMatch::Contains("orbit-return"), "orbit-return"),
    (
        IdMatch::Contains("archimedes-screw-lift-extension-left"),
        "archimedes-screw-lift-extension",
    ),
    (
        IdMatch::Contains("archimedes-screw-lift-extension-right"),
        "archimedes-screw-lift-extension",
    ),
    (
        IdMatch::ContainsWithout("archimedes-screw-lift", "extension"),
        "archimedes-screw-lift",
    ),
    (IdMatch::Contains("overtaking-section"), "overtaking-section"),
    (IdMatch::Contains("third-dimension"), "third-dimension"),
];

// (part id substring, dependency id)
const DEPENDENCY_RULES: &[(&str, &str)] = &[
    (
        "flip-down-letters-letters",
        "flip-down-letters-letter-mechanism",
    ),
    ("orbit-right", "orbit-return-right"),
    ("orbit-left", "orbit-return-left"),
    (
        "archimedes-screw-lift-extension-left",
        "archimedes-screw-lift-left",
    ),
    (
        "archimedes-screw-lift-extension-right",
        "archimedes-screw-lift-right",
    ),
];

/// Looks up the family description for a part id.
#[must_use]
pub fn describe(part_id: &str) -> &'static str {
    let id = part_id.to_lowercase();
    DESCRIPTIONS
        .iter()
        .find(|(keyword, _)| id.contains(keyword))
        .map_or(GENERIC_DESCRIPTION, |(_, description)| *description)
}

/// Resolves the image key for a part id. Defaults to the id itself.
#[must_use]
pub fn image_key(part_id: &str) -> &str {
    IMAGE_RULES
        .iter()
        .rev()
        .find(|(rule, _)| rule.matches(part_id))
        .map_or(part_id, |(_, image)| *image)
}

/// Adds the declared cross-part dependencies to a finished part list.
pub fn apply_dependencies(parts: &mut [Part]) {
    for part in parts {
        for (needle, dependency) in DEPENDENCY_RULES {
            if part.id.contains(needle) && part.id != *dependency {
                part.add_dependency(dependency);
            }
        }
    }
}

/// Infers print settings from a sub-part file name.
#[must_use]
pub fn parse_file_name(file_name: &str) -> SubPartMetadata {
    let lower = file_name.to_lowercase();
    let mut metadata = SubPartMetadata::default();

    // Case-sensitive and unanchored: "plate-Brim.stl" is colour B as well.
    if file_name.contains("-B") {
        metadata.color_type = ColorType::B;
    }
    metadata.support = lower.contains("support");
    metadata.brim = lower.contains("brim");
    metadata.optional = lower.contains("optional");
    if let Some(percent) = infill_percent(&lower) {
        metadata.infill = format!("{percent}%");
    }

    metadata
}

fn infill_percent(lower: &str) -> Option<String> {
    const MARKER: &str = "infill";
    let is_separator = |c: char| matches!(c, '-' | '_' | ' ');

    let pos = lower.find(MARKER)?;

    let after = lower[pos + MARKER.len()..].trim_start_matches(is_separator);
    let digits: String = after.chars().take_while(char::is_ascii_digit).collect();
    if !digits.is_empty() {
        return Some(digits);
    }

    let before = lower[..pos].trim_end_matches(is_separator);
    let mut digits: Vec<char> = before
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .collect();
    if !digits.is_empty() {
        digits.reverse();
        return Some(digits.into_iter().collect());
    }

    let first_run: String = lower
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    (!first_run.is_empty()).then_some(first_run)
}
