//! The shot deck: ordered marketing copy for each screenshot.
//!
//! A deck entry pairs a source screenshot with its slug, headline, subtitle,
//! and background gradient. The built-in deck covers the standard six-shot
//! App Store set; a custom deck can be loaded from a YAML file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ShotError};

use super::Colour;

/// Device categories the marketing pipeline knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Iphone,
    Ipad,
}

impl Device {
    /// All categories, in render order.
    pub const ALL: [Device; 2] = [Device::Iphone, Device::Ipad];

    /// Directory and filename key (`iphone`, `ipad`).
    pub fn key(self) -> &'static str {
        match self {
            Device::Iphone => "iphone",
            Device::Ipad => "ipad",
        }
    }

    /// Display label drawn on the slide.
    pub fn label(self) -> &'static str {
        match self {
            Device::Iphone => "iPhone",
            Device::Ipad => "iPad",
        }
    }
}

/// Top/bottom colours of a slide's background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GradientSpec {
    pub top: Colour,
    pub bottom: Colour,
}

/// One hand-authored deck entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShotDescriptor {
    /// Source key; the input file is `<device>-<source>.png`.
    pub source: String,
    /// Output slug; the artifact is `<NN>-<slug>.png`.
    pub slug: String,
    pub headline: String,
    pub subtitle: String,
    pub palette: GradientSpec,
}

/// The built-in six-shot deck.
pub fn builtin_deck() -> Vec<ShotDescriptor> {
    fn shot(
        source: &str,
        slug: &str,
        headline: &str,
        subtitle: &str,
        top: Colour,
        bottom: Colour,
    ) -> ShotDescriptor {
        ShotDescriptor {
            source: source.to_string(),
            slug: slug.to_string(),
            headline: headline.to_string(),
            subtitle: subtitle.to_string(),
            palette: GradientSpec { top, bottom },
        }
    }

    vec![
        shot(
            "screenshot-1-todos-list",
            "daily-focus",
            "Your chaos, sorted.",
            "Droll tasks, crisp priorities, zero drama.",
            Colour::rgb(27, 61, 95),
            Colour::rgb(57, 140, 192),
        ),
        shot(
            "screenshot-2-sign-in",
            "sync-anywhere",
            "Sign in. Sync everywhere.",
            "Same quirky tasks on every screen you own.",
            Colour::rgb(23, 89, 76),
            Colour::rgb(67, 170, 139),
        ),
        shot(
            "screenshot-3-task-edit",
            "task-detail-control",
            "Details without the detour.",
            "Dates, notes, priority, and category in one stop.",
            Colour::rgb(110, 47, 83),
            Colour::rgb(194, 91, 128),
        ),
        shot(
            "screenshot-4-category-view",
            "category-clarity",
            "Group by what matters.",
            "House. Finance. Tech. The usual suspects.",
            Colour::rgb(106, 71, 32),
            Colour::rgb(225, 140, 53),
        ),
        shot(
            "screenshot-5-appearance",
            "theme-personality",
            "Style that fits your mood.",
            "Pick a palette, keep your personality.",
            Colour::rgb(37, 73, 122),
            Colour::rgb(117, 169, 236),
        ),
        shot(
            "screenshot-6-priority-view",
            "priority-at-a-glance",
            "See urgency instantly.",
            "High first, deferred later, guilt optional.",
            Colour::rgb(95, 45, 27),
            Colour::rgb(196, 113, 78),
        ),
    ]
}

/// Load a deck from a YAML file.
///
/// The file is a sequence of descriptors; colours are hex strings:
///
/// ```yaml
/// - source: screenshot-1-todos-list
///   slug: daily-focus
///   headline: Your chaos, sorted.
///   subtitle: Droll tasks, crisp priorities, zero drama.
///   palette: { top: "#1B3D5F", bottom: "#398CC0" }
/// ```
pub fn load_deck(path: &Path) -> Result<Vec<ShotDescriptor>> {
    let source = fs::read_to_string(path).map_err(|e| ShotError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read deck file: {}", e),
    })?;

    let deck: Vec<ShotDescriptor> = serde_yaml::from_str(&source).map_err(|e| ShotError::Deck {
        message: format!("Invalid deck YAML in {}: {}", path.display(), e),
        help: Some("A deck is a YAML list of {source, slug, headline, subtitle, palette}".to_string()),
    })?;

    validate_deck(&deck)?;
    Ok(deck)
}

/// Check deck invariants: non-empty, unique slugs, unique sources.
pub fn validate_deck(deck: &[ShotDescriptor]) -> Result<()> {
    if deck.is_empty() {
        return Err(ShotError::Deck {
            message: "Deck contains no entries".to_string(),
            help: None,
        });
    }

    let mut slugs = HashSet::new();
    let mut sources = HashSet::new();
    for shot in deck {
        if !slugs.insert(shot.slug.as_str()) {
            return Err(ShotError::Deck {
                message: format!("Duplicate slug in deck: {}", shot.slug),
                help: Some("Slugs become output filenames and must be unique".to_string()),
            });
        }
        if !sources.insert(shot.source.as_str()) {
            return Err(ShotError::Deck {
                message: format!("Duplicate source in deck: {}", shot.source),
                help: None,
            });
        }
    }

    Ok(())
}
