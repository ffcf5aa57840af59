//! Badge feed loader.

use std::path::Path;

use progression_core::{Badge, BadgeId, BadgeKind, BadgeRequirement, Rarity};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Raw wire form of one badge definition.
///
/// Rarity and requirement fields are decorative or optional upstream, so
/// nothing here is rejected: unknowns degrade to defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBadge {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rarity: Option<String>,
    /// Requirement counter name, e.g. `XP_MILESTONE` or `lesson_completion`.
    #[serde(default)]
    pub badge_type: Option<String>,
    #[serde(default)]
    pub required_value: Option<u64>,
}

impl RawBadge {
    /// Convert into a core badge, defaulting everything decorative.
    pub fn into_badge(self) -> Badge {
        let requirement = match (self.badge_type.as_deref(), self.required_value) {
            (Some(kind), Some(required)) => kind
                .trim()
                .parse::<BadgeKind>()
                .ok()
                .map(|kind| BadgeRequirement { kind, required }),
            _ => None,
        };

        Badge {
            id: BadgeId(self.id),
            name: self.name,
            description: self.description,
            rarity: Rarity::classify(self.rarity.as_deref()),
            requirement,
        }
    }
}

/// Loader for the badge feed.
pub struct BadgesLoader;

impl BadgesLoader {
    /// Decode a badge list payload, preserving feed order.
    pub fn from_json(json: &str) -> LoadResult<Vec<Badge>> {
        let raw: Vec<RawBadge> = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to parse badges JSON: {}", e))?;
        Ok(raw.into_iter().map(RawBadge::into_badge).collect())
    }

    /// Load a badge list payload from a file.
    pub fn load(path: &Path) -> LoadResult<Vec<Badge>> {
        Self::from_json(&read_file(path)?)
    }
}
