//! Typed views of the catalog's metadata records.
//!
//! Only the fields the build manager consumes are modeled; unknown
//! fields in the live responses are ignored by serde.

use build_core::{TraitChoice, TraitTier};
use serde::{Deserialize, Serialize};

/// A profession record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionInfo {
    /// Catalog identifier (the profession's name key, e.g. `"Guardian"`).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Numeric profession code — the byte stored in build links.
    pub code: u8,

    /// Specialization ids available to this profession.
    #[serde(default)]
    pub specializations: Vec<u32>,
}

/// A specialization record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecializationInfo {
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Owning profession (name key).
    pub profession: String,

    /// Whether this is an elite specialization.
    #[serde(default)]
    pub elite: bool,

    /// Minor (automatic) trait ids, one per tier.
    #[serde(default)]
    pub minor_traits: Vec<u32>,

    /// Major (selectable) trait ids, three per tier in tier order.
    #[serde(default)]
    pub major_traits: Vec<u32>,
}

impl SpecializationInfo {
    /// Resolves a build's per-tier trait choice to a trait id.
    ///
    /// The catalog lists major traits three per tier in tier order, so
    /// choice `n` in tier `t` is entry `t * 3 + (n - 1)`. Returns `None`
    /// for an unselected tier or a malformed trait list.
    pub fn major_trait_id(&self, tier: TraitTier, choice: TraitChoice) -> Option<u32> {
        if choice.is_none() {
            return None;
        }
        let index = tier.index() * 3 + usize::from(choice.bits() - 1);
        self.major_traits.get(index).copied()
    }
}

/// Position of a trait within its specialization line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraitSlotKind {
    Major,
    Minor,
}

/// A trait record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitInfo {
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Tier the trait belongs to (1 = Adept .. 3 = Grandmaster).
    pub tier: u8,

    /// Whether the trait is selectable or automatic.
    pub slot: TraitSlotKind,
}

/// A skill record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillInfo {
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Skill bar slot the catalog assigns this skill, if any.
    #[serde(default)]
    pub slot: Option<String>,

    /// Professions that can equip the skill (name keys).
    #[serde(default)]
    pub professions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profession_parses_catalog_shape() {
        let json = r#"{
            "id": "Engineer",
            "name": "Engineer",
            "code": 3,
            "specializations": [6, 38, 47],
            "icon": "ignored.png"
        }"#;
        let profession: ProfessionInfo = serde_json::from_str(json).unwrap();
        assert_eq!(profession.code, 3);
        assert_eq!(profession.specializations, vec![6, 38, 47]);
    }

    #[test]
    fn major_trait_lookup_follows_tier_layout() {
        let spec: SpecializationInfo = serde_json::from_str(
            r#"{
                "id": 6,
                "name": "Explosives",
                "profession": "Engineer",
                "elite": false,
                "minor_traits": [514, 515, 516],
                "major_traits": [100, 101, 102, 200, 201, 202, 300, 301, 302]
            }"#,
        )
        .unwrap();

        assert_eq!(
            spec.major_trait_id(TraitTier::Adept, TraitChoice::Top),
            Some(100)
        );
        assert_eq!(
            spec.major_trait_id(TraitTier::Master, TraitChoice::Middle),
            Some(201)
        );
        assert_eq!(
            spec.major_trait_id(TraitTier::Grandmaster, TraitChoice::Bottom),
            Some(302)
        );
        assert_eq!(
            spec.major_trait_id(TraitTier::Adept, TraitChoice::None),
            None
        );
    }

    #[test]
    fn trait_slot_kind_parses() {
        let info: TraitInfo = serde_json::from_str(
            r#"{"id": 1010, "name": "Glass Cannon", "tier": 1, "slot": "Major"}"#,
        )
        .unwrap();
        assert_eq!(info.slot, TraitSlotKind::Major);
    }
}
