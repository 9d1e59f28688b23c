//! Read-only name lookup capability.
//!
//! The codec and the front end never talk to the network directly; they
//! consume a [`NameOracle`] that answers "what is this id called" and
//! nothing else. [`CatalogIndex`] is the in-memory implementation,
//! hydrated from client responses (or filled by hand in tests).

use std::collections::HashMap;

use crate::types::{ProfessionInfo, SkillInfo, SpecializationInfo, TraitInfo};

/// Metadata categories the catalog can name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    Profession,
    Specialization,
    Trait,
    Skill,
}

/// Read-only id-to-name lookup.
///
/// Decode/encode correctness never depends on an oracle being
/// available; it only annotates ids for display.
pub trait NameOracle {
    /// Returns the display name for an id, if known.
    fn lookup(&self, category: Category, id: u32) -> Option<&str>;
}

/// In-memory name index over all categories.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    names: HashMap<(Category, u32), String>,
}

impl CatalogIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single name.
    pub fn insert(&mut self, category: Category, id: u32, name: impl Into<String>) {
        self.names.insert((category, id), name.into());
    }

    /// Indexes professions by their numeric build-link code.
    pub fn add_professions(&mut self, professions: &[ProfessionInfo]) {
        for profession in professions {
            self.insert(
                Category::Profession,
                u32::from(profession.code),
                profession.name.clone(),
            );
        }
    }

    /// Indexes specializations by id.
    pub fn add_specializations(&mut self, specializations: &[SpecializationInfo]) {
        for specialization in specializations {
            self.insert(
                Category::Specialization,
                specialization.id,
                specialization.name.clone(),
            );
        }
    }

    /// Indexes traits by id.
    pub fn add_traits(&mut self, traits: &[TraitInfo]) {
        for info in traits {
            self.insert(Category::Trait, info.id, info.name.clone());
        }
    }

    /// Indexes skills by id.
    pub fn add_skills(&mut self, skills: &[SkillInfo]) {
        for skill in skills {
            self.insert(Category::Skill, skill.id, skill.name.clone());
        }
    }

    /// Number of names indexed.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing has been indexed yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameOracle for CatalogIndex {
    fn lookup(&self, category: Category, id: u32) -> Option<&str> {
        self.names.get(&(category, id)).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        let mut index = CatalogIndex::new();
        index.insert(Category::Profession, 3, "Engineer");
        index.insert(Category::Skill, 5503, "Med Kit");

        assert_eq!(index.lookup(Category::Profession, 3), Some("Engineer"));
        assert_eq!(index.lookup(Category::Skill, 5503), Some("Med Kit"));
        // Same id under a different category is a distinct key.
        assert_eq!(index.lookup(Category::Trait, 5503), None);
        assert_eq!(index.lookup(Category::Profession, 4), None);
    }

    #[test]
    fn professions_are_keyed_by_code() {
        let professions = vec![ProfessionInfo {
            id: "Engineer".to_owned(),
            name: "Engineer".to_owned(),
            code: 3,
            specializations: vec![6],
        }];

        let mut index = CatalogIndex::new();
        index.add_professions(&professions);
        assert_eq!(index.lookup(Category::Profession, 3), Some("Engineer"));
        assert!(index.lookup(Category::Profession, 0).is_none());
    }
}
