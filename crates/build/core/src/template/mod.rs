//! The in-memory build model.
//!
//! A [`BuildTemplate`] is either filled incrementally from user input
//! (starting from [`BuildTemplate::new`]) or produced atomically by one
//! decode call. Structural invariants (empty slots carry no traits) are
//! enforced at construction time; semantic validity against the catalog
//! (recognized profession code) is a separate, layered check via
//! [`BuildTemplate::validate`] that never affects codec correctness.

mod equipment;
mod profession;
mod skills;
mod specialization;

pub use equipment::{EquipmentRecord, EquipmentTemplate};
pub use profession::Profession;
pub use skills::{SkillBar, SkillSlot};
pub use specialization::{SpecializationSlot, TraitChoice, TraitTier};

/// Errors raised by template constructors and semantic validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// A specialization slot with id 0 carried trait choices.
    #[error("trait choices require a specialization (empty slots must have none)")]
    TraitsWithoutSpecialization,

    /// The profession byte is not a code the catalog recognizes.
    #[error("unknown profession code {id}")]
    UnknownProfession { id: u8 },
}

/// A complete character build: profession, three specialization slots,
/// and the terrestrial and aquatic skill bars.
///
/// `profession_id` and `equipment` hold raw wire content: the codec
/// decodes them verbatim and re-emits them unchanged, so unknown
/// profession codes and surplus equipment bytes survive a round-trip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildTemplate {
    /// Raw profession code (1..=9 in the live catalog).
    pub profession_id: u8,

    /// The three specialization slots, by position.
    pub specializations: [SpecializationSlot; 3],

    /// Terrestrial skill bar.
    pub skills_land: SkillBar,

    /// Aquatic skill bar.
    pub skills_water: SkillBar,

    /// Opaque surplus bytes following the fixed layout; reserved for
    /// equipment data and re-emitted verbatim on encode.
    pub equipment: Vec<u8>,
}

impl BuildTemplate {
    /// Creates a fresh, empty build for a known profession.
    pub fn new(profession: Profession) -> Self {
        Self {
            profession_id: profession.id(),
            ..Self::default()
        }
    }

    /// Sets one of the three specialization slots (by position 0..=2).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; slot positions are fixed.
    pub fn set_specialization(&mut self, index: usize, slot: SpecializationSlot) {
        self.specializations[index] = slot;
    }

    /// Returns the profession, if the raw code is one the catalog knows.
    pub fn profession(&self) -> Option<Profession> {
        Profession::from_id(self.profession_id)
    }

    /// Checks semantic validity of the template.
    ///
    /// This is the catalog-level layer on top of the codec: the raw
    /// profession code must be recognized and every slot must honor the
    /// empty-slot invariant. Decoded templates may legitimately fail
    /// here while still round-tripping bit-exactly.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in field order.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.profession().is_none() {
            return Err(TemplateError::UnknownProfession {
                id: self.profession_id,
            });
        }
        for slot in &self.specializations {
            if !slot.is_consistent() {
                return Err(TemplateError::TraitsWithoutSpecialization);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_template_starts_empty() {
        let template = BuildTemplate::new(Profession::Guardian);
        assert_eq!(template.profession_id, 1);
        assert!(template.specializations.iter().all(|s| s.is_empty()));
        assert!(template.skills_land.is_empty());
        assert!(template.skills_water.is_empty());
        assert!(template.equipment.is_empty());
        assert!(template.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_profession() {
        let template = BuildTemplate {
            profession_id: 42,
            ..BuildTemplate::default()
        };
        assert_eq!(
            template.validate(),
            Err(TemplateError::UnknownProfession { id: 42 })
        );
    }

    #[test]
    fn validate_reports_inconsistent_slots() {
        let mut template = BuildTemplate::new(Profession::Mesmer);
        // Simulate wire content that violates the empty-slot invariant.
        template.specializations[1] = SpecializationSlot::from_wire(0, 0b10);
        assert_eq!(
            template.validate(),
            Err(TemplateError::TraitsWithoutSpecialization)
        );
    }
}
