//! Specialization slots and per-tier trait choices.

use crate::template::TemplateError;

/// Trait selection tiers within a specialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraitTier {
    Adept,
    Master,
    Grandmaster,
}

impl TraitTier {
    /// Returns all 3 tiers in wire order (low bits first).
    pub const fn all() -> [TraitTier; 3] {
        [TraitTier::Adept, TraitTier::Master, TraitTier::Grandmaster]
    }

    /// Position of this tier within a slot's choice array.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Which of the up-to-three traits in one tier is selected.
///
/// The discriminants are the 2-bit values stored on the wire, so a decoded
/// field can never leave this domain — there is no failure mode here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TraitChoice {
    /// No trait selected in this tier.
    #[default]
    None = 0,
    Top = 1,
    Middle = 2,
    Bottom = 3,
}

impl TraitChoice {
    /// Decodes a 2-bit wire field. Extra high bits are masked off.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => TraitChoice::None,
            1 => TraitChoice::Top,
            2 => TraitChoice::Middle,
            _ => TraitChoice::Bottom,
        }
    }

    /// Returns the 2-bit wire value for this choice.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns true if no trait is selected.
    pub const fn is_none(self) -> bool {
        matches!(self, TraitChoice::None)
    }
}

/// One of the three specialization slots in a build.
///
/// A slot is either empty (`id == 0`, no traits) or holds a specialization
/// id plus one [`TraitChoice`] per tier. The invariant "empty slots carry
/// no trait choices" is enforced by [`SpecializationSlot::new`]; the codec
/// bypasses it so raw wire content round-trips bit-exactly, and
/// [`SpecializationSlot::is_consistent`] reports violations separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecializationSlot {
    id: u8,
    choices: [TraitChoice; 3],
}

impl SpecializationSlot {
    /// An unchosen slot: id 0, all trait choices none.
    pub const EMPTY: Self = Self {
        id: 0,
        choices: [TraitChoice::None; 3],
    };

    /// Creates a slot, rejecting trait choices on an empty slot.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::TraitsWithoutSpecialization`] when `id` is
    /// 0 but any tier has a trait selected.
    pub fn new(id: u8, choices: [TraitChoice; 3]) -> Result<Self, TemplateError> {
        if id == 0 && choices.iter().any(|choice| !choice.is_none()) {
            return Err(TemplateError::TraitsWithoutSpecialization);
        }
        Ok(Self { id, choices })
    }

    /// Reconstructs a slot from its two wire bytes without validation.
    ///
    /// Tiers are packed 2 bits each, Adept in the low bits. Bits 6–7 of
    /// the packed byte are unused in the canonical layout.
    pub(crate) const fn from_wire(id: u8, packed: u8) -> Self {
        Self {
            id,
            choices: [
                TraitChoice::from_bits(packed),
                TraitChoice::from_bits(packed >> 2),
                TraitChoice::from_bits(packed >> 4),
            ],
        }
    }

    /// Packs the three tier choices into the single wire byte.
    pub(crate) const fn packed_choices(&self) -> u8 {
        self.choices[0].bits() | (self.choices[1].bits() << 2) | (self.choices[2].bits() << 4)
    }

    /// Returns the specialization id (0 = empty).
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the trait choice for one tier.
    pub const fn choice(&self, tier: TraitTier) -> TraitChoice {
        self.choices[tier.index()]
    }

    /// Returns the trait choices in tier order.
    pub const fn choices(&self) -> [TraitChoice; 3] {
        self.choices
    }

    /// Returns true if this slot is unchosen.
    pub const fn is_empty(&self) -> bool {
        self.id == 0
    }

    /// Returns true if the slot honors the empty-slot invariant.
    pub fn is_consistent(&self) -> bool {
        self.id != 0 || self.choices.iter().all(|choice| choice.is_none())
    }

    /// Returns the two wire bytes for this slot.
    pub(crate) const fn to_wire(&self) -> (u8, u8) {
        (self.id, self.packed_choices())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_known_vector() {
        // {1, 2, 3} across the tiers packs to 1 | (2 << 2) | (3 << 4).
        let slot = SpecializationSlot::new(
            42,
            [TraitChoice::Top, TraitChoice::Middle, TraitChoice::Bottom],
        )
        .unwrap();
        assert_eq!(slot.packed_choices(), 0x39);

        let decoded = SpecializationSlot::from_wire(42, 0x39);
        assert_eq!(decoded, slot);
    }

    #[test]
    fn empty_slot_rejects_trait_choices() {
        let err = SpecializationSlot::new(0, [TraitChoice::Top, TraitChoice::None, TraitChoice::None])
            .unwrap_err();
        assert_eq!(err, TemplateError::TraitsWithoutSpecialization);

        assert!(SpecializationSlot::new(0, [TraitChoice::None; 3]).is_ok());
    }

    #[test]
    fn from_wire_preserves_inconsistent_content() {
        // The codec must round-trip raw bytes even when the invariant is
        // violated; consistency is reported, not repaired.
        let slot = SpecializationSlot::from_wire(0, 0x01);
        assert!(!slot.is_consistent());
        assert_eq!(slot.to_wire(), (0, 0x01));
    }

    #[test]
    fn unused_high_bits_are_masked() {
        let slot = SpecializationSlot::from_wire(7, 0b1100_0000);
        assert_eq!(slot.choices(), [TraitChoice::None; 3]);
    }
}
