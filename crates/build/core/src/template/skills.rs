//! Skill bars: the 5 equipped action skills per context.

/// Canonical skill bar slots, in wire order.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillSlot {
    Heal,
    Utility1,
    Utility2,
    Utility3,
    Elite,
}

impl SkillSlot {
    /// Number of slots in a bar.
    pub const COUNT: usize = 5;

    /// Returns all 5 slots in canonical order.
    pub const fn all() -> [SkillSlot; 5] {
        [
            SkillSlot::Heal,
            SkillSlot::Utility1,
            SkillSlot::Utility2,
            SkillSlot::Utility3,
            SkillSlot::Elite,
        ]
    }

    /// Position of this slot within a bar.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The 5 equipped action skills for one context (terrestrial or aquatic).
///
/// Each slot holds a catalog skill id, 0 meaning empty. No invariant
/// couples slots to each other; profession-specific legality is a
/// catalog-level concern outside the codec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillBar {
    slots: [u32; SkillSlot::COUNT],
}

impl SkillBar {
    /// A bar with every slot empty.
    pub const EMPTY: Self = Self {
        slots: [0; SkillSlot::COUNT],
    };

    /// Creates a bar from skill ids in canonical slot order.
    pub const fn new(slots: [u32; SkillSlot::COUNT]) -> Self {
        Self { slots }
    }

    /// Returns the skill id in one slot (0 = empty).
    pub const fn get(&self, slot: SkillSlot) -> u32 {
        self.slots[slot.index()]
    }

    /// Equips a skill id in one slot, returning the previous id.
    pub fn set(&mut self, slot: SkillSlot, skill_id: u32) -> u32 {
        core::mem::replace(&mut self.slots[slot.index()], skill_id)
    }

    /// Returns the skill ids in canonical slot order.
    pub const fn slots(&self) -> [u32; SkillSlot::COUNT] {
        self.slots
    }

    /// Returns true if every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|&id| id == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_returns_previous_id() {
        let mut bar = SkillBar::EMPTY;
        assert_eq!(bar.set(SkillSlot::Heal, 5503), 0);
        assert_eq!(bar.set(SkillSlot::Heal, 5568), 5503);
        assert_eq!(bar.get(SkillSlot::Heal), 5568);
        assert!(!bar.is_empty());
    }

    #[test]
    fn slot_order_is_canonical() {
        let bar = SkillBar::new([1, 2, 3, 4, 5]);
        assert_eq!(bar.get(SkillSlot::Heal), 1);
        assert_eq!(bar.get(SkillSlot::Utility3), 4);
        assert_eq!(bar.get(SkillSlot::Elite), 5);
    }
}
