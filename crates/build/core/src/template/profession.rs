//! Profession codes recognized by the live catalog.

/// Playable professions, discriminants matching the numeric `code` the
/// catalog assigns to each profession and the byte stored in build links.
///
/// The codec itself never consults this enum — it round-trips the raw
/// profession byte verbatim. [`Profession::from_id`] is the semantic
/// check layered on top (see [`BuildTemplate::validate`]).
///
/// [`BuildTemplate::validate`]: crate::template::BuildTemplate::validate
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
#[repr(u8)]
pub enum Profession {
    Guardian = 1,
    Warrior = 2,
    Engineer = 3,
    Ranger = 4,
    Thief = 5,
    Elementalist = 6,
    Mesmer = 7,
    Necromancer = 8,
    Revenant = 9,
}

impl Profession {
    /// Resolves a raw profession byte to a known profession, if any.
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Guardian),
            2 => Some(Self::Warrior),
            3 => Some(Self::Engineer),
            4 => Some(Self::Ranger),
            5 => Some(Self::Thief),
            6 => Some(Self::Elementalist),
            7 => Some(Self::Mesmer),
            8 => Some(Self::Necromancer),
            9 => Some(Self::Revenant),
            _ => None,
        }
    }

    /// Returns the numeric profession code carried in build links.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Returns all 9 professions in catalog-code order.
    pub const fn all() -> [Profession; 9] {
        [
            Profession::Guardian,
            Profession::Warrior,
            Profession::Engineer,
            Profession::Ranger,
            Profession::Thief,
            Profession::Elementalist,
            Profession::Mesmer,
            Profession::Necromancer,
            Profession::Revenant,
        ]
    }
}
