//! Wire codec for build links.
//!
//! Fixed layout after the type tag: profession byte, 3 × (specialization
//! id byte + packed trait byte), then 10 little-endian u16 skill ids
//! (terrestrial bar first, aquatic second, each in canonical slot
//! order). Surplus bytes are the opaque equipment region.

use crate::codec::reader::PayloadReader;
use crate::error::{FormatError, Result};
use crate::template::{BuildTemplate, SkillBar, SkillSlot, SpecializationSlot};

/// Decodes the body of a build link (the reader sits past the tag byte).
pub(crate) fn decode_build(reader: &mut PayloadReader<'_>) -> Result<BuildTemplate> {
    let profession_id = reader.read_u8()?;

    let mut specializations = [SpecializationSlot::EMPTY; 3];
    for slot in &mut specializations {
        let id = reader.read_u8()?;
        let packed = reader.read_u8()?;
        *slot = SpecializationSlot::from_wire(id, packed);
    }

    let skills_land = read_skill_bar(reader)?;
    let skills_water = read_skill_bar(reader)?;

    // Forward compatibility: surplus bytes are never rejected, they are
    // carried verbatim as the reserved equipment region.
    let equipment = reader.remaining().to_vec();

    Ok(BuildTemplate {
        profession_id,
        specializations,
        skills_land,
        skills_water,
        equipment,
    })
}

/// Encodes the body of a build link after the tag byte.
pub(crate) fn encode_build(template: &BuildTemplate, out: &mut Vec<u8>) -> Result<()> {
    out.push(template.profession_id);

    for slot in &template.specializations {
        let (id, packed) = slot.to_wire();
        out.push(id);
        out.push(packed);
    }

    write_skill_bar(&template.skills_land, out)?;
    write_skill_bar(&template.skills_water, out)?;

    out.extend_from_slice(&template.equipment);
    Ok(())
}

fn read_skill_bar(reader: &mut PayloadReader<'_>) -> Result<SkillBar> {
    let mut slots = [0u32; SkillSlot::COUNT];
    for slot in &mut slots {
        *slot = u32::from(reader.read_u16_le()?);
    }
    Ok(SkillBar::new(slots))
}

fn write_skill_bar(bar: &SkillBar, out: &mut Vec<u8>) -> Result<()> {
    for slot in SkillSlot::all() {
        let id = bar.get(slot);
        let wire: u16 = id.try_into().map_err(|_| FormatError::ValueOutOfRange {
            field: "skill id",
            value: id,
            max: u32::from(u16::MAX),
        })?;
        out.extend_from_slice(&wire.to_le_bytes());
    }
    Ok(())
}
