//! Wire codec for equipment-template links.
//!
//! Layout after the type tag: one record-count byte, then per record a
//! slot enum byte, a one-byte payload length, and that many raw bytes.
//! Record payloads are opaque; item semantics are out of scope.

use crate::codec::reader::PayloadReader;
use crate::error::Result;
use crate::template::{EquipmentRecord, EquipmentTemplate};

/// Decodes the body of an equipment-template link.
pub(crate) fn decode_equipment(reader: &mut PayloadReader<'_>) -> Result<EquipmentTemplate> {
    let count = reader.read_u8()?;

    let mut records = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        let slot = reader.read_u8()?;
        let len = usize::from(reader.read_u8()?);
        let data = reader.take(len)?.to_vec();
        records.push(EquipmentRecord::new(slot, data));
    }

    let trailing = reader.remaining().to_vec();

    Ok(EquipmentTemplate { records, trailing })
}

/// Encodes the body of an equipment-template link after the tag byte.
pub(crate) fn encode_equipment(template: &EquipmentTemplate, out: &mut Vec<u8>) -> Result<()> {
    // The count byte caps a template at 255 records by construction of
    // the wire format; longer record lists cannot be represented.
    let count: u8 = template.records.len().try_into().map_err(|_| {
        crate::error::FormatError::ValueOutOfRange {
            field: "equipment record count",
            value: template.records.len() as u32,
            max: u32::from(u8::MAX),
        }
    })?;
    out.push(count);

    for record in &template.records {
        record.check_encodable()?;
        out.push(record.slot);
        out.push(record.data.len() as u8);
        out.extend_from_slice(&record.data);
    }

    out.extend_from_slice(&template.trailing);
    Ok(())
}
