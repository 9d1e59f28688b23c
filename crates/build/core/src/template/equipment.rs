//! Equipment-template links as opaque tagged records.
//!
//! Item semantics (stat prefixes, runes, infusions) are deliberately not
//! interpreted here: each record is exposed as its slot tag plus raw
//! bytes, and the codec only guarantees framing and round-tripping.

use crate::error::{FormatError, Result};

/// One equipment slot record: a slot tag and its uninterpreted payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentRecord {
    /// Raw slot enum byte from the wire.
    pub slot: u8,

    /// Raw record bytes (item id plus optional sub-fields), opaque.
    pub data: Vec<u8>,
}

impl EquipmentRecord {
    /// Largest record payload encodable behind the one-byte length field.
    pub const MAX_DATA_LEN: usize = u8::MAX as usize;

    /// Creates a record from a slot tag and raw bytes.
    pub fn new(slot: u8, data: Vec<u8>) -> Self {
        Self { slot, data }
    }

    /// Checks that the payload fits the wire length field.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::ValueOutOfRange`] when `data` exceeds
    /// [`EquipmentRecord::MAX_DATA_LEN`] bytes.
    pub fn check_encodable(&self) -> Result<()> {
        if self.data.len() > Self::MAX_DATA_LEN {
            return Err(FormatError::ValueOutOfRange {
                field: "equipment record length",
                value: self.data.len() as u32,
                max: Self::MAX_DATA_LEN as u32,
            });
        }
        Ok(())
    }
}

/// A decoded equipment-template link: a sequence of opaque slot records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentTemplate {
    /// Slot records in wire order.
    pub records: Vec<EquipmentRecord>,

    /// Bytes following the declared records, preserved verbatim for
    /// forward compatibility with future fields.
    pub trailing: Vec<u8>,
}

impl EquipmentTemplate {
    /// Creates a template from slot records with no trailing bytes.
    pub fn new(records: Vec<EquipmentRecord>) -> Self {
        Self {
            records,
            trailing: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_record_is_a_contract_violation() {
        let record = EquipmentRecord::new(3, vec![0; 256]);
        assert!(matches!(
            record.check_encodable(),
            Err(FormatError::ValueOutOfRange {
                field: "equipment record length",
                value: 256,
                ..
            })
        ));

        let record = EquipmentRecord::new(3, vec![0; 255]);
        assert!(record.check_encodable().is_ok());
    }
}
