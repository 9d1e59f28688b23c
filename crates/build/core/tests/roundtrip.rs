//! End-to-end codec tests over known wire vectors.

use build_core::{
    BUILD_PAYLOAD_LEN, BuildTemplate, ChatLink, EquipmentRecord, EquipmentTemplate, FormatError,
    Profession, SkillBar, SkillSlot, SpecializationSlot, TraitChoice, codec, decode_envelope,
    encode_envelope,
};

/// An empty elementalist build: tag 0x0D, profession 6, 26 zero bytes.
const EMPTY_ELEMENTALIST_LINK: &str = "[&DQYAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA==]";

fn sample_template() -> BuildTemplate {
    let mut template = BuildTemplate::new(Profession::Engineer);
    template.set_specialization(
        0,
        SpecializationSlot::new(
            6,
            [TraitChoice::Top, TraitChoice::Middle, TraitChoice::Bottom],
        )
        .unwrap(),
    );
    template.set_specialization(
        1,
        SpecializationSlot::new(
            25,
            [TraitChoice::Middle, TraitChoice::Middle, TraitChoice::Middle],
        )
        .unwrap(),
    );
    template.skills_land = SkillBar::new([5503, 5539, 0, 5641, 5666]);
    template
}

#[test]
fn template_round_trips_through_bytes() {
    let template = sample_template();
    let bytes = codec::encode(&ChatLink::Build(template.clone())).unwrap();
    assert_eq!(bytes.len(), BUILD_PAYLOAD_LEN);

    match codec::decode(&bytes).unwrap() {
        ChatLink::Build(decoded) => assert_eq!(decoded, template),
        other => panic!("expected a build link, got {other:?}"),
    }
}

#[test]
fn canonical_bytes_round_trip_through_template() {
    // Header: profession 3, spec 6 with traits {1,2,3}, spec 25 with
    // traits {2,2,2}, empty third slot; then the land bar and an empty
    // aquatic bar, every skill id little-endian.
    let bytes = hex::decode(concat!(
        "0d030639192a0000",
        "7f15a315000009162216",
        "00000000000000000000",
    ))
    .unwrap();
    assert_eq!(bytes.len(), BUILD_PAYLOAD_LEN);

    let link = codec::decode(&bytes).unwrap();
    match &link {
        ChatLink::Build(template) => {
            assert_eq!(template.profession(), Some(Profession::Engineer));
            assert_eq!(template.specializations[0].id(), 6);
            assert_eq!(template.specializations[1].id(), 25);
            assert_eq!(template.skills_land.get(SkillSlot::Heal), 5503);
            assert_eq!(template.skills_land.get(SkillSlot::Utility2), 0);
            assert_eq!(template.skills_land.get(SkillSlot::Elite), 5666);
            assert!(template.skills_water.is_empty());
            assert!(template.equipment.is_empty());
        }
        other => panic!("expected a build link, got {other:?}"),
    }

    assert_eq!(codec::encode(&link).unwrap(), bytes);
    assert_eq!(ChatLink::Build(sample_template()), link);
}

#[test]
fn chat_string_round_trips_exactly() {
    let link = ChatLink::from_chat_string(EMPTY_ELEMENTALIST_LINK).unwrap();
    match &link {
        ChatLink::Build(template) => {
            assert_eq!(template.profession(), Some(Profession::Elementalist));
            assert!(template.specializations.iter().all(|s| s.is_empty()));
            assert!(template.skills_land.is_empty());
            assert!(template.skills_water.is_empty());
        }
        other => panic!("expected a build link, got {other:?}"),
    }
    assert_eq!(link.chat_string().unwrap(), EMPTY_ELEMENTALIST_LINK);
}

#[test]
fn surplus_bytes_are_preserved_verbatim() {
    let mut bytes = codec::encode(&ChatLink::Build(sample_template())).unwrap();
    bytes.extend_from_slice(&[0xBE, 0xEF]);

    let link = codec::decode(&bytes).unwrap();
    match &link {
        ChatLink::Build(template) => assert_eq!(template.equipment, vec![0xBE, 0xEF]),
        other => panic!("expected a build link, got {other:?}"),
    }

    // The opaque region is re-emitted, so the law holds including surplus.
    assert_eq!(codec::encode(&link).unwrap(), bytes);
}

#[test]
fn short_build_payload_reports_needed_vs_got() {
    let mut bytes = codec::encode(&ChatLink::Build(sample_template())).unwrap();
    bytes.truncate(BUILD_PAYLOAD_LEN - 1);

    match codec::decode(&bytes) {
        Err(FormatError::Truncated { needed, got, .. }) => {
            assert_eq!(needed, 28);
            assert_eq!(got, 27);
        }
        other => panic!("expected truncation, got {other:?}"),
    }
}

#[test]
fn empty_payload_is_truncated_not_unknown() {
    match codec::decode(&[]) {
        Err(FormatError::Truncated {
            offset: 0,
            needed: 1,
            got: 0,
        }) => {}
        other => panic!("expected truncation, got {other:?}"),
    }
}

#[test]
fn unknown_tag_is_rejected() {
    match ChatLink::from_chat_string("[&/w==]") {
        Err(FormatError::UnknownLinkType { tag: 0xFF }) => {}
        other => panic!("expected unknown link type, got {other:?}"),
    }
}

#[test]
fn malformed_envelopes_are_rejected() {
    assert!(matches!(
        ChatLink::from_chat_string("DQYAAAA"),
        Err(FormatError::BadEnvelope)
    ));
    assert!(matches!(
        ChatLink::from_chat_string("[&***]"),
        Err(FormatError::BadEncoding(_))
    ));
}

#[test]
fn envelope_inverts_for_arbitrary_payloads() {
    let payloads: [&[u8]; 3] = [b"", &[0x0D], &[0xFF; 64]];
    for payload in payloads {
        assert_eq!(decode_envelope(&encode_envelope(payload)).unwrap(), payload);
    }
}

#[test]
fn oversized_skill_id_is_a_contract_violation() {
    let mut template = sample_template();
    template.skills_water.set(SkillSlot::Elite, 70_000);

    match codec::encode(&ChatLink::Build(template)) {
        Err(FormatError::ValueOutOfRange {
            field: "skill id",
            value: 70_000,
            max: 65_535,
        }) => {}
        other => panic!("expected out-of-range failure, got {other:?}"),
    }
}

#[test]
fn equipment_template_round_trips() {
    let template = EquipmentTemplate::new(vec![
        EquipmentRecord::new(1, vec![0x10, 0x27, 0x00, 0x00]),
        EquipmentRecord::new(7, vec![]),
        EquipmentRecord::new(16, vec![0xAB; 9]),
    ]);
    let link = ChatLink::Equipment(template.clone());

    let bytes = codec::encode(&link).unwrap();
    assert_eq!(bytes[0], build_core::LINK_TYPE_EQUIPMENT);
    assert_eq!(bytes[1], 3); // declared record count

    match codec::decode(&bytes).unwrap() {
        ChatLink::Equipment(decoded) => assert_eq!(decoded, template),
        other => panic!("expected an equipment link, got {other:?}"),
    }
}

#[test]
fn equipment_template_truncated_record_fails() {
    // Declares one record of 4 payload bytes but provides only 2.
    let bytes = [0x0E, 0x01, 0x05, 0x04, 0xAA, 0xBB];
    match codec::decode(&bytes) {
        Err(FormatError::Truncated {
            offset: 4,
            needed: 8,
            got: 6,
        }) => {}
        other => panic!("expected truncation, got {other:?}"),
    }
}
