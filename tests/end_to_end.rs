// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios over literal byte buffers.

use iccdump::error::DecodeError;
use iccdump::profile::Profile;
use iccdump::signatures::RenderingIntent;
use iccdump::tags::Element;

fn s15fixed16(v: f64) -> [u8; 4] {
    ((v * 65536.0).round() as i32).to_be_bytes()
}

fn header(rendering_intent: u32, magic: &[u8; 4]) -> Vec<u8> {
    let mut buf = vec![0u8; 128];
    buf[0..4].copy_from_slice(&128u32.to_be_bytes());
    buf[36..40].copy_from_slice(magic);
    buf[64..68].copy_from_slice(&rendering_intent.to_be_bytes());
    buf[68..72].copy_from_slice(&s15fixed16(0.9642));
    buf[72..76].copy_from_slice(&s15fixed16(1.0));
    buf[76..80].copy_from_slice(&s15fixed16(0.8249));
    buf
}

fn with_tags(mut buf: Vec<u8>, tags: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
    let table_start = buf.len();
    let header_bytes = 4 + tags.len() * 12;
    let mut payload_offset = table_start + header_bytes;
    let mut table = Vec::new();
    let mut payloads = Vec::new();
    table.extend((tags.len() as u32).to_be_bytes());
    for (sig, payload) in tags {
        table.extend(**sig);
        table.extend((payload_offset as u32).to_be_bytes());
        table.extend((payload.len() as u32).to_be_bytes());
        payloads.extend_from_slice(payload);
        payload_offset += payload.len();
    }
    buf[0..4].copy_from_slice(&((table_start + header_bytes + payloads.len()) as u32).to_be_bytes());
    buf.extend(table);
    buf.extend(payloads);
    buf
}

#[test]
fn decodes_minimal_header_fields() {
    let buf = with_tags(header(1, b"acsp"), &[]);
    let profile = Profile::decode(&buf).unwrap();
    assert_eq!(profile.header.rendering_intent, Some(RenderingIntent::MediaRelativeColorimetric));
    assert_eq!(
        profile.header.rendering_intent.unwrap().to_string(),
        "Media-relative colorimetric"
    );
    assert_eq!(profile.tags.len(), 0);
}

#[test]
fn rejects_non_acsp_file_signature() {
    let buf = with_tags(header(1, b"ACSP"), &[]);
    let err = Profile::decode(&buf).unwrap_err();
    assert!(matches!(err, DecodeError::NotAProfile));
}

#[test]
fn zero_entry_curve_decodes_as_identity() {
    let mut payload = Vec::new();
    payload.extend(*b"curv");
    payload.extend(0u32.to_be_bytes());
    payload.extend(0u32.to_be_bytes());
    let buf = with_tags(header(1, b"acsp"), &[(b"kTRC", &payload)]);
    let profile = Profile::decode(&buf).unwrap();
    match &profile.tags[0].element {
        Element::Curve(c) => {
            assert_eq!(c.kind.to_string(), "Identity Curve");
            assert!(c.samples.is_empty());
        }
        other => panic!("unexpected element: {other:?}"),
    }
}

#[test]
fn single_entry_curve_decodes_as_gamma() {
    let mut payload = Vec::new();
    payload.extend(*b"curv");
    payload.extend(0u32.to_be_bytes());
    payload.extend(1u32.to_be_bytes());
    payload.extend(0x0200u16.to_be_bytes());
    let buf = with_tags(header(1, b"acsp"), &[(b"kTRC", &payload)]);
    let profile = Profile::decode(&buf).unwrap();
    match &profile.tags[0].element {
        Element::Curve(c) => {
            assert_eq!(c.kind.to_string(), "Power Function");
            assert_eq!(c.samples, vec![2.0]);
        }
        other => panic!("unexpected element: {other:?}"),
    }
}

#[test]
fn sf32_values_round_trip_through_whitepoint_tag() {
    let mut payload = Vec::new();
    payload.extend(*b"sf32");
    payload.extend(0u32.to_be_bytes());
    for v in [0.5, -1.0, 2.25] {
        payload.extend(s15fixed16(v));
    }
    let buf = with_tags(header(1, b"acsp"), &[(b"wtpt", &payload)]);
    let profile = Profile::decode(&buf).unwrap();
    match &profile.tags[0].element {
        Element::S15Fixed16Array(arr) => {
            for (got, want) in arr.values.iter().zip([0.5, -1.0, 2.25].iter()) {
                assert!((got - want).abs() < 2f64.powi(-16));
            }
        }
        other => panic!("unexpected element: {other:?}"),
    }
}

#[test]
fn mluc_single_record_is_keyed_by_locale() {
    let utf16: Vec<u8> = "Display".encode_utf16().flat_map(|u| u.to_be_bytes()).collect();
    let mut payload = Vec::new();
    payload.extend(*b"mluc");
    payload.extend(0u32.to_be_bytes());
    payload.extend(1u32.to_be_bytes());
    payload.extend(12u32.to_be_bytes());
    payload.extend(*b"en");
    payload.extend(*b"US");
    payload.extend((utf16.len() as u32).to_be_bytes());
    payload.extend(28u32.to_be_bytes());
    payload.extend(utf16);
    let buf = with_tags(header(1, b"acsp"), &[(b"dmdd", &payload)]);
    let profile = Profile::decode(&buf).unwrap();
    match &profile.tags[0].element {
        Element::MultiLocalizedUnicode(mluc) => {
            assert_eq!(mluc.entries.get("en-us").unwrap(), "Display");
        }
        other => panic!("unexpected element: {other:?}"),
    }
}

#[test]
fn unknown_type_tag_does_not_affect_other_tags() {
    let mut zzzz = Vec::new();
    zzzz.extend(*b"ZZZZ");
    zzzz.extend(0u32.to_be_bytes());
    let mut curv = Vec::new();
    curv.extend(*b"curv");
    curv.extend(0u32.to_be_bytes());
    curv.extend(0u32.to_be_bytes());
    let buf = with_tags(header(1, b"acsp"), &[(b"unkn", &zzzz), (b"kTRC", &curv)]);
    let profile = Profile::decode(&buf).unwrap();
    assert!(matches!(profile.tags[0].element, Element::Untyped { .. }));
    assert!(matches!(profile.tags[1].element, Element::Curve(_)));
}

#[test]
fn profile_serializes_to_expected_json_shape() {
    let buf = with_tags(header(1, b"acsp"), &[]);
    let profile = Profile::decode(&buf).unwrap();
    let json = serde_json::to_string(&profile).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["header"]["rendering_intent"], "MediaRelativeColorimetric");
    assert_eq!(value["tags"].as_array().unwrap().len(), 0);
    assert!((value["header"]["pcs_illuminant"]["y"].as_f64().unwrap() - 1.0).abs() < 1e-4);
}

#[test]
fn truncated_tag_payload_is_isolated_from_sibling_tags() {
    let mut curv = Vec::new();
    curv.extend(*b"curv");
    curv.extend(0u32.to_be_bytes());
    curv.extend(0u32.to_be_bytes());
    let truncated = vec![b'c', b'u', b'r', b'v']; // type sig only, no body
    let buf = with_tags(header(1, b"acsp"), &[(b"good", &curv), (b"bad1", &truncated)]);
    let profile = Profile::decode(&buf).unwrap();
    assert!(matches!(profile.tags[0].element, Element::Curve(_)));
    assert!(matches!(profile.tags[1].element, Element::Failed { .. }));
}
