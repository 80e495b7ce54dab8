//! End-to-end decode/encode checks against captured and hand-built frames.

use rustdnp_core::application::{Application, ResponseFunction};
use rustdnp_core::link::{LinkFunction, PrimaryFunction};
use rustdnp_core::object::{PointPrefixCode, RangeField};
use rustdnp_core::points::Point;
use rustdnp_core::time::AbsoluteTime;
use rustdnp_core::{DecodeError, EncodeError, Frame};

/// Unsolicited response carrying three Group 2 Var 2 events, from a
/// reference traffic sample.
const UNSOLICITED_RESPONSE: [u8; 53] = [
    0x05, 0x64, 0x2A, 0x44, 0x01, 0x00, 0x00, 0x04, 0xE5, 0x79, // link header
    0xC1, 0xE2, 0x81, 0x90, 0x00, 0x02, 0x02, 0x28, 0x03, 0x00, // block 1
    0x00, 0x00, 0x81, 0xDA, 0x33, 0xD2, 0xDF, 0xE5, // ...block 1 + CRC
    0x64, 0x71, 0x01, 0x00, 0x00, 0x01, 0xDA, 0x33, 0xD2, 0x64, // block 2
    0x71, 0x01, 0xFF, 0xFF, 0x81, 0xDB, 0xDD, 0x14, // ...block 2 + CRC
    0x33, 0xD2, 0x64, 0x71, 0x01, 0x38, 0x5D, // block 3 + CRC
];

/// Link-layer-only ACK frame.
const LINK_ONLY: [u8; 10] = [
    0x05, 0x64, 0x05, 0x00, 0x01, 0x00, 0x02, 0x00, 0xBA, 0xB2,
];

/// Read request whose single object header declares unknown Group 99
/// Var 99, followed by two raw bytes.
const UNKNOWN_OBJECT: [u8; 20] = [
    0x05, 0x64, 0x0D, 0xC4, 0x00, 0x04, 0x01, 0x00, 0x13, 0xE1, // link header
    0xC1, 0xC0, 0x01, 0x63, 0x63, 0x06, 0xDE, 0xAD, 0x45, 0x42, // body + CRC
];

/// Response carrying eight packed Group 1 Var 1 binary inputs (0xA5).
const PACKED_BINARY: [u8; 23] = [
    0x05, 0x64, 0x10, 0x44, 0x01, 0x00, 0x00, 0x04, 0xCD, 0x4C, // link header
    0xC2, 0xC0, 0x81, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x07, // body
    0xA5, 0x79, 0x2C, // ...body + CRC
];

/// The unsolicited response with its application sequence bumped 2 -> 3.
const UNSOLICITED_RESPONSE_SEQ3: [u8; 53] = [
    0x05, 0x64, 0x2A, 0x44, 0x01, 0x00, 0x00, 0x04, 0xE5, 0x79, 0xC1, 0xE3, 0x81, 0x90, 0x00,
    0x02, 0x02, 0x28, 0x03, 0x00, 0x00, 0x00, 0x81, 0xDA, 0x33, 0xD2, 0xC7, 0x8B, 0x64, 0x71,
    0x01, 0x00, 0x00, 0x01, 0xDA, 0x33, 0xD2, 0x64, 0x71, 0x01, 0xFF, 0xFF, 0x81, 0xDB, 0xDD,
    0x14, 0x33, 0xD2, 0x64, 0x71, 0x01, 0x38, 0x5D,
];

#[test]
fn unsolicited_response_decodes_and_roundtrips() {
    let (frame, warning) = Frame::decode(&UNSOLICITED_RESPONSE).unwrap();
    assert!(warning.is_none());

    assert_eq!(frame.link.length, 0x2A);
    assert_eq!(frame.link.destination, 1);
    assert_eq!(frame.link.source, 1024);
    assert!(!frame.link.control.direction);
    assert_eq!(
        frame.link.control.function,
        LinkFunction::Primary(PrimaryFunction::UnconfirmedUserData)
    );

    let transport = frame.transport.as_ref().unwrap();
    assert!(transport.fin);
    assert!(transport.fir);
    assert_eq!(transport.sequence, 1);
    assert_eq!(transport.crcs.len(), 3);

    let Some(Application::Response(response)) = &frame.application else {
        panic!("expected a response");
    };
    assert_eq!(response.function, ResponseFunction::Response);
    assert_eq!(response.control.sequence, 2);
    assert!(response.control.con);
    assert!(response.indications.need_time);
    assert!(response.indications.device_restart);
    assert!(!response.indications.all_stations);

    assert_eq!(response.data.objects.len(), 1);
    let object = &response.data.objects[0];
    assert_eq!(object.header.group, 2);
    assert_eq!(object.header.variation, 2);
    assert_eq!(object.header.prefix_code, PointPrefixCode::OctetIndex2);
    assert_eq!(object.header.range, RangeField::Count2 { count: 3 });
    assert_eq!(object.header.range.num_objects(), 3);

    assert_eq!(object.points.len(), 3);
    let Point::BytesWithTime(first) = &object.points[0] else {
        panic!("expected an absolute-time event point");
    };
    assert_eq!(first.prefix.as_bytes(), &[0x00, 0x00]);
    assert_eq!(first.value, vec![0x81]);
    assert_eq!(first.time, AbsoluteTime::from_millis(0x0171_64D2_33DA));
    let Point::BytesWithTime(last) = &object.points[2] else {
        panic!("expected an absolute-time event point");
    };
    assert_eq!(last.prefix.as_bytes(), &[0xFF, 0xFF]);
    assert_eq!(last.time, AbsoluteTime::from_millis(0x0171_64D2_33DB));

    assert_eq!(frame.encode().unwrap(), UNSOLICITED_RESPONSE);
}

#[test]
fn link_only_frame_roundtrips() {
    let (frame, warning) = Frame::decode(&LINK_ONLY).unwrap();
    assert!(warning.is_none());
    assert!(frame.transport.is_none());
    assert!(frame.application.is_none());
    assert_eq!(frame.link.destination, 1);
    assert_eq!(frame.link.source, 2);
    assert_eq!(frame.encode().unwrap(), LINK_ONLY);
}

#[test]
fn unknown_group_variation_is_reported_and_survives() {
    let (frame, warning) = Frame::decode(&UNKNOWN_OBJECT).unwrap();
    assert_eq!(
        warning,
        Some(DecodeError::UnsupportedGroupVariation {
            group: 99,
            variation: 99
        })
    );

    let Some(Application::Request(request)) = &frame.application else {
        panic!("expected a request");
    };
    assert_eq!(request.data.objects.len(), 1);
    let object = &request.data.objects[0];
    assert!(object.points.is_empty());
    assert_eq!(object.extra, vec![0xDE, 0xAD]);

    assert_eq!(frame.encode().unwrap(), UNKNOWN_OBJECT);
}

#[test]
fn corrupted_transport_block_is_fatal() {
    // Byte 26 is the first CRC octet of the first transport block.
    let mut corrupt = UNSOLICITED_RESPONSE;
    corrupt[26] ^= 0x01;
    assert_eq!(Frame::decode(&corrupt).unwrap_err(), DecodeError::CrcMismatch);

    // Corrupting block data is caught the same way.
    let mut corrupt = UNSOLICITED_RESPONSE;
    corrupt[12] ^= 0x40;
    assert_eq!(Frame::decode(&corrupt).unwrap_err(), DecodeError::CrcMismatch);
}

#[test]
fn link_header_bit_flips_are_fatal() {
    for index in 0..10 {
        let mut corrupt = LINK_ONLY;
        corrupt[index] ^= 0x01;
        let err = Frame::decode(&corrupt).unwrap_err();
        match index {
            0 | 1 => assert_eq!(err, DecodeError::BadSync),
            _ => assert_eq!(err, DecodeError::CrcMismatch),
        }
    }
}

#[test]
fn application_sequence_overflow_is_an_encode_error() {
    let (mut frame, _) = Frame::decode(&UNSOLICITED_RESPONSE).unwrap();
    frame
        .application
        .as_mut()
        .unwrap()
        .control_mut()
        .sequence = 16;
    assert_eq!(frame.encode().unwrap_err(), EncodeError::SequenceOverflow);
}

#[test]
fn transport_sequence_overflow_is_an_encode_error() {
    let (mut frame, _) = Frame::decode(&UNSOLICITED_RESPONSE).unwrap();
    frame.transport.as_mut().unwrap().sequence = 64;
    assert_eq!(frame.encode().unwrap_err(), EncodeError::SequenceOverflow);
}

#[test]
fn packed_binary_inputs_decode() {
    let (frame, warning) = Frame::decode(&PACKED_BINARY).unwrap();
    assert!(warning.is_none());

    let Some(Application::Response(response)) = &frame.application else {
        panic!("expected a response");
    };
    let object = &response.data.objects[0];
    assert_eq!(object.header.group, 1);
    assert_eq!(object.header.variation, 1);
    assert_eq!(object.header.range, RangeField::StartStop1 { start: 0, stop: 7 });

    let values: Vec<bool> = object
        .points
        .iter()
        .map(|point| match point {
            Point::PackedBit(bit) => bit.value,
            other => panic!("unexpected variant: {other:?}"),
        })
        .collect();
    assert_eq!(
        values,
        vec![true, false, true, false, false, true, false, true]
    );

    assert_eq!(frame.encode().unwrap(), PACKED_BINARY);
}

#[test]
fn sequence_mutation_recomputes_crcs() {
    let (mut frame, _) = Frame::decode(&UNSOLICITED_RESPONSE).unwrap();
    frame.application.as_mut().unwrap().set_sequence(3);
    let encoded = frame.encode().unwrap();
    assert_eq!(encoded, UNSOLICITED_RESPONSE_SEQ3);

    // The edited frame is itself a valid capture.
    let (reparsed, warning) = Frame::decode(&encoded).unwrap();
    assert!(warning.is_none());
    assert_eq!(reparsed.application.unwrap().sequence(), 3);
}

#[test]
fn dump_names_the_object() {
    let (frame, _) = Frame::decode(&UNSOLICITED_RESPONSE).unwrap();
    let dump = frame.to_string();
    assert!(dump.contains("(Event) Binary Input Event - with Absolute Time"));
    assert!(dump.contains("2_OCTET_INDEX"));
    assert!(dump.contains("UNSOLICITED") || dump.contains("RESPONSE"));
}

#[test]
fn truncated_frames_are_fatal() {
    assert_eq!(
        Frame::decode(&LINK_ONLY[..9]).unwrap_err(),
        DecodeError::Truncated
    );
    // A frame cut inside a transport block.
    assert_eq!(
        Frame::decode(&UNSOLICITED_RESPONSE[..20]).unwrap_err(),
        DecodeError::CrcMismatch
    );
}
