// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Wire-format conformance: byte-exact vectors for the CDR codec and the
// canonical RTPS value-type layouts, plus truncation-safety sweeps over
// every prefix of a valid message.

#![allow(clippy::unreadable_literal)]

use dds_wire::{
    ByteOrder, CdrReader, CdrWriter, EntityId, GuidPrefix, Locator, SequenceNumber, GUID,
};

/// The end-to-end scenario: byte, u16, u32, string -- with exactly one pad
/// byte before the u16 (one byte already written) and byte-exact layout.
#[test]
fn end_to_end_scenario_byte_exact() {
    let mut writer = CdrWriter::with_byte_order(ByteOrder::LittleEndian);
    writer.write_u8(0xAB);
    writer.write_u16(0x1234);
    writer.write_u32(0xAABBCCDD);
    writer.write_string("Hello DDS!");
    let bytes = writer.into_bytes();

    #[rustfmt::skip]
    let expected: &[u8] = &[
        0xAB,                   // byte
        0x00,                   // one pad byte to reach 2-alignment
        0x34, 0x12,             // u16 LE
        0xDD, 0xCC, 0xBB, 0xAA, // u32 LE (offset 4, already aligned)
        0x0B, 0x00, 0x00, 0x00, // string length 11 = 10 content + NUL
        b'H', b'e', b'l', b'l', b'o', b' ', b'D', b'D', b'S', b'!',
        0x00,                   // NUL terminator
    ];
    assert_eq!(bytes, expected);

    let mut reader = CdrReader::with_byte_order(&bytes, ByteOrder::LittleEndian);
    assert_eq!(reader.read_u8().expect("byte"), 0xAB);
    assert_eq!(reader.read_u16().expect("u16"), 0x1234);
    assert_eq!(reader.read_u32().expect("u32"), 0xAABBCCDD);
    assert_eq!(reader.read_string().expect("string"), "Hello DDS!");
    assert!(reader.is_eof());
}

#[test]
fn end_to_end_scenario_big_endian() {
    let mut writer = CdrWriter::with_byte_order(ByteOrder::BigEndian);
    writer.write_u8(0xAB);
    writer.write_u16(0x1234);
    writer.write_u32(0xAABBCCDD);
    writer.write_string("Hello DDS!");
    let bytes = writer.into_bytes();

    // Same layout, multi-byte fields swapped
    assert_eq!(&bytes[2..4], &[0x12, 0x34]);
    assert_eq!(&bytes[4..8], &[0xAA, 0xBB, 0xCC, 0xDD]);
    assert_eq!(&bytes[8..12], &[0x00, 0x00, 0x00, 0x0B]);

    let mut reader = CdrReader::with_byte_order(&bytes, ByteOrder::BigEndian);
    assert_eq!(reader.read_u8().expect("byte"), 0xAB);
    assert_eq!(reader.read_u16().expect("u16"), 0x1234);
    assert_eq!(reader.read_u32().expect("u32"), 0xAABBCCDD);
    assert_eq!(reader.read_string().expect("string"), "Hello DDS!");
}

/// Byte order is an out-of-band agreement: a mismatched reader sees swapped
/// values, not an error.
#[test]
fn byte_order_mismatch_swaps_values() {
    let mut writer = CdrWriter::with_byte_order(ByteOrder::LittleEndian);
    writer.write_u16(0x1234);
    let bytes = writer.into_bytes();

    let mut reader = CdrReader::with_byte_order(&bytes, ByteOrder::BigEndian);
    assert_eq!(reader.read_u16().expect("u16"), 0x3412);
}

/// Canonical GUID layout: 16 raw bytes, no internal padding even at an odd
/// buffer offset.
#[test]
fn guid_canonical_layout() {
    let guid = GUID::new(
        GuidPrefix([0x01, 0xBB, 0xAC, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]),
        EntityId::PARTICIPANT,
    );

    let mut writer = CdrWriter::with_byte_order(ByteOrder::LittleEndian);
    guid.encode(&mut writer);
    #[rustfmt::skip]
    let expected: &[u8] = &[
        0x01, 0xBB, 0xAC, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
        0x00, 0x00, 0x01, 0xC1,
    ];
    assert_eq!(writer.as_bytes(), expected);
}

/// Canonical Locator layout: kind as i32, port as u32, 16 address bytes.
#[test]
fn locator_canonical_layout() {
    let loc = Locator::from_ipv4("192.168.1.100", 7410);
    let mut writer = CdrWriter::with_byte_order(ByteOrder::LittleEndian);
    loc.encode(&mut writer);

    #[rustfmt::skip]
    let expected: &[u8] = &[
        0x01, 0x00, 0x00, 0x00,                         // kind = 1 (UDPv4)
        0xF2, 0x1C, 0x00, 0x00,                         // port = 7410
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // address 0-7
        0x00, 0x00, 0x00, 0x00,                         // address 8-11
        192, 168, 1, 100,                               // address 12-15
    ];
    assert_eq!(writer.as_bytes(), expected);

    let invalid = Locator::invalid();
    let mut writer = CdrWriter::with_byte_order(ByteOrder::LittleEndian);
    invalid.encode(&mut writer);
    assert_eq!(&writer.as_bytes()[0..4], &[0xFF, 0xFF, 0xFF, 0xFF]); // kind = -1
}

/// Canonical SequenceNumber layout: high i32 then low u32.
#[test]
fn sequence_number_canonical_layout() {
    let seq = SequenceNumber::new(2, 0x00000009);
    let mut writer = CdrWriter::with_byte_order(ByteOrder::LittleEndian);
    seq.encode(&mut writer);
    assert_eq!(
        writer.as_bytes(),
        &[0x02, 0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00]
    );

    let unknown = SequenceNumber::UNKNOWN;
    let mut writer = CdrWriter::with_byte_order(ByteOrder::LittleEndian);
    unknown.encode(&mut writer);
    assert_eq!(
        writer.as_bytes(),
        &[0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00]
    );
}

/// A discovery-style announcement: GUID + locator + sequence number + topic
/// name, round-tripped through one buffer in both byte orders.
#[test]
fn announcement_roundtrip_both_orders() {
    let guid = GUID::new(GuidPrefix([9; 12]), EntityId::SEDP_BUILTIN_TOPIC_WRITER);
    let loc = Locator::default_multicast(7400);
    let seq = SequenceNumber::from_i64((1 << 33) + 5);

    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let mut writer = CdrWriter::with_byte_order(order);
        guid.encode(&mut writer);
        loc.encode(&mut writer);
        seq.encode(&mut writer);
        writer.write_string("sensors/temperature");
        let bytes = writer.into_bytes();

        let mut reader = CdrReader::with_byte_order(&bytes, order);
        assert_eq!(GUID::decode(&mut reader).expect("guid"), guid);
        assert_eq!(Locator::decode(&mut reader).expect("locator"), loc);
        assert_eq!(SequenceNumber::decode(&mut reader).expect("seq"), seq);
        assert_eq!(reader.read_string().expect("topic"), "sensors/temperature");
        assert!(reader.is_eof());
    }
}

/// Every truncated prefix of a valid message must fail cleanly: an error
/// outcome, no panic, and for the failing fixed-size read an unmoved cursor.
#[test]
fn truncation_sweep_never_panics() {
    let mut writer = CdrWriter::with_byte_order(ByteOrder::LittleEndian);
    writer.write_u8(0xAB);
    writer.write_u16(0x1234);
    writer.write_u32(0xAABBCCDD);
    writer.write_string("Hello DDS!");
    let full = writer.into_bytes();

    for cut in 0..=full.len() {
        let truncated = &full[..cut];
        let mut reader = CdrReader::with_byte_order(truncated, ByteOrder::LittleEndian);

        let mut failed = false;
        let before = reader.offset();
        if reader.read_u8().is_err() {
            assert_eq!(reader.offset(), before, "cut={}", cut);
            failed = true;
        }
        if !failed {
            let before = reader.offset();
            if reader.read_u16().is_err() {
                assert_eq!(reader.offset(), before, "cut={}", cut);
                failed = true;
            }
        }
        if !failed {
            let before = reader.offset();
            if reader.read_u32().is_err() {
                assert_eq!(reader.offset(), before, "cut={}", cut);
                failed = true;
            }
        }
        if !failed {
            let before = reader.offset();
            if reader.read_string().is_err() {
                assert_eq!(reader.offset(), before, "cut={}", cut);
                failed = true;
            }
        }
        // Only the complete message decodes all four fields
        assert_eq!(failed, cut < full.len(), "cut={}", cut);
    }
}

/// Randomized round-trip sweep across the numeric types.
#[test]
fn randomized_numeric_roundtrip() {
    let mut rng = fastrand::Rng::with_seed(0x5EED);

    for _ in 0..200 {
        let v_u16 = rng.u16(..);
        let v_i32 = rng.i32(..);
        let v_u64 = rng.u64(..);
        let v_i64 = rng.i64(..);
        let v_f64 = f64::from_bits(rng.u64(..));
        let order = if rng.bool() {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        };

        let mut writer = CdrWriter::with_byte_order(order);
        writer.write_u8(rng.u8(..)); // random leading misalignment
        writer.write_u16(v_u16);
        writer.write_i32(v_i32);
        writer.write_u64(v_u64);
        writer.write_i64(v_i64);
        writer.write_f64(v_f64);
        let bytes = writer.into_bytes();

        let mut reader = CdrReader::with_byte_order(&bytes, order);
        reader.read_u8().expect("u8");
        assert_eq!(reader.read_u16().expect("u16"), v_u16);
        assert_eq!(reader.read_i32().expect("i32"), v_i32);
        assert_eq!(reader.read_u64().expect("u64"), v_u64);
        assert_eq!(reader.read_i64().expect("i64"), v_i64);
        // NaN payloads must survive bit-exactly
        assert_eq!(reader.read_f64().expect("f64").to_bits(), v_f64.to_bits());
    }
}

/// Sequence numbers round-trip across the full signed range, including the
/// sentinel and the carry boundary.
#[test]
fn sequence_number_range_roundtrip() {
    let cases = [
        0i64,
        1,
        -1,
        i64::MIN,
        i64::MAX,
        1 << 32,
        (1 << 32) - 1,
        1 << 33,
        SequenceNumber::UNKNOWN.to_i64(),
    ];

    for value in cases {
        let seq = SequenceNumber::from_i64(value);
        assert_eq!(seq.to_i64(), value);

        let mut writer = CdrWriter::new();
        seq.encode(&mut writer);
        let bytes = writer.into_bytes();
        let mut reader = CdrReader::new(&bytes);
        assert_eq!(
            SequenceNumber::decode(&mut reader).expect("decode").to_i64(),
            value
        );
    }
}
