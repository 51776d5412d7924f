// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fuzz target for CDR deserialization
//!
//! Feeds arbitrary bytes to every CdrReader operation and the RTPS
//! value-type decoders. None of these operations may panic on any input;
//! received buffers are untrusted network data.

#![no_main]

use libfuzzer_sys::fuzz_target;

use dds_wire::{ByteOrder, CdrReader, EntityId, GuidPrefix, Locator, SequenceNumber, GUID};

fuzz_target!(|data: &[u8]| {
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        // ----------------------------------------------------------------
        // 1. Fuzz every primitive read from a fresh cursor - must not panic
        // ----------------------------------------------------------------
        {
            let mut reader = CdrReader::with_byte_order(data, order);
            let _ = reader.read_bool();
            let _ = reader.read_u8();
            let _ = reader.read_u16();
            let _ = reader.read_i16();
            let _ = reader.read_u32();
            let _ = reader.read_i32();
            let _ = reader.read_u64();
            let _ = reader.read_i64();
            let _ = reader.read_f32();
            let _ = reader.read_f64();
            let _ = reader.read_bytes(4);
            let _ = reader.read_string();
            let _ = reader.read_byte_array();
        }

        // ----------------------------------------------------------------
        // 2. Drain the buffer with length-prefixed reads; cursor must never
        //    move on a failed operation
        // ----------------------------------------------------------------
        {
            let mut reader = CdrReader::with_byte_order(data, order);
            while !reader.is_eof() {
                let before = reader.offset();
                if reader.read_string().is_err() {
                    assert_eq!(reader.offset(), before);
                    if reader.read_u8().is_err() {
                        break;
                    }
                }
            }
        }

        // ----------------------------------------------------------------
        // 3. Fuzz the value-type decoders - must not panic
        // ----------------------------------------------------------------
        {
            let mut reader = CdrReader::with_byte_order(data, order);
            let _ = GUID::decode(&mut reader);
            let _ = GuidPrefix::decode(&mut reader);
            let _ = EntityId::decode(&mut reader);
            let _ = Locator::decode(&mut reader);
            let _ = SequenceNumber::decode(&mut reader);
        }
    }

    // Locator text construction must stay total over arbitrary text
    if let Ok(text) = std::str::from_utf8(data) {
        let loc = Locator::from_ipv4(text, 7400);
        let _ = loc.is_multicast();
        let _ = loc.ipv4_string();
    }
});
