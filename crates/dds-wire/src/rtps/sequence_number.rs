// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! RTPS sequence numbers: 64-bit counters carried as two 32-bit halves.
//!
//! The wire format transmits the signed high half and unsigned low half
//! separately, so the split is part of the type rather than an encoding
//! detail. `to_i64` is the exact inverse of `from_i64` over the full signed
//! range.

use crate::ser::{CdrReader, CdrWriter, SerResult};
use std::ops::{Add, Sub};

/// 64-bit sequence counter split into wire halves.
///
/// Ordering compares the signed high half first, then the unsigned low half
/// (the derive on the field order gives exactly that).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SequenceNumber {
    pub high: i32,
    pub low: u32,
}

impl SequenceNumber {
    /// Zero counter.
    pub const ZERO: SequenceNumber = SequenceNumber { high: 0, low: 0 };

    /// Sentinel for "no sequence number known" (high -1, low 0).
    pub const UNKNOWN: SequenceNumber = SequenceNumber { high: -1, low: 0 };

    /// Construct from explicit halves (direct passthrough).
    pub const fn new(high: i32, low: u32) -> Self {
        Self { high, low }
    }

    /// Split a 64-bit value: arithmetic shift for the high half, masked low
    /// 32 bits for the low half.
    pub const fn from_i64(value: i64) -> Self {
        Self {
            high: (value >> 32) as i32,
            low: (value & 0xFFFF_FFFF) as u32,
        }
    }

    /// Recombine the halves. Exact inverse of [`SequenceNumber::from_i64`].
    pub const fn to_i64(self) -> i64 {
        ((self.high as i64) << 32) | (self.low as i64)
    }

    /// Advance by one, carrying low-half wraparound into the high half.
    pub fn increment(&mut self) {
        self.low = self.low.wrapping_add(1);
        if self.low == 0 {
            self.high = self.high.wrapping_add(1);
        }
    }

    /// Advance by one and return the value prior to the increment.
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// Wire layout: high (i32) then low (u32), each under the normal 4-byte
    /// alignment rule.
    pub fn encode(&self, writer: &mut CdrWriter) {
        writer.write_i32(self.high);
        writer.write_u32(self.low);
    }

    pub fn decode(reader: &mut CdrReader<'_>) -> SerResult<Self> {
        let high = reader.read_i32()?;
        let low = reader.read_u32()?;
        Ok(Self { high, low })
    }
}

impl From<i64> for SequenceNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl Add<i64> for SequenceNumber {
    type Output = SequenceNumber;

    // Route through i64 so carry/borrow lives in from_i64, not here
    fn add(self, rhs: i64) -> SequenceNumber {
        SequenceNumber::from_i64(self.to_i64().wrapping_add(rhs))
    }
}

impl Sub<i64> for SequenceNumber {
    type Output = SequenceNumber;

    fn sub(self, rhs: i64) -> SequenceNumber {
        SequenceNumber::from_i64(self.to_i64().wrapping_sub(rhs))
    }
}

impl Sub for SequenceNumber {
    type Output = i64;

    /// Distance between two counters as a plain signed difference.
    fn sub(self, rhs: SequenceNumber) -> i64 {
        self.to_i64().wrapping_sub(rhs.to_i64())
    }
}
