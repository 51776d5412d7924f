// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! CDR deserializer: bounds-checked reads over a borrowed byte buffer.
//!
//! Input buffers come off the network and are untrusted: every operation
//! returns a `SerResult` and none may panic. A failed read leaves the cursor
//! exactly where it was, including the alignment step (the aligned position
//! is committed only after the bounds check passes).

use super::{pad_to_align, ByteOrder, SerError, SerResult};

/// Generate read methods for multi-byte primitives.
///
/// Each generated method:
/// 1. Computes the aligned cursor position (buffer-start relative)
/// 2. Bounds-checks the aligned read without touching the cursor
/// 3. Converts the bytes in the reader's byte order and commits the cursor
macro_rules! impl_read_primitive {
    ($name:ident, $type:ty, $size:expr) => {
        pub fn $name(&mut self) -> SerResult<$type> {
            let start = pad_to_align(self.offset, $size);
            let end = start + $size;
            if end > self.buffer.len() {
                return Err(SerError::ReadFailed {
                    offset: self.offset,
                    reason: "unexpected end of buffer".into(),
                });
            }
            let mut bytes = [0u8; $size];
            bytes.copy_from_slice(&self.buffer[start..end]);
            self.offset = end;
            Ok(match self.byte_order {
                ByteOrder::LittleEndian => <$type>::from_le_bytes(bytes),
                ByteOrder::BigEndian => <$type>::from_be_bytes(bytes),
            })
        }
    };
}

/// CDR deserializer over a borrowed byte buffer.
pub struct CdrReader<'a> {
    buffer: &'a [u8],
    offset: usize,
    byte_order: ByteOrder,
}

impl<'a> CdrReader<'a> {
    /// Create a reader in host byte order.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_byte_order(buffer, ByteOrder::native())
    }

    /// Create a reader with an explicit byte order.
    ///
    /// Must match the order the producing writer was constructed with; the
    /// agreement is out of band, not negotiated by the codec.
    pub fn with_byte_order(buffer: &'a [u8], byte_order: ByteOrder) -> Self {
        Self {
            buffer,
            offset: 0,
            byte_order,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    /// Read a boolean: one byte, any non-zero value is `true`. No alignment.
    pub fn read_bool(&mut self) -> SerResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read one raw byte. No alignment.
    pub fn read_u8(&mut self) -> SerResult<u8> {
        match self.buffer.get(self.offset) {
            Some(&byte) => {
                self.offset += 1;
                Ok(byte)
            }
            None => Err(SerError::ReadFailed {
                offset: self.offset,
                reason: "unexpected end of buffer".into(),
            }),
        }
    }

    // Generate multi-byte read methods via macro (DRY principle)
    impl_read_primitive!(read_u16, u16, 2);
    impl_read_primitive!(read_i16, i16, 2);
    impl_read_primitive!(read_u32, u32, 4);
    impl_read_primitive!(read_i32, i32, 4);
    impl_read_primitive!(read_u64, u64, 8);
    impl_read_primitive!(read_i64, i64, 8);
    impl_read_primitive!(read_f32, f32, 4);
    impl_read_primitive!(read_f64, f64, 8);

    /// Read `len` raw bytes with no alignment (zero-copy slice into the buffer).
    pub fn read_bytes(&mut self, len: usize) -> SerResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(SerError::ReadFailed {
                offset: self.offset,
                reason: "unexpected end of buffer".into(),
            });
        }
        let slice = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    /// Read a CDR string: u32 length (content + NUL), content, terminator.
    ///
    /// A zero length decodes to an empty string without consuming a
    /// terminator -- a conforming writer never produces it (the terminator is
    /// always counted), but received buffers are not trusted to conform.
    /// On any failure the cursor is restored to the operation start.
    pub fn read_string(&mut self) -> SerResult<String> {
        let start = self.offset;
        match self.read_string_inner() {
            Ok(value) => Ok(value),
            Err(err) => {
                self.offset = start;
                Err(err)
            }
        }
    }

    fn read_string_inner(&mut self) -> SerResult<String> {
        let length = self.read_u32()? as usize;
        if length == 0 {
            return Ok(String::new());
        }
        let bytes = self.read_bytes(length)?;
        // Content is everything but the terminator; its value is not checked
        let content = &bytes[..length - 1];
        match std::str::from_utf8(content) {
            Ok(value) => Ok(value.to_owned()),
            Err(_) => Err(SerError::InvalidData {
                reason: "string content is not valid UTF-8".into(),
            }),
        }
    }

    /// Read a byte sequence: u32 element count, then the raw bytes.
    ///
    /// On any failure the cursor is restored to the operation start.
    pub fn read_byte_array(&mut self) -> SerResult<Vec<u8>> {
        let start = self.offset;
        match self.read_byte_array_inner() {
            Ok(value) => Ok(value),
            Err(err) => {
                self.offset = start;
                Err(err)
            }
        }
    }

    fn read_byte_array_inner(&mut self) -> SerResult<Vec<u8>> {
        let count = self.read_u32()? as usize;
        Ok(self.read_bytes(count)?.to_vec())
    }
}
