// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! RTPS GUID (Globally Unique Identifier) types.
//!
//! A GUID is 16 bytes: a 12-byte prefix naming the participant context and a
//! 4-byte entity id naming a role within it. On the wire a GUID is a run of
//! byte-granular writes -- no internal alignment padding.

use crate::ser::{CdrReader, CdrWriter, SerResult};
use std::fmt;

/// GUID prefix size (RTPS v2.3 spec: 12 bytes)
pub const GUID_PREFIX_LEN: usize = 12;

/// Entity id size (4 bytes)
pub const ENTITY_ID_LEN: usize = 4;

/// Vendor ID stamped into generated GUID prefixes.
///
/// EXPERIMENTAL value, not assigned in the OMG vendor registry. Production
/// deployments should register an official vendor ID.
pub const VENDOR_ID: [u8; 2] = [0x01, 0xBB];

/// 12-byte prefix identifying the owning participant context.
///
/// Equality, ordering and hashing are byte-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GuidPrefix(pub [u8; GUID_PREFIX_LEN]);

impl GuidPrefix {
    /// All-zero prefix (unset/placeholder).
    pub const ZERO: GuidPrefix = GuidPrefix([0; GUID_PREFIX_LEN]);

    pub const fn new(bytes: [u8; GUID_PREFIX_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; GUID_PREFIX_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Generate a fresh prefix from an injected random-byte source.
    ///
    /// Bytes 0-1 carry [`VENDOR_ID`]; bytes 2-11 come from `entropy`. The
    /// source is a parameter so participants can plug in their RNG and tests
    /// can supply deterministic sequences.
    pub fn generate<F: FnMut() -> u8>(mut entropy: F) -> Self {
        let mut bytes = [0u8; GUID_PREFIX_LEN];
        bytes[0] = VENDOR_ID[0];
        bytes[1] = VENDOR_ID[1];
        for byte in &mut bytes[2..] {
            *byte = entropy();
        }
        log::debug!("generated GUID prefix {:02x?}", bytes);
        Self(bytes)
    }

    /// Wire layout: 12 raw bytes, byte-granular (no alignment).
    pub fn encode(&self, writer: &mut CdrWriter) {
        writer.write_bytes(&self.0);
    }

    pub fn decode(reader: &mut CdrReader<'_>) -> SerResult<Self> {
        let mut bytes = [0u8; GUID_PREFIX_LEN];
        bytes.copy_from_slice(reader.read_bytes(GUID_PREFIX_LEN)?);
        Ok(Self(bytes))
    }
}

/// 4-byte id naming an entity role within a participant.
///
/// Well-known built-in values are exposed as associated constants; entity ids
/// are big-endian on the wire, so the byte arrays below are already in wire
/// order (RTPS v2.3 Sec.9.4.5.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntityId(pub [u8; ENTITY_ID_LEN]);

impl EntityId {
    /// Unknown/uninitialized entity.
    pub const UNKNOWN: EntityId = EntityId([0x00, 0x00, 0x00, 0x00]);
    /// The participant itself.
    pub const PARTICIPANT: EntityId = EntityId([0x00, 0x00, 0x01, 0xC1]);
    /// SEDP built-in topic writer.
    pub const SEDP_BUILTIN_TOPIC_WRITER: EntityId = EntityId([0x00, 0x00, 0x02, 0xC2]);
    /// SEDP built-in topic reader.
    pub const SEDP_BUILTIN_TOPIC_READER: EntityId = EntityId([0x00, 0x00, 0x02, 0xC7]);
    /// SEDP built-in publications writer.
    pub const SEDP_BUILTIN_PUBLICATIONS_WRITER: EntityId = EntityId([0x00, 0x00, 0x03, 0xC2]);
    /// SEDP built-in publications reader.
    pub const SEDP_BUILTIN_PUBLICATIONS_READER: EntityId = EntityId([0x00, 0x00, 0x03, 0xC7]);
    /// SEDP built-in subscriptions writer.
    pub const SEDP_BUILTIN_SUBSCRIPTIONS_WRITER: EntityId = EntityId([0x00, 0x00, 0x04, 0xC2]);
    /// SEDP built-in subscriptions reader.
    pub const SEDP_BUILTIN_SUBSCRIPTIONS_READER: EntityId = EntityId([0x00, 0x00, 0x04, 0xC7]);
    /// SPDP built-in participant announcement writer.
    pub const SPDP_BUILTIN_PARTICIPANT_WRITER: EntityId = EntityId([0x00, 0x01, 0x00, 0xC2]);
    /// SPDP built-in participant announcement reader.
    pub const SPDP_BUILTIN_PARTICIPANT_READER: EntityId = EntityId([0x00, 0x01, 0x00, 0xC7]);

    pub const fn new(bytes: [u8; ENTITY_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ENTITY_ID_LEN] {
        &self.0
    }

    /// Wire layout: 4 raw bytes, byte-granular (no alignment).
    pub fn encode(&self, writer: &mut CdrWriter) {
        writer.write_bytes(&self.0);
    }

    pub fn decode(reader: &mut CdrReader<'_>) -> SerResult<Self> {
        let mut bytes = [0u8; ENTITY_ID_LEN];
        bytes.copy_from_slice(reader.read_bytes(ENTITY_ID_LEN)?);
        Ok(Self(bytes))
    }
}

/// RTPS GUID (Globally Unique Identifier)
///
/// 16-byte identifier following DDS-RTPS v2.3 spec.
///
/// # Structure
/// - Prefix: 12 bytes (participant context)
/// - Entity ID: 4 bytes (role within the participant)
///
/// Total order is lexicographic: prefix bytes first, then entity id bytes.
/// Hashable, so usable directly as a map key.
///
/// # Display Format
/// Hex with dots: "01.bb.ac.10.00.00.00.00.00.00.00.01.00.00.01.c1"
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GUID {
    pub prefix: GuidPrefix,
    pub entity_id: EntityId,
}

impl GUID {
    /// Create GUID from separate prefix and entity id
    pub const fn new(prefix: GuidPrefix, entity_id: EntityId) -> Self {
        Self { prefix, entity_id }
    }

    /// Create GUID from raw bytes (16 bytes total)
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut prefix = [0u8; GUID_PREFIX_LEN];
        let mut entity_id = [0u8; ENTITY_ID_LEN];
        prefix.copy_from_slice(&bytes[0..12]);
        entity_id.copy_from_slice(&bytes[12..16]);
        Self {
            prefix: GuidPrefix(prefix),
            entity_id: EntityId(entity_id),
        }
    }

    /// Convert GUID to 16-byte array
    pub fn as_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[0..12].copy_from_slice(&self.prefix.0);
        bytes[12..16].copy_from_slice(&self.entity_id.0);
        bytes
    }

    /// Create GUID with all zeros (invalid/placeholder)
    pub const fn zero() -> Self {
        Self {
            prefix: GuidPrefix([0; GUID_PREFIX_LEN]),
            entity_id: EntityId([0; ENTITY_ID_LEN]),
        }
    }

    /// Check if GUID is zero (invalid)
    pub fn is_zero(&self) -> bool {
        self.prefix.is_zero() && self.entity_id.0.iter().all(|&b| b == 0)
    }

    /// Wire layout: 16 raw bytes, byte-granular (no internal padding).
    pub fn encode(&self, writer: &mut CdrWriter) {
        writer.write_bytes(&self.prefix.0);
        writer.write_bytes(&self.entity_id.0);
    }

    pub fn decode(reader: &mut CdrReader<'_>) -> SerResult<Self> {
        let prefix = GuidPrefix::decode(reader)?;
        let entity_id = EntityId::decode(reader)?;
        Ok(Self { prefix, entity_id })
    }
}

impl fmt::Display for GUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "01.bb.ac.10.00.00.00.00.00.00.00.01.00.00.01.c1"
        for (i, byte) in self.prefix.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        for byte in &self.entity_id.0 {
            write!(f, ".{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for GUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GUID({})", self)
    }
}
