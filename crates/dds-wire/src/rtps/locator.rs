// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! RTPS locators: transport addresses where entities can be reached.
//!
//! A locator is kind + 32-bit port + a 16-byte address field. For UDPv4 the
//! IPv4 octets occupy the trailing four bytes (offsets 12-15) and the rest
//! are zero; for UDPv6 the field holds the full 16 octets.

use crate::ser::{CdrReader, CdrWriter, SerResult};
use std::net::Ipv4Addr;

/// Locator address field size (16 bytes, IPv6-width)
pub const LOCATOR_ADDRESS_LEN: usize = 16;

/// Default RTPS discovery port (domain 0 port base).
pub const DEFAULT_DISCOVERY_PORT: u32 = 7400;

/// Transport family of a locator.
///
/// Wire discriminants per RTPS: -1 invalid, 0 reserved, 1 UDPv4, 2 UDPv6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocatorKind {
    Invalid,
    Reserved,
    Udpv4,
    Udpv6,
}

impl LocatorKind {
    /// Wire discriminant (32-bit signed).
    pub fn as_i32(self) -> i32 {
        match self {
            LocatorKind::Invalid => -1,
            LocatorKind::Reserved => 0,
            LocatorKind::Udpv4 => 1,
            LocatorKind::Udpv6 => 2,
        }
    }

    /// Map a wire discriminant back to a kind.
    ///
    /// Unknown values map to `Invalid` so malformed input stays in a defined
    /// sentinel state instead of failing the decode.
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => LocatorKind::Reserved,
            1 => LocatorKind::Udpv4,
            2 => LocatorKind::Udpv6,
            _ => LocatorKind::Invalid,
        }
    }
}

/// Network address (kind + port + 16-byte address field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locator {
    pub kind: LocatorKind,
    pub port: u32,
    pub address: [u8; LOCATOR_ADDRESS_LEN],
}

impl Locator {
    /// Invalid locator: kind sentinel, port 0, zero address.
    pub const fn invalid() -> Self {
        Self {
            kind: LocatorKind::Invalid,
            port: 0,
            address: [0; LOCATOR_ADDRESS_LEN],
        }
    }

    /// Build a UDPv4 locator from dotted-quad text, e.g. `"192.168.1.100"`.
    ///
    /// Malformed text degrades to a zero address with kind `Udpv4` rather
    /// than failing construction; callers that need strict validation use
    /// [`Locator::from_ipv4_addr`] or check [`Locator::ipv4`] on the result.
    pub fn from_ipv4(text: &str, port: u32) -> Self {
        match text.parse::<Ipv4Addr>() {
            Ok(ip) => Self::from_ipv4_addr(ip, port),
            Err(_) => {
                log::debug!("malformed IPv4 locator address {:?}, using zero address", text);
                Self {
                    kind: LocatorKind::Udpv4,
                    port,
                    address: [0; LOCATOR_ADDRESS_LEN],
                }
            }
        }
    }

    /// Build a UDPv4 locator from an already-parsed address.
    ///
    /// Octets land at address offsets 12-15 in network byte order; offsets
    /// 0-11 are zero.
    pub fn from_ipv4_addr(ip: Ipv4Addr, port: u32) -> Self {
        let mut address = [0u8; LOCATOR_ADDRESS_LEN];
        address[12..16].copy_from_slice(&ip.octets());
        Self {
            kind: LocatorKind::Udpv4,
            port,
            address,
        }
    }

    /// Default RTPS discovery multicast locator (239.255.0.1).
    pub fn default_multicast(port: u32) -> Self {
        Self::from_ipv4_addr(Ipv4Addr::new(239, 255, 0, 1), port)
    }

    /// Loopback locator (127.0.0.1).
    pub fn localhost(port: u32) -> Self {
        Self::from_ipv4_addr(Ipv4Addr::LOCALHOST, port)
    }

    /// IPv4 address held in the trailing four address bytes.
    ///
    /// `None` for any kind other than `Udpv4`.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if self.kind != LocatorKind::Udpv4 {
            return None;
        }
        Some(Ipv4Addr::new(
            self.address[12],
            self.address[13],
            self.address[14],
            self.address[15],
        ))
    }

    /// Dotted-quad text for a UDPv4 locator, `None` for any other kind.
    pub fn ipv4_string(&self) -> Option<String> {
        self.ipv4().map(|ip| ip.to_string())
    }

    /// True iff this is a UDPv4 locator in the multicast block 224.0.0.0/4
    /// (first address octet 224-239). Always false for other kinds.
    pub fn is_multicast(&self) -> bool {
        self.kind == LocatorKind::Udpv4 && (224..=239).contains(&self.address[12])
    }

    pub fn is_valid(&self) -> bool {
        self.kind != LocatorKind::Invalid
    }

    /// Wire layout: kind (i32), port (u32), then the 16 address bytes.
    /// Kind and port follow the normal 4-byte alignment rule.
    pub fn encode(&self, writer: &mut CdrWriter) {
        writer.write_i32(self.kind.as_i32());
        writer.write_u32(self.port);
        writer.write_bytes(&self.address);
    }

    pub fn decode(reader: &mut CdrReader<'_>) -> SerResult<Self> {
        let kind = LocatorKind::from_i32(reader.read_i32()?);
        let port = reader.read_u32()?;
        let mut address = [0u8; LOCATOR_ADDRESS_LEN];
        address.copy_from_slice(reader.read_bytes(LOCATOR_ADDRESS_LEN)?);
        Ok(Self {
            kind,
            port,
            address,
        })
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::invalid()
    }
}
