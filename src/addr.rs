//! # Dotted-Quad Helpers
//!
//! Parsing and successor arithmetic for IPv4 addresses, shared by the
//! [`crate::walk`] module.

use std::net::Ipv4Addr;
use std::num::ParseIntError;

use thiserror::Error;

/// Ways a dotted-quad string can fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadParseError {
    #[error("expected 4 dot-separated octets, found {0}")]
    OctetCount(usize),
    #[error("invalid octet {octet:?}")]
    Octet {
        octet: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses `a.b.c.d` into an [`Ipv4Addr`].
///
/// Each field is a decimal `u8`. Leading zeros are accepted (`"007"` is 7);
/// anything a byte cannot hold (`"256"`, `"1111"`) is not. This is looser
/// than the `FromStr` impl on [`Ipv4Addr`], which rejects leading zeros.
pub fn parse_quad(s: &str) -> Result<Ipv4Addr, QuadParseError> {
    let fields: Vec<&str> = s.split('.').collect();
    if fields.len() != 4 {
        return Err(QuadParseError::OctetCount(fields.len()));
    }

    let mut octets = [0u8; 4];
    for (slot, field) in octets.iter_mut().zip(fields) {
        *slot = field.parse().map_err(|source| QuadParseError::Octet {
            octet: field.to_string(),
            source,
        })?;
    }

    Ok(Ipv4Addr::from(octets))
}

/// Returns the address one above `addr`, carrying overflow into the
/// next-significant octet.
///
/// `255.255.255.255` wraps around to `0.0.0.0`.
pub fn next_ipv4(addr: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr).wrapping_add(1))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
