//! # Range Walker
//!
//! Walks every IPv4 address between two dotted-quad endpoints, inclusive,
//! handing each one to a caller-supplied visitor.

use std::net::Ipv4Addr;

use thiserror::Error;
use tracing::debug;

use crate::addr::{QuadParseError, next_ipv4, parse_quad};

/// Error a visitor reports to abort a walk.
pub type VisitorFault = Box<dyn std::error::Error + Send + Sync>;

/// Ways a range walk can fail.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("invalid start address {addr:?}")]
    Start {
        addr: String,
        #[source]
        source: QuadParseError,
    },
    #[error("invalid end address {addr:?}")]
    End {
        addr: String,
        #[source]
        source: QuadParseError,
    },
    #[error("visitor failed at {addr}")]
    Visitor {
        addr: Ipv4Addr,
        #[source]
        source: VisitorFault,
    },
}

/// Iterator over the ring segment from a start address to an end address,
/// both inclusive.
///
/// Stepping is successor-with-carry and termination is exact equality with
/// the end address, not `<=`. A walk whose start lies numerically above its
/// end therefore wraps through `255.255.255.255` into `0.0.0.0` and stops
/// only when it reaches the end address, after up to 2^32 steps. Callers
/// that want `start <= end` must check it themselves.
#[derive(Debug, Clone)]
pub struct Ipv4Walk {
    next: Option<Ipv4Addr>,
    end: Ipv4Addr,
}

impl Ipv4Walk {
    pub fn new(start: Ipv4Addr, end: Ipv4Addr) -> Self {
        Self {
            next: Some(start),
            end,
        }
    }

    /// Parses both endpoints and builds the walk.
    ///
    /// Fails fast: a bad `start` is reported before `end` is looked at, and
    /// a walk that failed to parse never yields an address.
    pub fn parse(start: &str, end: &str) -> Result<Self, WalkError> {
        let start_addr = parse_quad(start).map_err(|source| WalkError::Start {
            addr: start.to_string(),
            source,
        })?;
        let end_addr = parse_quad(end).map_err(|source| WalkError::End {
            addr: end.to_string(),
            source,
        })?;
        Ok(Self::new(start_addr, end_addr))
    }
}

impl Iterator for Ipv4Walk {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        let current = self.next.take()?;
        if current != self.end {
            self.next = Some(next_ipv4(current));
        }
        Some(current)
    }
}

/// Calls `visit` once for every address from `start` to `end`, inclusive,
/// in ascending ring order.
///
/// The visitor receives each address by value, an immutable snapshot of the
/// four octets. Its first error aborts the walk at that address; earlier
/// visits keep whatever side effects they had, and later addresses are
/// never visited.
pub fn walk_range<F>(start: &str, end: &str, mut visit: F) -> Result<(), WalkError>
where
    F: FnMut(Ipv4Addr) -> Result<(), VisitorFault>,
{
    let walk = Ipv4Walk::parse(start, end)?;
    debug!(start, end, "walking range");

    let mut visited: u64 = 0;
    for addr in walk {
        visit(addr).map_err(|source| WalkError::Visitor { addr, source })?;
        visited += 1;
    }
    debug!(visited, "range walk finished");

    Ok(())
}

/// Parses both endpoints without visiting anything.
///
/// The visitor-less mode of [`walk_range`]: input validation, no iteration.
pub fn validate_range(start: &str, end: &str) -> Result<(), WalkError> {
    Ipv4Walk::parse(start, end).map(|_| ())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
