//! # ipwalk
//!
//! Enumerates every IPv4 address between a starting and an ending
//! dotted-quad address, both inclusive, handing each one to a
//! caller-supplied visitor in ascending order.
//!
//! The address space is treated as a ring of size 2^32: incrementing
//! `255.255.255.255` lands on `0.0.0.0`, and a walk whose start lies
//! numerically above its end wraps through the top of the ring instead of
//! erroring out.
//!
//! ```
//! use ipwalk::walk_range;
//!
//! let mut hosts = Vec::new();
//! walk_range("10.0.0.1", "10.0.0.3", |addr| {
//!     hosts.push(addr);
//!     Ok(())
//! })?;
//! assert_eq!(hosts.len(), 3);
//! # Ok::<(), ipwalk::WalkError>(())
//! ```

pub mod addr;
pub mod walk;

pub use addr::{QuadParseError, next_ipv4, parse_quad};
pub use walk::{Ipv4Walk, VisitorFault, WalkError, validate_range, walk_range};
