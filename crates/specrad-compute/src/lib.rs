//! # Specrad Compute
//!
//! Communication layer for the specrad distributed eigensolver. This crate
//! provides a [`RoleLink`](link::RoleLink) trait that isolates the protocol
//! logic in `specrad-core` from how the four cooperating roles are actually
//! scheduled and connected.
//!
//! ## Available transports
//!
//! | Transport | Module | Status |
//! |-----------|--------|--------|
//! | In-process rendezvous channels | [`channel`] | Implemented |
//!
//! Every transport must preserve the protocol's two guarantees: sends and
//! receives are blocking, and message order between any two roles matches
//! program order on both ends.

pub mod channel;
pub mod link;

pub use channel::ChannelLink;
pub use link::{LinkError, Message, RoleLink};
