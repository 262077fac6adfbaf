//! Real-time messaging relay
//!
//! A thin in-process hub backing the chat/doubt system. Two kinds of
//! channels exist: per-user lobbies (out-of-band "new message"
//! notifications, joined on login) and per-(course, student, tutor) doubt
//! rooms (live delivery while a chat panel is open).
//!
//! The relay is purely an at-most-once, best-effort notification path.
//! Messages are durably stored through the REST path before anything is
//! announced here; clients reconcile the authoritative order by
//! re-fetching history.

mod events;
mod hub;

pub use events::{ClientCommand, RelayEvent, RoomKey};
pub use hub::RelayHub;
