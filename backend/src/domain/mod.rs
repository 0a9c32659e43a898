//! Domain primitives, ports and the roster query service.
//!
//! Purpose: keep lookup semantics and error categories independent of the
//! HTTP adapter. Record types come from the `roster-data` crate.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure type.
//! - TraceId: request-scoped correlation identifier.
//! - RosterQuery (in `ports`): read-only lookup port.
//! - InMemoryRosterQuery: adapter over a generated dataset.
//! - Filters and generic lookups in `roster`.

pub mod error;
pub mod ports;
pub mod roster;
pub mod roster_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::roster::{OrgFilter, ResourceKind, SessionFilter, UserFilter};
pub use self::roster_service::InMemoryRosterQuery;
pub use self::trace_id::TraceId;
