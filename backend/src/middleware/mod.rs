//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, namely trace
//! correlation with request logging, the cross-origin policy and the stub
//! authorization check.

pub mod authorization;
pub mod cors;
pub mod trace;

pub use authorization::RequireAuthorization;
pub use cors::cors;
pub use trace::{TRACE_ID_HEADER, Trace};
