//! Inbound adapters translating external requests into roster queries while
//! keeping framework details at the edge.

pub mod http;
