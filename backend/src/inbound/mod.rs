//! Inbound adapters that translate external requests into responses while
//! keeping framework details at the edge.
//!
//! HTTP handlers live under [`http`]. The demonstration server does not reach
//! into the job board services; it only reports health and greets clients.

pub mod http;
