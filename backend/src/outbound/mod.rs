//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing concrete
//! implementations of the [`crate::domain::ports::BoardStorage`] port:
//!
//! - **storage::memory**: process-local records, used by default and in tests
//! - **storage::file**: one JSON document per record under a capability-scoped
//!   directory
//!
//! Adapters are thin translators that convert between domain types and their
//! stored JSON representation. They contain no business logic.

pub mod storage;
