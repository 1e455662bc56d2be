//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants.

mod board_storage;
mod macros;

pub(crate) use macros::define_port_error;

pub use board_storage::{BoardStorage, BoardStorageError};

#[cfg(test)]
pub use board_storage::MockBoardStorage;
