//! Service layer providing the registry operations on top of `models`.
//! - Keeps locking and mutation rules away from the HTTP handlers.
//! - Reuses validation and the entity definition from the `models` crate.
//! - Surfaces clear error types for the transport layer to map.

pub mod errors;
pub mod registry;
pub mod memory;
