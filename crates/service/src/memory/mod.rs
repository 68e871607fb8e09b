//! In-memory storage for the registry.
//!
//! Process-lifetime state only: the map is seeded at construction and reset
//! on restart.

pub mod customer_store;
