//! Unit tests for the store crate.

mod memory_store;
