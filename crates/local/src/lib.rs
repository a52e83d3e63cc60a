//! Melodium Local - key-value backed memory store
//!
//! The whole memory list lives under one key of a synchronous key-value
//! store, the way the browser version kept it in localStorage.

mod client;
mod db;
mod id;

pub use client::{MemoryStore, STORAGE_KEY};
pub use db::{FileKeyValueStore, InMemoryKeyValueStore, STORAGE_FILE};
pub use id::generate_id;
