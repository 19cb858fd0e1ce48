//! Storage backends for short URL entries.

mod memory;

pub use memory::InMemoryUrlStore;
