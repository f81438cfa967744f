//! Browser location adapters.

mod in_memory;

pub use in_memory::InMemoryLocation;
