mod disabled;
mod memory;

pub use disabled::DisabledSessionStorage;
pub use memory::InMemorySessionStorage;
