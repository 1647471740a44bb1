pub mod admission;
pub mod memory;
pub mod source;
pub mod store;
