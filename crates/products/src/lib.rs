//! Products domain module.
//!
//! An in-memory registry of products: register, mark sold, list what is still
//! unsold. Pure domain logic (no IO, no storage).

pub mod product;
pub mod registry;

pub use product::Product;
pub use registry::{ProductHandle, ProductRegistry, RegistryId};
