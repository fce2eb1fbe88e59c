//! Domain building blocks shared by the storage and HTTP layers.

pub mod department;
pub mod error;
pub mod types;
