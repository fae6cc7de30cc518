//! Command implementations for the sparsevn CLI

pub mod checkout;
pub mod completions;
pub mod list_maps;
pub mod version;
