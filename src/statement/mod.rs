//! Statement ingestion: row tokenization, field normalization, reference
//! extraction, and transaction classification

pub mod classify;
pub mod csv;
pub mod extract;
pub mod normalize;

pub use classify::*;
pub use csv::*;
pub use normalize::*;
