//! Wire models for the Discovery v2 API.
//!
//! Every type here mirrors one JSON object of the service contract. Optional
//! members are `Option` and are left out of the encoded JSON when `None`, so
//! decoding and re-encoding a payload keeps its shape.

pub mod aggregations;
pub mod analyze;
pub mod classifiers;
pub mod collections;
pub mod components;
pub mod documents;
pub mod enrichments;
pub mod notices;
pub mod projects;
pub mod query;
pub mod tables;
pub mod training;

pub use aggregations::*;
pub use analyze::*;
pub use classifiers::*;
pub use collections::*;
pub use components::*;
pub use documents::*;
pub use enrichments::*;
pub use notices::*;
pub use projects::*;
pub use query::*;
pub use tables::*;
pub use training::*;
