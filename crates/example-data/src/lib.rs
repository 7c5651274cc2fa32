//! Deterministic raw network document generation for demonstration purposes.
//!
//! This crate fabricates believable, reproducible network documents in the
//! upstream wire shape: legacy id spellings, nested versus direct companion
//! references, members shared across groups, and a network responsible who
//! also leads a group. It is designed to be independent of the domain crate
//! so ingestion normalization can be exercised end to end against documents
//! the domain has never seen as typed values.
//!
//! # Example
//!
//! ```
//! use example_data::{ExampleNetworkSeed, generate_raw_network};
//!
//! let seed = ExampleNetworkSeed {
//!     seed: 42,
//!     group_count: 2,
//!     members_per_group: 3,
//!     companion_count: 1,
//! };
//!
//! let document = generate_raw_network(&seed).expect("valid seed");
//! assert_eq!(document["groupes"].as_array().map(Vec::len), Some(2));
//! ```

mod error;
mod generator;
mod seed;

pub use error::GenerationError;
pub use generator::generate_raw_network;
pub use seed::{ExampleNetworkSeed, MAX_ENTITY_COUNT};
