//! Membership domain core.
//!
//! Strongly typed aggregation and form-state logic for church-management
//! networks: deduplicated roster headcounts, picker eligibility filtering,
//! and the member profile form state machine. Transport, persistence, and
//! rendering live in adapters behind the ports defined in
//! [`domain::ports`].

pub mod domain;
