//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with its in-process
//! collaborators: the upstream directory that serves raw relational records
//! and the sink that persists validated member submissions. Each trait
//! exposes strongly typed errors so adapters map their failures into
//! predictable variants instead of stringly-typed results.

mod member_directory;
mod member_submission_command;
mod member_writer;
mod network_overview_query;
mod network_repository;

#[cfg(test)]
pub use member_directory::MockMemberDirectory;
pub use member_directory::{FixtureMemberDirectory, MemberDirectory, MemberDirectoryError};
#[cfg(test)]
pub use member_submission_command::MockMemberSubmissionCommand;
pub use member_submission_command::MemberSubmissionCommand;
#[cfg(test)]
pub use member_writer::MockMemberWriter;
pub use member_writer::{FixtureMemberWriter, MemberPayload, MemberWriter, MemberWriterError};
#[cfg(test)]
pub use network_overview_query::MockNetworkOverviewQuery;
pub use network_overview_query::{GroupSummary, NetworkOverview, NetworkOverviewQuery};
#[cfg(test)]
pub use network_repository::MockNetworkRepository;
pub use network_repository::{
    FixtureNetworkRepository, NetworkRepository, NetworkRepositoryError,
};
