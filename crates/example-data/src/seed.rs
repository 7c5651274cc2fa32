//! Seed configuration for network document generation.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Upper bound on every per-entity count in a seed.
///
/// Keeps generated documents render-sized; demonstrations never need more.
pub const MAX_ENTITY_COUNT: usize = 64;

/// Describes one reproducible network document.
///
/// Equal seeds generate byte-identical documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleNetworkSeed {
    /// RNG seed driving names and document variety.
    pub seed: u64,
    /// Number of groups in the network.
    pub group_count: usize,
    /// Number of members per group.
    pub members_per_group: usize,
    /// Number of companions attached outside any group.
    pub companion_count: usize,
}

impl ExampleNetworkSeed {
    /// Check the seed against the generator bounds.
    pub const fn validate(&self) -> Result<(), GenerationError> {
        if self.group_count == 0 {
            return Err(GenerationError::NoGroups);
        }
        if self.members_per_group == 0 {
            return Err(GenerationError::EmptyGroups);
        }
        if self.group_count > MAX_ENTITY_COUNT
            || self.members_per_group > MAX_ENTITY_COUNT
            || self.companion_count > MAX_ENTITY_COUNT
        {
            return Err(GenerationError::TooLarge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const fn seed(group_count: usize, members_per_group: usize, companion_count: usize) -> ExampleNetworkSeed {
        ExampleNetworkSeed {
            seed: 1,
            group_count,
            members_per_group,
            companion_count,
        }
    }

    #[rstest]
    #[case::no_groups(seed(0, 3, 1), GenerationError::NoGroups)]
    #[case::empty_groups(seed(2, 0, 1), GenerationError::EmptyGroups)]
    #[case::too_many_groups(seed(65, 3, 1), GenerationError::TooLarge)]
    #[case::too_many_companions(seed(2, 3, 65), GenerationError::TooLarge)]
    fn invalid_seeds_are_rejected(
        #[case] invalid: ExampleNetworkSeed,
        #[case] expected: GenerationError,
    ) {
        assert_eq!(invalid.validate(), Err(expected));
    }

    #[rstest]
    fn minimal_seed_is_accepted() {
        assert_eq!(seed(1, 1, 0).validate(), Ok(()));
    }
}
