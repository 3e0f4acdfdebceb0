use crate::Var;

/// Reasons a mapping fails to be a permutation.
///
/// Returned by [`Mapping::try_permutation`] and
/// [`Mapping::validate_permutation`]. Remapping operations themselves never
/// return this error; they panic on a mapping that breaks their contract.
///
/// [`Mapping::try_permutation`]: crate::Mapping::try_permutation
/// [`Mapping::validate_permutation`]: crate::Mapping::validate_permutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MappingError {
    /// An entry points outside the mapping's own index space.
    #[display("entry {position} targets {target}, outside 0..{len}")]
    OutOfRange {
        /// Position of the offending entry.
        position: usize,
        /// The out-of-range target.
        target: Var,
        /// Length of the mapping.
        len: usize,
    },
    /// Two entries share the same target.
    #[display("target {target} appears at positions {first} and {second}")]
    DuplicateTarget {
        /// The repeated target.
        target: Var,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the second occurrence.
        second: usize,
    },
}
