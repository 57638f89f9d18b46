//! Errors that can occur while matching.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The pattern nests deeper than the configured limit.
    #[error("recursion limit exceeded ({0})")]
    RecursionLimitExceeded(u32),
}
