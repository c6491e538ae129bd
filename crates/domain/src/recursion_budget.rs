use super::DomainError;

pub const DEFAULT_MAX_RECURSIONS: usize = 100;

/// Counts resolution steps for a single top-level lookup.
///
/// One budget belongs to one call tree; it is threaded by `&mut` through
/// every recursive step and never shared between lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecursionBudget {
    limit: usize,
    used: usize,
}

impl RecursionBudget {
    pub fn new(limit: usize) -> Self {
        Self { limit, used: 0 }
    }

    /// Takes one step from the budget, failing once `limit` steps were taken.
    pub fn consume(&mut self) -> Result<(), DomainError> {
        if self.used >= self.limit {
            return Err(DomainError::TooManyRecursions { limit: self.limit });
        }
        self.used += 1;
        Ok(())
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.used)
    }
}

impl Default for RecursionBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RECURSIONS)
    }
}
