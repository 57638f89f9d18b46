/// Runtime limits for a match.
#[derive(Clone, Copy, Debug)]
pub struct MatchLimits {
    /// Maximum pattern nesting followed (default: 256).
    pub(crate) recursion_limit: u32,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            recursion_limit: 256,
        }
    }
}

impl MatchLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}
