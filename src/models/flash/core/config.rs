use crate::support::{fallback::FallbackPolicy, root::RootConfig};

/// Configuration for a flash calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashConfig {
    /// Number of composition intervals in a [`TxyTable`](super::TxyTable).
    pub table_intervals: usize,

    /// Root finding for phase boundaries and branch compositions.
    pub root: RootConfig,

    /// Values substituted for degenerate cases.
    pub fallbacks: FallbackPolicy,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            table_intervals: 100,
            root: RootConfig::default(),
            fallbacks: FallbackPolicy::default(),
        }
    }
}
