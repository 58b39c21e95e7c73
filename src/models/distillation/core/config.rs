use crate::support::{fallback::FallbackPolicy, root::RootConfig};

/// Configuration for a McCabe-Thiele design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConfig {
    /// Hard cap on the number of stepped stages.
    ///
    /// Guards against non-convergence near a pinch; reaching it is reported as
    /// [`Termination::StageLimitReached`](super::Termination::StageLimitReached).
    pub max_stages: usize,

    /// Relative tolerance on the bottoms composition.
    ///
    /// Stepping stops once the liquid composition reaches
    /// `x_bottoms * (1 + bottoms_tolerance)`.
    pub bottoms_tolerance: f64,

    /// Root finding for the feed-line pinch.
    pub root: RootConfig,

    /// Values substituted for degenerate cases.
    pub fallbacks: FallbackPolicy,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            max_stages: 50,
            bottoms_tolerance: 0.01,
            root: RootConfig::default(),
            fallbacks: FallbackPolicy::default(),
        }
    }
}
