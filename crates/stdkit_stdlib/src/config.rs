//! Configuration for the standard library functions.

/// Default upper bound on the number of elements one `range` call may produce.
pub const DEFAULT_MAX_RANGE_LEN: usize = 1_000_000;

/// Configuration shared by every function in a [`crate::FunctionRegistry`].
///
/// Controls argument normalization and how much work a single call may do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StdlibConfig {
    /// Maximum number of elements a single `range` call may generate.
    ///
    /// Alphabetic ranges count every string walked, including the ones a
    /// step skips, since each must be generated to reach the next.
    pub max_range_len: usize,

    /// Accept `range` arguments wrapped in a single sequence argument.
    pub spread_single_sequence: bool,
}

impl Default for StdlibConfig {
    fn default() -> Self {
        Self {
            max_range_len: DEFAULT_MAX_RANGE_LEN,
            spread_single_sequence: true,
        }
    }
}

impl StdlibConfig {
    /// Creates a configuration with a small range limit and flat arguments only.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_range_len: 10_000,
            spread_single_sequence: false,
        }
    }

    /// Creates a configuration with no limit on range length.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_range_len: usize::MAX,
            ..Self::default()
        }
    }

    /// Builder method to set the maximum range length.
    #[must_use]
    pub fn with_max_range_len(mut self, len: usize) -> Self {
        self.max_range_len = len;
        self
    }

    /// Builder method to enable/disable spreading of a single sequence argument.
    #[must_use]
    pub fn with_spread_single_sequence(mut self, spread: bool) -> Self {
        self.spread_single_sequence = spread;
        self
    }
}
