// SignGlove — Error Types

/// Errors raised while bringing the glove pipeline up.
///
/// Nothing in the per-tick path fails: once [`crate::glove::Glove::start`]
/// returns `Ok`, ticks are pure arithmetic over always-successful reads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GloveError {
    #[error("flex channel {channel}: calibration min {raw_min} must be below max {raw_max}")]
    InvalidCalibration {
        channel: usize,
        raw_min: i32,
        raw_max: i32,
    },

    #[error("{what} window size must be positive (got {size})")]
    InvalidWindow { what: &'static str, size: usize },

    #[error("touch majority {majority} must be within 1..={window}")]
    InvalidMajority { majority: usize, window: usize },

    #[error("motion sensor failed to initialise: {0}")]
    MotionInit(String),
}

impl GloveError {
    /// `true` for hardware bring-up failures that halt the glove for good,
    /// `false` for configuration mistakes.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MotionInit(_))
    }
}
