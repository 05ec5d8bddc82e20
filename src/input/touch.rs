// SignGlove — Touch Channel Debouncer
//
// Majority vote over the last M raw contact readings.  With the default
// 2-of-3 vote a single-sample bounce from the contact pads never reaches
// the classifier, at the cost of one tick of lag on a real edge.

use crate::config::TouchConfig;
use crate::error::GloveError;

#[derive(Debug, Clone)]
pub struct TouchChannel {
    history: Box<[bool]>,
    write_index: usize,
    majority: usize,
    smoothed: bool,
}

impl TouchChannel {
    /// Window starts all-released.
    pub fn new(config: &TouchConfig) -> Result<Self, GloveError> {
        config.validate()?;
        Ok(Self {
            history: vec![false; config.window].into_boxed_slice(),
            write_index: 0,
            majority: config.majority,
            smoothed: false,
        })
    }

    pub fn update(&mut self, raw: bool) -> bool {
        self.history[self.write_index] = raw;
        self.write_index = (self.write_index + 1) % self.history.len();

        let touching = self.history.iter().filter(|&&v| v).count();
        self.smoothed = touching >= self.majority;
        self.smoothed
    }

    pub fn smoothed(&self) -> bool {
        self.smoothed
    }
}
