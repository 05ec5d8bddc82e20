// SignGlove — Flex Channel Filter
//
// Fixed-window moving average over raw bend-sensor counts, mapped linearly
// onto 0–90° and thresholded into bent / straight.  O(1) per sample: the
// running sum is patched with the evicted and incoming values instead of
// re-summing the window.

use crate::config::{FlexCalibration, FlexChannelConfig, FLEX_DEGREE_MAX};
use crate::error::GloveError;
use crate::events::FlexReading;

#[derive(Debug, Clone)]
pub struct FlexChannel {
    history: Box<[i32]>,
    /// Always equal to `history.iter().sum()`.
    running_sum: i64,
    write_index: usize,
    calibration: FlexCalibration,
    bend_threshold_deg: i32,
    last: FlexReading,
}

impl FlexChannel {
    /// Build a channel whose whole window is pre-filled with `initial_raw`,
    /// so the first tick reports a settled value instead of ramping up.
    pub fn new(
        channel: usize,
        config: &FlexChannelConfig,
        initial_raw: i32,
    ) -> Result<Self, GloveError> {
        config.validate(channel)?;

        let mut filter = Self {
            history: vec![initial_raw; config.window].into_boxed_slice(),
            running_sum: initial_raw as i64 * config.window as i64,
            write_index: 0,
            calibration: config.calibration,
            bend_threshold_deg: config.bend_threshold_deg,
            last: FlexReading::default(),
        };
        filter.last = filter.evaluate();
        Ok(filter)
    }

    /// Push one raw sample and return the filtered reading.
    pub fn update(&mut self, raw: i32) -> FlexReading {
        let slot = &mut self.history[self.write_index];
        self.running_sum += raw as i64 - *slot as i64;
        *slot = raw;
        self.write_index = (self.write_index + 1) % self.history.len();

        self.last = self.evaluate();
        self.last
    }

    /// Reading produced by the most recent update.
    pub fn reading(&self) -> FlexReading {
        self.last
    }

    /// Windowed mean, truncated toward zero.
    pub fn average(&self) -> i32 {
        (self.running_sum / self.history.len() as i64) as i32
    }

    fn evaluate(&self) -> FlexReading {
        let average = self.average();
        let degree = map_clamped(
            average,
            self.calibration.raw_min,
            self.calibration.raw_max,
            0,
            FLEX_DEGREE_MAX,
        );

        FlexReading {
            average,
            degree,
            bent: degree > self.bend_threshold_deg,
        }
    }
}

/// Integer linear re-map with truncation toward zero, clamped to
/// `out_min..=out_max`. `in_min < in_max` is guaranteed by config validation.
///
/// The clamp happens in `i64` so a narrow calibration span cannot wrap a
/// far out-of-range average back into the output range.
fn map_clamped(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    let scaled = (x as i64 - in_min as i64) * (out_max as i64 - out_min as i64)
        / (in_max as i64 - in_min as i64);
    (scaled + out_min as i64).clamp(out_min as i64, out_max as i64) as i32
}
