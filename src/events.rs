// SignGlove — Pipeline Data Types

use std::fmt;

use crate::config::{FLEX_CHANNELS, TOUCH_CHANNELS};

// ---------------------------------------------------------------------------
// Motion Sample (6-axis IMU reading from MPU6050)
// ---------------------------------------------------------------------------

/// One inertial snapshot: acceleration in m/s², angular rate in rad/s.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionSample {
    pub accel: [f32; 3],
    pub gyro: [f32; 3],
}

impl MotionSample {
    pub fn new(accel: [f32; 3], gyro: [f32; 3]) -> Self {
        Self { accel, gyro }
    }

    /// Hand at rest with gravity along `axis`.
    pub fn at_rest(axis: Axis, g: f32) -> Self {
        let mut accel = [0.0; 3];
        accel[axis as usize] = g;
        Self { accel, gyro: [0.0; 3] }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

// ---------------------------------------------------------------------------
// Classifier output
// ---------------------------------------------------------------------------

/// A letter of the manual alphabet, or the no-match sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Symbol {
    Letter(char),
    #[default]
    NoMatch,
}

impl Symbol {
    /// Character written to the console; `-` for no match.
    pub fn as_char(&self) -> char {
        match self {
            Self::Letter(c) => *c,
            Self::NoMatch => '-',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ---------------------------------------------------------------------------
// Per-tick diagnostics
// ---------------------------------------------------------------------------

/// Output of one flex filter update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlexReading {
    /// Windowed average in raw counts.
    pub average: i32,
    /// Average mapped onto 0..=90°.
    pub degree: i32,
    pub bent: bool,
}

/// Everything one tick saw and decided, including the channels the
/// classifier ignores.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub symbol: Symbol,
    pub flex: [FlexReading; FLEX_CHANNELS],
    pub touch_raw: [bool; TOUCH_CHANNELS],
    pub touch: [bool; TOUCH_CHANNELS],
    pub motion: MotionSample,
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = |v: &[bool]| v.iter().map(|&b| if b { '1' } else { '0' }).collect::<String>();

        write!(f, "{} | Touch raw: {}", self.symbol, bits(&self.touch_raw))?;
        write!(f, " | Touch smoothed: {}", bits(&self.touch))?;
        for (i, flex) in self.flex.iter().enumerate() {
            write!(f, " | Flex{} raw: {} (deg): {}", i + 1, flex.average, flex.degree)?;
        }
        let [ax, ay, az] = self.motion.accel;
        let [gx, gy, gz] = self.motion.gyro;
        write!(f, " | Acc: {ax:.2}, {ay:.2}, {az:.2} | Gyro: {gx:.2}, {gy:.2}, {gz:.2}")
    }
}
