// SignGlove — Hardware & System Configuration
// Target: ESP32-C3-DevKitM-1 (RISC-V) on the glove carrier board

use crate::error::GloveError;

// ---------------------------------------------------------------------------
// GPIO Pin Definitions (ESP32-C3-DevKitM-1)
// ---------------------------------------------------------------------------
pub const PIN_FLEX: [i32; FLEX_CHANNELS] = [0, 1, 2, 3]; // ADC1_CH0..CH3: index, middle, (unused), ring
pub const PIN_TOUCH: [i32; TOUCH_CHANNELS] = [4, 5, 6, 7]; // thumb contact pads T1..T4
pub const PIN_I2C_SDA: i32 = 8;
pub const PIN_I2C_SCL: i32 = 10;

// ---------------------------------------------------------------------------
// I2C Bus
// ---------------------------------------------------------------------------
pub const I2C_ADDR_MPU6050: u8 = 0x68;
pub const I2C_TIMEOUT_TICKS: u32 = 1000; // FreeRTOS ticks
pub const I2C_BAUDRATE_KHZ: u32 = 400;

// ---------------------------------------------------------------------------
// Task Stack Sizes (bytes)
// ---------------------------------------------------------------------------
pub const STACK_GLOVE: usize = 8192;

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const TICK_INTERVAL_MS: u64 = 100; // ~10 Hz

// ---------------------------------------------------------------------------
// Channel layout
// ---------------------------------------------------------------------------
pub const FLEX_CHANNELS: usize = 4;
pub const TOUCH_CHANNELS: usize = 4;

/// Flex channels that feed the classifier (index, middle, ring).
/// Channel 2 is filtered and reported but never classified.
pub const CLASSIFIED_FLEX: [usize; 3] = [0, 1, 3];

/// Touch channels that feed the classifier. Channel 3 is diagnostic only.
pub const CLASSIFIED_TOUCH: [usize; 3] = [0, 1, 2];

// ---------------------------------------------------------------------------
// Flex filter
// ---------------------------------------------------------------------------
pub const FLEX_WINDOW: usize = 10;
pub const FLEX_DEGREE_MAX: i32 = 90;

/// Raw ADC counts (10-bit scale) seen at 0° and 90° for each bend sensor.
pub const FLEX_CALIBRATION: [FlexCalibration; FLEX_CHANNELS] = [
    FlexCalibration { raw_min: 900, raw_max: 1023 },
    FlexCalibration { raw_min: 850, raw_max: 960 },
    FlexCalibration { raw_min: 765, raw_max: 783 },
    FlexCalibration { raw_min: 890, raw_max: 965 },
];

/// Degrees above which a finger counts as bent. Channel 2 is never
/// classified, so its threshold only affects diagnostics.
pub const FLEX_BEND_THRESHOLD_DEG: [i32; FLEX_CHANNELS] = [60, 77, 60, 70];

/// The ESP32-C3 ADC is 12-bit; calibration was taken on a 10-bit part.
pub const ADC_RAW_SHIFT: u32 = 2;

// ---------------------------------------------------------------------------
// Touch debounce
// ---------------------------------------------------------------------------
pub const TOUCH_WINDOW: usize = 3;
pub const TOUCH_MAJORITY: usize = TOUCH_WINDOW / 2 + 1; // ≥2 of last 3

// ---------------------------------------------------------------------------
// Motion guards (empirical, MPU6050 at ±8 g / ±500 °/s / DLPF 5 Hz)
// ---------------------------------------------------------------------------
pub const ACCEL_Z_M_BELOW: f32 = 4.0;     // m/s²
pub const ACCEL_Z_P_ABOVE: f32 = 2.0;     // m/s²
pub const ACCEL_Y_G_ABOVE: f32 = 6.0;     // m/s²
pub const ACCEL_Z_Q_BELOW: f32 = -7.0;    // m/s²
pub const ACCEL_Z_Y_BELOW: f32 = -6.0;    // m/s²
pub const GYRO_TRACE_ABOVE: f32 = 1.0;    // rad/s, J and Z traces

// ---------------------------------------------------------------------------
// MPU6050 Sensor Scale Factors
// ---------------------------------------------------------------------------
pub const ACCEL_SCALE_8G: f32 = 4096.0;   // LSB/g  at ±8 g
pub const GYRO_SCALE_500: f32 = 65.5;     // LSB/°/s at ±500 °/s
pub const STANDARD_GRAVITY: f32 = 9.80665;

// ---------------------------------------------------------------------------
// Typed configuration
// ---------------------------------------------------------------------------

/// Linear range of one bend sensor, in raw ADC counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexCalibration {
    pub raw_min: i32,
    pub raw_max: i32,
}

/// Static settings for one flex channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexChannelConfig {
    pub calibration: FlexCalibration,
    pub bend_threshold_deg: i32,
    pub window: usize,
}

/// Static settings shared by all touch channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchConfig {
    pub window: usize,
    pub majority: usize,
}

/// Everything the pipeline needs at construction. Immutable once the glove
/// has started.
#[derive(Debug, Clone, PartialEq)]
pub struct GloveConfig {
    pub flex: [FlexChannelConfig; FLEX_CHANNELS],
    pub touch: TouchConfig,
}

impl Default for GloveConfig {
    fn default() -> Self {
        let channel = |i: usize| FlexChannelConfig {
            calibration: FLEX_CALIBRATION[i],
            bend_threshold_deg: FLEX_BEND_THRESHOLD_DEG[i],
            window: FLEX_WINDOW,
        };
        Self {
            flex: [channel(0), channel(1), channel(2), channel(3)],
            touch: TouchConfig {
                window: TOUCH_WINDOW,
                majority: TOUCH_MAJORITY,
            },
        }
    }
}

impl GloveConfig {
    /// Reject calibration ranges and window sizes the filters cannot use.
    pub fn validate(&self) -> Result<(), GloveError> {
        for (channel, flex) in self.flex.iter().enumerate() {
            flex.validate(channel)?;
        }
        self.touch.validate()
    }
}

impl FlexChannelConfig {
    pub fn validate(&self, channel: usize) -> Result<(), GloveError> {
        let FlexCalibration { raw_min, raw_max } = self.calibration;
        if raw_min >= raw_max {
            return Err(GloveError::InvalidCalibration {
                channel,
                raw_min,
                raw_max,
            });
        }
        if self.window == 0 {
            return Err(GloveError::InvalidWindow {
                what: "flex",
                size: self.window,
            });
        }
        Ok(())
    }
}

impl TouchConfig {
    pub fn validate(&self) -> Result<(), GloveError> {
        if self.window == 0 {
            return Err(GloveError::InvalidWindow {
                what: "touch",
                size: self.window,
            });
        }
        if self.majority == 0 || self.majority > self.window {
            return Err(GloveError::InvalidMajority {
                majority: self.majority,
                window: self.window,
            });
        }
        Ok(())
    }
}
