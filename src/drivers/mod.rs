// SignGlove — Hardware Interfaces
//
// The pipeline only sees these three traits.  Reads are infallible from
// its point of view: a backend that hits a bus error logs it and hands back
// the last good value.

use crate::events::MotionSample;

#[cfg(target_os = "espidf")]
pub mod board;
#[cfg(target_os = "espidf")]
pub mod imu;
pub mod replay;

/// Raw bend-sensor counts, one channel per finger.
pub trait AnalogInput {
    fn read_raw(&mut self, channel: usize) -> i32;
}

/// Raw contact-pad levels.
pub trait DigitalInput {
    fn read_digital(&mut self, channel: usize) -> bool;
}

pub trait MotionSensor {
    /// Bring the sensor up.  Called once before the first tick; an error
    /// here stops the glove.
    fn begin(&mut self) -> anyhow::Result<()>;

    fn motion_sample(&mut self) -> MotionSample;
}

/// Everything a tick reads from.
pub trait GloveHardware: AnalogInput + DigitalInput + MotionSensor {}

impl<T: AnalogInput + DigitalInput + MotionSensor> GloveHardware for T {}
