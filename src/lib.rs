// SignGlove — Manual-alphabet glove firmware
//
// Bend sensors, thumb contact pads and an MPU6050 in; one letter per tick
// out.  The pipeline (filters + rule table) is plain Rust and runs the same
// on the ESP32-C3 and on a workstation; only `drivers::board` and
// `drivers::imu` touch ESP-IDF.

pub mod classifier;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;
pub mod glove;
pub mod input;
pub mod tasks;

pub use classifier::RuleTable;
pub use config::GloveConfig;
pub use error::GloveError;
pub use events::{MotionSample, Symbol, TickReport};
pub use glove::Glove;
