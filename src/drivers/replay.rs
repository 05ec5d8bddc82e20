// SignGlove — Recorded Frame Replay
//
// Host-side stand-in for the glove board.  Each CSV line is one tick's worth
// of raw readings:
//
//   f1,f2,f3,f4,t1,t2,t3,t4,ax,ay,az,gx,gy,gz
//
// Flex values are raw 10-bit counts, touch values 0/1, accel in m/s² and
// gyro in rad/s.  Blank lines and `#` comments are skipped.

use std::io::BufRead;

use anyhow::{bail, Context};

use super::{AnalogInput, DigitalInput, MotionSensor};
use crate::config::{FLEX_CHANNELS, TOUCH_CHANNELS};
use crate::events::MotionSample;

const FIELDS: usize = FLEX_CHANNELS + TOUCH_CHANNELS + 6;

/// Raw readings for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    pub flex: [i32; FLEX_CHANNELS],
    pub touch: [bool; TOUCH_CHANNELS],
    pub motion: MotionSample,
}

impl Frame {
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != FIELDS {
            bail!("expected {} fields, found {}", FIELDS, fields.len());
        }

        let mut frame = Frame::default();
        let (flex, rest) = fields.split_at(FLEX_CHANNELS);
        let (touch, motion) = rest.split_at(TOUCH_CHANNELS);

        for (slot, field) in frame.flex.iter_mut().zip(flex) {
            *slot = field
                .parse()
                .with_context(|| format!("bad flex reading {:?}", field))?;
        }
        for (slot, field) in frame.touch.iter_mut().zip(touch) {
            *slot = match *field {
                "0" => false,
                "1" => true,
                other => bail!("bad touch level {:?} (want 0 or 1)", other),
            };
        }
        let vectors = frame
            .motion
            .accel
            .iter_mut()
            .chain(frame.motion.gyro.iter_mut());
        for (slot, field) in vectors.zip(motion) {
            *slot = field
                .parse()
                .with_context(|| format!("bad motion value {:?}", field))?;
        }

        Ok(frame)
    }
}

impl AnalogInput for Frame {
    fn read_raw(&mut self, channel: usize) -> i32 {
        self.flex[channel]
    }
}

impl DigitalInput for Frame {
    fn read_digital(&mut self, channel: usize) -> bool {
        self.touch[channel]
    }
}

impl MotionSensor for Frame {
    fn begin(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn motion_sample(&mut self) -> MotionSample {
        self.motion
    }
}

/// Streams frames from a reader; the hardware traits read the current one.
pub struct ReplaySource<R> {
    reader: R,
    line_no: usize,
    line: String,
    current: Frame,
}

impl<R: BufRead> ReplaySource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            line: String::new(),
            current: Frame::default(),
        }
    }

    /// Load the next frame.  `Ok(false)` at end of input.
    pub fn next_frame(&mut self) -> anyhow::Result<bool> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(false);
            }
            self.line_no += 1;

            let trimmed = self.line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            self.current =
                Frame::parse(trimmed).with_context(|| format!("replay line {}", self.line_no))?;
            return Ok(true);
        }
    }
}

impl<R> AnalogInput for ReplaySource<R> {
    fn read_raw(&mut self, channel: usize) -> i32 {
        self.current.read_raw(channel)
    }
}

impl<R> DigitalInput for ReplaySource<R> {
    fn read_digital(&mut self, channel: usize) -> bool {
        self.current.read_digital(channel)
    }
}

impl<R> MotionSensor for ReplaySource<R> {
    fn begin(&mut self) -> anyhow::Result<()> {
        log::info!("Replay motion source ready");
        Ok(())
    }

    fn motion_sample(&mut self) -> MotionSample {
        self.current.motion
    }
}
