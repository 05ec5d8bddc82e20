// SignGlove — Tick Pipeline
//
// One tick: read every flex and touch channel, run the filter banks, take a
// motion sample, classify.  All channel state lives in the `Glove`; the
// hardware is borrowed per call.

use crate::classifier::RuleTable;
use crate::config::*;
use crate::drivers::GloveHardware;
use crate::error::GloveError;
use crate::events::{FlexReading, MotionSample, Symbol, TickReport};
use crate::input::{FlexChannel, TouchChannel};

pub struct Glove {
    flex: [FlexChannel; FLEX_CHANNELS],
    touch: [TouchChannel; TOUCH_CHANNELS],
    rules: RuleTable,
}

impl Glove {
    /// Validate `config`, seed the flex windows with a first reading and
    /// bring the motion sensor up.
    ///
    /// A sensor that fails `begin` yields [`GloveError::MotionInit`]; the
    /// caller should stop rather than retry.
    pub fn start<H: GloveHardware>(
        config: &GloveConfig,
        rules: RuleTable,
        hw: &mut H,
    ) -> Result<Self, GloveError> {
        config.validate()?;

        let flex_channel = |i: usize, hw: &mut H| FlexChannel::new(i, &config.flex[i], hw.read_raw(i));
        let flex = [
            flex_channel(0, hw)?,
            flex_channel(1, hw)?,
            flex_channel(2, hw)?,
            flex_channel(3, hw)?,
        ];
        let touch = [
            TouchChannel::new(&config.touch)?,
            TouchChannel::new(&config.touch)?,
            TouchChannel::new(&config.touch)?,
            TouchChannel::new(&config.touch)?,
        ];

        hw.begin()
            .map_err(|e| GloveError::MotionInit(format!("{:#}", e)))?;

        for dead in rules.unreachable() {
            log::warn!(
                "Rule {} ('{}') can never fire: {:?}",
                dead.index,
                dead.symbol,
                dead.reason
            );
        }

        log::info!("Glove started");
        Ok(Self { flex, touch, rules })
    }

    /// Run one cycle and return the classified symbol.
    pub fn tick<H: GloveHardware>(&mut self, hw: &mut H) -> Symbol {
        self.tick_report(hw).symbol
    }

    /// Run one cycle and return the symbol along with every channel's state.
    pub fn tick_report<H: GloveHardware>(&mut self, hw: &mut H) -> TickReport {
        let mut flex = [FlexReading::default(); FLEX_CHANNELS];
        for (i, (channel, reading)) in self.flex.iter_mut().zip(flex.iter_mut()).enumerate() {
            *reading = channel.update(hw.read_raw(i));
        }

        let mut touch_raw = [false; TOUCH_CHANNELS];
        let mut touch = [false; TOUCH_CHANNELS];
        for (i, channel) in self.touch.iter_mut().enumerate() {
            touch_raw[i] = hw.read_digital(i);
            touch[i] = channel.update(touch_raw[i]);
        }

        let motion = hw.motion_sample();
        let symbol = self.classify(&flex, &touch, &motion);

        TickReport {
            symbol,
            flex,
            touch_raw,
            touch,
            motion,
        }
    }

    pub fn rules_mut(&mut self) -> &mut RuleTable {
        &mut self.rules
    }

    fn classify(
        &self,
        flex: &[FlexReading; FLEX_CHANNELS],
        touch: &[bool; TOUCH_CHANNELS],
        motion: &MotionSample,
    ) -> Symbol {
        let bent = CLASSIFIED_FLEX.map(|i| flex[i].bent);
        let touch = CLASSIFIED_TOUCH.map(|i| touch[i]);
        self.rules.classify(bent, touch, motion)
    }
}
