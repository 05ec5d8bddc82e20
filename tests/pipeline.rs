// End-to-end: recorded frames through filters, classifier and console output.

use std::io::Cursor;

use signglove::classifier::UnreachableReason;
use signglove::drivers::replay::ReplaySource;
use signglove::drivers::{AnalogInput, DigitalInput, MotionSensor};
use signglove::tasks::glove::emit;
use signglove::{Glove, GloveConfig, GloveError, MotionSample, RuleTable, Symbol};

const BENT: &str = "1023,1000,800,1000";
const STRAIGHT: &str = "900,850,765,890";

fn frame(flex: &str, touch: [u8; 4], az: f32) -> String {
    format!(
        "{},{},{},{},{},0,0,{},0,0,0\n",
        flex, touch[0], touch[1], touch[2], touch[3], az
    )
}

fn repeat(line: String, n: usize) -> String {
    line.repeat(n)
}

/// Replay `csv` and return the console output, one symbol per frame.
fn run(csv: &str) -> String {
    let mut replay = ReplaySource::new(Cursor::new(csv));
    assert!(replay.next_frame().unwrap());
    let mut glove = Glove::start(&GloveConfig::default(), RuleTable::standard(), &mut replay).unwrap();

    let mut out = Vec::new();
    loop {
        emit(&mut out, &glove.tick_report(&mut replay));
        if !replay.next_frame().unwrap() {
            break;
        }
    }
    String::from_utf8(out).unwrap().lines().collect()
}

#[test]
fn test_fist_with_all_pads_spells_a() {
    let csv = repeat(frame(BENT, [1, 1, 1, 0], 9.8), 5);
    assert_eq!(run(&csv), "-AAAA");
}

#[test]
fn test_flat_hand_thumb_on_first_pad_spells_b() {
    let csv = repeat(frame(STRAIGHT, [1, 0, 0, 0], -9.8), 4);
    assert_eq!(run(&csv), "-BBB");
}

#[test]
fn test_m_depends_on_hand_orientation() {
    let mut csv = repeat(frame(BENT, [0, 1, 1, 0], 3.0), 3);
    csv += &repeat(frame(BENT, [0, 1, 1, 0], 5.0), 2);
    assert_eq!(run(&csv), "-MM--");
}

#[test]
fn test_single_pad_dropout_does_not_break_letter() {
    let mut csv = repeat(frame(BENT, [1, 1, 1, 0], 9.8), 4);
    csv += &frame(BENT, [1, 0, 1, 0], 9.8);
    csv += &repeat(frame(BENT, [1, 1, 1, 0], 9.8), 3);
    assert_eq!(run(&csv), "-AAAAAAA");
}

#[test]
fn test_fourth_pad_is_ignored() {
    let csv = repeat(frame(STRAIGHT, [1, 0, 0, 1], 0.0), 3);
    assert_eq!(run(&csv), "-BB");
}

#[test]
fn test_letter_change_passes_through_filters() {
    // B, then curl into a fist while keeping the thumb on pad 1 only.
    let mut csv = repeat(frame(STRAIGHT, [1, 0, 0, 0], 9.8), 3);
    csv += &repeat(frame(BENT, [1, 0, 0, 0], 9.8), 10);
    assert_eq!(run(&csv), "-BBBBBBBUEEEE");
}

struct DeadImu;

impl AnalogInput for DeadImu {
    fn read_raw(&mut self, _channel: usize) -> i32 {
        900
    }
}

impl DigitalInput for DeadImu {
    fn read_digital(&mut self, _channel: usize) -> bool {
        false
    }
}

impl MotionSensor for DeadImu {
    fn begin(&mut self) -> anyhow::Result<()> {
        anyhow::bail!("MPU6050 not found")
    }

    fn motion_sample(&mut self) -> MotionSample {
        MotionSample::default()
    }
}

#[test]
fn test_missing_imu_is_fatal() {
    let result = Glove::start(&GloveConfig::default(), RuleTable::standard(), &mut DeadImu);
    match result {
        Err(e @ GloveError::MotionInit(_)) => assert!(e.is_fatal()),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("glove started without an IMU"),
    }
}

#[test]
fn test_standard_table_lint() {
    let report = RuleTable::standard().unreachable();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].symbol, 'D');
    assert_eq!(report[0].reason, UnreachableReason::Contradictory);
}

#[test]
fn test_enabling_rule_without_touching_evaluator() {
    let mut replay = ReplaySource::new(Cursor::new(repeat(frame(STRAIGHT, [0, 0, 0, 0], 9.8), 2)));
    assert!(replay.next_frame().unwrap());
    let mut glove = Glove::start(&GloveConfig::default(), RuleTable::standard(), &mut replay).unwrap();
    assert_eq!(glove.tick(&mut replay), Symbol::NoMatch);

    glove.rules_mut().set_enabled('W', true);
    assert!(replay.next_frame().unwrap());
    assert_eq!(glove.tick(&mut replay), Symbol::Letter('W'));
}
