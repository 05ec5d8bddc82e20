// SignGlove — Firmware Entry Point
//
// Boot sequence (ESP32-C3):
//   1. Initialise logging and take the peripherals.
//   2. Bring up the flex ADC, the touch pad inputs and the I2C bus.
//   3. Start the glove: validate config, seed the flex filters, wake the
//      MPU6050.  A missing IMU is fatal and `main` returns the error.
//   4. Spawn the glove task, which ticks at ~10 Hz forever.
//
// On any other target the same binary replays recorded frames (CSV from a
// file argument or stdin) through the pipeline and prints one symbol per
// frame.

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use std::thread;
    use std::time::Duration;

    use esp_idf_hal::gpio::{InputPin, PinDriver};
    use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
    use esp_idf_hal::prelude::*;

    use signglove::config::*;
    use signglove::drivers::board::{FlexAdc, GloveBoard};
    use signglove::drivers::imu::Mpu6050;
    use signglove::{Glove, RuleTable};

    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("SignGlove firmware starting…");

    // ---- Peripherals ------------------------------------------------------
    let peripherals = Peripherals::take()?;
    let pins = peripherals.pins;

    let flex = FlexAdc::new()?;
    let touch = [
        PinDriver::input(pins.gpio4.downgrade_input())?,
        PinDriver::input(pins.gpio5.downgrade_input())?,
        PinDriver::input(pins.gpio6.downgrade_input())?,
        PinDriver::input(pins.gpio7.downgrade_input())?,
    ];

    let i2c_config = I2cConfig::new().baudrate(I2C_BAUDRATE_KHZ.kHz().into());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        pins.gpio8,  // SDA
        pins.gpio10, // SCL
        &i2c_config,
    )?;
    log::info!(
        "I2C ready (SDA GPIO{}, SCL GPIO{}, {} kHz)",
        PIN_I2C_SDA,
        PIN_I2C_SCL,
        I2C_BAUDRATE_KHZ
    );

    let mut board = GloveBoard::new(flex, touch, Mpu6050::new(i2c))?;

    // ---- Pipeline ---------------------------------------------------------
    let glove = match Glove::start(&GloveConfig::default(), RuleTable::standard(), &mut board) {
        Ok(glove) => glove,
        Err(e) => {
            log::error!("Glove start FAILED: {}", e);
            return Err(e.into());
        }
    };

    // ---- Glove task (FreeRTOS task via std::thread) ------------------------
    let interval = Duration::from_millis(TICK_INTERVAL_MS);
    let handle = thread::Builder::new()
        .name("glove".into())
        .stack_size(STACK_GLOVE)
        .spawn(move || signglove::tasks::glove::glove_task(glove, board, interval))?;

    // The glove task never returns; the join only parks the main thread.
    let _ = handle.join();
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    use std::fs::File;
    use std::io::{self, BufRead, BufReader};

    use anyhow::{bail, Context};

    use signglove::drivers::replay::ReplaySource;
    use signglove::tasks::glove::emit;
    use signglove::{Glove, GloveConfig, RuleTable};

    let reader: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => Box::new(BufReader::new(
            File::open(&path).with_context(|| format!("opening replay file {}", path))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut replay = ReplaySource::new(reader);
    if !replay.next_frame()? {
        bail!("replay input has no frames");
    }

    // The first frame seeds the flex windows and is ticked like any other.
    let mut glove = Glove::start(&GloveConfig::default(), RuleTable::standard(), &mut replay)?;
    let mut out = io::stdout().lock();
    loop {
        emit(&mut out, &glove.tick_report(&mut replay));
        if !replay.next_frame()? {
            return Ok(());
        }
    }
}
