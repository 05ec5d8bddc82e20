// SignGlove — MPU6050 IMU Driver
//
// Register-level driver.  The glove has nothing else on I2C, so the driver
// owns the bus outright.

use anyhow::{bail, Context};
use esp_idf_hal::i2c::I2cDriver;

use super::MotionSensor;
use crate::config::*;
use crate::events::MotionSample;

// MPU6050 register addresses
const REG_PWR_MGMT_1: u8 = 0x6B;
const REG_CONFIG: u8 = 0x1A;
const REG_GYRO_CONFIG: u8 = 0x1B;
const REG_ACCEL_CONFIG: u8 = 0x1C;
const REG_ACCEL_XOUT_H: u8 = 0x3B; // Start of 14-byte sensor burst
const REG_WHO_AM_I: u8 = 0x75;
const WHO_AM_I_EXPECTED: u8 = 0x68;

const DLPF_5_HZ: u8 = 0x06;
const GYRO_FS_500: u8 = 0x08;
const ACCEL_FS_8G: u8 = 0x10;

pub struct Mpu6050<'d> {
    i2c: I2cDriver<'d>,
    /// Returned again when a burst read fails.
    last: MotionSample,
}

impl<'d> Mpu6050<'d> {
    pub fn new(i2c: I2cDriver<'d>) -> Self {
        Self {
            i2c,
            last: MotionSample::default(),
        }
    }

    fn who_am_i(&mut self) -> anyhow::Result<u8> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(I2C_ADDR_MPU6050, &[REG_WHO_AM_I], &mut buf, I2C_TIMEOUT_TICKS)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> anyhow::Result<()> {
        self.i2c
            .write(I2C_ADDR_MPU6050, &[reg, value], I2C_TIMEOUT_TICKS)
            .with_context(|| format!("MPU6050 write to register {:#04x}", reg))?;
        Ok(())
    }

    /// Burst-read all 6 axes and convert to m/s² and rad/s.
    fn read_data(&mut self) -> anyhow::Result<MotionSample> {
        let mut raw = [0u8; 14];
        self.i2c.write_read(
            I2C_ADDR_MPU6050,
            &[REG_ACCEL_XOUT_H],
            &mut raw,
            I2C_TIMEOUT_TICKS,
        )?;

        let word = |i: usize| i16::from_be_bytes([raw[i], raw[i + 1]]) as f32;
        let accel = |i: usize| word(i) / ACCEL_SCALE_8G * STANDARD_GRAVITY;
        let gyro = |i: usize| (word(i) / GYRO_SCALE_500).to_radians();

        Ok(MotionSample {
            accel: [accel(0), accel(2), accel(4)],
            // raw[6..8] is temperature, unused
            gyro: [gyro(8), gyro(10), gyro(12)],
        })
    }
}

impl MotionSensor for Mpu6050<'_> {
    /// Wake the sensor and configure accel (±8 g), gyro (±500 °/s), DLPF 5 Hz.
    fn begin(&mut self) -> anyhow::Result<()> {
        let id = self.who_am_i().context("MPU6050 not found")?;
        if id != WHO_AM_I_EXPECTED {
            bail!("MPU6050 not found (WHO_AM_I = {:#04x})", id);
        }

        // Wake up (clear SLEEP bit)
        self.write_register(REG_PWR_MGMT_1, 0x00)?;
        self.write_register(REG_CONFIG, DLPF_5_HZ)?;
        self.write_register(REG_GYRO_CONFIG, GYRO_FS_500)?;
        self.write_register(REG_ACCEL_CONFIG, ACCEL_FS_8G)?;

        log::info!("MPU6050 initialised (±8g, ±500°/s, DLPF 5Hz)");
        Ok(())
    }

    fn motion_sample(&mut self) -> MotionSample {
        match self.read_data() {
            Ok(sample) => self.last = sample,
            Err(e) => log::warn!("IMU read error: {}, holding last sample", e),
        }
        self.last
    }
}
