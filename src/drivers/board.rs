// SignGlove — Glove Carrier Board
//
// Flex sensors sit on ADC1 (oneshot mode, raw ESP-IDF API), the thumb
// contact pads on plain GPIO inputs, and the MPU6050 on I2C.

use anyhow::bail;
use esp_idf_hal::gpio::{AnyInputPin, Input, PinDriver};

use super::imu::Mpu6050;
use super::{AnalogInput, DigitalInput, MotionSensor};
use crate::config::*;
use crate::events::MotionSample;

// ---------------------------------------------------------------------------
// Flex ADC
// ---------------------------------------------------------------------------

pub struct FlexAdc {
    handle: esp_idf_sys::adc_oneshot_unit_handle_t,
    channels: [esp_idf_sys::adc_channel_t; FLEX_CHANNELS],
    /// Last good reading per channel, repeated after a failed conversion.
    last: [i32; FLEX_CHANNELS],
}

// SAFETY: the oneshot unit handle is only ever used by the thread that owns
// the `FlexAdc`; moving it to the glove task before first use is fine.
unsafe impl Send for FlexAdc {}

impl FlexAdc {
    /// ADC1 with 11 dB attenuation (0–3.3 V) on GPIO0..GPIO3.
    pub fn new() -> anyhow::Result<Self> {
        let channels = [
            esp_idf_sys::adc_channel_t_ADC_CHANNEL_0,
            esp_idf_sys::adc_channel_t_ADC_CHANNEL_1,
            esp_idf_sys::adc_channel_t_ADC_CHANNEL_2,
            esp_idf_sys::adc_channel_t_ADC_CHANNEL_3,
        ];

        unsafe {
            let mut handle: esp_idf_sys::adc_oneshot_unit_handle_t = core::ptr::null_mut();
            let unit_cfg = esp_idf_sys::adc_oneshot_unit_init_cfg_t {
                unit_id: esp_idf_sys::adc_unit_t_ADC_UNIT_1,
                ulp_mode: esp_idf_sys::adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
                ..core::mem::zeroed()
            };
            let ret = esp_idf_sys::adc_oneshot_new_unit(&unit_cfg, &mut handle);
            if ret != esp_idf_sys::ESP_OK {
                bail!("ADC unit init failed ({})", ret);
            }

            let chan_cfg = esp_idf_sys::adc_oneshot_chan_cfg_t {
                atten: esp_idf_sys::adc_atten_t_ADC_ATTEN_DB_11,
                bitwidth: esp_idf_sys::adc_bitwidth_t_ADC_BITWIDTH_12,
            };
            for &channel in &channels {
                let ret = esp_idf_sys::adc_oneshot_config_channel(handle, channel, &chan_cfg);
                if ret != esp_idf_sys::ESP_OK {
                    bail!("ADC channel {} config failed ({})", channel, ret);
                }
            }
            log::info!("Flex ADC ready on GPIO {:?}", PIN_FLEX);

            Ok(Self {
                handle,
                channels,
                last: [0; FLEX_CHANNELS],
            })
        }
    }
}

impl AnalogInput for FlexAdc {
    fn read_raw(&mut self, channel: usize) -> i32 {
        let mut raw: i32 = 0;
        let ret =
            unsafe { esp_idf_sys::adc_oneshot_read(self.handle, self.channels[channel], &mut raw) };
        if ret == esp_idf_sys::ESP_OK {
            self.last[channel] = raw >> ADC_RAW_SHIFT;
        } else {
            log::warn!("Flex ADC read failed on channel {} ({})", channel, ret);
        }
        self.last[channel]
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

pub type TouchPin = PinDriver<'static, AnyInputPin, Input>;

pub struct GloveBoard {
    flex: FlexAdc,
    touch: [TouchPin; TOUCH_CHANNELS],
    imu: Mpu6050<'static>,
}

impl GloveBoard {
    pub fn new(
        flex: FlexAdc,
        touch: [TouchPin; TOUCH_CHANNELS],
        imu: Mpu6050<'static>,
    ) -> anyhow::Result<Self> {
        // Pads float when the thumb is away; hold them low.
        for pin in PIN_TOUCH {
            let ret = unsafe {
                esp_idf_sys::gpio_set_pull_mode(pin, esp_idf_sys::gpio_pull_mode_t_GPIO_PULLDOWN_ONLY)
            };
            if ret != esp_idf_sys::ESP_OK {
                bail!("Touch pad GPIO{} pull-down failed ({})", pin, ret);
            }
        }
        log::info!("Touch pads ready on GPIO {:?}", PIN_TOUCH);
        Ok(Self { flex, touch, imu })
    }
}

impl AnalogInput for GloveBoard {
    fn read_raw(&mut self, channel: usize) -> i32 {
        self.flex.read_raw(channel)
    }
}

impl DigitalInput for GloveBoard {
    fn read_digital(&mut self, channel: usize) -> bool {
        self.touch[channel].is_high()
    }
}

impl MotionSensor for GloveBoard {
    fn begin(&mut self) -> anyhow::Result<()> {
        self.imu.begin()
    }

    fn motion_sample(&mut self) -> MotionSample {
        self.imu.motion_sample()
    }
}
