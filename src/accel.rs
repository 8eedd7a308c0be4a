use defmt::warn;
use embassy_rp::adc::{Adc, Async, Channel, Config};
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::ADC;
use embassy_rp::Peripheral;

use crate::board::{AccelPins, Irqs};
use crate::poll_loop::AxisSource;
use crate::tilt::{AxisReading, ADC_CENTER};

/// Two-axis analog accelerometer (ADXL335 style, outputs at mid-rail when level).
pub struct Accelerometer<'d> {
    adc: Adc<'d, Async>,
    x: Channel<'d>,
    y: Channel<'d>,
}

impl<'d> Accelerometer<'d> {
    pub fn new(adc_per: impl Peripheral<P = ADC> + 'd, pins: AccelPins) -> Self {
        let adc = Adc::new(adc_per, Irqs, Config::default());

        Self {
            adc,
            x: Channel::new_pin(pins.0, Pull::None),
            y: Channel::new_pin(pins.1, Pull::None),
        }
    }
}

impl AxisSource for Accelerometer<'_> {
    /// X then Y.
    async fn read(&mut self) -> AxisReading {
        let x = read_axis(&mut self.adc, &mut self.x).await;
        let y = read_axis(&mut self.adc, &mut self.y).await;
        AxisReading { x, y }
    }
}

async fn read_axis(adc: &mut Adc<'_, Async>, ch: &mut Channel<'_>) -> u16 {
    match adc.read(ch).await {
        Ok(value) => value,
        Err(err) => {
            warn!("ADC read failed: {}", err);
            ADC_CENTER
        }
    }
}
