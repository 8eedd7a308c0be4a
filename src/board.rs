use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::*;
use embassy_rp::Peripherals;

use crate::config::SWITCH_ACTIVE;

bind_interrupts!(pub struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
    UART0_IRQ => embassy_rp::uart::BufferedInterruptHandler<UART0>;
    ADC_IRQ_FIFO => embassy_rp::adc::InterruptHandler;
});

pub type MidiUsb = USB;
pub type MidiUart = UART0;
pub type MidiTxPin = PIN_0;

/// X, Y
pub type AccelPins = (PIN_28, PIN_29);

pub struct BoardSetup {
    pub led_out: Output<'static>,
    pub switch_in: Input<'static>,

    pub adc: ADC,
    pub accel_pins: AccelPins,

    pub usb: MidiUsb,

    pub uart: MidiUart,
    pub uart_tx_pin: MidiTxPin,
}

pub fn init(p: Peripherals) -> BoardSetup {
    BoardSetup {
        led_out: Output::new(p.PIN_25, Level::Low),
        switch_in: Input::new(p.PIN_5, switch_pull(SWITCH_ACTIVE)),

        adc: p.ADC,
        accel_pins: (p.PIN_28, p.PIN_29),

        usb: p.USB,

        uart: p.UART0,
        uart_tx_pin: p.PIN_0,
    }
}

/// Pull towards the idle level so an open switch reads as released.
fn switch_pull(active: Level) -> Pull {
    match active {
        Level::Low => Pull::Up,
        Level::High => Pull::Down,
    }
}
