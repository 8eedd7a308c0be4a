//! The tilt controller writing to the hardware UART instead of USB, for a
//! USB-UART adapter running `ttymidi`.

#![no_std]
#![no_main]

use defmt::{unreachable, *};
use embassy_executor::Spawner;
use embassy_futures::join::join;
use {defmt_rtt as _, panic_probe as _};

use tilt_midi::accel::Accelerometer;
use tilt_midi::button::Button;
use tilt_midi::config::{MIDI_CHANNEL, SWITCH_ACTIVE, TTYMIDI_BAUDRATE};
use tilt_midi::controller::Controller;
use tilt_midi::poll_loop;
use tilt_midi::serial_midi::SerialMidi;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let b = tilt_midi::board::init(p);

    info!("MIDI over UART at {} baud", TTYMIDI_BAUDRATE);

    let mut led = b.led_out;
    led.set_high();

    let switch = Button::new(b.switch_in, SWITCH_ACTIVE);
    let mut accel = Accelerometer::new(b.adc, b.accel_pins);
    let uart = SerialMidi::new(b.uart, b.uart_tx_pin, TTYMIDI_BAUDRATE);
    let mut controller = unwrap!(Controller::new(uart, MIDI_CHANNEL));

    join(
        switch.task(),
        poll_loop::run(&mut controller, &switch, &mut accel),
    )
    .await;

    unreachable!();
}
