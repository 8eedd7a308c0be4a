//! Tilt MIDI controller firmware.
//!
//! Press the switch to play a note: tilting the board left/right picks the
//! note, forward/back the velocity. Notes go out on the USB virtual serial
//! port on channel [`config::MIDI_CHANNEL`].

#![no_std]
#![no_main]

use defmt::{unreachable, *};
use embassy_executor::Spawner;
use embassy_futures::join::join3;
use {defmt_rtt as _, panic_probe as _};

use tilt_midi::accel::Accelerometer;
use tilt_midi::button::Button;
use tilt_midi::config;
use tilt_midi::controller::Controller;
use tilt_midi::poll_loop;
use tilt_midi::usb_serial::UsbSerial;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let b = tilt_midi::board::init(p);

    info!("led on!");
    let mut led = b.led_out;
    led.set_high();

    let switch = Button::new(b.switch_in, config::SWITCH_ACTIVE);
    let mut accel = Accelerometer::new(b.adc, b.accel_pins);
    let (mut usb, serial) = UsbSerial::new(b.usb).split();
    let mut controller = unwrap!(Controller::new(serial, config::MIDI_CHANNEL));

    join3(
        usb.run(),
        switch.task(),
        poll_loop::run(&mut controller, &switch, &mut accel),
    )
    .await;

    unreachable!();
}
