//! Plays a short fixed phrase on the USB virtual serial port every time the
//! switch is pressed. The LED is lit while the phrase plays.

#![no_std]
#![no_main]

use defmt::{unreachable, *};
use embassy_executor::Spawner;
use embassy_futures::join::join3;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use tilt_midi::button::Button;
use tilt_midi::config::{MIDI_CHANNEL, PRESS_POLL_INTERVAL, SWITCH_ACTIVE};
use tilt_midi::controller::Controller;
use tilt_midi::phrase::{self, DEMO_PHRASE};
use tilt_midi::usb_serial::UsbSerial;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let b = tilt_midi::board::init(p);

    info!("MIDI phrase demo...");

    let mut led = b.led_out;
    let switch = Button::new(b.switch_in, SWITCH_ACTIVE);
    let (mut usb, serial) = UsbSerial::new(b.usb).split();
    let mut controller = unwrap!(Controller::new(serial, MIDI_CHANNEL));

    let play_task = async {
        loop {
            while !switch.was_pressed() {
                Timer::after(PRESS_POLL_INTERVAL).await;
            }
            led.set_high();
            if let Err(err) =
                phrase::play(&mut controller, &DEMO_PHRASE, Timer::after_millis).await
            {
                warn!("Midi send error: {}", err);
            }
            led.set_low();
        }
    };

    join3(usb.run(), switch.task(), play_task).await;

    unreachable!();
}
