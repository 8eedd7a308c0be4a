use embassy_rp::gpio::Level;
use embassy_time::Duration;

use crate::poll_loop::PRESS_POLL_MS;

// constants used throughout the code

// midi
pub const MIDI_CHANNEL: u8 = 1;

// switch
pub const DEBOUNCE_TIME: Duration = Duration::from_millis(2);
pub const PRESS_POLL_INTERVAL: Duration = Duration::from_millis(PRESS_POLL_MS);
/// Level the switch pin reads while pressed. Low means a switch to ground
/// with the internal pull-up.
pub const SWITCH_ACTIVE: Level = Level::Low;

// usb serial
pub const USB_VID: u16 = 0x6666;
pub const USB_PID: u16 = 0x4858;
pub const USB_MANUFACTURER: &str = "tilt_midi";
pub const USB_PRODUCT: &str = "Tilt MIDI controller";
pub const USB_SERIAL_NUMBER: &str = "00000001";
pub const USB_MAX_PACKET_SIZE: u16 = 64;

// uart
pub const TTYMIDI_BAUDRATE: u32 = 115200;
pub const SERIAL_MIDI_BUF_LEN: usize = 32;
