#![cfg_attr(not(test), no_std)]

// hardware independent, tested on the host
pub mod controller;
pub mod midi;
pub mod phrase;
pub mod poll_loop;
pub mod tilt;

#[cfg(test)]
mod test_port;

// RP2040 only
#[cfg(target_os = "none")]
pub mod accel;
#[cfg(target_os = "none")]
pub mod board;
#[cfg(target_os = "none")]
pub mod button;
#[cfg(target_os = "none")]
pub mod config;
#[cfg(target_os = "none")]
pub mod serial_midi;
#[cfg(target_os = "none")]
pub mod usb_serial;
