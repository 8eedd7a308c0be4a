//! MIDI 1.0 channel-voice messages as they go out on the wire.
//!
//! Every message is three bytes: the status byte (command in the high nibble,
//! channel 0-15 in the low nibble) followed by two 7-bit data bytes. Messages
//! with a single data byte are padded with a zero.

use core::fmt;

/// Largest value a 7-bit MIDI data byte can carry.
pub const U7_MAX: u8 = 0x7f;
/// Largest value a 14-bit (LSB + MSB) MIDI value can carry.
pub const U14_MAX: u16 = 0x3fff;
/// Pitch bend value meaning "no bend".
pub const PITCH_BEND_CENTER: u16 = 0x2000;

/// A data value was outside the range its field allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum ValueError {
    DataOutOfRange(u8),
    WideDataOutOfRange(u16),
    InvalidChannel(u8),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::DataOutOfRange(v) => write!(f, "data value {v} is not in 0..=127"),
            ValueError::WideDataOutOfRange(v) => write!(f, "data value {v} is not in 0..=16383"),
            ValueError::InvalidChannel(v) => write!(f, "channel {v} is not in 1..=16"),
        }
    }
}

/// Error returned when sending a message: either the value was rejected before
/// anything was written, or the output stream failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum MidiError<E> {
    Io(E),
    Value(ValueError),
}

impl<E> From<ValueError> for MidiError<E> {
    fn from(err: ValueError) -> Self {
        MidiError::Value(err)
    }
}

/// 7-bit data byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct U7(u8);

impl U7 {
    pub const MIN: U7 = U7(0);
    pub const MAX: U7 = U7(U7_MAX);

    pub const fn new(value: u8) -> Result<Self, ValueError> {
        if value <= U7_MAX {
            Ok(U7(value))
        } else {
            Err(ValueError::DataOutOfRange(value))
        }
    }

    /// Saturates `value` into 0..=127.
    pub fn clamped(value: i32) -> Self {
        U7(value.clamp(0, U7_MAX as i32) as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for U7 {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        U7::new(value)
    }
}

impl From<U7> for u8 {
    fn from(value: U7) -> Self {
        value.0
    }
}

/// 14-bit value, sent as two data bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct U14(u16);

impl U14 {
    pub const fn new(value: u16) -> Result<Self, ValueError> {
        if value <= U14_MAX {
            Ok(U14(value))
        } else {
            Err(ValueError::WideDataOutOfRange(value))
        }
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    pub const fn lsb(self) -> U7 {
        U7((self.0 & 0x7f) as u8)
    }

    pub const fn msb(self) -> U7 {
        U7((self.0 >> 7) as u8)
    }
}

impl TryFrom<u16> for U14 {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        U14::new(value)
    }
}

/// MIDI channel, numbered 1-16 as musicians count them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Channel(u8);

impl Channel {
    pub const fn new(number: u8) -> Result<Self, ValueError> {
        if number >= 1 && number <= 16 {
            Ok(Channel(number - 1))
        } else {
            Err(ValueError::InvalidChannel(number))
        }
    }

    /// 1-based channel number.
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Value placed in the low nibble of the status byte.
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Channel-voice commands (status byte high nibble).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    NoteOff = 0x80,
    NoteOn = 0x90,
    PolyPressure = 0xa0,
    ControlChange = 0xb0,
    ProgramChange = 0xc0,
    ChannelPressure = 0xd0,
    PitchBend = 0xe0,
}

impl Command {
    pub const fn status(self, channel: Channel) -> u8 {
        self as u8 | channel.index()
    }
}

/// Controller numbers used by the helpers on [`crate::controller::Controller`].
pub mod cc {
    pub const BANK_SELECT_MSB: u8 = 0;
    pub const MODULATION_MSB: u8 = 1;
    pub const VOLUME_MSB: u8 = 7;
    pub const BANK_SELECT_LSB: u8 = 32;
    pub const MODULATION_LSB: u8 = 33;
    pub const VOLUME_LSB: u8 = 39;
    pub const ALL_SOUND_OFF: u8 = 120;
    pub const RESET_ALL_CONTROLLERS: u8 = 121;
    pub const LOCAL_CONTROL: u8 = 122;
    pub const ALL_NOTES_OFF: u8 = 123;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum MidiMsg {
    NoteOff { note: U7, velocity: U7 },
    NoteOn { note: U7, velocity: U7 },
    PolyPressure { note: U7, pressure: U7 },
    ControlChange { control: U7, value: U7 },
    ProgramChange { program: U7 },
    ChannelPressure { pressure: U7 },
    PitchBend { value: U14 },
}

impl MidiMsg {
    pub const fn command(&self) -> Command {
        match self {
            MidiMsg::NoteOff { .. } => Command::NoteOff,
            MidiMsg::NoteOn { .. } => Command::NoteOn,
            MidiMsg::PolyPressure { .. } => Command::PolyPressure,
            MidiMsg::ControlChange { .. } => Command::ControlChange,
            MidiMsg::ProgramChange { .. } => Command::ProgramChange,
            MidiMsg::ChannelPressure { .. } => Command::ChannelPressure,
            MidiMsg::PitchBend { .. } => Command::PitchBend,
        }
    }

    pub const fn to_bytes(&self, channel: Channel) -> [u8; 3] {
        let (data1, data2) = match *self {
            MidiMsg::NoteOff { note, velocity } | MidiMsg::NoteOn { note, velocity } => {
                (note, velocity)
            }
            MidiMsg::PolyPressure { note, pressure } => (note, pressure),
            MidiMsg::ControlChange { control, value } => (control, value),
            MidiMsg::ProgramChange { program } => (program, U7::MIN),
            MidiMsg::ChannelPressure { pressure } => (pressure, U7::MIN),
            MidiMsg::PitchBend { value } => (value.lsb(), value.msb()),
        };
        [self.command().status(channel), data1.get(), data2.get()]
    }
}
