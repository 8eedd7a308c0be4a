// Accelerometer axis readings to MIDI data bytes.
//
// A raw 12-bit ADC sample is turned into a signed tilt of -32..=31 steps (the
// resolution of a 6-bit digital accelerometer), then shifted up so a level
// board plays note 65 at velocity 65.

use crate::midi::U7;

pub const ADC_MAX: u16 = 4095;
/// Reading of an axis at rest.
pub const ADC_CENTER: u16 = 2048;
/// ADC counts per tilt step.
pub const TILT_STEP: i16 = 64;
pub const TILT_MIN: i16 = -32;
pub const TILT_MAX: i16 = 31;
pub const TILT_OFFSET: i16 = 65;

pub fn tilt(raw: u16) -> i16 {
    let centered = raw.min(ADC_MAX) as i16 - ADC_CENTER as i16;
    centered.div_euclid(TILT_STEP).clamp(TILT_MIN, TILT_MAX)
}

pub fn tilt_to_data(raw: u16) -> U7 {
    U7::clamped(i32::from(tilt(raw) + TILT_OFFSET))
}

/// One sample of both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct AxisReading {
    pub x: u16,
    pub y: u16,
}

impl AxisReading {
    pub const LEVEL: AxisReading = AxisReading {
        x: ADC_CENTER,
        y: ADC_CENTER,
    };

    /// X axis picks the note.
    pub fn note(&self) -> U7 {
        tilt_to_data(self.x)
    }

    /// Y axis picks the velocity.
    pub fn velocity(&self) -> U7 {
        tilt_to_data(self.y)
    }
}
