//! The two-state loop: wait for the switch to close, play a note picked by the
//! accelerometer, wait for the switch to open, release the note.

use core::future::Future;

use embedded_io_async::Write;

use crate::controller::Controller;
use crate::midi::{MidiError, U7};
use crate::tilt::AxisReading;

/// Sleep between switch reads while waiting for a press.
pub const PRESS_POLL_MS: u64 = 10;
/// Sleep between switch reads while the note is held.
pub const RELEASE_POLL_MS: u64 = 50;

pub trait Switch {
    fn is_pressed(&self) -> bool;
}

#[allow(async_fn_in_trait)]
pub trait AxisSource {
    async fn read(&mut self) -> AxisReading;
}

/// What one press/release cycle sent.
#[derive(Debug, PartialEq, Eq)]
pub struct Cycle<E> {
    pub note: U7,
    pub velocity: U7,
    pub note_on: Result<(), MidiError<E>>,
    pub note_off: Result<(), MidiError<E>>,
}

/// Runs one press/release cycle. The axes are sampled once, at the press; a
/// failed note-on does not skip the note-off.
pub async fn play_once<W, S, A, F>(
    controller: &mut Controller<W>,
    switch: &S,
    axes: &mut A,
    mut wait: impl FnMut(u64) -> F,
) -> Cycle<W::Error>
where
    W: Write,
    S: Switch,
    A: AxisSource,
    F: Future<Output = ()>,
{
    while !switch.is_pressed() {
        wait(PRESS_POLL_MS).await;
    }

    let reading = axes.read().await;
    let note = reading.note();
    let velocity = reading.velocity();
    let note_on = controller.note_on(note.get(), velocity.get()).await;

    while switch.is_pressed() {
        wait(RELEASE_POLL_MS).await;
    }

    let note_off = controller.note_off(note.get()).await;

    Cycle {
        note,
        velocity,
        note_on,
        note_off,
    }
}

#[cfg(target_os = "none")]
pub async fn run<W, S, A>(controller: &mut Controller<W>, switch: &S, axes: &mut A) -> !
where
    W: Write,
    W::Error: defmt::Format,
    S: Switch,
    A: AxisSource,
{
    use defmt::{info, warn};
    use embassy_time::Timer;

    info!("Poll loop on channel {}", controller.channel().number());
    loop {
        let cycle = play_once(controller, switch, axes, Timer::after_millis).await;
        info!("played {} velocity {}", cycle.note, cycle.velocity);
        if let Err(err) = cycle.note_on {
            warn!("Midi send error (note on): {}", err);
        }
        if let Err(err) = cycle.note_off {
            warn!("Midi send error (note off): {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_port::{FailFirstPort, RecordingPort, UnpluggedPort};
    use crate::tilt::{ADC_CENTER, ADC_MAX};
    use core::cell::RefCell;
    use embassy_futures::block_on;
    use embedded_io_async::ErrorKind;
    use std::collections::VecDeque;

    /// Reports the queued levels one read at a time, open once they run out.
    struct ScriptedSwitch(RefCell<VecDeque<bool>>);

    impl ScriptedSwitch {
        fn new(levels: &[bool]) -> Self {
            Self(RefCell::new(levels.iter().copied().collect()))
        }
    }

    impl Switch for ScriptedSwitch {
        fn is_pressed(&self) -> bool {
            self.0.borrow_mut().pop_front().unwrap_or(false)
        }
    }

    /// Hands out the queued readings in order, then level.
    struct ScriptedAxes {
        readings: VecDeque<AxisReading>,
        reads: usize,
    }

    impl ScriptedAxes {
        fn new(readings: &[AxisReading]) -> Self {
            Self {
                readings: readings.iter().copied().collect(),
                reads: 0,
            }
        }
    }

    impl AxisSource for ScriptedAxes {
        async fn read(&mut self) -> AxisReading {
            self.reads += 1;
            self.readings.pop_front().unwrap_or(AxisReading::LEVEL)
        }
    }

    const PRESS_THEN_HOLD: [bool; 6] = [false, false, true, true, true, false];

    #[test]
    fn polls_at_press_and_release_rates() {
        let mut c = Controller::new(RecordingPort::default(), 1).unwrap();
        let switch = ScriptedSwitch::new(&PRESS_THEN_HOLD);
        let mut axes = ScriptedAxes::new(&[AxisReading::LEVEL]);
        let mut waited = Vec::new();
        let cycle = block_on(play_once(&mut c, &switch, &mut axes, |ms| {
            waited.push(ms);
            async {}
        }));
        assert_eq!(waited, [PRESS_POLL_MS, PRESS_POLL_MS, RELEASE_POLL_MS, RELEASE_POLL_MS]);
        assert_eq!(cycle.note_on, Ok(()));
        assert_eq!(cycle.note_off, Ok(()));
        assert_eq!(c.release().bytes, [0x90, 65, 65, 0x80, 65, 0]);
    }

    #[test]
    fn x_picks_note_and_y_picks_velocity() {
        let mut c = Controller::new(RecordingPort::default(), 3).unwrap();
        let switch = ScriptedSwitch::new(&[true, false]);
        let mut axes = ScriptedAxes::new(&[AxisReading { x: 0, y: ADC_MAX }]);
        let cycle = block_on(play_once(&mut c, &switch, &mut axes, |_| async {}));
        assert_eq!((cycle.note.get(), cycle.velocity.get()), (33, 96));
        assert_eq!(c.release().bytes, [0x92, 33, 96, 0x82, 33, 0]);
    }

    #[test]
    fn note_off_repeats_the_pressed_note() {
        let mut c = Controller::new(RecordingPort::default(), 1).unwrap();
        let switch = ScriptedSwitch::new(&PRESS_THEN_HOLD);
        let mut axes = ScriptedAxes::new(&[
            AxisReading { x: ADC_CENTER + 640, y: ADC_CENTER },
            AxisReading { x: 0, y: 0 },
        ]);
        block_on(play_once(&mut c, &switch, &mut axes, |_| async {}));
        assert_eq!(axes.reads, 1);
        assert_eq!(c.release().bytes, [0x90, 75, 65, 0x80, 75, 0]);
    }

    #[test]
    fn failed_note_on_still_releases() {
        let mut c = Controller::new(FailFirstPort::default(), 1).unwrap();
        let switch = ScriptedSwitch::new(&[true, false]);
        let mut axes = ScriptedAxes::new(&[AxisReading::LEVEL]);
        let cycle = block_on(play_once(&mut c, &switch, &mut axes, |_| async {}));
        assert_eq!(cycle.note_on, Err(MidiError::Io(ErrorKind::Other)));
        assert_eq!(cycle.note_off, Ok(()));
        assert_eq!(c.release().bytes, [0x80, 65, 0]);
    }

    #[test]
    fn unplugged_port_reports_both_failures() {
        let mut c = Controller::new(UnpluggedPort, 1).unwrap();
        let switch = ScriptedSwitch::new(&[true, false]);
        let mut axes = ScriptedAxes::new(&[AxisReading::LEVEL]);
        let cycle = block_on(play_once(&mut c, &switch, &mut axes, |_| async {}));
        assert_eq!(cycle.note_on, Err(MidiError::Io(ErrorKind::NotConnected)));
        assert_eq!(cycle.note_off, Err(MidiError::Io(ErrorKind::NotConnected)));
    }
}
