// Fixed note sequences played by the demo firmware.

use core::future::Future;

use embedded_io_async::Write;

use crate::controller::Controller;
use crate::midi::MidiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Step {
    /// Note on at full velocity.
    NoteOn(u8),
    NoteOff(u8),
    WaitMillis(u64),
}

/// Two notes together, then a third on its own.
pub const DEMO_PHRASE: [Step; 9] = [
    Step::NoteOn(64),
    Step::WaitMillis(500),
    Step::NoteOn(60),
    Step::WaitMillis(500),
    Step::NoteOff(64),
    Step::NoteOff(60),
    Step::NoteOn(62),
    Step::WaitMillis(500),
    Step::NoteOff(62),
];

/// Plays `steps` through `controller`, calling `wait` for the pauses.
pub async fn play<W, F>(
    controller: &mut Controller<W>,
    steps: &[Step],
    mut wait: impl FnMut(u64) -> F,
) -> Result<(), MidiError<W::Error>>
where
    W: Write,
    F: Future<Output = ()>,
{
    for step in steps {
        match *step {
            Step::NoteOn(note) => controller.note_on(note, crate::midi::U7_MAX).await?,
            Step::NoteOff(note) => controller.note_off(note).await?,
            Step::WaitMillis(ms) => wait(ms).await,
        }
    }
    Ok(())
}
