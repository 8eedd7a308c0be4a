//! A MIDI controller: something that plays an external instrument by writing
//! channel-voice messages to a byte stream.
//!
//! The stream is anything implementing [`embedded_io_async::Write`]: the USB
//! virtual serial port, a UART, or a buffer in tests. Several controllers can
//! coexist; by convention each one gets its own port or channel.

use embedded_io_async::Write;

use crate::midi::{cc, Channel, Command, MidiError, MidiMsg, U14, U7};

pub struct Controller<W> {
    port: W,
    channel: Channel,
}

impl<W: Write> Controller<W> {
    /// `channel` is 1-based (1-16).
    pub fn new(port: W, channel: u8) -> Result<Self, MidiError<W::Error>> {
        let channel = Channel::new(channel)?;
        Ok(Self { port, channel })
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Gives the port back.
    pub fn release(self) -> W {
        self.port
    }

    pub async fn send(&mut self, msg: MidiMsg) -> Result<(), MidiError<W::Error>> {
        let bytes = msg.to_bytes(self.channel);
        self.port.write_all(&bytes).await.map_err(MidiError::Io)
    }

    /// Sends `command` with raw data bytes. Both must be in 0..=127; nothing is
    /// written otherwise.
    pub async fn send_message(
        &mut self,
        command: Command,
        data1: u8,
        data2: u8,
    ) -> Result<(), MidiError<W::Error>> {
        let data1 = U7::new(data1)?;
        let data2 = U7::new(data2)?;
        let bytes = [command.status(self.channel), data1.get(), data2.get()];
        self.port.write_all(&bytes).await.map_err(MidiError::Io)
    }

    pub async fn note_on(&mut self, note: u8, velocity: u8) -> Result<(), MidiError<W::Error>> {
        self.send_message(Command::NoteOn, note, velocity).await
    }

    /// Note off with release velocity 0.
    pub async fn note_off(&mut self, note: u8) -> Result<(), MidiError<W::Error>> {
        self.send_message(Command::NoteOff, note, 0).await
    }

    pub async fn note_off_with_velocity(
        &mut self,
        note: u8,
        velocity: u8,
    ) -> Result<(), MidiError<W::Error>> {
        self.send_message(Command::NoteOff, note, velocity).await
    }

    /// Polyphonic pressure when `note` is given, channel pressure otherwise.
    pub async fn pressure(
        &mut self,
        value: u8,
        note: Option<u8>,
    ) -> Result<(), MidiError<W::Error>> {
        match note {
            Some(note) => self.send_message(Command::PolyPressure, note, value).await,
            None => self.send_message(Command::ChannelPressure, value, 0).await,
        }
    }

    pub async fn control_change(
        &mut self,
        control: u8,
        value: u8,
    ) -> Result<(), MidiError<W::Error>> {
        self.send_message(Command::ControlChange, control, value).await
    }

    /// Coarse + fine controller pair, MSB first.
    async fn control_change_wide(
        &mut self,
        msb_control: u8,
        lsb_control: u8,
        value: u16,
    ) -> Result<(), MidiError<W::Error>> {
        let value = U14::new(value)?;
        self.control_change(msb_control, value.msb().get()).await?;
        self.control_change(lsb_control, value.lsb().get()).await
    }

    /// Program change, preceded by a bank select when `bank` is given.
    pub async fn program_change(
        &mut self,
        program: u8,
        bank: Option<u16>,
    ) -> Result<(), MidiError<W::Error>> {
        let program = U7::new(program)?;
        if let Some(bank) = bank {
            self.control_change_wide(cc::BANK_SELECT_MSB, cc::BANK_SELECT_LSB, bank)
                .await?;
        }
        self.send(MidiMsg::ProgramChange { program }).await
    }

    /// 14-bit pitch bend, centered at [`crate::midi::PITCH_BEND_CENTER`].
    pub async fn pitch_bend(&mut self, value: u16) -> Result<(), MidiError<W::Error>> {
        let value = U14::new(value)?;
        self.send(MidiMsg::PitchBend { value }).await
    }

    pub async fn pitch_bend_center(&mut self) -> Result<(), MidiError<W::Error>> {
        self.pitch_bend(crate::midi::PITCH_BEND_CENTER).await
    }

    pub async fn modulation(&mut self, value: u8) -> Result<(), MidiError<W::Error>> {
        self.control_change(cc::MODULATION_MSB, value).await
    }

    pub async fn modulation_fine(&mut self, value: u16) -> Result<(), MidiError<W::Error>> {
        self.control_change_wide(cc::MODULATION_MSB, cc::MODULATION_LSB, value)
            .await
    }

    pub async fn volume(&mut self, value: u8) -> Result<(), MidiError<W::Error>> {
        self.control_change(cc::VOLUME_MSB, value).await
    }

    pub async fn volume_fine(&mut self, value: u16) -> Result<(), MidiError<W::Error>> {
        self.control_change_wide(cc::VOLUME_MSB, cc::VOLUME_LSB, value)
            .await
    }

    pub async fn all_sound_off(&mut self) -> Result<(), MidiError<W::Error>> {
        self.control_change(cc::ALL_SOUND_OFF, 0).await
    }

    pub async fn reset_all_controllers(&mut self) -> Result<(), MidiError<W::Error>> {
        self.control_change(cc::RESET_ALL_CONTROLLERS, 0).await
    }

    pub async fn local_control(&mut self, on: bool) -> Result<(), MidiError<W::Error>> {
        let value = if on { U7::MAX } else { U7::MIN };
        self.control_change(cc::LOCAL_CONTROL, value.get()).await
    }

    pub async fn all_notes_off(&mut self) -> Result<(), MidiError<W::Error>> {
        self.control_change(cc::ALL_NOTES_OFF, 0).await
    }

    /// Silences everything and resets controllers.
    pub async fn panic(&mut self) -> Result<(), MidiError<W::Error>> {
        self.all_sound_off().await?;
        self.reset_all_controllers().await?;
        self.all_notes_off().await
    }
}
