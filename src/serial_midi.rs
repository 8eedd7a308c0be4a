use embassy_rp::uart::{BufferedUartTx, Config, DataBits, Error, Parity, StopBits};
use embedded_io_async::{ErrorType, Write};
use static_cell::StaticCell;

use crate::board::{Irqs, MidiTxPin, MidiUart};
use crate::config::SERIAL_MIDI_BUF_LEN;

/// MIDI bytes on the hardware UART, 8N1, e.g. at
/// [`crate::config::TTYMIDI_BAUDRATE`] for a USB-UART adapter feeding `ttymidi`.
pub struct SerialMidi<'d> {
    uart: BufferedUartTx<'d, MidiUart>,
}

impl<'d> SerialMidi<'d> {
    /// Can only be called once.
    pub fn new(uart: MidiUart, tx_pin: MidiTxPin, baudrate: u32) -> Self {
        let mut config = Config::default();

        config.baudrate = baudrate;
        config.data_bits = DataBits::DataBits8;
        config.stop_bits = StopBits::STOP1;
        config.parity = Parity::ParityNone;

        static BUF: StaticCell<[u8; SERIAL_MIDI_BUF_LEN]> = StaticCell::new();
        let buf = &mut BUF.init([0; SERIAL_MIDI_BUF_LEN])[..];

        let uart = BufferedUartTx::new(uart, Irqs, tx_pin, buf, config);

        Self { uart }
    }
}

impl ErrorType for SerialMidi<'_> {
    type Error = Error;
}

impl Write for SerialMidi<'_> {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Write::write(&mut self.uart, buf).await
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Write::flush(&mut self.uart).await
    }
}
