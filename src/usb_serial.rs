//! USB virtual COM port (CDC-ACM) carrying raw MIDI bytes.
//!
//! On the host the port shows up as `/dev/ttyACM*`; a serial-to-MIDI bridge
//! such as `ttymidi` turns it into a MIDI port.

use embassy_rp::usb::Driver;
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use embassy_usb::driver::EndpointError;
use embassy_usb::UsbDevice;
use embedded_io_async::{ErrorKind, ErrorType, Write};
use static_cell::StaticCell;

use crate::board::{Irqs, MidiUsb};
use crate::config::*;

type UsbDriver = Driver<'static, MidiUsb>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum UsbSerialError {
    Disconnected,
    BufferOverflow,
}

impl From<EndpointError> for UsbSerialError {
    fn from(err: EndpointError) -> Self {
        match err {
            EndpointError::Disabled => UsbSerialError::Disconnected,
            EndpointError::BufferOverflow => UsbSerialError::BufferOverflow,
        }
    }
}

impl embedded_io_async::Error for UsbSerialError {
    fn kind(&self) -> ErrorKind {
        match self {
            UsbSerialError::Disconnected => ErrorKind::NotConnected,
            UsbSerialError::BufferOverflow => ErrorKind::OutOfMemory,
        }
    }
}

pub struct UsbSerial {
    usb: UsbDevice<'static, UsbDriver>,
    class: CdcAcmClass<'static, UsbDriver>,
}

static DEVICE_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static CDC_STATE: StaticCell<State> = StaticCell::new();

impl UsbSerial {
    /// Can only be called once.
    pub fn new(usb_per: MidiUsb) -> Self {
        let driver = Driver::new(usb_per, Irqs);

        let mut config = embassy_usb::Config::new(USB_VID, USB_PID);
        config.manufacturer = Some(USB_MANUFACTURER);
        config.product = Some(USB_PRODUCT);
        config.serial_number = Some(USB_SERIAL_NUMBER);
        config.max_power = 100;
        config.max_packet_size_0 = 64;

        // Required for windows compatibility.
        // https://developer.nordicsemi.com/nRF_Connect_SDK/doc/1.9.1/kconfig/CONFIG_CDC_ACM_IAD.html#help
        config.device_class = 0xEF;
        config.device_sub_class = 0x02;
        config.device_protocol = 0x01;
        config.composite_with_iads = true;

        let mut builder = embassy_usb::Builder::new(
            driver,
            config,
            DEVICE_DESCRIPTOR.init([0; 256]),
            CONFIG_DESCRIPTOR.init([0; 256]),
            BOS_DESCRIPTOR.init([0; 256]),
            &mut [], // no msos descriptors
            CONTROL_BUF.init([0; 64]),
        );

        let class = CdcAcmClass::new(&mut builder, CDC_STATE.init(State::new()), USB_MAX_PACKET_SIZE);
        let usb = builder.build();

        Self { usb, class }
    }

    /// Separates the device task from the byte stream.
    pub fn split(self) -> (UsbRunner, UsbSerialTx) {
        (UsbRunner { usb: self.usb }, UsbSerialTx { class: self.class })
    }
}

pub struct UsbRunner {
    usb: UsbDevice<'static, UsbDriver>,
}

impl UsbRunner {
    pub async fn run(&mut self) -> ! {
        self.usb.run().await
    }
}

pub struct UsbSerialTx {
    class: CdcAcmClass<'static, UsbDriver>,
}

impl ErrorType for UsbSerialTx {
    type Error = UsbSerialError;
}

impl Write for UsbSerialTx {
    /// Sends at most one packet. Waits for the host to configure the device
    /// first.
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.class.wait_connection().await;
        let n = buf.len().min(self.class.max_packet_size() as usize);
        self.class.write_packet(&buf[..n]).await?;
        Ok(n)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
