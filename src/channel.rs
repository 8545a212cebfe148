//! Serial channel acquisition.

use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::debug;

/// Write timeout for the serial device. The longest scripted payload is 90
/// bytes, under 100 ms at 9600 baud, so one second is ample.
const WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Failure to acquire the serial channel.
///
/// Displays as the underlying error text only, so the caller's diagnostic
/// line carries it verbatim. Write failures after a successful open are
/// plain `io::Error` and are not wrapped.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct OpenError {
    /// Device that could not be opened.
    pub port: String,
    source: serialport::Error,
}

/// Opens `port` at `baud`, configured 8N1 with no flow control.
pub fn open(port: &str, baud: u32) -> Result<Box<dyn SerialPort>, OpenError> {
    debug!(port, baud, "opening serial channel");
    serialport::new(port, baud)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(WRITE_TIMEOUT)
        .open()
        .map_err(|source| OpenError {
            port: port.to_string(),
            source,
        })
}
