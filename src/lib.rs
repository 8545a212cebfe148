//! ansiprobe - serial terminal exerciser for ANSI/VT100 escape handling.
//!
//! Writes a fixed demonstration script of escape sequences and literal text
//! to a serial device so an observer can verify how the attached terminal
//! handles cursor positioning, scrolling, and erasing. The probe only
//! writes; it never reads from the port or interprets responses.
//!
//! - [`script`]: the demonstration sequence, modeled as data
//! - [`sequencer`]: runs a script over any writer, with pauses
//! - [`channel`]: serial port acquisition
//! - [`screen`]: a minimal VT100 screen model for replaying the output

pub mod channel;
pub mod screen;
pub mod script;
pub mod sequencer;

pub use screen::{Cursor, Screen};
pub use script::{demo_script, Step};
pub use sequencer::{Clock, NoopClock, WallClock};
