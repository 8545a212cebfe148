//! Drives a demonstration script over an open channel.
//!
//! The runner is generic over `io::Write`, so the same loop serves a real
//! serial port, the dry-run memory buffer, and the test mocks.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use crate::script::Step;

/// Source of wall-clock delays, factored out so callers can observe or skip
/// pauses instead of sleeping through them.
pub trait Clock {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the calling thread for the full duration.
#[derive(Debug, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Ignores pauses. Used by dry runs, where nobody is watching a terminal.
#[derive(Debug, Default)]
pub struct NoopClock;

impl Clock for NoopClock {
    fn pause(&mut self, _duration: Duration) {}
}

/// Runs every step in authored order.
///
/// Each payload is written atomically with `write_all` and flushed before
/// the next step. Write errors are not recovered here; the caller decides
/// whether they tear the process down.
pub fn run<W: Write, C: Clock>(steps: &[Step], channel: &mut W, clock: &mut C) -> io::Result<()> {
    for step in steps {
        match step {
            Step::Write(payload) => {
                trace!(len = payload.len(), "write");
                channel.write_all(payload)?;
                channel.flush()?;
            }
            Step::Pause(duration) => {
                trace!(?duration, "pause");
                clock.pause(*duration);
            }
        }
    }
    debug!(steps = steps.len(), "script complete");
    Ok(())
}
