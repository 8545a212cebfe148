use anyhow::Result;
use clap::Parser;

use ansiprobe::script::{self, Step};
use ansiprobe::sequencer::{self, NoopClock, WallClock};
use ansiprobe::{channel, Screen};

/// Exercise an attached serial terminal with ANSI/VT100 escape sequences.
///
/// Writes a fixed script of cursor positioning, scrolling, and erase
/// commands to the device, pausing between groups so the terminal's
/// behavior can be checked by eye. Nothing is read back.
#[derive(Debug, Parser)]
#[command(name = "ansiprobe", version)]
struct Cli {
    /// Serial device to write to.
    #[arg(long, default_value = "/dev/ttyUSB0")]
    port: String,

    /// Baud rate for the device.
    #[arg(long, default_value_t = 9600)]
    baud: u32,

    /// Replay the script through the built-in screen model and print a
    /// summary instead of opening a serial device.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let steps = script::demo_script();

    if cli.dry_run {
        return dry_run(&steps);
    }

    let mut port = match channel::open(&cli.port, cli.baud) {
        Ok(port) => port,
        Err(err) => {
            // A missing or busy device is reported, not treated as a
            // failure; the probe is routinely pointed at ports that may
            // not be there. Write failures past this point do propagate.
            println!("Failed to open uart: {}", err);
            return Ok(());
        }
    };

    sequencer::run(&steps, &mut port, &mut WallClock)?;
    Ok(())
}

/// Runs the script into memory and reports what it would do to a terminal.
fn dry_run(steps: &[Step]) -> Result<()> {
    let mut wire = Vec::new();
    sequencer::run(steps, &mut wire, &mut NoopClock)?;

    let mut screen = Screen::new(script::DEMO_ROWS, script::DEMO_COLS);
    screen.feed(&wire);

    let writes = steps
        .iter()
        .filter(|step| matches!(step, Step::Write(_)))
        .count();
    let cursor = screen.cursor();
    println!(
        "{} writes, {} pauses, {} bytes on the wire",
        writes,
        steps.len() - writes,
        wire.len()
    );
    println!("final cursor: row {}, col {}", cursor.row, cursor.col);
    Ok(())
}
