//! The escape-sequence demonstration, modeled as data.
//!
//! The whole exercise is an ordered list of [`Step`]s consumed by one loop
//! in [`crate::sequencer`]: raw byte payloads for the wire, interleaved with
//! fixed pauses so an observer can inspect the attached terminal between
//! groups. Keeping the sequence as data means tests can assert against the
//! exact payloads instead of re-deriving them.
//!
//! Sequences exercised:
//! - `CSI 2J` / `CSI H`: clear screen, home cursor
//! - `CSI row;col H`: cursor position (CUP)
//! - `CSI n T` / `CSI n S`: scroll down / up (SD/SU)
//! - `CSI K` / `CSI 1K`: erase in line (EL)
//! - `CSI J` / `CSI 1J`: erase in display (ED)
//! - `CSI n A/B/C/D`: relative cursor movement (CUU/CUD/CUF/CUB)

use std::borrow::Cow;
use std::time::Duration;

/// Wall-clock pause between demonstration groups.
pub const GROUP_PAUSE: Duration = Duration::from_secs(2);

/// Rows addressed by the demonstration (it positions the cursor on row 25).
pub const DEMO_ROWS: usize = 25;

/// Columns assumed by the demonstration. The longest scripted line is 90
/// characters, so VT100 wide-mode width keeps every line unwrapped.
pub const DEMO_COLS: usize = 132;

/// Number of counter groups emitted by the byte-loop phase.
const COUNTER_GROUPS: u8 = 10;

/// ASCII code of the first counter byte (`'1'`).
const COUNTER_FIRST: u8 = 49;

/// One unit of the demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Raw bytes written to the channel in one operation.
    Write(Cow<'static, [u8]>),
    /// Wall-clock pause so an observer can verify the terminal state.
    Pause(Duration),
}

impl Step {
    fn write(payload: &'static [u8]) -> Self {
        Step::Write(Cow::Borrowed(payload))
    }

    fn pause() -> Self {
        Step::Pause(GROUP_PAUSE)
    }
}

/// Poem fragment written as the initial screen content: eleven lines of
/// "The Raven" plus one blank line, each terminated with CRLF.
const POEM: &[&[u8]] = &[
    b"Once upon a midnight dreary, while I pondered, weak and weary,\r\n",
    b"Over many a quaint and curious volume of forgotten lore,\r\n",
    b"While I nodded, nearly napping, suddenly there came a tapping,\r\n",
    b"As of some one gently rapping, rapping at my chamber door.\r\n",
    b"'Tis some visitor,' I muttered, 'tapping at my chamber door Only this, and nothing more.'\r\n",
    b"\r\n",
    b"Ah, distinctly I remember it was in the bleak December,\r\n",
    b"And each separate dying ember wrought its ghost upon the floor.\r\n",
    b"Eagerly I wished the morrow;- vainly I had sought to borrow\r\n",
    b"From my books surcease of sorrow- sorrow for the lost Lenore-\r\n",
    b"For the rare and radiant maiden whom the angels name Lenore-\r\n",
    b"Nameless here for evermore.\r\n",
];

/// Builds the full demonstration sequence.
///
/// Payload boundaries and bytes are fixed; writes happen in exactly this
/// order. Note the 0-origin cursor addresses (`CSI 0;0H`, `CSI 0;14H`):
/// non-standard for VT100 but deliberately left as authored, since the
/// firmware under test may honor them.
pub fn demo_script() -> Vec<Step> {
    let mut steps = vec![Step::write(b"\x1b[2J"), Step::write(b"\x1b[H")];

    steps.extend(POEM.iter().copied().map(Step::write));

    steps.extend([
        Step::write(b"\x1b[0;14H"),
        Step::write(b"this is line 14\r\n"),
        Step::write(b"\x1b[20;15H"),
        Step::write(b"col 20\r\n"),
        Step::pause(),
        // scroll down then up 4 lines
        Step::write(b"\x1b[4T"),
        Step::pause(),
        Step::write(b"\x1b[4S"),
        Step::pause(),
        // erase to end of line, then to start of line
        Step::write(b"\x1b[20;5H"),
        Step::write(b"\x1b[K"),
        Step::write(b"\x1b[20;3H"),
        Step::write(b"\x1b[1K"),
        Step::pause(),
        // erase to end of screen
        Step::write(b"\x1b[5;8H"),
        Step::write(b"\x1b[J"),
        Step::pause(),
        // erase to top of screen
        Step::write(b"\x1b[6;7H"),
        Step::write(b"\x1b[1J"),
        // clear screen and home
        Step::write(b"\x1b[2J"),
        Step::write(b"\x1b[0;0H"),
        Step::write(b"\x1b[25;0H"),
    ]);

    // Counter loop: digit, line feed, backspace. At the bottom row each
    // line feed scrolls the screen, stacking the digits up the left edge.
    steps.extend(
        (0..COUNTER_GROUPS)
            .map(|i| Step::Write(Cow::Owned(vec![COUNTER_FIRST + i, b'\n', 0x08]))),
    );

    steps.extend([
        Step::write(b"\x1b[0;0H"),
        Step::write(b"\x1b[3B"),
        Step::write(b"4th line\r\n"),
        Step::write(b"\x1b[4A"),
        Step::write(b"1st line"),
        Step::write(b"\x1b[5B\r"),
        Step::write(b"12345678901234567890\r\n"),
        Step::write(b"\x1b[10C"),
        Step::write(b"11th column"),
        Step::write(b"\x1b[21D"),
        Step::write(b"1"),
    ]);

    steps
}
