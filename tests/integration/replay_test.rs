//! Full-script replay through the screen model.
//!
//! Runs the demonstration over a memory channel and verifies that the
//! emitted byte stream leaves a conformant terminal in the expected state.

use std::time::Duration;

use ansiprobe::script::{self, GROUP_PAUSE};
use ansiprobe::{demo_script, sequencer, Clock, Cursor, Screen, Step};

/// Records pause durations instead of sleeping.
#[derive(Debug, Default)]
struct RecordingClock {
    pauses: Vec<Duration>,
}

impl Clock for RecordingClock {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

fn run_to_wire(steps: &[Step]) -> (Vec<u8>, RecordingClock) {
    let mut wire = Vec::new();
    let mut clock = RecordingClock::default();
    sequencer::run(steps, &mut wire, &mut clock).expect("memory channel writes cannot fail");
    (wire, clock)
}

fn replay(wire: &[u8]) -> Screen {
    let mut screen = Screen::new(script::DEMO_ROWS, script::DEMO_COLS);
    screen.feed(wire);
    screen
}

#[test]
fn full_run_pauses_five_times_with_the_scripted_duration() {
    let (_, clock) = run_to_wire(&demo_script());

    assert_eq!(clock.pauses, vec![GROUP_PAUSE; 5]);
    let total: Duration = clock.pauses.iter().sum();
    assert!(total >= GROUP_PAUSE * 4);
}

#[test]
fn opening_phase_lays_out_poem_and_positioned_lines() {
    let steps = demo_script();
    // Everything up to the first observer pause.
    let prefix: Vec<Step> = steps
        .iter()
        .take_while(|step| matches!(step, Step::Write(_)))
        .cloned()
        .collect();
    let (wire, _) = run_to_wire(&prefix);
    let screen = replay(&wire);

    // "this is line 14" is positioned over the first poem line at column 14
    // (one-based), splicing into the text already there.
    let row0 = screen.row_text(0);
    assert!(row0.starts_with("Once upon a m"));
    assert_eq!(&row0[13..28], "this is line 14");
    assert!(row0.ends_with("weak and weary,"));

    assert_eq!(screen.row_text(1), "Over many a quaint and curious volume of forgotten lore,");
    assert_eq!(screen.row_text(11), "Nameless here for evermore.");

    // "col 20" lands on row 20 at column 15 (one-based).
    let row19 = screen.row_text(19);
    assert!(row19.ends_with("col 20"));
    assert_eq!(row19.len(), 20);
}

#[test]
fn final_screen_matches_the_movement_demonstration() {
    let (wire, _) = run_to_wire(&demo_script());
    let screen = replay(&wire);

    // Counter loop: each line feed at the bottom row scrolls the screen,
    // stacking the ten counter bytes up the left edge.
    for i in 0..10u8 {
        let expected = char::from(49 + i);
        assert_eq!(screen.row_text(14 + i as usize), expected.to_string());
    }

    assert_eq!(screen.row_text(0), "1st line");
    assert_eq!(screen.row_text(3), "4th line");
    assert_eq!(screen.row_text(5), "12345678901234567890");
    assert_eq!(screen.row_text(6), "1         11th column");
}

#[test]
fn final_cursor_returns_to_the_digit_string_start() {
    let (wire, _) = run_to_wire(&demo_script());
    let screen = replay(&wire);

    // CUB 21 from the end of "11th column", then one printed character.
    assert_eq!(screen.cursor(), Cursor { row: 6, col: 1 });
}

#[test]
fn wire_stream_is_identical_across_runs() {
    let (first, _) = run_to_wire(&demo_script());
    let (second, _) = run_to_wire(&demo_script());
    assert_eq!(first, second);
}
