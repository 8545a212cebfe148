//! Minimal VT100 screen model.
//!
//! Replays the byte stream the probe emits and tracks what a conformant
//! terminal would show: a character grid plus a cursor. Only the sequences
//! the demonstration script uses are modeled (CUP, CUU/CUD/CUF/CUB, ED,
//! EL, SU/SD, and the C0 controls LF, CR, and BS). Styling, tabs, and DEC
//! private modes are out of scope.
//!
//! Parameter handling follows common terminal behavior: a zero row or
//! column in CUP selects the origin (the same cell a one would), and a
//! zero count in movement or scroll sequences means one.

use vte::{Params, Parser, Perform};

/// Zero-based cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<char>>,
    cursor: Cursor,
}

/// A screen plus the parser state needed to feed it raw bytes.
pub struct Screen {
    grid: Grid,
    parser: Parser,
}

impl Screen {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid {
                rows,
                cols,
                cells: vec![vec![' '; cols]; rows],
                cursor: Cursor::default(),
            },
            parser: Parser::new(),
        }
    }

    /// Parses `bytes` and applies them to the screen. Partial escape
    /// sequences are carried over to the next call.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.parser.advance(&mut self.grid, bytes);
    }

    pub fn cursor(&self) -> Cursor {
        self.grid.cursor
    }

    /// Text of one row with trailing blanks trimmed.
    pub fn row_text(&self, row: usize) -> String {
        let text: String = self.grid.cells[row].iter().collect();
        text.trim_end().to_string()
    }
}

impl Grid {
    fn blank_row(&self) -> Vec<char> {
        vec![' '; self.cols]
    }

    fn erase(&mut self, row: usize, col: usize) {
        if row < self.rows && col < self.cols {
            self.cells[row][col] = ' ';
        }
    }

    /// Content moves up `n` rows; blank rows appear at the bottom.
    fn scroll_up(&mut self, n: usize) {
        for _ in 0..n.min(self.rows) {
            self.cells.remove(0);
            self.cells.push(self.blank_row());
        }
    }

    /// Content moves down `n` rows; blank rows appear at the top.
    fn scroll_down(&mut self, n: usize) {
        for _ in 0..n.min(self.rows) {
            self.cells.pop();
            self.cells.insert(0, self.blank_row());
        }
    }

    fn line_feed(&mut self) {
        if self.cursor.row + 1 == self.rows {
            self.scroll_up(1);
        } else {
            self.cursor.row += 1;
        }
    }
}

impl Perform for Grid {
    fn print(&mut self, c: char) {
        if self.cursor.col >= self.cols {
            self.cursor.col = 0;
            self.line_feed();
        }
        self.cells[self.cursor.row][self.cursor.col] = c;
        self.cursor.col += 1;
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            // LF
            0x0a => self.line_feed(),
            // CR
            0x0d => self.cursor.col = 0,
            // BS
            0x08 => self.cursor.col = self.cursor.col.saturating_sub(1),
            _ => {}
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        if !intermediates.is_empty() {
            return;
        }
        let params: Vec<u16> = params.iter().map(|p| p[0]).collect();
        let arg = |index: usize| params.get(index).copied().unwrap_or(0) as usize;
        // Movement and scroll counts: zero means one.
        let count = arg(0).max(1);

        match action {
            'H' | 'f' => {
                // Zero-based internally; a 0 parameter selects the origin.
                self.cursor.row = arg(0).saturating_sub(1).min(self.rows - 1);
                self.cursor.col = arg(1).saturating_sub(1).min(self.cols - 1);
            }
            'A' => self.cursor.row = self.cursor.row.saturating_sub(count),
            'B' => self.cursor.row = (self.cursor.row + count).min(self.rows - 1),
            'C' => self.cursor.col = (self.cursor.col + count).min(self.cols - 1),
            'D' => self.cursor.col = self.cursor.col.saturating_sub(count),
            'S' => self.scroll_up(count),
            'T' => self.scroll_down(count),
            'J' => match arg(0) {
                0 => {
                    for col in self.cursor.col..self.cols {
                        self.erase(self.cursor.row, col);
                    }
                    for row in self.cursor.row + 1..self.rows {
                        self.cells[row] = self.blank_row();
                    }
                }
                1 => {
                    for row in 0..self.cursor.row {
                        self.cells[row] = self.blank_row();
                    }
                    for col in 0..=self.cursor.col.min(self.cols - 1) {
                        self.erase(self.cursor.row, col);
                    }
                }
                2 => {
                    for row in 0..self.rows {
                        self.cells[row] = self.blank_row();
                    }
                }
                _ => {}
            },
            'K' => match arg(0) {
                0 => {
                    for col in self.cursor.col..self.cols {
                        self.erase(self.cursor.row, col);
                    }
                }
                1 => {
                    for col in 0..=self.cursor.col.min(self.cols - 1) {
                        self.erase(self.cursor.row, col);
                    }
                }
                2 => self.cells[self.cursor.row] = self.blank_row(),
                _ => {}
            },
            _ => {}
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {}

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {}

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {}
}
