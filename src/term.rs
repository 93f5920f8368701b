use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

use crate::config::{BOARD_BACKGROUND, BOARD_HEIGHT, BOARD_WIDTH, TEXT_COLOR, UNIT_SIZE};
use crate::Coords;

/// Terminal columns per board cell; two columns make cells roughly square.
const CELL_COLUMNS: u16 = 2;

/// The terminal as a fixed-size drawing surface for the board. Positions
/// are board-space coordinates (multiples of `UNIT_SIZE`); cells outside
/// the board are clipped rather than drawn, like a canvas would.
pub struct TermCanvas {
    stdout: Stdout,
    origin: (u16, u16),
}

impl TermCanvas {
    pub fn new() -> crossterm::Result<Self> {
        let (term_w, term_h) = terminal::size()?;
        let cols = board_columns();
        let rows = board_rows();

        if term_w < cols + 2 || term_h < rows + 4 {
            let err = std::io::Error::new(
                std::io::ErrorKind::Other,
                format!(
                    "terminal too small: need at least {}x{} characters",
                    cols + 2,
                    rows + 4
                ),
            );
            return Err(err.into());
        }

        // Center the board, keeping a row above the top border for the
        // status line.
        let origin = ((term_w - cols) / 2, (term_h - rows) / 2);
        Ok(TermCanvas {
            stdout: stdout(),
            origin,
        })
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            cursor::Hide,
            cursor::DisableBlinking,
            terminal::Clear(ClearType::All)
        )
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            self.stdout,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )
    }

    pub fn read_key_blocking(&self) -> crossterm::Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    pub fn drain_key_events(&self) -> crossterm::Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn draw_border(&mut self) -> crossterm::Result<()> {
        let cols = board_columns();
        let rows = board_rows();
        let (ox, oy) = self.origin;

        for x in 0..cols + 2 {
            let ch = if x == 0 || x == cols + 1 { '+' } else { '-' };
            queue!(self.stdout, cursor::MoveTo(ox - 1 + x, oy - 1), style::Print(ch))?;
            queue!(self.stdout, cursor::MoveTo(ox - 1 + x, oy + rows), style::Print(ch))?;
        }

        for y in 0..rows {
            queue!(self.stdout, cursor::MoveTo(ox - 1, oy + y), style::Print('|'))?;
            queue!(self.stdout, cursor::MoveTo(ox + cols, oy + y), style::Print('|'))?;
        }

        self.flush()
    }

    /// Fill the whole board with the background color.
    pub fn fill_board(&mut self) -> crossterm::Result<()> {
        let blank = " ".repeat(board_columns() as usize);

        let (ox, oy) = self.origin;
        queue!(self.stdout, style::SetBackgroundColor(BOARD_BACKGROUND))?;
        for y in 0..board_rows() {
            queue!(
                self.stdout,
                cursor::MoveTo(ox, oy + y),
                style::Print(&blank)
            )?;
        }
        queue!(self.stdout, style::ResetColor)
    }

    pub fn fill_cell(&mut self, pos: Coords, color: Color) -> crossterm::Result<()> {
        if let Some((col, row)) = self.cell_position(pos) {
            queue!(
                self.stdout,
                cursor::MoveTo(col, row),
                style::SetBackgroundColor(color),
                style::Print("  "),
                style::ResetColor
            )?;
        }
        Ok(())
    }

    /// A filled cell with a visible edge, for the snake segments.
    pub fn fill_cell_outlined(
        &mut self,
        pos: Coords,
        fill: Color,
        outline: Color,
    ) -> crossterm::Result<()> {
        if let Some((col, row)) = self.cell_position(pos) {
            queue!(
                self.stdout,
                cursor::MoveTo(col, row),
                style::SetBackgroundColor(fill),
                style::SetForegroundColor(outline),
                style::Print("[]"),
                style::ResetColor
            )?;
        }
        Ok(())
    }

    /// Score line above the top border. Padded so a shorter score never
    /// leaves stale digits behind.
    pub fn draw_status(&mut self, score: u32, high_score: u32) -> crossterm::Result<()> {
        let line = format!("Score: {:<10} High score: {}", score, high_score);
        let (ox, oy) = self.origin;
        queue!(
            self.stdout,
            cursor::MoveTo(ox - 1, oy - 2),
            style::Print(line)
        )?;
        self.flush()
    }

    /// Center the given lines on the board, in the banner text color.
    pub fn show_banner(&mut self, lines: &[&str]) -> crossterm::Result<()> {
        let top = self.origin.1 + (board_rows() - lines.len() as u16) / 2;

        queue!(
            self.stdout,
            style::SetBackgroundColor(BOARD_BACKGROUND),
            style::SetForegroundColor(TEXT_COLOR)
        )?;
        for (i, line) in lines.iter().enumerate() {
            let col = self.origin.0 + board_columns().saturating_sub(line.len() as u16) / 2;
            queue!(
                self.stdout,
                cursor::MoveTo(col, top + i as u16),
                style::Print(line)
            )?;
        }
        queue!(self.stdout, style::ResetColor)?;

        self.flush()
    }

    pub fn flush(&mut self) -> crossterm::Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    // Board coordinates to terminal cell, clipping anything outside
    // [0, BOARD). A head one unit past the edge simply vanishes for its
    // final frame.
    fn cell_position(&self, (x, y): Coords) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return None;
        }

        let col = self.origin.0 + (x / UNIT_SIZE) as u16 * CELL_COLUMNS;
        let row = self.origin.1 + (y / UNIT_SIZE) as u16;
        Some((col, row))
    }
}

fn board_columns() -> u16 {
    (BOARD_WIDTH / UNIT_SIZE) as u16 * CELL_COLUMNS
}

fn board_rows() -> u16 {
    (BOARD_HEIGHT / UNIT_SIZE) as u16
}
