use crate::canvas::{Anchor, Canvas, Color, BLACK, WHITE};
use crate::config::GameConfig;

use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};
use log::{debug, warn};

const BLOCK_CHAR: char = '█';
const BLANK: Cell = Cell { ch: ' ', fg: WHITE, bg: BLACK };

// One block of margin around the playfield, where the walls go
const MARGIN_COLS: i32 = 2;
const MARGIN_ROWS: i32 = 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

/// Crossterm-backed `Canvas`. Frames are drawn into a back buffer and only
/// the cells that changed since the last frame are written on `present`.
/// One block of the playfield maps to two columns and one row, offset by a
/// one-block margin.
pub struct TermManager<W: Write = Stdout> {
    width: u16,
    height: u16,
    out: W,
    block: i32,
    playfield_columns: i32,
    playfield_rows: i32,
    back: Vec<Cell>,
    front: Vec<Cell>,
}

impl TermManager<Stdout> {
    pub fn new(config: &GameConfig) -> crossterm::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager::with_output(stdout(), width, height, config))
    }
}

impl<W: Write> TermManager<W> {
    pub fn with_output(out: W, width: u16, height: u16, config: &GameConfig) -> Self {
        let (cols, rows) = config.grid_size();

        TermManager {
            width,
            height,
            out,
            block: config.block,
            playfield_columns: cols * 2,
            playfield_rows: rows,
            back: vec![BLANK; width as usize * height as usize],
            front: vec![],
        }
    }

    /// Terminal size needed to show the playfield and its walls.
    pub fn required_size(&self) -> (i32, i32) {
        (self.playfield_columns + 2 * MARGIN_COLS, self.playfield_rows + 2 * MARGIN_ROWS)
    }

    pub fn setup(&mut self, title: &str) -> crossterm::Result<()> {
        execute!(self.out, EnterAlternateScreen, terminal::SetTitle(title))?;
        terminal::enable_raw_mode()?;
        execute!(self.out, cursor::Hide, cursor::DisableBlinking)?;

        let (cols, rows) = self.required_size();
        if (self.width as i32) < cols || (self.height as i32) < rows {
            warn!(
                "Terminal is {}x{}, the playfield needs {}x{}",
                self.width, self.height, cols, rows
            );
        }
        Ok(())
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            self.out,
            style::ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )
    }

    /// Waits up to `timeout` for the first event, then drains whatever else
    /// is already queued without blocking.
    pub fn read_key_events(&mut self, timeout: Duration) -> crossterm::Result<Vec<KeyEvent>> {
        let mut events = vec![];
        let mut wait = timeout;

        while poll(wait)? {
            match read()? {
                Event::Key(ev) => events.push(ev),
                Event::Resize(w, h) => self.resize(w, h),
                _ => {}
            }
            wait = Duration::from_millis(0);
        }

        Ok(events)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn resize(&mut self, width: u16, height: u16) {
        debug!("Terminal resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
        self.back = vec![BLANK; width as usize * height as usize];
        // Forces a full redraw on the next present
        self.front.clear();
    }

    fn set_cell(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return;
        }

        let idx = self.width as usize * row as usize + col as usize;
        let bg = self.back[idx].bg;
        self.back[idx] = Cell { ch, fg, bg };
    }

    fn column(&self, x: i32) -> i32 {
        MARGIN_COLS + (x * 2).div_euclid(self.block)
    }

    fn row(&self, y: i32) -> i32 {
        MARGIN_ROWS + y.div_euclid(self.block)
    }
}

impl<W: Write> Canvas for TermManager<W> {
    fn clear(&mut self, color: Color) -> crossterm::Result<()> {
        for cell in self.back.iter_mut() {
            *cell = Cell { ch: ' ', fg: color, bg: color };
        }
        Ok(())
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> crossterm::Result<()> {
        let (left, right) = (self.column(x), self.column(x + w).max(self.column(x) + 1));
        let (top, bottom) = (self.row(y), self.row(y + h).max(self.row(y) + 1));

        for row in top..bottom {
            for col in left..right {
                self.set_cell(col, row, BLOCK_CHAR, color);
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, color: Color, anchor: Anchor) -> crossterm::Result<()> {
        let len = text.chars().count() as i32;
        let (col, row) = match anchor {
            Anchor::TopLeft { x, y } => (self.column(x), self.row(y)),
            Anchor::CentredAt { y } => (MARGIN_COLS + (self.playfield_columns - len) / 2, self.row(y)),
        };

        for (i, ch) in text.chars().enumerate() {
            self.set_cell(col + i as i32, row, ch, color);
        }
        Ok(())
    }

    fn present(&mut self) -> crossterm::Result<()> {
        let full_redraw = self.front.len() != self.back.len();
        if full_redraw {
            queue!(self.out, terminal::Clear(ClearType::All))?;
        }

        for (idx, cell) in self.back.iter().enumerate() {
            if !full_redraw && self.front[idx] == *cell {
                continue;
            }

            let col = (idx % self.width as usize) as u16;
            let row = (idx / self.width as usize) as u16;
            queue!(
                self.out,
                cursor::MoveTo(col, row),
                style::SetForegroundColor(to_term_color(cell.fg)),
                style::SetBackgroundColor(to_term_color(cell.bg)),
                style::Print(cell.ch)
            )?;
        }

        self.out.flush()?;
        self.front = self.back.clone();
        Ok(())
    }
}

fn to_term_color(color: Color) -> style::Color {
    style::Color::Rgb { r: color.r, g: color.g, b: color.b }
}
