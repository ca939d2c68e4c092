//! # Text Rendering
//!
//! Draws a [`Timeline`] as one line per event. Each philosopher occupies a
//! five-character cell showing what it last did, and the column between two
//! neighbouring cells shows `|` while the fork they share is on the table:
//!
//! ```text
//! |  T  |>.  |  .<|  E  | |D| |   time: 812.401 us   diff: 0.240 us   Philosopher<1> take fork<0>
//! ```
//!
//! Fork glyphs fade to `.` once newer events arrive, so the eye is drawn to
//! the transition that just happened. Colour is optional ANSI.

use std::io::{self, Write};
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::Timeline;
use crate::model::{Action, Event};
use crate::timing::work::micros;

const IDLE: &[u8; 5] = b"  o  ";
const MIDDLE: usize = 2;
const BEFORE: usize = 1;
const AFTER: usize = 3;

/// What the colour of a cell tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ColorMode {
    /// Colour by kind of event (taking is blue, failing is red, ...).
    #[default]
    Event,
    /// One colour per philosopher.
    Philosopher,
    /// Plain text.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Reset,
}

impl Color {
    const PALETTE: [Color; 5] = [Color::Red, Color::Green, Color::Blue, Color::Yellow, Color::White];

    fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[1;31m",
            Color::Green => "\x1b[1;32m",
            Color::Yellow => "\x1b[1;33m",
            Color::Blue => "\x1b[1;34m",
            Color::White => "\x1b[1;37m",
            Color::Reset => "\x1b[0m",
        }
    }

    fn of_philosopher(id: usize) -> Self {
        Self::PALETTE[id % Self::PALETTE.len()]
    }

    fn of_action(action: Action) -> Self {
        match action {
            Action::Thinking => Color::Yellow,
            Action::Dining => Color::Green,
            Action::EndThinking | Action::EndDining => Color::White,
            Action::Starve => Color::Red,
            Action::Finish => Color::Reset,
            a if a.is_failed_take() => Color::Red,
            _ => Color::Blue,
        }
    }
}

fn glyph(action: Action) -> &'static [u8; 5] {
    match action {
        Action::Thinking => b"  T  ",
        Action::EndThinking => b"  E  ",
        Action::TakingLeft => b"|>.  ",
        Action::NotTakingLeft => b" _.  ",
        Action::TakingRight => b"  .<|",
        Action::NotTakingRight => b"  ._ ",
        Action::TakingLeftHaveRight => b"|>.| ",
        Action::TakingRightHaveLeft => b" |.<|",
        Action::NotTakingLeftHaveRight => b" _.| ",
        Action::NotTakingRightHaveLeft => b" |._ ",
        Action::Dining => b" |D| ",
        Action::EndDining => b" |E| ",
        Action::PutLeftHaveRight => b"|<.| ",
        Action::PutLeft => b"|<.  ",
        Action::PutRight => b"  .>|",
        Action::Starve => b"  X  ",
        Action::Finish => b"     ",
    }
}

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub color: ColorMode,
    /// Drop every cell's event colour before drawing the next line.
    pub reset_colors: bool,
    /// Render the whole timeline instead of head and tail.
    pub print_all: bool,
    /// Events shown at each end when not rendering everything.
    pub range: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: ColorMode::Event,
            reset_colors: false,
            print_all: false,
            range: 200,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    glyph: [u8; 5],
    color: Color,
}

/// Stateful line renderer: each line depends on every event before it.
pub struct Renderer<W: Write> {
    out: W,
    options: RenderOptions,
    cells: Vec<Cell>,
    previous: Option<Duration>,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, philosophers: usize, options: RenderOptions) -> Self {
        Self {
            out,
            options,
            cells: vec![
                Cell {
                    glyph: *IDLE,
                    color: Color::Reset,
                };
                philosophers
            ],
            previous: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders a run of events.
    pub fn events<'e>(&mut self, events: impl IntoIterator<Item = &'e Event>) -> io::Result<()> {
        for event in events {
            self.event(event)?;
        }
        Ok(())
    }

    /// Renders a single event line.
    pub fn event(&mut self, event: &Event) -> io::Result<()> {
        if event.philosopher >= self.cells.len() {
            self.cells.resize(
                event.philosopher + 1,
                Cell {
                    glyph: *IDLE,
                    color: Color::Reset,
                },
            );
        }

        for cell in &mut self.cells {
            if self.options.reset_colors {
                cell.color = Color::Reset;
            }
            if !matches!(cell.glyph[MIDDLE], b' ' | b'D' | b'T') {
                cell.glyph[MIDDLE] = b'.';
            }
        }
        self.cells[event.philosopher] = Cell {
            glyph: *glyph(event.action),
            color: Color::of_action(event.action),
        };

        let n = self.cells.len();
        let free: Vec<bool> = (0..n)
            .map(|p| {
                let before = &self.cells[(p + n - 1) % n];
                before.glyph[AFTER] == b' ' && self.cells[p].glyph[BEFORE] == b' '
            })
            .collect();
        let marker = |free: bool| if free { "|" } else { " " };

        for (p, cell) in self.cells.iter().enumerate() {
            let color = match self.options.color {
                ColorMode::Event => Some(cell.color),
                ColorMode::Philosopher => Some(Color::of_philosopher(p)),
                ColorMode::None => None,
            };
            self.out.write_all(marker(free[p]).as_bytes())?;
            paint(&mut self.out, color, &cell.glyph)?;
        }
        self.out.write_all(marker(free[0]).as_bytes())?;

        let diff = self
            .previous
            .map_or(Duration::ZERO, |prev| event.timestamp.saturating_sub(prev));
        self.previous = Some(event.timestamp);
        write!(
            self.out,
            "   time: {:.3} us \t diff: {:.3} us\t",
            micros(event.timestamp),
            micros(diff)
        )?;

        let color = match self.options.color {
            ColorMode::Event => Some(Color::of_action(event.action)),
            ColorMode::Philosopher => Some(Color::of_philosopher(event.philosopher)),
            ColorMode::None => None,
        };
        paint(&mut self.out, color, event.to_string().as_bytes())?;
        self.out.write_all(b"\n")
    }
}

fn paint<W: Write>(out: &mut W, color: Option<Color>, text: &[u8]) -> io::Result<()> {
    match color {
        Some(color) => {
            out.write_all(color.code().as_bytes())?;
            out.write_all(text)?;
            out.write_all(Color::Reset.code().as_bytes())
        }
        None => out.write_all(text),
    }
}

/// Renders `timeline`, eliding the middle when it is long.
///
/// With `print_all` off and more than `2 * range` events, only the first and
/// last `range` events are drawn, separated by an ellipsis line.
pub fn render<W: Write>(timeline: &Timeline, options: RenderOptions, out: W) -> io::Result<W> {
    let mut renderer = Renderer::new(out, timeline.philosophers(), options);
    if options.print_all || options.range > timeline.len() / 2 {
        renderer.events(timeline)?;
    } else {
        renderer.events(timeline.head(options.range))?;
        renderer.out.write_all(b"\n  .....\n\n")?;
        renderer.events(timeline.tail(options.range))?;
    }
    Ok(renderer.into_inner())
}
