use std::io;
use std::io::Write;

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDate;
use chrono::Utc;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::Clear;
use crossterm::terminal::ClearType;

use crate::event::Event;
use crate::window::Window;
use crate::window::format_date;

const HEADERS: [&str; 4] = ["Date", "Time", "Tickets Left", "Updated At"];

/// Where a run reports its progress and results.
pub trait Present {
    /// Wipe whatever the previous cycle left on screen.
    fn clear(&mut self) -> io::Result<()>;

    fn show_progress(&mut self, window: Window) -> io::Result<()>;

    /// Redraw everything found so far for the span `from..to`.
    fn show(&mut self, from: NaiveDate, to: NaiveDate, events: &[Event]) -> io::Result<()>;
}

pub struct Terminal<W> {
    out: W,
    booking_url: String,
}

impl Terminal<io::Stdout> {
    pub fn stdout(booking_url: String) -> Self {
        Self::new(io::stdout(), booking_url)
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, booking_url: String) -> Self {
        Self { out, booking_url }
    }
}

impl<W: Write> Present for Terminal<W> {
    fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn show_progress(&mut self, window: Window) -> io::Result<()> {
        writeln!(self.out, "Requesting dates: {window}...")?;
        self.out.flush()
    }

    fn show(&mut self, from: NaiveDate, to: NaiveDate, events: &[Event]) -> io::Result<()> {
        self.clear()?;
        writeln!(self.out, "From {} to {}\n", format_date(from), format_date(to))?;
        writeln!(self.out, "{}", render_table(events))?;
        writeln!(self.out, "Book at: {}", self.booking_url)?;
        self.out.flush()
    }
}

fn local_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d/%m/%Y").to_string()
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

fn row(event: &Event) -> [String; 4] {
    [
        local_date(event.datetime()),
        local_time(event.datetime()),
        event.tickets_left().to_string(),
        local_time(event.updated()),
    ]
}

fn border(left: char, middle: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(&middle.to_string()))
}

fn line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!(" {:<width$} ", cell.as_ref()))
        .collect();
    format!("│{}│", cells.join("│"))
}

/// Bordered table of the events that still have tickets.
pub fn render_table(events: &[Event]) -> String {
    let rows: Vec<[String; 4]> = events.iter().filter(|e| e.is_available()).map(row).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![
        border('┌', '┬', '┐', &widths),
        line(&HEADERS, &widths),
        border('├', '┼', '┤', &widths),
    ];
    lines.extend(rows.iter().map(|row| line(row, &widths)));
    lines.push(border('└', '┴', '┘', &widths));

    lines.join("\n")
}
