//! In-memory stand-ins for the network, the terminal and the desktop.

use std::cell::Cell;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use anyhow::anyhow;
use chrono::NaiveDate;
use chrono::TimeZone;
use chrono::Utc;

use crate::event::Event;
use crate::fetcher::EventSource;
use crate::fetcher::FetchError;
use crate::notifier::Alert;
use crate::presenter::Present;
use crate::window::Window;

pub fn event(hour: u32, tickets_left: i64) -> Event {
    let at = Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap();
    Event::new(at, tickets_left, at)
}

/// Plays back canned fetch results in order, then empty windows forever.
#[derive(Default)]
pub struct ScriptedSource {
    script: RefCell<VecDeque<Result<Vec<Event>, FetchError>>>,
    requested: RefCell<Vec<Window>>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Result<Vec<Event>, FetchError>>) -> Self {
        Self {
            script: RefCell::new(script.into_iter().collect()),
            requested: RefCell::default(),
        }
    }

    pub fn requested(&self) -> Vec<Window> {
        self.requested.borrow().clone()
    }
}

impl EventSource for ScriptedSource {
    async fn fetch(&self, window: Window) -> Result<Vec<Event>, FetchError> {
        self.requested.borrow_mut().push(window);
        self.script.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()))
    }
}

#[derive(Debug, PartialEq)]
pub struct Frame {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub events: Vec<Event>,
}

#[derive(Default)]
pub struct RecordingPresenter {
    /// Every call in order: "clear", "progress" or "show".
    pub calls: Vec<&'static str>,
    pub progress: Vec<Window>,
    pub frames: Vec<Frame>,
}

impl Present for RecordingPresenter {
    fn clear(&mut self) -> io::Result<()> {
        self.calls.push("clear");
        Ok(())
    }

    fn show_progress(&mut self, window: Window) -> io::Result<()> {
        self.calls.push("progress");
        self.progress.push(window);
        Ok(())
    }

    fn show(&mut self, from: NaiveDate, to: NaiveDate, events: &[Event]) -> io::Result<()> {
        self.calls.push("show");
        self.frames.push(Frame {
            from,
            to,
            events: events.to_vec(),
        });
        Ok(())
    }
}

#[derive(Default)]
pub struct CountingAlert {
    fail: bool,
    count: Cell<usize>,
    last: RefCell<Option<(String, String)>>,
}

impl CountingAlert {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn last(&self) -> Option<(String, String)> {
        self.last.borrow().clone()
    }
}

impl Alert for CountingAlert {
    async fn alert(&self, title: &str, body: &str) -> anyhow::Result<()> {
        self.count.set(self.count.get() + 1);
        *self.last.borrow_mut() = Some((title.to_string(), body.to_string()));
        if self.fail {
            return Err(anyhow!("no notification daemon"));
        }
        Ok(())
    }
}
