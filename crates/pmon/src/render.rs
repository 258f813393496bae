//! Progress rendering
//!
//! The engine reports every tick through [`Render`]. Two sinks exist: a
//! single self-overwriting terminal line, and a log file that is rewound on
//! every update so it only ever holds the latest state.

use chrono::{Local, TimeDelta};
use crossterm::{cursor, execute, queue};
use pmon_core::format::clock;
use std::fs::File;
use std::io::{self, Seek, SeekFrom, Stdout, Write};
use std::path::Path;

use crate::phase::Phase;
use crate::summary::Summary;

/// Width the terminal line is padded to so shorter updates erase longer ones
const LINE_WIDTH: usize = 40;

/// One progress notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub phase: Phase,
    pub minutes_remaining: u64,
    pub seconds_remaining: u64,
    /// Configured length of the phase in seconds
    pub total_secs: u64,
    pub paused: bool,
}

impl Progress {
    pub fn new(phase: Phase, remaining_secs: u64, total_secs: u64, paused: bool) -> Self {
        Self {
            phase,
            minutes_remaining: remaining_secs / 60,
            seconds_remaining: remaining_secs % 60,
            total_secs,
            paused,
        }
    }

    pub fn remaining_secs(&self) -> u64 {
        self.minutes_remaining * 60 + self.seconds_remaining
    }

    /// `Work: [24:59/25:00]`, with a marker when paused
    pub fn status_line(&self) -> String {
        let mut line = format!(
            "{}: [{:02}:{:02}/{}]",
            self.phase,
            self.minutes_remaining,
            self.seconds_remaining,
            clock(self.total_secs)
        );
        if self.paused {
            line.push_str(" (paused)");
        }
        line
    }
}

/// Sink for progress notifications and the exit summary
pub trait Render {
    fn render(&mut self, progress: &Progress) -> io::Result<()>;

    /// Emit the summary and release whatever the sink holds open
    fn finish(&mut self, summary: &Summary) -> io::Result<()>;
}

impl<R: Render + ?Sized> Render for Box<R> {
    fn render(&mut self, progress: &Progress) -> io::Result<()> {
        (**self).render(progress)
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        (**self).finish(summary)
    }
}

/// Interactive display: one line rewritten in place with `\r`
pub struct TerminalRenderer<W: Write> {
    out: W,
    cursor_hidden: bool,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cursor_hidden: false,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    fn render(&mut self, progress: &Progress) -> io::Result<()> {
        if !self.cursor_hidden {
            queue!(self.out, cursor::Hide)?;
            self.cursor_hidden = true;
        }
        write!(self.out, "\r{:<width$}", progress.status_line(), width = LINE_WIDTH)?;
        self.out.flush()
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        write!(self.out, "\n\n{}\n", summary)?;
        if self.cursor_hidden {
            execute!(self.out, cursor::Show)?;
            self.cursor_hidden = false;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = execute!(self.out, cursor::Show);
        }
    }
}

/// Persistent display: a file holding only the latest progress
pub struct LogFileRenderer {
    file: Option<File>,
}

impl LogFileRenderer {
    /// Create (or truncate) the log file at `path`
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self { file: Some(file) })
    }

    fn contents(progress: &Progress) -> String {
        let mut text = progress.status_line();
        text.push('\n');
        if progress.paused {
            text.push_str("paused\n");
        } else if let Some(end) = TimeDelta::try_seconds(progress.remaining_secs() as i64)
            .and_then(|remaining| Local::now().checked_add_signed(remaining))
        {
            text.push_str(&format!("ends at {}\n", end.format("%H:%M")));
        }
        text
    }
}

impl Render for LogFileRenderer {
    fn render(&mut self, progress: &Progress) -> io::Result<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::other("log file already closed"))?;

        file.seek(SeekFrom::Start(0))?;
        file.set_len(0)?;
        file.write_all(Self::contents(progress).as_bytes())?;
        file.flush()
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        println!("{}", summary);
        if let Some(file) = self.file.take() {
            file.sync_all()?;
        }
        Ok(())
    }
}
