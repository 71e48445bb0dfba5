/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossterm::execute;
use crossterm::style::{self, Print, ResetColor, SetForegroundColor};
use std::io::{stdout, Write};
use std::sync::Mutex;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Display hint attached to a printed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Yellow,
    DarkCyan,
    DarkGreen,
}

impl From<Color> for style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Green => style::Color::Green,
            Color::Red => style::Color::Red,
            Color::Yellow => style::Color::Yellow,
            Color::DarkCyan => style::Color::DarkCyan,
            Color::DarkGreen => style::Color::DarkGreen,
        }
    }
}

/// Line-oriented output shared by the dispatcher and the input loop.
///
/// Printing never fails from the caller's point of view.
pub trait Printer: Send + Sync {
    fn print(&self, text: &str, color: Option<Color>, reset_color: bool);

    fn line(&self, text: &str) {
        self.print(text, None, true);
    }

    fn colored(&self, text: &str, color: Color) {
        self.print(text, Some(color), true);
    }
}

/// Writes to stdout with crossterm colour commands.
#[derive(Default)]
pub struct ConsolePrinter {
    // Keeps colour changes and their text together across threads
    lock: Mutex<()>,
}

impl ConsolePrinter {
    pub fn new() -> ConsolePrinter {
        ConsolePrinter::default()
    }
}

impl Printer for ConsolePrinter {
    fn print(&self, text: &str, color: Option<Color>, reset_color: bool) {
        let _guard = self.lock.lock();
        let mut out = stdout().lock();

        if let Some(color) = color {
            let _ = execute!(out, SetForegroundColor(color.into()));
        }
        let _ = execute!(out, Print(text), Print("\n"));
        if reset_color {
            let _ = execute!(out, ResetColor);
        }
        let _ = out.flush();
    }
}

/// Collects printed lines in memory.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingPrinter {
    pub lines: Mutex<Vec<(String, Option<Color>)>>,
}

#[cfg(test)]
impl RecordingPrinter {
    pub fn texts(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .map(|(text, _)| text.clone())
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| text.contains(needle))
    }
}

#[cfg(test)]
impl Printer for RecordingPrinter {
    fn print(&self, text: &str, color: Option<Color>, _reset_color: bool) {
        self.lines.lock().unwrap().push((text.to_string(), color));
    }
}
