//! Console implementations of the presenter and input-source seams.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use pequod_story::driver::{InputSource, Presenter};
use pequod_story::error::{StoryError, StoryResult};

/// Writes narration to stdout, optionally paced character by character.
pub struct ConsolePresenter {
    char_delay: Duration,
}

impl ConsolePresenter {
    /// Create a presenter with the given per-character delay. A zero delay
    /// prints each block at once.
    pub fn new(char_delay: Duration) -> Self {
        Self { char_delay }
    }
}

impl Presenter for ConsolePresenter {
    fn render(&mut self, text: &str) {
        if self.char_delay.is_zero() {
            println!("{text}\n");
            return;
        }
        let mut stdout = io::stdout();
        for ch in text.chars() {
            print!("{ch}");
            let _ = stdout.flush();
            thread::sleep(self.char_delay);
        }
        println!("\n");
    }

    fn render_header(&mut self, title: &str) {
        let rule = "=".repeat(60);
        println!("\n{rule}");
        println!("  {}", title.to_uppercase().bold());
        println!("{rule}\n");
    }
}

/// Line-based input with indefinite re-prompting on malformed entry.
///
/// Generic over the reader and prompt writer so the loop can be tested
/// against in-memory buffers.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Wrap a reader and a prompt writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> StoryResult<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(StoryError::Interrupted),
            Ok(_) => Ok(line),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(StoryError::Interrupted),
            Err(e) => Err(e.into()),
        }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn prompt_choice(&mut self, question: &str, options: &[&str]) -> StoryResult<usize> {
        loop {
            writeln!(self.writer, "\n{question}")?;
            for (number, label) in (1..).zip(options) {
                writeln!(self.writer, "{number}. {label}")?;
            }
            write!(self.writer, "\nEnter your choice (number): ")?;
            self.writer.flush()?;

            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                Ok(_) => writeln!(
                    self.writer,
                    "{}",
                    "Invalid choice. Please try again.".yellow()
                )?,
                Err(_) => writeln!(self.writer, "{}", "Please enter a valid number.".yellow())?,
            }
        }
    }

    fn pause(&mut self) -> StoryResult<()> {
        write!(self.writer, "\nPress Enter to begin your adventure...")?;
        self.writer.flush()?;
        self.read_line().map(|_| ())
    }
}
