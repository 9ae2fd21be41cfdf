//! Terminal page reader for the headless CLI.

use std::io::{self, BufRead, Write};

use crate::navigator::StoryNavigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderOutcome {
    Quit,
    /// The reader asked to discard this story and start another.
    NewStory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Previous,
    NewStory,
    Quit,
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "next" => Command::Next,
            "p" | "prev" | "previous" => Command::Previous,
            "r" | "new" => Command::NewStory,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Unknown,
        }
    }
}

/// Print one page with its label and illustration URL.
pub fn print_page<W: Write>(navigator: &StoryNavigator, out: &mut W) -> io::Result<()> {
    let page = navigator.current_page();
    writeln!(out, "\n--- {} ---", navigator.label())?;
    writeln!(out, "{}", page.text())?;
    writeln!(out, "Illustration: {}", page.image_url())
}

/// Page through a story interactively until the reader quits, asks for a
/// new story, or input ends.
pub fn read_story<R, W>(
    navigator: &mut StoryNavigator,
    input: R,
    mut out: W,
) -> io::Result<ReaderOutcome>
where
    R: BufRead,
    W: Write,
{
    print_page(navigator, &mut out)?;
    let mut lines = input.lines();

    loop {
        write!(out, "[n]ext  [p]revious  [r] new story  [q]uit > ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(ReaderOutcome::Quit);
        };

        let moved = match Command::parse(&line?) {
            Command::Next => navigator.next(),
            Command::Previous => navigator.previous(),
            Command::NewStory => return Ok(ReaderOutcome::NewStory),
            Command::Quit => return Ok(ReaderOutcome::Quit),
            Command::Unknown => {
                writeln!(out, "Unknown command")?;
                false
            }
        };

        if moved {
            print_page(navigator, &mut out)?;
        }
    }
}
