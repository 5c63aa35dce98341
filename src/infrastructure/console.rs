//! Line-oriented prompts for the interactive wizard
//!
//! Generic over the reader and writer so sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
    /// End of input reached while waiting for an answer
    #[error("Input closed")]
    InputClosed,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `prompt` and read one line, without its line ending
    pub fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask a one-letter question. An empty answer means `default`.
    ///
    /// Returns `false` for `default` and `true` for `alternative`; any other
    /// answer repeats the prompt.
    pub fn yes_no(
        &mut self,
        prompt: &str,
        default: char,
        alternative: char,
    ) -> Result<bool, ConsoleError> {
        loop {
            let answer = self.read_line(prompt)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(false);
            }

            let mut chars = answer.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if c.is_alphabetic() {
                    let c = c.to_ascii_lowercase();
                    if c == default {
                        return Ok(false);
                    }
                    if c == alternative {
                        return Ok(true);
                    }
                }
            }
        }
    }

    /// Show a numbered menu under `heading` and read until one of the listed
    /// numbers is entered.
    pub fn select(&mut self, heading: &str, entries: &[(u8, String)]) -> Result<u8, ConsoleError> {
        loop {
            self.say(heading)?;
            for (number, label) in entries {
                self.say(format_args!("{}) {}", number, label))?;
            }

            let answer = self.read_line("Selection: ")?;
            let answer = answer.trim();
            if !answer.is_empty() && answer.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(number) = answer.parse::<u8>() {
                    if entries.iter().any(|(n, _)| *n == number) {
                        return Ok(number);
                    }
                }
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_line_ending() {
        let mut c = console("hello\r\n");
        assert_eq!(c.read_line("> ").unwrap(), "hello");
        assert_eq!(output(c), "> ");
    }

    #[test]
    fn test_read_line_at_end_of_input() {
        let mut c = console("");
        assert!(matches!(c.read_line("> "), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn test_yes_no_default_and_alternative() {
        let mut c = console("\ny\nN\n");
        assert!(!c.yes_no("? ", 'n', 'y').unwrap());
        assert!(c.yes_no("? ", 'n', 'y').unwrap());
        assert!(!c.yes_no("? ", 'n', 'y').unwrap());
    }

    #[test]
    fn test_yes_no_reprompts_on_junk() {
        let mut c = console("maybe\n3\nx\nn\n");
        assert!(c.yes_no("Continue (Y/n): ", 'y', 'n').unwrap());
        assert_eq!(output(c).matches("Continue (Y/n): ").count(), 4);
    }

    #[test]
    fn test_select_accepts_only_listed_numbers() {
        let entries = vec![(2, "IFT".to_string()), (3, "Morale Check".to_string())];
        let mut c = console("1\nabc\n3\n");
        assert_eq!(c.select("Pick one.", &entries).unwrap(), 3);

        let text = output(c);
        assert_eq!(text.matches("Selection: ").count(), 3);
        assert!(text.contains("2) IFT\n3) Morale Check\n"));
    }

    #[test]
    fn test_select_at_end_of_input() {
        let entries = vec![(1, "Rally".to_string())];
        let mut c = console("9\n");
        assert!(matches!(
            c.select("Pick one.", &entries),
            Err(ConsoleError::InputClosed)
        ));
    }
}
