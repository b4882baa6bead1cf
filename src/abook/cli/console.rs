use abook::error::Result;
use abook::model::RecordFields;
use std::io::{BufRead, Write};

/// Line-oriented terminal I/O. Generic so tests can drive it from memory.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its terminator. `None` once input is closed.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks for the four record fields. Commas are replaced as they are entered.
    pub fn ask_fields(&mut self) -> Result<Option<RecordFields>> {
        let Some(last_name) = self.prompt("Last name: ")? else {
            return Ok(None);
        };
        let Some(first_name) = self.prompt("First name: ")? else {
            return Ok(None);
        };
        let Some(middle_name) = self.prompt("Middle name: ")? else {
            return Ok(None);
        };
        let Some(phone) = self.prompt("Phone: ")? else {
            return Ok(None);
        };
        Ok(Some(RecordFields::new(
            last_name,
            first_name,
            middle_name,
            phone,
        )))
    }

    pub fn ask_prefix(&mut self) -> Result<Option<String>> {
        self.prompt("Beginning of last name: ")
    }

    /// Yes/no question. Anything but an explicit yes is a no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{} (y/n) ", question))?;
        Ok(answer.is_some_and(|a| is_yes(&a)))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn read_line_strips_terminators_and_detects_eof() {
        let mut c = console("first\r\nsecond");
        assert_eq!(c.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn ask_fields_sanitizes_input() {
        let mut c = console("Smith, Jr\nJohn\n\n555-1111\n");
        let fields = c.ask_fields().unwrap().unwrap();
        assert_eq!(fields, RecordFields::new("Smith  Jr", "John", "", "555-1111"));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("Phone: "));
    }

    #[test]
    fn ask_fields_stops_at_eof() {
        let mut c = console("Smith\nJohn\n");
        assert_eq!(c.ask_fields().unwrap(), None);
    }

    #[test]
    fn confirm_accepts_only_yes() {
        assert!(console("y\n").confirm("Delete?").unwrap());
        assert!(console("YES\n").confirm("Delete?").unwrap());
        assert!(console("д\n").confirm("Delete?").unwrap());
        assert!(!console("n\n").confirm("Delete?").unwrap());
        assert!(!console("").confirm("Delete?").unwrap());
    }
}
