use abook::api::{CmdMessage, MessageLevel};
use abook::model::Record;
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// The description framed by `=` rules as wide as it is.
pub(super) fn write_banner<W: Write>(out: &mut W, description: &str) -> io::Result<()> {
    let rule = "=".repeat(description.width());
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", description.bold())?;
    writeln!(out, "{}", rule)
}

pub(super) fn write_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", record.listing())?;
    }
    Ok(())
}

/// Numbered list for picking one record, starting at 1.
pub(super) fn write_choices<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "{}. {}", (i + 1).to_string().yellow(), record.listing())?;
    }
    Ok(())
}

pub(super) fn write_command_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Choose an action:")?;
    for (key, label) in [
        ("v", "view the whole book"),
        ("a", "add a record"),
        ("e", "edit a record"),
        ("d", "delete a record"),
        ("s", "search records"),
        ("q", "quit"),
    ] {
        writeln!(out, "{} - {}", key.cyan(), label)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use abook::model::RecordFields;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn banner_rule_matches_display_width() {
        let out = render(|w| write_banner(w, "Книга"));
        let first = out.lines().next().unwrap();
        assert_eq!(first, "=====");
        assert!(out.contains("Книга"));
    }

    #[test]
    fn choices_are_numbered_from_one() {
        let records = vec![
            Record::new(1, RecordFields::new("Smith", "John", "A", "555")),
            Record::new(2, RecordFields::new("Smyth", "Jane", "B", "666")),
        ];
        let out = render(|w| write_choices(w, &records));
        assert!(out.contains("1"));
        assert!(out.contains("Smith John A | 555"));
        assert!(out.contains("Smyth Jane B | 666"));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn messages_keep_their_text() {
        let out = render(|w| {
            write_messages(
                w,
                &[CmdMessage::success("saved"), CmdMessage::error("bad number")],
            )
        });
        assert!(out.contains("saved"));
        assert!(out.contains("bad number"));
    }
}
