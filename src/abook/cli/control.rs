//! The interactive command loop.
//!
//! The loop has one steady state, waiting for a command. Every command runs
//! to completion and returns there, except `exit` (or closed input), which
//! ends the loop.

use super::console::Console;
use super::render::{
    write_banner, write_choices, write_command_menu, write_messages, write_records,
};
use abook::api::{AbookApi, CmdMessage};
use abook::error::Result;
use abook::model::Record;
use abook::store::Storage;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    View,
    Add,
    Edit,
    Delete,
    Search,
    Exit,
}

impl Command {
    /// Parses a single-character command, ignoring case. The original
    /// Cyrillic command letters are accepted as well.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars().flat_map(char::to_lowercase);
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match key {
            'v' | 'п' => Some(Self::View),
            'a' | 'д' => Some(Self::Add),
            'e' | 'и' => Some(Self::Edit),
            'd' | 'у' => Some(Self::Delete),
            's' | 'н' => Some(Self::Search),
            'q' | 'в' => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingCommand,
    Exited,
}

/// What the user is picking a record for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Delete,
}

impl Action {
    fn heading(&self) -> &'static str {
        match self {
            Action::Edit => "Editing a record",
            Action::Delete => "Deleting a record",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Action::Edit => "Edit",
            Action::Delete => "Delete",
        }
    }
}

/// Runs `initial` once, then prompts for commands until exit or end of input.
pub fn run_loop<S, R, W>(
    api: &mut AbookApi<S>,
    console: &mut Console<R, W>,
    initial: &str,
) -> Result<()>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    let mut next = Some(initial.to_string());
    while let Some(input) = next {
        if let Some(command) = Command::parse(&input) {
            debug!(?command, "Executing command");
            if execute(api, console, command)? == LoopState::Exited {
                return Ok(());
            }
        }
        write_command_menu(console.output())?;
        next = console.read_line()?;
    }
    debug!("Console input closed");
    Ok(())
}

pub fn execute<S, R, W>(
    api: &mut AbookApi<S>,
    console: &mut Console<R, W>,
    command: Command,
) -> Result<LoopState>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    match command {
        Command::View => {
            let result = api.list_records();
            write_banner(console.output(), api.description())?;
            write_records(console.output(), &result.listed_records)?;
        }
        Command::Add => {
            if let Some(fields) = console.ask_fields()? {
                let result = api.add_record(fields)?;
                write_messages(console.output(), &result.messages)?;
            }
        }
        Command::Edit => {
            if let Some(record) = pick(api, console, Action::Edit)? {
                writeln!(console.output(), "Leave a field blank to keep its value")?;
                if let Some(patch) = console.ask_fields()? {
                    let result = api.update_record(record.id, &patch)?;
                    write_messages(console.output(), &result.messages)?;
                }
            }
        }
        Command::Delete => {
            if let Some(record) = pick(api, console, Action::Delete)? {
                let result = api.delete_record(&record)?;
                write_messages(console.output(), &result.messages)?;
            }
        }
        Command::Search => {
            if let Some(prefix) = console.ask_prefix()? {
                let result = api.search_records(&prefix);
                write_records(console.output(), &result.listed_records)?;
                write_messages(console.output(), &result.messages)?;
            }
        }
        Command::Exit => return Ok(LoopState::Exited),
    }
    Ok(LoopState::AwaitingCommand)
}

fn pick<S, R, W>(
    api: &AbookApi<S>,
    console: &mut Console<R, W>,
    action: Action,
) -> Result<Option<Record>>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    let Some(prefix) = console.ask_prefix()? else {
        return Ok(None);
    };
    let matches = api.find_records(&prefix);
    select_record(console, matches, action)
}

/// Narrows search results down to one record, or none.
///
/// No matches reports "Nothing found". A single match must be confirmed.
/// Several matches are listed and the user enters a 1-based number; an
/// invalid number is reported and nothing is selected.
pub fn select_record<R, W>(
    console: &mut Console<R, W>,
    mut matches: Vec<Record>,
    action: Action,
) -> Result<Option<Record>>
where
    R: BufRead,
    W: Write,
{
    writeln!(console.output(), "{}", action.heading())?;

    match matches.len() {
        0 => {
            write_messages(console.output(), &[CmdMessage::info("Nothing found")])?;
            Ok(None)
        }
        1 => {
            let record = matches.remove(0);
            let question = format!("{}: \"{}\"?", action.verb(), record);
            Ok(console.confirm(&question)?.then_some(record))
        }
        count => {
            writeln!(console.output(), "More than one record found:")?;
            write_choices(console.output(), &matches)?;
            let Some(answer) = console.prompt("Record number: ")? else {
                return Ok(None);
            };
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => Ok(Some(matches.swap_remove(n - 1))),
                _ => {
                    write_messages(
                        console.output(),
                        &[CmdMessage::error("Invalid record number")],
                    )?;
                    Ok(None)
                }
            }
        }
    }
}
