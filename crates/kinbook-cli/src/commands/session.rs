use crate::commands::dispatch::{dispatch, Reply};
use crate::commands::Context;
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use kinbook_config::{AppConfig, SaveOnExit};
use kinbook_core::time::local_today;
use kinbook_core::Directory;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const SAVE_QUESTION: &str = "Save address book ('Y' or 'N')? ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Save,
    Discard,
}

pub fn repl(ctx: &Context<'_>) -> Result<()> {
    let mut directory = ctx.store.load().with_context(|| "load address book")?;
    debug!(records = directory.len(), "address book loaded");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    let end = run_session(
        &mut input,
        &mut output,
        &mut directory,
        local_today(),
        ctx.config,
    )?;

    if end == SessionEnd::Save && !directory.is_empty() {
        ctx.store
            .save(&directory)
            .with_context(|| "save address book")?;
        debug!(records = directory.len(), "address book saved");
        writeln!(output, "Address book saved.")?;
    }
    writeln!(output, "Good bye!")?;
    Ok(())
}

/// Reads commands until `close`/`exit` or end of input, then settles whether
/// the book should be written back.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    directory: &mut Directory,
    today: NaiveDate,
    config: &AppConfig,
) -> Result<SessionEnd> {
    writeln!(output, "{WELCOME}")?;
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(match config.save_on_exit {
                SaveOnExit::Always => SessionEnd::Save,
                SaveOnExit::Ask | SaveOnExit::Never => SessionEnd::Discard,
            });
        }

        match dispatch(directory, today, &line) {
            Reply::Text(text) => writeln!(output, "{text}")?,
            Reply::Nothing => {}
            Reply::Exit => break,
        }
    }

    match config.save_on_exit {
        SaveOnExit::Always => Ok(SessionEnd::Save),
        SaveOnExit::Never => Ok(SessionEnd::Discard),
        SaveOnExit::Ask => ask_to_save(input, output),
    }
}

fn ask_to_save<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SessionEnd> {
    write!(output, "{SAVE_QUESTION}")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(SessionEnd::Save)
    } else {
        Ok(SessionEnd::Discard)
    }
}
