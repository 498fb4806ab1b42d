//! `shelf shell`: one long-lived pair of stores driven line by line.

use std::io::{BufRead, IsTerminal, Write};

use clap::Parser;
use shelf_core::notice::Notice;

use crate::cli::GlobalFlags;
use crate::cli::shell_line::{ShellCommand, ShellLine, split_words};
use crate::commands;
use crate::commands::shared::notice::emit;
use crate::context::AppContext;

const PROMPT: &str = "shelf> ";

/// Read commands from stdin until EOF or `exit`.
///
/// A failing command prints a notice and the loop carries on.
pub fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal() && !flags.quiet;

    if interactive {
        eprintln!("Type `category list`, `auth login --email .. --password ..`, or `exit`.");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            eprint!("{PROMPT}");
            std::io::stderr().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        if execute_line(&line?, ctx, flags) == LineOutcome::Exit {
            break;
        }
    }

    tracing::debug!(revision = ctx.categories.revision(), "shell closed");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// Parse and run one line of shell input.
pub fn execute_line(line: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> LineOutcome {
    let words = match split_words(line) {
        Ok(words) => words,
        Err(quote) => {
            eprintln!("unterminated {quote} quote");
            return LineOutcome::Continue;
        }
    };
    if words.is_empty() {
        return LineOutcome::Continue;
    }

    let parsed = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("{error}");
            return LineOutcome::Continue;
        }
    };

    let (title, result) = match &parsed.command {
        ShellCommand::Exit => return LineOutcome::Exit,
        ShellCommand::Auth { action } => (
            commands::auth::failure_title(action),
            commands::auth::handle(action, ctx, flags),
        ),
        ShellCommand::Category { action } => {
            ("Error", commands::category::handle(action, ctx, flags))
        }
        ShellCommand::Route(args) => ("Error", commands::route::handle(args, ctx, flags)),
    };

    if let Err(error) = result {
        emit(&Notice::failure(title, &error), flags);
    }
    LineOutcome::Continue
}
