//! Parser for one line of `shelf shell` input.

use clap::{Parser, Subcommand};

use crate::cli::root_commands::RouteArgs;
use crate::cli::subcommands::{AuthCommands, CategoryCommands};

#[derive(Debug, Parser)]
#[command(name = "shelf>", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands accepted inside the shell.
#[derive(Clone, Debug, Subcommand)]
pub enum ShellCommand {
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    Route(RouteArgs),
    /// Leave the shell.
    #[command(alias = "quit")]
    Exit,
}

/// Split a line into words. Single or double quotes group words; there are
/// no escapes.
///
/// # Errors
///
/// Returns the unterminated quote character.
pub fn split_words(line: &str) -> Result<Vec<String>, char> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if let Some(open) = quote {
        return Err(open);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn shell_command_tree_is_valid() {
        ShellLine::command().debug_assert();
    }

    #[test]
    fn quotes_group_words() {
        let words = split_words(r#"category add --name "Winter Coats" --image ''"#).unwrap();
        assert_eq!(
            words,
            vec!["category", "add", "--name", "Winter Coats", "--image", ""]
        );
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        assert_eq!(split_words("category add --name \"Oops"), Err('"'));
    }

    #[test]
    fn blank_line_has_no_words() {
        assert!(split_words("   ").unwrap().is_empty());
    }

    #[test]
    fn parses_without_binary_name() {
        let line = ShellLine::try_parse_from(["category", "delete", "4"]).unwrap();
        assert!(matches!(
            line.command,
            ShellCommand::Category {
                action: CategoryCommands::Delete { .. }
            }
        ));
        let quit = ShellLine::try_parse_from(["quit"]).unwrap();
        assert!(matches!(quit.command, ShellCommand::Exit));
    }
}
