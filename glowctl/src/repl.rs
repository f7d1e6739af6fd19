//! The prompt loop
//!
//! Reads one line at a time, resolves the first word against the command
//! table, and runs the rest as arguments. Bad input is reported and the
//! loop keeps going; only end-of-input or a broken stdin ends it.

use std::io::{self, Write as _};

use anyhow::{bail, Context as _};
use tracing::error;

use glowctl_ble::Glasses;

use crate::commands::{Action, Command, Registry};

pub async fn run(glasses: &Glasses, registry: &Registry) -> anyhow::Result<()> {
    let mut line = String::new();
    loop {
        print!("{}> ", glasses.name());
        io::stdout().flush().context("flushing prompt")?;

        line.clear();
        if io::stdin().read_line(&mut line).context("reading input")? == 0 {
            println!();
            return Ok(());
        }

        match parse_line(registry, &line) {
            Ok(None) => {}
            Ok(Some((command, args))) => {
                if let Err(err) = dispatch(glasses, registry, command, &args).await {
                    error!("{err:#}");
                }
            }
            Err(err) => error!("{err:#}"),
        }
    }
}

/// Resolves one line of input against the registry. A blank line is a
/// no-op, not an error.
fn parse_line<'r>(
    registry: &'r Registry,
    line: &str,
) -> anyhow::Result<Option<(&'r Command, Vec<String>)>> {
    let input = line.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let words = shell_words::split(input).context("parsing input")?;
    let Some((name, args)) = words.split_first() else {
        return Ok(None);
    };
    let Some(command) = registry.get(name) else {
        bail!("unrecognised command, try 'help'");
    };
    Ok(Some((command, args.to_vec())))
}

/// Runs a resolved command against the glasses. None of the shipped
/// commands take arguments.
async fn dispatch(
    glasses: &Glasses,
    registry: &Registry,
    command: &Command,
    _args: &[String],
) -> anyhow::Result<()> {
    match command.action {
        Action::On => glasses.on().await?,
        Action::Off => glasses.off().await?,
        Action::Help => print!("{}", registry.help_text()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_noops() {
        let registry = Registry::builtin();
        assert!(parse_line(&registry, "").unwrap().is_none());
        assert!(parse_line(&registry, "   \n").unwrap().is_none());
    }

    #[test]
    fn resolves_a_command_and_its_args() {
        let registry = Registry::builtin();
        let (command, args) = parse_line(&registry, "on\n").unwrap().unwrap();
        assert_eq!(command.action, Action::On);
        assert!(args.is_empty());
    }

    #[test]
    fn splits_quoted_arguments() {
        let mut registry = Registry::builtin();
        registry.register(Action::Help, "show", "Show a pattern");
        let (_, args) = parse_line(&registry, r#"show "warm white" blink"#)
            .unwrap()
            .unwrap();
        assert_eq!(args, ["warm white", "blink"]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let registry = Registry::builtin();
        let err = parse_line(&registry, "on \"half").unwrap_err();
        assert!(err.to_string().contains("parsing input"));
    }

    #[test]
    fn unknown_command_is_an_error() {
        let registry = Registry::builtin();
        let err = parse_line(&registry, "flicker").unwrap_err();
        assert!(err.to_string().contains("unrecognised command"));
    }
}
