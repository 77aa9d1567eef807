//! Line-oriented command scripts driving a `TunerRegistry`.
//!
//! Positions are 1-based, as shown by `list`.

use std::io::BufRead;

use anyhow::{Context, Result, bail};
use tvtuner_core::registry::format_list_line;
use tvtuner_core::{Channel, TunerRegistry};

/// A parsed script command. Positions are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the numbered lineup.
    List,
    /// Print the registry summary.
    Show,
    /// Tune to a position.
    Tune(usize),
    /// Toggle favorite on the tuned channel.
    Favorite,
    /// Append a new channel.
    Add {
        /// Frequency in MHz.
        frequency: u32,
        /// Channel name.
        name: String,
    },
    /// Remove the channel at a position.
    Remove(usize),
    /// Exchange two positions.
    Swap(usize, usize),
    /// Find the first channel whose name contains the query.
    Find(String),
    /// Print favorite channels.
    Favorites,
    /// Restore the factory lineup.
    Reset,
}

/// Counters reported after a script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptStats {
    /// Commands that succeeded.
    pub succeeded: usize,
    /// Commands that were malformed or rejected by the registry.
    pub failed: usize,
}

/// Parses a 1-based position token into a zero-based index.
fn parse_position(token: &str) -> Result<usize> {
    let pos = token
        .parse::<usize>()
        .with_context(|| format!("invalid position '{token}'"))?;
    pos.checked_sub(1)
        .with_context(|| format!("invalid position '{token}': positions start at 1"))
}

/// Parses one script line. Returns `None` for blank lines and `#` comments.
///
/// # Errors
///
/// Returns an error for unknown commands or malformed arguments.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(v, r)| (v, r.trim()));
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("list" | "ls", []) => Command::List,
        ("show" | "status", []) => Command::Show,
        ("fav" | "favorite", []) => Command::Favorite,
        ("favorites", []) => Command::Favorites,
        ("reset", []) => Command::Reset,
        ("tune", [pos]) => Command::Tune(parse_position(pos)?),
        ("remove" | "rm", [pos]) => Command::Remove(parse_position(pos)?),
        ("swap", [a, b]) => Command::Swap(parse_position(a)?, parse_position(b)?),
        ("find", _) => Command::Find(String::from(rest)),
        ("add", [freq, _, ..]) => {
            let frequency = freq
                .parse::<u32>()
                .with_context(|| format!("invalid frequency '{freq}'"))?;
            let name = rest
                .split_once(char::is_whitespace)
                .map_or("", |(_, n)| n.trim());
            Command::Add {
                frequency,
                name: String::from(name),
            }
        }
        ("add", _) => bail!("usage: add <MHz> <name>"),
        ("tune" | "remove" | "rm", _) => bail!("usage: {verb} <position>"),
        ("swap", _) => bail!("usage: swap <position> <position>"),
        ("list" | "ls" | "show" | "status" | "fav" | "favorite" | "favorites" | "reset", _) => {
            bail!("'{verb}' takes no arguments")
        }
        _ => bail!("unknown command '{verb}'"),
    };
    Ok(Some(command))
}

/// Applies a command, returning the text to report.
///
/// # Errors
///
/// Returns an error describing why the registry refused the command.
pub fn execute(registry: &mut TunerRegistry, command: &Command) -> Result<String> {
    match command {
        Command::List => {
            let list = registry.render_list();
            if list.is_empty() {
                Ok(String::from("(no channels)"))
            } else {
                Ok(String::from(list.trim_end()))
            }
        }
        Command::Show => Ok(registry.render_summary()),
        Command::Tune(pos) => {
            if !registry.tune(*pos) {
                bail!("no channel at position {}", pos.saturating_add(1));
            }
            Ok(format!("Tuned to {}", describe_current(registry)))
        }
        Command::Favorite => {
            if !registry.toggle_favorite() {
                bail!("not tuned to any channel");
            }
            Ok(format!("Toggled favorite: {}", describe_current(registry)))
        }
        Command::Add { frequency, name } => {
            let channel = Channel::new(name.as_str(), *frequency)
                .with_context(|| format!("cannot create channel '{name}'"))?;
            let pos = registry.try_add(channel)?;
            Ok(format!("Added at position {}", pos.saturating_add(1)))
        }
        Command::Remove(pos) => {
            let Some(removed) = registry.remove(*pos) else {
                bail!("no channel at position {}", pos.saturating_add(1));
            };
            Ok(format!("Removed {removed}"))
        }
        Command::Swap(a, b) => {
            if !registry.swap(*a, *b) {
                bail!(
                    "cannot swap positions {} and {}",
                    a.saturating_add(1),
                    b.saturating_add(1)
                );
            }
            Ok(format!(
                "Swapped positions {} and {}",
                a.saturating_add(1),
                b.saturating_add(1)
            ))
        }
        Command::Find(query) => {
            let Some(pos) = registry.find_by_name(query) else {
                bail!("no channel matches '{query}'");
            };
            let line = registry
                .get_channel(pos)
                .map(|ch| format_list_line(pos, ch))
                .unwrap_or_default();
            Ok(format!("Found {}", line.trim()))
        }
        Command::Favorites => {
            let favorites: String = registry
                .favorites()
                .map(|(pos, ch)| format_list_line(pos, ch))
                .collect();
            if favorites.is_empty() {
                Ok(String::from("(no favorites)"))
            } else {
                Ok(String::from(favorites.trim_end()))
            }
        }
        Command::Reset => {
            registry.reset_to_factory();
            Ok(format!(
                "Restored factory lineup ({} channels)",
                registry.count()
            ))
        }
    }
}

fn describe_current(registry: &TunerRegistry) -> String {
    registry
        .current_channel()
        .map_or_else(|| String::from("None"), ToString::to_string)
}

/// Runs every line of `reader` against `registry`.
///
/// Malformed lines and refused commands are logged as warnings and do not
/// stop the run.
///
/// # Errors
///
/// Returns an error only if reading from `reader` fails.
pub fn run_script<R: BufRead>(registry: &mut TunerRegistry, reader: R) -> Result<ScriptStats> {
    let mut stats = ScriptStats::default();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx.saturating_add(1);
        let line = line.with_context(|| format!("failed to read script line {line_no}"))?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!("line {line_no}: {err:#}");
                stats.failed = stats.failed.saturating_add(1);
                continue;
            }
        };

        match execute(registry, &command) {
            Ok(report) => {
                tracing::info!("{report}");
                stats.succeeded = stats.succeeded.saturating_add(1);
            }
            Err(err) => {
                tracing::warn!("line {line_no}: {err:#}");
                stats.failed = stats.failed.saturating_add(1);
            }
        }
    }
    Ok(stats)
}
