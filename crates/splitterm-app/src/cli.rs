use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use splitterm_tiling::Direction;

/// splitterm: split-pane terminal multiplexer engine.
#[derive(Parser, Debug)]
#[command(name = "splitterm", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Layout store path override.
    #[arg(long, global = true)]
    pub layouts: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error or a full directive).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the layout of one tab, or of every tab.
    Show {
        #[arg(long)]
        tab: Option<String>,
        /// Print the stored JSON instead of a tree.
        #[arg(long)]
        json: bool,
    },
    /// Create (or reset) a tab with a default layout.
    NewTab { tab: String },
    /// Remove a tab and its layout.
    RemoveTab { tab: String },
    /// Split child INDEX of split ID.
    Split {
        id: String,
        index: usize,
        #[arg(value_enum)]
        direction: DirectionArg,
        /// Insert the new pane before the child instead of after it.
        #[arg(long)]
        before: bool,
    },
    /// Close child INDEX of split ID.
    Close { id: String, index: usize },
    /// Swap leaf ID with child INDEX of split PARENT.
    Swap {
        id: String,
        parent: String,
        index: usize,
    },
    /// Set the sizes of split ID's children, in percent.
    Sizes {
        id: String,
        #[arg(required = true)]
        sizes: Vec<f64>,
    },
    /// Update a leaf's prefs. Unset flags keep their value.
    Prefs {
        id: String,
        #[arg(long)]
        badge: Option<String>,
        #[arg(long)]
        directory: Option<String>,
        #[arg(long)]
        startup: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },
    /// Update a leaf's search string or wrap flag.
    Search {
        id: String,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        wrap: Option<bool>,
    },
    /// Start a shell for every pane of a tab, show their output, then exit.
    Run {
        #[arg(long, default_value = "0")]
        tab: String,
        /// Command written to every pane after start.
        #[arg(short = 'e', long)]
        execute: Option<String>,
        /// Search each pane's scrollback for this text before printing.
        #[arg(long)]
        find: Option<String>,
        /// How long to collect output, in milliseconds.
        #[arg(long, default_value_t = 1500)]
        duration_ms: u64,
        /// Scrollback lines printed per pane.
        #[arg(long, default_value_t = 20)]
        lines: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionArg {
    Horizontal,
    Vertical,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Horizontal => Direction::Horizontal,
            DirectionArg::Vertical => Direction::Vertical,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_split_with_flags() {
        let args = Args::try_parse_from([
            "splitterm", "--layouts", "/tmp/l.json", "split", "abc", "1", "horizontal", "--before",
        ])
        .unwrap();
        assert_eq!(args.layouts, Some(PathBuf::from("/tmp/l.json")));
        match args.command {
            Command::Split {
                id,
                index,
                direction,
                before,
            } => {
                assert_eq!(id, "abc");
                assert_eq!(index, 1);
                assert_eq!(Direction::from(direction), Direction::Horizontal);
                assert!(before);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn run_defaults_to_permanent_tab() {
        let args = Args::try_parse_from(["splitterm", "run"]).unwrap();
        match args.command {
            Command::Run {
                tab,
                duration_ms,
                lines,
                ..
            } => {
                assert_eq!(tab, "0");
                assert_eq!(duration_ms, 1500);
                assert_eq!(lines, 20);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn sizes_requires_values() {
        assert!(Args::try_parse_from(["splitterm", "sizes", "abc"]).is_err());
        let args = Args::try_parse_from(["splitterm", "sizes", "abc", "30", "70"]).unwrap();
        assert!(matches!(args.command, Command::Sizes { ref sizes, .. } if sizes == &[30.0, 70.0]));
    }
}
