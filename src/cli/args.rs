//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::{LabelMode, RenderStyle};

/// Composite trees of mixed storage, walked by one pre-order iterator
#[derive(Parser, Debug)]
#[command(name = "dpatterns")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Explicit config file (TOML)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree and print its structure
    Composite {
        /// Tree expression, e.g. "root(A, linked:inner(B, C), D)"
        tree: Option<String>,
        /// Output style (overrides config)
        #[arg(short, long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Walk a tree in pre-order with the external iterator
    Iterate {
        /// Tree expression
        tree: Option<String>,
        /// What to print per node (overrides config)
        #[arg(short, long, value_enum)]
        label: Option<LabelMode>,
    },

    /// Show node count, depth, leaves and leaf paths
    Info {
        /// Tree expression
        tree: Option<String>,
    },

    /// Clone prototypes through the factory
    Prototype {
        /// Label of the prototype to clone
        #[arg(long, default_value = "prototype")]
        label: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Print a commented config template
    Template,
    /// Print the global config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_iterate_with_label_when_parsing_then_sets_mode() {
        let cli = Cli::try_parse_from(["dpatterns", "-dd", "iterate", "r(a)", "--label", "render"]).unwrap();
        assert_eq!(cli.debug, 2);
        match cli.command {
            Commands::Iterate { tree, label } => {
                assert_eq!(tree.as_deref(), Some("r(a)"));
                assert_eq!(label, Some(LabelMode::Render));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_unknown_style_when_parsing_then_rejected() {
        assert!(Cli::try_parse_from(["dpatterns", "composite", "--style", "sideways"]).is_err());
    }
}
