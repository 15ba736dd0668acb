//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "referee",
    version,
    about = "No-Limit Hold'em referee: run provider matches and evaluate hands"
)]
pub struct RefereeCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a match between action providers
    Sim {
        /// Number of hands (overrides configuration)
        #[arg(long)]
        hands: Option<u64>,
        /// Table seed (overrides configuration)
        #[arg(long)]
        seed: Option<u64>,
        /// JSONL file receiving one hand record per line
        #[arg(long)]
        output: Option<String>,
        /// Provider for the next seat; repeat once per seat
        #[arg(long = "player")]
        players: Vec<String>,
    },
    /// Evaluate 5 to 7 cards given in 2-character notation
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
