//! Command handler modules for the referee CLI.
//!
//! Each handler takes its parsed arguments plus the output streams
//! (`&mut dyn Write`) and reports failure as [`CliError`](crate::CliError).

pub mod cfg;
pub mod eval;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use sim::handle_sim_command;
