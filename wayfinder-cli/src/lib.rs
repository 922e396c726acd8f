//! Command-line interface for the Wayfinder route advisor.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;
mod theme;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};
use theme::{ThemeArgs, run_theme};

pub(crate) const ARG_RECOMMEND_POINTS: &str = "points-path";
pub(crate) const ARG_RECOMMEND_TOP: &str = "top";
pub(crate) const ARG_RECOMMEND_FORMAT: &str = "format";
pub(crate) const ENV_RECOMMEND_POINTS: &str = "WAYFINDER_CMDS_RECOMMEND_POINTS_PATH";
pub(crate) const ARG_THEME_FILE: &str = "theme-file";

/// Run the Wayfinder CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, input
/// loading, the recommendation, or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Theme(args) => run_theme(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfinder",
    about = "Illustrative pathfinding-algorithm recommendations for map points",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the algorithm catalogue for a JSON point set.
    Recommend(RecommendArgs),
    /// Show or change the stored light/dark preference.
    Theme(ThemeArgs),
}

#[cfg(test)]
mod tests;
