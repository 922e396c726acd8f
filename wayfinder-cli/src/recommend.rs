//! Recommend command implementation for the Wayfinder CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use wayfinder_core::{PointSet, Recommendation, compute_recommendation};
use wayfinder_fs::open_utf8_file;

use crate::{
    ARG_RECOMMEND_FORMAT, ARG_RECOMMEND_POINTS, ARG_RECOMMEND_TOP, CliError, ENV_RECOMMEND_POINTS,
};

const DEFAULT_TOP: usize = 3;

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the pathfinding algorithm catalogue for a set of map \
                 points. The points are read from a JSON array of \
                 {\"lat\": .., \"lng\": ..} objects. Scores come from an \
                 illustrative heuristic, not from running the algorithms.",
    about = "Recommend an algorithm for a point set"
)]
#[ortho_config(prefix = "WAYFINDER")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the points in click order.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) points_path: Option<Utf8PathBuf>,
    /// Number of ranked algorithms to print (defaults to 3).
    #[arg(long = ARG_RECOMMEND_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Output format: "text" (default) or "json".
    #[arg(long = ARG_RECOMMEND_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// How a recommendation is rendered on standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum OutputFormat {
    /// Human-readable ranking panel.
    #[default]
    Text,
    /// The full recommendation as pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, CliError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::InvalidFormat {
                value: value.to_owned(),
            }),
        }
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON point file.
    pub(crate) points_path: Utf8PathBuf,
    /// How many ranked entries to print in text mode.
    pub(crate) top: usize,
    /// Output rendering.
    pub(crate) format: OutputFormat,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.points_path, ARG_RECOMMEND_POINTS)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match wayfinder_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let points_path = args.points_path.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_POINTS,
            env: ENV_RECOMMEND_POINTS,
        })?;

        let top = args.top.unwrap_or(DEFAULT_TOP);
        if top == 0 {
            return Err(CliError::InvalidTop {
                field: ARG_RECOMMEND_TOP,
            });
        }

        let format = args
            .format
            .as_deref()
            .map(OutputFormat::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            points_path,
            top,
            format,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let points = load_points(&config.points_path)?;
    let recommendation = compute_recommendation(points.as_slice())?;
    log::info!(
        "recommended {} for {} points",
        recommendation
            .recommended()
            .map_or("nothing", |entry| entry.descriptor.name),
        points.len()
    );
    match config.format {
        OutputFormat::Text => write_text(writer, &recommendation, config.top),
        OutputFormat::Json => write_json(writer, &recommendation),
    }
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`PointSet`] from disk.
pub(super) fn load_points(path: &Utf8Path) -> Result<PointSet, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::ReadPoints {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePoints {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders the ranking panel shown to people reading a terminal.
pub(super) fn render_text(recommendation: &Recommendation, top: usize) -> String {
    let mut lines = vec!["Algorithm suitability (illustrative heuristic):".to_owned()];
    for (rank, entry) in recommendation.top(top).iter().enumerate() {
        let marker = if rank == 0 { "  [recommended]" } else { "" };
        lines.push(format!(
            "  {}. {} ({}) {}/100{marker}",
            rank + 1,
            entry.descriptor.name,
            entry.descriptor.complexity,
            entry.score,
        ));
    }
    lines.push(String::new());
    lines.push(recommendation.top_explanation.to_owned());
    lines.push(format!(
        "Total path length: {}",
        recommendation.formatted_distance()
    ));
    lines.push(
        "Note: scores are an educational estimate; no algorithm was executed.".to_owned(),
    );
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn write_text(
    writer: &mut dyn Write,
    recommendation: &Recommendation,
    top: usize,
) -> Result<(), CliError> {
    writer
        .write_all(render_text(recommendation, top).as_bytes())
        .map_err(CliError::WriteOutput)
}

fn write_json(writer: &mut dyn Write, recommendation: &Recommendation) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(recommendation).map_err(CliError::SerialiseRecommendation)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
