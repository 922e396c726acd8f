//! Theme command implementation for the Wayfinder CLI.
//!
//! The preference is a single word (`light` or `dark`) stored in a UTF-8
//! text file. A missing file reads as the default light theme.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Write};
use wayfinder_core::ThemePreference;
use wayfinder_fs::{read_utf8_file, write_utf8_file};

use crate::{ARG_THEME_FILE, CliError};

const DEFAULT_THEME_FILE: &str = ".wayfinder/theme";

/// CLI arguments for the `theme` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Show or change the light/dark preference")]
#[ortho_config(prefix = "WAYFINDER")]
pub(crate) struct ThemeArgs {
    /// One of "show" (default), "toggle", "light" or "dark".
    #[arg(value_name = "action")]
    #[serde(default)]
    pub(crate) action: Option<String>,
    /// File holding the stored preference.
    #[arg(long = ARG_THEME_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) theme_file: Option<Utf8PathBuf>,
}

/// What the `theme` command does with the stored preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ThemeAction {
    #[default]
    Show,
    Toggle,
    Set(ThemePreference),
}

impl ThemeAction {
    fn parse(value: &str) -> Result<Self, CliError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "show" => Ok(Self::Show),
            "toggle" => Ok(Self::Toggle),
            other => other
                .parse::<ThemePreference>()
                .map(Self::Set)
                .map_err(|_| CliError::InvalidThemeAction {
                    value: value.to_owned(),
                }),
        }
    }
}

/// Resolved `theme` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ThemeConfig {
    pub(crate) action: ThemeAction,
    pub(crate) theme_file: Utf8PathBuf,
}

impl TryFrom<ThemeArgs> for ThemeConfig {
    type Error = CliError;

    fn try_from(args: ThemeArgs) -> Result<Self, Self::Error> {
        let action = args
            .action
            .as_deref()
            .map(ThemeAction::parse)
            .transpose()?
            .unwrap_or_default();
        let theme_file = args
            .theme_file
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_THEME_FILE));
        Ok(Self { action, theme_file })
    }
}

pub(super) fn run_theme(args: ThemeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_theme_with(args, &mut stdout)
}

pub(super) fn run_theme_with(args: ThemeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = ThemeConfig::try_from(merged)?;
    let preference = apply_theme_action(&config)?;
    writeln!(writer, "{preference}").map_err(CliError::WriteOutput)
}

/// Applies `config.action` and returns the preference now in effect.
pub(super) fn apply_theme_action(config: &ThemeConfig) -> Result<ThemePreference, CliError> {
    let current = load_theme(&config.theme_file)?;
    let next = match config.action {
        ThemeAction::Show => return Ok(current),
        ThemeAction::Toggle => current.toggled(),
        ThemeAction::Set(preference) => preference,
    };
    store_theme(&config.theme_file, next)?;
    log::info!("theme preference changed from {current} to {next}");
    Ok(next)
}

/// Reads the stored preference, treating a missing file as the default.
pub(super) fn load_theme(path: &Utf8Path) -> Result<ThemePreference, CliError> {
    match read_utf8_file(path) {
        Ok(contents) => contents
            .parse()
            .map_err(|source| CliError::ParseTheme {
                path: path.to_path_buf(),
                source,
            }),
        Err(source) if source.kind() == ErrorKind::NotFound => {
            log::debug!("no theme file at {path}; using the default");
            Ok(ThemePreference::default())
        }
        Err(source) => Err(CliError::ReadTheme {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Persists `preference`, creating parent directories as needed.
pub(super) fn store_theme(path: &Utf8Path, preference: ThemePreference) -> Result<(), CliError> {
    write_utf8_file(path, &format!("{preference}\n")).map_err(|source| CliError::WriteTheme {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn theme_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ThemeConfig, CliError> {
    let merged = ThemeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ThemeConfig::try_from(merged)
}
