//! Unit tests for theme preference persistence.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::theme::{
    ThemeAction, ThemeArgs, ThemeConfig, apply_theme_action, load_theme, store_theme,
    theme_config_from_layers_for_test,
};
use camino::Utf8PathBuf;
use rstest::rstest;
use wayfinder_core::ThemePreference;

fn config(action: ThemeAction, theme_file: Utf8PathBuf) -> ThemeConfig {
    ThemeConfig { action, theme_file }
}

#[rstest]
fn defaults_to_showing_the_default_file() {
    let config = ThemeConfig::try_from(ThemeArgs::default()).expect("config should build");
    assert_eq!(config.action, ThemeAction::Show);
    assert_eq!(config.theme_file, Utf8PathBuf::from(".wayfinder/theme"));
}

#[rstest]
#[case("show", ThemeAction::Show)]
#[case("Toggle", ThemeAction::Toggle)]
#[case("light", ThemeAction::Set(ThemePreference::Light))]
#[case(" DARK ", ThemeAction::Set(ThemePreference::Dark))]
fn parses_actions(#[case] raw: &str, #[case] expected: ThemeAction) {
    let args = ThemeArgs {
        action: Some(raw.to_owned()),
        theme_file: None,
    };
    let config = ThemeConfig::try_from(args).expect("config should build");
    assert_eq!(config.action, expected);
}

#[rstest]
fn rejects_unknown_actions() {
    let args = ThemeArgs {
        action: Some("sepia".to_owned()),
        theme_file: None,
    };
    let err = ThemeConfig::try_from(args).expect_err("sepia is not an action");
    match err {
        CliError::InvalidThemeAction { value } => assert_eq!(value, "sepia"),
        other => panic!("expected InvalidThemeAction, found {other:?}"),
    }
}

#[rstest]
fn missing_file_reads_as_light() {
    let workspace = Workspace::new();
    let path = workspace.path("nested/theme");
    assert_eq!(load_theme(&path).expect("default"), ThemePreference::Light);
}

#[rstest]
fn stored_theme_round_trips() {
    let workspace = Workspace::new();
    let path = workspace.path("nested/theme");
    store_theme(&path, ThemePreference::Dark).expect("store theme");
    assert_eq!(load_theme(&path).expect("load theme"), ThemePreference::Dark);
}

#[rstest]
fn corrupt_file_is_reported() {
    let workspace = Workspace::new();
    let path = workspace.path("theme");
    write_utf8(&path, b"purple\n");
    match load_theme(&path) {
        Err(CliError::ParseTheme { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ParseTheme, found {other:?}"),
    }
}

#[rstest]
fn show_does_not_create_the_file() {
    let workspace = Workspace::new();
    let path = workspace.path("theme");
    let preference =
        apply_theme_action(&config(ThemeAction::Show, path.clone())).expect("show theme");
    assert_eq!(preference, ThemePreference::Light);
    assert!(!path.exists());
}

#[rstest]
fn toggle_flips_the_stored_value() {
    let workspace = Workspace::new();
    let path = workspace.path("theme");
    let toggle = config(ThemeAction::Toggle, path.clone());
    assert_eq!(
        apply_theme_action(&toggle).expect("first toggle"),
        ThemePreference::Dark
    );
    assert_eq!(
        apply_theme_action(&toggle).expect("second toggle"),
        ThemePreference::Light
    );
    assert_eq!(load_theme(&path).expect("load theme"), ThemePreference::Light);
}

#[rstest]
fn theme_file_can_come_from_configuration_layers() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "theme_file": "from-file/theme" }), None);
    composer.push_environment(json!({ "theme_file": "from-env/theme" }));
    composer.push_cli(json!({ "action": "dark" }));

    let config =
        theme_config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.theme_file, Utf8PathBuf::from("from-env/theme"));
    assert_eq!(config.action, ThemeAction::Set(ThemePreference::Dark));
}

#[rstest]
fn theme_file_may_sit_above_a_subdirectory() {
    let workspace = Workspace::new();
    std::fs::create_dir(workspace.path("work")).expect("create work dir");
    let path = workspace.path("work/../theme");
    let set_dark = config(ThemeAction::Set(ThemePreference::Dark), path.clone());

    assert_eq!(
        apply_theme_action(&set_dark).expect("store above subdirectory"),
        ThemePreference::Dark
    );
    assert_eq!(
        load_theme(&workspace.path("theme")).expect("load theme"),
        ThemePreference::Dark
    );
}
