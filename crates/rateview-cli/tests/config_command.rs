//! Configuration Tests
//!
//! Verifies that config.toml is optional, that `config init` creates it
//! once, and that file settings apply unless a flag overrides them.

use anyhow::Result;
use assert_cmd::Command;
use chrono::TimeDelta;
use predicates::prelude::*;
use rateview_core::{Config, DisplayConfig, LogConfig, RelativeStyle};
use rateview_testing::TestWorld;
use rateview_testing::fixtures::{REFERENCE_NOW, timestamp_before};

#[test]
fn test_show_defaults_without_file() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "show"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("style = \"long\""));
    assert!(result.stdout().contains("level = \"warn\""));
    assert!(!world.config_path().exists(), "show must not create the file");
    Ok(())
}

#[test]
fn test_init_creates_file_once() -> Result<()> {
    let world = TestWorld::new().json();

    let first = world.run(&["config", "init"])?.json()?;
    assert_eq!(first["created"], true);
    assert!(world.config_path().exists());

    let second = world.run(&["config", "init"])?.json()?;
    assert_eq!(second["created"], false);

    assert_eq!(Config::load(world.data_dir())?, Config::default());
    Ok(())
}

#[test]
fn test_config_style_applies() -> Result<()> {
    let world = TestWorld::new();
    world.write_config(&Config {
        display: DisplayConfig {
            style: RelativeStyle::Short,
        },
        log: LogConfig::default(),
    })?;
    let raw = timestamp_before(TimeDelta::days(2));

    let result = world.run(&["present", &raw, "--interactive", "--now", REFERENCE_NOW])?;
    assert_eq!(result.stdout().trim_end(), "2d ago");

    let result = world.run(&[
        "present",
        &raw,
        "--interactive",
        "--now",
        REFERENCE_NOW,
        "--style",
        "long",
    ])?;
    assert_eq!(result.stdout().trim_end(), "2 days ago");
    Ok(())
}

#[test]
fn test_config_log_level_applies() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_config("[log]\nlevel = \"error\"\n")?;

    let result = world.run(&["present", "not-a-date", "--interactive"])?;

    assert!(result.success());
    assert!(result.stderr().is_empty(), "stderr: {}", result.stderr());
    Ok(())
}

#[test]
fn test_malformed_config_is_an_error() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_config("[display]\nstyle = \"loud\"\n")?;

    let result = world.run(&["present", REFERENCE_NOW])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Configuration error"), "stderr: {}", result.stderr());
    Ok(())
}

#[test]
#[allow(deprecated)]
fn test_data_dir_from_environment() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_config("[display]\nstyle = \"short\"\n")?;
    let raw = timestamp_before(TimeDelta::minutes(5));

    Command::cargo_bin("rateview")
        .unwrap()
        .env("RATEVIEW_PATH", world.data_dir())
        .args(["present", raw.as_str(), "--interactive", "--now", REFERENCE_NOW])
        .assert()
        .success()
        .stdout(predicate::str::diff("5m ago\n"));

    Ok(())
}

#[test]
#[allow(deprecated)]
fn test_help_lists_commands() -> Result<()> {
    Command::cargo_bin("rateview")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("present")
                .and(predicate::str::contains("observe"))
                .and(predicate::str::contains("config")),
        );

    Ok(())
}
