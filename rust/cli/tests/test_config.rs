use holdem_cli::config::{
    self, BOT_DELAY_ENV, BOT_ENV, CONFIG_ENV, DEFAULT_BOT_DELAY_MS, Overrides, SEED_ENV,
    STACK_ENV, ValueSource,
};
use holdem_cli::{exit_code, run};
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

fn clear_env() {
    for key in [CONFIG_ENV, SEED_ENV, STACK_ENV, BOT_ENV, BOT_DELAY_ENV] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn cfg_json() -> (i32, Value) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["holdem", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(Value::Null);
    (code, json)
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, json) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["starting_stack"]["value"], 1000);
    assert_eq!(json["starting_stack"]["source"], "default");
    assert_eq!(json["small_blind"]["value"], 10);
    assert_eq!(json["big_blind"]["value"], 20);
    assert_eq!(json["seed"]["value"], Value::Null);
    assert_eq!(json["bot"]["value"], "random");
    assert_eq!(json["bot_delay_ms"]["value"], DEFAULT_BOT_DELAY_MS);
}

#[test]
#[serial]
fn file_values_are_reported_with_their_source() {
    clear_env();
    let file = config_file("starting_stack = 2000\nsmall_blind = 25\nbig_blind = 50\nbot = \"strength\"\n");
    unsafe {
        std::env::set_var(CONFIG_ENV, file.path());
    }
    let (code, json) = cfg_json();
    clear_env();
    assert_eq!(code, 0);
    assert_eq!(json["starting_stack"]["value"], 2000);
    assert_eq!(json["starting_stack"]["source"], "file");
    assert_eq!(json["big_blind"]["value"], 50);
    assert_eq!(json["bot"]["value"], "strength");
    assert_eq!(json["seed"]["source"], "default");
}

#[test]
#[serial]
fn precedence_is_cli_over_env_over_file() {
    clear_env();
    let file = config_file("seed = 1\nbot = \"strength\"\nbot_delay_ms = 10\n");
    unsafe {
        std::env::set_var(CONFIG_ENV, file.path());
        std::env::set_var(SEED_ENV, "2");
        std::env::set_var(BOT_ENV, "random");
    }
    let overrides = Overrides {
        seed: Some(3),
        ..Overrides::default()
    };
    let resolved = config::load_with_overrides(&overrides);
    clear_env();
    let resolved = resolved.unwrap();

    assert_eq!(resolved.config.seed, Some(3));
    assert_eq!(resolved.sources.seed, ValueSource::Cli);
    assert_eq!(resolved.config.bot, "random");
    assert_eq!(resolved.sources.bot, ValueSource::Env);
    assert_eq!(resolved.config.bot_delay_ms, 10);
    assert_eq!(resolved.sources.bot_delay_ms, ValueSource::File);
    assert_eq!(resolved.sources.starting_stack, ValueSource::Default);
}

#[test]
#[serial]
fn invalid_blinds_fail_validation() {
    clear_env();
    let file = config_file("small_blind = 50\nbig_blind = 20\n");
    unsafe {
        std::env::set_var(CONFIG_ENV, file.path());
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["holdem", "cfg"], &mut out, &mut err);
    clear_env();
    assert_eq!(code, exit_code::ERROR);
    assert!(String::from_utf8(err).unwrap().contains("big_blind"));
}

#[test]
#[serial]
fn malformed_env_value_is_rejected() {
    clear_env();
    unsafe {
        std::env::set_var(STACK_ENV, "lots");
    }
    let result = config::load_with_sources();
    clear_env();
    let err = result.unwrap_err();
    assert!(err.to_string().contains(STACK_ENV));
}

#[test]
#[serial]
fn unreadable_config_file_is_an_error() {
    clear_env();
    unsafe {
        std::env::set_var(CONFIG_ENV, "/nonexistent/holdem.toml");
    }
    let result = config::load_with_sources();
    clear_env();
    assert!(matches!(result, Err(config::ConfigError::Io(_))));
}
