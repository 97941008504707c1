use holdem_cli::commands::sim::run_simulation;
use holdem_cli::config::{BOT_DELAY_ENV, BOT_ENV, CONFIG_ENV, SEED_ENV, STACK_ENV};
use holdem_cli::{exit_code, run};
use holdem_engine::config::TableConfig;
use serial_test::serial;

fn clear_env() {
    for key in [CONFIG_ENV, SEED_ENV, STACK_ENV, BOT_ENV, BOT_DELAY_ENV] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn sim(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["holdem", "sim"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn sim_reports_each_seat_and_conservation() {
    clear_env();
    let (code, stdout, _) = sim(&[
        "--hands", "30", "--seed", "9", "--bot-a", "random", "--bot-b", "strength",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("sim: hands=30 seed=9 bots=random vs strength"));
    assert!(stdout.contains("Bot A (random):"));
    assert!(stdout.contains("Bot B (strength):"));
    assert!(stdout.contains("Chip conservation: ok"));
}

#[test]
#[serial]
fn sim_output_is_reproducible_with_a_seed() {
    clear_env();
    let args = ["--hands", "40", "--seed", "21"];
    let (_, first, _) = sim(&args);
    let (_, second, _) = sim(&args);
    assert_eq!(first, second);
}

#[test]
#[serial]
fn sim_defaults_to_the_configured_bot() {
    clear_env();
    unsafe {
        std::env::set_var(BOT_ENV, "strength");
    }
    let (code, stdout, _) = sim(&["--hands", "5", "--seed", "2"]);
    clear_env();
    assert_eq!(code, 0);
    assert!(stdout.contains("bots=strength vs strength"));
}

#[test]
#[serial]
fn sim_rejects_unknown_policy() {
    clear_env();
    let (code, _, stderr) = sim(&["--hands", "5", "--bot-a", "psychic"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(stderr.contains("unknown bot 'psychic'"));
}

#[test]
fn short_stacks_stop_before_the_hand_limit() {
    let table = TableConfig {
        starting_stack: 40,
        ..TableConfig::default()
    };
    let report = run_simulation(10_000, 4, "random", "random", table).unwrap();
    assert!(report.hands_played < 10_000);
    let chips: Vec<u32> = report.seats.iter().map(|s| s.chips).collect();
    assert_eq!(chips.iter().sum::<u32>(), 80);
    assert!(chips.contains(&0));
}
