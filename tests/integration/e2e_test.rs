//! End-to-end integration tests

use clap::Parser;
use intrinsic_sim::cli::{execute_scenarios, Cli, Commands, OutputFormat};
use intrinsic_sim::config::Config;
use intrinsic_sim::valuation::{ScenarioPreset, ValuationEngine};

#[test]
fn test_example_config_drives_engine() {
    let config = Config::example().unwrap();
    assert!(config.valuation.validate().is_ok());

    let engine = ValuationEngine::new();
    let base = engine.evaluate(&config.valuation);
    let bull = engine.evaluate(&ScenarioPreset::Bull.apply(&config.valuation));
    assert!(base.intrinsic_value <= bull.intrinsic_value);
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, intrinsic_sim::config::EXAMPLE_CONFIG).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.forecast.horizons, vec![1, 3, 5, 10]);
    assert_eq!(config.sensitivity.horizon_years, 5);
}

#[test]
fn test_commands_execute_against_example_config() {
    let config = Config::example().unwrap();
    let invocations: [&[&str]; 8] = [
        &["intrinsic-sim", "evaluate", "--preset", "bear"],
        &["intrinsic-sim", "score", "--style", "aggressive"],
        &["intrinsic-sim", "sparkline", "intrinsic"],
        &["intrinsic-sim", "forecast", "--horizons", "2,7"],
        &["intrinsic-sim", "sensitivity", "grid", "--horizon", "3"],
        &["intrinsic-sim", "sensitivity", "sweep", "driver:1"],
        &["intrinsic-sim", "quote", "AAPL", "-f", "json"],
        &["intrinsic-sim", "series", "AAPL", "--range", "1W"],
    ];

    for args in invocations {
        let cli = Cli::try_parse_from(args).unwrap();
        let result = match cli.command {
            Commands::Evaluate(a) => a.execute(&config, cli.format),
            Commands::Score(a) => a.execute(&config, cli.format),
            Commands::Sparkline(a) => a.execute(&config, cli.format),
            Commands::Forecast(a) => a.execute(&config, cli.format),
            Commands::Sensitivity(a) => a.execute(&config, cli.format),
            Commands::Quote(a) => a.execute(cli.format),
            Commands::Series(a) => a.execute(cli.format),
            Commands::Scenarios => execute_scenarios(&config, cli.format),
        };
        assert!(result.is_ok(), "{args:?} failed");
    }

    assert!(execute_scenarios(&config, OutputFormat::Json).is_ok());
}
