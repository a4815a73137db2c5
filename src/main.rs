use clap::Parser;
use intrinsic_sim::cli::{execute_scenarios, Cli, Commands};
use intrinsic_sim::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let (config, load_error) = match Config::load(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (Config::example()?, Some(e)),
    };

    // Initialize telemetry
    intrinsic_sim::telemetry::init_telemetry(&config.telemetry)?;

    if let Some(e) = load_error {
        tracing::warn!(
            path = %cli.config,
            error = %e,
            "Could not load config, using bundled example"
        );
    }

    let format = cli.format;
    match cli.command {
        Commands::Evaluate(args) => args.execute(&config, format)?,
        Commands::Scenarios => execute_scenarios(&config, format)?,
        Commands::Score(args) => args.execute(&config, format)?,
        Commands::Sparkline(args) => args.execute(&config, format)?,
        Commands::Forecast(args) => args.execute(&config, format)?,
        Commands::Sensitivity(args) => args.execute(&config, format)?,
        Commands::Quote(args) => args.execute(format)?,
        Commands::Series(args) => args.execute(format)?,
    }

    Ok(())
}
