use anyhow::Result;
use clap::Parser;
use food_delivery_cli::{
    cli::{args::Args, commands::CliApp},
    utils::Config,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    let filter = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    tracing::info!("🍔 Food Delivery CLI starting...");
    tracing::info!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let app = CliApp::new(config)?;
    app.run(args)?;

    tracing::info!("🍔 Food Delivery CLI stopped");
    Ok(())
}
