use actionq::utils::logger;
use actionq::{App, CliConfig, ReaderInput};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose || config.debug);

    tracing::info!("Starting actionq console loop");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let input = ReaderInput::stdin();
    let mut app = App::new_with_debug(input, std::io::stdout(), config.debug);

    if let Err(e) = app.run_loop() {
        tracing::error!("❌ Loop terminated with error: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("Loop finished, exiting");
    Ok(())
}
