use anyhow::Result;
use clap::Parser;
use encomendas::app::App;
use encomendas::cli::{init_logging, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing for logging
    init_logging(&cli.log_path(), cli.debug)?;

    let config = cli.load_config()?;
    if cli.run_one_shot(&config)? {
        return Ok(());
    }

    // Create and run the application
    let mut app = App::new(&config)?;
    app.run().await?;

    Ok(())
}
