use clap::Parser;
use storefront::AppError;
use storefront::app::{ApplicationLifecycle, ErrorBoundary, StartupOptions, dispatch};
use storefront::cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let options = StartupOptions {
        config_path: cli.config.as_deref(),
        ephemeral: cli.ephemeral,
        color: !cli.no_color,
    };
    let ctx = match ApplicationLifecycle::initialize(&options) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    match dispatch(&ctx, cli.command).await {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        // Bad input is reported as is; anything else goes through the boundary
        Err(e @ AppError::Theme(_)) => {
            log::warn!("Command rejected: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprint!("{}", ErrorBoundary::new(options.color).catch("dispatch", &e, None));
            std::process::exit(1);
        }
    }
}
