use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("thesis error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let config = bootstrap::load_config(&flags)?;
    init_tracing(&flags, config.logging.filter.as_deref())?;
    ui::init(&flags);

    let ctx = context::AppContext::init(config).await?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// `THESIS_LOG` wins; otherwise the flags, then the configured filter, then `warn`.
fn default_directive<'a>(quiet: bool, verbose: bool, configured: Option<&'a str>) -> &'a str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured.unwrap_or("warn")
    }
}

fn init_tracing(flags: &cli::GlobalFlags, configured: Option<&str>) -> anyhow::Result<()> {
    let level = default_directive(flags.quiet, flags.verbose, configured);

    let filter = tracing_subscriber::EnvFilter::try_from_env("THESIS_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .map_err(|error| anyhow::anyhow!("invalid log filter '{level}': {error}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::default_directive;

    #[test]
    fn quiet_beats_everything() {
        assert_eq!(default_directive(true, true, Some("info")), "error");
    }

    #[test]
    fn verbose_beats_config() {
        assert_eq!(default_directive(false, true, Some("info")), "debug");
    }

    #[test]
    fn config_then_warn() {
        assert_eq!(default_directive(false, false, Some("thesis_db=info")), "thesis_db=info");
        assert_eq!(default_directive(false, false, None), "warn");
    }
}
