//! CLI entrypoint for tidyquote
//!
//! Wires the layers together: configuration in, a page controller over the
//! validated data, and either a one-shot dispatch or the interactive
//! session on top.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::{Arc, Mutex};
use tidyquote_application::{PageController, PageEvent};
use tidyquote_infrastructure::ConfigLoader;
use tidyquote_presentation::{Cli, ConsolePage, EffectScheduler, PageRepl};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Keep the appender guard alive for the process lifetime.
    let mut _log_guard: Option<tracing_appender::non_blocking::WorkerGuard> = None;
    if let Some(path) = &cli.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        _log_guard = Some(guard);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    info!("Starting tidyquote");

    if cli.show_config_sources {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load and validate configuration, then build the controller over it.
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("loading configuration")?
    };

    let rates = config.rate_table().context("validating [rates]")?;
    let panels = config.panel_catalog().context("validating [panels]")?;
    let timings = config.ui_timings();

    let mut controller =
        PageController::new(rates, panels, timings).context("initializing page controller")?;

    if cli.is_one_shot() {
        // One-shot mode: apply everything inline (there is no event loop
        // for a deferred render to land in) and print the final surface.
        let page = Arc::new(Mutex::new(ConsolePage::new()));
        let scheduler = EffectScheduler::new(page.clone());

        scheduler.apply_all_immediately(controller.initial_instructions()?);

        if let Some(tab) = &cli.tab {
            scheduler.apply_all_immediately(controller.dispatch(PageEvent::TabActivated {
                service_label: tab.clone(),
            })?);
        }
        if let Some(area) = &cli.quote {
            scheduler.apply_all_immediately(controller.dispatch(PageEvent::QuoteRequested {
                area_input: area.clone(),
            })?);
        }
        if let Some(book) = &cli.book {
            if let [name, email] = &book[..] {
                scheduler.apply_all_immediately(controller.dispatch(
                    PageEvent::BookingSubmitted {
                        name: name.clone(),
                        email: email.clone(),
                    },
                )?);
            }
        }

        if let Ok(page) = page.lock() {
            print!("{}", page.render());
        }
        return Ok(());
    }

    let mut repl = PageRepl::new(controller);
    repl.run().await.context("interactive session")?;

    Ok(())
}
