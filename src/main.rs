use std::process::ExitCode;
use std::sync::Arc;
use anyhow::Result;
use clap::Parser;
use tracing::info;

use review_guard::cli::{Cli, OutputFormat};
use review_guard::config::Settings;
use review_guard::render::{progress, Painter, Presenter};
use review_guard::utils::{init_logging, run_timestamp};
use review_guard::{HttpAnalysisClient, UploadController, UploadState};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_logging();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply(&mut settings);

    let color = settings.display.color;
    let presenter = Presenter::new(Painter::new(color), settings.display.bar_width);
    let stderr_painter = Painter::for_stderr(color);
    let diagnostics = Presenter::new(stderr_painter, settings.display.bar_width);
    console::set_colors_enabled_stderr(stderr_painter.enabled());

    let client = HttpAnalysisClient::new(&settings.analysis)?;
    info!(
        started_at = %run_timestamp(),
        endpoint = %client.endpoint(),
        file = ?cli.file,
        "Starting review analysis"
    );
    let controller = Arc::new(UploadController::new(Arc::new(client)));

    if let Some(file) = &cli.file {
        controller.select_file(file);
    }

    let text_output = cli.format == OutputFormat::Text;
    if text_output {
        println!("{}", presenter.title());
    }

    let spinner = text_output.then(|| tokio::spawn(progress::track(controller.subscribe())));

    let cancel_on_interrupt = tokio::spawn({
        let controller = controller.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                controller.cancel();
            }
        }
    });

    let outcome = controller.upload().await;
    cancel_on_interrupt.abort();
    if let Some(spinner) = spinner {
        // Settled state is already published, so the spinner clears itself.
        let _ = spinner.await;
    }

    match outcome {
        Ok(result) => {
            match cli.format {
                OutputFormat::Text => println!("{}", presenter.state(&UploadState::Succeeded(result))),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", diagnostics.error(&error));
            Ok(ExitCode::FAILURE)
        }
    }
}
