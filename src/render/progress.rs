//! Loading spinner shown while an upload is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::sync::watch;

use crate::services::UploadState;

pub const PROCESSING: &str = "Processing...";

pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Draws on stderr; indicatif hides it when stderr is not a terminal.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    pub fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }
}

/// Follows controller state until the upload settles.
///
/// The spinner runs while `Processing` is current and is cleared as soon as a
/// result or error replaces it. Returns whether a spinner was shown at all.
pub async fn track(mut states: watch::Receiver<UploadState>) -> bool {
    let mut spinner: Option<Spinner> = None;
    let mut shown = false;

    while states.changed().await.is_ok() {
        let loading = states.borrow_and_update().is_loading();
        if loading {
            if spinner.is_none() {
                spinner = Some(Spinner::new(PROCESSING));
                shown = true;
            }
            continue;
        }

        let settled = !matches!(
            *states.borrow(),
            UploadState::Idle | UploadState::FileSelected
        );
        if let Some(spinner) = spinner.take() {
            spinner.finish_clear();
        }
        if settled {
            break;
        }
    }

    if let Some(spinner) = spinner {
        spinner.finish_clear();
    }
    shown
}
