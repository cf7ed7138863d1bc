use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::clients::AnalysisClient;
use crate::error::{Error, Result};
use crate::intake::SelectedFile;
use crate::models::AnalysisResult;
use crate::validator::validate;

/// Where one controller is in its read → validate → analyze cycle.
#[derive(Debug, Clone)]
pub enum UploadState {
    Idle,
    FileSelected,
    Processing,
    Succeeded(AnalysisResult),
    Failed(Arc<Error>),
}

impl UploadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UploadState::Processing)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            UploadState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            UploadState::Failed(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

/// Drives uploads for one file selection.
///
/// At most one upload is in flight at a time; a second `upload()` while one is
/// running is rejected rather than queued. State changes are published on a
/// watch channel so a presenter can follow along.
pub struct UploadController {
    client: Arc<dyn AnalysisClient>,
    file: Mutex<Option<SelectedFile>>,
    state: watch::Sender<UploadState>,
    cancel: Mutex<Option<CancellationToken>>,
}

impl UploadController {
    pub fn new(client: Arc<dyn AnalysisClient>) -> Self {
        let (state, _) = watch::channel(UploadState::Idle);
        Self {
            client,
            file: Mutex::new(None),
            state,
            cancel: Mutex::new(None),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<UploadState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> UploadState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn select_file(&self, path: impl Into<PathBuf>) {
        let file = SelectedFile::new(path);
        debug!(path = %file.path().display(), "File selected");
        *lock(&self.file) = Some(file);

        self.state.send_if_modified(|state| match state {
            UploadState::Idle => {
                *state = UploadState::FileSelected;
                true
            }
            _ => false,
        });
    }

    pub fn clear_file(&self) {
        *lock(&self.file) = None;

        self.state.send_if_modified(|state| match state {
            UploadState::FileSelected => {
                *state = UploadState::Idle;
                true
            }
            _ => false,
        });
    }

    pub fn selected_file(&self) -> Option<PathBuf> {
        lock(&self.file).as_ref().map(|file| file.path().to_path_buf())
    }

    /// Aborts the in-flight upload, if any. Returns whether there was one.
    pub fn cancel(&self) -> bool {
        match lock(&self.cancel).as_ref() {
            Some(token) => {
                info!("Cancelling in-flight upload");
                token.cancel();
                true
            }
            None => false,
        }
    }

    pub async fn upload(&self) -> std::result::Result<AnalysisResult, Arc<Error>> {
        let file = lock(&self.file).clone();
        let has_file = file.is_some();
        let token = CancellationToken::new();
        let no_file = Arc::new(Error::NoFileSelected);

        let started = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = if has_file {
                *lock(&self.cancel) = Some(token.clone());
                UploadState::Processing
            } else {
                UploadState::Failed(no_file.clone())
            };
            true
        });

        if !started {
            warn!("Upload requested while another is in flight");
            return Err(Arc::new(Error::UploadInProgress));
        }

        let Some(file) = file else {
            error!(error = %no_file, "Error processing file");
            return Err(no_file);
        };

        let flight = Flight {
            controller: self,
            settled: false,
        };

        let outcome = tokio::select! {
            biased;
            _ = token.cancelled() => Err(Error::Cancelled),
            outcome = self.run(&file) => outcome,
        };

        flight.settle(outcome)
    }

    async fn run(&self, file: &SelectedFile) -> Result<AnalysisResult> {
        let text = file.read_text().await?;
        let reviews = validate(&text)?;

        info!(
            path = %file.path().display(),
            review_count = reviews.len(),
            "Submitting reviews for analysis"
        );

        Ok(self.client.analyze(&reviews).await?)
    }

    fn finish(&self, outcome: Result<AnalysisResult>) -> std::result::Result<AnalysisResult, Arc<Error>> {
        *lock(&self.cancel) = None;

        match outcome {
            Ok(result) => {
                info!(
                    total_reviews = result.total_reviews,
                    fake_reviews = result.fake_reviews,
                    fake_percentage = result.fake_percentage,
                    product_status = %result.product_status,
                    "Analysis completed"
                );
                self.state.send_replace(UploadState::Succeeded(result.clone()));
                Ok(result)
            }
            Err(e) => {
                let e = Arc::new(e);
                error!(error = %e, kind = ?e.kind(), "Error processing file");
                self.state.send_replace(UploadState::Failed(e.clone()));
                Err(e)
            }
        }
    }
}

/// Leaves `Processing` even when the upload future is dropped mid-flight.
struct Flight<'a> {
    controller: &'a UploadController,
    settled: bool,
}

impl Flight<'_> {
    fn settle(mut self, outcome: Result<AnalysisResult>) -> std::result::Result<AnalysisResult, Arc<Error>> {
        self.settled = true;
        self.controller.finish(outcome)
    }
}

impl Drop for Flight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let _ = self.controller.finish(Err(Error::Cancelled));
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
