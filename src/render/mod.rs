//! Terminal presentation of upload state and analysis results.

mod colors;
pub mod progress;

pub use colors::{ColorMode, Painter};
pub use progress::Spinner;

use crate::error::{Error, ErrorKind};
use crate::models::AnalysisResult;
use crate::services::UploadState;

pub const TITLE: &str = "Fake Product Review Detection System";

const FILLED: char = '█';
const EMPTY: char = '░';

/// Color band for a fake percentage. Boundaries belong to the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    Green,
    Yellow,
    Red,
}

impl StatusTier {
    pub fn from_percentage(fake_percentage: f64) -> Self {
        if fake_percentage >= 50.0 {
            StatusTier::Red
        } else if fake_percentage >= 25.0 {
            StatusTier::Yellow
        } else {
            StatusTier::Green
        }
    }

    fn paint(self, painter: &Painter, s: &str) -> String {
        match self {
            StatusTier::Red => painter.red(s),
            StatusTier::Yellow => painter.yellow(s),
            StatusTier::Green => painter.green(s),
        }
    }
}

/// Display-ready projection of an [`AnalysisResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub total_line: String,
    pub fake_line: String,
    pub percentage_line: String,
    pub status_text: String,
    pub tier: StatusTier,
    /// Bar fill in percent of the full width, as reported by the service.
    pub bar_width: f64,
}

impl From<&AnalysisResult> for ResultView {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            total_line: format!("Total Reviews: {}", result.total_reviews),
            fake_line: format!("Fake Reviews: {}", result.fake_reviews),
            percentage_line: format!("Fake Percentage: {:.2}%", result.fake_percentage),
            status_text: result.product_status.clone(),
            tier: StatusTier::from_percentage(result.fake_percentage),
            bar_width: result.fake_percentage,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Presenter {
    painter: Painter,
    bar_cells: usize,
}

impl Presenter {
    pub fn new(painter: Painter, bar_cells: usize) -> Self {
        Self {
            painter,
            bar_cells: bar_cells.max(1),
        }
    }

    pub fn title(&self) -> String {
        self.painter.header(TITLE)
    }

    pub fn result(&self, result: &AnalysisResult) -> String {
        let view = ResultView::from(result);
        [
            self.painter.header("Results:"),
            view.total_line.clone(),
            view.fake_line.clone(),
            view.percentage_line.clone(),
            self.bar(&view),
            format!("Status: {}", view.tier.paint(&self.painter, &view.status_text)),
        ]
        .join("\n")
    }

    pub fn bar(&self, view: &ResultView) -> String {
        let share = if view.bar_width.is_finite() {
            view.bar_width.clamp(0.0, 100.0) / 100.0
        } else {
            0.0
        };
        let filled = ((share * self.bar_cells as f64).round() as usize).min(self.bar_cells);

        let fill: String = std::iter::repeat(FILLED).take(filled).collect();
        let rest: String = std::iter::repeat(EMPTY).take(self.bar_cells - filled).collect();

        format!("[{}{}]", view.tier.paint(&self.painter, &fill), self.painter.dim(&rest))
    }

    pub fn error(&self, error: &Error) -> String {
        let kind = error.kind();
        let mut out = format!("{} {}", self.painter.red(&format!("[{}]", kind.label())), error);

        let hint = match kind {
            ErrorKind::Validation => Some("usage: review_guard <FILE.json>"),
            ErrorKind::Shape => Some(r#"expected: [{"Review_Text": "...", "Rating": 5}, ...]"#),
            ErrorKind::Network => Some("check that the analysis service is running and reachable"),
            _ => None,
        };
        if let Some(hint) = hint {
            out.push('\n');
            out.push_str(&self.painter.dim(hint));
        }

        out
    }

    pub fn state(&self, state: &UploadState) -> String {
        match state {
            UploadState::Idle => self.painter.dim("Select a JSON file to analyze."),
            UploadState::FileSelected => self.painter.dim("Ready to upload."),
            UploadState::Processing => self.painter.info(progress::PROCESSING),
            UploadState::Succeeded(result) => self.result(result),
            UploadState::Failed(error) => self.error(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn sample(fake_percentage: f64) -> AnalysisResult {
        AnalysisResult {
            total_reviews: 10,
            fake_reviews: 6,
            fake_percentage,
            product_status: "Likely Fake".to_string(),
        }
    }

    #[test]
    fn test_tiers() {
        assert_eq!(StatusTier::from_percentage(0.0), StatusTier::Green);
        assert_eq!(StatusTier::from_percentage(20.0), StatusTier::Green);
        assert_eq!(StatusTier::from_percentage(24.99), StatusTier::Green);
        assert_eq!(StatusTier::from_percentage(25.0), StatusTier::Yellow);
        assert_eq!(StatusTier::from_percentage(30.0), StatusTier::Yellow);
        assert_eq!(StatusTier::from_percentage(49.999), StatusTier::Yellow);
        assert_eq!(StatusTier::from_percentage(50.0), StatusTier::Red);
        assert_eq!(StatusTier::from_percentage(100.0), StatusTier::Red);
        assert_eq!(StatusTier::from_percentage(f64::NAN), StatusTier::Green);
    }

    #[test]
    fn test_result_view() {
        let view = ResultView::from(&sample(60.0));
        assert_eq!(view.total_line, "Total Reviews: 10");
        assert_eq!(view.fake_line, "Fake Reviews: 6");
        assert_eq!(view.percentage_line, "Fake Percentage: 60.00%");
        assert_eq!(view.status_text, "Likely Fake");
        assert_eq!(view.tier, StatusTier::Red);
        assert_eq!(view.bar_width, 60.0);
    }

    #[test]
    fn test_percentage_two_decimals() {
        let view = ResultView::from(&sample(100.0 / 3.0));
        assert_eq!(view.percentage_line, "Fake Percentage: 33.33%");
    }

    #[test]
    fn test_plain_result_rendering() {
        let presenter = Presenter::new(Painter::plain(), 10);
        let out = presenter.result(&sample(60.0));
        assert_eq!(
            out,
            "Results:\nTotal Reviews: 10\nFake Reviews: 6\nFake Percentage: 60.00%\n[██████░░░░]\nStatus: Likely Fake"
        );
    }

    #[test]
    fn test_status_colored_by_tier() {
        let presenter = Presenter::new(Painter::new(ColorMode::Always), 10);
        assert!(presenter.result(&sample(60.0)).contains("\x1b[31mLikely Fake\x1b[0m"));
        assert!(presenter.result(&sample(30.0)).contains("\x1b[33mLikely Fake\x1b[0m"));
        assert!(presenter.result(&sample(20.0)).contains("\x1b[32mLikely Fake\x1b[0m"));
    }

    #[test]
    fn test_bar_clamps_out_of_range() {
        let presenter = Presenter::new(Painter::plain(), 4);
        let over = ResultView::from(&sample(140.0));
        let under = ResultView::from(&sample(-5.0));
        assert_eq!(presenter.bar(&over), "[████]");
        assert_eq!(presenter.bar(&under), "[░░░░]");
        assert_eq!(over.bar_width, 140.0);
    }

    #[test]
    fn test_error_rendering_per_kind() {
        let presenter = Presenter::new(Painter::plain(), 10);

        let out = presenter.error(&Error::NoFileSelected);
        assert!(out.starts_with("[no file] Please select a JSON file first."));

        let out = presenter.error(&Error::Cancelled);
        assert_eq!(out, "[cancelled] Upload cancelled.");
    }

    #[test]
    fn test_state_rendering() {
        let presenter = Presenter::new(Painter::plain(), 10);
        assert_eq!(presenter.state(&UploadState::Processing), "Processing...");
        assert_eq!(
            presenter.state(&UploadState::Failed(Arc::new(Error::UploadInProgress))),
            "[busy] An upload is already in progress."
        );
        assert!(presenter.state(&UploadState::Succeeded(sample(60.0))).contains("Total Reviews: 10"));
    }
}
