use std::io::Write;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use crate::helpers::repository_url::parse_repository_url;
use crate::structs::analysis_request::AnalysisRequest;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK: Duration = Duration::from_millis(120);

/// Stderr spinner for one in-flight analysis, labelled with the target issue and provider.
pub struct ProgressSpinner {
    label: String,
    started: Instant,
    stop_tx: Option<oneshot::Sender<()>>,
    ticker: Option<JoinHandle<()>>,
}

impl ProgressSpinner {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            started: Instant::now(),
            stop_tx: None,
            ticker: None,
        }
    }

    pub fn for_request(request: &AnalysisRequest) -> Self {
        Self::new(Self::request_label(request))
    }

    /// `Analyzing owner/repo#N with Provider`. Unparseable URLs are shown as typed.
    pub fn request_label(request: &AnalysisRequest) -> String {
        let target = parse_repository_url(&request.repo_url)
            .map_or_else(|_| request.repo_url.trim().to_string(), |repository| repository.to_string());
        format!("Analyzing {}#{} with {}", target, request.issue_number, request.provider())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        self.started = Instant::now();
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let label = self.label.clone();

        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            for frame in FRAMES.iter().cycle() {
                tokio::select! {
                    _ = interval.tick() => draw(&format!("\r{} {}... ", frame, label)),
                    _ = &mut stop_rx => break,
                }
            }
        }));
        self.stop_tx = Some(stop_tx);
    }

    pub async fn succeed(&mut self, message: &str) {
        let elapsed = self.halt().await;
        draw(&Self::summary_line(true, message, elapsed));
    }

    pub async fn fail(&mut self, message: &str) {
        let elapsed = self.halt().await;
        draw(&Self::summary_line(false, message, elapsed));
    }

    pub fn summary_line(succeeded: bool, message: &str, elapsed: Duration) -> String {
        let mark = if succeeded { "✅" } else { "❌" };
        format!("\r\x1b[K{} {} ({:.1}s)\n", mark, message, elapsed.as_secs_f64())
    }

    async fn halt(&mut self) -> Duration {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.await;
        }
        self.started.elapsed()
    }
}

fn draw(text: &str) {
    let mut stderr = std::io::stderr().lock();
    let _ = stderr.write_all(text.as_bytes());
    let _ = stderr.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_names_issue_and_provider() {
        let request = AnalysisRequest::new("https://github.com/octocat/hello-world.git/", 42, true);
        assert_eq!(ProgressSpinner::request_label(&request), "Analyzing octocat/hello-world#42 with Gemini");

        let request = AnalysisRequest::new("rust-lang/rust", 7, false);
        assert_eq!(ProgressSpinner::for_request(&request).label(), "Analyzing rust-lang/rust#7 with OpenAI");
    }

    #[test]
    fn unparseable_url_is_kept_as_typed() {
        let request = AnalysisRequest::new("  hello-world ", 3, false);
        assert_eq!(ProgressSpinner::request_label(&request), "Analyzing hello-world#3 with OpenAI");
    }

    #[test]
    fn summary_line_reports_outcome_and_elapsed_time() {
        let ok = ProgressSpinner::summary_line(true, "Analysis Complete", Duration::from_millis(1300));
        assert_eq!(ok, "\r\x1b[K✅ Analysis Complete (1.3s)\n");

        let failed = ProgressSpinner::summary_line(false, "Analysis failed", Duration::from_secs(3));
        assert_eq!(failed, "\r\x1b[K❌ Analysis failed (3.0s)\n");
    }

    #[tokio::test]
    async fn start_then_finish_stops_the_ticker() {
        let mut spinner = ProgressSpinner::new("Analyzing octocat/hello-world#1 with OpenAI");
        assert!(!spinner.is_running());

        spinner.start();
        spinner.start();
        assert!(spinner.is_running());

        spinner.succeed("Analysis Complete").await;
        assert!(!spinner.is_running());

        spinner.fail("Analysis failed").await;
        assert!(!spinner.is_running());
    }
}
