use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} lists - {msg}";

/// StderrProgressReporter adapter for reporting list loads to stderr
///
/// Keeps stdout free for the rendered results. The bar is shared by the
/// concurrent loaders, hence the mutex.
pub struct StderrProgressReporter {
    progress_bar: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn finish_bar(&self) {
        let mut slot = self.progress_bar.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(pb) = slot.take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let mut slot = self.progress_bar.lock().unwrap_or_else(|e| e.into_inner());
        let pb = slot.get_or_insert_with(|| {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(Self::bar_style());
            pb
        });
        pb.set_length(total as u64);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_bar();
        eprintln!("{}", message);
    }
}
