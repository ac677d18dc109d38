/// ProgressReporter port for reporting progress while component lists load
///
/// This port abstracts progress reporting (e.g., to stderr) so the loaders
/// can give feedback without knowing where it is displayed.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a count
    ///
    /// # Arguments
    /// * `current` - Number of finished items
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable failure
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
