/// ProgressReporter port for user feedback while a run is in flight
///
/// Everything reported here goes to a side channel (stderr in the CLI) so
/// that stdout stays reserved for the report itself.
pub trait ProgressReporter {
    /// Reports an informational step
    fn report(&self, message: &str);

    /// Reports batch progress
    ///
    /// # Arguments
    /// * `current` - Number of items processed so far
    /// * `total` - Number of items in the batch
    /// * `message` - Optional label for the item just processed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or non-fatal error
    fn report_error(&self, message: &str);

    /// Reports that an operation finished
    fn report_completion(&self, message: &str);
}
