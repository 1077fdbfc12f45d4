use crate::shared::Result;

/// OutputPresenter port for delivering a rendered report
///
/// Destinations are stdout or a file chosen with `--output`.
pub trait OutputPresenter {
    /// Delivers the rendered report
    ///
    /// # Errors
    /// Returns an error if the destination rejects the write (permissions,
    /// refused symlink, full disk)
    fn present(&self, content: &str) -> Result<()>;
}
