/// Crate-wide result type.
///
/// Domain failures are raised as `SkyguardError` and travel inside
/// `anyhow::Error`, so callers can attach context with `?` and `.context()`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
