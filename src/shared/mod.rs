/// Shared kernel - error types and cross-cutting helpers
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
