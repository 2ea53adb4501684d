//! Error type shared by the whole alert pipeline.
//!
//! Every failure is reported to the caller. Nothing in this crate terminates the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("Invalid cooling category code: {0}")]
    InvalidCategory(u8),

    #[error("Unknown cooling category '{0}', expected one of: passive, high-active, medium-active")]
    InvalidCategoryName(String),

    #[error("Invalid notification target code: {0}")]
    InvalidTarget(u8),

    #[error("Unknown notification target '{0}', expected one of: controller, email")]
    InvalidTargetName(String),

    #[error("Invalid breach classification code: {0}")]
    InvalidClassification(u8),

    #[error("Invalid temperature reading: {0}")]
    InvalidReading(f64),

    #[error("Notification sink failed: {0}")]
    Sink(#[from] std::io::Error),
}
