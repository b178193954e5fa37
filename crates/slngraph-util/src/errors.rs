use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all slngraph operations.
#[derive(Debug, Error, Diagnostic)]
pub enum SlnGraphError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unreadable solution file.
    #[error("Solution error: {message}")]
    Solution { message: String },

    /// Malformed or unreadable project file.
    #[error("Project error: {message}")]
    Project { message: String },

    /// Malformed or unreadable package-version manifest.
    #[error("Package manifest error: {message}")]
    #[diagnostic(help("Check the PackageVersion entries in Directory.Packages.props"))]
    Packages { message: String },

    /// Solution discovery failed (bad root directory, nothing to scan).
    #[error("Discovery error: {message}")]
    #[diagnostic(help("Pass a directory that contains .sln files somewhere beneath it"))]
    Discovery { message: String },

    /// Writing an output artifact failed.
    #[error("Render error: {message}")]
    Render { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type SlnGraphResult<T> = miette::Result<T>;
