/// Failures `mdlinks` cannot recover into a per-file result: configuration
/// problems and I/O outside the per-file read path. A file that is missing
/// or unreadable never becomes an `Error`; it lands in the `error` field of
/// its [`FileResult`](crate::types::FileResult) so a directory scan keeps going.
#[allow(clippy::error_impl_error, reason = "crate-wide error type")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),
}
