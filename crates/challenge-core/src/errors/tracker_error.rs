/// Tracker persistence errors.
///
/// Never fatal to the caller: the tracker logs these and carries on with
/// whatever state it has in memory.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("tracker I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("tracker state serialization failed: {message}")]
    Serialization { message: String },
}
