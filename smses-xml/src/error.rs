#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("expected {expected} columns for {table}, have {actual}")]
    ColumnCount {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
    /// The low bits of a message type do not map to any known type.
    ///
    /// Carries the raw, unmasked value so it can be reported upstream.
    #[error("undefined SMS type: {raw:#x}; please report this issue, together with whether the message was sent, received, drafted, etc.")]
    UnknownMessageType { raw: u64 },
    #[error("no translation for table {0}")]
    UnsupportedTable(String),
    #[error("invalid export configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
