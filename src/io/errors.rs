use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to read parameter file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse parameter file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to remove stale output {path}: {source}")]
    RemoveFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write csv output: {0}")]
    Csv(#[from] csv::Error),
}
