use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("selection store I/O error at {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("selection store holds an invalid document: {source}")]
    InvalidDocument {
        #[from]
        source: serde_json::Error,
    },
}
