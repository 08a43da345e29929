use thiserror::Error;

/// Input-acquisition failures. These are fatal to the run, unlike
/// validation issues, which are report content.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to read stdin")]
    StdinRead(#[source] std::io::Error),
}
