use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    #[error("compressed stream ended before all expected bits were read")]
    Underflow,

    #[error("corrupt trie: {0}")]
    CorruptTrie(String),

    #[error("cannot build a trie from an empty input")]
    EmptyInput,

    #[error("input of {0} bytes does not fit the 32-bit length field")]
    InputTooLarge(usize),

    #[error("no code for byte 0x{0:02X}")]
    MissingCode(u8),

    #[error("File \"{}\" does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("File \"{}\" is empty", .0.display())]
    EmptyFile(PathBuf),

    #[error("Configuration file not found at \"{:?}\"", .config_file_path.as_path())]
    MissingConfigurationFile {
        config_file_path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration file")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("unknown log level \"{0}\"")]
    InvalidLogLevel(String),

    #[error("Generic I/O error")]
    Io(#[from] io::Error),
}

impl HuffError {
    /// Input files the batch layer refuses to touch rather than fails on.
    pub fn is_skipped_input(&self) -> bool {
        matches!(self, HuffError::MissingFile(_) | HuffError::EmptyFile(_))
    }
}
