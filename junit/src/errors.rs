use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Construction error: {0}")]
    Construction(String),
    #[error("XML error when writing report {0}")]
    XmlError(#[from] quick_xml::Error),
    #[error("Character {character:?} is not allowed in XML, found in {context}")]
    InvalidCharacter { character: char, context: String },
    #[error("I/O error when writing report {0}")]
    IoError(#[from] std::io::Error),
    #[error("Report is not valid UTF-8 {0}")]
    Utf8Error(#[from] FromUtf8Error),
    #[error("Error parsing incoming JSON test results {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Error parsing incoming YAML test results {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
