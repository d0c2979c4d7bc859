//! JSON and TOML interchange documents.
//!
//! A JSON document is a bare array of intervals. TOML cannot hold a top-level array,
//! so a TOML document keeps them under `[[intervals]]`.

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::interval::{TimeInterval, TimeIntervalSequence};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot infer the document format of `{0}`")]
    UnknownFormat(PathBuf),

    #[error("failed to access `{path}`")]
    Io {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },

    #[error("interval #{index} holds a non-finite value, which JSON cannot represent")]
    NonFiniteJson { index: usize },

    #[error("malformed JSON document")]
    Json(#[from] serde_json::Error),

    #[error("malformed TOML document")]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to serialize the TOML document")]
    TomlSer(#[from] toml::ser::Error),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Infer the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(extension) if extension.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(Error::UnknownFormat(path.to_path_buf())),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDocument<'a> {
    #[serde(default)]
    intervals: Cow<'a, [TimeInterval]>,
}

pub fn from_str(text: &str, format: Format) -> Result<TimeIntervalSequence, Error> {
    match format {
        Format::Json => Ok(serde_json::from_str(text)?),
        Format::Toml => Ok(toml::from_str::<TomlDocument>(text)?.intervals.into_owned()),
    }
}

pub fn to_string(intervals: &[TimeInterval], format: Format) -> Result<String, Error> {
    match format {
        Format::Json => {
            if let Some(index) = intervals.iter().position(|interval| !interval.is_finite()) {
                return Err(Error::NonFiniteJson { index });
            }
            Ok(serde_json::to_string_pretty(intervals)?)
        }
        Format::Toml => {
            Ok(toml::to_string_pretty(&TomlDocument { intervals: Cow::Borrowed(intervals) })?)
        }
    }
}

/// Read the document, inferring the format from the path unless given.
pub fn read(path: &Path, format: Option<Format>) -> Result<TimeIntervalSequence, Error> {
    let format = format.map_or_else(|| Format::from_path(path), Ok)?;
    let text = fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    from_str(&text, format)
}

pub fn write(path: &Path, intervals: &[TimeInterval], format: Option<Format>) -> Result<(), Error> {
    let format = format.map_or_else(|| Format::from_path(path), Ok)?;
    let text = to_string(intervals, format)?;
    fs::write(path, text).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}
