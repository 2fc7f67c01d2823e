//! JSON files loading.

use std::{fs, io, path::Path};

use derive_more::{Debug, Display, Error as StdError, From};
use serde::de::DeserializeOwned;
use tracerr::Traced;

/// Error of loading a JSON file.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// File cannot be read.
    #[display("failed to read file: {_0}")]
    Io(io::Error),

    /// File contents are not valid JSON of the expected shape.
    #[display("failed to parse JSON: {_0}")]
    Json(serde_json::Error),
}

/// Deserializes a value from the JSON file at the provided `path`.
///
/// # Errors
///
/// Errors if the file cannot be read or its contents don't match `T`.
pub fn from_path<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<T, Traced<Error>> {
    let file = fs::File::open(path)
        .map_err(Error::from)
        .map_err(tracerr::wrap!())?;
    serde_json::from_reader(io::BufReader::new(file))
        .map_err(Error::from)
        .map_err(tracerr::wrap!())
}
