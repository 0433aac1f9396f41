//! Loading options and candidate lists from disk.
//!
//! Options are JSON objects using the tags of [`Options`]. Candidate files
//! hold one candidate per line; blank lines and lines starting with `#` are
//! skipped.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, SuggestError};
use crate::similarity::Options;

pub fn options_from_str(json: &str) -> Result<Options> {
    Ok(serde_json::from_str(json)?)
}

pub fn options_from_file<P: AsRef<Path>>(path: P) -> Result<Options> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SuggestError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let options = options_from_str(&text)?;
    info!(path = %path.display(), ?options, "loaded options");
    Ok(options)
}

pub fn candidates_from_str(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}

pub fn candidates_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let candidates = candidates_from_str(&fs::read_to_string(path)?);
    debug!(path = %path.display(), count = candidates.len(), "loaded candidates");
    Ok(candidates)
}
