use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::error::Result;

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Flat line-oriented storage
pub trait TextStorage {
    /// Read every line at `path`; a missing file reads as no lines
    fn read(&self, path: &Path) -> Result<Vec<String>>;
    /// Replace everything at `path` with `lines`
    fn write(&self, path: &Path, lines: &[String]) -> Result<()>;
}

/// [`TextStorage`] backed by a plain text file
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStorage;

impl TextStorage for FileStorage {
    fn read(&self, path: &Path) -> Result<Vec<String>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No recipes file at {}, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(contents.split(LINE_SEPARATOR).map(String::from).collect())
    }

    fn write(&self, path: &Path, lines: &[String]) -> Result<()> {
        fs::write(path, lines.join(LINE_SEPARATOR))?;
        debug!("Wrote {} lines to {}", lines.len(), path.display());
        Ok(())
    }
}
