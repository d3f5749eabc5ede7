//! Source-to-target transfer orchestration
//!
//! Resolves both paths, asks a [`TargetPrompt`] how to treat the target, then
//! runs the reader followed by the writer.

use std::path::{Path, PathBuf};

use super::error::{ConvertError, Result};
use super::reader::{read_txt_data, DEFAULT_HEADER_SEPARATOR};
use super::table::WriteMode;
use super::writer::write_table;

pub const SOURCE_EXTENSION: &str = "txt";
pub const TARGET_EXTENSION: &str = "csv";

/// Decides what happens to the CSV target before anything is written.
pub trait TargetPrompt {
    /// The target does not exist yet. Return `false` to cancel.
    fn confirm_create(&mut self, target: &Path) -> Result<bool>;

    /// The target exists: overwrite it or append to it.
    fn choose_mode(&mut self, target: &Path) -> Result<WriteMode>;
}

/// Non-interactive prompt answering every question the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompt {
    pub create: bool,
    pub mode: WriteMode,
}

impl FixedPrompt {
    pub fn new(create: bool, mode: WriteMode) -> Self {
        Self { create, mode }
    }
}

impl TargetPrompt for FixedPrompt {
    fn confirm_create(&mut self, _target: &Path) -> Result<bool> {
        Ok(self.create)
    }

    fn choose_mode(&mut self, _target: &Path) -> Result<WriteMode> {
        Ok(self.mode)
    }
}

/// Reader settings for the text source.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Explicit header; `None` takes the first source line.
    pub header: Option<Vec<String>>,
    /// Separator for the header line only
    pub separator: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            header: None,
            separator: DEFAULT_HEADER_SEPARATOR.to_string(),
        }
    }
}

/// A completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub source: PathBuf,
    pub target: PathBuf,
    pub mode: WriteMode,
    pub header: Vec<String>,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(Transfer),
    /// The user declined to create the target
    Cancelled { source: PathBuf, target: PathBuf },
}

/// Append `extension` when the path has none.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }
    let mut raw = path.as_os_str().to_owned();
    raw.push(".");
    raw.push(extension);
    PathBuf::from(raw)
}

/// Transfer a text file into a CSV file.
///
/// `.txt` and `.csv` are appended to `source` and `target` when they have
/// no extension. The source must exist; the prompt decides whether a new
/// target is created and whether an existing one is overwritten or extended.
pub fn from_txt(
    source: &Path,
    target: &Path,
    options: &SourceOptions,
    prompt: &mut dyn TargetPrompt,
) -> Result<Outcome> {
    let source = with_default_extension(source, SOURCE_EXTENSION);
    let target = with_default_extension(target, TARGET_EXTENSION);

    if !source.is_file() {
        return Err(ConvertError::MissingFile { path: source });
    }

    let mode = if target.exists() {
        prompt.choose_mode(&target)?
    } else if prompt.confirm_create(&target)? {
        WriteMode::Write
    } else {
        return Ok(Outcome::Cancelled { source, target });
    };

    let (header, table) = read_txt_data(&source, options.header.as_deref(), &options.separator)?;
    write_table(&target, &header, &table, mode)?;

    Ok(Outcome::Written(Transfer {
        rows: table.row_count(),
        source,
        target,
        mode,
        header,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extension_appended() {
        assert_eq!(
            with_default_extension(Path::new("src"), SOURCE_EXTENSION),
            PathBuf::from("src.txt")
        );
        assert_eq!(
            with_default_extension(Path::new("./data/targ"), TARGET_EXTENSION),
            PathBuf::from("./data/targ.csv")
        );
    }

    #[test]
    fn test_existing_extension_kept() {
        assert_eq!(
            with_default_extension(Path::new("records.dat"), SOURCE_EXTENSION),
            PathBuf::from("records.dat")
        );
    }

    #[test]
    fn test_fixed_prompt_answers() {
        let mut prompt = FixedPrompt::new(false, WriteMode::Append);
        assert!(!prompt.confirm_create(Path::new("x.csv")).unwrap());
        assert_eq!(
            prompt.choose_mode(Path::new("x.csv")).unwrap(),
            WriteMode::Append
        );
    }
}
