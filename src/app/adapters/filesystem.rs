//! Restaurant listing input files
//!
//! Reads `<restaurant>,<schedule>` lines from plain files, directories and
//! glob patterns into [`RestaurantEntry`] values. Each line is split on its
//! first comma; lines without one fall back to locating the schedule by its
//! leading day token and trailing am/pm marker.

use crate::app::models::RestaurantEntry;
use crate::app::services::schedule_table::BuildMode;
use crate::config::Config;
use crate::constants::FIELD_SEPARATOR;
use crate::{Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Schedule start for lines that have no field separator
static SCHEDULE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(.*?)(\b(?:mon|tue|wed|thu|fri|sat|sun)\b.*?(?:am|pm).*$)").unwrap()
});

/// Counters for one read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadStats {
    pub files_read: usize,
    /// Empty files passed over
    pub files_skipped: usize,
    pub lines_read: usize,
    pub entries_read: usize,
    /// Malformed lines dropped in permissive mode
    pub lines_skipped: usize,
}

/// Entries read from all inputs, in file then line order
#[derive(Debug, Clone, Default)]
pub struct InputRead {
    pub entries: Vec<RestaurantEntry>,
    pub stats: ReadStats,
}

impl InputRead {
    /// Raw schedule text of the first entry with this name
    pub fn schedule_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.schedule.as_str())
    }
}

/// Reader for restaurant listing files
#[derive(Debug, Clone)]
pub struct InputReader {
    extension: String,
    mode: BuildMode,
    skip_empty_files: bool,
}

impl InputReader {
    pub fn new(extension: impl Into<String>, mode: BuildMode, skip_empty_files: bool) -> Self {
        let extension = extension.into();
        Self {
            extension: extension.trim_start_matches('.').to_string(),
            mode,
            skip_empty_files,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.input_extension.clone(),
            config.build_mode,
            config.skip_empty_files,
        )
    }

    /// Expand input paths into a list of files
    ///
    /// Plain files are kept as given. Directories contribute every file with
    /// the configured extension, sorted by path. Paths containing glob
    /// metacharacters are expanded as patterns and must match at least one
    /// file.
    pub fn resolve_paths(&self, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in inputs {
            let text = input.to_string_lossy();

            if text.contains(['*', '?', '[']) {
                let matches = self.expand_glob(&text)?;
                if matches.is_empty() {
                    return Err(Error::file_not_found(text.into_owned()));
                }
                files.extend(matches);
            } else if input.is_dir() {
                files.extend(self.walk_directory(input)?);
            } else if input.is_file() {
                files.push(input.clone());
            } else {
                return Err(Error::file_not_found(input.display().to_string()));
            }
        }

        debug!("Resolved {} input paths to {} files", inputs.len(), files.len());
        Ok(files)
    }

    fn expand_glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let paths = glob::glob(pattern).map_err(|e| {
            Error::configuration(format!("Invalid input pattern '{}': {}", pattern, e))
        })?;

        let mut files = Vec::new();
        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable glob match: {}", e),
            }
        }
        files.sort();
        Ok(files)
    }

    fn walk_directory(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                Error::directory_traversal(format!("Failed to walk {}", dir.display()), e)
            })?;
            let path = entry.path();

            if entry.file_type().is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
            {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Resolve and read every input
    pub async fn read_paths(&self, inputs: &[PathBuf]) -> Result<InputRead> {
        let files = self.resolve_paths(inputs)?;
        let mut read = InputRead::default();

        for file in &files {
            self.read_file(file, &mut read).await?;
        }

        info!(
            "Read {} entries from {} files ({} lines, {} skipped)",
            read.stats.entries_read,
            read.stats.files_read,
            read.stats.lines_read,
            read.stats.lines_skipped
        );
        Ok(read)
    }

    /// Read one file, appending its entries
    pub async fn read_file(&self, path: &Path, read: &mut InputRead) -> Result<()> {
        info!("Reading {}", path.display());

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::io(format!("Failed to read {}", path.display()), e)
            }
        })?;

        if content.trim().is_empty() {
            if self.skip_empty_files {
                warn!("{} is empty, skipping", path.display());
                read.stats.files_skipped += 1;
                return Ok(());
            }
            return Err(Error::input_format(
                path.display().to_string(),
                0,
                "file is empty",
            ));
        }

        self.parse_content(&path.display().to_string(), &content, read)?;
        read.stats.files_read += 1;
        Ok(())
    }

    /// Parse file content line by line; `source` labels errors and warnings
    pub fn parse_content(&self, source: &str, content: &str, read: &mut InputRead) -> Result<()> {
        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            read.stats.lines_read += 1;

            match parse_line(line) {
                Some(entry) => {
                    debug!("{}:{} {} -> {}", source, index + 1, entry.name, entry.schedule);
                    read.entries.push(entry);
                    read.stats.entries_read += 1;
                }
                None => match self.mode {
                    BuildMode::Strict => {
                        return Err(Error::input_format(
                            source,
                            index + 1,
                            format!("cannot split '{}' into restaurant and schedule", line),
                        ));
                    }
                    BuildMode::Permissive => {
                        warn!("Skipping malformed line {}:{}: '{}'", source, index + 1, line);
                        read.stats.lines_skipped += 1;
                    }
                },
            }
        }
        Ok(())
    }
}

/// Split one trimmed line into an entry
///
/// Returns `None` when either field would be empty.
pub fn parse_line(line: &str) -> Option<RestaurantEntry> {
    let (name, schedule) = match line.split_once(FIELD_SEPARATOR) {
        Some(fields) => fields,
        None => {
            let start = SCHEDULE_START.captures(line)?.get(2)?.start();
            line.split_at(start)
        }
    };

    let name = clean_field(name);
    let schedule = clean_field(schedule);
    if name.is_empty() || schedule.is_empty() {
        return None;
    }

    Some(RestaurantEntry::new(name, schedule))
}

/// Strip surrounding spaces, double quotes and commas
pub fn clean_field(field: &str) -> &str {
    field.trim_matches(|c: char| c.is_whitespace() || c == '"' || c == ',')
}
