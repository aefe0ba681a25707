//! Matching file names, building the rename list, and applying it.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use huestep_common::RenameError;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::month::month_index;

/// Where an image sits on the calendar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Top,
    Bottom,
}

impl Position {
    /// `Top` for the large image, `Bottom` for everything else.
    pub fn from_size(size: &str, large_size: &str) -> Self {
        if size == large_size {
            Position::Top
        } else {
            Position::Bottom
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of a `<month>-<size>.<ext>` file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarImage {
    pub month: String,
    pub size: String,
}

/// Recognizes `<month>-<size>.<ext>` for one extension.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    re: Regex,
}

impl FileMatcher {
    pub fn new(extension: &str) -> Result<Self, regex::Error> {
        let pattern = format!(r"^([^-.]+)-([^-.]+)\.{}$", regex::escape(extension));
        Ok(Self {
            re: Regex::new(&pattern)?,
        })
    }

    pub fn parse(&self, file_name: &str) -> Option<CalendarImage> {
        let caps = self.re.captures(file_name)?;
        Some(CalendarImage {
            month: caps[1].to_string(),
            size: caps[2].to_string(),
        })
    }
}

/// Settings for one renaming run.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub target_year: u32,
    pub extension: String,
    pub large_size: String,
}

/// One pending rename inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl RenamePlan {
    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// `<year>_<index>_<position>.<ext>`
pub fn target_name(year: u32, index: usize, position: Position, extension: &str) -> String {
    format!("{year}_{index}_{position}.{extension}")
}

/// Scan `dir` (not recursively) and list the renames to perform, sorted by
/// source name.
///
/// Names that do not fit the pattern are skipped. An unknown month aborts
/// the scan before anything has been renamed.
pub fn plan_directory(dir: &Path, options: &PlanOptions) -> Result<Vec<RenamePlan>, RenameError> {
    let matcher = FileMatcher::new(&options.extension).map_err(|e| {
        RenameError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
    })?;

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => warn!("skipping non UTF-8 file name {name:?}"),
        }
    }
    names.sort();

    let mut plan = Vec::new();
    for name in names {
        let Some(image) = matcher.parse(&name) else {
            debug!("skipping {name}");
            continue;
        };
        let index = month_index(&image.month)?;
        let position = Position::from_size(&image.size, &options.large_size);
        let to = target_name(options.target_year, index, position, &options.extension);
        plan.push(RenamePlan {
            from: dir.join(&name),
            to: dir.join(to),
        });
    }
    Ok(plan)
}

/// Perform every rename in order, reporting each one to `out` first.
///
/// Stops at the first failure. Files already renamed stay renamed, and an
/// existing file at a target path is replaced.
pub fn apply(plan: &[RenamePlan], out: &mut impl Write) -> Result<usize, RenameError> {
    for (done, item) in plan.iter().enumerate() {
        let from = RenamePlan::file_name(&item.from);
        let to = RenamePlan::file_name(&item.to);
        writeln!(out, "moving {from} to {to} ...")?;

        if let Err(source) = std::fs::rename(&item.from, &item.to) {
            warn!(renamed = done, "rename failed, earlier renames are kept");
            return Err(RenameError::Rename {
                from: item.from.clone(),
                to: item.to.clone(),
                source,
            });
        }
    }
    info!(count = plan.len(), "renamed files");
    Ok(plan.len())
}
