use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of source documents.
pub const MARKDOWN_EXTENSION: &str = "md";
/// Extension of generated pages.
pub const HTML_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Unreadable directory entry: {0}")]
    Glob(#[from] glob::GlobError),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file below `root`, creating parent directories
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Find every markdown file below `content_root`, relative to it, sorted
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let root = glob::Pattern::escape(&content_root.to_string_lossy());
    let pattern = format!("{root}/**/*.{MARKDOWN_EXTENSION}");

    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let relative = path
            .strip_prefix(content_root)
            .ok()
            .and_then(|p| RelativePathBuf::from_path(p).ok());
        match relative {
            Some(relative) => files.push(relative),
            None => log::warn!("Skipping {} outside content directory", path.display()),
        }
    }
    files.sort();
    Ok(files)
}

/// Output location of a page generated from `source`: same directory, `.html` extension
pub fn page_path(source: &RelativePath) -> RelativePathBuf {
    source.with_extension(HTML_EXTENSION)
}

/// Replace `dest` with a recursive copy of `src`
///
/// Any existing `dest` is deleted first.
pub fn copy_static(src: &Path, dest: &Path) -> Result<(), IoError> {
    if !src.is_dir() {
        return Err(IoError::NotFound(src.to_path_buf()));
    }
    if dest.exists() {
        log::info!("Removing existing destination directory: {}", dest.display());
        fs::remove_dir_all(dest)?;
    }
    copy_directory_recursive(src, dest)
}

fn copy_directory_recursive(src: &Path, dest: &Path) -> Result<(), IoError> {
    fs::create_dir_all(dest)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            log::info!("Copying directory: {} -> {}", from.display(), to.display());
            copy_directory_recursive(&from, &to)?;
        } else {
            log::info!("Copying file: {} -> {}", from.display(), to.display());
            fs::copy(&from, &to)?;
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}
