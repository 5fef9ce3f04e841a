//! Directory-backed output for converted questions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use quiz_core::OutputSink;

/// Writes every file, byte-identical, into each configured directory.
#[derive(Debug, Clone)]
pub struct DirectoryOutput {
    dirs: Vec<PathBuf>,
    announce: bool,
}

impl DirectoryOutput {
    /// Create the output, making sure every directory exists.
    pub fn create(dirs: Vec<PathBuf>) -> io::Result<Self> {
        for dir in &dirs {
            fs::create_dir_all(dir)?;
        }
        Ok(Self {
            dirs,
            announce: true,
        })
    }

    /// Suppress the `Created <name>` progress lines.
    pub fn quiet(mut self) -> Self {
        self.announce = false;
        self
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Write `content` next to `dir/filename` under its staging name.
    fn stage(dir: &Path, filename: &str, content: &str) -> io::Result<(PathBuf, PathBuf)> {
        let target = dir.join(filename);
        let staging = staging_path(&target)?;
        fs::write(&staging, content)?;
        Ok((staging, target))
    }
}

/// Hidden `.tmp` sibling used while a file is written.
///
/// The mirror ignores both dotfiles and `.tmp` names, so a staged file is
/// never copied across.
pub(crate) fn staging_path(target: &Path) -> io::Result<PathBuf> {
    let name = target.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' has no file name", target.display()),
        )
    })?;
    let mut staged = std::ffi::OsString::from(".");
    staged.push(name);
    staged.push(".tmp");
    Ok(target.with_file_name(staged))
}

impl OutputSink for DirectoryOutput {
    /// Either every directory gets the new file or none does.
    fn write(&mut self, filename: &str, content: &str) -> io::Result<()> {
        let mut staged = Vec::with_capacity(self.dirs.len());
        for dir in &self.dirs {
            match Self::stage(dir, filename, content) {
                Ok(pair) => staged.push(pair),
                Err(e) => {
                    for (staging, _) in &staged {
                        let _ = fs::remove_file(staging);
                    }
                    let _ = staging_path(&dir.join(filename)).map(fs::remove_file);
                    return Err(e);
                }
            }
        }
        for (index, (staging, target)) in staged.iter().enumerate() {
            if let Err(e) = fs::rename(staging, target) {
                for (rest, _) in &staged[index..] {
                    let _ = fs::remove_file(rest);
                }
                return Err(e);
            }
        }
        tracing::debug!(filename, dirs = self.dirs.len(), "question written");
        if self.announce {
            println!("Created {filename}");
        }
        Ok(())
    }
}
