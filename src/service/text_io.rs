use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::host::{DialogHost, MenuHost, WindowHost};

use super::{MainService, ServiceError};

/// Lexically normalize a path: drop `.` components and resolve `..`
/// against preceding normal components, without touching the filesystem.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir),
            },
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

impl<W: WindowHost, M: MenuHost, D: DialogHost> MainService<W, M, D> {
    /// Read a whole file as UTF-8. The window title is updated to the
    /// path only once the read succeeded.
    pub fn read_text(&mut self, path: &Path) -> Result<String, ServiceError> {
        let normalized = normalize(path);
        let contents = fs::read_to_string(&normalized).map_err(|source| ServiceError::Io {
            path: normalized.clone(),
            source,
        })?;
        self.set_window_title(&path.display().to_string());
        Ok(contents)
    }

    /// Write `contents` as UTF-8, overwriting any existing file and
    /// creating a single missing parent directory level if needed.
    ///
    /// The window title is set before the write lands, so a failed write
    /// leaves the title naming a file that was never updated on disk.
    /// That ordering is inherited behavior, kept so the titlebar always
    /// names the file the editor is bound to (see DESIGN.md).
    pub fn write_text(&mut self, path: &Path, contents: &str) -> Result<(), ServiceError> {
        self.set_window_title(&path.display().to_string());

        let normalized = normalize(path);
        if let Some(parent) = normalized.parent() {
            let parent = normalize(parent);
            if !parent.as_os_str().is_empty() && !parent.exists() {
                // Single-level creation only; a deeper missing chain fails.
                fs::create_dir(&parent).map_err(|source| ServiceError::Io {
                    path: parent.clone(),
                    source,
                })?;
            }
        }

        fs::write(&normalized, contents).map_err(|source| ServiceError::Io {
            path: normalized,
            source,
        })
    }
}
