//! Host-side handles the main service drives.
//!
//! The service never reaches for ambient globals; the window, menu and
//! dialog primitives are injected at construction so the shell can hand in
//! its real widgets and tests can hand in recorders.

use std::path::PathBuf;

/// Menu item ids the settings push toggles.
pub const MENU_AUTO_SAVE: &str = "auto-save";
pub const MENU_AUTO_LOAD: &str = "auto-load";
pub const MENU_TOGGLE_DEV_TOOLS: &str = "toggle-dev-tools";

/// One entry of a dialog's file-type dropdown.
#[derive(Debug, Clone)]
pub struct FileFilter {
    pub label: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(label: &str, extensions: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// The one application window the service decorates.
pub trait WindowHost {
    fn set_title(&mut self, title: &str);
    fn set_dev_tools_visible(&mut self, visible: bool);
}

/// Checkable items of the application menu, addressed by id.
pub trait MenuHost {
    /// Check or uncheck the item with the given id. Unknown ids are a
    /// programming error on the caller's side; implementations log and
    /// ignore them.
    fn set_checked(&mut self, item_id: &str, checked: bool);
}

/// Native open/save file pickers.
pub trait DialogHost {
    /// Open dialog. Empty when the user cancelled; may hold several paths
    /// if the underlying toolkit allows multi-selection.
    fn pick_open(&self, title: &str, filters: &[FileFilter]) -> Vec<PathBuf>;

    /// Save dialog. `None` when the user cancelled.
    fn pick_save(&self, title: &str, filters: &[FileFilter]) -> Option<PathBuf>;
}

/// `DialogHost` over the OS file pickers.
pub struct NativeDialogs;

impl NativeDialogs {
    fn build(title: &str, filters: &[FileFilter]) -> rfd::FileDialog {
        let mut dialog = rfd::FileDialog::new().set_title(title);
        for filter in filters {
            dialog = dialog.add_filter(&filter.label, &filter.extensions);
        }
        dialog
    }
}

impl DialogHost for NativeDialogs {
    fn pick_open(&self, title: &str, filters: &[FileFilter]) -> Vec<PathBuf> {
        Self::build(title, filters).pick_files().unwrap_or_default()
    }

    fn pick_save(&self, title: &str, filters: &[FileFilter]) -> Option<PathBuf> {
        Self::build(title, filters).save_file()
    }
}
