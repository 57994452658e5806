//! Main-process service bridging the GUI shell to OS file dialogs, text
//! file I/O and the JSON settings store.

mod dialogs;
mod store;
mod text_io;

pub use store::{LoadedSettings, SettingsField, SettingsOrigin};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::host::{DialogHost, MenuHost, WindowHost};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Dialog dismissed, or the open dialog returned anything other than
    /// exactly one file.
    #[error("dialog closed without a usable selection")]
    Cancelled,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Settings were pushed to GUI state before the application menu was
    /// registered. A sequencing fault in the caller, not a runtime
    /// condition to recover from.
    #[error("settings applied before the application menu was registered")]
    MenuNotReady,
}

/// The gateway the renderer-facing layer calls into.
///
/// Holds the injected window, menu and dialog handles. The menu arrives
/// via [`MainService::set_menu`] once the shell has built it, mirroring
/// the host runtime constructing the application menu after the service
/// exists.
pub struct MainService<W, M, D> {
    window: W,
    menu: Option<M>,
    dialogs: D,
    settings_dir: Option<PathBuf>,
}

impl<W: WindowHost, M: MenuHost, D: DialogHost> MainService<W, M, D> {
    pub fn new(window: W, dialogs: D) -> Self {
        Self {
            window,
            menu: None,
            dialogs,
            settings_dir: None,
        }
    }

    /// Store the settings file under `dir` instead of the platform
    /// user-data directory.
    pub fn with_settings_dir(mut self, dir: PathBuf) -> Self {
        self.settings_dir = Some(dir);
        self
    }

    pub fn set_menu(&mut self, menu: M) {
        self.menu = Some(menu);
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn menu(&self) -> Option<&M> {
        self.menu.as_ref()
    }

    fn set_window_title(&mut self, name: &str) {
        self.window.set_title(&format!("Bash Wizard: {name}"));
    }
}
