use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings::{BwSettings, BwTheme};
use crate::host::{self, DialogHost, MenuHost, WindowHost};

use super::{MainService, ServiceError};

pub const SETTINGS_FILE_NAME: &str = "BashWizardSettings.json";
const APP_DIR_NAME: &str = "BashWizard";

/// Where a loaded settings object came from, so callers can tell a clean
/// load from a self-healed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsOrigin {
    /// Parsed from the settings file as-is.
    File,
    /// Defaults were substituted; the payload says why.
    Defaulted(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSettings {
    pub settings: BwSettings,
    pub origin: SettingsOrigin,
}

/// A single-field settings update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    AutoSave(bool),
    Theme(BwTheme),
    AlwaysLoadChangedFile(bool),
    ShowDebugger(bool),
}

impl SettingsField {
    pub fn apply_to(self, settings: &mut BwSettings) {
        match self {
            Self::AutoSave(v) => settings.auto_save = v,
            Self::Theme(v) => settings.theme = v,
            Self::AlwaysLoadChangedFile(v) => settings.always_load_changed_file = v,
            Self::ShowDebugger(v) => settings.show_debugger = v,
        }
    }
}

impl<W: WindowHost, M: MenuHost, D: DialogHost> MainService<W, M, D> {
    /// Path of the settings file. Recomputed on every call; the platform
    /// user-data directory can become available only after the host app
    /// finishes initializing.
    pub fn settings_file_path(&self) -> PathBuf {
        let path = match &self.settings_dir {
            Some(dir) => dir.join(SETTINGS_FILE_NAME),
            None => {
                let mut dir = dirs::config_dir().unwrap_or_else(|| {
                    log::warn!("no platform config directory, falling back to the working directory");
                    PathBuf::from(".")
                });
                dir.push(APP_DIR_NAME);
                fs::create_dir_all(&dir).ok();
                dir.join(SETTINGS_FILE_NAME)
            }
        };
        log::debug!("settings file: {}", path.display());
        path
    }

    /// Load the settings file, substituting defaults on any read or parse
    /// failure, then write the result back and push it onto GUI state.
    ///
    /// Never fails for filesystem reasons; a missing or corrupt file is
    /// healed in place and reported through [`SettingsOrigin::Defaulted`].
    /// The only error out of here is [`ServiceError::MenuNotReady`] from
    /// the GUI push.
    pub fn load_and_apply(&mut self) -> Result<LoadedSettings, ServiceError> {
        let path = self.settings_file_path();
        let loaded = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<BwSettings>(&text) {
                Ok(settings) => LoadedSettings {
                    settings,
                    origin: SettingsOrigin::File,
                },
                Err(err) => {
                    log::warn!("settings file unparseable, using defaults: {err}");
                    LoadedSettings {
                        settings: BwSettings::default(),
                        origin: SettingsOrigin::Defaulted(err.to_string()),
                    }
                }
            },
            Err(err) => {
                log::warn!("settings file unreadable, using defaults: {err}");
                LoadedSettings {
                    settings: BwSettings::default(),
                    origin: SettingsOrigin::Defaulted(err.to_string()),
                }
            }
        };

        // Write-back keeps the file in sync with what the app actually
        // runs with, healing a missing or corrupt file. Best effort: a
        // failure here must not turn a load into an error.
        if let Err(err) = self.persist(&path, &loaded.settings) {
            log::warn!("could not write settings back to {}: {err}", path.display());
        }
        self.apply_settings(&loaded.settings)?;
        Ok(loaded)
    }

    /// Push `settings` onto GUI state, then persist them.
    pub fn save_and_apply(&mut self, settings: &BwSettings) -> Result<(), ServiceError> {
        self.apply_settings(settings)?;
        let path = self.settings_file_path();
        self.persist(&path, settings)
    }

    /// Update one field of the persisted settings.
    ///
    /// Loads the current record, mutates the field, writes the whole
    /// record back and re-pushes it onto GUI state so menu checkmarks and
    /// dev-tools visibility track the new value immediately.
    pub fn update_setting(&mut self, field: SettingsField) -> Result<(), ServiceError> {
        log::info!("updating setting {field:?}");
        let mut settings = self.load_and_apply()?.settings;
        field.apply_to(&mut settings);
        let path = self.settings_file_path();
        self.persist(&path, &settings)?;
        self.apply_settings(&settings)
    }

    /// GUI state push: sync the three menu checkmarks and dev-tools
    /// visibility to `settings`.
    pub fn apply_settings(&mut self, settings: &BwSettings) -> Result<(), ServiceError> {
        log::debug!("applying settings: {settings:?}");
        let menu = self.menu.as_mut().ok_or(ServiceError::MenuNotReady)?;
        menu.set_checked(host::MENU_AUTO_SAVE, settings.auto_save);
        menu.set_checked(host::MENU_AUTO_LOAD, settings.always_load_changed_file);
        menu.set_checked(host::MENU_TOGGLE_DEV_TOOLS, settings.show_debugger);
        self.window.set_dev_tools_visible(settings.show_debugger);
        Ok(())
    }

    fn persist(&self, path: &Path, settings: &BwSettings) -> Result<(), ServiceError> {
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(path, json).map_err(|source| ServiceError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
