use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BwTheme {
    #[default]
    Light,
    Dark,
}

/// User preferences persisted in `BashWizardSettings.json`.
///
/// Field names on disk stay camelCase so existing settings files keep
/// parsing. Every field is individually defaultable: a file that only
/// carries some of the keys still deserializes with the missing ones
/// backfilled, and unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BwSettings {
    pub auto_save: bool,
    pub theme: BwTheme,
    pub always_load_changed_file: bool,
    pub show_debugger: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off_and_light() {
        let s = BwSettings::default();
        assert!(!s.auto_save);
        assert_eq!(s.theme, BwTheme::Light);
        assert!(!s.always_load_changed_file);
        assert!(!s.show_debugger);
    }

    #[test]
    fn round_trips_through_json() {
        let s = BwSettings {
            auto_save: true,
            theme: BwTheme::Dark,
            always_load_changed_file: true,
            show_debugger: false,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: BwSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn disk_schema_is_camel_case() {
        let json = serde_json::to_string(&BwSettings::default()).unwrap();
        assert!(json.contains("\"autoSave\""));
        assert!(json.contains("\"alwaysLoadChangedFile\""));
        assert!(json.contains("\"showDebugger\""));
        assert!(json.contains("\"theme\""));
    }

    #[test]
    fn missing_fields_backfill_from_defaults() {
        let s: BwSettings = serde_json::from_str(r#"{"autoSave": true}"#).unwrap();
        assert!(s.auto_save);
        assert_eq!(s.theme, BwTheme::Light);
        assert!(!s.always_load_changed_file);
        assert!(!s.show_debugger);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let s: BwSettings =
            serde_json::from_str(r#"{"showDebugger": true, "legacyOption": 42}"#).unwrap();
        assert!(s.show_debugger);
    }
}
