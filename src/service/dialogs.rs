use std::path::PathBuf;

use crate::host::{DialogHost, FileFilter, MenuHost, WindowHost};

use super::{MainService, ServiceError};

impl<W: WindowHost, M: MenuHost, D: DialogHost> MainService<W, M, D> {
    /// Show the native open dialog. Anything other than exactly one
    /// selected file counts as a cancellation.
    pub fn open_file(
        &mut self,
        title: &str,
        filters: &[FileFilter],
    ) -> Result<PathBuf, ServiceError> {
        let mut picked = self.dialogs.pick_open(title, filters);
        if picked.len() != 1 {
            return Err(ServiceError::Cancelled);
        }
        Ok(picked.remove(0))
    }

    /// Show the native save dialog.
    pub fn save_file(
        &mut self,
        title: &str,
        filters: &[FileFilter],
    ) -> Result<PathBuf, ServiceError> {
        let path = self
            .dialogs
            .pick_save(title, filters)
            .ok_or(ServiceError::Cancelled)?;
        log::debug!("save dialog chose {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::super::testhost::{RecordingMenu, RecordingWindow, ScriptedDialogs};
    use super::super::{MainService, ServiceError};
    use crate::host::FileFilter;

    type TestService = MainService<RecordingWindow, RecordingMenu, ScriptedDialogs>;

    fn service(dialogs: ScriptedDialogs) -> TestService {
        MainService::new(RecordingWindow::default(), dialogs)
    }

    fn sh_filter() -> Vec<FileFilter> {
        vec![FileFilter::new("Bash Scripts", &["sh"])]
    }

    #[test]
    fn open_returns_the_single_selected_path() {
        let mut svc = service(ScriptedDialogs {
            open_result: vec![PathBuf::from("/home/user/deploy.sh")],
            ..Default::default()
        });
        let path = svc.open_file("Open Bash Script", &sh_filter()).unwrap();
        assert_eq!(path, PathBuf::from("/home/user/deploy.sh"));
    }

    #[test]
    fn open_cancellation_rejects() {
        let mut svc = service(ScriptedDialogs::default());
        let err = svc.open_file("Open Bash Script", &sh_filter()).unwrap_err();
        assert!(matches!(err, ServiceError::Cancelled));
    }

    #[test]
    fn open_multi_selection_rejects() {
        let mut svc = service(ScriptedDialogs {
            open_result: vec![PathBuf::from("/a.sh"), PathBuf::from("/b.sh")],
            ..Default::default()
        });
        let err = svc.open_file("Open Bash Script", &sh_filter()).unwrap_err();
        assert!(matches!(err, ServiceError::Cancelled));
    }

    #[test]
    fn save_returns_the_chosen_path() {
        let mut svc = service(ScriptedDialogs {
            save_result: Some(PathBuf::from("/home/user/out.sh")),
            ..Default::default()
        });
        let path = svc.save_file("Save Bash Script", &sh_filter()).unwrap();
        assert_eq!(path, PathBuf::from("/home/user/out.sh"));
    }

    #[test]
    fn save_cancellation_rejects() {
        let mut svc = service(ScriptedDialogs::default());
        let err = svc.save_file("Save Bash Script", &sh_filter()).unwrap_err();
        assert!(matches!(err, ServiceError::Cancelled));
    }

    #[test]
    fn dialogs_leave_the_window_title_alone() {
        let mut svc = service(ScriptedDialogs {
            open_result: vec![PathBuf::from("/a.sh")],
            save_result: Some(PathBuf::from("/b.sh")),
        });
        svc.open_file("Open", &sh_filter()).unwrap();
        svc.save_file("Save", &sh_filter()).unwrap();
        assert!(svc.window().titles.is_empty());
    }
}
