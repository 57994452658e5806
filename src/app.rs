use std::path::PathBuf;

use egui::{CentralPanel, SidePanel, TopBottomPanel};

use crate::config::settings::{BwSettings, BwTheme};
use crate::host::{self, FileFilter, MenuHost, NativeDialogs, WindowHost};
use crate::service::{MainService, ServiceError, SettingsField, SettingsOrigin};

const MAX_LOG_LINES: usize = 200;

/// Window handle owned by the shell. The service writes into it; the
/// frame loop forwards pending changes to the viewport.
#[derive(Default)]
pub struct ShellWindow {
    pending_title: Option<String>,
    dev_tools_open: bool,
}

impl ShellWindow {
    fn take_title(&mut self) -> Option<String> {
        self.pending_title.take()
    }
}

impl WindowHost for ShellWindow {
    fn set_title(&mut self, title: &str) {
        self.pending_title = Some(title.to_string());
    }

    fn set_dev_tools_visible(&mut self, visible: bool) {
        self.dev_tools_open = visible;
    }
}

/// Checkmark state of the application menu's settings entries.
#[derive(Default)]
pub struct ShellMenu {
    pub auto_save: bool,
    pub auto_load: bool,
    pub dev_tools: bool,
}

impl MenuHost for ShellMenu {
    fn set_checked(&mut self, item_id: &str, checked: bool) {
        match item_id {
            host::MENU_AUTO_SAVE => self.auto_save = checked,
            host::MENU_AUTO_LOAD => self.auto_load = checked,
            host::MENU_TOGGLE_DEV_TOOLS => self.dev_tools = checked,
            other => log::warn!("no menu item with id {other:?}"),
        }
    }
}

pub struct BashWizardApp {
    service: MainService<ShellWindow, ShellMenu, NativeDialogs>,
    settings: BwSettings,

    // Editor
    script_path: Option<PathBuf>,
    script_text: String,
    dirty: bool,

    // Error Notification
    last_error: Option<String>,

    // Dev tools panel
    debug_log: Vec<String>,
}

fn script_filters() -> Vec<FileFilter> {
    vec![
        FileFilter::new("Bash Scripts", &["sh", "bash"]),
        FileFilter::new("All files", &["*"]),
    ]
}

impl BashWizardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut service = MainService::new(ShellWindow::default(), NativeDialogs);
        service.set_menu(ShellMenu::default());

        let mut debug_log = Vec::new();
        let settings = match service.load_and_apply() {
            Ok(loaded) => {
                if let SettingsOrigin::Defaulted(cause) = &loaded.origin {
                    debug_log.push(format!("settings reset to defaults: {cause}"));
                }
                loaded.settings
            }
            Err(err) => {
                log::error!("initial settings load failed: {err}");
                BwSettings::default()
            }
        };

        Self {
            service,
            settings,
            script_path: None,
            script_text: String::new(),
            dirty: false,
            last_error: None,
            debug_log,
        }
    }

    fn log(&mut self, msg: String) {
        log::info!("{msg}");
        self.debug_log.push(msg);
        if self.debug_log.len() > MAX_LOG_LINES {
            let excess = self.debug_log.len() - MAX_LOG_LINES;
            self.debug_log.drain(..excess);
        }
    }

    fn show_error(&mut self, msg: String) {
        log::error!("{msg}");
        self.last_error = Some(msg);
    }

    fn open_script(&mut self) {
        match self.service.open_file("Open Bash Script", &script_filters()) {
            Ok(path) => match self.service.read_text(&path) {
                Ok(text) => {
                    self.log(format!("opened {}", path.display()));
                    self.script_text = text;
                    self.script_path = Some(path);
                    self.dirty = false;
                }
                Err(err) => self.show_error(format!("Could not open file: {err}")),
            },
            Err(ServiceError::Cancelled) => {}
            Err(err) => self.show_error(err.to_string()),
        }
    }

    fn save_script(&mut self) {
        let Some(path) = self.script_path.clone() else {
            self.save_script_as();
            return;
        };
        let contents = self.script_text.clone();
        match self.service.write_text(&path, &contents) {
            Ok(()) => {
                self.log(format!("saved {}", path.display()));
                self.dirty = false;
            }
            Err(err) => self.show_error(format!("Could not save file: {err}")),
        }
    }

    fn save_script_as(&mut self) {
        match self.service.save_file("Save Bash Script", &script_filters()) {
            Ok(path) => {
                self.script_path = Some(path);
                self.save_script();
            }
            Err(ServiceError::Cancelled) => {}
            Err(err) => self.show_error(err.to_string()),
        }
    }

    fn set_setting(&mut self, field: SettingsField) {
        if let Err(err) = self.service.update_setting(field) {
            self.show_error(format!("Could not update settings: {err}"));
            return;
        }
        field.apply_to(&mut self.settings);
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open…").clicked() {
                    ui.close_menu();
                    self.open_script();
                }
                if ui.button("Save").clicked() {
                    ui.close_menu();
                    self.save_script();
                }
                if ui.button("Save As…").clicked() {
                    ui.close_menu();
                    self.save_script_as();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Options", |ui| {
                // Checkmarks reflect what the service last pushed, not
                // whatever the shell thinks it asked for.
                let (mut auto_save, mut auto_load, mut dev_tools) = self
                    .service
                    .menu()
                    .map(|m| (m.auto_save, m.auto_load, m.dev_tools))
                    .unwrap_or_default();

                if ui.checkbox(&mut auto_save, "Auto Save").changed() {
                    self.set_setting(SettingsField::AutoSave(auto_save));
                }
                if ui
                    .checkbox(&mut auto_load, "Always Load Changed File")
                    .changed()
                {
                    self.set_setting(SettingsField::AlwaysLoadChangedFile(auto_load));
                }
                if ui.checkbox(&mut dev_tools, "Show Debugger").changed() {
                    self.set_setting(SettingsField::ShowDebugger(dev_tools));
                }

                ui.separator();
                ui.menu_button("Theme", |ui| {
                    for (theme, label) in [(BwTheme::Light, "Light"), (BwTheme::Dark, "Dark")] {
                        if ui
                            .selectable_label(self.settings.theme == theme, label)
                            .clicked()
                        {
                            self.set_setting(SettingsField::Theme(theme));
                        }
                    }
                });
            });

            if self.dirty {
                ui.label("● unsaved changes");
            }
        });
    }
}

impl eframe::App for BashWizardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(match self.settings.theme {
            BwTheme::Light => egui::Visuals::light(),
            BwTheme::Dark => egui::Visuals::dark(),
        });

        if let Some(title) = self.service.window_mut().take_title() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }

        TopBottomPanel::top("menu-bar").show(ctx, |ui| {
            self.menu_bar(ui, ctx);
        });

        if let Some(err) = self.last_error.clone() {
            TopBottomPanel::bottom("error-bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::LIGHT_RED, &err);
                    if ui.small_button("✕").clicked() {
                        self.last_error = None;
                    }
                });
            });
        }

        if self.service.window().dev_tools_open {
            SidePanel::right("dev-tools")
                .default_width(280.0)
                .show(ctx, |ui| {
                    ui.heading("Debugger");
                    ui.separator();
                    egui::ScrollArea::vertical()
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for line in &self.debug_log {
                                ui.monospace(line);
                            }
                        });
                });
        }

        CentralPanel::default().show(ctx, |ui| {
            let editor = egui::TextEdit::multiline(&mut self.script_text)
                .code_editor()
                .desired_width(f32::INFINITY)
                .desired_rows(30);
            if ui.add_sized(ui.available_size(), editor).changed() {
                self.dirty = true;
                if self.settings.auto_save && self.script_path.is_some() {
                    self.save_script();
                }
            }
        });
    }
}
