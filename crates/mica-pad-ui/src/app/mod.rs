//! Top-level application tying together the document, editor, menus, and status bar.

mod file_ops;
mod menu_bar;
mod shortcuts;
mod status_bar;

use std::path::PathBuf;

use eframe::egui;

use mica_pad_config::{AppConfig, ThemeChoice, ThemeMode};
use mica_pad_core::{
    AutoHideScrollIndicator, Command, CommandTable, Document, DocumentState, TextEncoding,
};

use crate::dialogs::Dialogs;
use crate::editor::{EditorState, EditorTheme, EditorView};

/// Window title suffix.
const APP_TITLE: &str = "Notepad";

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// File to open on startup.
    pub file: Option<PathBuf>,
    /// Encoding label overriding the configured one.
    pub encoding: Option<String>,
    /// Theme overriding the configured one.
    pub theme: Option<ThemeChoice>,
    /// Config file to use instead of the per-user one.
    pub config_path: Option<PathBuf>,
}

/// The main application state.
pub struct App {
    pub doc: Document,
    pub commands: CommandTable,
    pub theme_choice: ThemeChoice,
    pub theme: EditorTheme,
    /// Encoding for documents opened or created from now on.
    pub encoding: TextEncoding,
    pub(crate) editor: EditorState,
    config: AppConfig,
    config_path: PathBuf,
    dialogs: Dialogs,
    exit_requested: bool,
    last_window_title: String,
}

impl App {
    /// Creates a new application instance with native dialogs.
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        let config_path = args.config_path.clone().unwrap_or_else(AppConfig::config_path);
        let config = AppConfig::load_or_create(&config_path);
        let dialogs = Dialogs::native(config.start_folder());
        Self::build(&cc.egui_ctx, args, config_path, config, dialogs)
    }

    /// Creates an application that talks to the user through `dialogs`.
    pub fn with_dialogs(
        cc: &eframe::CreationContext<'_>,
        args: StartupArgs,
        dialogs: Dialogs,
    ) -> Self {
        let config_path = args.config_path.clone().unwrap_or_else(AppConfig::config_path);
        let config = AppConfig::load_or_create(&config_path);
        Self::build(&cc.egui_ctx, args, config_path, config, dialogs)
    }

    fn build(
        ctx: &egui::Context,
        args: StartupArgs,
        config_path: PathBuf,
        config: AppConfig,
        dialogs: Dialogs,
    ) -> Self {
        let label = args.encoding.as_deref().unwrap_or(&config.encoding);
        let encoding = label.parse::<TextEncoding>().unwrap_or_else(|e| {
            tracing::warn!("{e}, falling back to UTF-8");
            TextEncoding::Utf8
        });

        let theme_choice = args.theme.unwrap_or(config.theme);
        let theme = resolve_theme(&config, theme_choice);
        theme.apply(ctx);

        let mut commands = CommandTable::default();
        for err in commands.apply_overrides(config.binding_pairs()) {
            tracing::warn!("Ignoring key binding from config: {err}");
        }

        let mut app = Self {
            doc: Document::with_encoding(encoding),
            commands,
            theme_choice,
            theme,
            encoding,
            editor: EditorState::new(),
            config,
            config_path,
            dialogs,
            exit_requested: false,
            last_window_title: String::new(),
        };

        if let Some(path) = args.file {
            app.open_path(&path);
        }
        app
    }

    /// True once the document was closed and the window asked to go away.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// The editor's scroll indicator as of the last frame.
    pub fn scroll_indicator(&self) -> &AutoHideScrollIndicator {
        &self.editor.indicator
    }

    /// Executes an editor command.
    pub fn run_command(&mut self, command: Command, ctx: &egui::Context) {
        if self.doc.state() == DocumentState::Closed {
            return;
        }
        tracing::debug!("Running command '{}'", command.id());
        match command {
            Command::New => self.new_document(),
            Command::Open => self.open_document(),
            Command::Save => self.save_document(false),
            Command::SaveAs => self.save_document(true),
            Command::Close => {
                if self.close_document() {
                    self.exit_requested = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        }
    }

    /// Switches to a new theme choice and applies it.
    pub fn set_theme_choice(&mut self, choice: ThemeChoice, ctx: &egui::Context) {
        self.theme_choice = choice;
        self.theme = resolve_theme(&self.config, choice);
        self.theme.apply(ctx);
        self.config.theme = choice;
        self.persist_config();
    }

    /// Updates the OS window title to show the document name.
    ///
    /// Only sends the viewport command when the title actually changes,
    /// to avoid triggering unnecessary repaints.
    fn update_window_title(&mut self, ctx: &egui::Context) {
        let title = window_title(&self.doc);
        if title != self.last_window_title {
            self.last_window_title.clone_from(&title);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }
    }
}

/// `"name - Notepad"`, with ` *` after the name while there are unsaved changes.
pub(crate) fn window_title(doc: &Document) -> String {
    let modified_marker = if doc.is_modified() { " *" } else { "" };
    format!("{}{modified_marker} - {APP_TITLE}", doc.title)
}

fn resolve_theme(config: &AppConfig, choice: ThemeChoice) -> EditorTheme {
    let system = match choice {
        ThemeChoice::System => detect_system_mode(),
        _ => None,
    };
    let mode = choice.resolve(system);
    EditorTheme::from_palette(config.palette(mode), mode, config.font_size)
}

fn detect_system_mode() -> Option<ThemeMode> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => Some(ThemeMode::Light),
        Ok(dark_light::Mode::Dark) => Some(ThemeMode::Dark),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("Could not detect the system theme: {e}");
            None
        }
    }
}

impl eframe::App for App {
    // Required by eframe 0.34; all drawing happens in `update`, which eframe still calls first.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.exit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.run_command(Command::Close, ctx);
        }

        self.handle_shortcuts(ctx);

        // Update the OS window title to reflect the document
        self.update_window_title(ctx);

        egui::TopBottomPanel::top("menu_bar")
            .frame(
                egui::Frame::new()
                    .fill(self.theme.status_bg)
                    .inner_margin(egui::Margin::symmetric(5, 2)),
            )
            .show(ctx, |ui| {
                self.show_menu_bar(ui, ctx);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(30.0)
            .frame(
                egui::Frame::new()
                    .fill(self.theme.status_bg)
                    .inner_margin(egui::Margin::symmetric(25, 2)),
            )
            .show(ctx, |ui| {
                self.show_status_bar(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.theme.bg_color))
            .show(ctx, |ui| {
                EditorView::new(&mut self.doc, &mut self.editor, &self.theme).show(ui);
            });
    }
}
