#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use clap::Parser;
use fltk::{app, prelude::*};

use gapp_text_editor::app::domain::settings::{AppSettings, ThemeMode};
use gapp_text_editor::app::infrastructure::logging;
use gapp_text_editor::app::state::AppState;
use gapp_text_editor::app::{detect_system_dark_mode, Message};
use gapp_text_editor::cli::Cli;
use gapp_text_editor::ui::main_window::build_main_window;
use gapp_text_editor::ui::menu::build_menu;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let dark_mode = match settings.theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };
    let show_linenumbers = settings.session_line_numbers(cli.no_line_numbers);

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, show_linenumbers, dark_mode);

    let mut state = AppState::new(widgets, sender, settings, dark_mode, show_linenumbers);
    state.window.show();
    state.apply_appearance();

    if let Some(path) = cli.file {
        state.open_file(path);
    }

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        tracing::trace!(?msg, "dispatch");
        match msg {
            Message::FileNew => state.file_new(),
            Message::FileOpen => state.file_open(),
            Message::FileSave => state.file_save(),
            Message::FileSaveAs => state.file_save_as(),
            Message::FileQuit | Message::WindowClose => {
                if state.file_quit() {
                    app.quit();
                }
            }

            Message::EditUndo => state.edit_undo(),
            Message::EditRedo => state.edit_redo(),
            Message::EditCut => state.edit_cut(),
            Message::EditCopy => state.edit_copy(),
            Message::EditPaste => state.edit_paste(),
            Message::SelectAll => state.select_all(),

            Message::ToggleLineNumbers => state.toggle_line_numbers(),
            Message::ToggleDarkMode => state.toggle_dark_mode(),

            Message::ShowAbout => state.show_about(),

            Message::BufferModified => state.on_buffer_modified(),
            Message::StatusExpired(generation) => state.on_status_expired(generation),
        }
    }
    tracing::info!("exiting");
}
