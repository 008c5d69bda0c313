pub mod about;

use fltk::{app, prelude::*, window::Window};

/// Run a dialog's event loop, automatically closing the dialog if the app
/// is quitting (e.g. the main window is closed while a dialog is open).
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        if !app::wait() {
            break;
        }
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}
