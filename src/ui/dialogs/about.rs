use fltk::{
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::ui::theme::Palette;
use crate::app::domain::document::APP_NAME;

pub const ABOUT_DESCRIPTION: &str = "A simple text editor built with Rust and FLTK.";
pub const ABOUT_COPYRIGHT: &str = "\u{00a9} 2025";

pub fn about_title() -> String {
    format!("About {}", APP_NAME)
}

pub fn version_line(version: &str) -> String {
    format!("Version {}", version)
}

/// Show the modal About dialog and block until it is closed.
pub fn show_about_dialog(is_dark: bool) {
    let version = env!("CARGO_PKG_VERSION");
    let title = about_title();
    let mut dialog = Window::default()
        .with_size(360, 220)
        .center_screen();
    dialog.set_label(&title);
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 340, 200, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(8);

    let mut name_frame = Frame::default();
    name_frame.set_label(APP_NAME);
    name_frame.set_label_size(20);
    name_frame.set_label_font(Font::HelveticaBold);
    flex.fixed(&name_frame, 36);

    let mut version_frame = Frame::default();
    version_frame.set_label(&version_line(version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 24);

    let mut desc_frame = Frame::default();
    desc_frame.set_label(ABOUT_DESCRIPTION);
    desc_frame.set_label_size(12);
    desc_frame.set_align(Align::Center | Align::Inside | Align::Wrap);

    let mut copyright_frame = Frame::default();
    copyright_frame.set_label(ABOUT_COPYRIGHT);
    copyright_frame.set_label_size(11);
    flex.fixed(&copyright_frame, 20);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 30);

    flex.end();
    dialog.end();

    let palette = Palette::for_mode(is_dark);
    dialog.set_color(palette.chrome_bg);
    for frame in [&mut name_frame, &mut version_frame, &mut copyright_frame] {
        frame.set_label_color(palette.chrome_fg);
    }
    desc_frame.set_label_color(palette.gutter_fg);

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_title() {
        assert_eq!(about_title(), "About Gapp Text Editor");
    }

    #[test]
    fn test_version_line_uses_crate_version() {
        assert_eq!(version_line(env!("CARGO_PKG_VERSION")), "Version 1.0.0");
    }
}
