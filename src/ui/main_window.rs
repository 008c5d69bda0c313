use fltk::{
    app::{self, Sender},
    enums::{Align, Event},
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::document::APP_NAME;
use crate::app::domain::messages::Message;
use super::status_bar::{StatusBar, STATUS_BAR_HEIGHT};
use super::theme::Palette;

pub const MENU_HEIGHT: i32 = 30;
const MIN_WIDTH: i32 = 320;
const MIN_HEIGHT: i32 = 240;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub status_bar: StatusBar,
}

/// Initial window size for a screen of `screen_w` x `screen_h`:
/// nearly full screen, leaving room for panels and decorations.
pub fn initial_window_size(screen_w: f64, screen_h: f64) -> (i32, i32) {
    let w = (screen_w as i32 - 20).max(MIN_WIDTH);
    let h = (screen_h as i32 - 75).max(MIN_HEIGHT);
    (w, h)
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let (screen_w, screen_h) = app::screen_size();
    let (w, h) = initial_window_size(screen_w, screen_h);
    tracing::debug!(screen_w, screen_h, w, h, "sizing main window");

    let mut wind = Window::new(0, 0, w, h, None);
    wind.set_label(&format!("Untitled - {}", APP_NAME));
    wind.set_xclass("gapp-text-editor");

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    let palette = Palette::light();
    text_editor.set_linenumber_bgcolor(palette.gutter_bg);
    text_editor.set_linenumber_fgcolor(palette.gutter_fg);
    text_editor.set_linenumber_align(Align::Left | Align::Inside);

    let status_bar = StatusBar::new();
    flex.fixed(&status_bar.frame, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // The close button goes through the same path as File/Quit.
    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        menu,
        text_editor,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_size_leaves_margin() {
        assert_eq!(initial_window_size(1920.0, 1080.0), (1900, 1005));
    }

    #[test]
    fn test_initial_size_clamped_on_tiny_screens() {
        assert_eq!(initial_window_size(200.0, 100.0), (320, 240));
    }
}
