use fltk::{
    enums::Color,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::status_bar::StatusBar;

/// Every colour the editor window uses, for one appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text_bg: Color,
    pub text_fg: Color,
    pub cursor: Color,
    pub selection: Color,
    pub gutter_bg: Color,
    pub gutter_fg: Color,
    /// Window, menu bar and status bar background.
    pub chrome_bg: Color,
    pub chrome_fg: Color,
    pub menu_hover: Color,
}

impl Palette {
    /// Light grey gutter with black numbers, white page.
    pub fn light() -> Self {
        Self {
            text_bg: Color::White,
            text_fg: Color::Black,
            cursor: Color::Black,
            selection: Color::from_rgb(173, 216, 230),
            gutter_bg: Color::from_rgb(211, 211, 211),
            gutter_fg: Color::Black,
            chrome_bg: Color::from_rgb(240, 240, 240),
            chrome_fg: Color::Black,
            menu_hover: Color::from_rgb(200, 200, 200),
        }
    }

    /// Charcoal page; the gutter stays a step lighter than the text so the
    /// margin still reads as a separate strip.
    pub fn dark() -> Self {
        Self {
            text_bg: Color::from_rgb(32, 33, 36),
            text_fg: Color::from_rgb(222, 222, 218),
            cursor: Color::from_rgb(250, 250, 250),
            selection: Color::from_rgb(58, 79, 110),
            gutter_bg: Color::from_rgb(52, 54, 58),
            gutter_fg: Color::from_rgb(160, 163, 168),
            chrome_bg: Color::from_rgb(41, 42, 45),
            chrome_fg: Color::from_rgb(222, 222, 218),
            menu_hover: Color::from_rgb(66, 68, 72),
        }
    }

    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark { Self::dark() } else { Self::light() }
    }
}

pub fn apply_theme(
    editor: &mut TextEditor,
    window: &mut Window,
    menu: &mut MenuBar,
    status_bar: &mut StatusBar,
    is_dark: bool,
) {
    let palette = Palette::for_mode(is_dark);

    editor.set_color(palette.text_bg);
    editor.set_text_color(palette.text_fg);
    editor.set_cursor_color(palette.cursor);
    editor.set_selection_color(palette.selection);
    editor.set_linenumber_bgcolor(palette.gutter_bg);
    editor.set_linenumber_fgcolor(palette.gutter_fg);

    window.set_color(palette.chrome_bg);
    window.set_label_color(palette.chrome_fg);
    menu.set_color(palette.chrome_bg);
    menu.set_text_color(palette.chrome_fg);
    menu.set_selection_color(palette.menu_hover);
    status_bar.apply_palette(&palette);

    editor.redraw();
    window.redraw();
    menu.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    let on: i32 = if is_dark { 1 } else { 0 };
    // 20 = DWMWA_USE_IMMERSIVE_DARK_MODE (Windows 10 2004+), 19 on 1809-1903
    for attribute in [20, 19] {
        // SAFETY: the HWND belongs to a shown FLTK window and `on` outlives the call.
        let result = unsafe {
            let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
            DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            )
        };
        if let Err(e) = result {
            tracing::debug!("DwmSetWindowAttribute({}) failed: {}", attribute, e);
        }
    }
}
