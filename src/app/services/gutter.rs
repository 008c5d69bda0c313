//! Line-number gutter sizing.
//!
//! FLTK paints the numbers itself; all we own is whether the margin is shown
//! and how wide it is. The width follows the number of digits in the line
//! count, so it only changes when a line count crosses a power of ten.

/// Horizontal padding added to the digit run.
pub const GUTTER_PADDING: i32 = 10;

/// Decimal digits needed to print `max(1, line_count)`.
pub fn digit_count(line_count: usize) -> u32 {
    line_count.max(1).ilog10() + 1
}

/// Pixel width for `digits` digits, given the advance of the glyph "9" in
/// the gutter font.
fn width_for_digits(digits: u32, digit_advance: f64) -> i32 {
    GUTTER_PADDING + (digits as f64 * digit_advance).ceil() as i32
}

/// Visibility and cached width of the gutter.
#[derive(Debug, Clone, PartialEq)]
pub struct LineNumberGutter {
    visible: bool,
    digits: u32,
    digit_advance: f64,
}

impl LineNumberGutter {
    pub fn new(visible: bool, digit_advance: f64) -> Self {
        Self {
            visible,
            digits: 1,
            digit_advance,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Width the widget should currently have; 0 when hidden.
    pub fn width(&self) -> i32 {
        if !self.visible {
            return 0;
        }
        width_for_digits(self.digits, self.digit_advance)
    }

    /// Record a new line count. Returns the new width only when it changed.
    pub fn on_line_count(&mut self, line_count: usize) -> Option<i32> {
        let digits = digit_count(line_count);
        if digits == self.digits {
            return None;
        }
        self.digits = digits;
        if self.visible { Some(self.width()) } else { None }
    }

    /// The font changed; returns the width to apply.
    pub fn set_digit_advance(&mut self, digit_advance: f64) -> i32 {
        self.digit_advance = digit_advance;
        self.width()
    }

    /// Flip visibility; returns the width to apply.
    pub fn toggle(&mut self) -> i32 {
        self.set_visible(!self.visible)
    }

    pub fn set_visible(&mut self, visible: bool) -> i32 {
        self.visible = visible;
        self.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(1), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(100), 3);
        assert_eq!(digit_count(123_456), 6);
    }

    #[test]
    fn test_gutter_width_formula() {
        let mut gutter = LineNumberGutter::new(true, 8.0);
        assert_eq!(gutter.width(), 18);
        gutter.on_line_count(42);
        assert_eq!(gutter.width(), 26);

        let mut gutter = LineNumberGutter::new(true, 7.0);
        gutter.on_line_count(1000);
        assert_eq!(gutter.width(), 38);

        // fractional advances round up so the last digit is never clipped
        let gutter = LineNumberGutter::new(true, 7.2);
        assert_eq!(gutter.width(), 18);
    }

    #[test]
    fn test_width_only_reported_on_digit_change() {
        let mut gutter = LineNumberGutter::new(true, 8.0);
        assert_eq!(gutter.width(), 18);
        assert_eq!(gutter.on_line_count(5), None);
        assert_eq!(gutter.on_line_count(9), None);
        assert_eq!(gutter.on_line_count(10), Some(26));
        assert_eq!(gutter.on_line_count(57), None);
        assert_eq!(gutter.on_line_count(3), Some(18));
    }

    #[test]
    fn test_hidden_gutter_has_zero_width() {
        let mut gutter = LineNumberGutter::new(false, 8.0);
        assert_eq!(gutter.width(), 0);
        assert_eq!(gutter.on_line_count(250), None);
        // shown again with the digits tracked while hidden
        assert_eq!(gutter.toggle(), 34);
        assert!(gutter.is_visible());
        assert_eq!(gutter.toggle(), 0);
        assert!(!gutter.is_visible());
    }

    #[test]
    fn test_font_change_recomputes_width() {
        let mut gutter = LineNumberGutter::new(true, 8.0);
        gutter.on_line_count(12);
        assert_eq!(gutter.set_digit_advance(10.0), 30);
    }
}
