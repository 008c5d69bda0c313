use fltk::text::TextBuffer;

/// Read the whole text of a `TextBuffer` without leaking FLTK's copy.
///
/// `TextBuffer::text()` goes through `Fl_Text_Buffer_text()`, which hands back
/// a `malloc()`'d C string that the Rust wrapper copies and never frees. Saving
/// a large file would leak the full buffer size each time, so the FFI call is
/// made here directly and the C allocation released after copying.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY:
    //   1. buf.as_ptr() is the live FLTK buffer owned by `buf`
    //   2. Fl_Text_Buffer_text returns a malloc'd, null-terminated string (or null)
    //   3. the string is copied out before free() releases it
    // FLTK is initialised before any TextBuffer exists (App is created first).
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let result = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}

/// Number of lines in the buffer, counting a trailing partial line.
/// An empty buffer has one line.
pub fn buffer_line_count(buf: &TextBuffer) -> usize {
    lines_from_newlines(buf.count_lines(0, buf.length()))
}

/// FLTK counts newline characters; the gutter numbers lines.
fn lines_from_newlines(newlines: i32) -> usize {
    newlines.max(0) as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_has_one_line() {
        assert_eq!(lines_from_newlines(0), 1);
    }

    #[test]
    fn test_trailing_partial_line_counts() {
        // "a\nb" has one newline and two lines
        assert_eq!(lines_from_newlines(1), 2);
        assert_eq!(lines_from_newlines(999), 1000);
    }

    #[test]
    fn test_negative_count_is_clamped() {
        assert_eq!(lines_from_newlines(-3), 1);
    }
}
