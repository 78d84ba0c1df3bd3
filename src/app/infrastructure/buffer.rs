use fltk::text::TextBuffer;

/// Read the whole buffer into a `String`.
///
/// `TextBuffer::text()` copies FLTK's malloc'd C string but never frees it,
/// leaking a full copy of the document per call. Since the editor is read
/// on every keystroke, go through the C API and free the copy ourselves.
pub fn buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `buf` wraps a live Fl_Text_Buffer, and Fl_Text_Buffer_text
    // returns either null or a NUL-terminated string from malloc(). The
    // string is copied before being released with the matching free().
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if ptr.is_null() {
            return String::new();
        }
        let result = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}

/// Make the buffer show `text`. Returns false when it already did, so no
/// modify callback fires.
pub fn sync_buffer(buf: &mut TextBuffer, text: &str) -> bool {
    if buffer_text(buf) == text {
        return false;
    }
    buf.set_text(text);
    true
}
