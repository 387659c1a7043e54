//! NUL-terminated scratch buffers for passing labels to the C API.

use smallvec::SmallVec;
use std::fmt;
use std::os::raw::c_char;

/// Stack-allocated for labels up to 127 bytes; longer ones spill to the heap.
pub(crate) type Scratch = SmallVec<[u8; 128]>;

/// Copies `s` into a NUL-terminated buffer.
///
/// Dear ImGui cannot represent interior NULs, so the string is truncated at
/// the first one rather than silently handing the toolkit a shorter ID than
/// the caller compared against elsewhere.
pub(crate) fn scratch(s: &str) -> Scratch {
    let bytes = match s.bytes().position(|b| b == 0) {
        Some(i) => {
            tracing::warn!(len = s.len(), truncated_at = i, "label contains interior NUL");
            &s.as_bytes()[..i]
        }
        None => s.as_bytes(),
    };
    let mut buf = Scratch::with_capacity(bytes.len() + 1);
    buf.extend_from_slice(bytes);
    buf.push(0);
    buf
}

/// Renders `fmt::Arguments` into a NUL-terminated buffer.
///
/// Literal-only arguments avoid the intermediate `String`.
pub(crate) fn format(args: fmt::Arguments<'_>) -> Scratch {
    match args.as_str() {
        Some(s) => scratch(s),
        None => scratch(&args.to_string()),
    }
}

/// Pointer to the buffer contents as the C API expects them.
pub(crate) fn as_ptr(buf: &Scratch) -> *const c_char {
    buf.as_ptr().cast()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_terminator() {
        let buf = scratch("abc");
        assert_eq!(buf.as_slice(), b"abc\0");
    }

    #[test]
    fn empty_string_is_just_the_terminator() {
        assert_eq!(scratch("").as_slice(), b"\0");
    }

    #[test]
    fn interior_nul_truncates() {
        assert_eq!(scratch("ab\0cd").as_slice(), b"ab\0");
    }

    #[test]
    fn long_label_spills_without_losing_the_terminator() {
        let s = "x".repeat(300);
        let buf = scratch(&s);
        assert_eq!(buf.len(), 301);
        assert_eq!(buf[300], 0);
    }

    #[test]
    fn format_renders_arguments() {
        let buf = format(format_args!("node {}", 7));
        assert_eq!(buf.as_slice(), b"node 7\0");
    }
}
