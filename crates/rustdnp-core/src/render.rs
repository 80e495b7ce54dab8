//! Helpers for the indented text dump.

use alloc::string::{String, ToString};

use crate::object::range::RangeField;

/// Prepend `pad` to every line of `text`.
pub(crate) fn indent(text: &str, pad: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, line) in text.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(pad);
        out.push_str(line);
    }
    out
}

/// Render a multi-line block as a `- ` list entry with continuation lines
/// aligned under the marker.
pub(crate) fn list_item(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for (index, line) in text.lines().enumerate() {
        if index == 0 {
            out.push_str("  - ");
        } else {
            out.push_str("\n    ");
        }
        out.push_str(line);
    }
    out
}

/// The range-field block of an object dump, absent for `NoRange`.
pub(crate) fn range_lines(range: &RangeField) -> Option<String> {
    if matches!(range, RangeField::NoRange) {
        return None;
    }
    Some(indent(&range.to_string(), "  "))
}

#[cfg(test)]
mod tests {
    use super::{indent, list_item};

    #[test]
    fn indent_every_line() {
        assert_eq!(indent("a\nb", "  "), "  a\n  b");
    }

    #[test]
    fn list_item_marks_first_line() {
        assert_eq!(list_item("a\nb"), "  - a\n    b");
    }
}
