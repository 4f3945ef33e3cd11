use hcl_emit::format::{to_string, Format};
use pretty_assertions::assert_eq;

#[track_caller]
pub fn assert_format<T: Format>(value: T, expected: &str) {
    assert_eq!(to_string(&value).unwrap(), expected);
}
