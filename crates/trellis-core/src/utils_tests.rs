use crate::utils::{array_to_string, escape_whitespace, join, to_char_string, to_hex_string, to_map};

#[test]
fn join_with_separator() {
    assert_eq!(join(["expr", "term"], " | "), "expr | term");
    assert_eq!(join([1, 2, 3], ","), "1,2,3");
    assert_eq!(join(["only"], ", "), "only");
}

#[test]
fn join_empty() {
    assert_eq!(join(Vec::<String>::new(), ", "), "");
}

#[test]
fn array_to_string_brackets() {
    assert_eq!(array_to_string(["prog", "stat"]), "[prog, stat]");
    assert_eq!(array_to_string(Vec::<&str>::new()), "[]");
}

#[test]
fn escape_whitespace_control_chars() {
    assert_eq!(escape_whitespace("a\nb\tc\r", false), "a\\nb\\tc\\r");
}

#[test]
fn escape_whitespace_spaces() {
    assert_eq!(escape_whitespace("a b", false), "a b");
    assert_eq!(escape_whitespace("a b", true), "a\u{00B7}b");
}

#[test]
fn hex_string() {
    assert_eq!(to_hex_string(0), "0");
    assert_eq!(to_hex_string(255), "ff");
    assert_eq!(to_hex_string(-1), "ffffffff");
}

#[test]
fn char_string_skips_invalid() {
    assert_eq!(to_char_string(&[0x61, 0x62]), "ab");
    assert_eq!(to_char_string(&[0x61, 0xD800, 0x63]), "ac");
}

#[test]
fn to_map_keeps_first_index() {
    let map = to_map(&["prog", "expr", "prog"]);

    assert_eq!(map.len(), 2);
    assert_eq!(map["prog"], 0);
    assert_eq!(map["expr"], 1);
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["prog", "expr"]);
}
