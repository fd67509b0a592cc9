use crate::Colors;

#[test]
fn off_leaves_text_alone() {
    let c = Colors::default();

    assert!(!c.is_enabled());
    assert_eq!(c.rule("expr"), "expr");
    assert_eq!(c.error("error"), "error");
}

#[test]
fn on_wraps_each_fragment_kind() {
    let c = Colors::new(true);

    assert_eq!(c, Colors::ON);
    assert_eq!(c.rule("expr"), "\x1b[34mexpr\x1b[0m");
    assert_eq!(c.token("a"), "\x1b[32ma\x1b[0m");
    assert_eq!(c.error("error"), "\x1b[31merror\x1b[0m");
    assert_eq!(c.dim("@0"), "\x1b[2m@0\x1b[0m");
}
