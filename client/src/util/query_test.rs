use super::*;

#[test]
fn parse_tab_reads_numeric_value() {
    assert_eq!(parse_tab(Some("2")), 2);
    assert_eq!(parse_tab(Some(" 3 ")), 3);
}

#[test]
fn parse_tab_defaults_when_absent() {
    assert_eq!(parse_tab(None), 0);
}

#[test]
fn parse_tab_defaults_when_invalid() {
    for raw in ["", "abc", "-1", "2.5", "1e3", "99999999999"] {
        assert_eq!(parse_tab(Some(raw)), 0, "expected 0 for {raw:?}");
    }
}

#[test]
fn with_tab_appends_query() {
    assert_eq!(with_tab("/profile/payment", 1), "/profile/payment?tab=1");
}
