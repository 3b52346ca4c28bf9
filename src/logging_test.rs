use super::*;

#[test]
fn missing_level_defaults_to_info() {
    assert_eq!(level_from(None), (log::Level::Info, true));
}

#[test]
fn level_names_parse_case_insensitively() {
    assert_eq!(level_from(Some("debug")), (log::Level::Debug, true));
    assert_eq!(level_from(Some("WARN")), (log::Level::Warn, true));
}

#[test]
fn unknown_level_falls_back_to_info() {
    assert_eq!(level_from(Some("loud")), (log::Level::Info, false));
}
