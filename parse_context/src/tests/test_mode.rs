use crate::mode::{Mode, ParseOptions};

#[test]
fn test_mode_flags() {
    assert!(!Mode::default().contains(Mode::PARSE_COMMENTS));
    assert!(Mode::PARSE_COMMENTS.contains(Mode::PARSE_COMMENTS));
    assert!(!Mode::PARSE_COMMENTS.contains(Mode::empty()));

    let mut mode = Mode::empty();
    mode |= Mode::PARSE_COMMENTS;
    assert_eq!(mode, Mode::PARSE_COMMENTS);
    assert_eq!((Mode::empty() | Mode::PARSE_COMMENTS).bits(), 1);
}

#[test]
fn test_options_from_json() {
    let opts: ParseOptions = serde_json::from_str(r#"{"includeComments": true}"#).unwrap();
    assert!(opts.include_comments);
    assert_eq!(Mode::from(opts), Mode::PARSE_COMMENTS);

    let opts: ParseOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, ParseOptions::default());
    assert_eq!(Mode::from(&opts), Mode::empty());
}
