use super::*;

#[test]
fn default_whitespace_is_space_only() {
    let set = WhitespaceSet::default();
    assert!(set.matches(b' '));
    assert!(!set.matches(b'\t'));
    assert!(!set.matches(b'\n'));
    assert!(!set.matches(b'\r'));
}

#[test]
fn json_whitespace_covers_all_four() {
    for byte in [b' ', b'\t', b'\n', b'\r'] {
        assert!(WhitespaceSet::JSON.matches(byte), "{byte:#04x}");
    }
}

#[test]
fn whitespace_never_matches_other_bytes() {
    for byte in 0..=u8::MAX {
        if matches!(byte, b' ' | b'\t' | b'\n' | b'\r') {
            continue;
        }
        assert!(!WhitespaceSet::JSON.matches(byte), "{byte:#04x}");
    }
}

#[test]
fn custom_whitespace_set() {
    let set = WhitespaceSet::SPACE | WhitespaceSet::LINE_FEED;
    assert!(set.matches(b'\n'));
    assert!(!set.matches(b'\t'));
}

#[test]
fn defaults_preserve_established_behavior() {
    let options = LexerOptions::default();
    assert_eq!(options.whitespace, WhitespaceSet::SPACE);
    assert_eq!(options.leading_whitespace, LeadingWhitespace::Halt);
    assert!(options.allow_plus_sign);
    assert_eq!(options.max_depth, None);
}

#[test]
fn rfc8259_preset() {
    let options = LexerOptions::rfc8259();
    assert_eq!(options.whitespace, WhitespaceSet::JSON);
    assert_eq!(options.leading_whitespace, LeadingWhitespace::Lex);
    assert!(!options.allow_plus_sign);
}

#[test]
fn builder_setters_chain() {
    let options = LexerOptions::default()
        .with_whitespace(WhitespaceSet::JSON)
        .with_leading_whitespace(LeadingWhitespace::Lex)
        .with_plus_sign(false)
        .with_max_depth(Some(4));
    assert_eq!(
        options,
        LexerOptions {
            max_depth: Some(4),
            ..LexerOptions::rfc8259()
        }
    );
}
