use super::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new(b"abc");
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new(b"abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let mut cursor = Cursor::new(b"abcdef");
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_n_clamps_at_end() {
    let mut cursor = Cursor::new(b"ab");
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new(b"hi");
    assert_eq!(cursor.current(), b'h');
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_eof());
}

// === EOF Detection ===

#[test]
fn is_eof_on_empty_source() {
    let cursor = Cursor::new(b"");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_nul_is_not_eof() {
    let mut cursor = Cursor::new(b"a\0b");
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Slicing ===

#[test]
fn slice_from_returns_view() {
    let input = b"null,true";
    let mut cursor = Cursor::new(input);
    cursor.advance_n(4);
    assert_eq!(cursor.slice_from(0), b"null");
    assert_eq!(cursor.rest(), b",true");
    cursor.advance_n(5);
    assert_eq!(cursor.slice_from(4), b",true");
    assert_eq!(cursor.slice_from(9), b"");
}

#[test]
fn starts_with_checks_remaining_input() {
    let mut cursor = Cursor::new(b"[false]");
    assert!(!cursor.starts_with(b"false"));
    cursor.advance();
    assert!(cursor.starts_with(b"false"));
}

// === Bulk Scanning ===

#[test]
fn eat_digits_counts_consumed() {
    let mut cursor = Cursor::new(b"12345x");
    assert_eq!(cursor.eat_digits(), 5);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = Cursor::new(b"   ");
    cursor.eat_while(|_| true);
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_finds_quote() {
    let mut cursor = Cursor::new(b"abc\"rest");
    assert_eq!(cursor.skip_to_string_delim(), b'"');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_string_delim_finds_backslash() {
    let mut cursor = Cursor::new(b"ab\\n\"");
    assert_eq!(cursor.skip_to_string_delim(), b'\\');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_string_delim_prefers_earlier_control_byte() {
    let mut cursor = Cursor::new(b"a\tb\"");
    assert_eq!(cursor.skip_to_string_delim(), b'\t');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn skip_to_string_delim_reports_interior_nul() {
    let mut cursor = Cursor::new(b"a\0\"");
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn skip_to_string_delim_runs_to_eof() {
    let mut cursor = Cursor::new(b"no closing quote");
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn advance_to_end_consumes_everything() {
    let mut cursor = Cursor::new(b"{\"a\":");
    cursor.advance_to_end();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.rest(), b"");
}
