#![allow(clippy::unwrap_used)]

use super::*;
use jsonlex_core::lex_with;
use pretty_assertions::assert_eq;

fn pull_tokens(input: &[u8], options: LexerOptions) -> Vec<(TokenKind, Span, Vec<u8>)> {
    lex_with(input, options)
        .into_iter()
        .map(|t| (t.kind, t.span, t.value.to_vec()))
        .collect()
}

fn push_tokens(tokens: &[StreamToken]) -> Vec<(TokenKind, Span, Vec<u8>)> {
    tokens
        .iter()
        .map(|t| (t.kind, t.span, t.value().to_vec()))
        .collect()
}

#[test]
fn stream_matches_pull_lexer() {
    let input = br#"{"a": [1,2,3 ],"b":"hi" }"#;
    let stream = TokenStream::spawn(&input[..], LexerOptions::default()).unwrap();
    let tokens = stream.collect_tokens().unwrap();
    assert_eq!(push_tokens(&tokens), pull_tokens(input, LexerOptions::default()));
}

#[test]
fn stream_reports_illegal_last() {
    let stream = TokenStream::spawn(b"[1,]".to_vec(), LexerOptions::default()).unwrap();
    let tokens = stream.collect_tokens().unwrap();
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Illegal);
    assert_eq!(last.value(), b"]");
}

#[test]
fn stream_honours_options() {
    let input = b"  null ";
    let options = LexerOptions::rfc8259();
    let stream = TokenStream::spawn(&input[..], options).unwrap();
    let tokens = stream.collect_tokens().unwrap();
    assert_eq!(push_tokens(&tokens), pull_tokens(input, options));
    assert_eq!(tokens[1].kind, TokenKind::Null);
}

#[test]
fn empty_input_yields_nothing() {
    let stream = TokenStream::spawn(Vec::new(), LexerOptions::default()).unwrap();
    assert!(stream.collect_tokens().unwrap().is_empty());
}

#[test]
fn token_values_view_shared_source() {
    let stream = TokenStream::spawn(&b"[true]"[..], LexerOptions::default()).unwrap();
    let tokens = stream.collect_tokens().unwrap();
    assert_eq!(tokens[1].value(), b"true");
    let base = tokens[0].value().as_ptr();
    assert_eq!(tokens[1].value().as_ptr(), base.wrapping_add(1));
    assert_eq!(tokens[2].value().as_ptr(), base.wrapping_add(5));
}

#[test]
fn early_drop_releases_worker() {
    let input: Vec<u8> = std::iter::once(b'[')
        .chain((0..10_000).flat_map(|_| b"1,".iter().copied()))
        .chain(b"1]".iter().copied())
        .collect();
    let mut stream = TokenStream::spawn(input, LexerOptions::default()).unwrap();
    let first = stream.next().unwrap();
    assert_eq!(first.kind, TokenKind::ArrayStart);
    // Dropping joins the worker; this must not block.
    drop(stream);
}

#[test]
fn cancel_stops_delivery() {
    let mut stream = TokenStream::spawn(&b"[1,2,3]"[..], LexerOptions::default()).unwrap();
    assert_eq!(stream.next().map(|t| t.kind), Some(TokenKind::ArrayStart));
    stream.cancel();
    assert!(stream.next().is_none());
    assert!(stream.next().is_none());
}

#[test]
fn cancel_after_completion_is_harmless() {
    let mut stream = TokenStream::spawn(&b"1"[..], LexerOptions::default()).unwrap();
    assert_eq!(stream.by_ref().count(), 1);
    stream.cancel();
    assert!(stream.next().is_none());
}

#[test]
fn from_reader_surfaces_read_errors() {
    let result = TokenStream::from_reader(FailingReader, LexerOptions::default());
    assert!(matches!(result, Err(crate::Error::Io(_))));
}

/// Reader that fails on the first read.
struct FailingReader;

impl std::io::Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::InvalidData, "bad"))
    }
}

#[test]
fn from_reader_reads_everything() {
    let input = br#"{"k":false}"#;
    let stream = TokenStream::from_reader(&input[..], LexerOptions::default()).unwrap();
    let tokens = stream.collect_tokens().unwrap();
    let joined: Vec<u8> = tokens.iter().flat_map(|t| t.value().to_vec()).collect();
    assert_eq!(joined, input);
}

#[test]
fn stream_token_debug() {
    let stream = TokenStream::spawn(&b"null"[..], LexerOptions::default()).unwrap();
    let tokens = stream.collect_tokens().unwrap();
    assert_eq!(format!("{:?}", tokens[0]), "Null(\"null\") @ 0..4");
}
