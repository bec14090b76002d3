use skiff::http::parser::{ParseError, parse_request};
use skiff::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let raw = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (req, consumed) = parse_request(raw).unwrap().unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.target, "/");
    assert_eq!(req.headers.get("host").unwrap(), "example.com");
    assert!(req.body.is_empty());
    assert_eq!(consumed, raw.len());
}

#[test]
fn test_parse_post_request_with_body() {
    let raw = b"POST /files/notes.txt HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let (req, consumed) = parse_request(raw).unwrap().unwrap();

    assert_eq!(req.method, Method::POST);
    assert_eq!(req.target, "/files/notes.txt");
    assert_eq!(req.body, b"hello".to_vec());
    assert_eq!(consumed, raw.len());
}

#[test]
fn test_parse_target_with_query_string_is_kept_raw() {
    let raw = b"GET /echo/search?q=rust&page=2 HTTP/1.1\r\n\r\n";
    let (req, _) = parse_request(raw).unwrap().unwrap();

    assert_eq!(req.target, "/echo/search?q=rust&page=2");
}

#[test]
fn test_parse_header_keys_lowercased_and_values_trimmed() {
    let raw = b"GET / HTTP/1.1\r\nUser-Agent:   curl/8.0  \r\nACCEPT-ENCODING: gzip\r\n\r\n";
    let (req, _) = parse_request(raw).unwrap().unwrap();

    assert_eq!(req.headers.get("user-agent").unwrap(), "curl/8.0");
    assert_eq!(req.headers.get("accept-encoding").unwrap(), "gzip");
}

#[test]
fn test_parse_duplicate_header_keeps_first_occurrence() {
    let raw = b"GET / HTTP/1.1\r\nUser-Agent: first\r\nUser-Agent: second\r\n\r\n";
    let (req, _) = parse_request(raw).unwrap().unwrap();

    assert_eq!(req.headers.get("user-agent").unwrap(), "first");
}

#[test]
fn test_parse_duplicate_content_length_frames_with_first() {
    let raw = b"POST /files/a HTTP/1.1\r\nContent-Length: 2\r\nContent-Length: 4\r\n\r\nabcd";
    let (req, consumed) = parse_request(raw).unwrap().unwrap();

    assert_eq!(req.body, b"ab".to_vec());
    assert_eq!(consumed, raw.len() - 2);
}

#[test]
fn test_parse_header_line_without_colon_is_skipped() {
    let raw = b"GET / HTTP/1.1\r\nnot a header line\r\nHost: example.com\r\n\r\n";
    let (req, _) = parse_request(raw).unwrap().unwrap();

    assert_eq!(req.headers.len(), 1);
    assert_eq!(req.headers.get("host").unwrap(), "example.com");
}

#[test]
fn test_parse_incomplete_without_blank_line() {
    let raw = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    assert!(matches!(parse_request(raw), Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_empty_buffer() {
    assert!(matches!(parse_request(b""), Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_partial_body() {
    let raw = b"POST /files/a HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";
    assert!(matches!(parse_request(raw), Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_single_token_request_line_is_invalid() {
    let raw = b"BOGUS\r\n\r\n";
    assert!(matches!(
        parse_request(raw),
        Err(ParseError::InvalidRequestLine)
    ));
}

#[test]
fn test_parse_missing_version_token_is_accepted() {
    let raw = b"GET / \r\n\r\n";
    let (req, _) = parse_request(raw).unwrap().unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.target, "/");
}

#[test]
fn test_parse_unknown_method_is_not_a_parse_error() {
    let raw = b"DELETE /files/old.txt HTTP/1.1\r\n\r\n";
    let (req, _) = parse_request(raw).unwrap().unwrap();

    assert_eq!(req.method, Method::Other("DELETE".to_string()));
    assert_eq!(req.target, "/files/old.txt");
}

#[test]
fn test_parse_non_numeric_content_length_is_fatal() {
    let raw = b"POST /files/a HTTP/1.1\r\nContent-Length: five\r\n\r\n";
    assert!(matches!(
        parse_request(raw),
        Err(ParseError::InvalidContentLength)
    ));
}

#[test]
fn test_parse_negative_content_length_is_fatal() {
    let raw = b"POST /files/a HTTP/1.1\r\nContent-Length: -1\r\n\r\n";
    assert!(matches!(
        parse_request(raw),
        Err(ParseError::InvalidContentLength)
    ));
}

#[test]
fn test_parse_zero_content_length_gives_empty_body() {
    let raw = b"POST /files/a HTTP/1.1\r\nContent-Length: 0\r\n\r\n";
    let (req, consumed) = parse_request(raw).unwrap().unwrap();

    assert!(req.body.is_empty());
    assert_eq!(consumed, raw.len());
}

#[test]
fn test_parse_bytes_after_head_without_content_length_are_left_alone() {
    let raw = b"GET / HTTP/1.1\r\n\r\ntrailing";
    let (req, consumed) = parse_request(raw).unwrap().unwrap();

    assert!(req.body.is_empty());
    assert_eq!(consumed, raw.len() - "trailing".len());
}

#[test]
fn test_parse_binary_body_is_preserved() {
    let raw = b"POST /files/blob HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\x01\xfe\xff";
    let (req, _) = parse_request(raw).unwrap().unwrap();

    assert_eq!(req.body, vec![0x00, 0x01, 0xfe, 0xff]);
}

#[test]
fn test_parse_non_utf8_head_is_rejected() {
    let raw = b"GET /\xff\xfe HTTP/1.1\r\nHost: x\r\n\r\n";
    assert!(matches!(parse_request(raw), Err(ParseError::InvalidEncoding)));
}

#[test]
fn test_parse_bare_empty_line_signals_end_of_stream() {
    assert!(parse_request(b"\r\n").unwrap().is_none());
}

#[test]
fn test_parse_pipelined_requests_consume_one_at_a_time() {
    let raw = b"GET /a HTTP/1.1\r\n\r\nGET /b HTTP/1.1\r\n\r\n";
    let (first, consumed) = parse_request(raw).unwrap().unwrap();

    assert_eq!(first.target, "/a");
    assert!(consumed < raw.len());

    let (second, rest) = parse_request(&raw[consumed..]).unwrap().unwrap();
    assert_eq!(second.target, "/b");
    assert_eq!(consumed + rest, raw.len());
}
