//! Integration tests for csvstream

use csvstream::CsvSession;
use std::fs::File;
use std::io::{BufReader, Cursor, Write};
use tempfile::NamedTempFile;

#[test]
fn test_read_in_memory_stream() {
    let mut stream = Cursor::new(&b"name,age,city\nAlice,30,NYC\nBob,25,SF\n"[..]);
    let mut session = CsvSession::new();

    // Header
    let line = session.read_line(&mut stream).unwrap().unwrap();
    assert_eq!(line, b"name,age,city");
    let keys: Vec<_> = session.keys().collect();
    assert_eq!(keys, vec![&b"name"[..], &b"age"[..], &b"city"[..]]);

    // Data rows
    session.read_line(&mut stream).unwrap().unwrap();
    assert_eq!(session.field_count(), 3);
    assert_eq!(session.field_by_key("city"), Some(&b"NYC"[..]));

    session.read_line(&mut stream).unwrap().unwrap();
    assert_eq!(session.field_by_key("name"), Some(&b"Bob"[..]));

    assert!(session.read_line(&mut stream).unwrap().is_none());
    session.close();
}

#[test]
fn test_read_from_file() {
    // Write a CSV file, read it back through a BufReader
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(b"id,value\r\n1,\"a,b\"\r\n2,\"say \"\"hi\"\"\"\r\n")
        .unwrap();
    temp.flush().unwrap();

    let mut reader = BufReader::new(File::open(temp.path()).unwrap());
    let mut session = CsvSession::new();

    session.read_line(&mut reader).unwrap().unwrap();
    session.read_line(&mut reader).unwrap().unwrap();
    assert_eq!(session.field_by_key("value"), Some(&b"a,b"[..]));

    session.read_line(&mut reader).unwrap().unwrap();
    assert_eq!(session.field_by_key("value"), Some(&b"say \"hi\""[..]));

    assert!(session.read_line(&mut reader).unwrap().is_none());
    session.close();
}

#[test]
fn test_rows_iterator_end_to_end() {
    let mut stream = Cursor::new(&b"h1,h2\na,b\nc,d\n"[..]);
    let mut session = CsvSession::new();

    let rows: Vec<_> = session
        .rows(&mut stream)
        .collect::<csvstream::Result<Vec<_>>>()
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec![b"a".to_vec(), b"b".to_vec()]);
    assert_eq!(rows[1], vec![b"c".to_vec(), b"d".to_vec()]);
}

#[test]
fn test_long_line_forces_growth() {
    // Two fields far past the initial capacity, forcing repeated doubling
    let big = "x".repeat(10_000);
    let input = format!("a,b\n{},{}\n", big, big);
    let mut stream = Cursor::new(input.into_bytes());
    let mut session = CsvSession::new();

    session.read_line(&mut stream).unwrap().unwrap();
    let line = session.read_line(&mut stream).unwrap().unwrap();
    assert_eq!(line.len(), 2 * 10_000 + 1);
    assert_eq!(session.field_count(), 2);
    assert_eq!(session.field_at(0).unwrap().len(), 10_000);
    assert_eq!(session.field_by_key("b").unwrap(), big.as_bytes());
}

#[test]
fn test_eof_then_close_is_safe() {
    let mut stream = Cursor::new(&b"only\n"[..]);
    let mut session = CsvSession::new();

    session.read_line(&mut stream).unwrap().unwrap();
    for _ in 0..5 {
        assert!(session.read_line(&mut stream).unwrap().is_none());
    }
    session.close();
    session.close(); // close after close is a no-op
    assert_eq!(session.field_count(), 0);
}

#[test]
fn test_field_at_boundaries() {
    let mut stream = Cursor::new(&b"h\n1,2,3\n"[..]);
    let mut session = CsvSession::new();
    session.read_line(&mut stream).unwrap();
    session.read_line(&mut stream).unwrap();

    assert_eq!(session.field_count(), 3);
    assert!(session.field_at(0).is_some());
    assert!(session.field_at(2).is_some());
    assert!(session.field_at(3).is_none());
}

#[test]
fn test_unquoted_round_trip_through_session() {
    // For unquoted rows, rejoining the fields with commas reproduces the line
    let input = b"alpha,beta,gamma\none,two,,four,\n";
    let mut stream = Cursor::new(&input[..]);
    let mut session = CsvSession::new();

    session.read_line(&mut stream).unwrap();
    let line = session.read_line(&mut stream).unwrap().unwrap().to_vec();
    let fields: Vec<Vec<u8>> = (0..session.field_count())
        .map(|i| session.field_at(i).unwrap().to_vec())
        .collect();
    assert_eq!(fields.join(&b","[..]), line);
}
