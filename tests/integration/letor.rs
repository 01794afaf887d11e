//! LETOR reader against files on disk.

use fieldtune::{letor, Error, MultiFieldRecord};
use std::io::Write;

#[test]
fn test_reads_multi_intent_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "\
# judged with three intents
2,0,2 qid:1 1:1 2:1.0 3:1.0 4:3 #a
0,0,1 qid:1 1:1 2:1.0 3:1.0 4:2 #b

1,1,0 qid:1 1:1 2:1.0 3:1.0 4:1 #c
3,2,0 qid:2 1:1 2:1.0 3:1.0 4:0 #d
"
    )
    .unwrap();

    let lists = letor::read_file(file.path()).unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].len(), 3);
    assert_eq!(lists[0].documents[0].labels, vec![2.0, 0.0, 2.0]);
    assert_eq!(lists[0].documents[2].key, "c");
    assert_eq!(lists[1].id, "2");

    let record = MultiFieldRecord::decode_any(&lists[0].documents[0].features).unwrap();
    assert_eq!(record.term_frequency(1, 1), 3.0);
}

#[test]
fn test_sparse_indices_fill_with_zero() {
    let lists = letor::parse_lists("1 qid:0 1:1 4:9 #x\n").unwrap();
    assert_eq!(lists[0].documents[0].features, vec![1.0, 0.0, 0.0, 9.0]);
}

#[test]
fn test_bad_line_reports_number() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1 qid:0 1:1").unwrap();
    writeln!(file, "1 qid:0 1:one").unwrap();

    match letor::read_file(file.path()) {
        Err(Error::Parse(e)) => {
            assert_eq!(e.line, 2);
            assert!(e.to_string().starts_with("line 2:"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_empty_file_has_no_lists() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(letor::read_file(file.path()).unwrap().is_empty());
}
