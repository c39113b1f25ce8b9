use std::fs;
use std::path::PathBuf;

use graph_connectivity::loader::{
    load, parse, EdgeValues, LoadError, LoaderConfig, Symmetry, DEFAULT_MAX_VERTICES,
    VERTEX_LIMIT_CEILING,
};
use graph_connectivity::{is_connected, AdjacencyMatrix};
use tempfile::{tempdir, TempDir};

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write input file");
    path
}

fn square(n: usize, value: &str) -> String {
    let row = vec![value; n].join(" ");
    let mut text = String::new();
    for _ in 0..n {
        text.push_str(&row);
        text.push('\n');
    }
    text
}

#[test]
fn load_connected_file() {
    let dir = tempdir().expect("create temp dir");
    let path = write_file(&dir, "g.txt", "0 1\n1 0\n");

    let m = load(&path, &LoaderConfig::default()).unwrap();
    assert_eq!(m.order(), 2);
    assert!(is_connected(&m));
}

#[test]
fn load_missing_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("absent.txt");

    let err = load(&path, &LoaderConfig::default()).unwrap_err();
    match &err {
        LoadError::FileNotFound { path: p, source } => {
            assert_eq!(p, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn load_empty_first_line() {
    let dir = tempdir().expect("create temp dir");
    let path = write_file(&dir, "empty_line.txt", "\n0 1\n1 0\n");
    assert!(matches!(
        load(&path, &LoaderConfig::default()),
        Err(LoadError::EmptyOrMalformed)
    ));

    let path = write_file(&dir, "empty.txt", "");
    assert!(matches!(
        load(&path, &LoaderConfig::default()),
        Err(LoadError::EmptyOrMalformed)
    ));
}

#[test]
fn load_truncated_matrix_reports_position() {
    let dir = tempdir().expect("create temp dir");
    // Four columns declared, ten of sixteen tokens present.
    let path = write_file(&dir, "short.txt", "0 1 0 0\n1 0 1 0\n0 1\n");

    let err = load(&path, &LoaderConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::TruncatedMatrix { row: 2, col: 2, order: 4 }
    ));
    assert_eq!(
        err.to_string(),
        "failed to read value at position [2][2], expected 4 x 4"
    );
}

#[test]
fn load_non_integer_token_is_truncation() {
    let err = parse("0 1 0\n1 0 ?\n0 0 0\n", &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::TruncatedMatrix { row: 1, col: 2, order: 3 }));
}

#[test]
fn capacity_boundary() {
    let at_limit = square(DEFAULT_MAX_VERTICES, "1");
    let m = parse(&at_limit, &LoaderConfig::default()).unwrap();
    assert_eq!(m.order(), DEFAULT_MAX_VERTICES);
    assert!(is_connected(&m));

    let over = square(DEFAULT_MAX_VERTICES + 1, "1");
    let err = parse(&over, &LoaderConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::CapacityExceeded { max: 89 }
    ));
}

#[test]
fn configured_capacity() {
    let config = LoaderConfig::default().with_max_vertices(2);
    assert!(parse(&square(2, "0"), &config).is_ok());
    assert!(matches!(
        parse(&square(3, "0"), &config),
        Err(LoadError::CapacityExceeded { max: 2 })
    ));

    let config = LoaderConfig::default().with_max_vertices(200);
    assert_eq!(parse(&square(120, "0"), &config).unwrap().order(), 120);
}

#[test]
fn long_single_line_file_is_truncated_not_allocated() {
    let dir = tempdir().expect("create temp dir");
    let path = write_file(&dir, "wide.txt", &vec!["1"; 50_000].join(" "));
    let config = LoaderConfig::default().with_max_vertices(VERTEX_LIMIT_CEILING);

    let err = load(&path, &config).unwrap_err();
    assert!(matches!(
        err,
        LoadError::TruncatedMatrix { row: 1, col: 0, order: 50_000 }
    ));

    // Over the ceiling the first line stops counting at the limit.
    let path = write_file(&dir, "wider.txt", &vec!["1"; VERTEX_LIMIT_CEILING + 10].join(" "));
    assert!(matches!(
        load(&path, &config),
        Err(LoadError::CapacityExceeded { max: VERTEX_LIMIT_CEILING })
    ));

    let unbounded = LoaderConfig::default().with_max_vertices(usize::MAX);
    assert!(matches!(
        load(&path, &unbounded),
        Err(LoadError::InvalidLimit { .. })
    ));
}

#[test]
fn extra_tokens_are_ignored() {
    let m = parse("0 1\n1 0\n1 1\n1 1 1\n", &LoaderConfig::default()).unwrap();
    assert_eq!(m, AdjacencyMatrix::from_edges(2, &[(0, 1)]));
}

#[test]
fn saved_matrix_reloads_identically() {
    let dir = tempdir().expect("create temp dir");
    let m = AdjacencyMatrix::from_edges(5, &[(0, 4), (4, 2), (1, 3)]);
    let path = dir.path().join("roundtrip.txt");
    m.save(&path).expect("save matrix");

    let reloaded = load(&path, &LoaderConfig::default()).unwrap();
    assert_eq!(reloaded, m);
    assert_eq!(reloaded.order(), 5);
}

#[test]
fn strict_policies() {
    let config = LoaderConfig::default()
        .with_edge_values(EdgeValues::Binary)
        .with_symmetry(Symmetry::Require);

    assert!(parse("0 1\n1 0\n", &config).is_ok());
    assert!(matches!(
        parse("0 3\n3 0\n", &config),
        Err(LoadError::InvalidEntry { row: 0, col: 1, value: 3 })
    ));
    assert!(matches!(
        parse("0 1\n0 0\n", &config),
        Err(LoadError::Asymmetric { row: 0, col: 1 })
    ));

    // Permissive defaults accept both.
    let m = parse("0 3\n0 0\n", &LoaderConfig::default()).unwrap();
    assert!(m.has_edge(0, 1));
    assert!(!m.has_edge(1, 0));
}

#[test]
fn invalid_utf8_is_not_a_number() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("binary.txt");
    fs::write(&path, [0xff, 0xfe, b'\n', b'0']).expect("write input file");
    assert!(matches!(
        load(&path, &LoaderConfig::default()),
        Err(LoadError::EmptyOrMalformed)
    ));
}
