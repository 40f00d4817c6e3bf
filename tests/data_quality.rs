use choicelab::data::{
    analyze_csv, file_sha256, load_records, validate_schema, REQUIRED_COLUMNS,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "UserID,Role,Round,Total,move,roundResult,gameType";

fn write_csv(path: &Path, header: &str, rows: &[&str]) {
    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    fs::write(path, out).unwrap();
}

#[test]
fn schema_accepts_good_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("good.csv");
    write_csv(&path, HEADER, &["u1,first,1,100,40,None,dictator"]);
    let report = validate_schema(&path).unwrap();
    assert!(report.ok, "{}", report.message);
}

#[test]
fn schema_accepts_extra_columns_any_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reordered.csv");
    write_csv(
        &path,
        "gameType,UserID,groupSize,Role,Round,Total,move,roundResult,extra",
        &["dictator,u1,4,first,1,100,40,None,x"],
    );
    let report = validate_schema(&path).unwrap();
    assert!(report.ok, "{}", report.message);
}

#[test]
fn schema_rejects_missing_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    write_csv(&path, "UserID,Role,Round", &["u1,first,1"]);
    let report = validate_schema(&path).unwrap();
    assert!(!report.ok);
    assert!(report.message.contains("move"));
    assert_eq!(report.required.len(), REQUIRED_COLUMNS.len());
}

#[test]
fn loader_counts_bad_rows_and_caps() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.csv");
    write_csv(
        &path,
        HEADER,
        &[
            "u1,first,1,100,40,None,dictator",
            "u2,first,not_a_round,100,40,None,dictator",
            "# a comment line",
            "",
            "u3,first,1,100,50,None,dictator",
            "u4,first,1,100,60,None,dictator",
        ],
    );
    let loaded = load_records(&path, 2).unwrap();
    assert_eq!(loaded.rows.len(), 2);
    assert_eq!(loaded.bad_rows, 1);
    assert!(loaded.warnings.iter().any(|w| w.starts_with("bad_row")));

    let all = load_records(&path, 5000).unwrap();
    assert_eq!(all.rows.len(), 3);
    assert_eq!(all.scanned, 4);
}

#[test]
fn loader_handles_quoted_tuple_moves() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tuples.csv");
    write_csv(
        &path,
        HEADER,
        &["u1,player,1,100,\"(60, 40)\",\"(10, 20)\",ultimatum_strategy"],
    );
    let loaded = load_records(&path, 10).unwrap();
    assert_eq!(loaded.rows.len(), 1);
    assert_eq!(loaded.rows[0].mv, "(60, 40)");
    assert_eq!(loaded.rows[0].round_result, "(10, 20)");
}

#[test]
fn headerless_file_warns_and_loads_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("headerless.csv");
    fs::write(&path, "u1,first,1,100,40,None,dictator\n").unwrap();
    let loaded = load_records(&path, 10).unwrap();
    assert!(loaded.rows.is_empty());
    assert!(loaded.warnings.iter().any(|w| w.starts_with("missing_header")));
}

#[test]
fn analyze_reports_quality_and_provenance() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("q.csv");
    write_csv(
        &path,
        HEADER,
        &[
            "u1,first,1,100,40,None,dictator",
            "u2,first,oops,100,40,None,dictator",
        ],
    );
    let (manifest, report) = analyze_csv(&path, 5000, 1234).unwrap();
    assert_eq!(report.rows, 1);
    assert_eq!(report.bad_rows, 1);
    assert_eq!(manifest.row_count, 1);
    assert_eq!(manifest.generated_at_epoch, 1234);
    assert_eq!(manifest.hash_sha256.len(), 64);
    assert_eq!(manifest.hash_sha256, file_sha256(&path).unwrap());
    assert_eq!(manifest.columns.len(), 7);
}

#[test]
fn sha256_reproducible() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("h.csv");
    write_csv(&path, HEADER, &["u1,first,1,100,40,None,dictator"]);
    let h1 = file_sha256(&path).unwrap();
    let h2 = file_sha256(&path).unwrap();
    assert_eq!(h1, h2);
    assert_eq!(h1.len(), 64);
}
