use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Columns every per-game CSV must carry. `groupSize` is optional; only the
/// Public Goods exports have it.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "UserID",
    "Role",
    "Round",
    "Total",
    "move",
    "roundResult",
    "gameType",
];

/// One subject-level game record. String fields stay raw; the per-game
/// pipelines decide how to interpret `mv` and `round_result` (plain number,
/// the literal `None`, or a tuple like `(50, 10)`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub user_id: String,
    pub role: String,
    pub round: i64,
    pub total: Option<f64>,
    pub mv: String,
    pub round_result: String,
    pub game_type: String,
    pub group_size: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub path: String,
    pub hash_sha256: String,
    pub row_count: u64,
    pub bad_rows: u64,
    pub columns: Vec<String>,
    pub warnings: Vec<String>,
    pub generated_at_epoch: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaReport {
    pub columns: Vec<String>,
    pub required: Vec<String>,
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataQualityReport {
    pub rows: u64,
    pub bad_rows: u64,
    pub warnings: Vec<String>,
}

/// Result of a bounded load: kept rows plus what was skipped along the way.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub rows: Vec<RawRecord>,
    pub scanned: u64,
    pub bad_rows: u64,
    pub warnings: Vec<String>,
}

/// Split one CSV line into fields, honoring double-quoted fields that may
/// contain commas (tuple-encoded moves). A doubled quote inside a quoted
/// field unescapes to a single quote.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field = String::new();
            }
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

/// Parse a move field as a plain number. The literal `None` (and anything
/// else non-numeric) is rejected.
pub fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() || t == "None" {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a tuple-encoded field like `(50, 10)` or `[50, 10]` into its two
/// numeric components.
pub fn parse_tuple2(s: &str) -> Option<(f64, f64)> {
    let t = s
        .trim()
        .trim_start_matches(&['(', '['][..])
        .trim_end_matches(&[')', ']'][..]);
    let mut parts = t.split(',');
    let a = parse_number(parts.next()?)?;
    let b = parse_number(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b))
}

/// Rounds appear as `1` or `1.0` depending on the export; accept both.
fn parse_round(s: &str) -> Option<i64> {
    parse_number(s).map(|v| v.round() as i64)
}

fn find_col(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|h| h == name)
}

fn read_header_fields(path: &Path) -> Result<Vec<String>, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let reader = BufReader::new(file);
    for line in reader.lines() {
        let line = line.map_err(|e| e.to_string())?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        return Ok(split_csv_line(trimmed));
    }
    Ok(Vec::new())
}

pub fn validate_schema(path: &Path) -> Result<SchemaReport, String> {
    let header = read_header_fields(path)?;
    let required: Vec<String> = REQUIRED_COLUMNS.iter().map(|s| s.to_string()).collect();
    let missing: Vec<&String> = required
        .iter()
        .filter(|c| !header.contains(*c))
        .collect();
    let ok = missing.is_empty();
    let message = if ok {
        "schema ok".to_string()
    } else {
        format!("schema mismatch: missing {:?} in {:?}", missing, header)
    };
    Ok(SchemaReport {
        columns: header,
        required,
        ok,
        message,
    })
}

struct ColumnIndex {
    user_id: usize,
    role: usize,
    round: usize,
    total: usize,
    mv: usize,
    round_result: usize,
    game_type: usize,
    group_size: Option<usize>,
}

impl ColumnIndex {
    fn from_header(header: &[String]) -> Result<Self, String> {
        let need = |name: &str| {
            find_col(header, name).ok_or_else(|| format!("missing column: {}", name))
        };
        Ok(Self {
            user_id: need("UserID")?,
            role: need("Role")?,
            round: need("Round")?,
            total: need("Total")?,
            mv: need("move")?,
            round_result: need("roundResult")?,
            game_type: need("gameType")?,
            group_size: find_col(header, "groupSize"),
        })
    }

    fn parse(&self, fields: &[String]) -> Result<RawRecord, String> {
        let get = |idx: usize| -> Result<&String, String> {
            fields
                .get(idx)
                .ok_or_else(|| format!("row has {} fields, need {}", fields.len(), idx + 1))
        };
        let round = parse_round(get(self.round)?)
            .ok_or_else(|| format!("bad Round: {:?}", fields[self.round]))?;
        Ok(RawRecord {
            user_id: get(self.user_id)?.clone(),
            role: get(self.role)?.clone(),
            round,
            total: parse_number(get(self.total)?),
            mv: get(self.mv)?.clone(),
            round_result: get(self.round_result)?.clone(),
            game_type: get(self.game_type)?.clone(),
            group_size: match self.group_size {
                Some(idx) => get(idx).ok().and_then(|s| parse_round(s)),
                None => None,
            },
        })
    }
}

/// Load at most `nrows` data rows from a per-game CSV. Bad rows are counted
/// and surfaced as warnings, never fatal.
pub fn load_records(path: &Path, nrows: usize) -> Result<LoadedDataset, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    let mut scanned = 0u64;
    let mut bad_rows = 0u64;
    let mut warnings = Vec::new();
    let mut index: Option<ColumnIndex> = None;

    for line in reader.lines() {
        let line = line.map_err(|e| e.to_string())?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields = split_csv_line(trimmed);
        match &index {
            None => match ColumnIndex::from_header(&fields) {
                Ok(idx) => index = Some(idx),
                Err(err) => {
                    warnings.push(format!("missing_header: {}", err));
                    break;
                }
            },
            Some(idx) => {
                if rows.len() >= nrows {
                    break;
                }
                scanned += 1;
                match idx.parse(&fields) {
                    Ok(rec) => rows.push(rec),
                    Err(err) => {
                        bad_rows += 1;
                        if warnings.len() < 20 {
                            warnings.push(format!("bad_row: {}", err));
                        }
                    }
                }
            }
        }
    }

    if index.is_none() && warnings.is_empty() {
        warnings.push("missing_header".to_string());
    }

    Ok(LoadedDataset {
        rows,
        scanned,
        bad_rows,
        warnings,
    })
}

/// Single pass over a dataset producing provenance + quality reports.
pub fn analyze_csv(
    path: &Path,
    nrows: usize,
    now_ts: u64,
) -> Result<(DatasetManifest, DataQualityReport), String> {
    let hash = file_sha256(path)?;
    let header = read_header_fields(path)?;
    let loaded = load_records(path, nrows)?;

    let manifest = DatasetManifest {
        path: path.display().to_string(),
        hash_sha256: hash,
        row_count: loaded.rows.len() as u64,
        bad_rows: loaded.bad_rows,
        columns: header,
        warnings: loaded.warnings.clone(),
        generated_at_epoch: now_ts,
    };
    let report = DataQualityReport {
        rows: loaded.rows.len() as u64,
        bad_rows: loaded.bad_rows,
        warnings: loaded.warnings,
    };
    Ok((manifest, report))
}

pub fn file_sha256(path: &Path) -> Result<String, String> {
    let mut file = File::open(path).map_err(|e| e.to_string())?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf).map_err(|e| e.to_string())?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

pub fn default_manifest_path(dataset_path: &Path) -> PathBuf {
    let mut p = dataset_path.to_path_buf();
    let fname = dataset_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset.csv");
    p.set_file_name(format!("{}.manifest.json", fname));
    p
}

/// CSV stems under the data directory; these drive the game selector.
pub fn available_games(data_dir: &Path) -> Vec<String> {
    let mut stems = Vec::new();
    if let Ok(rd) = std::fs::read_dir(data_dir) {
        for entry in rd.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().map(|e| e == "csv").unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    stems.push(stem.to_string());
                }
            }
        }
    }
    stems.sort();
    stems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_plain_fields() {
        assert_eq!(split_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_quoted_tuple_field() {
        let fields = split_csv_line("u1,first,\"(50, 10)\",dictator");
        assert_eq!(fields, vec!["u1", "first", "(50, 10)", "dictator"]);
    }

    #[test]
    fn split_escaped_quote() {
        let fields = split_csv_line("\"he said \"\"hi\"\"\",2");
        assert_eq!(fields, vec!["he said \"hi\"", "2"]);
    }

    #[test]
    fn number_rejects_none_literal() {
        assert_eq!(parse_number("None"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("50"), Some(50.0));
        assert_eq!(parse_number(" 33.33 "), Some(33.33));
    }

    #[test]
    fn tuple_parse_variants() {
        assert_eq!(parse_tuple2("(50, 10)"), Some((50.0, 10.0)));
        assert_eq!(parse_tuple2("[100, 1.0]"), Some((100.0, 1.0)));
        assert_eq!(parse_tuple2("50"), None);
        assert_eq!(parse_tuple2("(a, 10)"), None);
        assert_eq!(parse_tuple2("(1, 2, 3)"), None);
    }

    #[test]
    fn round_accepts_float_form() {
        assert_eq!(parse_round("1"), Some(1));
        assert_eq!(parse_round("1.0"), Some(1));
        assert_eq!(parse_round("None"), None);
    }
}
