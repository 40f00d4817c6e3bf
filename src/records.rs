//! Model-side record ingestion: JSON capture files written by the chat
//! sessions, one file per model run.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Capture file for single-decision games (Public Goods): `choices` holds one
/// entry per session, each a tuple encoded as a JSON array whose first element
/// is the contribution.
#[derive(Debug, Deserialize)]
struct ChoiceFile {
    choices: Vec<serde_json::Value>,
}

/// Capture file for the sequential Bomb Risk game: parallel per-session
/// arrays. `scenarios[i][j]` is 1 when round j was safe, 0 when the bomb box
/// was opened; `choices[i][j]` is the number of boxes opened that round.
#[derive(Debug, Deserialize)]
struct BombFile {
    choices: Vec<Vec<f64>>,
    scenarios: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Default)]
pub struct BombRecords {
    pub choices: Vec<Vec<f64>>,
    pub scenarios: Vec<Vec<u8>>,
}

impl BombRecords {
    pub fn sessions(&self) -> usize {
        self.scenarios.len()
    }
}

fn leading_number(v: &serde_json::Value) -> Option<f64> {
    match v {
        serde_json::Value::Array(items) => items.first().and_then(|x| x.as_f64()),
        other => other.as_f64(),
    }
}

/// Concatenate the `choices` arrays across capture files, extracting the
/// leading element of each tuple. Non-numeric entries are skipped and
/// reported back as a count.
pub fn load_choice_files(paths: &[impl AsRef<Path>]) -> Result<(Vec<f64>, usize)> {
    let mut choices = Vec::new();
    let mut skipped = 0usize;
    for path in paths {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow!("reading {}: {}", path.display(), e))?;
        let file: ChoiceFile = serde_json::from_str(&text)
            .map_err(|e| anyhow!("parsing {}: {}", path.display(), e))?;
        for value in &file.choices {
            match leading_number(value) {
                Some(v) if v.is_finite() => choices.push(v),
                _ => skipped += 1,
            }
        }
    }
    Ok((choices, skipped))
}

/// Concatenate bomb capture files, validating the parallel-array contract:
/// per file `len(scenarios) == len(choices)`, and per session the outcome and
/// choice sequences have equal length.
pub fn load_bomb_files(paths: &[impl AsRef<Path>]) -> Result<BombRecords> {
    let mut records = BombRecords::default();
    for path in paths {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow!("reading {}: {}", path.display(), e))?;
        let file: BombFile = serde_json::from_str(&text)
            .map_err(|e| anyhow!("parsing {}: {}", path.display(), e))?;
        if file.choices.len() != file.scenarios.len() {
            return Err(anyhow!(
                "{}: {} choice sessions vs {} scenario sessions",
                path.display(),
                file.choices.len(),
                file.scenarios.len()
            ));
        }
        for (i, (c, s)) in file.choices.iter().zip(file.scenarios.iter()).enumerate() {
            if c.len() != s.len() {
                return Err(anyhow!(
                    "{}: session {} has {} choices vs {} outcomes",
                    path.display(),
                    i,
                    c.len(),
                    s.len()
                ));
            }
        }
        records.choices.extend(file.choices);
        records.scenarios.extend(file.scenarios);
    }
    Ok(records)
}
