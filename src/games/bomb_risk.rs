//! Bomb Risk: a sequential game, so choices are aggregated by outcome
//! history. The human side keys each choice by the prefix of prior round
//! outcomes (`'1'` safe, `'0'` bomb) and attaches inverse-probability
//! weights; the model side replays captured scenario sequences into the
//! same prefix keying.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::data::{parse_number, RawRecord};
use crate::games::{Game, GameView, Panel};
use crate::logging::{json_log, obj, v_str};
use crate::records::{load_bomb_files, BombRecords};
use crate::samples::{Cohort, Sample, SampleSet};

const BOXES: f64 = 100.0;

#[derive(Debug, Clone, Default)]
pub struct PrefixSamples {
    pub by_prefix: BTreeMap<String, Vec<Sample>>,
    pub kept: u64,
    pub bad_users: u64,
}

/// Weight for a choice made after `prefix`, given the previous round's move.
///
/// After a safe round the subject only reaches this history if none of the
/// `prev` opened boxes hid the bomb, so the draw is upweighted by
/// 1/(100-prev); after a bomb round, by 1/prev. Clamps keep the weights
/// finite at the extremes (prev = 0 or 100).
fn inverse_probability_weight(prefix: &str, prev_move: f64) -> f64 {
    match prefix.chars().last() {
        None => 1.0,
        Some('1') => 1.0 / (BOXES - prev_move.min(98.0)),
        _ => 1.0 / prev_move.max(1.0),
    }
}

/// Walk each player's rounds in order, accumulating prefix-keyed weighted
/// choices. A non-numeric or out-of-range move marks the user bad: that row
/// and the rest of the user's rows are dropped.
pub fn human_prefix_samples(rows: &[RawRecord]) -> PrefixSamples {
    let mut ordered: Vec<&RawRecord> = rows
        .iter()
        .filter(|r| r.role == "player" && r.game_type == "bomb_risk")
        .collect();
    ordered.sort_by(|a, b| a.user_id.cmp(&b.user_id).then(a.round.cmp(&b.round)));

    let mut out = PrefixSamples::default();
    let mut prev_user: Option<&str> = None;
    let mut prev_move = 0.0f64;
    let mut prefix = String::new();
    let mut bad_user = false;

    for rec in ordered {
        if prev_user != Some(rec.user_id.as_str()) {
            prev_user = Some(rec.user_id.as_str());
            prefix.clear();
            prev_move = 0.0;
            bad_user = false;
        }
        if bad_user {
            continue;
        }
        let mv = match parse_number(&rec.mv) {
            Some(v) if (0.0..=BOXES).contains(&v) => v,
            _ => {
                bad_user = true;
                out.bad_users += 1;
                continue;
            }
        };

        let weight = inverse_probability_weight(&prefix, prev_move);
        out.by_prefix
            .entry(prefix.clone())
            .or_default()
            .push(Sample { value: mv, weight });
        out.kept += 1;

        prev_move = mv;
        prefix.push(if rec.round_result == "SAFE" { '1' } else { '0' });
    }
    out
}

#[derive(Debug, Clone, Default)]
pub struct PrefixReplay {
    /// Choice made after each outcome history.
    pub choices: BTreeMap<String, Vec<f64>>,
    /// Cumulative payoff after each outcome history (sum of choices on safe
    /// rounds), kept for summaries.
    pub results: BTreeMap<String, Vec<f64>>,
}

/// Replay captured sessions into prefix-keyed choices: the round-j choice is
/// keyed by the outcomes before round j, the running payoff by the outcomes
/// through round j.
pub fn replay_prefixes(records: &BombRecords) -> PrefixReplay {
    let mut replay = PrefixReplay::default();
    for (outcomes, choices) in records.scenarios.iter().zip(records.choices.iter()) {
        let mut result = 0.0;
        let mut prefix = String::new();
        for (&outcome, &choice) in outcomes.iter().zip(choices.iter()) {
            replay
                .choices
                .entry(prefix.clone())
                .or_default()
                .push(choice);
            if outcome == 1 {
                result += choice;
            }
            prefix.push(if outcome == 1 { '1' } else { '0' });
            replay
                .results
                .entry(prefix.clone())
                .or_default()
                .push(result);
        }
    }
    replay
}

fn record_paths(records_dir: &str, files: &[String]) -> Vec<PathBuf> {
    files.iter().map(|f| Path::new(records_dir).join(f)).collect()
}

fn model_set(cohort: Cohort, records_dir: &str, files: &[String]) -> SampleSet {
    match load_bomb_files(&record_paths(records_dir, files)) {
        Ok(records) => {
            json_log(
                "bomb_risk",
                obj(&[
                    ("cohort", v_str(cohort.as_str())),
                    ("sessions", serde_json::json!(records.sessions())),
                ]),
            );
            let replay = replay_prefixes(&records);
            let opening = replay.choices.get("").cloned().unwrap_or_default();
            SampleSet::from_values(cohort, opening)
        }
        Err(err) => {
            json_log(
                "bomb_risk",
                obj(&[
                    ("warning", v_str("records_unavailable")),
                    ("cohort", v_str(cohort.as_str())),
                    ("error", v_str(&err.to_string())),
                ]),
            );
            SampleSet::from_values(cohort, std::iter::empty())
        }
    }
}

pub fn view(rows: &[RawRecord], cfg: &Config) -> GameView {
    let human = human_prefix_samples(rows);
    let opening = human.by_prefix.get("").cloned().unwrap_or_default();
    let human_set = SampleSet {
        cohort: Cohort::Human,
        samples: opening,
    };

    let panel = Panel::new(
        "Bomb Risk",
        "# of boxes opened",
        vec![
            human_set,
            model_set(Cohort::Gpt4, &cfg.records_dir, &cfg.bomb_gpt4_files),
            model_set(Cohort::Gpt3, &cfg.records_dir, &cfg.bomb_gpt3_files),
        ],
    );

    GameView {
        game: Game::BombRisk,
        rows_scanned: rows.len() as u64,
        rows_kept: human.kept,
        panels: vec![panel],
    }
}
