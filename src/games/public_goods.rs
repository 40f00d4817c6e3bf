//! Public Goods (linear, water frame): four contributors, $20 endowment,
//! three rounds. Only round 1 is charted; later-round tallies are logged
//! for sample-size visibility.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::data::{parse_number, RawRecord};
use crate::games::{Game, GameView, Panel};
use crate::logging::{self, json_log, obj, v_str};
use crate::records::load_choice_files;
use crate::samples::{Cohort, SampleSet};

const ENDOWMENT: f64 = 20.0;
const GROUP_SIZE: i64 = 4;
const ROUNDS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct ContributionRounds {
    /// Kept moves per round, index 0 = round 1.
    pub rounds: [Vec<f64>; ROUNDS],
}

impl ContributionRounds {
    pub fn kept(&self) -> u64 {
        self.rounds.iter().map(Vec::len).sum::<usize>() as u64
    }
}

/// Contributors in the canonical setup: full $20 endowment, groups of four,
/// rounds 1-3, numeric contribution inside the endowment.
pub fn human_moves(rows: &[RawRecord]) -> ContributionRounds {
    let mut moves = ContributionRounds::default();
    for rec in rows {
        if rec.role != "contributor" {
            continue;
        }
        if rec.round < 1 || rec.round > ROUNDS as i64 {
            continue;
        }
        if rec.total.map(|t| t.round() as i64) != Some(ENDOWMENT as i64) {
            continue;
        }
        if rec.group_size != Some(GROUP_SIZE) {
            continue;
        }
        if rec.game_type != "public_goods_linear_water" {
            continue;
        }
        let mv = match parse_number(&rec.mv) {
            Some(v) => v,
            None => continue,
        };
        if !(0.0..=ENDOWMENT).contains(&mv) {
            continue;
        }
        moves.rounds[(rec.round - 1) as usize].push(mv);
    }
    moves
}

fn record_paths(records_dir: &str, files: &[String]) -> Vec<PathBuf> {
    files.iter().map(|f| Path::new(records_dir).join(f)).collect()
}

/// Model contributions from capture files; a missing or malformed file logs
/// a warning and yields an empty cohort rather than failing the dashboard.
fn model_set(cohort: Cohort, records_dir: &str, files: &[String]) -> SampleSet {
    match load_choice_files(&record_paths(records_dir, files)) {
        Ok((choices, skipped)) => {
            if skipped > 0 {
                json_log(
                    "public_goods",
                    obj(&[
                        ("warning", v_str("non_numeric_choices")),
                        ("cohort", v_str(cohort.as_str())),
                        ("skipped", serde_json::json!(skipped)),
                    ]),
                );
            }
            SampleSet::from_values(cohort, choices)
        }
        Err(err) => {
            json_log(
                "public_goods",
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
    let moves = human_moves(rows);
    let kept = moves.kept();
    for (i, round) in moves.rounds.iter().enumerate() {
        logging::log(
            logging::Level::Debug,
            logging::Domain::Game,
            "round_tally",
            obj(&[
                ("game", v_str("public_goods_linear_water")),
                ("round", serde_json::json!(i + 1)),
                ("kept", serde_json::json!(round.len())),
            ]),
        );
    }

    let [round_1, _, _] = moves.rounds;
    let panel = Panel::new(
        "Public Goods",
        "Contribution ($)",
        vec![
            SampleSet::from_values(Cohort::Human, round_1),
            model_set(Cohort::Gpt4, &cfg.records_dir, &cfg.pg_gpt4_files),
            model_set(Cohort::Gpt3, &cfg.records_dir, &cfg.pg_gpt3_files),
        ],
    );

    GameView {
        game: Game::PublicGoodsLinearWater,
        rows_scanned: rows.len() as u64,
        rows_kept: kept,
        panels: vec![panel],
    }
}
