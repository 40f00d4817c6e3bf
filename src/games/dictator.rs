//! Dictator game: the first mover unilaterally splits a $100 endowment.

use crate::config::Config;
use crate::data::{parse_number, RawRecord};
use crate::games::{baselines, Game, GameView, Panel};
use crate::samples::{Cohort, SampleSet};

const BIN_RANGE: (f64, f64) = (0.0, 100.0);

/// Canonical first-round sample: first movers, full endowment, a concrete
/// numeric move inside the endowment range.
pub fn human_moves(rows: &[RawRecord]) -> Vec<f64> {
    let mut moves = Vec::new();
    for rec in rows {
        if rec.role != "first" {
            continue;
        }
        if rec.round > 1 {
            continue;
        }
        if rec.total.map(|t| t.round() as i64) != Some(100) {
            continue;
        }
        if rec.game_type != "dictator" {
            continue;
        }
        let mv = match parse_number(&rec.mv) {
            Some(v) => v,
            None => continue,
        };
        if mv < BIN_RANGE.0 || mv > BIN_RANGE.1 {
            continue;
        }
        moves.push(mv);
    }
    moves
}

pub fn view(rows: &[RawRecord], _cfg: &Config) -> GameView {
    let moves = human_moves(rows);
    let kept = moves.len() as u64;
    let panel = Panel::new(
        "Dictator",
        "Split offered ($)",
        vec![
            SampleSet::from_values(Cohort::Human, moves),
            SampleSet::from_values(Cohort::Gpt4, baselines::DICTATOR_GPT4.iter().copied()),
            SampleSet::from_values(Cohort::Gpt3, baselines::DICTATOR_GPT3.iter().copied()),
        ],
    );
    GameView {
        game: Game::Dictator,
        rows_scanned: rows.len() as u64,
        rows_kept: kept,
        panels: vec![panel],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(role: &str, round: i64, total: f64, mv: &str, game_type: &str) -> RawRecord {
        RawRecord {
            user_id: "u1".to_string(),
            role: role.to_string(),
            round,
            total: Some(total),
            mv: mv.to_string(),
            round_result: "None".to_string(),
            game_type: game_type.to_string(),
            group_size: None,
        }
    }

    #[test]
    fn keeps_only_first_round_full_endowment() {
        let rows = vec![
            rec("first", 1, 100.0, "40", "dictator"),
            rec("second", 1, 100.0, "40", "dictator"),
            rec("first", 2, 100.0, "40", "dictator"),
            rec("first", 1, 50.0, "40", "dictator"),
            rec("first", 1, 100.0, "None", "dictator"),
            rec("first", 1, 100.0, "40", "ultimatum_strategy"),
            rec("first", 1, 100.0, "140", "dictator"),
            rec("first", 1, 100.0, "0", "dictator"),
        ];
        assert_eq!(human_moves(&rows), vec![40.0, 0.0]);
    }

    #[test]
    fn view_has_three_cohorts() {
        let rows = vec![rec("first", 1, 100.0, "60", "dictator")];
        let cfg = Config::from_env();
        let view = view(&rows, &cfg);
        assert_eq!(view.panels.len(), 1);
        assert_eq!(view.panels[0].sets.len(), 3);
        assert_eq!(view.rows_kept, 1);
    }
}
