//! Ultimatum game under the strategy method: each player simultaneously
//! states a proposal and the minimum offer they would accept, so one row
//! carries both decisions as a tuple-encoded move.

use crate::config::Config;
use crate::data::{parse_tuple2, RawRecord};
use crate::games::{baselines, Game, GameView, Panel};
use crate::samples::{Cohort, SampleSet};

#[derive(Debug, Clone, Default)]
pub struct StrategyMoves {
    pub propose: Vec<f64>,
    pub accept: Vec<f64>,
}

impl StrategyMoves {
    pub fn len(&self) -> usize {
        self.propose.len()
    }

    pub fn is_empty(&self) -> bool {
        self.propose.is_empty()
    }
}

/// Canonical first-round sample: players with a parseable (propose, accept)
/// tuple, both components inside the endowment range.
pub fn human_moves(rows: &[RawRecord]) -> StrategyMoves {
    let mut moves = StrategyMoves::default();
    for rec in rows {
        if rec.role != "player" {
            continue;
        }
        if rec.round != 1 {
            continue;
        }
        if rec.total.map(|t| t.round() as i64) != Some(100) {
            continue;
        }
        let (propose, accept) = match parse_tuple2(&rec.mv) {
            Some(pair) => pair,
            None => continue,
        };
        if !(0.0..=100.0).contains(&propose) || !(0.0..=100.0).contains(&accept) {
            continue;
        }
        moves.propose.push(propose);
        moves.accept.push(accept);
    }
    moves
}

pub fn view(rows: &[RawRecord], _cfg: &Config) -> GameView {
    let moves = human_moves(rows);
    let kept = moves.len() as u64;
    let propose_panel = Panel::new(
        "Ultimatum as proposer",
        "Proposal to give ($)",
        vec![
            SampleSet::from_values(Cohort::Human, moves.propose),
            SampleSet::from_values(
                Cohort::Gpt4,
                baselines::ULTIMATUM_PROPOSE_GPT4.iter().copied(),
            ),
            SampleSet::from_values(
                Cohort::Gpt3,
                baselines::ULTIMATUM_PROPOSE_GPT3.iter().copied(),
            ),
        ],
    );
    let accept_panel = Panel::new(
        "Ultimatum as responder",
        "Minimum proposal to accept ($)",
        vec![
            SampleSet::from_values(Cohort::Human, moves.accept),
            SampleSet::from_values(
                Cohort::Gpt4,
                baselines::ULTIMATUM_ACCEPT_GPT4.iter().copied(),
            ),
            SampleSet::from_optional(Cohort::Gpt3, baselines::ULTIMATUM_ACCEPT_GPT3),
        ],
    );
    GameView {
        game: Game::UltimatumStrategy,
        rows_scanned: rows.len() as u64,
        rows_kept: kept,
        panels: vec![propose_panel, accept_panel],
    }
}
