//! Trust (investment) game. The investor's move is a plain dollar amount;
//! the banker's decision arrives through `roundResult` as an
//! `(investment, returned)` tuple, and banker distributions are keyed by
//! the investment level.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::data::{parse_number, parse_tuple2, RawRecord};
use crate::games::{baselines, Game, GameView, Panel};
use crate::samples::{Cohort, SampleSet};

const BIN_RANGE: (f64, f64) = (0.0, 100.0);

/// Banker panels shown on the dashboard, by amount invested.
pub const RETURN_LEVELS: [i64; 3] = [10, 50, 100];

#[derive(Debug, Clone, Default)]
pub struct TrustMoves {
    pub investments: Vec<f64>,
    pub returns_by_level: BTreeMap<i64, Vec<f64>>,
}

impl TrustMoves {
    pub fn kept(&self) -> u64 {
        (self.investments.len() + self.returns_by_level.values().map(Vec::len).sum::<usize>())
            as u64
    }
}

/// First-round sample over both roles: investments in the endowment range,
/// and banker returns bounded by the tripled investment.
pub fn human_moves(rows: &[RawRecord]) -> TrustMoves {
    let mut moves = TrustMoves::default();
    for rec in rows {
        if rec.round > 1 {
            continue;
        }
        if rec.mv == "None" {
            continue;
        }
        if rec.game_type != "trust_investment" {
            continue;
        }
        match rec.role.as_str() {
            "first" => {
                let mv = match parse_number(&rec.mv) {
                    Some(v) => v,
                    None => continue,
                };
                if mv < BIN_RANGE.0 || mv > BIN_RANGE.1 {
                    continue;
                }
                moves.investments.push(mv);
            }
            "second" => {
                let (invested, returned) = match parse_tuple2(&rec.round_result) {
                    Some(pair) => pair,
                    None => continue,
                };
                if returned < 0.0 || returned > invested * 3.0 {
                    continue;
                }
                moves
                    .returns_by_level
                    .entry(invested.round() as i64)
                    .or_default()
                    .push(returned);
            }
            _ => continue,
        }
    }
    moves
}

pub fn view(rows: &[RawRecord], _cfg: &Config) -> GameView {
    let mut moves = human_moves(rows);
    let kept = moves.kept();

    let investor_panel = Panel::new(
        "Trust as investor",
        "Investment ($)",
        vec![
            SampleSet::from_values(Cohort::Human, std::mem::take(&mut moves.investments)),
            SampleSet::from_values(Cohort::Gpt4, baselines::TRUST_INVEST_GPT4.iter().copied()),
            SampleSet::from_values(Cohort::Gpt3, baselines::TRUST_INVEST_GPT3.iter().copied()),
        ],
    );

    let banker_tables: [(&[f64], &[f64]); 3] = [
        (baselines::TRUST_RETURN_10_GPT4, baselines::TRUST_RETURN_10_GPT3),
        (baselines::TRUST_RETURN_50_GPT4, baselines::TRUST_RETURN_50_GPT3),
        (baselines::TRUST_RETURN_100_GPT4, baselines::TRUST_RETURN_100_GPT3),
    ];

    let mut panels = vec![investor_panel];
    for (level, (gpt4, gpt3)) in RETURN_LEVELS.into_iter().zip(banker_tables) {
        let human = moves.returns_by_level.remove(&level).unwrap_or_default();
        panels.push(Panel::new(
            &format!("Trust as banker (${} invested)", level),
            "Return to investor ($)",
            vec![
                SampleSet::from_values(Cohort::Human, human),
                SampleSet::from_values(Cohort::Gpt4, gpt4.iter().copied()),
                SampleSet::from_values(Cohort::Gpt3, gpt3.iter().copied()),
            ],
        ));
    }

    GameView {
        game: Game::TrustInvestment,
        rows_scanned: rows.len() as u64,
        rows_kept: kept,
        panels,
    }
}
