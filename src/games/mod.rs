//! Per-game filter-and-reshape pipelines. Each game module turns raw subject
//! records (plus model capture data) into the uniform sample table the
//! charts consume.

pub mod baselines;
pub mod bomb_risk;
pub mod dictator;
pub mod public_goods;
pub mod trust;
pub mod ultimatum;

use crate::config::Config;
use crate::data::RawRecord;
use crate::logging;
use crate::samples::SampleSet;

/// Games are keyed by their dataset stem under the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    Dictator,
    UltimatumStrategy,
    TrustInvestment,
    PublicGoodsLinearWater,
    BombRisk,
}

impl Game {
    pub fn all() -> [Game; 5] {
        [
            Game::Dictator,
            Game::UltimatumStrategy,
            Game::TrustInvestment,
            Game::PublicGoodsLinearWater,
            Game::BombRisk,
        ]
    }

    pub fn stem(&self) -> &'static str {
        match self {
            Game::Dictator => "dictator",
            Game::UltimatumStrategy => "ultimatum_strategy",
            Game::TrustInvestment => "trust_investment",
            Game::PublicGoodsLinearWater => "public_goods_linear_water",
            Game::BombRisk => "bomb_risk",
        }
    }

    pub fn from_stem(stem: &str) -> Option<Game> {
        Game::all().into_iter().find(|g| g.stem() == stem)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Game::Dictator => "Dictator",
            Game::UltimatumStrategy => "Ultimatum (strategy method)",
            Game::TrustInvestment => "Trust (investment game)",
            Game::PublicGoodsLinearWater => "Public Goods",
            Game::BombRisk => "Bomb Risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Game::Dictator => {
                "The first player splits a $100 endowment with a passive partner. \
                 Human subjects are first-round dictators over the full endowment."
            }
            Game::UltimatumStrategy => {
                "The proposer offers a split of $100; the responder states in advance \
                 the minimum offer they would accept. Both decisions are elicited from \
                 the same player under the strategy method."
            }
            Game::TrustInvestment => {
                "The investor sends $0-100, which triples in transit; the banker then \
                 decides how much of the tripled amount to send back. Banker panels are \
                 keyed by the amount invested."
            }
            Game::PublicGoodsLinearWater => {
                "Four players each contribute $0-20 to a common pool over three rounds. \
                 The chart shows first-round contributions."
            }
            Game::BombRisk => {
                "The player opens 0-100 boxes, one of which hides a bomb. The chart \
                 shows opening-round choices; human densities are reweighted by the \
                 inverse probability of reaching that history."
            }
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.stem())
    }
}

/// One chart-to-be: a titled axis plus the overlaid cohort sample sets.
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub sets: Vec<SampleSet>,
}

impl Panel {
    pub fn new(title: &str, x_label: &str, sets: Vec<SampleSet>) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            sets,
        }
    }
}

/// Everything a game contributes to the dashboard.
#[derive(Debug, Clone)]
pub struct GameView {
    pub game: Game,
    pub rows_scanned: u64,
    pub rows_kept: u64,
    pub panels: Vec<Panel>,
}

/// Dispatch to the right pipeline for the selected game.
pub fn build_view(game: Game, rows: &[RawRecord], cfg: &Config) -> GameView {
    let view = match game {
        Game::Dictator => dictator::view(rows, cfg),
        Game::UltimatumStrategy => ultimatum::view(rows, cfg),
        Game::TrustInvestment => trust::view(rows, cfg),
        Game::PublicGoodsLinearWater => public_goods::view(rows, cfg),
        Game::BombRisk => bomb_risk::view(rows, cfg),
    };
    logging::log_filter(game.stem(), view.rows_scanned, view.rows_kept);
    view
}
