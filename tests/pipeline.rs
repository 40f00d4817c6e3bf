//! End-to-end pipeline tests: synthetic per-game fixtures flow through the
//! real loader, the per-game filters, and the chart binning, and the
//! resulting specs land in the rendered dashboard.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use choicelab::chart::histogram;
use choicelab::config::Config;
use choicelab::dashboard::{dashboard_data, render_dashboard};
use choicelab::data::load_records;
use choicelab::games::{bomb_risk, build_view, Game};
use choicelab::samples::Cohort;

const HEADER: &str = "UserID,Role,Round,Total,move,roundResult,gameType,groupSize";

fn write_csv(dir: &TempDir, name: &str, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut out = String::from(HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    fs::write(&path, out).unwrap();
    path
}

fn test_config(dir: &TempDir) -> Config {
    let mut cfg = Config::from_env();
    cfg.data_dir = dir.path().display().to_string();
    cfg.records_dir = dir.path().join("records").display().to_string();
    cfg
}

// ---------------------------------------------------------------------------
// Dictator: first-round full-endowment filter survives the real loader
// ---------------------------------------------------------------------------
#[test]
fn dictator_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "dictator.csv",
        &[
            "u1,first,1,100,40,None,dictator,",
            "u2,first,1,100,0,None,dictator,",
            "u3,second,1,100,40,None,dictator,",
            "u4,first,2,100,40,None,dictator,",
            "u5,first,1,100,None,None,dictator,",
            "u6,first,1,100,140,None,dictator,",
        ],
    );
    let cfg = test_config(&dir);
    let loaded = load_records(&path, cfg.nrows).unwrap();
    assert_eq!(loaded.rows.len(), 6);

    let view = build_view(Game::Dictator, &loaded.rows, &cfg);
    assert_eq!(view.rows_kept, 2);
    let human = &view.panels[0].sets[0];
    assert_eq!(human.cohort, Cohort::Human);
    assert_eq!(human.len(), 2);

    // the chart over this panel integrates to one per non-empty series
    let spec = histogram(&view.panels[0], cfg.max_bins);
    let width = spec.bin_edges[1] - spec.bin_edges[0];
    for series in spec.series.iter().filter(|s| s.n > 0) {
        let area: f64 = series.densities.iter().map(|d| d * width).sum();
        assert!((area - 1.0).abs() < 1e-9);
    }
}

// ---------------------------------------------------------------------------
// Ultimatum: quoted tuple moves parse through the loader into both panels
// ---------------------------------------------------------------------------
#[test]
fn ultimatum_tuples_survive_csv_quoting() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "ultimatum_strategy.csv",
        &[
            "u1,player,1,100,\"(60, 40)\",None,ultimatum_strategy,",
            "u2,player,1,100,\"(50, 50)\",None,ultimatum_strategy,",
            "u3,player,1,100,None,None,ultimatum_strategy,",
            "u4,player,1,100,\"(120, 40)\",None,ultimatum_strategy,",
        ],
    );
    let cfg = test_config(&dir);
    let loaded = load_records(&path, cfg.nrows).unwrap();
    let view = build_view(Game::UltimatumStrategy, &loaded.rows, &cfg);

    assert_eq!(view.panels.len(), 2);
    let propose: Vec<f64> = view.panels[0].sets[0].samples.iter().map(|s| s.value).collect();
    let accept: Vec<f64> = view.panels[1].sets[0].samples.iter().map(|s| s.value).collect();
    assert_eq!(propose, vec![60.0, 50.0]);
    assert_eq!(accept, vec![40.0, 50.0]);
}

// ---------------------------------------------------------------------------
// Trust: investor and banker branches populate separate panels
// ---------------------------------------------------------------------------
#[test]
fn trust_branches_feed_keyed_panels() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "trust_investment.csv",
        &[
            "u1,first,1,100,50,None,trust_investment,",
            "u2,second,1,100,30,\"(10, 20)\",trust_investment,",
            "u3,second,1,100,30,\"(100, 250)\",trust_investment,",
            "u4,second,1,100,30,\"(10, 40)\",trust_investment,", // over 3x cap
            "u5,first,2,100,50,None,trust_investment,",          // later round
        ],
    );
    let cfg = test_config(&dir);
    let loaded = load_records(&path, cfg.nrows).unwrap();
    let view = build_view(Game::TrustInvestment, &loaded.rows, &cfg);

    assert_eq!(view.panels.len(), 4);
    assert_eq!(view.rows_kept, 3);
    assert_eq!(view.panels[0].sets[0].len(), 1); // investor
    assert_eq!(view.panels[1].sets[0].len(), 1); // $10 banker
    assert_eq!(view.panels[2].sets[0].len(), 0); // $50 banker: none kept
    assert_eq!(view.panels[3].sets[0].len(), 1); // $100 banker
}

// ---------------------------------------------------------------------------
// Public Goods: contributor filter + model capture files
// ---------------------------------------------------------------------------
#[test]
fn public_goods_reads_model_captures() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "public_goods_linear_water.csv",
        &[
            "u1,contributor,1,20,10,None,public_goods_linear_water,4",
            "u2,contributor,2,20,5,None,public_goods_linear_water,4",
            "u3,contributor,1,20,15,None,public_goods_linear_water,3", // wrong group
            "u4,contributor,1,20,25,None,public_goods_linear_water,4", // over endowment
        ],
    );
    let records_dir = dir.path().join("records");
    fs::create_dir_all(&records_dir).unwrap();
    fs::write(
        records_dir.join("pg_gpt4.json"),
        r#"{"choices": [[20, 1], [15, 0]]}"#,
    )
    .unwrap();
    fs::write(
        records_dir.join("pg_turbo.json"),
        r#"{"choices": [[10, 1]]}"#,
    )
    .unwrap();

    let mut cfg = test_config(&dir);
    cfg.pg_gpt4_files = vec!["pg_gpt4.json".to_string()];
    cfg.pg_gpt3_files = vec!["pg_turbo.json".to_string()];

    let loaded = load_records(&path, cfg.nrows).unwrap();
    let view = build_view(Game::PublicGoodsLinearWater, &loaded.rows, &cfg);

    let panel = &view.panels[0];
    assert_eq!(panel.sets[0].len(), 1); // round-1 human contribution only
    let gpt4: Vec<f64> = panel.sets[1].samples.iter().map(|s| s.value).collect();
    assert_eq!(gpt4, vec![20.0, 15.0]);
    assert_eq!(panel.sets[2].len(), 1);
    assert_eq!(view.rows_kept, 2); // rounds 1 and 2 both count as kept
}

// ---------------------------------------------------------------------------
// Bomb Risk: prefix aggregation, IPW weights, model scenario replay
// ---------------------------------------------------------------------------
#[test]
fn bomb_risk_weights_and_replay() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "bomb_risk.csv",
        &[
            "u1,player,1,100,40,SAFE,bomb_risk,",
            "u1,player,2,60,60,BOMB,bomb_risk,",
            "u2,player,1,100,10,SAFE,bomb_risk,",
            "u3,player,1,100,999,SAFE,bomb_risk,", // bad user, dropped
        ],
    );
    let records_dir = dir.path().join("records");
    fs::create_dir_all(&records_dir).unwrap();
    fs::write(
        records_dir.join("bomb_gpt4.json"),
        r#"{"choices": [[50, 30]], "scenarios": [[1, 0]]}"#,
    )
    .unwrap();

    let mut cfg = test_config(&dir);
    cfg.bomb_gpt4_files = vec!["bomb_gpt4.json".to_string()];
    cfg.bomb_gpt3_files = vec!["missing.json".to_string()];

    let loaded = load_records(&path, cfg.nrows).unwrap();

    let prefixes = bomb_risk::human_prefix_samples(&loaded.rows);
    assert_eq!(prefixes.bad_users, 1);
    assert_eq!(prefixes.by_prefix[""].len(), 2);
    assert!((prefixes.by_prefix["1"][0].weight - 1.0 / 60.0).abs() < 1e-12);

    let view = build_view(Game::BombRisk, &loaded.rows, &cfg);
    let panel = &view.panels[0];
    // opening-round panel: two humans, one gpt4 session, gpt3 file missing
    assert_eq!(panel.sets[0].len(), 2);
    assert_eq!(panel.sets[1].len(), 1);
    assert_eq!(panel.sets[1].samples[0].value, 50.0);
    assert!(panel.sets[2].is_empty());
}

// ---------------------------------------------------------------------------
// Dashboard: every view lands in the rendered page
// ---------------------------------------------------------------------------
#[test]
fn dashboard_renders_every_game_section() {
    let dir = TempDir::new().unwrap();
    write_csv(&dir, "dictator.csv", &["u1,first,1,100,40,None,dictator,"]);
    write_csv(
        &dir,
        "ultimatum_strategy.csv",
        &["u1,player,1,100,\"(60, 40)\",None,ultimatum_strategy,"],
    );
    let cfg = test_config(&dir);

    let mut views = Vec::new();
    for game in [Game::Dictator, Game::UltimatumStrategy] {
        let path = Path::new(&cfg.data_dir).join(format!("{}.csv", game.stem()));
        let loaded = load_records(&path, cfg.nrows).unwrap();
        views.push(build_view(game, &loaded.rows, &cfg));
    }

    let data = dashboard_data(&views, &cfg, "test");
    let html = render_dashboard(&data);
    assert!(html.contains("\"stem\":\"dictator\""));
    assert!(html.contains("\"stem\":\"ultimatum_strategy\""));
    assert!(html.contains("Minimum proposal to accept ($)"));
    assert!(!html.contains("__CHOICELAB_DATA__"));
}
