//! Dashboard generator: loads every game dataset, runs the per-game
//! pipelines, and writes a self-contained HTML dashboard.
//!
//! Output: out/dashboard/index.html (local) + docs/dashboard.html (for
//! GitHub Pages).

use std::fs;
use std::path::Path;

use anyhow::Result;

use choicelab::config::Config;
use choicelab::dashboard::{dashboard_data, render_dashboard};
use choicelab::data::{available_games, load_records};
use choicelab::games::{build_view, Game, GameView};
use choicelab::logging;

fn git_sha() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".into())
}

fn build_views(cfg: &Config) -> Vec<GameView> {
    let mut views = Vec::new();
    for stem in available_games(Path::new(&cfg.data_dir)) {
        let game = match Game::from_stem(&stem) {
            Some(g) => g,
            None => {
                println!("  {}: no pipeline, skipped", stem);
                continue;
            }
        };
        let path = Path::new(&cfg.data_dir).join(format!("{}.csv", stem));
        let loaded = match load_records(&path, cfg.nrows) {
            Ok(l) => l,
            Err(err) => {
                eprintln!("  {}: load failed: {}", stem, err);
                continue;
            }
        };
        logging::log_dataset(
            &path.display().to_string(),
            loaded.rows.len() as u64,
            loaded.bad_rows,
            loaded.warnings.len(),
        );
        let view = build_view(game, &loaded.rows, cfg);
        println!(
            "  {}: {} rows kept of {} scanned, {} panels",
            stem,
            view.rows_kept,
            view.rows_scanned,
            view.panels.len()
        );
        views.push(view);
    }
    views
}

fn main() -> Result<()> {
    println!("=== Choicelab dashboard generator ===");
    let cfg = Config::from_env();
    let views = build_views(&cfg);
    if views.is_empty() {
        println!("  no game datasets under {}/", cfg.data_dir);
    }

    let data = dashboard_data(&views, &cfg, &git_sha());
    let html = render_dashboard(&data);

    let out_dir = Path::new(&cfg.out_dir).join("dashboard");
    fs::create_dir_all(&out_dir)?;
    fs::create_dir_all(&cfg.docs_dir)?;
    let out_path = out_dir.join("index.html");
    let docs_path = Path::new(&cfg.docs_dir).join("dashboard.html");
    fs::write(&out_path, &html)?;
    fs::write(&docs_path, &html)?;

    println!();
    println!(
        "  {} written ({:.1} KB)",
        out_path.display(),
        html.len() as f64 / 1024.0
    );
    println!("  {} written", docs_path.display());
    Ok(())
}
