//! Dashboard server: rebuilds the pipelines at startup, then serves the
//! dashboard page and the underlying chart specs as JSON.
//! Run with: cargo run --bin serve

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;

use choicelab::config::Config;
use choicelab::dashboard::{dashboard_data, render_dashboard, DashboardData};
use choicelab::data::{available_games, load_records};
use choicelab::games::{build_view, Game};
use choicelab::logging;

fn build_data(cfg: &Config) -> DashboardData {
    let mut views = Vec::new();
    for stem in available_games(Path::new(&cfg.data_dir)) {
        let game = match Game::from_stem(&stem) {
            Some(g) => g,
            None => continue,
        };
        let path = Path::new(&cfg.data_dir).join(format!("{}.csv", stem));
        match load_records(&path, cfg.nrows) {
            Ok(loaded) => views.push(build_view(game, &loaded.rows, cfg)),
            Err(err) => eprintln!("skipping {}: {}", stem, err),
        }
    }
    dashboard_data(&views, cfg, "serve")
}

fn main() {
    let cfg = Config::from_env();
    let data = build_data(&cfg);
    let html = render_dashboard(&data);

    let listener = TcpListener::bind(format!("127.0.0.1:{}", cfg.port)).expect("Failed to bind");

    println!("Choicelab server running at http://localhost:{}", cfg.port);
    println!();
    println!("Endpoints:");
    println!("  GET /               - Dashboard page");
    println!("  GET /api/games      - Available games");
    println!("  GET /api/game/<id>  - Chart specs for one game");
    println!("  GET /api/health     - Health check");
    println!();

    for stream in listener.incoming() {
        let mut stream = match stream {
            Ok(s) => s,
            Err(_) => continue,
        };

        let buf_reader = BufReader::new(&stream);
        let request_line = buf_reader.lines().next();

        let request = match request_line {
            Some(Ok(line)) => line,
            _ => continue,
        };
        let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

        let (status, content_type, body) = route(&path, &data, &html);
        logging::log_request("GET", &path, status_code(status));

        let response = format!(
            "HTTP/1.1 {}\r\n\
             Content-Type: {}\r\n\
             Access-Control-Allow-Origin: *\r\n\
             Content-Length: {}\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );

        let _ = stream.write_all(response.as_bytes());
    }
}

fn status_code(status: &str) -> u16 {
    status
        .split_whitespace()
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

fn route(path: &str, data: &DashboardData, html: &str) -> (&'static str, &'static str, String) {
    if path == "/" || path == "/index.html" {
        ("200 OK", "text/html; charset=utf-8", html.to_string())
    } else if path == "/api/games" {
        let stems: Vec<&str> = data.games.iter().map(|g| g.stem.as_str()).collect();
        (
            "200 OK",
            "application/json",
            serde_json::to_string(&stems).unwrap_or_else(|_| "[]".to_string()),
        )
    } else if let Some(stem) = path.strip_prefix("/api/game/") {
        match data.games.iter().find(|g| g.stem == stem) {
            Some(section) => (
                "200 OK",
                "application/json",
                serde_json::to_string(section).unwrap_or_else(|_| "{}".to_string()),
            ),
            None => (
                "404 NOT FOUND",
                "application/json",
                format!("{{\"error\":\"unknown game: {}\"}}", stem),
            ),
        }
    } else if path == "/api/health" {
        ("200 OK", "application/json", r#"{"status":"ok"}"#.to_string())
    } else {
        ("404 NOT FOUND", "text/plain", "Not Found".to_string())
    }
}
