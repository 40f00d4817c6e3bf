//! Self-contained dashboard page: all chart specs are embedded as one JSON
//! blob and rendered client-side as overlaid density histograms. No external
//! assets, so the file works from `file://`, GitHub Pages, or the bundled
//! server.

use serde::Serialize;

use crate::chart::{self, ChartSpec};
use crate::config::Config;
use crate::games::GameView;

#[derive(Debug, Serialize)]
pub struct GameSection {
    pub stem: String,
    pub title: String,
    pub description: String,
    pub rows_scanned: u64,
    pub rows_kept: u64,
    pub charts: Vec<ChartSpec>,
}

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub generated: String,
    pub git_sha: String,
    pub data_dir: String,
    pub nrows: usize,
    pub config_hash: String,
    pub games: Vec<GameSection>,
}

pub fn section_from_view(view: &GameView, max_bins: usize) -> GameSection {
    GameSection {
        stem: view.game.stem().to_string(),
        title: view.game.title().to_string(),
        description: view.game.description().to_string(),
        rows_scanned: view.rows_scanned,
        rows_kept: view.rows_kept,
        charts: view
            .panels
            .iter()
            .map(|p| chart::histogram(p, max_bins))
            .collect(),
    }
}

pub fn dashboard_data(views: &[GameView], cfg: &Config, git_sha: &str) -> DashboardData {
    DashboardData {
        generated: crate::logging::ts_now(),
        git_sha: git_sha.to_string(),
        data_dir: cfg.data_dir.clone(),
        nrows: cfg.nrows,
        config_hash: cfg.config_hash(),
        games: views
            .iter()
            .map(|v| section_from_view(v, cfg.max_bins))
            .collect(),
    }
}

pub fn render_dashboard(data: &DashboardData) -> String {
    let blob = serde_json::to_string(data).unwrap_or_else(|_| "{\"games\":[]}".to_string());
    TEMPLATE.replace("__CHOICELAB_DATA__", &blob)
}

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Choicelab</title>
  <style>
    :root {
      --bg: #0d1117; --bg-raised: #161b22; --bg-inset: #010409;
      --fg: #c9d1d9; --fg-muted: #8b949e; --fg-subtle: #484f58; --fg-bright: #f0f6fc;
      --accent: #58a6ff; --accent-muted: #1a3050;
      --green: #3fb950; --red: #f85149; --yellow: #d29922;
      --border: #30363d; --border-heavy: #484f58;
      --mono: 'JetBrains Mono', 'Fira Code', 'SF Mono', monospace;
      --sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
      --radius: 8px; --radius-sm: 4px;
      --shadow: 0 1px 3px rgba(0,0,0,0.3), 0 1px 2px rgba(0,0,0,0.2);
      --transition: 0.2s ease;
    }
    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    body { font-family: var(--sans); background: var(--bg); color: var(--fg); line-height: 1.6; }

    nav {
      position: sticky; top: 0; z-index: 100;
      background: rgba(13,17,23,0.92); backdrop-filter: blur(12px);
      border-bottom: 1px solid var(--border);
      height: 48px; display: flex; align-items: center;
      padding: 0 1.5rem; gap: 1rem;
    }
    .nav-brand { color: var(--fg-bright); font-weight: 700; font-size: 0.9rem; white-space: nowrap; }
    .nav-status { margin-left: auto; font-size: 0.7rem; font-family: var(--mono); color: var(--fg-muted); }

    main { max-width: 900px; margin: 0 auto; padding: 1.5rem; }
    .hero h1 { color: var(--fg-bright); font-size: 1.4rem; font-weight: 700; letter-spacing: -0.02em; }
    .hero-sub { color: var(--fg-muted); font-size: 0.8rem; font-family: var(--mono); margin-bottom: 1rem; }

    .picker { display: flex; align-items: center; gap: 0.6rem; margin: 1rem 0 1.5rem; }
    .picker label { font-size: 0.78rem; color: var(--fg-muted); }
    select {
      background: var(--bg-raised); color: var(--fg-bright); border: 1px solid var(--border);
      border-radius: var(--radius-sm); padding: 0.35rem 0.6rem; font-size: 0.8rem;
      font-family: var(--mono);
    }
    select:hover { border-color: var(--border-heavy); }

    .section { display: none; }
    .section.active { display: block; }
    .section h2 { color: var(--fg-bright); font-size: 1.05rem; font-weight: 600;
      border-bottom: 1px solid var(--border); padding-bottom: 0.5rem; margin-bottom: 0.5rem; }
    .desc { color: var(--fg-muted); font-size: 0.8rem; margin-bottom: 0.75rem; }
    .tally { font-family: var(--mono); font-size: 0.72rem; color: var(--fg-subtle); margin-bottom: 1rem; }

    .chart-card {
      background: var(--bg-raised); border: 1px solid var(--border); border-radius: var(--radius);
      padding: 0.75rem 0.9rem; margin-bottom: 1rem; box-shadow: var(--shadow);
    }
    .chart-title { font-size: 0.82rem; color: var(--fg-bright); font-weight: 600; margin-bottom: 0.4rem; }
    .legend { display: flex; gap: 1rem; font-size: 0.7rem; color: var(--fg-muted); margin-top: 0.35rem; flex-wrap: wrap; }
    .legend span { display: flex; align-items: center; gap: 0.3rem; font-family: var(--mono); }
    .swatch { width: 10px; height: 10px; border-radius: 2px; display: inline-block; }
    .empty { color: var(--fg-subtle); font-style: italic; font-size: 0.78rem; padding: 1rem; text-align: center;
      border: 1px dashed var(--border); border-radius: var(--radius); }

    footer {
      margin-top: 2rem; padding: 1rem 0; border-top: 1px solid var(--border);
      font-size: 0.7rem; color: var(--fg-subtle); font-family: var(--mono);
      display: flex; justify-content: space-between; flex-wrap: wrap; gap: 0.5rem;
    }
  </style>
</head>
<body>
  <nav>
    <span class="nav-brand">Choicelab</span>
    <span class="nav-status" id="nav-status"></span>
  </nav>

  <main>
    <div class="hero">
      <h1>How do AI chatbot choices compare to humans?</h1>
      <div class="hero-sub" id="hero-sub"></div>
      <p class="desc">Distributions of choices made by ChatGPT-4, ChatGPT-3 and human
      subjects in classic behavioral-economics games. Each curve is a density
      histogram over the first-round sample; densities are normalized so each
      cohort integrates to one.</p>
    </div>

    <div class="picker">
      <label for="game-select">Select a game</label>
      <select id="game-select"></select>
    </div>

    <div id="sections"></div>
  </main>

  <footer>
    <span id="footer-left"></span>
    <span id="footer-right"></span>
  </footer>

  <script>
  const D = __CHOICELAB_DATA__;
  const COLORS = { 'Human': '#8b949e', 'ChatGPT-4': '#3fb950', 'ChatGPT-3': '#58a6ff' };

  function fmt(n, d=0) { return n.toLocaleString(undefined, {minimumFractionDigits:d, maximumFractionDigits:d}); }

  function chartSvg(spec, w=640, h=200) {
    const pad = { l: 42, r: 10, t: 6, b: 26 };
    if (!spec.bin_edges.length) {
      return '<div class="empty">no data for this panel</div>';
    }
    const x0 = spec.bin_edges[0], x1 = spec.bin_edges[spec.bin_edges.length - 1];
    const yMax = Math.max(1e-9, ...spec.series.flatMap(s => s.densities));
    const sx = v => pad.l + (v - x0) / (x1 - x0) * (w - pad.l - pad.r);
    const sy = v => h - pad.b - v / yMax * (h - pad.t - pad.b);

    let svg = `<svg viewBox="0 0 ${w} ${h}" style="width:100%;">`;
    for (let i = 0; i <= 4; i++) {
      const y = pad.t + i / 4 * (h - pad.t - pad.b);
      svg += `<line x1="${pad.l}" y1="${y}" x2="${w-pad.r}" y2="${y}" stroke="var(--border)" stroke-width="0.5"/>`;
    }
    for (const s of spec.series) {
      if (!s.densities.length) continue;
      const color = COLORS[s.label] || 'var(--accent)';
      let pts = `${sx(spec.bin_edges[0]).toFixed(1)},${sy(0).toFixed(1)}`;
      for (let i = 0; i < s.densities.length; i++) {
        const ya = sy(s.densities[i]).toFixed(1);
        pts += ` ${sx(spec.bin_edges[i]).toFixed(1)},${ya}`;
        pts += ` ${sx(spec.bin_edges[i+1]).toFixed(1)},${ya}`;
      }
      pts += ` ${sx(spec.bin_edges[spec.bin_edges.length-1]).toFixed(1)},${sy(0).toFixed(1)}`;
      svg += `<polygon points="${pts}" fill="${color}" fill-opacity="0.3" stroke="${color}" stroke-width="1.5"/>`;
    }
    // hover targets: one invisible rect per bin with a tooltip
    for (let i = 0; i < spec.bin_edges.length - 1; i++) {
      const xa = sx(spec.bin_edges[i]), xb = sx(spec.bin_edges[i+1]);
      const tip = spec.series.map(s =>
        `${s.label}: ${s.densities[i] ? s.densities[i].toFixed(4) : '0'}`).join('\n');
      svg += `<rect x="${xa.toFixed(1)}" y="${pad.t}" width="${(xb-xa).toFixed(1)}" height="${h-pad.t-pad.b}" fill="transparent">`
        + `<title>[${fmt(spec.bin_edges[i],1)}, ${fmt(spec.bin_edges[i+1],1)})\n${tip}</title></rect>`;
    }
    // axes labels
    svg += `<text x="${pad.l-6}" y="${pad.t+8}" fill="var(--fg-subtle)" font-size="9" text-anchor="end" font-family="var(--mono)">${yMax.toFixed(3)}</text>`;
    svg += `<text x="${pad.l-6}" y="${h-pad.b+3}" fill="var(--fg-subtle)" font-size="9" text-anchor="end" font-family="var(--mono)">0</text>`;
    svg += `<text x="${pad.l}" y="${h-6}" fill="var(--fg-subtle)" font-size="9" font-family="var(--mono)">${fmt(x0,1)}</text>`;
    svg += `<text x="${w-pad.r}" y="${h-6}" fill="var(--fg-subtle)" font-size="9" text-anchor="end" font-family="var(--mono)">${fmt(x1,1)}</text>`;
    svg += `<text x="${(pad.l+w-pad.r)/2}" y="${h-6}" fill="var(--fg-muted)" font-size="9" text-anchor="middle">${spec.x_label}</text>`;
    svg += '</svg>';
    return svg;
  }

  function legendHtml(spec) {
    return '<div class="legend">' + spec.series.map(s => {
      const color = COLORS[s.label] || 'var(--accent)';
      return `<span><span class="swatch" style="background:${color};"></span>${s.label} (n=${fmt(s.n)})</span>`;
    }).join('') + '</div>';
  }

  (() => {
    const select = document.getElementById('game-select');
    const container = document.getElementById('sections');

    for (const g of D.games) {
      const opt = document.createElement('option');
      opt.value = g.stem;
      opt.textContent = g.stem;
      select.appendChild(opt);

      const sec = document.createElement('div');
      sec.className = 'section';
      sec.id = 'sec-' + g.stem;
      let html = `<h2>${g.title}</h2><p class="desc">${g.description}</p>`;
      html += `<div class="tally">${fmt(g.rows_kept)} human rows kept of ${fmt(g.rows_scanned)} scanned (cap ${fmt(D.nrows)})</div>`;
      for (const spec of g.charts) {
        html += `<div class="chart-card"><div class="chart-title">${spec.title}</div>`;
        html += chartSvg(spec);
        html += legendHtml(spec);
        html += '</div>';
      }
      sec.innerHTML = html;
      container.appendChild(sec);
    }

    function show(stem) {
      for (const el of container.children) el.classList.remove('active');
      const sec = document.getElementById('sec-' + stem);
      if (sec) sec.classList.add('active');
    }
    select.addEventListener('change', () => show(select.value));
    if (D.games.length) show(D.games[0].stem);
    else container.innerHTML = '<div class="empty">no game datasets found</div>';

    const date = D.generated.split('T')[0];
    document.getElementById('hero-sub').textContent =
      `${date} · git ${D.git_sha} · ${D.games.length} games · ${D.data_dir}/ capped at ${fmt(D.nrows)} rows`;
    document.getElementById('nav-status').textContent = `${D.games.length} games loaded`;
    document.getElementById('footer-left').textContent = `Generated ${D.generated} · git ${D.git_sha}`;
    document.getElementById('footer-right').textContent = `config ${D.config_hash.slice(0, 12)}`;
  })();
  </script>
</body>
</html>"##;
