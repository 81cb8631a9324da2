use crate::models::{Dashboard, ACTIVITY_PRESETS};
use crate::time_utils::day_key;

pub fn render_index(dashboard: &Dashboard) -> String {
    let (start, end) = dashboard
        .range
        .map(|range| (day_key(range.start), day_key(range.end)))
        .unwrap_or_default();

    INDEX_HTML
        .replace("{{PRESETS}}", &preset_buttons())
        .replace("{{RANK_EMOJI}}", &escape_html(&dashboard.rank.emoji))
        .replace("{{RANK_STATUS}}", &escape_html(&dashboard.rank.status))
        .replace("{{PROGRESS}}", &format!("{:.1}", dashboard.rank.progress_percent))
        .replace("{{TOTAL}}", &dashboard.total_points.to_string())
        .replace("{{TODAY}}", &dashboard.goal.today_points.to_string())
        .replace("{{GOAL}}", &dashboard.goal.daily_goal.to_string())
        .replace("{{GOAL_DAYS}}", &dashboard.goal.met_goal_count.to_string())
        .replace("{{START}}", &start)
        .replace("{{END}}", &end)
}

fn preset_buttons() -> String {
    ACTIVITY_PRESETS
        .iter()
        .map(|preset| {
            let class = if preset.points < 0.0 { "btn-log negative" } else { "btn-log" };
            let sign = if preset.points >= 0.0 { "+" } else { "" };
            format!(
                r#"<form method="post" action="/log/{kind}" data-kind="{kind}" data-points="{points}" class="preset-form"><button class="{class}" type="submit">{label} {sign}{points}</button></form>"#,
                kind = preset.kind,
                label = preset.label,
                points = preset.points,
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Activity Rank</title>
  <style>
    :root {
      --bg: #2b3035;
      --card: #353b40;
      --panel: #444b52;
      --ink: #d4d4d4;
      --muted: #b0b0b0;
      --accent: #78c078;
      --accent-soft: rgba(120, 192, 120, 0.2);
      --earned: #4caf50;
      --remaining: #5a626b;
      --negative: #d9735b;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      display: grid;
      gap: 22px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.15rem;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      padding: 20px;
      border: 1px solid var(--panel);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 22px;
    }

    .presets {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .custom {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      margin-top: 14px;
    }

    input {
      background: var(--panel);
      color: var(--ink);
      border: none;
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 0.95rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: #1f2326;
    }

    button.negative {
      background: var(--negative);
    }

    button.secondary {
      background: var(--panel);
      color: var(--ink);
    }

    .rank {
      display: flex;
      align-items: center;
      gap: 18px;
    }

    #rank {
      font-size: 3.2rem;
    }

    .progress {
      height: 14px;
      border-radius: 999px;
      background: var(--panel);
      overflow: hidden;
      margin-top: 10px;
    }

    #progress-bar {
      height: 100%;
      background: var(--accent);
      transition: width 300ms ease;
    }

    .muted {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .stat-row {
      display: flex;
      gap: 24px;
      margin-top: 12px;
    }

    .stat-row strong {
      display: block;
      font-size: 1.6rem;
    }

    #line-chart,
    #goal-chart {
      width: 100%;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-area {
      fill: var(--accent-soft);
      stroke: none;
    }

    .chart-point {
      fill: #a8e0a8;
      stroke: var(--card);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: var(--panel);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .status {
      min-height: 1.2em;
      color: var(--accent);
    }

    .status[data-type="error"] {
      color: var(--negative);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Activity Rank</h1>
      <p class="muted">Log activities, climb the ranks, and hit the daily goal.</p>
    </header>

    <section class="card">
      <h2>Log activity</h2>
      <div class="presets">
        {{PRESETS}}
      </div>
      <form id="custom-form" class="custom">
        <input id="custom-type" name="type" placeholder="Activity" required />
        <input id="custom-points" name="points" type="number" step="any" placeholder="Points" required />
        <button type="submit">Log</button>
      </form>
      <div class="status" id="activity-status"></div>
    </section>

    <section class="card rank">
      <div id="rank">{{RANK_EMOJI}}</div>
      <div style="flex: 1">
        <div id="rank-status">{{RANK_STATUS}}</div>
        <div class="progress"><div id="progress-bar" style="width: {{PROGRESS}}%"></div></div>
        <div class="muted"><span id="total-points">{{TOTAL}}</span> total points</div>
      </div>
    </section>

    <section class="grid">
      <div class="card">
        <h2>Daily points</h2>
        <svg id="line-chart" viewBox="0 0 600 260" role="img" aria-label="Daily points"></svg>
      </div>
      <div class="card">
        <h2>Today's goal</h2>
        <svg id="goal-chart" viewBox="0 0 200 200" role="img" aria-label="Goal progress"></svg>
        <div class="stat-row">
          <div><strong id="goal-progress">{{TODAY}}</strong><span class="muted">of {{GOAL}} today</span></div>
          <div><strong id="goal-days">{{GOAL_DAYS}}</strong><span class="muted">goal days this week</span></div>
        </div>
      </div>
    </section>

    <section class="card">
      <h2>Date range</h2>
      <form id="range-form" class="custom" method="get" action="/">
        <input id="start-date" name="start" type="date" value="{{START}}" />
        <input id="end-date" name="end" type="date" value="{{END}}" />
        <button type="submit">Filter</button>
        <button id="range-clear" class="secondary" type="button">Clear</button>
      </form>
      <p class="muted">Both dates are needed to filter; days use this server's local calendar.</p>
    </section>
  </main>

  <script>
    const byId = (id) => document.getElementById(id);

    const setText = (id, value) => {
      const el = byId(id);
      if (el) {
        el.textContent = value;
      }
    };

    const setStatus = (message, type) => {
      const el = byId('activity-status');
      if (!el) {
        return;
      }
      el.textContent = message;
      el.dataset.type = type || '';
    };

    const rangeQuery = () => {
      const start = byId('start-date');
      const end = byId('end-date');
      const params = new URLSearchParams();
      if (start && start.value && end && end.value) {
        params.set('start', start.value);
        params.set('end', end.value);
      }
      const query = params.toString();
      return query ? `?${query}` : '';
    };

    const renderLineChart = (points) => {
      const chart = byId('line-chart');
      if (!chart) {
        return;
      }
      if (!points.length) {
        chart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const padX = 44;
      const padY = 34;
      const top = 20;

      const values = points.map((point) => point.points);
      let min = Math.min(0, ...values);
      let max = Math.max(0, ...values);
      if (min === max) {
        max += 1;
      }
      const range = max - min;
      const step = points.length > 1 ? (width - padX * 2) / (points.length - 1) : 0;
      const x = (index) => padX + index * step;
      const y = (value) => height - padY - ((value - min) * (height - top - padY)) / range;

      const line = points.map((point, i) => `${i === 0 ? 'M' : 'L'} ${x(i).toFixed(2)} ${y(point.points).toFixed(2)}`).join(' ');
      const area = `${line} L ${x(points.length - 1).toFixed(2)} ${y(min).toFixed(2)} L ${x(0).toFixed(2)} ${y(min).toFixed(2)} Z`;

      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = min + (range * i) / 4;
        grid += `<line class="chart-grid" x1="${padX}" y1="${y(value)}" x2="${width - padX}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${padX - 8}" y="${y(value) + 4}" text-anchor="end">${Math.round(value * 10) / 10}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(points.length / 8));
      const labels = points
        .map((point, i) => (i % labelEvery === 0
          ? `<text class="chart-label" x="${x(i)}" y="${height - padY + 18}" text-anchor="middle">${point.date.slice(5)}</text>`
          : ''))
        .join('');
      const dots = points
        .map((point, i) => `<circle class="chart-point" cx="${x(i)}" cy="${y(point.points)}" r="4"><title>Points: ${point.points}</title></circle>`)
        .join('');

      chart.innerHTML = `${grid}<path class="chart-area" d="${area}" /><path class="chart-line" d="${line}" />${dots}${labels}`;
    };

    const renderGoalChart = (goal) => {
      const chart = byId('goal-chart');
      if (!chart) {
        return;
      }
      const earned = Math.max(0, goal.today_points);
      const total = earned + goal.remaining;
      const share = total > 0 ? earned / total : 0;
      const radius = 70;
      const circumference = 2 * Math.PI * radius;
      chart.innerHTML = `
        <circle cx="100" cy="100" r="${radius}" fill="none" stroke="var(--remaining)" stroke-width="28" />
        <circle cx="100" cy="100" r="${radius}" fill="none" stroke="var(--earned)" stroke-width="28"
          stroke-dasharray="${(share * circumference).toFixed(2)} ${circumference.toFixed(2)}"
          transform="rotate(-90 100 100)" />
        <text class="chart-label" x="100" y="104" text-anchor="middle">${Math.round(share * 100)}%</text>`;
    };

    const renderRank = (rank) => {
      setText('rank', rank.emoji);
      setText('rank-status', rank.status);
      setText('total-points', rank.total_points);
      const bar = byId('progress-bar');
      if (bar) {
        bar.style.width = `${rank.at_max_tier ? 100 : Math.min(100, rank.progress_percent)}%`;
      }
    };

    const render = (dashboard) => {
      renderLineChart(dashboard.daily_points);
      renderGoalChart(dashboard.goal);
      renderRank(dashboard.rank);
      setText('goal-progress', dashboard.goal.today_points);
      setText('goal-days', dashboard.goal.met_goal_count);
    };

    const refresh = async () => {
      const res = await fetch(`/api/dashboard${rangeQuery()}`);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to load dashboard');
      }
      render(await res.json());
    };

    const logActivity = async (type, points) => {
      const res = await fetch('/api/activities', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ type, points })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      const body = await res.json();
      setStatus(body.status, 'ok');
      await refresh();
    };

    document.querySelectorAll('.preset-form').forEach((form) => {
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        logActivity(form.dataset.kind, Number(form.dataset.points)).catch((err) => setStatus(err.message, 'error'));
      });
    });

    const customForm = byId('custom-form');
    if (customForm) {
      customForm.addEventListener('submit', (event) => {
        event.preventDefault();
        const type = byId('custom-type').value.trim();
        const points = Number(byId('custom-points').value);
        logActivity(type, points).catch((err) => setStatus(err.message, 'error'));
      });
    }

    const rangeForm = byId('range-form');
    if (rangeForm) {
      rangeForm.addEventListener('submit', (event) => {
        event.preventDefault();
        history.replaceState(null, '', `/${rangeQuery()}`);
        refresh().catch((err) => setStatus(err.message, 'error'));
      });
    }

    const clear = byId('range-clear');
    if (clear) {
      clear.addEventListener('click', () => {
        byId('start-date').value = '';
        byId('end-date').value = '';
        history.replaceState(null, '', '/');
        refresh().catch((err) => setStatus(err.message, 'error'));
      });
    }

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
