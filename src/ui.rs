pub fn render_index(active_date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", active_date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Cut Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4ef;
      --bg-2: #bfe0cc;
      --ink: #23302a;
      --accent: #2f9e6a;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f1e8 60%, #f4f8f5 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 24px 14px 40px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 22px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 0;
      color: #5f6b64;
      font-size: 0.95rem;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .fields {
      display: grid;
      grid-template-columns: repeat(2, minmax(0, 1fr));
      gap: 12px;
    }

    label {
      display: grid;
      gap: 4px;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7d857f;
    }

    input[type="text"],
    input[type="date"] {
      font: inherit;
      font-size: 1rem;
      text-transform: none;
      letter-spacing: normal;
      color: var(--ink);
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      width: 100%;
    }

    .flags {
      display: grid;
      grid-template-columns: repeat(3, minmax(0, 1fr));
      gap: 8px;
    }

    .flags label {
      display: flex;
      align-items: center;
      gap: 8px;
      font-weight: 600;
      color: var(--accent-2);
    }

    .flags input {
      width: 20px;
      height: 20px;
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      justify-content: flex-end;
    }

    button,
    .file-btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      text-transform: none;
      letter-spacing: normal;
      background: var(--accent-2);
      color: white;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-danger {
      background: var(--danger);
    }

    .file-btn input {
      display: none;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      color: #6b645d;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .panel[hidden] {
      display: none;
    }

    #chart {
      width: 100%;
      height: 240px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
    }

    .stat {
      border-radius: 16px;
      padding: 14px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @media (max-width: 600px) {
      .app {
        padding: 22px 16px;
      }
      .flags {
        grid-template-columns: repeat(2, minmax(0, 1fr));
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Cut Tracker</h1>
      <p class="subtitle" id="goal-line">Loading goal...</p>
    </header>

    <section class="card">
      <div class="fields">
        <label>Date<input type="date" id="date" value="{{DATE}}" /></label>
        <label>Weight (kg)<input type="text" inputmode="decimal" data-field="weight" placeholder="74.6" /></label>
        <label>Waist (cm)<input type="text" inputmode="decimal" data-field="waist" placeholder="81" /></label>
        <label>Calories<input type="text" inputmode="numeric" data-field="calories" placeholder="2000" /></label>
        <label>Protein (g)<input type="text" inputmode="numeric" data-field="protein" placeholder="160" /></label>
        <label>Carbs (g)<input type="text" inputmode="numeric" data-field="carbs" placeholder="180" /></label>
        <label>Fat (g)<input type="text" inputmode="numeric" data-field="fat" placeholder="45" /></label>
        <label>Steps<input type="text" inputmode="numeric" data-field="steps" placeholder="8000" /></label>
      </div>
      <p class="subtitle">Today's workout: <b id="plan">-</b></p>
      <div class="flags">
        <label><input type="checkbox" data-flag="push" />Push</label>
        <label><input type="checkbox" data-flag="pull" />Pull</label>
        <label><input type="checkbox" data-flag="legs" />Legs</label>
        <label><input type="checkbox" data-flag="full" />Full</label>
        <label><input type="checkbox" data-flag="hiit" />HIIT</label>
        <label><input type="checkbox" data-flag="liss" />LISS</label>
      </div>
      <input type="text" data-field="notes" placeholder="Notes: energy, sleep, cravings" />
      <div class="actions">
        <button type="button" id="export-btn">Export</button>
        <label class="file-btn">Import<input type="file" id="import-file" accept="application/json" /></label>
        <button type="button" class="btn-danger" id="reset-btn">Reset</button>
      </div>
    </section>

    <section class="card">
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-tab="trend" role="tab" aria-selected="true">Weight trend</button>
        <button class="tab" type="button" data-tab="weekly" role="tab" aria-selected="false">Weekly report</button>
        <button class="tab" type="button" data-tab="guide" role="tab" aria-selected="false">Guide</button>
      </div>

      <div class="panel" data-panel="trend">
        <p class="hint">Only days with a logged weight are plotted.</p>
        <svg id="chart" viewBox="0 0 600 240" aria-label="Weight trend" role="img"></svg>
      </div>

      <div class="panel" data-panel="weekly" hidden>
        <h2 id="week-title">Week</h2>
        <div class="metrics">
          <div class="stat"><span class="label">Avg weight (kg)</span><span class="value" id="avg-weight">-</span></div>
          <div class="stat"><span class="label">Avg waist (cm)</span><span class="value" id="avg-waist">-</span></div>
          <div class="stat"><span class="label">Avg calories</span><span class="value" id="avg-calories">-</span></div>
          <div class="stat"><span class="label">Avg protein (g)</span><span class="value" id="avg-protein">-</span></div>
          <div class="stat"><span class="label">Avg carbs (g)</span><span class="value" id="avg-carbs">-</span></div>
          <div class="stat"><span class="label">Avg fat (g)</span><span class="value" id="avg-fat">-</span></div>
          <div class="stat"><span class="label">Total steps</span><span class="value" id="total-steps">-</span></div>
        </div>
        <div class="metrics" id="tally"></div>
      </div>

      <div class="panel" data-panel="guide" hidden>
        <h2>Daily targets</h2>
        <ul>
          <li>Calories 2,000 to 2,100 kcal</li>
          <li>Protein 150 to 170 g, carbs 160 to 200 g, fat 40 to 50 g</li>
          <li>Water 2.5 to 3 L, sleep 7 h or more</li>
        </ul>
        <h2>Weekly routine</h2>
        <ul>
          <li>Mon: Upper push + HIIT 20 min</li>
          <li>Tue: Lower body + LISS 40 min</li>
          <li>Wed: LISS 40 min</li>
          <li>Thu: Upper pull + HIIT 20 min</li>
          <li>Fri: Full body + LISS 40 min</li>
          <li>Sat: LISS 40 min</li>
          <li>Sun: Rest / walk</li>
        </ul>
        <p class="hint">Data stays on this machine. Use Export and Import for backups.</p>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const dateEl = document.getElementById('date');
    const statusEl = document.getElementById('status');
    const goalLineEl = document.getElementById('goal-line');
    const planEl = document.getElementById('plan');
    const chartEl = document.getElementById('chart');
    const weekTitleEl = document.getElementById('week-title');
    const tallyEl = document.getElementById('tally');
    const fieldInputs = Array.from(document.querySelectorAll('[data-field]'));
    const flagInputs = Array.from(document.querySelectorAll('[data-flag]'));
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panels = Array.from(document.querySelectorAll('.panel'));

    let activeDate = dateEl.value;
    let activeTab = 'trend';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const flash = (message) => {
      setStatus(message, 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const request = async (method, url, body) => {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = typeof body === 'string' ? body : JSON.stringify(body);
      }
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;',
      })[ch]);

    const formatStat = (value) => (typeof value === 'number' ? String(value) : '-');

    const fillRecord = (record) => {
      fieldInputs.forEach((input) => {
        input.value = record[input.dataset.field] || '';
      });
      flagInputs.forEach((input) => {
        input.checked = Boolean(record.workout[input.dataset.flag]);
      });
    };

    const applyState = (state) => {
      activeDate = state.active_date;
      dateEl.value = state.active_date;
      planEl.textContent = state.plan;
      const goal = state.goal;
      goalLineEl.textContent = `${goal.height}cm, start ${goal.startWeight}kg to target ${goal.targetWeight}kg, body fat ${goal.startBodyFat}% to ${goal.targetBodyFat}%`;
      fillRecord(state.record);
    };

    const renderLineChart = (chart) => {
      const points = chart.points;
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No weights logged yet</text>';
        return;
      }

      const width = 600;
      const height = 240;
      const paddingX = 44;
      const paddingY = 34;
      const top = 20;
      const min = chart.y_min;
      const max = chart.y_max === chart.y_min ? chart.y_min + 1 : chart.y_max;
      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.weight).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${value.toFixed(1)}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(points.length / 10));
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${escapeHtml(point.label)}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.weight)}" r="4"><title>${escapeHtml(point.date)}: ${escapeHtml(point.weight)}kg</title></circle>`)
        .join('');

      chartEl.innerHTML = `
        ${grid}
        <path class="chart-line" d="${path}" />
        ${circles}
        ${xLabels}
      `;
    };

    const renderWeekly = (summary) => {
      weekTitleEl.textContent = `${summary.week}: ${summary.start_date} to ${summary.end_date}`;
      document.getElementById('avg-weight').textContent = formatStat(summary.avg_weight);
      document.getElementById('avg-waist').textContent = formatStat(summary.avg_waist);
      document.getElementById('avg-calories').textContent = formatStat(summary.avg_calories);
      document.getElementById('avg-protein').textContent = formatStat(summary.avg_protein);
      document.getElementById('avg-carbs').textContent = formatStat(summary.avg_carbs);
      document.getElementById('avg-fat').textContent = formatStat(summary.avg_fat);
      document.getElementById('total-steps').textContent = formatStat(summary.total_steps);
      tallyEl.innerHTML = Object.entries(summary.workouts)
        .map(([kind, count]) => `<div class="stat"><span class="label">${escapeHtml(kind)}</span><span class="value">${escapeHtml(count)}</span></div>`)
        .join('');
    };

    const loadActiveTab = async () => {
      if (activeTab === 'trend') {
        renderLineChart(await request('GET', '/api/trend'));
      } else if (activeTab === 'weekly') {
        renderWeekly(await request('GET', `/api/weekly?date=${activeDate}`));
      }
    };

    const setActiveTab = (tab) => {
      activeTab = tab;
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      panels.forEach((panel) => {
        panel.hidden = panel.dataset.panel !== tab;
      });
      loadActiveTab().catch((err) => setStatus(err.message, 'error'));
    };

    const saveDay = async (patch) => {
      setStatus('Saving...', 'info');
      fillRecord(await request('PATCH', `/api/days/${activeDate}`, patch));
      await loadActiveTab();
      flash('Saved');
    };

    const refresh = async () => {
      applyState(await request('GET', '/api/state'));
      await loadActiveTab();
    };

    dateEl.addEventListener('change', () => {
      request('PUT', '/api/active-date', { date: dateEl.value })
        .then(applyState)
        .then(loadActiveTab)
        .catch((err) => setStatus(err.message, 'error'));
    });

    fieldInputs.forEach((input) => {
      input.addEventListener('change', () => {
        saveDay({ [input.dataset.field]: input.value }).catch((err) => setStatus(err.message, 'error'));
      });
    });

    flagInputs.forEach((input) => {
      input.addEventListener('change', () => {
        saveDay({ workout: { [input.dataset.flag]: input.checked } }).catch((err) => setStatus(err.message, 'error'));
      });
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    document.getElementById('export-btn').addEventListener('click', () => {
      window.location.href = '/api/export';
    });

    document.getElementById('import-file').addEventListener('change', async (event) => {
      const file = event.target.files && event.target.files[0];
      if (!file) {
        return;
      }
      try {
        const text = await file.text();
        applyState(await request('POST', '/api/import', text));
        await loadActiveTab();
        flash('Imported');
      } catch (err) {
        setStatus(`Import failed: ${err.message}`, 'error');
      } finally {
        event.target.value = '';
      }
    });

    document.getElementById('reset-btn').addEventListener('click', () => {
      if (!window.confirm('Delete every record?')) {
        return;
      }
      request('POST', '/api/reset', { confirm: true })
        .then(applyState)
        .then(loadActiveTab)
        .then(() => flash('Cleared'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
