use crate::models::{DashboardResponse, Mood, RecommendationsView, TrendPoint};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Recorded,
    SelectMood,
}

impl Notice {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "recorded" => Some(Notice::Recorded),
            "select-mood" => Some(Notice::SelectMood),
            _ => None,
        }
    }

    pub fn location(self) -> &'static str {
        match self {
            Notice::Recorded => "/dashboard?notice=recorded",
            Notice::SelectMood => "/dashboard?notice=select-mood",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Notice::Recorded => "Mood recorded! Thank you for checking in with yourself today.",
            Notice::SelectMood => "Please select a mood. Choose how you're feeling today.",
        }
    }

    fn kind(self) -> &'static str {
        match self {
            Notice::Recorded => "ok",
            Notice::SelectMood => "error",
        }
    }
}

pub fn render_hero() -> String {
    HERO_HTML.to_string()
}

pub fn render_dashboard(view: &DashboardResponse, notice: Option<Notice>) -> String {
    let summary = &view.summary;
    let tracked = match summary.total_checkins {
        1 => "1 mood tracked".to_string(),
        n => format!("{n} moods tracked"),
    };
    let average = summary
        .average_mood
        .map(|avg| format!("{avg}"))
        .unwrap_or_else(|| "--".to_string());

    DASHBOARD_HTML
        .replace("{{TRACKED}}", &tracked)
        .replace("{{MOOD_OPTIONS}}", &mood_options())
        .replace("{{STATS_HIDDEN}}", if summary.total_checkins == 0 { "hidden" } else { "" })
        .replace("{{TOTAL}}", &summary.total_checkins.to_string())
        .replace("{{AVERAGE}}", &average)
        .replace("{{DAYS}}", &summary.days_tracking.to_string())
        .replace("{{NOTICE}}", notice.map(Notice::message).unwrap_or_default())
        .replace("{{NOTICE_TYPE}}", notice.map(Notice::kind).unwrap_or_default())
        .replace("{{CHART}}", &render_chart(&view.trend))
        .replace("{{RECOMMENDATIONS}}", &render_recommendations(view.recommendations.as_ref()))
}

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 260.0;
const CHART_LEFT: f64 = 78.0;
const CHART_RIGHT: f64 = 24.0;
const CHART_TOP: f64 = 20.0;
const CHART_BOTTOM: f64 = 34.0;

/// SVG body for the trend chart; the dashboard script redraws it with the
/// same geometry after each check-in.
fn render_chart(points: &[TrendPoint]) -> String {
    if points.is_empty() {
        return concat!(
            r#"<text class="chart-label" x="50%" y="45%" text-anchor="middle">Start Your Journey</text>"#,
            r#"<text class="chart-label" x="50%" y="55%" text-anchor="middle">Record your first mood to see your wellness trends here</text>"#,
        )
        .to_string();
    }

    let count = points.len();
    let step = if count > 1 {
        (CHART_WIDTH - CHART_LEFT - CHART_RIGHT) / (count - 1) as f64
    } else {
        0.0
    };
    let x = |index: usize| {
        if count > 1 {
            CHART_LEFT + index as f64 * step
        } else {
            (CHART_LEFT + CHART_WIDTH - CHART_RIGHT) / 2.0
        }
    };
    let y = |mood: u8| {
        CHART_HEIGHT - CHART_BOTTOM
            - (f64::from(mood) - 1.0) / 4.0 * (CHART_HEIGHT - CHART_TOP - CHART_BOTTOM)
    };

    let mut svg = String::new();
    for mood in Mood::all() {
        let level = y(mood.value());
        let _ = write!(
            svg,
            r#"<line class="chart-grid" x1="{left}" y1="{level}" x2="{right}" y2="{level}" /><text class="chart-label" x="{label_x}" y="{label_y}" text-anchor="end">{label}</text>"#,
            left = CHART_LEFT,
            right = CHART_WIDTH - CHART_RIGHT,
            label_x = CHART_LEFT - 8.0,
            label_y = level + 4.0,
            label = mood.label(),
        );
    }

    let path = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let command = if index == 0 { 'M' } else { 'L' };
            format!("{command} {:.2} {:.2}", x(index), y(point.mood))
        })
        .collect::<Vec<_>>()
        .join(" ");
    let _ = write!(svg, r#"<path class="chart-line" d="{path}" />"#);

    let label_every = if count > 8 { 2 } else { 1 };
    for (index, point) in points.iter().enumerate() {
        let _ = write!(
            svg,
            r#"<circle class="chart-point" cx="{cx:.2}" cy="{cy:.2}" r="6"><title>{label}: {mood}</title></circle>"#,
            cx = x(index),
            cy = y(point.mood),
            label = point.label,
            mood = point.mood_label,
        );
        if index % label_every == 0 {
            let _ = write!(
                svg,
                r#"<text class="chart-label" x="{cx:.2}" y="{ty}" text-anchor="middle">{label}</text>"#,
                cx = x(index),
                ty = CHART_HEIGHT - CHART_BOTTOM + 18.0,
                label = point.label,
            );
        }
    }
    svg
}

fn render_recommendations(view: Option<&RecommendationsView>) -> String {
    let Some(view) = view else {
        return concat!(
            r#"<div class="empty"><div class="icon">🌟</div><h4>Personalized Recommendations</h4>"#,
            r#"<p>Start tracking your mood to receive tailored wellness suggestions</p></div>"#,
        )
        .to_string();
    };

    view.items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="recommendation"><div class="icon" style="border-color: {color}">{icon}</div><div><h4>{title}</h4><p>{description}</p><span class="action">{action}</span></div></div>"#,
                color = item.color,
                icon = item.icon,
                title = item.title,
                description = item.description,
                action = item.action,
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn mood_options() -> String {
    Mood::all()
        .map(|mood| {
            format!(
                r#"<label class="mood-option"><input type="radio" name="mood" value="{value}" /><span class="emoji">{emoji}</span><span class="mood-name">{label}</span></label>"#,
                value = mood.value(),
                emoji = mood.emoji(),
                label = mood.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

const HERO_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Wellness Monitor</title>
  <style>
    :root {
      --bg: #f5f3ff;
      --ink: #26233a;
      --muted: #6e6a86;
      --primary: #7c6cf2;
      --secondary: #3fb8a6;
      --card: rgba(255, 255, 255, 0.88);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      display: grid;
      place-items: center;
      padding: 32px 18px;
      font-family: "Trebuchet MS", sans-serif;
      color: var(--ink);
      background: radial-gradient(circle at top, #e3dcff, transparent 60%),
        linear-gradient(135deg, var(--bg), #e6fbf7);
    }

    .hero {
      width: min(900px, 100%);
      text-align: center;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-size: clamp(2.4rem, 6vw, 4.2rem);
      margin: 0;
      color: var(--primary);
    }

    .lead {
      margin: 0;
      font-size: 1.2rem;
      color: var(--muted);
      line-height: 1.6;
    }

    .features {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 18px;
    }

    .feature {
      background: var(--card);
      border-radius: 20px;
      padding: 22px;
    }

    .feature .icon {
      font-size: 2.4rem;
    }

    .feature h3 {
      margin: 10px 0 6px;
    }

    .feature p {
      margin: 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .start {
      justify-self: center;
      padding: 18px 36px;
      border-radius: 999px;
      background: var(--primary);
      color: white;
      font-size: 1.1rem;
      font-weight: 600;
      text-decoration: none;
      box-shadow: 0 14px 30px rgba(124, 108, 242, 0.35);
    }
  </style>
</head>
<body>
  <main class="hero">
    <h1>Your Wellness Journey</h1>
    <p class="lead">Track your daily mood, discover patterns, and nurture your mental health with personalized insights and gentle guidance.</p>
    <section class="features">
      <div class="feature">
        <div class="icon">🧠</div>
        <h3>Daily Check-ins</h3>
        <p>Quick, mindful moments to connect with your feelings</p>
      </div>
      <div class="feature">
        <div class="icon">📊</div>
        <h3>Mood Insights</h3>
        <p>Visualize patterns and trends in your emotional well-being</p>
      </div>
      <div class="feature">
        <div class="icon">🌱</div>
        <h3>Personal Growth</h3>
        <p>Tailored recommendations for your wellness journey</p>
      </div>
    </section>
    <a class="start" href="/dashboard">Begin Your Journey</a>
  </main>
</body>
</html>
"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Wellness Monitor</title>
  <style>
    :root {
      --bg: #f7f6fc;
      --ink: #26233a;
      --muted: #6e6a86;
      --border: #e4e1f2;
      --primary: 247 84% 69%;
      --secondary: 171 49% 48%;
      --accent: 15 84% 69%;
      --mood-sad: 226 84% 69%;
      --mood-neutral: 45 65% 57%;
      --mood-happy: 152 50% 53%;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
    }

    header {
      position: sticky;
      top: 0;
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 16px 24px;
      background: rgba(247, 246, 252, 0.9);
      border-bottom: 1px solid var(--border);
    }

    header a {
      font-size: 1.4rem;
      font-weight: 700;
      color: hsl(var(--primary));
      text-decoration: none;
    }

    header .count {
      color: var(--muted);
      font-size: 0.9rem;
    }

    main {
      width: min(1080px, 100%);
      margin: 0 auto;
      padding: 28px 18px 48px;
      display: grid;
      gap: 28px;
    }

    .card {
      background: white;
      border: 1px solid var(--border);
      border-radius: 22px;
      padding: 24px;
    }

    .card h2,
    .card h3 {
      margin-top: 0;
      text-align: center;
    }

    .subtitle {
      margin: 0 0 18px;
      color: var(--muted);
      text-align: center;
    }

    .moods {
      display: grid;
      grid-template-columns: repeat(5, 1fr);
      gap: 12px;
      margin-bottom: 18px;
    }

    .mood-option {
      display: grid;
      justify-items: center;
      gap: 6px;
      padding: 14px 6px;
      border: 2px solid var(--border);
      border-radius: 16px;
      cursor: pointer;
    }

    .mood-option input {
      display: none;
    }

    .mood-option:has(input:checked) {
      border-color: hsl(var(--primary));
      background: hsl(var(--primary) / 0.08);
    }

    .emoji {
      font-size: 2rem;
    }

    .mood-name {
      font-size: 0.85rem;
    }

    textarea {
      width: 100%;
      min-height: 100px;
      padding: 12px;
      border-radius: 14px;
      border: 1px solid var(--border);
      font: inherit;
      resize: none;
    }

    button {
      width: 100%;
      margin-top: 16px;
      padding: 16px;
      border: none;
      border-radius: 999px;
      background: hsl(var(--primary));
      color: white;
      font-size: 1.05rem;
      font-weight: 600;
      cursor: pointer;
    }

    .status {
      min-height: 1.2em;
      margin-top: 12px;
      text-align: center;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .analytics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 28px;
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: hsl(var(--primary));
      stroke-width: 3;
    }

    .chart-point {
      fill: hsl(var(--primary));
    }

    .chart-grid {
      stroke: var(--border);
      stroke-dasharray: 3 3;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .empty {
      text-align: center;
      color: var(--muted);
    }

    .empty .icon {
      font-size: 3rem;
    }

    .recommendation {
      display: flex;
      gap: 14px;
      padding: 14px;
      border: 1px solid var(--border);
      border-radius: 14px;
      margin-bottom: 12px;
    }

    .recommendation .icon {
      flex: none;
      width: 46px;
      height: 46px;
      border-radius: 50%;
      display: grid;
      place-items: center;
      font-size: 1.3rem;
      border: 2px solid;
    }

    .recommendation h4 {
      margin: 0 0 4px;
    }

    .recommendation p {
      margin: 0 0 8px;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .recommendation .action {
      display: inline-block;
      padding: 4px 12px;
      border: 1px solid var(--border);
      border-radius: 999px;
      font-size: 0.85rem;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 18px;
    }

    .stat {
      padding: 22px;
      border-radius: 18px;
      text-align: center;
      background: white;
      border: 1px solid var(--border);
    }

    .stat .value {
      font-size: 1.9rem;
      font-weight: 700;
      color: hsl(var(--primary));
    }

    .stat .label {
      color: var(--muted);
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <header>
    <a href="/">🧠 Wellness Monitor</a>
    <span class="count" id="tracked">{{TRACKED}}</span>
  </header>

  <main>
    <section class="card">
      <h2>How are you feeling today?</h2>
      <p class="subtitle">Take a moment to check in with yourself</p>
      <form id="mood-form" method="post" action="/mood">
        <div class="moods">
        {{MOOD_OPTIONS}}
        </div>
        <label for="note">How was your day? (Optional)</label>
        <textarea id="note" name="note" placeholder="Share what's on your mind..."></textarea>
        <button type="submit">Record Today's Mood</button>
      </form>
      <div class="status" id="status" data-type="{{NOTICE_TYPE}}">{{NOTICE}}</div>
    </section>

    <div class="analytics">
      <section class="card">
        <h3>Your Mood Journey</h3>
        <svg id="chart" viewBox="0 0 600 260" aria-label="Mood chart" role="img">{{CHART}}</svg>
      </section>
      <section class="card">
        <h3>Wellness Recommendations</h3>
        <p class="subtitle">Based on your recent mood patterns</p>
        <div id="recommendations">{{RECOMMENDATIONS}}</div>
      </section>
    </div>

    <section class="stats" id="stats" {{STATS_HIDDEN}}>
      <div class="stat">
        <div class="value" id="total">{{TOTAL}}</div>
        <div class="label">Total Check-ins</div>
      </div>
      <div class="stat">
        <div class="value" id="average">{{AVERAGE}}</div>
        <div class="label">Average Mood</div>
      </div>
      <div class="stat">
        <div class="value" id="days">{{DAYS}}</div>
        <div class="label">Days Tracking</div>
      </div>
    </section>
  </main>

  <script>
    const form = document.getElementById('mood-form');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const recsEl = document.getElementById('recommendations');
    const statsEl = document.getElementById('stats');
    const trackedEl = document.getElementById('tracked');
    const moodLabels = { 1: 'Very Sad', 2: 'Sad', 3: 'Neutral', 4: 'Good', 5: 'Very Happy' };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const emptyState = (icon, title, text) => {
      const box = document.createElement('div');
      box.className = 'empty';
      const iconEl = document.createElement('div');
      iconEl.className = 'icon';
      iconEl.textContent = icon;
      const titleEl = document.createElement('h4');
      titleEl.textContent = title;
      const textEl = document.createElement('p');
      textEl.textContent = text;
      box.append(iconEl, titleEl, textEl);
      return box;
    };

    const renderChart = (points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="45%" text-anchor="middle">Start Your Journey</text>'
          + '<text class="chart-label" x="50%" y="55%" text-anchor="middle">Record your first mood to see your wellness trends here</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const left = 78;
      const right = 24;
      const top = 20;
      const bottom = 34;
      const xStep = points.length > 1 ? (width - left - right) / (points.length - 1) : 0;
      const x = (index) => points.length > 1 ? left + index * xStep : (left + width - right) / 2;
      const y = (mood) => height - bottom - ((mood - 1) / 4) * (height - top - bottom);

      let grid = '';
      for (let mood = 1; mood <= 5; mood += 1) {
        grid += `<line class="chart-grid" x1="${left}" y1="${y(mood)}" x2="${width - right}" y2="${y(mood)}" />`;
        grid += `<text class="chart-label" x="${left - 8}" y="${y(mood) + 4}" text-anchor="end">${moodLabels[mood]}</text>`;
      }

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.mood).toFixed(2)}`)
        .join(' ');
      const dots = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.mood)}" r="6"><title>${point.label}: ${point.mood_label}</title></circle>`)
        .join('');
      const labelEvery = points.length > 8 ? 2 : 1;
      const xLabels = points
        .map((point, index) => index % labelEvery === 0
          ? `<text class="chart-label" x="${x(index)}" y="${height - bottom + 18}" text-anchor="middle">${point.label}</text>`
          : '')
        .join('');

      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${dots}${xLabels}`;
    };

    const renderRecommendations = (view) => {
      recsEl.replaceChildren();
      if (!view) {
        recsEl.append(emptyState('🌟', 'Personalized Recommendations', 'Start tracking your mood to receive tailored wellness suggestions'));
        return;
      }
      view.items.forEach((item) => {
        const row = document.createElement('div');
        row.className = 'recommendation';
        const icon = document.createElement('div');
        icon.className = 'icon';
        icon.style.borderColor = item.color;
        icon.textContent = item.icon;
        const body = document.createElement('div');
        const title = document.createElement('h4');
        title.textContent = item.title;
        const description = document.createElement('p');
        description.textContent = item.description;
        const action = document.createElement('span');
        action.className = 'action';
        action.textContent = item.action;
        body.append(title, description, action);
        row.append(icon, body);
        recsEl.append(row);
      });
    };

    const renderSummary = (summary) => {
      const n = summary.total_checkins;
      trackedEl.textContent = `${n} mood${n === 1 ? '' : 's'} tracked`;
      statsEl.hidden = n === 0;
      document.getElementById('total').textContent = n;
      document.getElementById('average').textContent = summary.average_mood ?? '--';
      document.getElementById('days').textContent = summary.days_tracking;
    };

    const refresh = async () => {
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        throw new Error('Unable to load dashboard');
      }
      const data = await res.json();
      renderSummary(data.summary);
      renderChart(data.trend);
      renderRecommendations(data.recommendations);
    };

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      const selected = form.querySelector('input[name="mood"]:checked');
      if (!selected) {
        setStatus("Please select a mood. Choose how you're feeling today.", 'error');
        return;
      }
      try {
        const res = await fetch('/api/entries', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ mood: Number(selected.value), note: form.note.value })
        });
        if (!res.ok) {
          throw new Error((await res.text()) || 'Request failed');
        }
        form.reset();
        setStatus('Mood recorded! Thank you for checking in with yourself today.', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MoodEntry, SummaryStats};
    use crate::recommendations::RecommendationSet;
    use crate::stats::build_dashboard;

    fn view(total: usize, average: Option<f64>, days: i64) -> DashboardResponse {
        DashboardResponse {
            summary: SummaryStats {
                total_checkins: total,
                average_mood: average,
                days_tracking: days,
            },
            trend: Vec::new(),
            recommendations: None,
        }
    }

    #[test]
    fn notice_params_round_trip() {
        for notice in [Notice::Recorded, Notice::SelectMood] {
            let param = notice.location().rsplit('=').next().unwrap();
            assert_eq!(Notice::from_param(param), Some(notice));
        }
        assert_eq!(Notice::from_param("other"), None);
    }

    #[test]
    fn dashboard_hides_stats_without_history() {
        let html = render_dashboard(&view(0, None, 0), None);
        assert!(html.contains("0 moods tracked"));
        assert!(html.contains(r#"id="stats" hidden"#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn dashboard_shows_summary_and_notice() {
        let html = render_dashboard(&view(1, Some(2.0), 1), Some(Notice::SelectMood));
        assert!(html.contains("1 mood tracked"));
        assert!(html.contains(r#"<div class="value" id="average">2</div>"#));
        assert!(html.contains("Please select a mood."));
        assert!(html.contains(r#"data-type="error""#));
    }

    #[test]
    fn dashboard_renders_recommendations_without_script() {
        let entries = [MoodEntry::new(Mood::new(2).unwrap(), "tired")];
        let html = render_dashboard(&build_dashboard(&entries), None);
        let cards = html
            .split(r#"<div id="recommendations">"#)
            .nth(1)
            .and_then(|rest| rest.split("</section>").next())
            .unwrap();
        assert!(cards.contains("<h4>Take a Gentle Walk</h4>"));
        assert!(cards.contains("Start a 10-minute walk"));
        assert!(cards.contains("border-color: hsl(var(--mood-sad))"));
        assert!(!cards.contains("Personalized Recommendations"));
    }

    #[test]
    fn dashboard_shows_empty_recommendations_before_first_check_in() {
        let html = render_dashboard(&view(0, None, 0), None);
        let cards = html.split(r#"<div id="recommendations">"#).nth(1).unwrap();
        assert!(cards.starts_with(r#"<div class="empty"><div class="icon">🌟</div>"#));
        assert!(html.contains(r#"role="img"><text class="chart-label""#));
    }

    #[test]
    fn dashboard_draws_trend_points() {
        let entries: Vec<_> = (1..=5)
            .map(|m| MoodEntry::new(Mood::new(m).unwrap(), ""))
            .collect();
        let html = render_dashboard(&build_dashboard(&entries), None);
        let chart = html
            .split(r#"role="img">"#)
            .nth(1)
            .and_then(|rest| rest.split("</svg>").next())
            .unwrap();
        assert_eq!(chart.matches(r#"<circle class="chart-point""#).count(), 5);
        assert!(chart.starts_with(r#"<line class="chart-grid" x1="78" y1="226""#));
        assert!(chart.contains(r#"<path class="chart-line" d="M 78.00 226.00"#));
        assert!(chart.contains(r#"text-anchor="end">Very Happy</text>"#));
    }

    #[test]
    fn recommendation_colors_are_defined_by_the_dashboard() {
        for set in [RecommendationSet::LowMood, RecommendationSet::Neutral, RecommendationSet::Positive] {
            for item in set.items() {
                let name = item
                    .color
                    .strip_prefix("hsl(var(")
                    .and_then(|rest| rest.strip_suffix("))"))
                    .unwrap();
                assert!(DASHBOARD_HTML.contains(&format!("{name}: ")), "{name} is not defined");
            }
        }
    }

    #[test]
    fn dashboard_offers_every_mood() {
        let html = render_dashboard(&view(0, None, 0), None);
        for mood in Mood::all() {
            assert!(html.contains(&format!(r#"value="{}""#, mood.value())));
            assert!(html.contains(mood.label()));
        }
    }
}
