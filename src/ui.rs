use crate::models::HabitView;
use chrono::NaiveDate;
use std::fmt::Write;

pub fn render_index(today: NaiveDate, habits: &[HabitView]) -> String {
    let mut cards = String::new();
    for habit in habits {
        render_card(&mut cards, habit);
    }
    let empty_display = if habits.is_empty() { "flex" } else { "none" };

    INDEX_HTML
        .replace("{{DATE}}", &today.format("%A, %B %-d").to_string())
        .replace("{{EMPTY_DISPLAY}}", empty_display)
        .replace("{{CARDS}}", &cards)
}

fn render_card(out: &mut String, habit: &HabitView) {
    let id = escape_html(habit.id.as_str());
    let name = escape_html(&habit.name);
    let checked = if habit.checked_today { " checked" } else { "" };
    let on_fire = if habit.on_fire { " on-fire" } else { "" };

    let _ = write!(
        out,
        r#"
      <article class="card{checked}" data-id="{id}">
        <form class="card-tap" method="post" action="/habits/{id}/check-in">
          <button type="submit" class="card-hit" aria-label="Check in {name}">
            <span class="card-name">{name}</span>
            <svg class="card-svg" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
              <circle class="c-circle" cx="50" cy="50" r="44"/>
              <polyline class="c-mark" points="25,52 42,68 75,34"/>
            </svg>
            <span class="card-streak">
              <span class="streak-num{on_fire}">{streak}</span>
              <span class="streak-days">{label}</span>
            </span>
            <span class="card-best">best {best}</span>
          </button>
        </form>
        <details class="card-menu">
          <summary aria-label="Options">&#8942;</summary>
          <form method="post" action="/habits/{id}/rename">
            <input name="name" value="{name}" maxlength="60" required />
            <button type="submit">Rename</button>
          </form>
          <form method="post" action="/habits/{id}/delete">
            <button type="submit" class="danger">Delete</button>
          </form>
        </details>
      </article>"#,
        streak = habit.streak,
        label = habit.days_label(),
        best = habit.best_streak,
    );
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habits</title>
  <style>
    :root {
      --bg: #f6f4ef;
      --ink: #23221f;
      --muted: #8a867d;
      --card: #ffffff;
      --accent: #2f9e6f;
      --fire: #ff6b4a;
      --shadow: 0 12px 32px rgba(35, 34, 31, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
      padding: 24px 20px 8px;
    }

    h1 {
      margin: 0;
      font-size: 1.6rem;
    }

    .date {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .add-form {
      display: flex;
      gap: 8px;
      padding: 8px 20px 16px;
    }

    input {
      flex: 1;
      padding: 10px 12px;
      border: 1px solid #d9d5cc;
      border-radius: 10px;
      font: inherit;
    }

    button {
      border: none;
      border-radius: 10px;
      padding: 10px 14px;
      font: inherit;
      cursor: pointer;
      background: var(--ink);
      color: #fff;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
      gap: 14px;
      padding: 0 20px 32px;
    }

    .card {
      position: relative;
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
    }

    .card-tap {
      margin: 0;
    }

    .card-hit {
      width: 100%;
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 8px;
      padding: 18px 12px 14px;
      background: transparent;
      color: inherit;
    }

    .card-name {
      font-weight: 600;
      max-width: 100%;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }

    .card-svg {
      width: 64px;
      height: 64px;
    }

    .c-circle {
      fill: none;
      stroke: #e3dfd6;
      stroke-width: 6;
    }

    .c-mark {
      fill: none;
      stroke: transparent;
      stroke-width: 8;
      stroke-linecap: round;
      stroke-linejoin: round;
    }

    .checked .c-circle {
      fill: var(--accent);
      stroke: var(--accent);
    }

    .checked .c-mark {
      stroke: #fff;
    }

    .streak-num {
      font-size: 1.4rem;
      font-weight: 700;
    }

    .streak-num.on-fire {
      color: var(--fire);
    }

    .streak-days,
    .card-best {
      color: var(--muted);
      font-size: 0.8rem;
    }

    .card-menu {
      position: absolute;
      top: 6px;
      right: 8px;
    }

    .card-menu summary {
      list-style: none;
      cursor: pointer;
      padding: 4px 6px;
      color: var(--muted);
    }

    .card-menu[open] {
      background: var(--card);
      border-radius: 12px;
      box-shadow: var(--shadow);
      padding: 8px;
      z-index: 2;
    }

    .card-menu form {
      display: flex;
      gap: 6px;
      margin-top: 6px;
    }

    .danger {
      background: #c0392b;
      width: 100%;
    }

    .empty {
      flex-direction: column;
      align-items: center;
      color: var(--muted);
      padding: 48px 20px;
    }
  </style>
</head>
<body>
  <header>
    <h1>Habits</h1>
    <span class="date">{{DATE}}</span>
  </header>
  <form class="add-form" method="post" action="/habits">
    <input name="name" placeholder="New habit" maxlength="60" required />
    <button type="submit">Add</button>
  </form>
  <section class="empty" id="emptyState" style="display: {{EMPTY_DISPLAY}}">
    <p>No habits yet. Add one to start a streak.</p>
  </section>
  <main class="grid" id="grid">{{CARDS}}
  </main>
</body>
</html>
"#;
