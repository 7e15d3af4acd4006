use tera::escape_html;

use super::view::{Controls, LeaderboardView};
use crate::domain::{default_label, Bracket, PlayerRecord};
use crate::pagination::{build_paginated_url_with_params, build_query_url};
use crate::query::SortKey;

const STYLE: &str = "body{font-family:sans-serif;margin:2em}table{border-collapse:collapse}\
th,td{padding:4px 10px;border-bottom:1px solid #ddd;text-align:left}\
.num{text-align:right}.alliance{color:#1f5fbf}.horde{color:#b3261e}.error{color:#b3261e}";

/// Full leaderboard page: selectors, table (or empty state) and pager
pub fn render_page(view: &LeaderboardView, title: &str) -> String {
    let heading = match &view.season {
        Some(season) => format!(
            "{} · {}{}",
            escape_html(&season.label),
            view.controls.bracket,
            season
                .date_span()
                .map(|span| format!(" <small>({})</small>", escape_html(&span)))
                .unwrap_or_default()
        ),
        None => match view.controls.season {
            Some(id) => format!("{} · {}", escape_html(&default_label(id)), view.controls.bracket),
            None => "No season selected".to_string(),
        },
    };

    let body = if view.is_empty() {
        "<p class=\"empty\">No records found</p>".to_string()
    } else {
        render_table(view)
    };

    layout(
        title,
        &format!(
            "<h2>{}</h2>\n{}\n{}\n{}",
            heading,
            render_controls(view),
            body,
            render_pager(view)
        ),
    )
}

/// Page shown instead of the leaderboard when the data failed to load
pub fn render_load_error(message: &str, title: &str) -> String {
    layout(
        title,
        &format!(
            "<h2 class=\"error\">Leaderboard data could not be loaded</h2>\n<pre class=\"error\">{}</pre>",
            escape_html(message)
        ),
    )
}

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{t}</title>\n<style>{s}</style>\n</head>\n<body>\n<h1>{t}</h1>\n{c}\n</body>\n</html>\n",
        t = escape_html(title),
        s = STYLE,
        c = content
    )
}

fn render_controls(view: &LeaderboardView) -> String {
    let controls = &view.controls;

    let mut season_options: String = view
        .seasons
        .iter()
        .map(|s| option(&s.id.to_string(), &s.label, controls.season == Some(s.id)))
        .collect();
    if let Some(id) = controls.season.filter(|_| view.season.is_none()) {
        season_options.push_str(&option(&id.to_string(), &format!("{} (no data)", default_label(id)), true));
    }

    let bracket_options: String = view
        .season
        .as_ref()
        .map(|s| Bracket::for_season(s.id))
        .unwrap_or_else(|| Bracket::ALL.to_vec())
        .into_iter()
        .map(|b| {
            let label = if view.brackets.contains(&b) {
                b.to_string()
            } else {
                format!("{} (no data)", b)
            };
            option(b.as_str(), &label, controls.bracket == b)
        })
        .collect();

    let sort_options: String = SortKey::ALL
        .iter()
        .map(|k| option(k.as_str(), k.label(), controls.sort == *k))
        .collect();

    format!(
        "<form method=\"get\" action=\"/\">\n\
         <label>Season <select name=\"season\" onchange=\"this.form.submit()\">{}</select></label>\n\
         <label>Bracket <select name=\"bracket\" onchange=\"this.form.submit()\">{}</select></label>\n\
         <label>Sort <select name=\"sort\" onchange=\"this.form.submit()\">{}</select></label>\n\
         <label>Search <input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"player or team\"></label>\n\
         <button type=\"submit\">Go</button>\n</form>",
        season_options,
        bracket_options,
        sort_options,
        escape_html(&controls.search)
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>",
        escape_html(value),
        if selected { " selected" } else { "" },
        escape_html(label)
    )
}

fn render_table(view: &LeaderboardView) -> String {
    let rows: String = view.page.items.iter().map(render_row).collect();

    format!(
        "<table>\n<thead><tr><th>Rank</th><th>Name</th><th>Team</th><th>Realm</th><th>Class</th><th>Race</th>\
         <th class=\"num\">Rating</th><th class=\"num\">Wins</th><th class=\"num\">Losses</th><th class=\"num\">Win %</th></tr></thead>\n\
         <tbody>\n{}</tbody>\n</table>",
        rows
    )
}

fn render_row(record: &PlayerRecord) -> String {
    let faction_class = record
        .faction
        .map(|f| format!(" class=\"{}\"", f.as_str().to_ascii_lowercase()))
        .unwrap_or_default();

    let team = match (&record.team, record.members.is_empty()) {
        (Some(team), _) => escape_html(team),
        (None, false) => escape_html(&member_list(record)),
        (None, true) => String::new(),
    };

    format!(
        "<tr><td class=\"num\">{}</td><td{}>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
        record.rank,
        faction_class,
        escape_html(&record.name),
        team,
        escape_html(record.realm.as_deref().unwrap_or("")),
        escape_html(record.class.as_deref().unwrap_or("")),
        escape_html(record.race.as_deref().unwrap_or("")),
        record.rating,
        record.wins,
        record.losses,
        format_win_rate(record)
    )
}

fn member_list(record: &PlayerRecord) -> String {
    record
        .members
        .iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_win_rate(record: &PlayerRecord) -> String {
    record
        .win_rate()
        .map(|rate| format!("{:.1}", rate * 100.0))
        .unwrap_or_else(|| "-".to_string())
}

fn render_pager(view: &LeaderboardView) -> String {
    let page = &view.page;
    if page.page_count() <= 1 {
        return String::new();
    }

    let mut links = Vec::new();
    if page.has_previous() {
        links.push(page_link(&view.controls, page.page - 1, "« Previous"));
    }
    links.push(format!("Page {} of {}", page.page, page.page_count()));
    if page.has_next() {
        links.push(page_link(&view.controls, page.page + 1, "Next »"));
    }

    format!("<nav class=\"pager\">{}</nav>", links.join(" | "))
}

fn page_link(controls: &Controls, page: usize, label: &str) -> String {
    let base = build_query_url("/", &controls.to_params());
    let url = build_paginated_url_with_params(&base, page);
    format!("<a href=\"{}\">{}</a>", escape_html(&url), label)
}
