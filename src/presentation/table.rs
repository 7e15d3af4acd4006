use colored::Colorize;

use super::html::format_win_rate;
use super::view::LeaderboardView;
use crate::domain::{Faction, PlayerRecord};

const NAME_WIDTH: usize = 24;
const TEAM_WIDTH: usize = 24;

/// Plain-text table for terminals; colours are dropped when stdout is not a tty
pub fn render_table(view: &LeaderboardView) -> String {
    let mut out = String::new();
    out.push_str(&render_title(view));
    out.push('\n');

    if view.is_empty() {
        out.push_str("No records found\n");
        return out;
    }

    let header = format!(
        "{:>5}  {:<nw$}  {:<tw$}  {:<14}  {:>6}  {:>5}  {:>6}  {:>6}",
        "Rank",
        "Name",
        "Team",
        "Class",
        "Rating",
        "Wins",
        "Losses",
        "Win %",
        nw = NAME_WIDTH,
        tw = TEAM_WIDTH
    );
    out.push_str(&header.bold().to_string());
    out.push('\n');

    for record in &view.page.items {
        out.push_str(&render_row(record));
        out.push('\n');
    }

    out.push_str(&format!(
        "Page {} of {} ({} records)\n",
        view.page.page,
        view.page.page_count(),
        view.page.total
    ));
    out
}

fn render_title(view: &LeaderboardView) -> String {
    let season = view
        .season
        .as_ref()
        .map(|s| s.label.clone())
        .unwrap_or_else(|| "No season".to_string());

    let mut title = format!("{} · {}", season, view.controls.bracket);
    if !view.controls.search.trim().is_empty() {
        title.push_str(&format!(" · search \"{}\"", view.controls.search.trim()));
    }
    title.bold().underline().to_string()
}

fn render_row(record: &PlayerRecord) -> String {
    let rank = format!("{:>5}", record.rank);
    let rank = if record.rank <= 3 {
        rank.yellow().bold().to_string()
    } else {
        rank
    };

    let name = format!("{:<width$}", truncate(&record.name, NAME_WIDTH), width = NAME_WIDTH);
    let name = match record.faction {
        Some(Faction::Alliance) => name.blue().to_string(),
        Some(Faction::Horde) => name.red().to_string(),
        None => name,
    };

    let team = record
        .team
        .clone()
        .unwrap_or_else(|| record.members.iter().map(|m| m.name.as_str()).collect::<Vec<_>>().join(", "));

    format!(
        "{}  {}  {:<tw$}  {:<14}  {:>6}  {:>5}  {:>6}  {:>6}",
        rank,
        name,
        truncate(&team, TEAM_WIDTH),
        truncate(record.class.as_deref().unwrap_or(""), 14),
        record.rating,
        record.wins,
        record.losses,
        format_win_rate(record),
        tw = TEAM_WIDTH
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}
