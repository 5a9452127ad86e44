//! Terminal projection of the current post, laid out like a feed card.

use std::fmt::Write as _;

use colored::{ColoredString, Colorize};
use composer::{CharBudget, Draft, CHAR_LIMIT};
use gateway::Profile;

/// Shown in place of the post before anything is generated.
pub const PLACEHOLDER: &str = "Your generated post will appear here...";

const RULE_WIDTH: usize = 60;

/// `{count}/1200`
pub fn badge(draft: &Draft) -> String {
    format!("{}/{CHAR_LIMIT}", draft.char_count())
}

fn colored_badge(draft: &Draft) -> ColoredString {
    let badge = badge(draft);
    match draft.budget() {
        CharBudget::Comfortable => badge.green(),
        CharBudget::Warning => badge.yellow(),
        CharBudget::Over => badge.red().bold(),
    }
}

/// Render the preview card.
///
/// The author line uses the connected profile when there is one. The
/// character badge is only shown once there is a post.
pub fn render(draft: &Draft, profile: Option<&Profile>) -> String {
    let name = profile
        .map(|p| p.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("Your Name");
    let rule = "─".repeat(RULE_WIDTH);

    let mut out = String::new();
    let _ = writeln!(out, "{}", rule.dimmed());
    let _ = writeln!(out, "{}", name.bold());
    let _ = writeln!(out, "{}", "Your Professional Title".dimmed());
    let _ = writeln!(out, "{}", "2h • 🌍".dimmed());
    out.push('\n');

    if draft.is_empty() {
        let _ = writeln!(out, "{}", PLACEHOLDER.italic().dimmed());
    } else {
        let _ = writeln!(out, "{}", draft.text());
    }

    out.push('\n');
    let _ = writeln!(out, "{}", rule.dimmed());
    let actions = "Like · Comment · Share · Send".dimmed();
    if draft.is_empty() {
        let _ = writeln!(out, "{actions}");
    } else {
        let _ = writeln!(out, "{actions}    {}", colored_badge(draft));
    }
    out
}
