//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use termtree::Tree;

use crate::application::services::{ConnectionView, DomainRow};
use crate::application::Localizer;
use crate::cli::theme::Palette;
use crate::domain::CheckState;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print plain output (no color, for data/export statements)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Section header in the theme's accent color.
pub fn header(title: &str, palette: &Palette) -> String {
    title.color(palette.accent).bold().to_string()
}

/// Connection and polling sections.
pub fn render_connection(view: &ConnectionView, t: &Localizer, palette: &Palette) -> String {
    let not_set = t.text("value.not_set").color(palette.muted).to_string();
    let field = |key: &str| format!("  {}:", t.text(key)).color(palette.muted).to_string();

    let base_url = if view.base_url.is_empty() {
        not_set.clone()
    } else {
        view.base_url.clone()
    };
    let token = view.api_token_masked.clone().unwrap_or_else(|| not_set.clone());
    let self_signed = if view.allow_self_signed {
        t.text("value.yes")
    } else {
        t.text("value.no")
    };

    let mut lines = vec![
        header(t.text("section.connection"), palette),
        format!("{} {}", field("field.base_url"), base_url),
    ];
    if let Some(hint) = view.base_url_hint {
        lines.push(format!("    {}", t.text(hint).color(palette.warning)));
    }
    lines.push(format!("{} {}", field("field.api_token"), token));
    lines.push(format!("{} {}", field("field.allow_self_signed"), self_signed));
    lines.push(String::new());
    lines.push(header(t.text("section.polling"), palette));
    lines.push(format!(
        "{} {}  {}",
        field("field.poll_interval"),
        view.poll_interval,
        format!("({})", t.text("hint.poll_interval")).color(palette.muted)
    ));
    lines.join("\n")
}

/// Domain rows as a tree under the section title.
pub fn render_domain_tree(
    rows: &[DomainRow],
    t: &Localizer,
    palette: &Palette,
    describe: bool,
) -> String {
    let mut pos = 0;
    let leaves = build_level(rows, &mut pos, 0, t, palette, describe);
    Tree::new(header(t.text("section.domains"), palette))
        .with_leaves(leaves)
        .to_string()
}

fn build_level(
    rows: &[DomainRow],
    pos: &mut usize,
    depth: usize,
    t: &Localizer,
    palette: &Palette,
    describe: bool,
) -> Vec<Tree<String>> {
    let mut level = Vec::new();
    while let Some(row) = rows.get(*pos).filter(|row| row.depth == depth) {
        *pos += 1;
        let children = build_level(rows, pos, depth + 1, t, palette, describe);
        level.push(Tree::new(format_row(row, t, palette, describe)).with_leaves(children));
    }
    level
}

fn format_row(row: &DomainRow, t: &Localizer, palette: &Palette, describe: bool) -> String {
    let color = match row.state {
        CheckState::Checked => palette.checked,
        CheckState::Indeterminate => palette.partial,
        CheckState::Unchecked => palette.muted,
    };
    let fold = match (row.has_children, row.expanded) {
        (false, _) => "",
        (true, true) => " ▾",
        (true, false) => " ▸",
    };
    let mut line = format!(
        "{} {}{} {}",
        row.state.marker().color(color),
        t.text(&row.label),
        fold,
        format!("({})", row.id).color(palette.muted)
    );
    if describe {
        if let Some(description) = &row.description {
            line.push_str(&format!(" - {}", t.text(description).color(palette.muted)));
        }
    }
    line
}
