//! Paints the result view to the terminal.

use crate::ui::view::ResultView;
use colored::*;

/// Renders the loader line, shown while the request is in flight.
pub fn render_loader() {
    println!("{}", "⏳ Shortening...".bright_black());
}

/// Renders the result panel from the view state.
///
/// Prints nothing while the panel is hidden. Rendered output goes to
/// stdout; logs stay on stderr.
pub fn render(view: &ResultView) {
    if view.loading {
        render_loader();
        return;
    }

    if !view.visible {
        return;
    }

    if !view.error.is_empty() {
        println!("{}", format!("❌ {}", view.error).red().bold());
        return;
    }

    println!();
    println!("{}", "✅ Short link ready!".green().bold());
    println!();
    println!("  {}", view.text.bright_yellow().bold());
    println!();

    if view.action_visible {
        println!("{}", "  (copied to clipboard)".bright_black());
    }
}
