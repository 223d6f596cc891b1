//! Text rendering of the console overlay.

use devcon_console::DebugConsole;

/// Output log lines drawn under the overlay.
const LOG_TAIL: usize = 5;

/// Draw the overlay as plain text. Empty while the console is hidden.
pub fn draw(console: &DebugConsole) -> String {
    if !console.is_visible() {
        return String::new();
    }
    let mut out = String::new();

    if console.is_help_panel_visible() {
        out.push_str("+-- commands ----------------------------\n");
        for row in console.registry().listing() {
            out.push_str(&format!("| {row}\n"));
        }
        out.push_str("+----------------------------------------\n");
    }

    out.push_str(&format!("] {}_\n", console.input()));

    let suggestions = console.suggestions();
    for (i, candidate) in suggestions.candidates().iter().enumerate() {
        let marker = if i == suggestions.selected_index() { "> " } else { "  " };
        out.push_str(&format!("  {marker}{candidate}\n"));
    }

    for line in console.help_lines() {
        out.push_str(&format!("  {line}\n"));
    }

    let log: Vec<&str> = console.output_log().collect();
    for line in &log[log.len().saturating_sub(LOG_TAIL)..] {
        out.push_str(&format!("  {line}\n"));
    }

    out
}
