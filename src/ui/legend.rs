use quotetui::model::Dialog;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key(label: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, dialog: Option<&Dialog>) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match dialog {
        Some(Dialog::AddQuote(_)) => {
            hotkey_spans.extend(key("Tab", ":Switch Field  "));
            hotkey_spans.extend(key("Enter", ":Add Quote  "));
            hotkey_spans.extend(key("Esc", ":Cancel"));
            return hotkey_spans;
        }
        Some(Dialog::Path(_)) => {
            hotkey_spans.extend(key("Enter", ":Confirm  "));
            hotkey_spans.extend(key("Esc", ":Cancel"));
            return hotkey_spans;
        }
        None => {}
    }

    hotkey_spans.extend(key("n/Space", ":New Quote  "));

    // Category keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(key("h/l", ":Category  "));
    } else {
        hotkey_spans.extend(key("←/→", ":Category  "));
    }

    hotkey_spans.extend(key("a", ":Add  "));
    hotkey_spans.extend(key("e", ":Export  "));
    hotkey_spans.extend(key("i", ":Import  "));
    hotkey_spans.extend(key("s", ":Sync Now  "));

    // Quit - always available outside dialogs
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(vim_mode: bool, dialog: Option<&Dialog>) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, dialog));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes with vim mode and open dialog)
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, dialog: Option<&Dialog>) {
    f.render_widget(build_legend_paragraph(vim_mode, dialog), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    dialog: Option<&Dialog>,
) -> u16 {
    // Count lines without the block; line_count() ignores borders
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, dialog));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
