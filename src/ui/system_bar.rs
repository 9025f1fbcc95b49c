use quotetui::model::{SyncModel, SyncStatus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn status_color(status: &SyncStatus) -> Color {
    match status {
        SyncStatus::Idle => Color::Green,
        SyncStatus::Syncing => Color::Yellow,
        SyncStatus::Error { .. } => Color::Red,
        SyncStatus::Offline => Color::DarkGray,
    }
}

/// Build the system bar spans (extracted for testability)
fn build_system_spans(quote_count: usize, sync: &SyncModel) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled(
            format!("{} quotes", quote_count),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | "),
        Span::styled(
            sync.status.status_line(),
            Style::default().fg(status_color(&sync.status)),
        ),
    ];

    if let Some(at) = sync.last_sync {
        spans.push(Span::raw(" | "));
        spans.push(Span::raw(format!("Last sync: {}", at.format("%H:%M:%S"))));
        if let Some(report) = sync.last_report {
            spans.push(Span::raw(format!(" (+{} new)", report.added)));
        }
    }

    spans
}

/// Render the top bar with store size and sync state
pub fn render_system_bar(f: &mut Frame, area: Rect, quote_count: usize, sync: &SyncModel) {
    let paragraph = Paragraph::new(Line::from(build_system_spans(quote_count, sync))).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Quote Generator"),
    );
    f.render_widget(paragraph, area);
}
