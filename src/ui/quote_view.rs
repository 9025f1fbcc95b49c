use quotetui::logic::ui::{quote_lines, NO_MATCH_PLACEHOLDER};
use quotetui::model::Quote;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Quote text and caption, or the placeholder when nothing matches
fn build_quote_lines(quote: Option<&Quote>) -> Vec<Line<'static>> {
    match quote {
        Some(quote) => {
            let (text, caption) = quote_lines(quote);
            vec![
                Line::from(Span::styled(
                    text,
                    Style::default().add_modifier(Modifier::ITALIC),
                )),
                Line::from(""),
                Line::from(Span::styled(caption, Style::default().fg(Color::Cyan))),
            ]
        }
        None => vec![Line::from(Span::styled(
            NO_MATCH_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))],
    }
}

pub fn render_quote_view(f: &mut Frame, area: Rect, quote: Option<&Quote>, filter_label: &str) {
    let paragraph = Paragraph::new(build_quote_lines(quote))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Quote - {}", filter_label)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
