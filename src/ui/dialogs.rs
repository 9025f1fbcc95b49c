use quotetui::model::quote::Field;
use quotetui::model::{AddQuoteForm, PathPrompt};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;

/// Single-line input box; the focused one shows a cursor and a yellow border
fn input_box<'a>(title: &'a str, value: &str, focused: bool) -> Paragraph<'a> {
    let (content, border) = if focused {
        (format!("{}_", value), Color::Yellow)
    } else {
        (value.to_string(), Color::Gray)
    };

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border)),
        )
        .wrap(Wrap { trim: false })
}

/// Render the add-quote form
pub fn render_add_quote_form(f: &mut Frame, form: &AddQuoteForm) {
    let area = centered_rect(f.area(), 64, 12);
    f.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title("Add Quote")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().fg(Color::White).bg(Color::Black));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(3)])
        .split(inner);

    f.render_widget(
        input_box("Enter a new quote", &form.text, form.focus == Field::Text),
        rows[0],
    );
    f.render_widget(
        input_box("Enter quote category", &form.category, form.focus == Field::Category),
        rows[1],
    );
}

/// Render the import/export path prompt
pub fn render_path_prompt(f: &mut Frame, prompt: &PathPrompt) {
    let area = centered_rect(f.area(), 64, 5);
    f.render_widget(Clear, area);

    let block_title = prompt.action.title();
    let input = Paragraph::new(format!("{}_", prompt.input))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(block_title)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(input, area);
}
