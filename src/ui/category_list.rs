use quotetui::logic::selector::Filter;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Labels in list order: "All Categories" first, then categories as first seen
fn filter_labels(categories: &[String]) -> Vec<String> {
    std::iter::once(Filter::All.label().to_string())
        .chain(categories.iter().cloned())
        .collect()
}

/// Render the category filter list with the active filter highlighted
pub fn render_category_list(f: &mut Frame, area: Rect, categories: &[String], selected: usize) {
    let items: Vec<ListItem> = filter_labels(categories)
        .into_iter()
        .map(ListItem::new)
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Categories"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}
