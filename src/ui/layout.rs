use quotetui::model::Dialog;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top system bar area
    pub system_area: Rect,
    /// Category filter list on the left
    pub categories_area: Rect,
    /// Current quote on the right
    pub quote_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    vim_mode: bool,
    dialog: Option<&Dialog>,
) -> LayoutInfo {
    let legend_height =
        super::legend::calculate_legend_height(terminal_size.width, vim_mode, dialog);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // System bar (top border, text, bottom border)
            Constraint::Min(5),                // Content area
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
        ])
        .split(terminal_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    LayoutInfo {
        system_area: main_chunks[0],
        categories_area: content_chunks[0],
        quote_area: content_chunks[1],
        legend_area: main_chunks[2],
    }
}

/// Rect of the given size centered in `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
