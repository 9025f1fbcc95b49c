use ratatui::Frame;

use quotetui::model::Dialog;

use super::{category_list, dialogs, layout, legend, quote_view, system_bar, toast};
use crate::App;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let ui = &app.model.ui;
    let size = f.area();

    let layout_info = layout::calculate_layout(size, ui.vim_mode, ui.dialog.as_ref());

    system_bar::render_system_bar(
        f,
        layout_info.system_area,
        ui.quote_count,
        &app.model.sync,
    );

    category_list::render_category_list(
        f,
        layout_info.categories_area,
        &ui.categories,
        ui.filter_position(),
    );

    quote_view::render_quote_view(
        f,
        layout_info.quote_area,
        ui.current_quote.as_ref(),
        ui.filter.label(),
    );

    legend::render_legend(f, layout_info.legend_area, ui.vim_mode, ui.dialog.as_ref());

    // Dialogs draw over the main view
    match &ui.dialog {
        Some(Dialog::AddQuote(form)) => dialogs::render_add_quote_form(f, form),
        Some(Dialog::Path(prompt)) => dialogs::render_path_prompt(f, prompt),
        None => {}
    }

    // Toast goes last so it stays visible over dialogs
    if let Some((message, _)) = &ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
