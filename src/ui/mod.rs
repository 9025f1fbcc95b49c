// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (bars, category list, quote pane)
// - render: Main orchestration function that coordinates all rendering
// - system_bar: Renders top bar (store size, sync status, last sync time)
// - category_list: Renders the left category filter panel
// - quote_view: Renders the current quote or the no-match placeholder
// - legend: Renders hotkey legend
// - dialogs: Renders the add-quote form and the import/export path prompt
// - toast: Renders toast notifications (brief pop-up messages)

pub mod category_list;
pub mod dialogs;
pub mod layout;
pub mod legend;
pub mod quote_view;
pub mod render;
pub mod system_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
