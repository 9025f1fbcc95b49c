//! Sync Event Handler
//!
//! Folds background sync events into the model.

use chrono::Local;
use quotetui::logic::ui::sync_notification;
use quotetui::services::SyncEvent;
use tracing::debug;

use crate::App;

pub fn handle_sync_event(app: &mut App, event: SyncEvent) {
    match event {
        SyncEvent::Started => app.model.sync.begin(),
        SyncEvent::Finished(report) => {
            debug!(
                "Sync finished: {} fetched, {} added",
                report.fetched, report.added
            );
            app.model.sync.finish(report, Local::now());
            if report.added > 0 {
                app.refresh_store_view();
                app.show_quote_if_empty();
                app.model.show_toast(sync_notification(report.added));
            }
        }
        SyncEvent::Failed {
            error_type,
            message,
        } => {
            debug!("Sync failed ({:?}): {}", error_type, message);
            app.model.sync.fail(error_type, message);
        }
    }
}
