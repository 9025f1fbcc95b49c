//! Sync Model
//!
//! State of the background sync as seen by the UI.

use chrono::{DateTime, Local};

use crate::logic::errors::ErrorType;
use crate::services::SyncReport;

/// Observable sync state
#[derive(Clone, Debug, PartialEq)]
pub enum SyncStatus {
    /// No cycle in flight and the last one succeeded (or none ran yet)
    Idle,
    /// A fetch-and-merge cycle is in flight
    Syncing,
    /// The last cycle failed; cleared by the next cycle
    Error { error_type: ErrorType, message: String },
    /// Sync disabled from the command line
    Offline,
}

impl SyncStatus {
    pub fn status_line(&self) -> String {
        match self {
            SyncStatus::Idle => "Status: Quotes up to date".to_string(),
            SyncStatus::Syncing => "Status: Syncing...".to_string(),
            SyncStatus::Error { error_type, .. } => {
                format!("Status: Sync failed ({})", error_type.label())
            }
            SyncStatus::Offline => "Status: Offline".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SyncModel {
    pub status: SyncStatus,

    /// When the last successful cycle finished
    pub last_sync: Option<DateTime<Local>>,

    /// Result of the last successful cycle
    pub last_report: Option<SyncReport>,
}

impl SyncModel {
    pub fn new(offline: bool) -> Self {
        Self {
            status: if offline {
                SyncStatus::Offline
            } else {
                SyncStatus::Idle
            },
            last_sync: None,
            last_report: None,
        }
    }

    pub fn begin(&mut self) {
        self.status = SyncStatus::Syncing;
    }

    pub fn finish(&mut self, report: SyncReport, at: DateTime<Local>) {
        self.status = SyncStatus::Idle;
        self.last_sync = Some(at);
        self.last_report = Some(report);
    }

    pub fn fail(&mut self, error_type: ErrorType, message: String) {
        self.status = SyncStatus::Error {
            error_type,
            message,
        };
    }

    pub fn is_syncing(&self) -> bool {
        self.status == SyncStatus::Syncing
    }
}
