use serde::{Deserialize, Serialize};

use super::model::ScheduleStatus;

/// Entries of a schedule row's overflow menu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleAction {
    PostTransaction,
    Skip,
    Complete,
    Restart,
    Delete,
}

impl ScheduleAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleAction::PostTransaction => "post-transaction",
            ScheduleAction::Skip => "skip",
            ScheduleAction::Complete => "complete",
            ScheduleAction::Restart => "restart",
            ScheduleAction::Delete => "delete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScheduleAction::PostTransaction => "Post transaction",
            ScheduleAction::Skip => "Skip next date",
            ScheduleAction::Complete => "Complete",
            ScheduleAction::Restart => "Restart",
            ScheduleAction::Delete => "Delete",
        }
    }
}

/// Menu entries offered for a schedule in the given status.
pub fn menu_actions(status: Option<&ScheduleStatus>) -> Vec<ScheduleAction> {
    let mut actions = vec![ScheduleAction::PostTransaction];
    if status.is_some_and(ScheduleStatus::is_completed) {
        actions.push(ScheduleAction::Restart);
    } else {
        actions.push(ScheduleAction::Skip);
        actions.push(ScheduleAction::Complete);
    }
    actions.push(ScheduleAction::Delete);
    actions
}
