use std::collections::HashSet;

use uuid::Uuid;

use crate::errors::ScheduleError;

use super::{
    actions::{menu_actions, ScheduleAction},
    model::ScheduleSnapshot,
    rows::RowKind,
    table::{build_table, Formatters, ScheduleTable, TableOptions},
};

/// Discrete user interactions handled by [`SchedulesView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Select(Uuid),
    OpenMenu(Uuid),
    CloseMenu(Uuid),
    SelectMenuItem { id: Uuid, action: ScheduleAction },
    ToggleCompleted,
}

/// Notifications for the host once an interaction completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Selected(Uuid),
    Action { action: ScheduleAction, id: Uuid },
}

/// Owns the interactive state of a schedules table and a memoised copy of
/// the last derived table.
///
/// Every input change bumps `version`; the cached table is reused only while
/// its version matches.
pub struct SchedulesView {
    snapshot: ScheduleSnapshot,
    formatters: Formatters,
    options: TableOptions,
    open_menus: HashSet<Uuid>,
    version: u64,
    cache: Option<(u64, ScheduleTable)>,
}

impl SchedulesView {
    pub fn new(formatters: Formatters, allow_completed: bool, minimal: bool) -> Self {
        Self {
            snapshot: ScheduleSnapshot::default(),
            formatters,
            options: TableOptions {
                filter: String::new(),
                allow_completed,
                show_completed: false,
                minimal,
            },
            open_menus: HashSet::new(),
            version: 0,
            cache: None,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> &ScheduleSnapshot {
        &self.snapshot
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn show_completed(&self) -> bool {
        self.options.show_completed
    }

    pub fn is_menu_open(&self, id: Uuid) -> bool {
        self.open_menus.contains(&id)
    }

    /// Replaces the data-layer inputs, e.g. after a sync event.
    pub fn set_snapshot(&mut self, snapshot: ScheduleSnapshot) {
        self.open_menus
            .retain(|id| snapshot.schedules.iter().any(|schedule| schedule.id == *id));
        self.snapshot = snapshot;
        self.invalidate();
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        if filter != self.options.filter {
            self.options.filter = filter;
            self.invalidate();
        }
    }

    pub fn set_allow_completed(&mut self, allow_completed: bool) {
        if allow_completed != self.options.allow_completed {
            self.options.allow_completed = allow_completed;
            self.invalidate();
        }
    }

    pub fn set_minimal(&mut self, minimal: bool) {
        if minimal != self.options.minimal {
            self.options.minimal = minimal;
            self.invalidate();
        }
    }

    pub fn set_formatters(&mut self, formatters: Formatters) {
        self.formatters = formatters;
        self.invalidate();
    }

    /// Returns the table for the current inputs, deriving it only when stale.
    pub fn table(&mut self) -> &ScheduleTable {
        let version = self.version;
        if !matches!(&self.cache, Some((cached, _)) if *cached == version) {
            self.cache = None;
        }
        let (_, table) = self.cache.get_or_insert_with(|| {
            (
                version,
                build_table(&self.snapshot, &self.formatters, &self.options),
            )
        });
        table
    }

    pub fn dispatch(&mut self, action: ViewAction) -> Result<Option<ViewEvent>, ScheduleError> {
        match action {
            ViewAction::Select(id) => {
                self.ensure_known(id)?;
                Ok(Some(ViewEvent::Selected(id)))
            }
            ViewAction::OpenMenu(id) => {
                self.ensure_known(id)?;
                self.open_menus.insert(id);
                Ok(None)
            }
            ViewAction::CloseMenu(id) => {
                self.open_menus.remove(&id);
                Ok(None)
            }
            ViewAction::SelectMenuItem { id, action } => {
                self.ensure_known(id)?;
                if !self.open_menus.remove(&id) {
                    tracing::debug!(schedule = %id, "ignoring menu selection on a closed menu");
                    return Ok(None);
                }
                if !menu_actions(self.snapshot.status(id)).contains(&action) {
                    tracing::warn!(
                        schedule = %id,
                        action = action.as_str(),
                        "action is not offered for this schedule"
                    );
                    return Ok(None);
                }
                Ok(Some(ViewEvent::Action { action, id }))
            }
            ViewAction::ToggleCompleted => {
                let has_sentinel = self
                    .table()
                    .rows
                    .iter()
                    .any(|row| row.kind() == RowKind::ShowCompleted);
                if !has_sentinel {
                    tracing::debug!("ignoring completed toggle without a sentinel row");
                    return Ok(None);
                }
                self.options.show_completed = !self.options.show_completed;
                self.invalidate();
                Ok(None)
            }
        }
    }

    fn ensure_known(&self, id: Uuid) -> Result<(), ScheduleError> {
        match self.snapshot.schedule(id) {
            Some(_) => Ok(()),
            None => Err(ScheduleError::UnknownSchedule(id)),
        }
    }

    fn invalidate(&mut self) {
        self.version += 1;
    }
}
