//! Schedule list aggregation: completion filter, search, grouping by
//! recurrence, subtotals and the flattened row list.

pub mod actions;
pub mod amount;
pub mod filter;
pub mod grouping;
pub mod model;
pub mod rows;
pub mod search;
pub mod table;
pub mod view;

pub use actions::{menu_actions, ScheduleAction};
pub use amount::{AmountDisplay, AmountResolver, MidpointResolver, ResolvedAmount};
pub use filter::{filter_completed, has_completed};
pub use grouping::{format_recurrence, group_schedules, GroupKey, ScheduleGroups};
pub use model::{
    Account, AmountSpec, Frequency, Identifiable, NameIndex, NamedEntity, Payee, Recurrence,
    Schedule, ScheduleSnapshot, ScheduleStatus, ScheduleStatuses,
};
pub use rows::{
    RowKey, RowKind, ScheduleDisplay, ScheduleEntry, ScheduleRow, SubtotalDisplay, SubtotalRow,
};
pub use search::{search_schedules, SearchContext};
pub use table::{build_table, Column, Formatters, ScheduleTable, TableOptions};
pub use view::{SchedulesView, ViewAction, ViewEvent};
