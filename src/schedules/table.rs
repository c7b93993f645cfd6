use crate::{
    config::Config,
    currency::{CurrencyFormatter, LocaleCurrencyFormatter},
    dates::{DateFormatter, PatternDateFormatter},
};

use super::{
    amount::{AmountDisplay, AmountResolver, MidpointResolver},
    filter::{filter_completed, has_completed},
    grouping::group_schedules,
    model::{NameIndex, Schedule, ScheduleSnapshot},
    rows::{ScheduleDisplay, ScheduleEntry, ScheduleRow, SubtotalRow, UNNAMED_PLACEHOLDER},
    search::{search_schedules, SearchContext},
};

/// Tables with fewer rows than this let popups overflow the table bounds.
const POPUP_ESCAPE_ROW_LIMIT: usize = 6;

/// External collaborators used to present schedules.
pub struct Formatters {
    pub dates: Box<dyn DateFormatter>,
    pub currency: Box<dyn CurrencyFormatter>,
    pub amounts: Box<dyn AmountResolver>,
}

impl Formatters {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dates: Box::new(PatternDateFormatter::new(config.effective_date_format())),
            currency: Box::new(LocaleCurrencyFormatter::new(config.locale_config())),
            amounts: Box::new(MidpointResolver),
        }
    }
}

impl Default for Formatters {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Per-pass switches chosen by the surrounding view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    pub filter: String,
    pub allow_completed: bool,
    pub show_completed: bool,
    pub minimal: bool,
}

impl TableOptions {
    pub fn include_completed(&self) -> bool {
        self.allow_completed && self.show_completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Payee,
    Account,
    NextDate,
    Status,
    Amount,
    Recurring,
    Actions,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Payee => "Payee",
            Column::Account => "Account",
            Column::NextDate => "Next date",
            Column::Status => "Status",
            Column::Amount => "Amount",
            Column::Recurring => "Recurring",
            Column::Actions => "",
        }
    }
}

/// Output of one derivation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleTable {
    pub rows: Vec<ScheduleRow>,
    pub filtered: bool,
    pub minimal: bool,
}

impl ScheduleTable {
    pub fn columns(&self) -> Vec<Column> {
        let mut columns = vec![
            Column::Name,
            Column::Payee,
            Column::Account,
            Column::NextDate,
            Column::Status,
            Column::Amount,
        ];
        if !self.minimal {
            columns.push(Column::Recurring);
            columns.push(Column::Actions);
        }
        columns
    }

    pub fn empty_message(&self) -> &'static str {
        if self.filtered {
            "No matching schedules"
        } else {
            "No schedules"
        }
    }

    pub fn allow_popups_escape(&self) -> bool {
        self.rows.len() < POPUP_ESCAPE_ROW_LIMIT
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn subtotals(&self) -> impl Iterator<Item = &SubtotalRow> {
        self.rows.iter().filter_map(ScheduleRow::as_subtotal)
    }

    pub fn schedule_entries(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.rows.iter().filter_map(ScheduleRow::as_schedule)
    }
}

/// Runs the completion filter, search, grouping and flattening over a snapshot.
pub fn build_table(
    snapshot: &ScheduleSnapshot,
    formatters: &Formatters,
    options: &TableOptions,
) -> ScheduleTable {
    let payees = NameIndex::build(&snapshot.payees);
    let accounts = NameIndex::build(&snapshot.accounts);
    let context = SearchContext {
        payees: &payees,
        accounts: &accounts,
        statuses: &snapshot.statuses,
        dates: formatters.dates.as_ref(),
        currency: formatters.currency.as_ref(),
        amounts: formatters.amounts.as_ref(),
    };

    let visible = filter_completed(&snapshot.schedules, options.include_completed());
    let searched = search_schedules(visible, &options.filter, &context);
    let groups = group_schedules(&searched);

    let mut rows = Vec::with_capacity(searched.len() + groups.len() + 1);
    for (key, members) in groups.iter() {
        rows.push(ScheduleRow::Subtotal(SubtotalRow::from_members(
            *key,
            members,
            formatters.amounts.as_ref(),
        )));
        for member in members {
            rows.push(ScheduleRow::Schedule(Box::new(ScheduleEntry {
                schedule: (*member).clone(),
                display: describe(member, &context),
            })));
        }
    }

    if options.allow_completed && has_completed(&snapshot.schedules) {
        rows.push(ScheduleRow::ShowCompleted);
    }

    tracing::debug!(
        total = snapshot.schedules.len(),
        shown = searched.len(),
        groups = groups.len(),
        rows = rows.len(),
        "built schedules table"
    );

    ScheduleTable {
        rows,
        filtered: !options.filter.is_empty(),
        minimal: options.minimal,
    }
}

fn describe(schedule: &Schedule, context: &SearchContext<'_>) -> ScheduleDisplay {
    let resolved = context.amounts.resolve(schedule.amount.as_ref());
    let (name, name_missing) = match schedule.name.as_deref() {
        Some(name) if !name.is_empty() => (name.to_string(), false),
        _ => (UNNAMED_PLACEHOLDER.to_string(), true),
    };
    ScheduleDisplay {
        name,
        name_missing,
        payee: context.payees.resolve(schedule.payee).map(str::to_string),
        account: context.accounts.resolve(schedule.account).map(str::to_string),
        next_date: schedule.next_date.map(|date| context.dates.format_date(date)),
        status: context.statuses.get(&schedule.id).cloned(),
        amount: resolved,
        amount_display: AmountDisplay::new(
            resolved.amount,
            resolved.is_approx,
            false,
            context.currency,
        ),
        recurring: schedule.is_recurring(),
    }
}
