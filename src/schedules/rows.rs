use uuid::Uuid;

use crate::currency::CurrencyFormatter;

use super::{
    amount::{AmountDisplay, AmountResolver, ResolvedAmount},
    grouping::GroupKey,
    model::{Schedule, ScheduleStatus},
};

/// Placeholder shown for schedules without a name.
pub const UNNAMED_PLACEHOLDER: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Subtotal,
    Schedule,
    ShowCompleted,
}

/// Identity of a row, unique across one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey {
    Group(GroupKey),
    Schedule(Uuid),
    ShowCompleted,
}

/// Header row of a recurrence group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtotalRow {
    pub key: GroupKey,
    pub title: String,
    /// Sum of strictly positive member amounts.
    pub income: i64,
    /// Sum of strictly negative member amounts.
    pub expenses: i64,
}

/// What a subtotal header shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtotalDisplay {
    Split { income: i64, expenses: i64, total: i64 },
    Total(i64),
}

impl SubtotalRow {
    pub fn from_members(
        key: GroupKey,
        members: &[&Schedule],
        amounts: &dyn AmountResolver,
    ) -> Self {
        let mut income = 0i64;
        let mut expenses = 0i64;
        for member in members {
            let amount = amounts.resolve(member.amount.as_ref()).amount;
            if amount > 0 {
                income = income.saturating_add(amount);
            } else if amount < 0 {
                expenses = expenses.saturating_add(amount);
            }
        }
        Self {
            key,
            title: key.title(),
            income,
            expenses,
        }
    }

    pub fn total(&self) -> i64 {
        self.income.saturating_add(self.expenses)
    }

    pub fn display(&self) -> SubtotalDisplay {
        if self.income != 0 && self.expenses != 0 {
            SubtotalDisplay::Split {
                income: self.income,
                expenses: self.expenses,
                total: self.total(),
            }
        } else {
            SubtotalDisplay::Total(self.total())
        }
    }

    /// `+10.00 -4.00 = +6.00` when both sides are present, otherwise the total.
    pub fn amounts_text(&self, currency: &dyn CurrencyFormatter) -> String {
        match self.display() {
            SubtotalDisplay::Split {
                income,
                expenses,
                total,
            } => format!(
                "{} {} = {}",
                AmountDisplay::new(income, false, false, currency).text,
                AmountDisplay::new(expenses, false, true, currency).text,
                AmountDisplay::new(total, false, true, currency).text
            ),
            SubtotalDisplay::Total(total) => AmountDisplay::new(total, false, true, currency).text,
        }
    }
}

/// Resolved, ready-to-render fields of a schedule row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDisplay {
    pub name: String,
    pub name_missing: bool,
    pub payee: Option<String>,
    pub account: Option<String>,
    pub next_date: Option<String>,
    pub status: Option<ScheduleStatus>,
    pub amount: ResolvedAmount,
    pub amount_display: AmountDisplay,
    pub recurring: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub schedule: Schedule,
    pub display: ScheduleDisplay,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleRow {
    Subtotal(SubtotalRow),
    Schedule(Box<ScheduleEntry>),
    ShowCompleted,
}

impl ScheduleRow {
    pub fn kind(&self) -> RowKind {
        match self {
            ScheduleRow::Subtotal(_) => RowKind::Subtotal,
            ScheduleRow::Schedule(_) => RowKind::Schedule,
            ScheduleRow::ShowCompleted => RowKind::ShowCompleted,
        }
    }

    pub fn key(&self) -> RowKey {
        match self {
            ScheduleRow::Subtotal(row) => RowKey::Group(row.key),
            ScheduleRow::Schedule(entry) => RowKey::Schedule(entry.schedule.id),
            ScheduleRow::ShowCompleted => RowKey::ShowCompleted,
        }
    }

    pub fn as_subtotal(&self) -> Option<&SubtotalRow> {
        match self {
            ScheduleRow::Subtotal(row) => Some(row),
            _ => None,
        }
    }

    pub fn as_schedule(&self) -> Option<&ScheduleEntry> {
        match self {
            ScheduleRow::Schedule(entry) => Some(entry),
            _ => None,
        }
    }
}
