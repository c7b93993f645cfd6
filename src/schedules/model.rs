use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ScheduleError;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Repetition unit of a recurring schedule. Variant order is the display
/// order of recurrence groups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }

    /// Singular noun used in recurrence labels.
    pub fn noun(self) -> &'static str {
        match self {
            Frequency::Daily => "day",
            Frequency::Weekly => "week",
            Frequency::Monthly => "month",
            Frequency::Yearly => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recurrence {
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
}

impl Recurrence {
    pub fn new(frequency: Frequency, interval: i32) -> Self {
        Self {
            frequency,
            interval: Some(interval),
        }
    }

    /// Interval with the implicit default of 1 applied.
    pub fn interval(&self) -> i32 {
        self.interval.unwrap_or(1)
    }

    /// Rejects non-positive intervals. The aggregator itself never calls this;
    /// it exists for collaborators that create or edit schedules.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let interval = self.interval();
        if interval < 1 {
            return Err(ScheduleError::InvalidRecurrence(format!(
                "interval must be at least 1 (got {} for {})",
                interval,
                self.frequency.as_str()
            )));
        }
        Ok(())
    }
}

/// How much a schedule is expected to move, in signed minor units.
/// Positive values are income, negative values are expenses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AmountSpec {
    Fixed(i64),
    Approximately(i64),
    Between { num1: i64, num2: i64 },
}

impl AmountSpec {
    pub fn is_approx(&self) -> bool {
        !matches!(self, AmountSpec::Fixed(_))
    }
}

/// Externally computed state of a schedule. Labels this crate does not know
/// are kept verbatim in `Other` so they still load, render and match searches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ScheduleStatus {
    Completed,
    Paused,
    Missed,
    Due,
    Upcoming,
    Scheduled,
    Other(String),
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ScheduleStatus::Completed => "completed",
            ScheduleStatus::Paused => "paused",
            ScheduleStatus::Missed => "missed",
            ScheduleStatus::Due => "due",
            ScheduleStatus::Upcoming => "upcoming",
            ScheduleStatus::Scheduled => "scheduled",
            ScheduleStatus::Other(label) => label,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ScheduleStatus::Completed)
    }
}

impl From<String> for ScheduleStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "completed" => ScheduleStatus::Completed,
            "paused" => ScheduleStatus::Paused,
            "missed" => ScheduleStatus::Missed,
            "due" => ScheduleStatus::Due,
            "upcoming" => ScheduleStatus::Upcoming,
            "scheduled" => ScheduleStatus::Scheduled,
            _ => ScheduleStatus::Other(label),
        }
    }
}

impl From<ScheduleStatus> for String {
    fn from(status: ScheduleStatus) -> Self {
        match status {
            ScheduleStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

pub type ScheduleStatuses = HashMap<Uuid, ScheduleStatus>;

/// A recurring or one-time planned transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<AmountSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(default)]
    pub completed: bool,
}

impl Schedule {
    /// Creates an unnamed one-time schedule for the given amount.
    pub fn new(amount: AmountSpec) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            payee: None,
            account: None,
            next_date: None,
            amount: Some(amount),
            recurrence: None,
            completed: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_payee(mut self, payee: Uuid) -> Self {
        self.payee = Some(payee);
        self
    }

    pub fn with_account(mut self, account: Uuid) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_next_date(mut self, date: NaiveDate) -> Self {
        self.next_date = Some(date);
        self
    }

    pub fn with_recurrence(mut self, frequency: Frequency, interval: i32) -> Self {
        self.recurrence = Some(Recurrence::new(frequency, interval));
        self
    }

    pub fn mark_completed(mut self) -> Self {
        self.completed = true;
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}

impl Identifiable for Schedule {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payee {
    pub id: Uuid,
    pub name: String,
}

impl Payee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Identifiable for Payee {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Payee {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Id to display-name lookup for payees or accounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameIndex {
    names: HashMap<Uuid, String>,
}

impl NameIndex {
    pub fn build<T>(entries: &[T]) -> Self
    where
        T: Identifiable + NamedEntity,
    {
        let names = entries
            .iter()
            .map(|entry| (entry.id(), entry.name().to_string()))
            .collect();
        Self { names }
    }

    /// Resolves an optional reference; unknown ids yield `None`.
    pub fn resolve(&self, id: Option<Uuid>) -> Option<&str> {
        id.and_then(|id| self.names.get(&id)).map(String::as_str)
    }
}

/// Read-only inputs supplied by the data layer for one derivation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScheduleSnapshot {
    pub schedules: Vec<Schedule>,
    pub statuses: ScheduleStatuses,
    pub payees: Vec<Payee>,
    pub accounts: Vec<Account>,
}

impl ScheduleSnapshot {
    pub fn schedule(&self, id: Uuid) -> Option<&Schedule> {
        self.schedules.iter().find(|schedule| schedule.id == id)
    }

    pub fn status(&self, id: Uuid) -> Option<&ScheduleStatus> {
        self.statuses.get(&id)
    }
}
