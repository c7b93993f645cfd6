use std::collections::BTreeMap;
use std::fmt;

use super::model::{Frequency, Schedule};

/// Bucket a schedule falls into. The derived ordering is the display order:
/// one-time first, then frequencies daily to yearly with ascending intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Once,
    Recurring { frequency: Frequency, interval: i32 },
}

impl GroupKey {
    pub fn for_schedule(schedule: &Schedule) -> Self {
        match &schedule.recurrence {
            Some(recurrence) => GroupKey::Recurring {
                frequency: recurrence.frequency,
                interval: recurrence.interval(),
            },
            None => GroupKey::Once,
        }
    }

    pub fn title(&self) -> String {
        match self {
            GroupKey::Once => "One-time".to_string(),
            GroupKey::Recurring {
                frequency,
                interval,
            } => format_recurrence(*frequency, *interval),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Once => write!(f, "once"),
            GroupKey::Recurring {
                frequency,
                interval,
            } => write!(f, "{}-{}", frequency.as_str(), interval),
        }
    }
}

/// `Every week`, `Every 2 weeks`, `Every year`...
pub fn format_recurrence(frequency: Frequency, interval: i32) -> String {
    if interval == 1 {
        format!("Every {}", frequency.noun())
    } else {
        format!("Every {} {}s", interval, frequency.noun())
    }
}

/// Schedules partitioned by [`GroupKey`]; members keep their input order.
#[derive(Debug, Default)]
pub struct ScheduleGroups<'a> {
    groups: BTreeMap<GroupKey, Vec<&'a Schedule>>,
}

impl<'a> ScheduleGroups<'a> {
    pub fn get(&self, key: &GroupKey) -> Option<&[&'a Schedule]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Non-empty groups in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[&'a Schedule])> {
        self.groups
            .iter()
            .filter(|(_, members)| !members.is_empty())
            .map(|(key, members)| (key, members.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn group_schedules<'a>(schedules: &[&'a Schedule]) -> ScheduleGroups<'a> {
    let mut groups: BTreeMap<GroupKey, Vec<&'a Schedule>> = BTreeMap::new();
    for schedule in schedules {
        let key = GroupKey::for_schedule(schedule);
        if let GroupKey::Recurring { interval, .. } = key {
            if interval < 1 {
                tracing::warn!(
                    schedule = %schedule.id,
                    interval,
                    "schedule has a non-positive recurrence interval"
                );
            }
        }
        groups.entry(key).or_default().push(*schedule);
    }
    ScheduleGroups { groups }
}
