use crate::{currency::CurrencyFormatter, dates::DateFormatter};

use super::{
    amount::{search_amount_text, AmountResolver},
    model::{NameIndex, Schedule, ScheduleStatuses},
};

/// Lookups and formatters needed to derive the searchable text of a schedule.
pub struct SearchContext<'a> {
    pub payees: &'a NameIndex,
    pub accounts: &'a NameIndex,
    pub statuses: &'a ScheduleStatuses,
    pub dates: &'a dyn DateFormatter,
    pub currency: &'a dyn CurrencyFormatter,
    pub amounts: &'a dyn AmountResolver,
}

impl<'a> SearchContext<'a> {
    /// Name, payee, account, signed amount, status and next date, in that order.
    pub fn candidates(&self, schedule: &Schedule) -> [Option<String>; 6] {
        let resolved = self.amounts.resolve(schedule.amount.as_ref());
        [
            schedule.name.clone(),
            self.payees.resolve(schedule.payee).map(str::to_string),
            self.accounts.resolve(schedule.account).map(str::to_string),
            Some(search_amount_text(resolved, self.currency)),
            self.statuses
                .get(&schedule.id)
                .map(|status| status.as_str().to_string()),
            schedule.next_date.map(|date| self.dates.format_date(date)),
        ]
    }

    pub fn matches(&self, schedule: &Schedule, query: &str) -> bool {
        let query = query.to_lowercase();
        self.candidates(schedule)
            .iter()
            .flatten()
            .any(|candidate| contains_either_way(candidate, &query))
    }
}

/// Case-insensitive containment in either direction. `query` must already be
/// lowercase. Empty candidates never match.
fn contains_either_way(candidate: &str, query: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    let candidate = candidate.to_lowercase();
    candidate.contains(query) || query.contains(&candidate)
}

/// Keeps the schedules matching `query`; an empty query keeps everything.
pub fn search_schedules<'a>(
    schedules: Vec<&'a Schedule>,
    query: &str,
    context: &SearchContext<'_>,
) -> Vec<&'a Schedule> {
    if query.is_empty() {
        return schedules;
    }
    let before = schedules.len();
    let kept: Vec<&Schedule> = schedules
        .into_iter()
        .filter(|schedule| context.matches(schedule, query))
        .collect();
    tracing::debug!(query, before, after = kept.len(), "searched schedules");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_symmetric_and_case_insensitive() {
        assert!(contains_either_way("Rent", "ren"));
        assert!(contains_either_way("Rent", "monthly rent payment"));
        assert!(!contains_either_way("Rent", "groceries"));
        assert!(!contains_either_way("", "anything"));
    }
}
