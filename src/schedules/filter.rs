use super::model::Schedule;

/// Keeps open schedules, and completed ones only when `include_completed`.
pub fn filter_completed<'a, I>(schedules: I, include_completed: bool) -> Vec<&'a Schedule>
where
    I: IntoIterator<Item = &'a Schedule>,
{
    schedules
        .into_iter()
        .filter(|schedule| include_completed || !schedule.completed)
        .collect()
}

pub fn has_completed(schedules: &[Schedule]) -> bool {
    schedules.iter().any(|schedule| schedule.completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedules::model::AmountSpec;

    fn sample() -> Vec<Schedule> {
        vec![
            Schedule::new(AmountSpec::Fixed(100)),
            Schedule::new(AmountSpec::Fixed(-50)).mark_completed(),
            Schedule::new(AmountSpec::Fixed(-75)),
        ]
    }

    #[test]
    fn drops_completed_unless_included() {
        let schedules = sample();
        let open = filter_completed(&schedules, false);
        assert_eq!(open.len(), 2);
        assert!(open.iter().all(|s| !s.completed));
        assert_eq!(filter_completed(&schedules, true).len(), 3);
    }

    #[test]
    fn preserves_order() {
        let schedules = sample();
        let open = filter_completed(&schedules, false);
        assert_eq!(open[0].id, schedules[0].id);
        assert_eq!(open[1].id, schedules[2].id);
    }

    #[test]
    fn idempotent() {
        let schedules = sample();
        for flag in [false, true] {
            let once = filter_completed(&schedules, flag);
            let twice = filter_completed(once.iter().copied(), flag);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn empty_input() {
        assert!(filter_completed(&Vec::<Schedule>::new(), false).is_empty());
        assert!(!has_completed(&[]));
    }
}
