mod common;

use std::collections::HashSet;

use common::{household, snapshot_of};
use schedules_core::schedules::{
    build_table, filter_completed, search_schedules, AmountSpec, Formatters, Frequency, GroupKey,
    NameIndex, RowKey, RowKind, Schedule, ScheduleRow, SearchContext, SubtotalDisplay,
    TableOptions,
};

fn options(allow_completed: bool, show_completed: bool, filter: &str) -> TableOptions {
    TableOptions {
        filter: filter.to_string(),
        allow_completed,
        show_completed,
        minimal: false,
    }
}

fn row_keys(rows: &[ScheduleRow]) -> Vec<RowKey> {
    rows.iter().map(ScheduleRow::key).collect()
}

#[test]
fn reference_example_produces_expected_rows() {
    let home = household();
    let formatters = Formatters::default();

    let table = build_table(&home.snapshot, &formatters, &options(true, false, ""));

    let monthly = GroupKey::Recurring {
        frequency: Frequency::Monthly,
        interval: 1,
    };
    assert_eq!(
        row_keys(&table.rows),
        vec![
            RowKey::Group(GroupKey::Once),
            RowKey::Schedule(home.bonus.id),
            RowKey::Group(monthly),
            RowKey::Schedule(home.rent.id),
            RowKey::Schedule(home.power.id),
            RowKey::ShowCompleted,
        ]
    );

    let subtotals: Vec<_> = table.subtotals().collect();
    assert_eq!(subtotals[0].title, "One-time");
    assert_eq!((subtotals[0].income, subtotals[0].expenses), (500, 0));
    assert_eq!(subtotals[1].title, "Every month");
    assert_eq!((subtotals[1].income, subtotals[1].expenses), (0, -500));
    assert_eq!(subtotals[1].display(), SubtotalDisplay::Total(-500));
}

#[test]
fn sentinel_requires_allow_completed() {
    let home = household();
    let table = build_table(
        &home.snapshot,
        &Formatters::default(),
        &options(false, false, ""),
    );
    assert!(table.rows.iter().all(|row| row.kind() != RowKind::ShowCompleted));
}

#[test]
fn show_completed_reveals_completed_schedules_but_keeps_sentinel() {
    let home = household();
    let table = build_table(&home.snapshot, &Formatters::default(), &options(true, true, ""));

    let ids: Vec<_> = table.schedule_entries().map(|e| e.schedule.id).collect();
    assert_eq!(
        ids,
        vec![home.bonus.id, home.rent.id, home.power.id, home.old_salary.id]
    );
    let monthly = table.subtotals().nth(1).expect("monthly subtotal");
    assert_eq!(
        monthly.display(),
        SubtotalDisplay::Split {
            income: 1000,
            expenses: -500,
            total: 500
        }
    );
    assert_eq!(table.rows.last().map(ScheduleRow::kind), Some(RowKind::ShowCompleted));
}

#[test]
fn show_completed_is_ignored_without_allow_completed() {
    let home = household();
    let table = build_table(&home.snapshot, &Formatters::default(), &options(false, true, ""));
    assert!(table
        .schedule_entries()
        .all(|entry| entry.schedule.id != home.old_salary.id));
}

#[test]
fn groups_follow_fixed_order_with_ascending_intervals() {
    let schedules = vec![
        Schedule::new(AmountSpec::Fixed(-1)).with_recurrence(Frequency::Yearly, 1),
        Schedule::new(AmountSpec::Fixed(-2)).with_recurrence(Frequency::Weekly, 2),
        Schedule::new(AmountSpec::Fixed(-3)).with_recurrence(Frequency::Monthly, 12),
        Schedule::new(AmountSpec::Fixed(-4)),
        Schedule::new(AmountSpec::Fixed(-5)).with_recurrence(Frequency::Monthly, 3),
        Schedule::new(AmountSpec::Fixed(-6)).with_recurrence(Frequency::Daily, 1),
        Schedule::new(AmountSpec::Fixed(-7)).with_recurrence(Frequency::Weekly, 1),
    ];
    let table = build_table(
        &snapshot_of(schedules),
        &Formatters::default(),
        &TableOptions::default(),
    );

    let titles: Vec<_> = table.subtotals().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "One-time",
            "Every day",
            "Every week",
            "Every 2 weeks",
            "Every 3 months",
            "Every 12 months",
            "Every year",
        ]
    );
    // each header is directly followed by its single member
    for pair in table.rows.chunks(2) {
        assert_eq!(pair[0].kind(), RowKind::Subtotal);
        assert_eq!(pair[1].kind(), RowKind::Schedule);
    }
}

#[test]
fn every_visible_schedule_appears_exactly_once() {
    let home = household();
    let formatters = Formatters::default();

    for (show_completed, filter) in [(false, ""), (true, ""), (false, "rent"), (true, "acme")] {
        let opts = options(true, show_completed, filter);
        let table = build_table(&home.snapshot, &formatters, &opts);

        let payees = NameIndex::build(&home.snapshot.payees);
        let accounts = NameIndex::build(&home.snapshot.accounts);
        let context = SearchContext {
            payees: &payees,
            accounts: &accounts,
            statuses: &home.snapshot.statuses,
            dates: formatters.dates.as_ref(),
            currency: formatters.currency.as_ref(),
            amounts: formatters.amounts.as_ref(),
        };
        let expected: Vec<_> = search_schedules(
            filter_completed(&home.snapshot.schedules, opts.include_completed()),
            filter,
            &context,
        )
        .into_iter()
        .map(|s| s.id)
        .collect();

        let shown: Vec<_> = table.schedule_entries().map(|e| e.schedule.id).collect();
        let unique: HashSet<_> = shown.iter().copied().collect();
        assert_eq!(unique.len(), shown.len(), "duplicate rows for {filter:?}");
        assert_eq!(unique, expected.into_iter().collect::<HashSet<_>>());

        let keys: HashSet<_> = row_keys(&table.rows).into_iter().collect();
        assert_eq!(keys.len(), table.rows.len(), "row keys must be unique");
    }
}

#[test]
fn subtotals_match_member_amounts() {
    let schedules = vec![
        Schedule::new(AmountSpec::Fixed(1200)).with_recurrence(Frequency::Weekly, 1),
        Schedule::new(AmountSpec::Approximately(-450)).with_recurrence(Frequency::Weekly, 1),
        Schedule::new(AmountSpec::Between { num1: 100, num2: 201 })
            .with_recurrence(Frequency::Weekly, 1),
        Schedule::new(AmountSpec::Fixed(-50)).with_recurrence(Frequency::Weekly, 1),
    ];
    let table = build_table(
        &snapshot_of(schedules),
        &Formatters::default(),
        &TableOptions::default(),
    );

    let subtotal = table.subtotals().next().expect("weekly subtotal");
    let members: Vec<i64> = table
        .schedule_entries()
        .map(|entry| entry.display.amount.amount)
        .collect();
    assert_eq!(members, vec![1200, -450, 151, -50]);
    assert_eq!(subtotal.income, 1351);
    assert_eq!(subtotal.expenses, -500);
    assert_eq!(subtotal.total(), 851);
}

#[test]
fn empty_input_yields_no_rows() {
    let table = build_table(
        &snapshot_of(Vec::new()),
        &Formatters::default(),
        &options(true, false, ""),
    );
    assert!(table.is_empty());
    assert_eq!(table.empty_message(), "No schedules");
}

#[test]
fn only_completed_schedules_yield_just_the_sentinel() {
    let schedules = vec![Schedule::new(AmountSpec::Fixed(-10)).mark_completed()];
    let table = build_table(
        &snapshot_of(schedules),
        &Formatters::default(),
        &options(true, false, ""),
    );
    assert_eq!(table.rows, vec![ScheduleRow::ShowCompleted]);
}

#[test]
fn non_positive_intervals_get_their_own_group() {
    let schedules = vec![
        Schedule::new(AmountSpec::Fixed(-1)).with_recurrence(Frequency::Weekly, 1),
        Schedule::new(AmountSpec::Fixed(-2)).with_recurrence(Frequency::Weekly, 0),
        Schedule::new(AmountSpec::Fixed(-3)).with_recurrence(Frequency::Weekly, -1),
    ];
    let table = build_table(
        &snapshot_of(schedules),
        &Formatters::default(),
        &TableOptions::default(),
    );
    let titles: Vec<_> = table.subtotals().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Every -1 weeks", "Every 0 weeks", "Every week"]);
}

#[test]
fn schedule_rows_carry_display_fields() {
    let home = household();
    let table = build_table(&home.snapshot, &Formatters::default(), &options(true, false, ""));
    let power = table
        .schedule_entries()
        .find(|entry| entry.schedule.id == home.power.id)
        .expect("power row");

    assert_eq!(power.display.name, "Electricity");
    assert_eq!(power.display.payee, None);
    assert_eq!(power.display.account.as_deref(), Some("Checking"));
    assert_eq!(power.display.next_date.as_deref(), Some("07/12/2024"));
    assert!(power.display.amount.is_approx);
    assert_eq!(power.display.amount_display.text, "3.00");
    assert_eq!(power.display.amount_display.title, "Approximately 3.00");
    assert!(power.display.recurring);
}

#[test]
fn huge_amounts_do_not_overflow_subtotals() {
    let schedules = vec![
        Schedule::new(AmountSpec::Fixed(i64::MAX)),
        Schedule::new(AmountSpec::Fixed(i64::MAX)),
        Schedule::new(AmountSpec::Fixed(1)),
    ];
    let table = build_table(
        &snapshot_of(schedules),
        &Formatters::default(),
        &TableOptions::default(),
    );
    let subtotal = table.subtotals().next().expect("once subtotal");
    assert_eq!(subtotal.income, i64::MAX);
    assert_eq!(subtotal.expenses, 0);
    assert_eq!(table.schedule_entries().count(), 3);
}
