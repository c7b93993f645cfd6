#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use schedules_core::schedules::{
    Account, AmountSpec, Frequency, Payee, Schedule, ScheduleSnapshot, ScheduleStatus,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_dir() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Snapshot with a landlord, an employer, one checking account and the four
/// schedules of the reference example: a one-time income, two monthly
/// expenses and a completed monthly income.
pub struct Household {
    pub snapshot: ScheduleSnapshot,
    pub bonus: Schedule,
    pub rent: Schedule,
    pub power: Schedule,
    pub old_salary: Schedule,
    pub landlord: Payee,
    pub employer: Payee,
    pub checking: Account,
}

pub fn household() -> Household {
    let landlord = Payee::new("Landlord");
    let employer = Payee::new("Acme Corp");
    let checking = Account::new("Checking");

    let bonus = Schedule::new(AmountSpec::Fixed(500))
        .with_name("Bonus")
        .with_payee(employer.id)
        .with_account(checking.id)
        .with_next_date(date(2024, 6, 15));
    let rent = Schedule::new(AmountSpec::Fixed(-200))
        .with_name("Rent")
        .with_payee(landlord.id)
        .with_account(checking.id)
        .with_next_date(date(2024, 7, 1))
        .with_recurrence(Frequency::Monthly, 1);
    let power = Schedule::new(AmountSpec::Between { num1: -250, num2: -350 })
        .with_name("Electricity")
        .with_account(checking.id)
        .with_next_date(date(2024, 7, 12))
        .with_recurrence(Frequency::Monthly, 1);
    let old_salary = Schedule::new(AmountSpec::Fixed(1000))
        .with_name("Old salary")
        .with_payee(employer.id)
        .with_recurrence(Frequency::Monthly, 1)
        .mark_completed();

    let mut snapshot = ScheduleSnapshot {
        schedules: vec![bonus.clone(), rent.clone(), power.clone(), old_salary.clone()],
        payees: vec![landlord.clone(), employer.clone()],
        accounts: vec![checking.clone()],
        ..ScheduleSnapshot::default()
    };
    snapshot.statuses.insert(bonus.id, ScheduleStatus::Upcoming);
    snapshot.statuses.insert(rent.id, ScheduleStatus::Due);
    snapshot.statuses.insert(power.id, ScheduleStatus::Scheduled);
    snapshot.statuses.insert(old_salary.id, ScheduleStatus::Completed);

    Household {
        snapshot,
        bonus,
        rent,
        power,
        old_salary,
        landlord,
        employer,
        checking,
    }
}

pub fn snapshot_of(schedules: Vec<Schedule>) -> ScheduleSnapshot {
    ScheduleSnapshot {
        schedules,
        ..ScheduleSnapshot::default()
    }
}
