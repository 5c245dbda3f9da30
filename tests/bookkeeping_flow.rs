mod common;

use bookkeeping_core::{
    core::services::{DegenerateReport, MonthlyReportPolicy, ReportOutcome, Trend},
    domain::{EmployeeChanges, Margin, PartnerChanges},
    BookError, PendingAction,
};
use common::{employee, input, month, partner, TestEnv};

#[test]
fn reference_month_is_computed_and_survives_restart() {
    let env = TestEnv::new();
    let mut keeper = env.open();
    keeper.add_employee(employee("Amina", 1200.0)).expect("add");
    keeper.add_employee(employee("Youssef", 800.0)).expect("add");
    keeper.add_partner(partner("Karim", 50.0, 100.0)).expect("add");
    keeper.add_partner(partner("Sara", 50.0, 100.0)).expect("add");

    let record = keeper
        .record_month(input(month(2024, 1), 10_000.0, 300.0))
        .expect("record");
    assert_eq!(record.data.total_employee_salaries, 2000.0);
    assert_eq!(record.data.total_expenses, 2650.0);
    assert_eq!(record.data.net_profit, 7350.0);
    for share in &record.data.partner_profits {
        assert_eq!(share.gross_profit, 3675.0);
        assert_eq!(share.net_profit, 3575.0);
    }

    let reopened = env.open();
    assert_eq!(reopened.roster().employees.len(), 2);
    assert_eq!(reopened.roster().partners.len(), 2);
    assert_eq!(reopened.history().len(), 1);
    let stored = reopened.history().get(record.id).expect("stored record");
    assert_eq!(stored, &record);
}

#[test]
fn recording_same_month_replaces_previous_record() {
    let env = TestEnv::new();
    let mut keeper = env.open();
    let january = month(2024, 1);

    keeper.record_month(input(january, 5000.0, 0.0)).expect("first");
    assert!(keeper.destroys_data(&PendingAction::RecordMonth(january)));
    let second = keeper.record_month(input(january, 6000.0, 0.0)).expect("second");

    let reopened = env.open();
    assert_eq!(reopened.history().len(), 1);
    assert_eq!(reopened.history().by_month(january).map(|r| r.id), Some(second.id));
    assert_eq!(second.data.monthly_revenue, 6000.0);
}

#[test]
fn history_snapshot_is_unaffected_by_later_roster_edits() {
    let env = TestEnv::new();
    let mut keeper = env.open();
    let id = keeper.add_employee(employee("Amina", 1500.0)).expect("add");
    let record = keeper
        .record_month(input(month(2024, 1), 8000.0, 0.0))
        .expect("record");

    keeper
        .edit_employee(
            id,
            EmployeeChanges {
                name: "Amina".into(),
                position: "Manager".into(),
                salary: 2500.0,
                reason: Some("promotion".into()),
            },
        )
        .expect("edit");
    keeper.remove_employee(id).expect("remove");

    let reopened = env.open();
    let stored = reopened.history().get(record.id).expect("record kept");
    assert_eq!(stored.data.total_employee_salaries, 1500.0);
    assert_eq!(stored.data.employees.len(), 1);
    assert_eq!(stored.data.employees[0].salary(), 1500.0);
    assert!(reopened.roster().employees.is_empty());
}

#[test]
fn salary_history_grows_only_on_change() {
    let env = TestEnv::new();
    let mut keeper = env.open();
    let id = keeper.add_employee(employee("Amina", 1500.0)).expect("add");

    let same = EmployeeChanges {
        name: "Amina B.".into(),
        position: "Staff".into(),
        salary: 1500.0,
        reason: None,
    };
    assert!(!keeper.edit_employee(id, same).expect("edit"));

    env.clock.advance(chrono::Duration::days(30));
    let raise = EmployeeChanges {
        name: "Amina B.".into(),
        position: "Staff".into(),
        salary: 1800.0,
        reason: Some("   ".into()),
    };
    assert!(keeper.edit_employee(id, raise).expect("edit"));

    let reopened = env.open();
    let stored = reopened.roster().employee(id).expect("employee");
    assert_eq!(stored.name, "Amina B.");
    let history = stored.salary_history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].reason, "initial hire");
    assert_eq!(history[1].salary, 1800.0);
    assert_eq!(history[1].reason, "salary change");
    assert!(history[0].date < history[1].date);
}

#[test]
fn share_limit_rejections_leave_storage_untouched() {
    let env = TestEnv::new();
    let mut keeper = env.open();
    let karim = keeper.add_partner(partner("Karim", 70.0, 0.0)).expect("add");
    let sara = keeper.add_partner(partner("Sara", 30.0, 0.0)).expect("add");

    let err = keeper
        .add_partner(partner("Nadia", 1.0, 0.0))
        .expect_err("over limit");
    assert!(matches!(err, BookError::ShareLimitExceeded { .. }));

    let err = keeper
        .edit_partner(
            sara,
            PartnerChanges {
                name: "Sara".into(),
                share: 31.0,
                personal_expenses: 0.0,
                personal_gains: None,
            },
        )
        .expect_err("over limit");
    assert!(matches!(err, BookError::ShareLimitExceeded { .. }));

    let reopened = env.open();
    assert_eq!(reopened.roster().partners.len(), 2);
    assert_eq!(reopened.roster().partner(sara).map(|p| p.share), Some(30.0));
    assert_eq!(reopened.share_summary().remaining, 0.0);

    keeper.remove_partner(karim).expect("remove");
    assert_eq!(env.open().share_summary().allocated, 30.0);
}

#[test]
fn reports_follow_recorded_history() {
    let env = TestEnv::new();
    let mut keeper = env.open();
    assert_eq!(
        keeper.monthly_report(),
        ReportOutcome::Empty(DegenerateReport::NoHistory)
    );

    keeper.record_month(input(month(2024, 1), 1000.0, 450.0)).expect("jan");
    let jan_only = keeper.comparison_report();
    assert!(matches!(
        jan_only,
        ReportOutcome::Empty(DegenerateReport::NotEnoughHistory { available: 1, .. })
    ));

    keeper.record_month(input(month(2024, 2), 1200.0, 450.0)).expect("feb");

    let monthly = keeper.monthly_report().into_ready().expect("monthly");
    assert_eq!(monthly.month, month(2024, 2));
    assert_eq!(monthly.net_profit, 400.0);
    assert_eq!(monthly.margin.to_string(), "33.3%");

    let comparison = keeper.comparison_report().into_ready().expect("comparison");
    assert_eq!(comparison.revenue.change, 200.0);
    assert_eq!(comparison.expenses.change, 0.0);
    assert_eq!(comparison.profit.change, 200.0);
    assert_eq!(comparison.profit.trend, Trend::Improvement);

    let year = keeper.current_year_report().into_ready().expect("yearly");
    assert_eq!(year.year, 2024);
    assert_eq!(year.months_included, 2);
    assert_eq!(year.total_revenue, 2200.0);
    assert_eq!(
        keeper.yearly_report(2023),
        ReportOutcome::Empty(DegenerateReport::NoRecordsForYear(2023))
    );
}

#[test]
fn zero_revenue_month_has_no_margin() {
    let env = TestEnv::new();
    let mut keeper = env.open();
    let record = keeper
        .record_month(input(month(2024, 3), 0.0, 0.0))
        .expect("record");
    assert!(record.data.is_loss());
    assert_eq!(record.data.margin(), Margin::NotApplicable);
    let report = keeper.monthly_report().into_ready().expect("monthly");
    assert_eq!(report.margin.to_string(), "N/A");
}

#[test]
fn last_inserted_policy_reports_most_recent_entry() {
    let env = TestEnv::new();
    let mut keeper = env.open().with_policy(MonthlyReportPolicy::LastInserted);
    keeper.record_month(input(month(2024, 5), 1000.0, 0.0)).expect("may");
    keeper.record_month(input(month(2024, 1), 2000.0, 0.0)).expect("jan");

    let report = keeper.monthly_report().into_ready().expect("monthly");
    assert_eq!(report.month, month(2024, 1));
}

#[test]
fn removing_and_clearing_history_persist() {
    let env = TestEnv::new();
    let mut keeper = env.open();
    let jan = keeper.record_month(input(month(2024, 1), 1000.0, 0.0)).expect("jan");
    keeper.record_month(input(month(2024, 2), 1000.0, 0.0)).expect("feb");
    keeper.record_month(input(month(2024, 3), 1000.0, 0.0)).expect("mar");

    keeper.remove_record(jan.id).expect("remove");
    assert!(matches!(
        keeper.remove_record(jan.id),
        Err(BookError::NotFound { .. })
    ));
    assert_eq!(env.open().history().len(), 2);

    assert!(keeper.destroys_data(&PendingAction::ClearHistory));
    assert_eq!(keeper.clear_history().expect("clear"), 2);
    assert!(env.open().history().is_empty());
}
