//! Engine behavior locks
//!
//! End-to-end checks over the filtering and aggregation engine: search
//! narrowing, month partitioning, empty-input totals, toggle semantics,
//! and the documented rounding examples.

use chrono::{Datelike, NaiveDate};

use studesk::data::Dataset;
use studesk::models::{
    AttendanceEntry, AttendanceStatus, DatedRecord, GradeEntry, HomeworkId, HomeworkTask,
    Priority, SchoolMonth, TaskStatus,
};
use studesk::services::{attendance, available_years, grades, homework};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
}

fn this_month() -> SchoolMonth {
    SchoolMonth::containing(fixed_today())
}

#[test]
fn narrowing_search_never_adds_results() {
    let data = Dataset::generate(fixed_today(), 11);
    let month = this_month();

    for needle in ["math", "monday", "absent", "xyzzy"] {
        let unfiltered = attendance::month_view(
            &data.attendance,
            &attendance::AttendanceQuery::new(month),
        );
        let filtered = attendance::month_view(
            &data.attendance,
            &attendance::AttendanceQuery::new(month).search(needle),
        );

        assert!(filtered.rows.len() <= unfiltered.rows.len());
        // Every filtered row appears in the unfiltered set
        for row in &filtered.rows {
            assert!(unfiltered.rows.iter().any(|r| r.id == row.id));
        }
        // Summary is unaffected by the search
        assert_eq!(filtered.summary, unfiltered.summary);
        assert_eq!(filtered.month_total, unfiltered.month_total);
    }
}

#[test]
fn twelve_months_partition_a_year_exactly() {
    let data = Dataset::generate(fixed_today(), 13);

    for year in [2026, 2025] {
        let in_year = data
            .attendance
            .iter()
            .filter(|r| r.occurs_on().year() == year)
            .count();

        let by_month: usize = (1..=12)
            .map(|m| {
                attendance::month_view(
                    &data.attendance,
                    &attendance::AttendanceQuery::new(SchoolMonth::new(year, m)),
                )
                .month_total
            })
            .sum();

        assert_eq!(by_month, in_year);
    }
}

#[test]
fn empty_input_yields_zero_statistics_for_every_kind() {
    let month = this_month();

    assert_eq!(
        attendance::AttendanceSummary::for_month(&[], month),
        attendance::AttendanceSummary::default()
    );
    assert_eq!(
        grades::GradeSummary::for_month(&[], month),
        grades::GradeSummary::default()
    );
    assert_eq!(
        homework::HomeworkSummary::for_month(&[], month, fixed_today()),
        homework::HomeworkSummary::default()
    );
}

#[test]
fn month_with_no_records_yields_empty_view_not_error() {
    let data = Dataset::generate(fixed_today(), 17);
    // Far before any generated record
    let ancient = SchoolMonth::new(1999, 1);

    let view = attendance::month_view(
        &data.attendance,
        &attendance::AttendanceQuery::new(ancient),
    );
    assert!(view.is_empty());
    assert_eq!(view.month_total, 0);
    assert_eq!(view.summary.percentage, 0);
}

#[test]
fn attendance_percentage_example() {
    // 10 records: 7 present, 2 absent, 1 leave -> round(7/10*100) = 70
    let month = this_month();
    let mut records = Vec::new();
    for day in 1..=7 {
        records.push(AttendanceEntry::new(
            NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            AttendanceStatus::Present,
            Some("Mathematics".to_string()),
        ));
    }
    for day in 8..=9 {
        records.push(AttendanceEntry::new(
            NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            AttendanceStatus::Absent,
            Some("English".to_string()),
        ));
    }
    records.push(AttendanceEntry::new(
        NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
        AttendanceStatus::Leave,
        Some("Science".to_string()),
    ));

    let summary = attendance::AttendanceSummary::for_month(&records, month);
    assert_eq!(summary.percentage, 70);
}

#[test]
fn grade_average_example() {
    // Percentages [80, 90, 70] -> round(240/3) = 80
    let month = this_month();
    let records: Vec<GradeEntry> = [80u32, 90, 70]
        .iter()
        .enumerate()
        .map(|(i, pct)| {
            GradeEntry::new(
                "Mathematics",
                "Quiz",
                *pct,
                100,
                *pct,
                NaiveDate::from_ymd_opt(2026, 8, (i + 1) as u32).unwrap(),
                None,
            )
        })
        .collect();

    let summary = grades::GradeSummary::for_month(&records, month);
    assert_eq!(summary.average_percentage, 80);
}

#[test]
fn overdue_counts_pending_but_not_completed() {
    let month = this_month();
    let yesterday = fixed_today() - chrono::Duration::days(1);

    let tasks = vec![
        HomeworkTask::new(
            "Read Chapter 5",
            "History",
            yesterday,
            Priority::Medium,
            TaskStatus::Pending,
            None,
        ),
        HomeworkTask::new(
            "Read Chapter 6",
            "History",
            yesterday,
            Priority::Medium,
            TaskStatus::Completed,
            None,
        ),
    ];

    let summary = homework::HomeworkSummary::for_month(&tasks, month, fixed_today());
    assert_eq!(summary.overdue, 1);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.pending, 1);
}

#[test]
fn search_matches_substring_case_insensitively() {
    let month = this_month();
    let records = vec![
        AttendanceEntry::new(
            NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
            AttendanceStatus::Present,
            Some("Mathematics".to_string()),
        ),
        AttendanceEntry::new(
            NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
            AttendanceStatus::Present,
            Some("English".to_string()),
        ),
    ];

    let view = attendance::month_view(
        &records,
        &attendance::AttendanceQuery::new(month).search("math"),
    );
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].subject.as_deref(), Some("Mathematics"));
}

#[test]
fn toggle_is_involutive_and_isolated_on_generated_data() {
    let data = Dataset::generate(fixed_today(), 19);
    let tasks = &data.homework;
    let target = tasks[tasks.len() / 2].id;

    let once = homework::toggle_status(tasks, target);
    let twice = homework::toggle_status(&once, target);

    assert_eq!(once.len(), tasks.len());
    for (original, after) in tasks.iter().zip(&twice) {
        assert_eq!(original.id, after.id);
        assert_eq!(original.status, after.status);
        assert_eq!(original.title, after.title);
        assert_eq!(original.due_on, after.due_on);
    }

    // Single toggle changed exactly one record
    let changed: Vec<&HomeworkTask> = tasks
        .iter()
        .zip(&once)
        .filter(|(a, b)| a.status != b.status)
        .map(|(a, _)| a)
        .collect();
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].id, target);

    // Unknown id is a no-op
    let untouched = homework::toggle_status(tasks, HomeworkId::new());
    for (original, after) in tasks.iter().zip(&untouched) {
        assert_eq!(original.status, after.status);
    }
}

#[test]
fn categorical_filters_are_anded_with_search() {
    let data = Dataset::generate(fixed_today(), 23);
    let month = this_month();

    let query = homework::HomeworkQuery::new(month)
        .status(TaskStatus::Pending)
        .priority(Priority::High)
        .search("chapter");
    let view = homework::month_view(&data.homework, &query, fixed_today());

    for task in &view.rows {
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, Priority::High);
        assert!(task
            .search_haystacks()
            .iter()
            .any(|h| h.to_lowercase().contains("chapter")));
        assert!(month.contains(task.due_on));
    }
}

#[test]
fn derived_selectors_cover_the_dataset() {
    let data = Dataset::generate(fixed_today(), 31);

    // Every record's year appears in the year dropdown, newest first
    let years = available_years(&data.attendance);
    assert!(!years.is_empty());
    assert!(years.windows(2).all(|w| w[0] > w[1]));
    for record in &data.attendance {
        assert!(years.contains(&record.occurs_on().year()));
    }

    // Subject lists are sorted and deduplicated
    let subjects = grades::subjects(&data.grades);
    assert!(subjects.windows(2).all(|w| w[0] < w[1]));
    for grade in &data.grades {
        assert!(subjects.contains(&grade.subject));
    }
}

#[test]
fn display_order_differs_by_kind() {
    let data = Dataset::generate(fixed_today(), 29);
    let month = this_month();

    // Attendance and grades newest first
    let att = attendance::month_view(
        &data.attendance,
        &attendance::AttendanceQuery::new(month),
    );
    assert!(att.rows.windows(2).all(|w| w[0].date >= w[1].date));

    let grd = grades::month_view(&data.grades, &grades::GradeQuery::new(month));
    assert!(grd.rows.windows(2).all(|w| w[0].date >= w[1].date));

    // Homework soonest due first
    let hw = homework::month_view(
        &data.homework,
        &homework::HomeworkQuery::new(month),
        fixed_today(),
    );
    assert!(hw.rows.windows(2).all(|w| w[0].due_on <= w[1].due_on));
}
