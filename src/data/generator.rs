//! Mock data generation
//!
//! Produces the same shapes and distributions as the school's feed would:
//! weekday attendance across three subjects, monthly grade batches,
//! homework spread around each month, and a handful of fixed reports,
//! notifications, and events. All randomness comes from a small seeded
//! generator local to this module, so a given (date, seed) pair always
//! yields the same dataset.

use chrono::{Datelike, Duration, Months, NaiveDate, TimeZone, Utc, Weekday};

use crate::models::{
    AttendanceEntry, AttendanceStatus, EventKind, GradeEntry, HomeworkTask, Notification,
    NotificationKind, Priority, Report, ReportKind, SchoolMonth, TaskStatus, TimelineEvent,
};

use super::Dataset;

const ATTENDANCE_SUBJECTS: [&str; 3] = ["Mathematics", "English", "Science"];

/// Weighted pool: five Present to one Absent and one Leave
const ATTENDANCE_POOL: [AttendanceStatus; 7] = [
    AttendanceStatus::Present,
    AttendanceStatus::Present,
    AttendanceStatus::Present,
    AttendanceStatus::Present,
    AttendanceStatus::Present,
    AttendanceStatus::Absent,
    AttendanceStatus::Leave,
];

const GRADE_SUBJECTS: [&str; 5] = [
    "Mathematics",
    "English",
    "Science",
    "History",
    "Computer Science",
];

const ASSESSMENTS: [&str; 8] = [
    "Mid-term Exam",
    "Final Exam",
    "Quiz",
    "Assignment",
    "Lab Practical",
    "Project",
    "Essay",
    "Presentation",
];

const GRADE_COMMENTS: [&str; 8] = [
    "Great work! Keep it up.",
    "Excellent performance.",
    "Good understanding of concepts.",
    "Well-researched and presented.",
    "Needs improvement in some areas.",
    "Outstanding effort!",
    "Good progress shown.",
    "Clean work and good logic.",
];

const HOMEWORK_SUBJECTS: [&str; 6] = [
    "Mathematics",
    "English",
    "Science",
    "History",
    "Computer Science",
    "Biology",
];

const TOPICS: [&str; 5] = [
    "Shakespeare",
    "Photosynthesis",
    "World War II",
    "Algebra",
    "Grammar",
];

/// (title template, description template)
const TASK_TEMPLATES: [(&str, &str); 6] = [
    (
        "Complete Chapter {n} Problems",
        "Solve problems 1-30 from chapter {n}",
    ),
    ("Write Essay on {topic}", "2000 words essay about {topic}"),
    ("Lab Report - {topic}", "Document {topic} experiment"),
    ("Read Chapter {n}", "Study chapter {n} materials"),
    (
        "{subject} Assignment",
        "Complete assignment on current topic",
    ),
    (
        "Project Presentation",
        "Prepare and present project findings",
    ),
];

/// Small deterministic generator (splitmix64)
struct Prng {
    state: u64,
}

impl Prng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in 0..bound (bound > 0)
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    /// Uniform value in lo..=hi
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        debug_assert!(lo <= hi);
        lo + self.below((hi - lo + 1) as u64) as i64
    }

    /// Uniform pick from a slice
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len() as u64) as usize]
    }

    /// True with probability num/den
    fn chance(&mut self, num: u64, den: u64) -> bool {
        self.below(den) < num
    }
}

/// Generate the full dataset anchored on `today`
pub fn generate(today: NaiveDate, seed: u64) -> Dataset {
    let mut rng = Prng::new(seed);

    Dataset {
        attendance: generate_attendance(today, &mut rng),
        grades: generate_grades(today, &mut rng),
        homework: generate_homework(today, &mut rng),
        reports: generate_reports(today),
        notifications: generate_notifications(today),
        events: generate_events(today),
    }
}

/// Shift a date by whole months, clamping the day to the target month
fn shift_months(date: NaiveDate, offset: i32) -> NaiveDate {
    if offset >= 0 {
        date.checked_add_months(Months::new(offset as u32))
            .unwrap_or(date)
    } else {
        date.checked_sub_months(Months::new((-offset) as u32))
            .unwrap_or(date)
    }
}

/// Three records per weekday (one per subject) from four months back
/// through the end of the current month
fn generate_attendance(today: NaiveDate, rng: &mut Prng) -> Vec<AttendanceEntry> {
    let current_month = SchoolMonth::containing(today);
    let mut start = current_month;
    for _ in 0..4 {
        start = start.prev();
    }

    let mut records = Vec::new();
    let mut date = start.start_date();
    let end = current_month.end_date();

    while date <= end {
        let weekday = date.weekday();
        if weekday != Weekday::Sat && weekday != Weekday::Sun {
            for subject in ATTENDANCE_SUBJECTS {
                let status = *rng.pick(&ATTENDANCE_POOL);
                records.push(AttendanceEntry::new(date, status, Some(subject.to_string())));
            }
        }
        date += Duration::days(1);
    }

    records
}

/// Ten grades per month for the current month and the three before it
fn generate_grades(today: NaiveDate, rng: &mut Prng) -> Vec<GradeEntry> {
    let mut grades = Vec::new();

    for month_offset in -3..=0 {
        let base_date = shift_months(today, month_offset);

        for _ in 0..10 {
            let date = base_date + Duration::days(rng.range(0, 29));
            let subject = *rng.pick(&GRADE_SUBJECTS);
            let assessment = *rng.pick(&ASSESSMENTS);
            let total_marks = *rng.pick(&[50u32, 100, 150]);
            let percentage = rng.range(70, 94) as u32;
            let marks = (percentage as f64 / 100.0 * total_marks as f64).round() as u32;
            let comment = *rng.pick(&GRADE_COMMENTS);

            grades.push(GradeEntry::new(
                subject,
                assessment,
                marks,
                total_marks,
                percentage,
                date,
                Some(comment.to_string()),
            ));
        }
    }

    grades.sort_by(|a, b| b.date.cmp(&a.date));
    grades
}

/// Eighteen tasks per month from two months back through two months ahead
fn generate_homework(today: NaiveDate, rng: &mut Prng) -> Vec<HomeworkTask> {
    let mut tasks = Vec::new();

    for month_offset in -2..=2 {
        let base_date = shift_months(today, month_offset);

        for _ in 0..18 {
            let due_on = base_date + Duration::days(rng.range(-15, 15));
            let subject = *rng.pick(&HOMEWORK_SUBJECTS);
            let priority = *rng.pick(&Priority::ALL);

            // Tasks already past due are usually done; the rest are a coin flip
            let status = if due_on < today && rng.chance(7, 10) {
                TaskStatus::Completed
            } else {
                *rng.pick(&TaskStatus::ALL)
            };

            let (title_template, desc_template) = *rng.pick(&TASK_TEMPLATES);
            let chapter = rng.range(1, 10).to_string();
            let topic = *rng.pick(&TOPICS);

            let title = title_template
                .replace("{n}", &chapter)
                .replace("{topic}", topic)
                .replace("{subject}", subject);
            let description = desc_template
                .replace("{n}", &chapter)
                .replace("{topic}", topic)
                .replace("{subject}", subject);

            tasks.push(HomeworkTask::new(
                title,
                subject,
                due_on,
                priority,
                status,
                Some(description),
            ));
        }
    }

    tasks
}

fn generate_reports(today: NaiveDate) -> Vec<Report> {
    vec![
        Report::new(
            "Academic Performance Report",
            ReportKind::Academic,
            today - Duration::days(5),
            "Overall GPA: 3.8/4.0. Strong performance across all subjects \
             with particular excellence in Science.",
        ),
        Report::new(
            "Attendance Report",
            ReportKind::Attendance,
            today - Duration::days(3),
            "Current attendance: 94%. No concerning absences. Excellent consistency.",
        ),
        Report::new(
            "Progress Report",
            ReportKind::Progress,
            today - Duration::days(1),
            "Showing steady improvement in Mathematics. Recommended: Continue \
             extra practice sessions.",
        ),
        Report::new(
            "Behavioral Report",
            ReportKind::Behavioral,
            today - Duration::days(7),
            "Positive classroom participation. Good peer relationships. \
             Recommended leadership roles.",
        ),
    ]
}

fn generate_notifications(today: NaiveDate) -> Vec<Notification> {
    // Anchor relative timestamps at midday so "hours ago" stays on the
    // same calendar day
    let noon = Utc.from_utc_datetime(&today.and_hms_opt(12, 0, 0).unwrap());

    vec![
        Notification::new(
            "New Assignment Posted",
            "Mr. Smith posted a new Math assignment due next week",
            NotificationKind::Message,
            false,
            noon - Duration::hours(2),
        ),
        Notification::new(
            "Low Attendance Warning",
            "Your attendance in Science class is below 90%",
            NotificationKind::Warning,
            false,
            noon - Duration::hours(5),
        ),
        Notification::new(
            "Grade Updated",
            "Your English essay grade has been posted: A-",
            NotificationKind::Success,
            true,
            noon - Duration::hours(24),
        ),
        Notification::new(
            "Homework Reminder",
            "Science Lab Report is due tomorrow",
            NotificationKind::Alert,
            false,
            noon - Duration::hours(12),
        ),
    ]
}

fn generate_events(today: NaiveDate) -> Vec<TimelineEvent> {
    vec![
        TimelineEvent::new(
            "Math Final Exam",
            today + Duration::days(5),
            EventKind::Exam,
            Some("Mathematics".to_string()),
            Some("Covers chapters 1-8".to_string()),
        ),
        TimelineEvent::new(
            "Science Quiz",
            today + Duration::days(3),
            EventKind::Quiz,
            Some("Science".to_string()),
            Some("Physics fundamentals".to_string()),
        ),
        TimelineEvent::new(
            "English Essay Deadline",
            today + Duration::days(5),
            EventKind::Deadline,
            Some("English".to_string()),
            Some("2000 word essay submission".to_string()),
        ),
        TimelineEvent::new(
            "Parent-Teacher Meeting",
            today + Duration::days(7),
            EventKind::Meeting,
            None,
            Some("Quarterly progress review".to_string()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate(fixed_today(), 42);
        let b = generate(fixed_today(), 42);

        assert_eq!(a.attendance.len(), b.attendance.len());
        assert_eq!(a.homework.len(), b.homework.len());
        for (x, y) in a.homework.iter().zip(&b.homework) {
            assert_eq!(x.title, y.title);
            assert_eq!(x.due_on, y.due_on);
            assert_eq!(x.status, y.status);
        }
    }

    #[test]
    fn test_attendance_skips_weekends() {
        let data = generate(fixed_today(), 1);
        assert!(data
            .attendance
            .iter()
            .all(|r| r.date.weekday() != Weekday::Sat && r.date.weekday() != Weekday::Sun));
        // Three subjects per school day
        assert_eq!(data.attendance.len() % 3, 0);
        assert!(!data.attendance.is_empty());
    }

    #[test]
    fn test_grade_bounds() {
        let data = generate(fixed_today(), 1);
        assert_eq!(data.grades.len(), 40);
        for grade in &data.grades {
            assert!((70..=94).contains(&grade.percentage));
            assert!(grade.total_marks > 0);
            assert!(grade.marks <= grade.total_marks);
        }
        // Sorted newest first
        assert!(data.grades.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_homework_count_and_window() {
        let data = generate(fixed_today(), 1);
        assert_eq!(data.homework.len(), 5 * 18);

        let earliest = shift_months(fixed_today(), -2) - Duration::days(15);
        let latest = shift_months(fixed_today(), 2) + Duration::days(15);
        assert!(data
            .homework
            .iter()
            .all(|t| t.due_on >= earliest && t.due_on <= latest));
    }

    #[test]
    fn test_shift_months_clamps_day() {
        // Jan 31 back one month lands on Dec 31; Mar 31 back one month clamps to Feb
        let jan31 = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(
            shift_months(jan31, -1),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );

        let mar31 = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        assert_eq!(
            shift_months(mar31, -1),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_fixed_collections() {
        let data = generate(fixed_today(), 1);
        assert_eq!(data.reports.len(), 4);
        assert_eq!(data.notifications.len(), 4);
        assert_eq!(data.events.len(), 4);
        assert_eq!(crate::models::unread_count(&data.notifications), 3);
    }
}
