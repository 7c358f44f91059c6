//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling
//! events: the dataset, the month cursor shared by the month-scoped pages,
//! per-page filter state, and the login flow.

use chrono::NaiveDate;

use crate::auth::Session;
use crate::config::paths::StudeskPaths;
use crate::config::settings::Settings;
use crate::data::Dataset;
use crate::models::{AttendanceStatus, Priority, ReportKind, SchoolMonth, TaskStatus};
use crate::services::homework::toggle_status;
use crate::services::{
    attendance, grades, homework, reports, AttendanceQuery, GradeQuery, HomeworkQuery, ReportQuery,
    Selection,
};

use super::widgets::TextInput;

/// Which page is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Homework,
    Attendance,
    Grades,
    Reports,
    Assistant,
    Settings,
}

impl ActiveView {
    /// All pages, in sidebar order
    pub const ALL: [ActiveView; 7] = [
        Self::Dashboard,
        Self::Homework,
        Self::Attendance,
        Self::Grades,
        Self::Reports,
        Self::Assistant,
        Self::Settings,
    ];

    /// Page title for the sidebar and headers
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Homework => "Homework",
            Self::Attendance => "Attendance",
            Self::Grades => "Grades",
            Self::Reports => "Reports",
            Self::Assistant => "AI Assistant",
            Self::Settings => "Settings",
        }
    }

    /// Whether the page is scoped to the month cursor
    pub fn is_month_scoped(&self) -> bool {
        matches!(self, Self::Homework | Self::Attendance | Self::Grades)
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Login screen state
#[derive(Debug, Clone)]
pub struct LoginForm {
    /// Name field
    pub name: TextInput,
    /// Password field (masked)
    pub password: TextInput,
    /// Whether the password field has focus
    pub focus_password: bool,
    /// Last login failure, if any
    pub error: Option<String>,
}

impl LoginForm {
    fn new(default_name: &str) -> Self {
        Self {
            name: TextInput::new().label("Name").content(default_name),
            password: TextInput::new().label("Password").masked(),
            focus_password: true,
            error: None,
        }
    }
}

/// Authentication state of the TUI
#[derive(Debug, Clone)]
pub enum AuthFlow {
    /// Showing the login screen
    Login(LoginForm),
    /// Session active; dashboard unlocked
    Active,
}

/// Filter state for the attendance page
#[derive(Debug, Clone, Default)]
pub struct AttendancePage {
    pub status: Selection<AttendanceStatus>,
    pub subject: Selection<String>,
    pub search: String,
    pub selected: usize,
}

/// Filter state for the grades page
#[derive(Debug, Clone, Default)]
pub struct GradesPage {
    pub subject: Selection<String>,
    pub search: String,
    pub selected: usize,
}

/// Filter state for the homework page
#[derive(Debug, Clone, Default)]
pub struct HomeworkPage {
    pub status: Selection<TaskStatus>,
    pub subject: Selection<String>,
    pub priority: Selection<Priority>,
    pub search: String,
    pub selected: usize,
}

/// Filter state for the reports page
#[derive(Debug, Clone, Default)]
pub struct ReportsPage {
    pub kind: Selection<ReportKind>,
    pub search: String,
    pub selected: usize,
}

/// Number of editable rows on the settings page
pub const SETTINGS_ROWS: usize = 6;

/// Main application state
pub struct App<'a> {
    /// Paths configuration
    pub paths: &'a StudeskPaths,

    /// User settings (saved on change)
    pub settings: Settings,

    /// The in-memory dataset
    pub data: Dataset,

    /// Reference date for overdue checks and defaults
    pub today: NaiveDate,

    /// Month cursor shared by the month-scoped pages
    pub month: SchoolMonth,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active page
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Selected page index in the sidebar
    pub sidebar_index: usize,

    /// Login state
    pub auth: AuthFlow,

    /// Attendance page filters
    pub attendance_page: AttendancePage,

    /// Grades page filters
    pub grades_page: GradesPage,

    /// Homework page filters
    pub homework_page: HomeworkPage,

    /// Reports page filters
    pub reports_page: ReportsPage,

    /// Selected row on the settings page
    pub settings_index: usize,

    /// Transient status message
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create the app state
    ///
    /// Starts on the login screen unless a session is already active.
    pub fn new(paths: &'a StudeskPaths, settings: Settings, data: Dataset, today: NaiveDate) -> Self {
        let auth = if Session::is_authenticated(paths) {
            AuthFlow::Active
        } else {
            AuthFlow::Login(LoginForm::new(&settings.student_name))
        };

        Self {
            paths,
            month: SchoolMonth::containing(today),
            settings,
            data,
            today,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            sidebar_index: 0,
            auth,
            attendance_page: AttendancePage::default(),
            grades_page: GradesPage::default(),
            homework_page: HomeworkPage::default(),
            reports_page: ReportsPage::default(),
            settings_index: 0,
            status_message: None,
        }
    }

    /// Request shutdown
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether the login screen is showing
    pub fn is_login(&self) -> bool {
        matches!(self.auth, AuthFlow::Login(_))
    }

    /// Attempt login with the form's current credentials
    pub fn submit_login(&mut self) {
        if let AuthFlow::Login(form) = &mut self.auth {
            match Session::login(self.paths, &form.name.content, &form.password.content) {
                Ok(_) => {
                    self.auth = AuthFlow::Active;
                    self.status_message = Some("Welcome back!".to_string());
                }
                Err(e) => {
                    form.password.clear();
                    form.error = Some(e.to_string());
                }
            }
        }
    }

    // --- Month navigation -------------------------------------------------

    /// Move the month cursor forward
    pub fn advance_month(&mut self) {
        self.month = self.month.next();
        self.reset_selection();
    }

    /// Move the month cursor back
    pub fn retreat_month(&mut self) {
        self.month = self.month.prev();
        self.reset_selection();
    }

    /// Jump back to the current month
    pub fn reset_month(&mut self) {
        self.month = SchoolMonth::containing(self.today);
        self.reset_selection();
    }

    // --- Queries ----------------------------------------------------------

    /// Attendance query for the current page state
    pub fn attendance_query(&self) -> AttendanceQuery {
        AttendanceQuery {
            month: self.month,
            status: self.attendance_page.status.clone(),
            subject: self.attendance_page.subject.clone(),
            search: self.attendance_page.search.clone(),
        }
    }

    /// Grade query for the current page state
    pub fn grades_query(&self) -> GradeQuery {
        GradeQuery {
            month: self.month,
            subject: self.grades_page.subject.clone(),
            search: self.grades_page.search.clone(),
        }
    }

    /// Homework query for the current page state
    pub fn homework_query(&self) -> HomeworkQuery {
        HomeworkQuery {
            month: self.month,
            status: self.homework_page.status.clone(),
            subject: self.homework_page.subject.clone(),
            priority: self.homework_page.priority.clone(),
            search: self.homework_page.search.clone(),
        }
    }

    /// Report query for the current page state
    pub fn reports_query(&self) -> ReportQuery {
        ReportQuery {
            kind: self.reports_page.kind.clone(),
            search: self.reports_page.search.clone(),
        }
    }

    // --- Filters ----------------------------------------------------------

    /// The active page's search text, if it has one
    pub fn search_mut(&mut self) -> Option<&mut String> {
        match self.active_view {
            ActiveView::Attendance => Some(&mut self.attendance_page.search),
            ActiveView::Grades => Some(&mut self.grades_page.search),
            ActiveView::Homework => Some(&mut self.homework_page.search),
            ActiveView::Reports => Some(&mut self.reports_page.search),
            _ => None,
        }
    }

    /// Cycle the active page's status filter
    pub fn cycle_status_filter(&mut self) {
        match self.active_view {
            ActiveView::Attendance => {
                self.attendance_page.status = match &self.attendance_page.status {
                    Selection::All => Selection::Only(AttendanceStatus::Present),
                    Selection::Only(AttendanceStatus::Present) => {
                        Selection::Only(AttendanceStatus::Absent)
                    }
                    Selection::Only(AttendanceStatus::Absent) => {
                        Selection::Only(AttendanceStatus::Leave)
                    }
                    Selection::Only(AttendanceStatus::Leave) => Selection::All,
                };
            }
            ActiveView::Homework => {
                self.homework_page.status = match &self.homework_page.status {
                    Selection::All => Selection::Only(TaskStatus::Pending),
                    Selection::Only(TaskStatus::Pending) => Selection::Only(TaskStatus::Completed),
                    Selection::Only(TaskStatus::Completed) => Selection::All,
                };
            }
            ActiveView::Reports => {
                self.reports_page.kind = match &self.reports_page.kind {
                    Selection::All => Selection::Only(ReportKind::Academic),
                    Selection::Only(ReportKind::Academic) => Selection::Only(ReportKind::Behavioral),
                    Selection::Only(ReportKind::Behavioral) => {
                        Selection::Only(ReportKind::Attendance)
                    }
                    Selection::Only(ReportKind::Attendance) => Selection::Only(ReportKind::Progress),
                    Selection::Only(ReportKind::Progress) => Selection::All,
                };
            }
            _ => {}
        }
        self.reset_selection();
    }

    /// Cycle the active page's subject filter through the known subjects
    pub fn cycle_subject_filter(&mut self) {
        match self.active_view {
            ActiveView::Attendance => {
                let subjects = attendance::subjects(&self.data.attendance);
                self.attendance_page.subject =
                    cycle_subject(&self.attendance_page.subject, &subjects);
            }
            ActiveView::Grades => {
                let subjects = grades::subjects(&self.data.grades);
                self.grades_page.subject = cycle_subject(&self.grades_page.subject, &subjects);
            }
            ActiveView::Homework => {
                let subjects = homework::subjects(&self.data.homework);
                self.homework_page.subject = cycle_subject(&self.homework_page.subject, &subjects);
            }
            _ => {}
        }
        self.reset_selection();
    }

    /// Cycle the homework priority filter
    pub fn cycle_priority_filter(&mut self) {
        if self.active_view == ActiveView::Homework {
            self.homework_page.priority = match &self.homework_page.priority {
                Selection::All => Selection::Only(Priority::High),
                Selection::Only(Priority::High) => Selection::Only(Priority::Medium),
                Selection::Only(Priority::Medium) => Selection::Only(Priority::Low),
                Selection::Only(Priority::Low) => Selection::All,
            };
            self.reset_selection();
        }
    }

    /// Clear the active page's filters and search
    pub fn clear_filters(&mut self) {
        match self.active_view {
            ActiveView::Attendance => {
                self.attendance_page = AttendancePage::default();
            }
            ActiveView::Grades => {
                self.grades_page = GradesPage::default();
            }
            ActiveView::Homework => {
                self.homework_page = HomeworkPage::default();
            }
            ActiveView::Reports => {
                self.reports_page = ReportsPage::default();
            }
            _ => {}
        }
    }

    // --- Selection --------------------------------------------------------

    /// Number of selectable rows on the active page
    pub fn main_list_len(&self) -> usize {
        match self.active_view {
            ActiveView::Attendance => {
                attendance::month_view(&self.data.attendance, &self.attendance_query())
                    .rows
                    .len()
            }
            ActiveView::Grades => grades::month_view(&self.data.grades, &self.grades_query())
                .rows
                .len(),
            ActiveView::Homework => {
                homework::month_view(&self.data.homework, &self.homework_query(), self.today)
                    .rows
                    .len()
            }
            ActiveView::Reports => {
                reports::filtered(&self.data.reports, &self.reports_query()).len()
            }
            ActiveView::Settings => SETTINGS_ROWS,
            _ => 0,
        }
    }

    /// The active page's selected row index, if it has one
    pub fn selection_mut(&mut self) -> Option<&mut usize> {
        match self.active_view {
            ActiveView::Attendance => Some(&mut self.attendance_page.selected),
            ActiveView::Grades => Some(&mut self.grades_page.selected),
            ActiveView::Homework => Some(&mut self.homework_page.selected),
            ActiveView::Reports => Some(&mut self.reports_page.selected),
            ActiveView::Settings => Some(&mut self.settings_index),
            _ => None,
        }
    }

    /// Move the active selection down
    pub fn move_down(&mut self) {
        let len = self.main_list_len();
        if let Some(selected) = self.selection_mut() {
            if len > 0 && *selected + 1 < len {
                *selected += 1;
            }
        }
    }

    /// Move the active selection up
    pub fn move_up(&mut self) {
        if let Some(selected) = self.selection_mut() {
            *selected = selected.saturating_sub(1);
        }
    }

    /// Clamp selections back to the start after a filter change
    fn reset_selection(&mut self) {
        self.attendance_page.selected = 0;
        self.grades_page.selected = 0;
        self.homework_page.selected = 0;
        self.reports_page.selected = 0;
    }

    // --- Actions ----------------------------------------------------------

    /// Toggle the selected homework task between pending and completed
    ///
    /// Replaces the homework collection with a rebuilt copy; the view
    /// recomputes from the new collection on the next draw.
    pub fn toggle_selected_homework(&mut self) {
        let view = homework::month_view(&self.data.homework, &self.homework_query(), self.today);
        if let Some(task) = view.rows.get(self.homework_page.selected) {
            let title = task.title.clone();
            self.data.homework = toggle_status(&self.data.homework, task.id);
            self.status_message = Some(format!("Toggled '{}'", title));
        }
    }

    /// Apply the settings action for the selected settings row
    pub fn activate_settings_row(&mut self) {
        match self.settings_index {
            0 => self.settings.theme = self.settings.theme.toggled(),
            1 => self.settings.notifications.assignments = !self.settings.notifications.assignments,
            2 => self.settings.notifications.attendance = !self.settings.notifications.attendance,
            3 => self.settings.notifications.grades = !self.settings.notifications.grades,
            4 => {
                self.settings.notifications.announcements =
                    !self.settings.notifications.announcements
            }
            5 => {
                use crate::config::settings::DigestFrequency;
                self.settings.email_digest = match self.settings.email_digest {
                    DigestFrequency::Daily => DigestFrequency::Weekly,
                    DigestFrequency::Weekly => DigestFrequency::Monthly,
                    DigestFrequency::Monthly => DigestFrequency::Never,
                    DigestFrequency::Never => DigestFrequency::Daily,
                };
            }
            _ => return,
        }

        match self.settings.save(self.paths) {
            Ok(()) => self.status_message = Some("Settings saved".to_string()),
            Err(e) => self.status_message = Some(format!("Failed to save settings: {}", e)),
        }
    }

    /// Switch panel focus between sidebar and main
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Activate the page under the sidebar cursor
    pub fn select_sidebar_view(&mut self) {
        if let Some(view) = ActiveView::ALL.get(self.sidebar_index) {
            self.active_view = *view;
        }
    }
}

/// Cycle a subject selection through All -> each subject -> All
fn cycle_subject(current: &Selection<String>, subjects: &[String]) -> Selection<String> {
    match current {
        Selection::All => match subjects.first() {
            Some(first) => Selection::Only(first.clone()),
            None => Selection::All,
        },
        Selection::Only(subject) => {
            match subjects.iter().position(|s| s == subject) {
                Some(index) if index + 1 < subjects.len() => {
                    Selection::Only(subjects[index + 1].clone())
                }
                _ => Selection::All,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    fn test_app(paths: &StudeskPaths) -> App<'_> {
        App::new(
            paths,
            Settings::default(),
            Dataset::generate(fixed_today(), 7),
            fixed_today(),
        )
    }

    #[test]
    fn test_starts_on_login_without_session() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let app = test_app(&paths);
        assert!(app.is_login());
    }

    #[test]
    fn test_submit_login_unlocks() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = test_app(&paths);

        if let AuthFlow::Login(form) = &mut app.auth {
            form.password.insert('p');
            form.password.insert('w');
        }
        app.submit_login();
        assert!(!app.is_login());
        assert!(Session::is_authenticated(&paths));
    }

    #[test]
    fn test_login_failure_keeps_form_with_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = test_app(&paths);

        // Empty password
        app.submit_login();
        assert!(app.is_login());
        if let AuthFlow::Login(form) = &app.auth {
            assert!(form.error.is_some());
        }
    }

    #[test]
    fn test_month_navigation_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = test_app(&paths);

        let start = app.month;
        app.advance_month();
        app.advance_month();
        app.retreat_month();
        app.retreat_month();
        assert_eq!(app.month, start);

        app.advance_month();
        app.reset_month();
        assert_eq!(app.month, start);
    }

    #[test]
    fn test_cycle_subject_wraps_to_all() {
        let subjects = vec!["English".to_string(), "Science".to_string()];

        let mut selection = Selection::All;
        selection = cycle_subject(&selection, &subjects);
        assert_eq!(selection, Selection::Only("English".to_string()));
        selection = cycle_subject(&selection, &subjects);
        assert_eq!(selection, Selection::Only("Science".to_string()));
        selection = cycle_subject(&selection, &subjects);
        assert_eq!(selection, Selection::All);
    }

    #[test]
    fn test_cycle_subject_empty_list_stays_all() {
        assert_eq!(cycle_subject(&Selection::All, &[]), Selection::All);
    }

    #[test]
    fn test_toggle_selected_homework_flips_status() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = test_app(&paths);
        app.active_view = ActiveView::Homework;

        let view =
            homework::month_view(&app.data.homework, &app.homework_query(), app.today);
        if let Some(first) = view.rows.first() {
            let id = first.id;
            let before = first.status;

            app.toggle_selected_homework();
            let after = app
                .data
                .homework
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.status);
            assert_eq!(after, Some(before.toggled()));
        }
    }

    #[test]
    fn test_clear_filters_resets_page_state() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StudeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = test_app(&paths);
        app.active_view = ActiveView::Homework;

        app.cycle_status_filter();
        app.cycle_priority_filter();
        app.homework_page.search = "essay".to_string();
        assert!(app.homework_query().has_active_filters());

        app.clear_filters();
        assert!(!app.homework_query().has_active_filters());
    }
}
