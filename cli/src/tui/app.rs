use crossterm::event::KeyCode;
use ecohabit_core::{Analytics, AnalyticsReport, AnalyticsService, Notice};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Tracker,
    Analytics,
}

pub struct App {
    pub service: AnalyticsService,
    pub categories: Vec<String>,
    pub state: ListState,
    pub view: View,
    pub report: Option<AnalyticsReport>,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(service: AnalyticsService) -> App {
        let categories = service.categories();
        let mut state = ListState::default();
        if !categories.is_empty() {
            state.select(Some(0));
        }
        App {
            service,
            categories,
            state,
            view: View::Tracker,
            report: None,
            notice: None,
        }
    }

    /// Applies one key press. Returns false when the app should exit.
    ///
    /// An open notice is closed by any key. Enter/space stop there; every
    /// other key closes it and then acts. Esc closes the notice before it
    /// leaves the analytics view.
    pub fn on_key(&mut self, code: KeyCode) -> bool {
        if self.notice.is_some() && matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.dismiss_notice();
            return true;
        }
        if code != KeyCode::Esc {
            self.dismiss_notice();
        }

        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Esc => self.back(),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Enter | KeyCode::Char(' ') => self.record_selected(),
            KeyCode::Char(c @ '1'..='9') => self.record_index(c as usize - '1' as usize),
            KeyCode::Char('a') => self.show_analytics(),
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
        true
    }

    pub fn next(&mut self) {
        if self.categories.is_empty() { return; }

        let i = match self.state.selected() {
            Some(i) if i + 1 < self.categories.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.categories.is_empty() { return; }

        let i = match self.state.selected() {
            Some(0) | None => self.categories.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn record_selected(&mut self) {
        if let Some(i) = self.state.selected() {
            self.record_index(i);
        }
    }

    /// Records the category at `index`; out-of-range indexes are ignored.
    pub fn record_index(&mut self, index: usize) {
        let Some(habit) = self.categories.get(index).cloned() else {
            return;
        };
        self.state.select(Some(index));

        self.notice = Some(match self.service.record(&habit) {
            Ok(notice) => notice,
            Err(e) => Notice::warning("Error", e.to_string()),
        });

        if self.view == View::Analytics {
            self.refresh_report();
        }
    }

    pub fn show_analytics(&mut self) {
        match self.service.analytics() {
            Analytics::Report(report) => {
                self.report = Some(report);
                self.view = View::Analytics;
            }
            Analytics::NoData(notice) => {
                self.notice = Some(notice);
            }
        }
    }

    pub fn reset(&mut self) {
        self.notice = Some(self.service.reset());
        self.report = None;
        self.view = View::Tracker;
    }

    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }

    /// Esc: close the notice if one is open, otherwise leave the analytics view.
    pub fn back(&mut self) {
        if !self.dismiss_notice() {
            self.view = View::Tracker;
        }
    }

    pub fn count(&self, habit: &str) -> u64 {
        self.service.ledger().count(habit).unwrap_or(0)
    }

    fn refresh_report(&mut self) {
        match self.service.analytics() {
            Analytics::Report(report) => self.report = Some(report),
            Analytics::NoData(_) => {
                self.report = None;
                self.view = View::Tracker;
            }
        }
    }
}
