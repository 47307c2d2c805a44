use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::state::messages::NetworkRequest;
use balldontlie_api::{Game, SEASON, Team};
use chrono::NaiveDate;
use log::error;

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        let settings = AppSettings::load();

        log::set_max_level(settings.log_level);
        tui_logger::set_default_level(settings.log_level);

        Self { state: AppState::new(), settings }
    }

    // -----------------------------------------------------------------------
    // Network response handlers, called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_teams_loaded(&mut self, teams: Vec<Team>) {
        self.state.last_error = None;
        self.state.selector.load(teams);
    }

    pub fn on_games_loaded(&mut self, games: Vec<Game>) {
        self.state.last_error = None;
        self.state.schedule.load(games);
    }

    /// Failures are logged and recorded, never shown. A failed team fetch leaves
    /// the selector empty; a failed games fetch shows empty panels.
    pub fn on_request_failed(&mut self, request: NetworkRequest, message: String) {
        error!("{request:?} failed: {message}");
        match request {
            NetworkRequest::LoadTeams => {}
            NetworkRequest::LoadGames { .. } => self.state.schedule.clear(),
        }
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Team selection
    // -----------------------------------------------------------------------

    /// Make the team with `abbreviation` active, keeping the current team when no
    /// team matches. Returns the games request for the resulting team, or None
    /// while nothing is selected.
    pub fn select_team(&mut self, abbreviation: &str, today: NaiveDate) -> Option<NetworkRequest> {
        if let Some(team) = self.state.selector.find_by_abbreviation(abbreviation) {
            self.state.active_team = team.clone();
        }

        let active = &self.state.active_team;
        if active.is_unselected() {
            return None;
        }
        self.state.selector.highlight(active);

        Some(NetworkRequest::LoadGames {
            team_id: active.id,
            season: SEASON,
            start_date: today,
        })
    }

    /// Commit the highlighted option.
    pub fn select_highlighted(&mut self, today: NaiveDate) -> Option<NetworkRequest> {
        let abbreviation = self.state.selector.highlighted_abbreviation()?.to_owned();
        self.select_team(&abbreviation, today)
    }

    pub fn selector_down(&mut self) {
        self.state.selector.move_down();
    }

    pub fn selector_up(&mut self) {
        self.state.selector.move_up();
    }

    // -----------------------------------------------------------------------
    // Overlays
    // -----------------------------------------------------------------------

    pub fn toggle_help(&mut self) {
        self.state.show_help = !self.state.show_help;
    }

    pub fn exit_help(&mut self) {
        self.state.show_help = false;
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }
}
