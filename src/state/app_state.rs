use balldontlie_api::{Game, Team};

// ---------------------------------------------------------------------------
// Team selector state
// ---------------------------------------------------------------------------

/// The team dropdown: the fetched list plus the highlighted row.
#[derive(Debug, Default)]
pub struct TeamSelectState {
    /// Teams in the order the API returned them. Loaded once.
    pub teams: Vec<Team>,
    /// Highlighted row, not yet committed as the active team.
    pub cursor: usize,
}

impl TeamSelectState {
    pub fn load(&mut self, teams: Vec<Team>) {
        self.teams = teams;
        self.cursor = 0;
    }

    /// Option labels shown in the dropdown.
    pub fn options(&self) -> Vec<&str> {
        self.teams.iter().map(|t| t.full_name.as_str()).collect()
    }

    pub fn find_by_abbreviation(&self, abbreviation: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.abbreviation == abbreviation)
    }

    /// Abbreviation of the highlighted option, the key the dropdown selects by.
    pub fn highlighted_abbreviation(&self) -> Option<&str> {
        self.teams.get(self.cursor).map(|t| t.abbreviation.as_str())
    }

    pub fn move_down(&mut self) {
        let max = self.teams.len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Row of `team` in the list. The unselected sentinel has none.
    pub fn position_of(&self, team: &Team) -> Option<usize> {
        if team.is_unselected() {
            return None;
        }
        self.teams.iter().position(|t| t.id == team.id)
    }

    /// Put the cursor on `team`, if it is in the list.
    pub fn highlight(&mut self, team: &Team) {
        if let Some(idx) = self.position_of(team) {
            self.cursor = idx;
        }
    }
}

// ---------------------------------------------------------------------------
// Schedule state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ScheduleState {
    /// Upcoming games of the active team, kept sorted by date.
    pub games: Vec<Game>,
    /// Gates the main game and many games panels. Set by the first games response.
    pub visible: bool,
}

impl ScheduleState {
    pub fn load(&mut self, mut games: Vec<Game>) {
        balldontlie_api::sort_games_by_date(&mut games);
        self.games = games;
        self.visible = true;
    }

    /// A failed fetch still opens the panels, just empty.
    pub fn clear(&mut self) {
        self.games.clear();
        self.visible = true;
    }

    /// The games after the next one, at most five.
    pub fn following_games(&self) -> &[Game] {
        let end = self.games.len().min(6);
        self.games.get(1..end).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Top-level state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AppState {
    pub selector: TeamSelectState,
    /// `Team::default()` until the user picks one.
    pub active_team: Team,
    pub schedule: ScheduleState,
    pub show_help: bool,
    pub show_logs: bool,
    /// Most recent fetch failure. Kept for diagnostics only, never rendered.
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
