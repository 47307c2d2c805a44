use crate::state::network::LoadingState;
use balldontlie_api::{Game, Team};
use chrono::NaiveDate;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkRequest {
    LoadTeams,
    LoadGames {
        team_id: u32,
        season: u16,
        start_date: NaiveDate,
    },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    TeamsLoaded { teams: Vec<Team> },
    GamesLoaded { team_id: u32, games: Vec<Game> },
    /// Carries the request that failed so the app can react per request kind.
    Error { request: NetworkRequest, message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
