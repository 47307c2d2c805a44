use crate::state::messages::{NetworkRequest, NetworkResponse};
use balldontlie_api::client::{ApiError, NbaApi};
use chrono::NaiveDate;
use log::{debug, error};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Serves requests one at a time, so responses arrive in request order.
pub struct NetworkWorker {
    client: NbaApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        client: NbaApi,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client,
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let result = match &request {
                NetworkRequest::LoadTeams => self.handle_load_teams().await,
                NetworkRequest::LoadGames { team_id, season, start_date } => {
                    self.handle_load_games(*team_id, *season, *start_date).await
                }
            };

            debug!("network request complete");
            self.stop_loading_animation().await;

            let response = result.unwrap_or_else(|err| NetworkResponse::Error {
                request,
                message: err.to_string(),
            });

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_teams(&self) -> Result<NetworkResponse, ApiError> {
        debug!("loading team list");
        let teams = self.client.fetch_teams().await?;
        Ok(NetworkResponse::TeamsLoaded { teams })
    }

    async fn handle_load_games(
        &self,
        team_id: u32,
        season: u16,
        start_date: NaiveDate,
    ) -> Result<NetworkResponse, ApiError> {
        debug!("loading {season} games for team {team_id} from {start_date}");
        let games = self.client.fetch_games(team_id, season, start_date).await?;
        Ok(NetworkResponse::GamesLoaded { team_id, games })
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state: LoadingState::default() })
            .await;
    }
}
