use crate::app::App;
use crate::state::messages::NetworkRequest;
use chrono::Local;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    if guard.state.show_help {
        match (key_event.code, key_event.modifiers) {
            (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => {
                crate::cleanup_terminal();
                std::process::exit(0);
            }
            (KeyCode::Esc | Char('?'), _) => guard.exit_help(),
            _ => {}
        }
        return;
    }

    match (key_event.code, key_event.modifiers) {
        // Quit
        (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Team selector
        (Char('j') | KeyCode::Down, _) => guard.selector_down(),
        (Char('k') | KeyCode::Up, _) => guard.selector_up(),
        (KeyCode::Enter, _) => {
            let today = Local::now().date_naive();
            if let Some(request) = guard.select_highlighted(today) {
                drop(guard);
                let _ = network_requests.send(request).await;
            }
        }

        // Global
        (Char('?'), _) => guard.toggle_help(),
        (Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}
