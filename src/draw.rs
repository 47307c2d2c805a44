use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::App;
use crate::components::game_card::{GameCard, MainGame};
use crate::components::team_select::TeamSelect;
use crate::state::network::LoadingState;
use crate::ui::layout::LayoutAreas;
use balldontlie_api::{Game, Team};

pub const HEADLINE_PLACEHOLDER: &str = "Never miss an NBA game!";

const HELP_TEXT: &str = "j/k or ↑/↓  move\nEnter      select team\n\"          toggle logs\n?/Esc      close help\nq          quit";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    if let Err(e) = terminal.draw(|f| render(f, app, loading)) {
        error!("failed to draw frame: {e:?}");
    }
}

/// One full frame: headline, selector, schedule panels and overlays.
pub fn render(f: &mut Frame, app: &App, loading: LoadingState) {
    let layout = LayoutAreas::new(f.area(), app.state.show_logs);

    draw_headline(f, layout.headline, &app.state.active_team);
    let selector = &app.state.selector;
    f.render_widget(
        TeamSelect {
            options: selector.options(),
            cursor: selector.cursor,
            active: selector.position_of(&app.state.active_team),
        },
        layout.selector,
    );

    if app.state.schedule.visible {
        draw_main_game(f, layout.main_game, &app.state.schedule.games);
        draw_many_games(
            f,
            &layout,
            app.state.schedule.following_games(),
            &app.state.active_team,
        );
    }

    if let Some(logs) = layout.logs {
        draw_logs(f, logs);
    }
    if app.state.show_help {
        draw_help(f, f.area());
    }

    draw_loading_spinner(f, f.area(), loading);
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_headline(f: &mut Frame, area: Rect, active_team: &Team) {
    let block = default_border(Color::DarkGray).title(" courtside ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [title, key_legend] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    let headline = if active_team.is_unselected() {
        Line::from(Span::styled(
            HEADLINE_PLACEHOLDER,
            Style::default().add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                active_team.full_name.as_str(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} / {}", active_team.conference, active_team.division),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };
    f.render_widget(Paragraph::new(headline).alignment(Alignment::Center), title);
    f.render_widget(
        Paragraph::new("Keys: j/k=move  Enter=select  ?=help  q=quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        key_legend,
    );
}

/// `games` must already be sorted; the first one is the next game.
fn draw_main_game(f: &mut Frame, area: Rect, games: &[Game]) {
    f.render_widget(MainGame { game: games.first() }, area);
}

fn draw_many_games(f: &mut Frame, layout: &LayoutAreas, games: &[Game], active_team: &Team) {
    for (game, slot) in games.iter().zip(layout.card_slots(games.len())) {
        f.render_widget(GameCard { game, team_id: active_team.id }, slot);
    }
}

fn draw_logs(f: &mut Frame, area: Rect) {
    f.render_widget(
        TuiLoggerWidget::default().block(default_border(Color::DarkGray).title(" Logs ")),
        area,
    );
}

fn draw_help(f: &mut Frame, area: Rect) {
    let width = 36.min(area.width);
    let height = 9.min(area.height);
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );
    f.render_widget(Clear, popup);
    let block = default_border(Color::White).title(" Help ");
    let inner = block.inner(popup);
    f.render_widget(block, popup);
    f.render_widget(Paragraph::new(HELP_TEXT), inner);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, loading: LoadingState) {
    if !loading.is_loading {
        return;
    }
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::White));
    let area = Rect::new(area.width.saturating_sub(3), 1, 1, 1);
    f.render_widget(spinner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::game_card::{NEXT_GAME_LABEL, STARTED_TEXT};
    use tui::backend::TestBackend;

    fn boston() -> Team {
        Team {
            id: 2,
            abbreviation: "BOS".into(),
            city: "Boston".into(),
            conference: "East".into(),
            division: "Atlantic".into(),
            full_name: "Boston Celtics".into(),
            name: "Celtics".into(),
        }
    }

    fn game(id: u64, date: &str, period: u8) -> Game {
        Game {
            id,
            date: date.into(),
            period,
            home_team: boston(),
            visitor_team: Team {
                id: 20,
                city: "New York".into(),
                name: "Knicks".into(),
                abbreviation: "NYK".into(),
                full_name: "New York Knicks".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| render(f, app, LoadingState::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn placeholder_headline_until_a_team_is_chosen() {
        let mut app = App::new();
        app.on_teams_loaded(vec![boston()]);
        assert!(screen(&app).contains(HEADLINE_PLACEHOLDER));

        app.state.active_team = boston();
        let text = screen(&app);
        assert!(!text.contains(HEADLINE_PLACEHOLDER));
        assert!(text.contains("East / Atlantic"));
    }

    #[test]
    fn hidden_schedule_renders_no_game_panels() {
        let mut app = App::new();
        app.on_teams_loaded(vec![boston()]);
        app.state.active_team = boston();
        app.state.schedule.games = vec![
            game(1, "2023-10-25T00:00:00.000Z", 0),
            game(2, "2023-10-27T00:00:00.000Z", 0),
        ];
        app.state.schedule.visible = false;

        let text = screen(&app);
        assert!(!text.contains(NEXT_GAME_LABEL.trim()), "{text}");
        assert!(!text.contains("New York"), "{text}");
    }

    #[test]
    fn visible_schedule_renders_next_game_and_cards() {
        let mut app = App::new();
        app.on_teams_loaded(vec![boston()]);
        app.state.active_team = boston();
        app.on_games_loaded(vec![
            game(2, "2023-10-27T00:00:00.000Z", 0),
            game(1, "2023-10-25T00:00:00.000Z", 3),
        ]);

        let text = screen(&app);
        assert!(text.contains(NEXT_GAME_LABEL.trim()), "{text}");
        assert!(text.contains(STARTED_TEXT), "{text}");
        assert!(text.contains("vs New York"), "{text}");
    }

    #[test]
    fn failed_games_fetch_shows_empty_panel() {
        let mut app = App::new();
        app.on_teams_loaded(vec![boston()]);
        let request = app
            .select_team("BOS", chrono::NaiveDate::from_ymd_opt(2023, 10, 24).unwrap())
            .unwrap();
        app.on_request_failed(request, "boom".into());

        let text = screen(&app);
        assert!(text.contains("No upcoming games"), "{text}");
        assert!(!text.contains("boom"), "{text}");
    }
}
