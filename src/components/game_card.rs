use balldontlie_api::Game;
use chrono::{Local, TimeZone};
use std::fmt::Display;
use tui::buffer::Buffer;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Paragraph, Widget};

use crate::draw::default_border;

/// Shown instead of a schedule once the period counter moves.
pub const STARTED_TEXT: &str = "Game has started";
pub const NEXT_GAME_LABEL: &str = " Next game ";

/// Rows a `GameCard` needs, borders included.
pub const CARD_HEIGHT: u16 = 6;

// ---------------------------------------------------------------------------
// Schedule text
// ---------------------------------------------------------------------------

/// Weekday and time of tip-off in `tz`. Falls back to the weekday of the game
/// date plus the upstream status label when no timestamp is known.
pub fn when_line<Tz>(game: &Game, tz: &Tz, weekday_fmt: &str, time_fmt: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if let Some(tip_off) = game.tip_off() {
        let local = tip_off.with_timezone(tz);
        return format!("{} {}", local.format(weekday_fmt), local.format(time_fmt));
    }

    let weekday = game.calendar_date().map(|d| d.format(weekday_fmt).to_string());
    match (weekday, game.status_label()) {
        (Some(day), Some(label)) => format!("{day} {label}"),
        (Some(day), None) => day,
        (None, Some(label)) => label.to_string(),
        (None, None) => "Time TBD".to_string(),
    }
}

pub fn date_line(game: &Game, date_fmt: &str) -> String {
    game.calendar_date()
        .map(|d| d.format(date_fmt).to_string())
        .unwrap_or_else(|| "Date TBD".to_string())
}

/// Status lines of the main game panel: weekday+time and date, or the fixed
/// started text once play is under way.
pub fn main_game_status<Tz>(game: &Game, tz: &Tz) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if game.has_started() {
        return vec![STARTED_TEXT.to_string()];
    }
    vec![when_line(game, tz, "%A", "%-I:%M %p"), date_line(game, "%a %b %-d %Y")]
}

// ---------------------------------------------------------------------------
// Main game panel
// ---------------------------------------------------------------------------

/// The emphasized "next game" panel for the first game of a sorted schedule.
pub struct MainGame<'a> {
    pub game: Option<&'a Game>,
}

impl Widget for MainGame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = default_border(Color::Yellow).title(NEXT_GAME_LABEL);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let Some(game) = self.game else {
            Paragraph::new("No upcoming games")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        };

        let [teams_area, status_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(inner);
        let [home_area, versus_area, visitor_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .areas(teams_area);

        let abbreviation_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        for (team, team_area) in [(&game.home_team, home_area), (&game.visitor_team, visitor_area)] {
            Paragraph::new(vec![
                Line::from(Span::styled(team.abbreviation.as_str(), abbreviation_style)),
                Line::from(team.full_name.as_str()),
            ])
            .alignment(Alignment::Center)
            .render(team_area, buf);
        }
        Paragraph::new("vs")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(versus_area, buf);

        let lines: Vec<Line> = main_game_status(game, &Local)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(status_area, buf);
    }
}

// ---------------------------------------------------------------------------
// Compact cards
// ---------------------------------------------------------------------------

/// One of the following games, seen from the active team's side.
pub struct GameCard<'a> {
    pub game: &'a Game,
    pub team_id: u32,
}

impl GameCard<'_> {
    /// "vs" at home, "at" on the road.
    pub fn venue_word(&self) -> &'static str {
        if self.game.is_home(self.team_id) { "vs" } else { "at" }
    }
}

impl Widget for GameCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = default_border(Color::DarkGray);
        let inner = block.inner(area);
        block.render(area, buf);

        let opponent = self.game.opponent_of(self.team_id);
        let lines = vec![
            Line::from(vec![
                Span::styled(self.venue_word(), Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(opponent.city.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(opponent.name.as_str()),
            Line::from(when_line(self.game, &Local, "%a", "%-I:%M %p")),
            Line::from(date_line(self.game, "%b %-d %Y")),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
