use crate::components::game_card::CARD_HEIGHT;
use tui::layout::{Constraint, Layout, Rect};

pub const HEADLINE_HEIGHT: u16 = 4;
pub const MAIN_GAME_HEIGHT: u16 = 8;
pub const LOG_PANEL_HEIGHT: u16 = 10;
const SELECTOR_WIDTH: u16 = 30;

/// Pre-computed layout areas for the main draw loop.
pub struct LayoutAreas {
    pub headline: Rect,
    pub selector: Rect,
    pub main_game: Rect,
    pub many_games: Rect,
    pub logs: Option<Rect>,
}

impl LayoutAreas {
    pub fn new(area: Rect, show_logs: bool) -> Self {
        let (content, logs) = if show_logs {
            let [content, logs] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(LOG_PANEL_HEIGHT)])
                    .areas(area);
            (content, Some(logs))
        } else {
            (area, None)
        };

        let [headline, body] =
            Layout::vertical([Constraint::Length(HEADLINE_HEIGHT), Constraint::Fill(1)])
                .areas(content);
        let [selector, schedule] =
            Layout::horizontal([Constraint::Length(SELECTOR_WIDTH), Constraint::Fill(1)])
                .areas(body);
        let [main_game, many_games, _rest] = Layout::vertical([
            Constraint::Length(MAIN_GAME_HEIGHT),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(schedule);

        LayoutAreas { headline, selector, main_game, many_games, logs }
    }

    /// Equal-width slots for `count` cards across the many games strip.
    pub fn card_slots(&self, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        Layout::horizontal(vec![Constraint::Fill(1); count])
            .split(self.many_games)
            .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_panel_only_when_requested() {
        let area = Rect::new(0, 0, 100, 40);
        assert!(LayoutAreas::new(area, false).logs.is_none());
        let with_logs = LayoutAreas::new(area, true);
        assert_eq!(with_logs.logs.map(|r| r.height), Some(LOG_PANEL_HEIGHT));
    }

    #[test]
    fn card_slots_split_the_strip() {
        let layout = LayoutAreas::new(Rect::new(0, 0, 130, 40), false);
        let slots = layout.card_slots(5);
        assert_eq!(slots.len(), 5);
        assert!(slots.iter().all(|s| s.height == CARD_HEIGHT));
        assert_eq!(slots.iter().map(|s| s.width).sum::<u16>(), layout.many_games.width);
        assert!(layout.card_slots(0).is_empty());
    }
}
