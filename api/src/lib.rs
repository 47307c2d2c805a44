pub mod client;
pub mod wire;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Upstream v1 API root. The proxy and the view both talk to it directly.
pub const API_BASE: &str = "https://www.balldontlie.io/api/v1";

/// Season whose schedule is queried for upcoming games.
pub const SEASON: u16 = 2023;

// ---------------------------------------------------------------------------
// Domain types, records as the upstream API returns them
// ---------------------------------------------------------------------------

/// An NBA franchise. `Team::default()` (id 0) stands for "no team selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: u32,
    pub abbreviation: String, // "BOS"
    pub city: String,         // "Boston"
    pub conference: String,   // "East"
    pub division: String,     // "Atlantic"
    pub full_name: String,    // "Boston Celtics"
    pub name: String,         // "Celtics"
}

impl Team {
    pub fn is_unselected(&self) -> bool {
        self.id == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: u64,
    pub date: String, // "2023-10-25T00:00:00.000Z", only the calendar date is meaningful
    pub home_team: Team,
    pub home_team_score: u16,
    pub visitor_team: Team,
    pub visitor_team_score: u16,
    pub period: u8, // 0 until tip-off
    pub postseason: bool,
    pub season: u16,
    /// Either an RFC 3339 tip-off time (scheduled games) or a label like "Final".
    pub status: String,
    pub time: String,
}

impl Game {
    pub fn has_started(&self) -> bool {
        self.period != 0
    }

    /// Calendar day of the game, taken from the leading `YYYY-MM-DD` of `date`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let day = self.date.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// Scheduled tip-off, when `status` carries a timestamp rather than a label.
    pub fn tip_off(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.status.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Textual status ("Final", "3rd Qtr", "7:30 pm ET"); None when `status` is a timestamp.
    pub fn status_label(&self) -> Option<&str> {
        let status = self.status.trim();
        if status.is_empty() || self.tip_off().is_some() {
            None
        } else {
            Some(status)
        }
    }

    pub fn is_home(&self, team_id: u32) -> bool {
        self.home_team.id == team_id
    }

    /// The other side of the matchup from `team_id`'s point of view.
    pub fn opponent_of(&self, team_id: u32) -> &Team {
        if self.is_home(team_id) {
            &self.visitor_team
        } else {
            &self.home_team
        }
    }
}

/// Order games by their `date` string. Stable, so same-day games keep API order.
pub fn sort_games_by_date(games: &mut [Game]) {
    games.sort_by(|a, b| a.date.cmp(&b.date));
}
