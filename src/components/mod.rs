pub mod game_card;
pub mod team_select;
