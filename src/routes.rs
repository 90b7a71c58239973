//! Route paths shared by the router table and navigation call sites.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const LOBBY: &str = "/lobby";
pub const LEAVE_QUEUE: &str = "/leave-queue";

#[must_use]
pub fn game(game_id: i64) -> String {
    format!("/game/{game_id}")
}

#[must_use]
pub fn player(player_id: i64) -> String {
    format!("/player/{player_id}")
}

/// Parse the `:id` segment of `/game/:id` or `/player/:id`; only positive
/// ids are valid.
#[must_use]
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
