use super::*;

#[test]
fn game_and_player_routes_embed_ids() {
    assert_eq!(game(12), "/game/12");
    assert_eq!(player(3), "/player/3");
}

#[test]
fn parse_id_accepts_positive_integers_only() {
    assert_eq!(parse_id("42"), Some(42));
    assert_eq!(parse_id(" 7 "), Some(7));
    assert_eq!(parse_id("0"), None);
    assert_eq!(parse_id("-1"), None);
    assert_eq!(parse_id("abc"), None);
}
