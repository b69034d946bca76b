use itertools::Itertools;
use labyrinth_core::{player::Player, roster::Roster};

static HEADER: &str = "id | color | score | turn  | player";

fn render_player(player: &Player) -> String {
    format!(
        "{:>2} | {:>5} | {:>5} | {:<5} | {}",
        player.id(),
        player.color_index(),
        player.score(),
        player.turn_action().to_string(),
        player.label()
    )
}

pub fn render_roster(roster: &Roster) -> String {
    if roster.is_empty() {
        return "No players".to_string();
    }
    std::iter::once(HEADER.to_string())
        .chain(roster.iter().map(render_player))
        .join("\n")
}
