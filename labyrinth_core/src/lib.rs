use api::ApiPlayer;
use error::Result;
use log::warn;
use player::Player;
use roster::Roster;

pub mod api;
pub mod computation_method;
pub mod editable_field;
pub mod error;
pub mod player;
pub mod roster;
pub mod turn_action;

/// Builds a roster from a JSON array of server player records.
///
/// In strict mode records with missing fields are skipped.
pub fn load_roster(json: &str, strict: bool) -> Result<Roster> {
    let records = ApiPlayer::list_from_json(json)?;
    let mut roster = Roster::new();
    if !strict {
        roster.sync(&records);
        return Ok(roster);
    }
    for record in &records {
        match Player::try_from_api(record) {
            Ok(player) => roster.push(player),
            Err(e) => warn!("Skipping player record {:?}: {}", record.id, e),
        }
    }
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use crate::{error::LabyrinthError, load_roster};

    static RECORDS: &str = r#"[
        {"id": 0, "score": 3, "pieceIndex": 0, "isComputerPlayer": false},
        {"id": 1, "score": 5, "pieceIndex": 1, "isComputerPlayer": true},
        {"id": 2, "score": 1, "pieceIndex": 2, "isComputerPlayer": true, "computationMethod": "alpha-beta"}
    ]"#;

    #[test]
    fn load_roster_should_keep_incomplete_records_when_lenient() {
        let roster = load_roster(RECORDS, false).unwrap();

        assert_eq!(roster.len(), 3);
        assert!(roster.player(1).unwrap().is_computer());
        assert_eq!(roster.player(1).unwrap().label(), "");
    }

    #[test]
    fn load_roster_should_skip_incomplete_records_when_strict() {
        let roster = load_roster(RECORDS, true).unwrap();

        assert_eq!(roster.iter().map(|p| p.id()).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(roster.player(2).unwrap().label(), "Alpha-Beta");
    }

    #[test]
    fn load_roster_should_fail_on_malformed_json() {
        assert!(matches!(
            load_roster("{", false),
            Err(LabyrinthError::Json(_))
        ));
    }
}
