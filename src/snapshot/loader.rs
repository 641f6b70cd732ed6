use std::collections::HashSet;
use tracing::{debug, instrument, warn};

use super::{Snapshot, SnapshotError, StageKey};

/// Parses and validates a snapshot document.
///
/// This is the only place snapshot data can fail; everything downstream
/// works on a validated `Snapshot`.
#[instrument(skip(json), fields(bytes = json.len()))]
pub fn parse_snapshot(json: &str) -> Result<Snapshot, SnapshotError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    validate(&snapshot)?;

    debug!(
        current_stage = snapshot.metadata.current_stage,
        stages = snapshot.leaderboard_by_stage.len(),
        team_stages = snapshot.team_leaderboard_by_stage.len(),
        "Snapshot parsed"
    );

    Ok(snapshot)
}

/// Checks the constraints serde cannot express.
///
/// Duplicate names are tolerated (lookups resolve to the first entry) but
/// logged, since they point at a problem in the score job.
pub fn validate(snapshot: &Snapshot) -> Result<(), SnapshotError> {
    for (key, entries) in &snapshot.leaderboard_by_stage {
        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            check_name(key, index, "participant_name", &entry.participant_name)?;
            check_rank(key, index, "overall_rank", entry.overall_rank)?;
            check_rank(key, index, "stage_rank", entry.stage_rank)?;

            if !seen.insert(entry.participant_name.as_str()) {
                warn!(
                    stage = %key,
                    participant = %entry.participant_name,
                    "Duplicate participant in stage leaderboard"
                );
            }
        }
    }

    for (key, entries) in &snapshot.team_leaderboard_by_stage {
        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            check_name(key, index, "team_name", &entry.team_name)?;
            check_rank(key, index, "overall_rank", entry.overall_rank)?;
            check_rank(key, index, "stage_rank", entry.stage_rank)?;

            if !seen.insert(entry.team_name.as_str()) {
                warn!(stage = %key, team = %entry.team_name, "Duplicate team in stage leaderboard");
            }
        }
    }

    Ok(())
}

fn check_rank(key: &StageKey, index: usize, field: &str, rank: u32) -> Result<(), SnapshotError> {
    if rank == 0 {
        return Err(SnapshotError::Validation(format!(
            "{key}[{index}].{field} must be >= 1"
        )));
    }
    Ok(())
}

fn check_name(key: &StageKey, index: usize, field: &str, name: &str) -> Result<(), SnapshotError> {
    if name.trim().is_empty() {
        return Err(SnapshotError::Validation(format!(
            "{key}[{index}].{field} must not be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(entry: &str) -> String {
        format!(
            r#"{{
                "metadata": {{ "current_stage": 2, "top_n_participants_for_directie": 5 }},
                "leaderboard_by_stage": {{ "stage_2": [{entry}] }}
            }}"#
        )
    }

    #[test]
    fn accepts_valid_document() {
        let json = document(
            r#"{"participant_name": "Alice", "team_name": "Team X", "overall_score": 50,
                "overall_rank": 1, "overall_rank_change": 2, "stage_score": 20, "stage_rank": 1,
                "stage_rider_contributions": {"Pogacar": 15, "Vingegaard": 5}}"#,
        );

        let snapshot = parse_snapshot(&json).unwrap();
        assert_eq!(snapshot.metadata.current_stage, 2);
        assert_eq!(snapshot.stage_keys().count(), 1);
    }

    #[test]
    fn rejects_zero_rank_with_location() {
        let json = document(
            r#"{"participant_name": "Alice", "team_name": "Team X", "overall_score": 50,
                "overall_rank": 1, "stage_score": 20, "stage_rank": 0}"#,
        );

        let err = parse_snapshot(&json).unwrap_err();
        match err {
            SnapshotError::Validation(msg) => {
                assert_eq!(msg, "stage_2[0].stage_rank must be >= 1");
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_participant_name() {
        let json = document(
            r#"{"participant_name": "  ", "team_name": "Team X", "overall_score": 50,
                "overall_rank": 1, "stage_score": 20, "stage_rank": 1}"#,
        );

        assert!(matches!(
            parse_snapshot(&json),
            Err(SnapshotError::Validation(_))
        ));
    }

    #[test]
    fn rejects_negative_scores_as_parse_errors() {
        let json = document(
            r#"{"participant_name": "Alice", "team_name": "Team X", "overall_score": -5,
                "overall_rank": 1, "stage_score": 20, "stage_rank": 1}"#,
        );

        assert!(matches!(parse_snapshot(&json), Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn tolerates_duplicate_names() {
        let entry = r#"{"participant_name": "Alice", "team_name": "Team X", "overall_score": 50,
                "overall_rank": 1, "stage_score": 20, "stage_rank": 1}"#;
        let json = document(&format!("{entry}, {entry}"));

        let snapshot = parse_snapshot(&json).unwrap();
        let key = StageKey::new(2).unwrap();
        assert_eq!(snapshot.leaderboard_by_stage[&key].len(), 2);
    }

    #[test]
    fn rejects_truncated_json() {
        assert!(matches!(
            parse_snapshot(r#"{"metadata": {"current_stage": 1"#),
            Err(SnapshotError::Parse(_))
        ));
    }
}
