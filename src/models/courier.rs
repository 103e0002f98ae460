//! Courier round rows and task kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The task a courier performs at a round stop.
///
/// Round tables carry free-text task labels; the three labels the
/// planner acts on are enumerated, everything else passes through
/// untouched.
///
/// # Examples
///
/// ```
/// use specimen_routing::models::TaskKind;
///
/// assert_eq!(TaskKind::from("Spare time"), TaskKind::SpareTime);
/// assert!(TaskKind::SpareTime.accepts_pickups());
/// assert!(!TaskKind::CollectSamples.accepts_pickups());
/// assert_eq!(TaskKind::from("Refuel").to_string(), "Refuel");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskKind {
    /// The courier is idle at this stop.
    SpareTime,
    /// Routine post delivery or collection.
    DeliverCollectPost,
    /// Specimen pickup folded in by the planner.
    CollectSamples,
    /// Any other task label, passed through verbatim.
    Other(String),
}

impl TaskKind {
    /// Returns `true` if a specimen pickup may be folded into a stop
    /// with this task.
    pub fn accepts_pickups(&self) -> bool {
        matches!(self, TaskKind::SpareTime | TaskKind::DeliverCollectPost)
    }
}

impl From<&str> for TaskKind {
    fn from(label: &str) -> Self {
        match label {
            "Spare time" => TaskKind::SpareTime,
            "Deliver/Collect post" => TaskKind::DeliverCollectPost,
            "Collect samples" => TaskKind::CollectSamples,
            other => TaskKind::Other(other.to_string()),
        }
    }
}

impl From<String> for TaskKind {
    fn from(label: String) -> Self {
        TaskKind::from(label.as_str())
    }
}

impl From<TaskKind> for String {
    fn from(task: TaskKind) -> String {
        task.to_string()
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::SpareTime => f.write_str("Spare time"),
            TaskKind::DeliverCollectPost => f.write_str("Deliver/Collect post"),
            TaskKind::CollectSamples => f.write_str("Collect samples"),
            TaskKind::Other(label) => f.write_str(label),
        }
    }
}

/// One row of a courier round table.
///
/// Rounds are independently operated delivery circuits; the planner
/// reads them and appends "Collect samples" rows when a pickup is
/// folded in. It does not own their persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundEntry {
    /// Identifier of the round this row belongs to.
    pub round_id: String,
    /// Identifier of the vehicle operating the round.
    pub vehicle_id: String,
    /// Time at this stop, passed through verbatim.
    pub time: String,
    /// Location name.
    pub location: String,
    /// Location postcode.
    pub postcode: String,
    /// Task performed at this stop.
    pub task: TaskKind,
    /// Carried volume at this stop, in capacity units.
    pub volume: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_round_trip() {
        for label in ["Spare time", "Deliver/Collect post", "Collect samples", "Lunch"] {
            assert_eq!(TaskKind::from(label).to_string(), label);
        }
    }

    #[test]
    fn test_accepts_pickups() {
        assert!(TaskKind::SpareTime.accepts_pickups());
        assert!(TaskKind::DeliverCollectPost.accepts_pickups());
        assert!(!TaskKind::CollectSamples.accepts_pickups());
        assert!(!TaskKind::Other("Refuel".into()).accepts_pickups());
    }

    #[test]
    fn test_round_entry_clone() {
        let entry = RoundEntry {
            round_id: "R1".into(),
            vehicle_id: "V7".into(),
            time: "09:30".into(),
            location: "Sorting Office".into(),
            postcode: "SO14 7LG".into(),
            task: TaskKind::DeliverCollectPost,
            volume: 2.4,
        };
        assert_eq!(entry.clone(), entry);
    }
}
