use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALLOWED: [&'static str; 3] = ["pending", "in-progress", "completed"];

    /// Parse a wire literal. Returns None for anything outside the allowed set.
    pub fn parse(value: &str) -> Option<TaskStatus> {
        match value {
            "pending" => Some(TaskStatus::Pending),
            "in-progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    /// Wire literal, also used as the status index key.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_literal() {
        for literal in TaskStatus::ALLOWED {
            let status = TaskStatus::parse(literal).unwrap();
            assert_eq!(status.as_str(), literal);
        }
    }

    #[test]
    fn parse_rejects_unknown_literal() {
        assert_eq!(TaskStatus::parse("archived"), None);
        assert_eq!(TaskStatus::parse("Pending"), None);
        assert_eq!(TaskStatus::parse(""), None);
    }

    #[test]
    fn serializes_as_kebab_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
