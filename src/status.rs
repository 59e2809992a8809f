use std::fmt::Display;

pub const RUNNING_MESSAGE: &str = "Running...";
pub const MISSING_FILES_MESSAGE: &str = "Please select both files.";

/// What the output area currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Idle,
    Running,
    MissingFiles,
    Done(serde_json::Value),
    Failed(String),
}

impl Status {
    pub fn failed(err: impl Display) -> Self {
        Status::Failed(err.to_string())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Status::Failed(_))
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::Running => f.write_str(RUNNING_MESSAGE),
            Status::MissingFiles => f.write_str(MISSING_FILES_MESSAGE),
            // two-space indentation
            Status::Done(value) => match serde_json::to_string_pretty(value) {
                Ok(pretty) => f.write_str(&pretty),
                Err(_) => Err(std::fmt::Error),
            },
            Status::Failed(message) => write!(f, "Error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn placeholder_messages() {
        assert_eq!(Status::Idle.to_string(), "");
        assert_eq!(Status::Running.to_string(), "Running...");
        assert_eq!(Status::MissingFiles.to_string(), "Please select both files.");
    }

    #[test]
    fn done_is_pretty_printed() {
        let status = Status::Done(json!({ "status": "ok" }));
        assert_eq!(status.to_string(), "{\n  \"status\": \"ok\"\n}");
    }

    #[test]
    fn nested_values_indent_by_two() {
        let status = Status::Done(json!({ "response": { "rows": [1, 2] } }));
        assert_eq!(
            status.to_string(),
            "{\n  \"response\": {\n    \"rows\": [\n      1,\n      2\n    ]\n  }\n}"
        );
    }

    #[test]
    fn failures_are_prefixed() {
        let status = Status::failed("connection refused");
        assert!(status.is_failure());
        assert_eq!(status.to_string(), "Error: connection refused");
    }
}
