use serde::{Deserialize, Serialize};

/// Requests the presentation layer sends to the studio driver. The driver
/// applies them sequentially, so studio state never sees overlapping
/// mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StudioCommand {
    /// Submit a free-text prompt for generation.
    Submit { prompt: String },

    /// Make the candidate at `index` the active theme.
    Select { index: usize },

    /// Abandon the in-flight generation, if any.
    Cancel,
}

impl StudioCommand {
    pub fn submit(prompt: impl Into<String>) -> Self {
        StudioCommand::Submit {
            prompt: prompt.into(),
        }
    }

    pub fn select(index: usize) -> Self {
        StudioCommand::Select { index }
    }

    pub fn cancel() -> Self {
        StudioCommand::Cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_round_trips() {
        let cmd = StudioCommand::submit("pastel bakery");
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains(r#""type":"submit"#));
        let back: StudioCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn select_carries_index() {
        let json = serde_json::to_string(&StudioCommand::select(2)).unwrap();
        assert!(json.contains(r#""index":2"#));
    }

    #[test]
    fn cancel_is_tagged() {
        let json = serde_json::to_string(&StudioCommand::cancel()).unwrap();
        assert!(json.contains(r#""type":"cancel"#));
    }
}
