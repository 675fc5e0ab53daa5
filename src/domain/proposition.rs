// ============================================================
// PROPOSITION TYPES
// ============================================================
// Data structures representing parsed survey propositions

use serde::{Deserialize, Serialize};

/// A single survey proposition read from the input CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposition {
    /// Row index (0-based, assigned by input order)
    pub index: usize,

    /// Topic heading for the question
    pub topic: String,

    /// Opinion stated on the topic
    pub opinion: String,

    /// Verbatim comment quoted in the question body
    pub comment: String,
}

impl Proposition {
    /// Create a new proposition at the given input position
    pub fn new(index: usize, topic: String, opinion: String, comment: String) -> Self {
        Self {
            index,
            topic,
            opinion,
            comment,
        }
    }

    /// Question identifier derived from the input position
    pub fn question_id(&self) -> String {
        format!("GOV{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_follows_index() {
        let prop = Proposition::new(3, "Tax".into(), "Con".into(), "Too high".into());
        assert_eq!(prop.question_id(), "GOV3");
    }
}
