//! Intent classification of routing replies.

use serde::Serialize;

/// The classified purpose of a user request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intent {
    /// Turn the text into graph data.
    Generate,
    /// Answer a question from the stored graph.
    Answer,
    /// The routing reply named neither intent.
    Unknown,
}

impl Intent {
    /// Classify a routing reply.
    ///
    /// The reply is case-folded and trimmed, then checked by substring
    /// containment: "generate" wins over "answer", anything else is
    /// [`Intent::Unknown`]. Verbose replies such as "I choose to generate."
    /// still classify.
    pub fn classify(reply: &str) -> Self {
        let normalized = reply.trim().to_lowercase();
        if normalized.contains("generate") {
            Self::Generate
        } else if normalized.contains("answer") {
            Self::Answer
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generate => "GENERATE",
            Self::Answer => "ANSWER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
