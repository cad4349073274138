//! Instruction templates for the three model calls.
//!
//! Templates are plain text used verbatim as the system instruction;
//! braces inside them are never treated as placeholders.

use std::path::Path;

use tracing::info;

use crate::{KgbError, KgbResult};

pub const GENERATE_FILE: &str = "generate_knowledge_graph.txt";
pub const ROUTER_FILE: &str = "router_model.txt";
pub const ANSWER_FILE: &str = "answer_question_model.txt";

const BUILTIN_GENERATE: &str = include_str!("../../../prompts/generate_knowledge_graph.txt");
const BUILTIN_ROUTER: &str = include_str!("../../../prompts/router_model.txt");
const BUILTIN_ANSWER: &str = include_str!("../../../prompts/answer_question_model.txt");

/// The graph-generation, routing and question-answering instructions.
#[derive(Debug, Clone)]
pub struct PromptStore {
    generate: String,
    router: String,
    answer: String,
}

impl PromptStore {
    /// Templates compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            generate: BUILTIN_GENERATE.to_string(),
            router: BUILTIN_ROUTER.to_string(),
            answer: BUILTIN_ANSWER.to_string(),
        }
    }

    /// Read all three templates from `dir`.
    ///
    /// A missing or empty file is a configuration error.
    pub fn load(dir: &Path) -> KgbResult<Self> {
        let store = Self {
            generate: read_template(dir, GENERATE_FILE)?,
            router: read_template(dir, ROUTER_FILE)?,
            answer: read_template(dir, ANSWER_FILE)?,
        };
        info!(dir = %dir.display(), "Loaded prompt templates");
        Ok(store)
    }

    /// Use `dir` when given, the built-in templates otherwise.
    pub fn from_dir(dir: Option<&Path>) -> KgbResult<Self> {
        match dir {
            Some(dir) => Self::load(dir),
            None => Ok(Self::builtin()),
        }
    }

    pub fn generate(&self) -> &str {
        &self.generate
    }

    pub fn router(&self) -> &str {
        &self.router
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

fn read_template(dir: &Path, name: &str) -> KgbResult<String> {
    let path = dir.join(name);
    let text = std::fs::read_to_string(&path)
        .map_err(|e| KgbError::config(format!("Cannot read prompt {}: {}", path.display(), e)))?;
    if text.trim().is_empty() {
        return Err(KgbError::config(format!("Prompt {} is empty", path.display())));
    }
    Ok(text)
}

/// Human turn for the question-answering call.
pub fn answer_human_turn(context: &str, question: &str) -> String {
    format!("Context:\n{}\n\nQuestion:\n{}", context, question)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("kgb-prompts-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_builtin_templates_are_present() {
        let prompts = PromptStore::builtin();
        assert!(prompts.router().to_lowercase().contains("generate"));
        assert!(prompts.router().to_lowercase().contains("answer"));
        assert!(prompts.generate().contains("MERGE"));
        assert!(!prompts.answer().trim().is_empty());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = temp_dir("load");
        std::fs::write(dir.join(GENERATE_FILE), "gen {not a placeholder}").unwrap();
        std::fs::write(dir.join(ROUTER_FILE), "route").unwrap();
        std::fs::write(dir.join(ANSWER_FILE), "answer").unwrap();

        let prompts = PromptStore::load(&dir).unwrap();
        assert_eq!(prompts.generate(), "gen {not a placeholder}");
        assert_eq!(prompts.router(), "route");
        assert_eq!(prompts.answer(), "answer");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_template_is_config_error() {
        let dir = temp_dir("missing");
        std::fs::write(dir.join(ROUTER_FILE), "route").unwrap();

        let err = PromptStore::load(&dir).unwrap_err();
        assert!(matches!(err, KgbError::Config(_)));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_answer_human_turn() {
        assert_eq!(
            answer_human_turn("A -[R]-> B", "Who is A?"),
            "Context:\nA -[R]-> B\n\nQuestion:\nWho is A?"
        );
    }
}
