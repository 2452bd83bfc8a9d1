//! Prompt composition.
//!
//! Pure and deterministic: two calls with identical inputs yield
//! byte-identical prompts.

use serde::{Deserialize, Serialize};

use crate::request::AnalysisDepth;

/// Final instruction text handed to the analysis agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedPrompt {
    pub text: String,
}

impl ComposedPrompt {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn depth_instruction(depth: AnalysisDepth) -> &'static str {
    match depth {
        AnalysisDepth::Quick => {
            "Provide a concise response focusing on the most important aspects."
        }
        AnalysisDepth::Standard => "Provide a balanced analysis with moderate detail.",
        AnalysisDepth::Detailed => {
            "Provide an in-depth analysis with comprehensive details and nuanced observations."
        }
    }
}

fn web_instruction(web_research: bool) -> &'static str {
    if web_research {
        "Use web research to supplement your analysis with relevant external context."
    } else {
        "Focus only on video content without external research."
    }
}

/// Build the agent instruction from the user's selections.
///
/// Concatenates, in order: task framing, depth instruction, web-research
/// instruction, the literal query, and a closing instruction asking for a
/// structured, actionable answer.
pub fn compose(query: &str, depth: AnalysisDepth, web_research: bool) -> ComposedPrompt {
    let text = format!(
        "Analyze the uploaded video for content and context.\n\
         {depth}\n\
         {web}\n\
         \n\
         Respond to the following query using video insights:\n\
         {query}\n\
         \n\
         Provide a structured, user-friendly, and actionable response.",
        depth = depth_instruction(depth),
        web = web_instruction(web_research),
        query = query,
    );

    ComposedPrompt { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_is_deterministic() {
        for &depth in AnalysisDepth::ALL {
            for web in [true, false] {
                let a = compose("What is shown?", depth, web);
                let b = compose("What is shown?", depth, web);
                assert_eq!(a.text, b.text);
            }
        }
    }

    #[test]
    fn test_compose_contains_literal_query() {
        let query = "How does the speaker support their argument?";
        let prompt = compose(query, AnalysisDepth::Standard, true);
        assert!(prompt.text.contains(query));
    }

    #[test]
    fn test_quick_no_web_fragment_order() {
        let query = "List the main topics";
        let prompt = compose(query, AnalysisDepth::Quick, false);

        let concise = prompt.text.find("concise response").unwrap();
        let no_web = prompt
            .text
            .find("without external research")
            .unwrap();
        let literal = prompt.text.find(query).unwrap();

        assert!(concise < no_web);
        assert!(no_web < literal);
    }

    #[test]
    fn test_web_toggle_changes_instruction() {
        let with_web = compose("q", AnalysisDepth::Standard, true);
        let without = compose("q", AnalysisDepth::Standard, false);

        assert!(with_web.text.contains("web research"));
        assert!(without.text.contains("without external research"));
        assert_ne!(with_web.text, without.text);
    }

    #[test]
    fn test_closing_instruction_present() {
        let prompt = compose("q", AnalysisDepth::Detailed, true);
        assert!(prompt
            .text
            .ends_with("Provide a structured, user-friendly, and actionable response."));
    }
}
