//! Local prompt-quality heuristics.
//!
//! [`analyze`] scores a raw prompt against simple textual rules — length,
//! punctuation, vague-word and context-word lists — and produces a quality
//! label, a 0–100 score, and suggestions. Pure function, no network.

use serde::Serialize;

const VAGUE_WORDS: &[&str] = &["something", "anything", "stuff", "things", "it"];
const CONTEXT_WORDS: &[&str] = &["about", "regarding", "for", "in", "with", "using"];

/// Quality label derived from the score: excellent ≥80, good ≥50, else poor.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PromptQuality {
    Poor,
    Good,
    Excellent,
}

/// Result of [`analyze`].
#[derive(Serialize, Clone, Debug)]
pub struct PromptAnalysis {
    pub quality: PromptQuality,
    pub score: u32,
    pub suggestions: Vec<String>,
}

/// Whether any word of `prompt` (lowercased, stripped of surrounding
/// punctuation) equals one of `list`.
///
/// Word-level rather than raw substring matching: "it" must not fire on
/// "capital", nor "in" on "drink".
fn contains_word(prompt: &str, list: &[&str]) -> bool {
    prompt
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .any(|w| list.contains(&w.as_str()))
}

/// Score a prompt against the heuristic rules.
pub fn analyze(prompt: &str) -> PromptAnalysis {
    if prompt.trim().is_empty() {
        return PromptAnalysis {
            quality: PromptQuality::Poor,
            score: 0,
            suggestions: vec!["Start typing to get suggestions...".to_string()],
        };
    }

    let mut score: u32 = 0;
    let mut suggestions: Vec<String> = Vec::new();

    let word_count = prompt.split_whitespace().count();
    let has_context = contains_word(prompt, CONTEXT_WORDS);

    match word_count {
        0..3 => {
            score += 10;
            suggestions.push("Add more detail to your question".to_string());
        }
        3..8 => {
            score += 40;
            if !has_context {
                suggestions.push("Consider adding more context".to_string());
            }
        }
        _ => score += 70,
    }

    if prompt.contains('?') {
        score += 15;
    } else {
        suggestions.push("Try phrasing as a clear question".to_string());
    }

    if contains_word(prompt, VAGUE_WORDS) {
        suggestions.push("Be more specific - avoid vague terms".to_string());
    } else {
        score += 15;
    }

    if has_context {
        score += 10;
    }

    let score = score.min(100);
    let quality = if score >= 80 {
        PromptQuality::Excellent
    } else if score >= 50 {
        PromptQuality::Good
    } else {
        PromptQuality::Poor
    };

    if suggestions.is_empty() {
        suggestions.push("Your prompt looks good!".to_string());
    }

    PromptAnalysis {
        quality,
        score,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_scores_zero() {
        for prompt in ["", "   ", "\n\t "] {
            let result = analyze(prompt);
            assert_eq!(result.score, 0);
            assert_eq!(result.quality, PromptQuality::Poor);
            assert_eq!(
                result.suggestions,
                vec!["Start typing to get suggestions...".to_string()]
            );
        }
    }

    #[test]
    fn clear_question_without_context_word() {
        // 6 words (+40), has '?' (+15), no vague words (+15), no context word.
        let result = analyze("What is the capital of France?");
        assert_eq!(result.score, 70);
        assert_eq!(result.quality, PromptQuality::Good);
        assert_eq!(
            result.suggestions,
            vec!["Consider adding more context".to_string()]
        );
    }

    #[test]
    fn vague_statement_with_context_word() {
        // 4 words (+40), no '?', vague "something" (no +15), "about" (+10).
        let result = analyze("tell me about something");
        assert_eq!(result.score, 50);
        assert_eq!(result.quality, PromptQuality::Good);
        assert_eq!(
            result.suggestions,
            vec![
                "Try phrasing as a clear question".to_string(),
                "Be more specific - avoid vague terms".to_string(),
            ]
        );
    }

    #[test]
    fn short_prompt_suggests_detail() {
        let result = analyze("why?");
        // 1 word (+10), '?' (+15), no vague (+15).
        assert_eq!(result.score, 40);
        assert_eq!(result.quality, PromptQuality::Poor);
        assert!(
            result
                .suggestions
                .contains(&"Add more detail to your question".to_string())
        );
    }

    #[test]
    fn score_clamped_to_100() {
        // ≥8 words (+70), '?' (+15), no vague (+15), "using" (+10) = 110 → 100.
        let result = analyze(
            "How do I configure structured logging using the tracing crate in an axum handler?",
        );
        assert_eq!(result.score, 100);
        assert_eq!(result.quality, PromptQuality::Excellent);
        assert_eq!(result.suggestions, vec!["Your prompt looks good!".to_string()]);
    }

    #[test]
    fn vague_matching_is_word_level() {
        // "capital" contains the substring "it" but must not count as vague.
        let with_it_substring = analyze("What is the capital of France?");
        assert_eq!(with_it_substring.score, 70);

        let with_it_word = analyze("explain how it works today");
        assert!(
            with_it_word
                .suggestions
                .contains(&"Be more specific - avoid vague terms".to_string())
        );
    }

    #[test]
    fn context_word_suppresses_context_suggestion() {
        // 5 words with "regarding": the 3–7 word bucket fires but the context
        // suggestion is omitted.
        let result = analyze("a question regarding rust lifetimes");
        assert!(
            !result
                .suggestions
                .contains(&"Consider adding more context".to_string())
        );
        // +40 +15 (no vague... "question" is fine) +10 context, no '?'.
        assert_eq!(result.score, 65);
    }

    #[test]
    fn quality_thresholds() {
        assert_eq!(analyze("hi").quality, PromptQuality::Poor);
        assert_eq!(
            analyze("What is the capital of France?").quality,
            PromptQuality::Good
        );
        assert_eq!(
            analyze("Could you explain in detail how ownership works in Rust?").quality,
            PromptQuality::Excellent
        );
    }
}
