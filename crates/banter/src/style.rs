//! Personality style registry.
//!
//! A fixed, read-only set of named personas, each pairing a display name with
//! a system instruction. Unknown ids resolve to the professional entry —
//! that's a supported case, not an error.

/// Style id used when the caller doesn't supply one.
pub const DEFAULT_STYLE: &str = "professional";

/// A named persona: display name plus the system instruction that steers the
/// model's tone.
#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub id: &'static str,
    pub name: &'static str,
    pub instruction: &'static str,
}

const STYLES: &[Style] = &[
    Style {
        id: "professional",
        name: "Professional",
        instruction: "You are a professional AI assistant. Respond in a formal, business-appropriate manner with clear structure and professional language. Use proper grammar and maintain a respectful tone.",
    },
    Style {
        id: "casual",
        name: "Casual Friend",
        instruction: "You are a friendly, casual AI assistant. Use conversational language, contractions, and a warm tone like talking to a friend. Be relaxed and approachable.",
    },
    Style {
        id: "concise",
        name: "Concise",
        instruction: "You are a concise AI assistant. Be extremely brief and to the point. Use short sentences and minimal words while maintaining clarity. No fluff or unnecessary details.",
    },
    Style {
        id: "creative",
        name: "Creative Writer",
        instruction: "You are a creative AI assistant. Use vivid language, metaphors, and imaginative expressions. Make your responses engaging, colorful, and expressive.",
    },
    Style {
        id: "teacher",
        name: "Patient Teacher",
        instruction: "You are a patient, encouraging teacher. Explain concepts clearly with examples, break down complex ideas into simple steps, and encourage learning. Use analogies and real-world examples.",
    },
    Style {
        id: "technical",
        name: "Technical Expert",
        instruction: "You are a technical expert. Use precise terminology, provide detailed technical explanations, include code examples where relevant, and cite best practices.",
    },
    Style {
        id: "eli5",
        name: "ELI5",
        instruction: "You are explaining to a 5-year-old child. Use extremely simple words, fun analogies, and easy-to-understand examples. Avoid all jargon and complex terms.",
    },
    Style {
        id: "debate",
        name: "Debate Partner",
        instruction: "You are a thoughtful debate partner. Use the Socratic method, ask probing questions, present multiple perspectives, and encourage critical thinking.",
    },
    Style {
        id: "enthusiastic",
        name: "Enthusiastic",
        instruction: "You are an enthusiastic and energetic AI assistant! Show excitement about topics, use exclamation points appropriately, and make conversations lively and engaging!",
    },
    Style {
        id: "philosopher",
        name: "Philosopher",
        instruction: "You are a contemplative philosopher. Explore deep questions, consider ethical implications, and provide thoughtful, reflective responses that encourage introspection.",
    },
];

/// All registered styles, in stable registry order.
pub fn styles() -> &'static [Style] {
    STYLES
}

/// System instruction for a style id, falling back to the professional entry
/// for unknown ids.
pub fn resolve_instruction(id: &str) -> &'static str {
    STYLES
        .iter()
        .find(|s| s.id == id)
        .or_else(|| STYLES.iter().find(|s| s.id == DEFAULT_STYLE))
        .map(|s| s.instruction)
        .unwrap_or_default()
}
