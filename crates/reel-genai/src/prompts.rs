//! Prompt construction for script generation.

/// Build the prompt for turning an idea into a voiceover script.
pub fn build_script_prompt(idea: &str) -> String {
    format!(
        r#"You are a creative director writing voiceover for very short films.

Write a punchy narration script for an 8-second video about:
{idea}

Rules:
- Two to three short sentences, 25 words at most in total.
- Present tense, vivid and concrete.
- Return ONLY the narration text, no headings, no quotes, no markdown."#
    )
}
