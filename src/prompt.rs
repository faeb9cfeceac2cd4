//! Prompt construction for strategy generation

use crate::sanitize::CaseDescription;

/// Instruction placed in front of every case description
pub const PROMPT_PREFIX: &str = "Suggest a comprehensive legal strategy for the following case: ";

/// System instruction sent alongside the prompt to remote models
pub const SYSTEM_PROMPT: &str = "You are a legal strategy advisor AI assistant. \
Provide comprehensive, well-structured legal analysis and strategy recommendations. \
Always include relevant legal precedents, potential risks, and actionable steps. \
Format your response clearly with sections and bullet points where appropriate. \
Keep responses professional and within the specified token limits.";

/// Wrap an already-sanitized case description in the instruction template
pub fn build_prompt(case: &CaseDescription) -> String {
    format!("{}{}", PROMPT_PREFIX, case.as_str())
}
