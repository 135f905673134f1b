#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Full instruction list, sent to the primary model.
    Structured,
    /// One-line instruction, sent to the alternate model.
    Simple,
}

pub struct TextTransformerPrompt;

impl TextTransformerPrompt {
    pub fn get_prompt(style: PromptStyle, text: &str) -> String {
        match style {
            PromptStyle::Structured => Self::structured(text),
            PromptStyle::Simple => Self::simple(text),
        }
    }

    fn structured(text: &str) -> String {
        format!(
            r#"Transform this casual text into professional workplace language:
'{}'

Make it:
1. Professional and workplace-appropriate
2. Clear and concise
3. Diplomatic and respectful
4. Solution-oriented
5. Constructive rather than negative

Provide only the transformed text, without any additional explanation or quotes."#,
            text
        )
    }

    fn simple(text: &str) -> String {
        format!(
            "Transform this text into professional language: '{}'. Provide only the transformed text without quotes or explanations.",
            text
        )
    }
}
