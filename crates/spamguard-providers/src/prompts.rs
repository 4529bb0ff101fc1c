//! Prompt and tool definitions for the LLM gateway

use serde_json::{json, Value};

/// Name of the function the gateway must call when classifying
pub const CLASSIFY_TOOL_NAME: &str = "classify_spam";

/// System prompt for tool-forced classification
pub const CLASSIFY_SYSTEM_PROMPT: &str = r#"You are a spam detection expert trained on real-world spam patterns. Classify the text as spam or safe and report your confidence as a number from 0 to 100.

Indicators that point to spam:
- Urgent/pressure language (WIN, FREE, URGENT, LIMITED)
- Financial solicitations or prize claims
- Premium rate numbers or suspicious links
- Grammar issues combined with marketing
- Generic greetings instead of personalization
- Missing sender legitimacy cues

Examples:
"WINNER!! You have won a guaranteed $900 prize. Call 09061701461 to claim now!" -> spam, confidence 99
"Are we still on for lunch tomorrow at noon?" -> safe, confidence 95
"URGENT: your account will be suspended unless you verify at the link below" -> spam, confidence 97

Always answer through the classify_spam tool."#;

/// System prompt for free-text explanations
pub const EXPLAIN_SYSTEM_PROMPT: &str = r#"You are a spam detection expert trained on real-world spam patterns. Provide clear, specific explanations citing actual indicators found in the text.

Focus on identifying:
- Urgent/pressure language (WIN, FREE, URGENT, LIMITED)
- Financial solicitations or prize claims
- Premium rate numbers or suspicious links
- Grammar issues combined with marketing
- Personalization level (generic vs specific)
- Sender legitimacy cues

Keep explanations under 100 words. Be specific about WHICH indicators you found, not just general patterns."#;

/// Build the user message for an explain request
pub fn explain_user_prompt(text: &str) -> String {
    format!(
        "Explain why this text was classified as spam or safe. Be specific about the indicators found:\n\n{}",
        text
    )
}

/// Tool schema the gateway must satisfy when classifying
pub fn classify_tool() -> Value {
    json!({
        "type": "function",
        "function": {
            "name": CLASSIFY_TOOL_NAME,
            "description": "Report the spam verdict for the analyzed text",
            "parameters": {
                "type": "object",
                "properties": {
                    "classification": {
                        "type": "string",
                        "enum": ["spam", "safe"],
                        "description": "Whether the text is spam or safe"
                    },
                    "confidence": {
                        "type": "number",
                        "minimum": 0,
                        "maximum": 100,
                        "description": "Confidence in the verdict from 0 to 100"
                    }
                },
                "required": ["classification", "confidence"],
                "additionalProperties": false
            }
        }
    })
}

/// Tool choice forcing the gateway to call `classify_spam`
pub fn classify_tool_choice() -> Value {
    json!({
        "type": "function",
        "function": { "name": CLASSIFY_TOOL_NAME }
    })
}
