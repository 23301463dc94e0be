use async_trait::async_trait;
use frontdesk_core::{MessageExtractor, ParsedMessage, RECEPTIONIST_SYSTEM_PROMPT};
use reqwest::Client;
use serde_json::json;
use tracing::info;

/// Name of the forced function call carrying the extraction schema.
const EXTRACTION_FUNCTION: &str = "parse_patient_message";

pub struct OpenAiExtractor {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiExtractor {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        info!("Creating OpenAiExtractor");
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
        }
    }

    /// Point the extractor at an OpenAI-compatible endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Chat-completion request with the receptionist persona and the fixed
    /// extraction schema as a forced tool call.
    fn build_request(&self, message: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": RECEPTIONIST_SYSTEM_PROMPT },
                { "role": "user", "content": message },
            ],
            "tools": [{
                "type": "function",
                "function": {
                    "name": EXTRACTION_FUNCTION,
                    "description": "Extracts structured info from a patient's message",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "intent": {
                                "type": "string",
                                "enum": ["appointment_request", "faq", "message_for_doctor"],
                                "description": "Type of the inquiry"
                            },
                            "name": {
                                "type": "string",
                                "description": "Full name of the patient"
                            },
                            "phone": {
                                "type": "string",
                                "description": "Phone number of the patient"
                            },
                            "doctor": {
                                "type": "string",
                                "description": "Doctor requested, if mentioned"
                            },
                            "preferred_time": {
                                "type": "string",
                                "description": "Preferred time and day of appointment"
                            },
                            "reason": {
                                "type": "string",
                                "description": "Reason for the appointment or message"
                            }
                        },
                        "required": ["intent", "name", "phone"]
                    }
                }
            }],
            "tool_choice": {
                "type": "function",
                "function": { "name": EXTRACTION_FUNCTION }
            },
        })
    }

    /// Pull the structured payload out of a chat-completion response. Any
    /// shape without the forced tool call's arguments is a protocol
    /// violation.
    fn parse_response(response: &serde_json::Value) -> anyhow::Result<ParsedMessage> {
        let arguments = response["choices"][0]["message"]["tool_calls"][0]["function"]
            ["arguments"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing tool call arguments"))?;

        Ok(serde_json::from_str(arguments)?)
    }
}

#[async_trait]
impl MessageExtractor for OpenAiExtractor {
    async fn extract(&self, message: &str) -> anyhow::Result<ParsedMessage> {
        let request = self.build_request(message);

        info!("Sending extraction request: model={}", self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let parsed = Self::parse_response(&response)?;
        info!("Extraction complete: intent={:?}", parsed.intent);
        Ok(parsed)
    }
}
