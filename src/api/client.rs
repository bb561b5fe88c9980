use super::{reply_from_body, Availability, ChatError, ChatPayload, CHAT_PATH, HEALTH_PATH};

/// HTTP client for the site backend. Cheap to clone; spawned tasks take
/// their own copy.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatClient {
    /// No timeout is configured: a hung request stays in flight until the
    /// transport resolves it, and the widget keeps its busy state until
    /// then.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Asks the backend whether chat is worth offering. Never fails:
    /// every transport or parse problem falls back to offering the chat.
    pub async fn probe(&self) -> Availability {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);

        let body = match self.http.get(&url).send().await {
            Ok(response) => match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::warn!("Health probe body unreadable: {}. Offering chat anyway.", err);
                    return Availability::Available;
                }
            },
            Err(err) => {
                tracing::warn!("Health probe failed: {}. Offering chat anyway.", err);
                return Availability::Available;
            }
        };

        let decision = Availability::from_health_body(&body);
        tracing::info!("Health probe resolved: {:?}", decision);
        decision
    }

    /// Sends one user message and normalizes whatever comes back.
    pub async fn send_message(&self, message: &str) -> Result<String, ChatError> {
        let url = format!("{}{}", self.base_url, CHAT_PATH);

        let response = self
            .http
            .post(&url)
            .json(&ChatPayload { message })
            .send()
            .await?;

        // Error statuses still carry structured envelopes; the body, not
        // the status, decides the outcome.
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Chat endpoint answered {} with {} bytes", status, body.len());

        reply_from_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = ChatClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");

        let client = ChatClient::new("http://127.0.0.1:5000");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }
}
