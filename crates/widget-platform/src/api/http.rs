//! Chat backend adapter over browser `fetch()` via gloo-net.
//!
//! `GET /greet` and `POST /chat` both answer `{session_id, answer}`.
//! Non-2xx statuses and undecodable bodies come back as errors; the
//! controller decides what the user sees.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use widget_core::ports::ChatApiPort;
use widget_types::{
    Result, WidgetError,
    config::WidgetConfig,
    message::{ChatReply, ChatRequest},
};

pub struct HttpChatApi {
    greet_url: String,
    chat_url: String,
}

impl HttpChatApi {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            greet_url: config.greet_url(),
            chat_url: config.chat_url(),
        }
    }
}

#[async_trait(?Send)]
impl ChatApiPort for HttpChatApi {
    async fn greet(&self) -> Result<ChatReply> {
        let response = Request::get(&self.greet_url)
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;

        read_reply(response).await
    }

    async fn chat(&self, req: ChatRequest) -> Result<ChatReply> {
        let response = Request::post(&self.chat_url)
            .header("Content-Type", "application/json")
            .json(&req)
            .map_err(|e| WidgetError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;

        read_reply(response).await
    }
}

async fn read_reply(response: Response) -> Result<ChatReply> {
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(WidgetError::Http { status, body });
    }

    response
        .json::<ChatReply>()
        .await
        .map_err(|e| WidgetError::Serialization(e.to_string()))
}
