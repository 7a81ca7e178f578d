//! Outbound messaging transport

use crate::error::{Result, SheetcastError};
use crate::infrastructure::{Profile, TokenCache};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Vendor endpoint family root
pub const API_BASE: &str = "https://qyapi.weixin.qq.com/cgi-bin";

const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Wire tag of an outbound message body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Markdown,
}

impl MessageKind {
    pub fn tag(&self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Markdown => "markdown",
        }
    }
}

/// Seam for sending one rendered message to one recipient
pub trait MessageTransport {
    fn send_message(&self, recipient: &str, kind: MessageKind, body: &str) -> Result<()>;
}

/// Common fields of every vendor response; endpoint-specific fields ride
/// along as options
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    errcode: i64,
    #[serde(default)]
    errmsg: String,
    access_token: Option<String>,
    media_id: Option<String>,
}

impl ApiEnvelope {
    fn into_checked(self) -> Result<ApiEnvelope> {
        if self.errcode != 0 {
            return Err(SheetcastError::Api {
                code: self.errcode,
                message: self.errmsg,
            });
        }
        Ok(self)
    }
}

/// HTTP client for the corporate messaging API
pub struct WeComClient {
    agent_id: String,
    corp_id: String,
    corp_secret: String,
    token_cache: TokenCache,
    http: reqwest::blocking::Client,
}

impl WeComClient {
    /// Build a client from a validated profile and the token-cache location
    pub fn new(profile: &Profile, token_cache: TokenCache) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(WeComClient {
            agent_id: profile.agent_id.clone(),
            corp_id: profile.corp_id.clone(),
            corp_secret: profile.corp_secret.clone(),
            token_cache,
            http,
        })
    }

    /// Current access token, refreshed through the cache when expired
    pub fn access_token(&self) -> Result<String> {
        self.token_cache
            .token(Utc::now().timestamp(), || self.fetch_token())
    }

    fn fetch_token(&self) -> Result<String> {
        let url = format!(
            "{}/gettoken?corpid={}&corpsecret={}",
            API_BASE, self.corp_id, self.corp_secret
        );

        debug!("requesting access token");
        let envelope: ApiEnvelope = self.http.get(&url).send()?.json()?;
        let envelope = envelope.into_checked()?;

        envelope.access_token.ok_or_else(|| SheetcastError::Api {
            code: -1,
            message: "token issuance response carried no access_token".to_string(),
        })
    }

    /// JSON payload of a message/send call
    pub fn message_payload(
        agent_id: &str,
        recipient: &str,
        kind: MessageKind,
        body: &str,
    ) -> Value {
        let mut payload = serde_json::json!({
            "touser": recipient,
            "msgtype": kind.tag(),
            "agentid": agent_id,
        });
        payload[kind.tag()] = serde_json::json!({ "content": body });
        payload
    }

    /// Upload a file to the temporary media store, returning its media id
    pub fn upload_media(&self, file: &Path) -> Result<String> {
        let token = self.access_token()?;
        let url = format!("{}/media/upload?access_token={}&type=file", API_BASE, token);

        let form = reqwest::blocking::multipart::Form::new().file("file", file)?;

        let envelope: ApiEnvelope = self.http.post(&url).multipart(form).send()?.json()?;
        let envelope = envelope.into_checked()?;

        envelope.media_id.ok_or_else(|| SheetcastError::Api {
            code: -1,
            message: "media upload response carried no media_id".to_string(),
        })
    }

    /// Upload a file and send it as a file message
    pub fn send_file(&self, recipient: &str, file: &Path) -> Result<()> {
        let media_id = self.upload_media(file)?;
        let token = self.access_token()?;
        let url = format!("{}/message/send?access_token={}", API_BASE, token);

        let payload = serde_json::json!({
            "touser": recipient,
            "msgtype": "file",
            "agentid": self.agent_id,
            "file": { "media_id": media_id },
        });

        let envelope: ApiEnvelope = self.http.post(&url).json(&payload).send()?.json()?;
        envelope.into_checked()?;

        info!("file {} delivered to {}", file.display(), recipient);
        Ok(())
    }
}

impl MessageTransport for WeComClient {
    fn send_message(&self, recipient: &str, kind: MessageKind, body: &str) -> Result<()> {
        let token = self.access_token()?;
        let url = format!("{}/message/send?access_token={}", API_BASE, token);

        let payload = Self::message_payload(&self.agent_id, recipient, kind, body);

        let envelope: ApiEnvelope = self.http.post(&url).json(&payload).send()?.json()?;
        envelope.into_checked()?;

        info!("message delivered to {}", recipient);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_payload_text() {
        let payload =
            WeComClient::message_payload("1000002", "alice", MessageKind::Text, "hello");

        assert_eq!(payload["touser"], "alice");
        assert_eq!(payload["msgtype"], "text");
        assert_eq!(payload["agentid"], "1000002");
        assert_eq!(payload["text"]["content"], "hello");
        assert!(payload.get("markdown").is_none());
    }

    #[test]
    fn test_message_payload_markdown() {
        let payload = WeComClient::message_payload(
            "1000002",
            "bob",
            MessageKind::Markdown,
            "> **hi**",
        );

        assert_eq!(payload["msgtype"], "markdown");
        assert_eq!(payload["markdown"]["content"], "> **hi**");
        assert!(payload.get("text").is_none());
    }

    #[test]
    fn test_envelope_error_code_maps_to_api_error() {
        let envelope: ApiEnvelope =
            serde_json::from_str(r#"{"errcode": 40014, "errmsg": "invalid access_token"}"#)
                .unwrap();

        match envelope.into_checked().unwrap_err() {
            SheetcastError::Api { code, message } => {
                assert_eq!(code, 40014);
                assert_eq!(message, "invalid access_token");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_envelope_success_passes_through() {
        let envelope: ApiEnvelope = serde_json::from_str(
            r#"{"errcode": 0, "errmsg": "ok", "access_token": "opaque"}"#,
        )
        .unwrap();

        let checked = envelope.into_checked().unwrap();
        assert_eq!(checked.access_token.as_deref(), Some("opaque"));
    }

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let envelope: ApiEnvelope = serde_json::from_str(r#"{"media_id": "m1"}"#).unwrap();
        let checked = envelope.into_checked().unwrap();
        assert_eq!(checked.media_id.as_deref(), Some("m1"));
    }

    #[test]
    fn test_message_kind_tags() {
        assert_eq!(MessageKind::Text.tag(), "text");
        assert_eq!(MessageKind::Markdown.tag(), "markdown");
    }
}
