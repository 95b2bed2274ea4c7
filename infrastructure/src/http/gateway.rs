//! HTTP Churn Gateway implementation

use crate::http::error::{HttpGatewayError, Result};
use crate::http::protocol::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use churn_application::{ChurnGateway, GatewayError, GatewayReply};
use churn_domain::TurnRequest;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, info};

/// Gateway that POSTs each turn as JSON to the prediction backend
pub struct HttpChurnGateway {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpChurnGateway {
    /// Create a gateway for `endpoint` with a client-side request timeout
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| HttpGatewayError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("churn-assistant/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!("HttpChurnGateway initialized for {}", endpoint);

        Ok(Self { client, endpoint })
    }

    /// Create a gateway with an existing client (for testing)
    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one turn and interpret the body.
    ///
    /// The HTTP status is logged but not trusted on its own: the backend
    /// reports failures in the body, and a non-JSON body is an error no
    /// matter what the status says.
    pub async fn chat(&self, request: &TurnRequest) -> Result<GatewayReply> {
        let body = ChatRequest::from(request);
        debug!("POST {} ({} chars)", self.endpoint, request.message.len());

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        debug!("Backend replied with HTTP {} ({} bytes)", status, raw.len());

        ChatResponse::parse(&raw)?.into_reply()
    }
}

#[async_trait]
impl ChurnGateway for HttpChurnGateway {
    async fn send_turn(&self, request: &TurnRequest) -> std::result::Result<GatewayReply, GatewayError> {
        self.chat(request).await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one request with the given status line and body.
    /// The join handle yields the request body that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });

        let url = Url::parse(&format!("http://{}/chat", addr)).unwrap();
        (url, handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    return String::from_utf8_lossy(&buf[header_end + 4..]).to_string();
                }
            }
        }
        String::new()
    }

    fn gateway(url: Url) -> HttpChurnGateway {
        HttpChurnGateway::with_client(reqwest::Client::new(), url)
    }

    #[tokio::test]
    async fn test_successful_exchange() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"status":"success","response":"🎯 **Prediction:** Churn","session_id":"abc123"}"#,
        )
        .await;

        let reply = gateway(url)
            .send_turn(&TurnRequest::new("tenure: 12", None))
            .await
            .unwrap();

        assert_eq!(reply.response, "🎯 **Prediction:** Churn");
        assert_eq!(reply.session_id.as_deref(), Some("abc123"));

        let sent: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(sent["message"], "tenure: 12");
        assert!(sent["session_id"].is_null());
    }

    #[tokio::test]
    async fn test_session_id_is_sent() {
        let (url, server) = serve_once("200 OK", r#"{"status":"success","response":"ok"}"#).await;

        gateway(url)
            .send_turn(&TurnRequest::new("hi", Some("abc123".to_string())))
            .await
            .unwrap();

        let sent: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(sent["session_id"], "abc123");
    }

    #[tokio::test]
    async fn test_application_error_in_error_status() {
        let (url, _server) = serve_once(
            "400 Bad Request",
            r#"{"status":"error","message":"No customer details found"}"#,
        )
        .await;

        let err = gateway(url)
            .send_turn(&TurnRequest::new("hello", None))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GatewayError::Application("No customer details found".to_string())
        );
    }

    #[tokio::test]
    async fn test_non_json_body_is_invalid_response() {
        let (url, _server) = serve_once("502 Bad Gateway", "upstream unavailable").await;

        let err = gateway(url)
            .send_turn(&TurnRequest::new("hello", None))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{}/chat", addr)).unwrap();
        let err = gateway(url)
            .send_turn(&TurnRequest::new("hello", None))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Connection(_)));
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = HttpChurnGateway::new("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(HttpGatewayError::InvalidEndpoint(_))));
    }
}
