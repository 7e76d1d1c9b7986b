use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};

use super::{MoveSuggester, SuggestionRequest, SuggestionResponse};
use crate::HybridError;

/// Posts the request as JSON to an endpoint that answers with
/// `{move, error, isLimitReached}`.
pub struct HttpSuggester {
    client: Client,
    endpoint: String,
}

impl HttpSuggester {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl MoveSuggester for HttpSuggester {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, HybridError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| HybridError::ProviderError(e.to_string()))?;

        let status = response.status();
        debug!("suggester answered {}", status);

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(HybridError::RateLimited);
        }

        let body = response.json::<SuggestionResponse>().await;

        if status.is_success() {
            return body.map_err(|e| HybridError::ProviderError(format!("malformed response: {}", e)));
        }

        match body {
            Ok(body) if body.is_limit_reached => Err(HybridError::RateLimited),
            Ok(SuggestionResponse {
                error: Some(error), ..
            }) => Err(HybridError::ProviderError(format!("{}: {}", status, error))),
            _ => Err(HybridError::ProviderError(status.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::ProviderConfig;

    /// Serves one canned HTTP response and returns the endpoint URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let reply = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/api/custom-ai-move", addr)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            data.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&data).to_string();
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
                if data.len() >= header_end + 4 + content_length {
                    return;
                }
            }
        }
    }

    fn request() -> SuggestionRequest {
        SuggestionRequest {
            fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".into(),
            move_history: vec![],
            legal_moves: vec!["e4".into(), "d4".into()],
            config: ProviderConfig {
                api_key: "k".into(),
                model_name: "m".into(),
                provider_name: "p".into(),
            },
        }
    }

    #[tokio::test]
    async fn test_success_body() {
        let endpoint = serve_once("200 OK", r#"{"move":"e4"}"#).await;
        let response = HttpSuggester::new(endpoint).suggest(&request()).await.unwrap();
        assert_eq!(response.mv.as_deref(), Some("e4"));
    }

    #[tokio::test]
    async fn test_too_many_requests() {
        let endpoint = serve_once("429 Too Many Requests", "{}").await;
        let result = HttpSuggester::new(endpoint).suggest(&request()).await;
        assert_eq!(result, Err(HybridError::RateLimited));
    }

    #[tokio::test]
    async fn test_server_error() {
        let endpoint = serve_once(
            "500 Internal Server Error",
            r#"{"error":"Failed to generate move"}"#,
        )
        .await;
        let result = HttpSuggester::new(endpoint).suggest(&request()).await;
        assert!(matches!(result, Err(HybridError::ProviderError(msg)) if msg.contains("Failed to generate move")));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = HttpSuggester::new(format!("http://{}/", addr))
            .suggest(&request())
            .await;
        assert!(matches!(result, Err(HybridError::ProviderError(_))));
    }
}
