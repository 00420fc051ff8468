use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};
use univ3_position_core::PositionSnapshot;

use crate::{
    parse_positions_response, positions_query_body, validate_token_id, PositionError, Result,
    FETCH_RETRIES, SUBGRAPH_URL,
};

/// Base of the exponential backoff. Retry `n` waits `INITIAL_RETRY_DELAY * 2^n`.
pub const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Timeout applied to a single subgraph request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A source of position snapshots.
#[async_trait]
pub trait PositionSnapshotFetcher: Send + Sync {
    async fn fetch_position_snapshot(&self, token_id: &str) -> Result<PositionSnapshot>;
}

enum AttemptError {
    Retryable(PositionError),
    Fatal(PositionError),
}

pub(crate) fn retry_delay(initial_retry_delay: Duration, retry: u32) -> Duration {
    initial_retry_delay.saturating_mul(2u32.saturating_pow(retry))
}

/// Fetches positions from a Uniswap v3 subgraph over GraphQL.
#[derive(Debug, Clone)]
pub struct SubgraphClient {
    http: reqwest::Client,
    url: String,
    retries: u32,
    initial_retry_delay: Duration,
}

impl SubgraphClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            url: url.into(),
            retries: crate::DEFAULT_FETCH_RETRIES,
            initial_retry_delay: INITIAL_RETRY_DELAY,
        })
    }

    /// Build a client from the currently selected subgraph url and retry count.
    pub fn from_config() -> Result<Self> {
        let url = SUBGRAPH_URL
            .try_lock()
            .map_err(|e| PositionError::ConfigError(e.to_string()))?
            .to_string();
        let retries = *FETCH_RETRIES
            .try_lock()
            .map_err(|e| PositionError::ConfigError(e.to_string()))?;
        Ok(Self::new(url)?.with_retries(retries))
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_initial_retry_delay(mut self, initial_retry_delay: Duration) -> Self {
        self.initial_retry_delay = initial_retry_delay;
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    async fn post_once(&self, body: &Value) -> std::result::Result<Value, AttemptError> {
        let response = self
            .http
            .post(&self.url)
            .json(body)
            .send()
            .await
            .map_err(|e| AttemptError::Retryable(e.into()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(AttemptError::Retryable(PositionError::DataFetch(format!(
                "subgraph responded with {status}"
            ))));
        }
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(AttemptError::Fatal(PositionError::DataFetch(format!(
                "subgraph responded with {status}: {text}"
            ))));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AttemptError::Fatal(e.into()))
    }

    /// POST a GraphQL body, retrying transport failures and 5xx responses with
    /// exponential backoff.
    pub async fn post_with_retry(&self, body: &Value) -> Result<Value> {
        let mut retries = 0;
        loop {
            debug!(url = %self.url, attempt = retries + 1, "querying subgraph");
            match self.post_once(body).await {
                Ok(value) => return Ok(value),
                Err(AttemptError::Fatal(error)) => return Err(error),
                Err(AttemptError::Retryable(error)) => {
                    if retries >= self.retries {
                        return Err(error);
                    }
                    retries += 1;
                    let delay = retry_delay(self.initial_retry_delay, retries);
                    warn!(
                        %error,
                        retry = retries,
                        max_retries = self.retries,
                        delay_ms = delay.as_millis() as u64,
                        "subgraph request failed, retrying"
                    );
                    sleep(delay).await;
                }
            }
        }
    }
}

#[async_trait]
impl PositionSnapshotFetcher for SubgraphClient {
    async fn fetch_position_snapshot(&self, token_id: &str) -> Result<PositionSnapshot> {
        let token_id = validate_token_id(token_id)?;
        let body = positions_query_body(token_id)?;
        let response = self.post_with_retry(&body).await?;
        let snapshot = parse_positions_response(token_id, response)?;
        debug!(
            token_id,
            pair = %format!("{}/{}", snapshot.token_0.symbol, snapshot.token_1.symbol),
            tick_lower = snapshot.tick_lower.tick_index,
            tick_upper = snapshot.tick_upper.tick_index,
            tick_current = snapshot.pool.tick_current_index,
            "fetched position snapshot"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;
    use crate::{
        reset_configuration, set_fetch_retries, set_subgraph_url, DEFAULT_FETCH_RETRIES,
        DEFAULT_SUBGRAPH_URL,
    };
    use rstest::rstest;
    use serde_json::json;
    use serial_test::serial;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::{TcpListener, TcpStream},
    };

    const EMPTY_POSITIONS: &str = r#"{"data":{"positions":[]}}"#;

    async fn read_request(stream: &mut TcpStream) {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = stream.read(&mut chunk).await.unwrap_or(0);
            if read == 0 {
                return;
            }
            buffer.extend_from_slice(&chunk[..read]);
            if let Some(end) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buffer[..end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buffer.len() >= end + 4 + content_length {
                    return;
                }
            }
        }
    }

    /// Serve `responses` in order, one per connection, repeating the last one. Returns
    /// the server url and the number of requests received.
    async fn serve(responses: Vec<(u16, &'static str)>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(AtomicUsize::new(0));
        let counter = requests.clone();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                read_request(&mut stream).await;
                let index = counter.fetch_add(1, Ordering::SeqCst);
                let (status, body) = responses[index.min(responses.len() - 1)];
                let response = format!(
                    "HTTP/1.1 {status} Status\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        (url, requests)
    }

    fn test_client(url: &str, retries: u32) -> SubgraphClient {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        SubgraphClient::new(url)
            .unwrap()
            .with_http_client(http)
            .with_retries(retries)
            .with_initial_retry_delay(Duration::from_millis(1))
    }

    #[rstest]
    #[case(1, 1000)]
    #[case(2, 2000)]
    #[case(3, 4000)]
    fn test_retry_delay(#[case] retry: u32, #[case] expected_ms: u64) {
        assert_eq!(
            retry_delay(INITIAL_RETRY_DELAY, retry),
            Duration::from_millis(expected_ms)
        );
    }

    #[test]
    fn test_retry_delay_saturates() {
        assert_eq!(retry_delay(Duration::MAX, 1), Duration::MAX);
        assert_eq!(
            retry_delay(INITIAL_RETRY_DELAY, 200),
            INITIAL_RETRY_DELAY * u32::MAX
        );
    }

    #[tokio::test]
    async fn test_server_error_is_retried() {
        let (url, requests) = serve(vec![(503, "unavailable"), (200, EMPTY_POSITIONS)]).await;
        let client = test_client(&url, 2);
        let result = client.fetch_position_snapshot("7").await;
        assert!(matches!(result, Err(PositionError::NotFound(id)) if id == "7"));
        assert_eq!(requests.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_retries_exhausted() {
        let (url, requests) = serve(vec![(502, "bad gateway")]).await;
        let client = test_client(&url, 2);
        let result = client.post_with_retry(&json!({})).await;
        assert!(
            matches!(&result, Err(PositionError::DataFetch(message)) if message.contains("502")),
            "{result:?}"
        );
        assert_eq!(requests.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_client_error_is_fatal() {
        let (url, requests) = serve(vec![(400, "bad query"), (200, EMPTY_POSITIONS)]).await;
        let client = test_client(&url, 3);
        let result = client.post_with_retry(&json!({})).await;
        assert!(
            matches!(&result, Err(PositionError::DataFetch(message))
                if message.contains("400") && message.contains("bad query")),
            "{result:?}"
        );
        assert_eq!(requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_fatal() {
        let (url, requests) = serve(vec![(200, "not json"), (200, EMPTY_POSITIONS)]).await;
        let client = test_client(&url, 3);
        let result = client.post_with_retry(&json!({})).await;
        assert!(matches!(result, Err(PositionError::Http(_))), "{result:?}");
        assert_eq!(requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transport_error_is_retried() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let client = test_client(&url, 2);
        let result = client.post_with_retry(&json!({})).await;
        assert!(
            matches!(&result, Err(PositionError::Http(e)) if e.is_connect()),
            "{result:?}"
        );
    }

    #[test]
    fn test_client_builder() {
        let client = SubgraphClient::new("http://localhost:8000")
            .unwrap()
            .with_retries(5);
        assert_eq!(client.url(), "http://localhost:8000");
        assert_eq!(client.retries(), 5);
    }

    #[test]
    #[serial]
    fn test_client_from_config() {
        let client = SubgraphClient::from_config().unwrap();
        assert_eq!(client.url(), DEFAULT_SUBGRAPH_URL);
        assert_eq!(client.retries(), DEFAULT_FETCH_RETRIES);

        set_subgraph_url("http://localhost:8000/subgraphs/name/uniswap").unwrap();
        set_fetch_retries(1).unwrap();
        let client = SubgraphClient::from_config().unwrap();
        assert_eq!(client.url(), "http://localhost:8000/subgraphs/name/uniswap");
        assert_eq!(client.retries(), 1);
        reset_configuration().unwrap();
    }

    #[tokio::test]
    async fn test_invalid_token_id_skips_request() {
        // nothing listens on the discard port, so reaching the network would fail differently
        let client = SubgraphClient::new("http://127.0.0.1:9").unwrap().with_retries(0);
        let result = client.fetch_position_snapshot("not-a-number").await;
        assert!(matches!(result, Err(PositionError::InvalidTokenId(_))));
    }
}
