//! YouTube oEmbed 元数据查询

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::title::split_title;
use super::url::{extract_video_id, watch_url};
use crate::config::ProviderConfig;
use crate::traits::{MetadataProvider, VideoMetadata};

pub const UNKNOWN_SONG: &str = "Unknown Song";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_TITLE: &str = "Unknown Title";

pub struct OEmbedClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author_name: Option<String>,
}

impl OEmbedClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        tracing::info!(
            "Created OEmbedClient: endpoint={}, timeout={:?}",
            config.endpoint,
            config.timeout
        );

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// 单次请求，不重试
    async fn fetch(&self, video_id: &str) -> Result<OEmbedResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("url", watch_url(video_id).as_str()), ("format", "json")])
            .send()
            .await
            .context("Failed to send oEmbed request")?;

        if !response.status().is_success() {
            anyhow::bail!("oEmbed API error ({})", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse oEmbed response")
    }
}

/// 查询失败时的占位结果
pub fn fallback_metadata(video_id: &str) -> VideoMetadata {
    VideoMetadata {
        title: UNKNOWN_SONG.to_string(),
        author: UNKNOWN_ARTIST.to_string(),
        video_id: video_id.to_string(),
    }
}

#[async_trait]
impl MetadataProvider for OEmbedClient {
    async fn resolve_metadata(&self, url: &str) -> Option<VideoMetadata> {
        let video_id = extract_video_id(url)?;

        let data = match self.fetch(&video_id).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Error fetching metadata for {}: {:#}", video_id, e);
                return Some(fallback_metadata(&video_id));
            }
        };

        let raw_title = data
            .title
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
        let raw_author = data
            .author_name
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());
        let (title, author) = split_title(&raw_title, &raw_author);

        Some(VideoMetadata {
            title,
            author,
            video_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// 启动只应答一次的本地 HTTP 服务，返回 endpoint 与收到的请求行
    async fn serve_once(status: &str, body: &str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request).to_string();
            let first_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(first_line);

            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        (format!("http://{}/oembed", addr), rx)
    }

    fn client(endpoint: String) -> OEmbedClient {
        OEmbedClient::new(&ProviderConfig {
            endpoint,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_unrecognized_url_returns_none() {
        let client = client("http://127.0.0.1:9/oembed".to_string());
        assert_eq!(client.resolve_metadata("https://example.com").await, None);
    }

    #[tokio::test]
    async fn test_network_failure_returns_fallback() {
        // 端口 9 没有服务，连接被拒绝
        let client = client("http://127.0.0.1:9/oembed".to_string());
        let metadata = client
            .resolve_metadata("https://youtu.be/abc123")
            .await
            .unwrap();

        assert_eq!(
            metadata,
            VideoMetadata {
                title: "Unknown Song".to_string(),
                author: "Unknown Artist".to_string(),
                video_id: "abc123".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_returns_fallback() {
        let (endpoint, _rx) = serve_once("404 Not Found", "{}").await;
        let metadata = client(endpoint)
            .resolve_metadata("https://www.youtube.com/watch?v=abc123")
            .await
            .unwrap();
        assert_eq!(metadata, fallback_metadata("abc123"));
    }

    #[tokio::test]
    async fn test_malformed_body_returns_fallback() {
        let (endpoint, _rx) = serve_once("200 OK", "not json").await;
        let metadata = client(endpoint)
            .resolve_metadata("https://youtu.be/abc123")
            .await
            .unwrap();
        assert_eq!(metadata, fallback_metadata("abc123"));
    }

    #[tokio::test]
    async fn test_success_splits_title() {
        let body = r#"{"title":"Bon Iver - Holocene","author_name":"Bon Iver","type":"video"}"#;
        let (endpoint, rx) = serve_once("200 OK", body).await;

        let metadata = client(endpoint)
            .resolve_metadata("https://www.youtube.com/embed/TWcyIpul8OE")
            .await
            .unwrap();

        assert_eq!(metadata.title, "Holocene");
        assert_eq!(metadata.author, "Bon Iver");
        assert_eq!(metadata.video_id, "TWcyIpul8OE");

        let request_line = rx.await.unwrap();
        assert!(request_line.starts_with("GET /oembed?"));
        assert!(request_line.contains("watch%3Fv%3DTWcyIpul8OE"));
        assert!(request_line.contains("format=json"));
    }

    #[tokio::test]
    async fn test_success_without_pattern_uses_author() {
        let body = r#"{"title":"Lofi beats to study to","author_name":"Lofi Girl"}"#;
        let (endpoint, _rx) = serve_once("200 OK", body).await;

        let metadata = client(endpoint)
            .resolve_metadata("https://youtu.be/jfKfPfyJRdk")
            .await
            .unwrap();

        assert_eq!(metadata.title, "Lofi beats to study to");
        assert_eq!(metadata.author, "Lofi Girl");
    }

    #[tokio::test]
    async fn test_blank_fields_use_placeholders() {
        let body = r#"{"title":"","author_name":"  "}"#;
        let (endpoint, _rx) = serve_once("200 OK", body).await;

        let metadata = client(endpoint)
            .resolve_metadata("https://youtu.be/abc123")
            .await
            .unwrap();

        assert_eq!(metadata.title, "Unknown Title");
        assert_eq!(metadata.author, "Unknown Artist");
    }
}
