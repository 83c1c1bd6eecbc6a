use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::domain::Record;
use crate::source::{parse_records, FetchError, ItemSource};

/// One-shot GET of a URL that returns a JSON array of records.
///
/// No retry and no request timeout: a failure is reported once to the caller.
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(url)?;
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("quotedeck/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, url })
    }

    pub fn with_client(client: Client, url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            url: Url::parse(url)?,
        })
    }
}

#[async_trait]
impl ItemSource for HttpSource {
    async fn load(&self) -> Result<Vec<Record>, FetchError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned response and return the URL to hit.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/items.json", addr)
    }

    fn local_source(url: &str) -> HttpSource {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpSource::with_client(client, url).unwrap()
    }

    #[test]
    fn test_rejects_invalid_url() {
        let err = HttpSource::new("not a url").err().unwrap();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_load_success() {
        let url = serve_once("200 OK", r#"[{"id":1,"title":"Wall","author":"A"}]"#).await;
        let source = local_source(&url);

        let records = source.load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let url = serve_once("500 Internal Server Error", "oops").await;
        let source = local_source(&url);

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let url = serve_once("200 OK", "{not json").await;
        let source = local_source(&url);

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }
}
