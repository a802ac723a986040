//! HTTP client wrapper - fetches and decodes the user list

use std::time::{Duration, Instant};

use crate::error::FetchError;
use crate::messages::NetworkResponse;
use crate::models::User;

/// Create an HTTP client. No timeout unless one is configured.
pub fn create_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}

/// One plain GET of `url`, decoded as a JSON array of users
pub async fn fetch_users(client: &reqwest::Client, url: &str) -> Result<Vec<User>, FetchError> {
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = resp.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Run [`fetch_users`] and wrap the outcome as a response message
pub async fn execute_fetch(client: &reqwest::Client, url: &str, request_id: u64) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_users(client, url).await;
    let time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(users) => NetworkResponse::UsersLoaded {
            id: request_id,
            users,
            time_ms,
        },
        Err(e) => {
            tracing::warn!(id = request_id, kind = e.kind(), error = %e, "Fetch failed");
            NetworkResponse::FetchFailed {
                id: request_id,
                reason: e.to_string(),
                time_ms,
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer exactly one request with `status` and `body`; returns its URL
    pub async fn serve_once(status: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}/users", addr)
    }

    /// Accept one connection and never answer
    pub async fn serve_silent() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
            drop(socket);
        });

        format!("http://{}/users", addr)
    }
}
