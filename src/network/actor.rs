//! Network actor - runs user fetches in the Tokio async runtime

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_fetch};

/// Tracks an in-flight fetch for cancellation
struct ActiveFetch {
    cancel_tx: oneshot::Sender<()>,
}

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_fetches: JoinSet<()>,
    cancel_handles: HashMap<u64, ActiveFetch>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>, timeout: Option<Duration>) -> Self {
        NetworkActor {
            client: create_client(timeout),
            response_tx,
            active_fetches: JoinSet::new(),
            cancel_handles: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchUsers { id, url }) => {
                            let (cancel_tx, cancel_rx) = oneshot::channel();
                            self.cancel_handles.insert(id, ActiveFetch { cancel_tx });

                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_fetches.spawn(async move {
                                tracing::info!(id, url = %url, "Fetching users");
                                tokio::select! {
                                    biased;

                                    _ = cancel_rx => {
                                        tracing::info!(id, "Fetch abandoned");
                                    }
                                    result = execute_fetch(&client, &url, id) => {
                                        let _ = response_tx.send(result);
                                    }
                                }
                            });
                        }

                        Some(NetworkCommand::CancelFetch(id)) => {
                            if let Some(active) = self.cancel_handles.remove(&id) {
                                tracing::info!(id, "Cancelling fetch");
                                let _ = active.cancel_tx.send(());
                            }
                        }

                        Some(NetworkCommand::Shutdown) => {
                            for (_, active) in self.cancel_handles.drain() {
                                let _ = active.cancel_tx.send(());
                            }
                            self.active_fetches.shutdown().await;
                            break;
                        }

                        None => break,
                    }
                }

                Some(_result) = self.active_fetches.join_next() => {
                    // Finished fetches have already reported; forget their cancel handles
                    self.cancel_handles.retain(|_, active| !active.cancel_tx.is_closed());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::client::test_server::{serve_once, serve_silent};

    #[tokio::test]
    async fn test_cancel_after_completion_is_silent() {
        let url = serve_once("200 OK", "[]").await;
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(resp_tx, None).run(cmd_rx));

        cmd_tx.send(NetworkCommand::FetchUsers { id: 2, url }).unwrap();
        assert!(matches!(resp_rx.recv().await, Some(NetworkResponse::UsersLoaded { id: 2, .. })));

        cmd_tx.send(NetworkCommand::CancelFetch(2)).unwrap();
        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
        assert!(resp_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_round_trip() {
        let url = serve_once("200 OK", r#"[{"id": 3, "name": "C"}]"#).await;
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(resp_tx, None).run(cmd_rx));

        cmd_tx.send(NetworkCommand::FetchUsers { id: 1, url }).unwrap();
        match resp_rx.recv().await {
            Some(NetworkResponse::UsersLoaded { id, users, .. }) => {
                assert_eq!(id, 1);
                assert_eq!(users.len(), 1);
                assert_eq!(users[0].name, "C");
            }
            other => panic!("unexpected response: {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_cancel_stops_delivery() {
        let url = serve_silent().await;
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(resp_tx, None).run(cmd_rx));

        cmd_tx.send(NetworkCommand::FetchUsers { id: 4, url }).unwrap();
        cmd_tx.send(NetworkCommand::CancelFetch(4)).unwrap();
        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();

        // Every sender is gone and the cancelled fetch reported nothing
        assert!(resp_rx.recv().await.is_none());
    }
}
