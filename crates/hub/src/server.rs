// Copyright (C) 2025 The rankcast authors.
// SPDX-License-Identifier: Apache-2.0

//! Hub server entry point.
use anyhow::{Result, anyhow};
use futures_util::{SinkExt, StreamExt};
use log::{error, info};
use std::sync::Arc;
use tokio::{
    net::{TcpListener, TcpStream},
    signal,
};
use tokio_tungstenite::tungstenite::Message as WsMessage;

use rankcast_cards::{Card, Deck};
use rankcast_eval::HAND_SIZE;

use crate::{
    hub::Hub,
    message::{HandResult, Request, Response},
};

/// Networking config.
#[derive(Debug)]
pub struct Config {
    /// The server listening address.
    pub address: String,
    /// The server listening port.
    pub port: u16,
}

/// Server entry point.
pub async fn run(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.address, config.port);
    info!("Starting hub listening on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow!("Tcp listener bind error: {e}"))?;

    let hub = Arc::new(Hub::default());

    tokio::select! {
        res = accept_loop(listener, hub) => {
            res.map_err(|e| anyhow!("Tcp listener accept error: {e}"))?;
        }
        _ = signal::ctrl_c() => {
            info!("Received shutdown signal...");
        }
    }

    Ok(())
}

/// Accepts connections and spawns a handler task for each client.
async fn accept_loop(listener: TcpListener, hub: Arc<Hub>) -> Result<()> {
    loop {
        let (socket, addr) = listener.accept().await?;
        info!("Accepted connection from {addr}");

        let hub = hub.clone();
        tokio::spawn(async move {
            if let Err(err) = handle_connection(socket, hub).await {
                error!("Connection to {addr} {err}");
            }

            info!("Connection to {addr} closed");
        });
    }
}

/// Per connection session state.
///
/// Each connection owns its deck, dealing on one connection never
/// affects another.
struct Session {
    deck: Deck,
}

impl Session {
    fn new() -> Self {
        Self {
            deck: Deck::new_and_shuffled(&mut rand::rng()),
        }
    }

    /// Handles a request frame.
    ///
    /// Returns the reply frame for the sender and, for evaluated
    /// hands, the frame to broadcast to the other clients.
    fn handle_frame(&mut self, payload: &str) -> (String, Option<String>) {
        let response = match serde_json::from_str::<Request>(payload) {
            Ok(Request::Deal) => {
                if self.deck.count() < HAND_SIZE {
                    self.deck = Deck::new_and_shuffled(&mut rand::rng());
                }
                let cards = (0..HAND_SIZE).map(|_| self.deck.deal()).collect();
                self.evaluate(cards)
            }
            Ok(Request::Evaluate { cards }) => self.evaluate(cards),
            Err(e) => Response::Error(format!("Invalid request: {e}")),
        };

        let reply = serde_json::to_string(&response).expect("Should serialize response");
        let broadcast = matches!(response, Response::Result(_)).then(|| reply.clone());

        (reply, broadcast)
    }

    fn evaluate(&self, cards: Vec<Card>) -> Response {
        match HandResult::evaluate(cards) {
            Ok(result) => Response::Result(result),
            Err(e) => Response::Error(e.to_string()),
        }
    }
}

/// Handles a client connection.
pub(crate) async fn handle_connection(socket: TcpStream, hub: Arc<Hub>) -> Result<()> {
    let stream = tokio_tungstenite::accept_async(socket).await?;
    let (mut sink, mut stream) = stream.split();

    let (client_id, mut rx) = hub.register();
    let mut session = Session::new();

    let res = loop {
        tokio::select! {
            frame = rx.recv() => match frame {
                Some(frame) => {
                    if let Err(e) = sink.send(WsMessage::text(frame)).await {
                        break Err(anyhow!("Connection error: {e}"));
                    }
                }
                None => break Ok(()),
            },
            msg = stream.next() => match msg {
                Some(Ok(WsMessage::Text(payload))) => {
                    let (reply, broadcast) = session.handle_frame(payload.as_str());

                    if let Err(e) = sink.send(WsMessage::text(reply)).await {
                        break Err(anyhow!("Connection error: {e}"));
                    }

                    if let Some(frame) = broadcast {
                        hub.broadcast(client_id, &frame);
                    }
                }
                Some(Ok(WsMessage::Close(_))) | None => break Ok(()),
                Some(Ok(_)) => continue,
                Some(Err(e)) => break Err(anyhow!("Connection error: {e}")),
            },
        }
    };

    hub.unregister(client_id);
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankcast_eval::HandCategory;
    use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

    type ClientStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect()
    }

    /// Starts a hub on an ephemeral port, returns its websocket url.
    async fn spawn_hub() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hub = Arc::new(Hub::default());

        tokio::spawn(async move {
            loop {
                let (socket, _) = listener.accept().await.unwrap();
                let hub = hub.clone();
                tokio::spawn(async move {
                    let _ = handle_connection(socket, hub).await;
                });
            }
        });

        format!("ws://{addr}")
    }

    async fn connect(url: &str) -> ClientStream {
        let (stream, _) = tokio_tungstenite::connect_async(url).await.unwrap();
        stream
    }

    async fn send(stream: &mut ClientStream, request: &Request) {
        let frame = serde_json::to_string(request).unwrap();
        stream.send(WsMessage::text(frame)).await.unwrap();
    }

    async fn recv(stream: &mut ClientStream) -> Response {
        match stream.next().await.unwrap().unwrap() {
            WsMessage::Text(payload) => serde_json::from_str(payload.as_str()).unwrap(),
            msg => panic!("unexpected frame {msg:?}"),
        }
    }

    #[tokio::test]
    async fn evaluate_request() {
        let url = spawn_hub().await;
        let mut client = connect(&url).await;

        send(
            &mut client,
            &Request::Evaluate {
                cards: cards("TS JS QS KS AS 2H 3D"),
            },
        )
        .await;

        match recv(&mut client).await {
            Response::Result(result) => {
                assert_eq!(result.best, HandCategory::RoyalFlush);
                assert_eq!(result.cards.len(), 7);

                let total = result.census.iter().map(|e| e.frequency).sum::<f64>();
                assert!((total - 1.0).abs() < 1e-9);
            }
            msg => panic!("unexpected response {msg:?}"),
        }

        // An undersized hand is an error to the sender only.
        send(
            &mut client,
            &Request::Evaluate {
                cards: cards("TS JS QS KS AS 2H"),
            },
        )
        .await;

        match recv(&mut client).await {
            Response::Error(e) => assert!(e.contains("expected 7 cards")),
            msg => panic!("unexpected response {msg:?}"),
        }
    }

    #[tokio::test]
    async fn deal_reshuffles_session_deck() {
        let url = spawn_hub().await;
        let mut client = connect(&url).await;

        // A 52 cards deck serves 7 deals, the 8th reshuffles.
        for _ in 0..8 {
            send(&mut client, &Request::Deal).await;
            match recv(&mut client).await {
                Response::Result(result) => {
                    assert_eq!(result.cards.len(), 7);
                    assert!(!result.census.is_empty());
                }
                msg => panic!("unexpected response {msg:?}"),
            }
        }
    }

    #[tokio::test]
    async fn results_broadcast_to_other_clients() {
        let url = spawn_hub().await;

        // Round trip a request on the watcher so it is registered
        // before the dealer deals.
        let mut watcher = connect(&url).await;
        send(
            &mut watcher,
            &Request::Evaluate {
                cards: cards("2H 5D 7C 9S JH 3D 4C"),
            },
        )
        .await;
        let _ = recv(&mut watcher).await;

        let mut dealer = connect(&url).await;
        send(&mut dealer, &Request::Deal).await;

        // The dealer gets the reply, the watcher the broadcast.
        let dealt = match recv(&mut dealer).await {
            Response::Result(result) => result,
            msg => panic!("unexpected response {msg:?}"),
        };

        match recv(&mut watcher).await {
            Response::Result(result) => {
                assert_eq!(result.cards, dealt.cards);
                assert_eq!(result.best, dealt.best);
            }
            msg => panic!("unexpected response {msg:?}"),
        }
    }
}
