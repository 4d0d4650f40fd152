//! Game server websocket client using tokio-tungstenite

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use url::Url;

use crate::ports::outbound::{ChannelError, GameChannelPort};

/// Game channel over a websocket connection to the game server
pub struct WebSocketChannel {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WebSocketChannel {
    /// Open the websocket handshake against `endpoint`.
    ///
    /// The endpoint carries the API key, so only its host is logged.
    pub async fn connect(endpoint: &Url) -> Result<Self, ChannelError> {
        let host = endpoint.host_str().unwrap_or_default().to_string();
        tracing::info!(host = %host, "Connecting to game server");

        match connect_async(endpoint.as_str()).await {
            Ok((stream, response)) => {
                tracing::info!(host = %host, status = %response.status(), "Connected to game server");
                Ok(Self { stream })
            }
            Err(e) => {
                tracing::error!(host = %host, error = %e, "Failed to connect to game server");
                Err(ChannelError::Connect(e.to_string()))
            }
        }
    }
}

fn map_ws_error(err: tungstenite::Error) -> ChannelError {
    match err {
        tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed => {
            ChannelError::Closed
        }
        other => ChannelError::Transport(other.to_string()),
    }
}

#[async_trait]
impl GameChannelPort for WebSocketChannel {
    async fn recv_text(&mut self) -> Result<String, ChannelError> {
        while let Some(msg) = self.stream.next().await {
            match msg {
                Ok(Message::Text(text)) => return Ok(text),
                Ok(Message::Binary(data)) => {
                    return String::from_utf8(data)
                        .map_err(|e| ChannelError::InvalidFrame(e.to_string()));
                }
                Ok(Message::Close(frame)) => {
                    tracing::info!(?frame, "Server closed connection");
                    return Err(ChannelError::Closed);
                }
                // Pongs are queued by tungstenite itself
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) | Ok(Message::Frame(_)) => {}
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    return Err(map_ws_error(e));
                }
            }
        }
        Err(ChannelError::Closed)
    }

    async fn send_text(&mut self, text: String) -> Result<(), ChannelError> {
        self.stream.send(Message::Text(text)).await.map_err(|e| {
            tracing::error!("Failed to send message: {}", e);
            map_ws_error(e)
        })
    }

    async fn close(&mut self) -> Result<(), ChannelError> {
        match self.stream.close(None).await {
            Ok(()) => Ok(()),
            Err(e) => match map_ws_error(e) {
                ChannelError::Closed => Ok(()),
                other => Err(other),
            },
        }
    }
}
