//! TCP client for the OpenSpace server module.
//!
//! The client owns one connection and opens topics sequentially. Each
//! request waits for the first message addressed to its topic; messages
//! for other topics are skipped.
//!
//! # Examples
//!
//! ```no_run
//! use std::time::Duration;
//! use typegen_introspector::DocumentationClient;
//!
//! # async fn example() -> typegen_core::Result<()> {
//! let mut client = DocumentationClient::connect(
//!     "localhost:4681",
//!     Duration::from_secs(10),
//!     Duration::from_secs(30),
//! )
//! .await?;
//!
//! let docs = client.get_documentation("lua").await?;
//! client.disconnect().await?;
//! # Ok(())
//! # }
//! ```

use crate::protocol::{
    AUTHORIZE_TOPIC, DOCUMENTATION_TOPIC, TopicId, TopicMessage, TopicRequest, is_authorized,
};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use typegen_core::{ApiDocumentation, Error, Result};

/// Connection to the documentation service.
#[derive(Debug)]
pub struct DocumentationClient {
    address: String,
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    next_topic: TopicId,
    request_timeout: Duration,
}

impl DocumentationClient {
    /// Opens a connection to `address` (`host:port`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if the connection is not established
    /// within `connect_timeout`, or [`Error::ConnectionFailed`] if it is
    /// refused.
    pub async fn connect(
        address: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self> {
        tracing::debug!("Connecting to documentation service at {address}");

        let stream = tokio::time::timeout(connect_timeout, TcpStream::connect(address))
            .await
            .map_err(|_| Error::Timeout {
                operation: format!("connect to {address}"),
                duration_secs: connect_timeout.as_secs(),
            })?
            .map_err(|e| Error::ConnectionFailed {
                address: address.to_string(),
                source: Box::new(e),
            })?;

        let (read_half, write_half) = stream.into_split();

        tracing::info!("Connected to documentation service at {address}");

        Ok(Self {
            address: address.to_string(),
            reader: BufReader::new(read_half),
            writer: write_half,
            next_topic: 0,
            request_timeout,
        })
    }

    /// Returns the `host:port` this client is connected to.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Authenticates with the service password.
    ///
    /// Required only when the client is not allow-listed in the
    /// application's configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthenticationFailed`] if the service rejects the
    /// password, or any error from [`Self::request`].
    pub async fn authenticate(&mut self, secret: &SecretString) -> Result<()> {
        let payload = json!({ "key": secret.expose_secret() });
        let reply = self.request(AUTHORIZE_TOPIC, &payload).await?;

        if is_authorized(&reply) {
            tracing::debug!("Authenticated with {}", self.address);
            Ok(())
        } else {
            Err(Error::AuthenticationFailed {
                address: self.address.clone(),
            })
        }
    }

    /// Requests the documentation of the given kind (e.g. `lua`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the reply is not a
    /// documentation document, or any error from [`Self::request`].
    pub async fn get_documentation(&mut self, kind: &str) -> Result<ApiDocumentation> {
        let reply = self
            .request(DOCUMENTATION_TOPIC, &json!({ "type": kind }))
            .await?;
        let docs = ApiDocumentation::from_value(reply)?;

        tracing::info!(
            "Received '{kind}' documentation: {} libraries, {} functions",
            docs.library_count(),
            docs.function_count()
        );

        Ok(docs)
    }

    /// Opens a topic and waits for its first reply.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if no reply arrives within the request
    /// timeout, [`Error::ConnectionFailed`] if the connection drops, or
    /// [`Error::ProtocolError`] if the server sends a malformed line.
    pub async fn request(&mut self, topic_type: &str, payload: &Value) -> Result<Value> {
        let topic = self.next_topic;
        self.next_topic += 1;

        let line = TopicRequest {
            topic,
            topic_type,
            payload,
        }
        .to_line()?;

        tracing::debug!("Opening topic {topic} ({topic_type})");

        let timeout = self.request_timeout;
        tokio::time::timeout(timeout, self.round_trip(topic, line))
            .await
            .map_err(|_| Error::Timeout {
                operation: format!("'{topic_type}' request to {}", self.address),
                duration_secs: timeout.as_secs(),
            })?
    }

    async fn round_trip(&mut self, topic: TopicId, line: String) -> Result<Value> {
        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| self.connection_error(e))?;
        self.writer
            .flush()
            .await
            .map_err(|e| self.connection_error(e))?;

        let mut buffer = String::new();
        loop {
            buffer.clear();
            let read = self
                .reader
                .read_line(&mut buffer)
                .await
                .map_err(|e| self.connection_error(e))?;

            if read == 0 {
                return Err(self.connection_error(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "server closed the connection before replying",
                )));
            }

            if buffer.trim().is_empty() {
                continue;
            }

            let message = TopicMessage::from_line(&buffer)?;
            if message.belongs_to(topic) {
                return Ok(message.payload);
            }

            tracing::debug!(
                "Skipping message for topic {:?} while waiting for {topic}",
                message.topic
            );
        }
    }

    /// Closes the connection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConnectionFailed`] if the shutdown handshake fails.
    pub async fn disconnect(mut self) -> Result<()> {
        self.writer
            .shutdown()
            .await
            .map_err(|e| self.connection_error(e))?;
        tracing::debug!("Disconnected from {}", self.address);
        Ok(())
    }

    fn connection_error(&self, error: std::io::Error) -> Error {
        Error::ConnectionFailed {
            address: self.address.clone(),
            source: Box::new(error),
        }
    }
}
