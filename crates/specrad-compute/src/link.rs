//! Role link trait and wire messages.
//!
//! A [`RoleLink`] is one endpoint of a bidirectional point-to-point channel
//! between the coordinator and a single worker. The protocol in
//! `specrad-core` operates against this trait and never sees the transport.

use thiserror::Error;

/// Errors originating from a role link.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Peer disconnected before the exchange completed")]
    Disconnected,

    #[error("Expected a {expected} message, received {received}")]
    UnexpectedMessage {
        expected: &'static str,
        received: &'static str,
    },
}

/// Messages exchanged between the coordinator and one worker.
///
/// `Dimension` and `Row` appear only during the one-time setup transfer;
/// every per-iteration exchange is a `Vector` in each direction.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The per-role block and vector dimension (`h = m/2`), sent once.
    Dimension(usize),
    /// One row of a quadrant block, sent during setup.
    Row(Vec<f64>),
    /// An iterate vector: unnormalised from a worker, normalised back from
    /// the coordinator.
    Vector(Vec<f64>),
}

impl Message {
    /// Short name of the message variant, for error reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Dimension(_) => "dimension",
            Message::Row(_) => "row",
            Message::Vector(_) => "vector",
        }
    }
}

/// One endpoint of a blocking, ordered, bidirectional point-to-point link.
///
/// Both operations are synchronous: a send blocks until the counterpart is
/// ready to receive, and a receive blocks until a message arrives. This
/// rendezvous is the protocol's sole ordering mechanism; there is no
/// timeout, so a missing counterpart blocks forever.
pub trait RoleLink: Send {
    /// Send a message to the peer, blocking until it is accepted.
    fn send(&self, message: Message) -> Result<(), LinkError>;

    /// Receive the next message from the peer, blocking until one arrives.
    fn recv(&self) -> Result<Message, LinkError>;

    /// Receive a message that must be a [`Message::Dimension`].
    fn recv_dimension(&self) -> Result<usize, LinkError> {
        match self.recv()? {
            Message::Dimension(dim) => Ok(dim),
            other => Err(LinkError::UnexpectedMessage {
                expected: "dimension",
                received: other.kind(),
            }),
        }
    }

    /// Receive a message that must be a [`Message::Row`].
    fn recv_row(&self) -> Result<Vec<f64>, LinkError> {
        match self.recv()? {
            Message::Row(row) => Ok(row),
            other => Err(LinkError::UnexpectedMessage {
                expected: "row",
                received: other.kind(),
            }),
        }
    }

    /// Receive a message that must be a [`Message::Vector`].
    fn recv_vector(&self) -> Result<Vec<f64>, LinkError> {
        match self.recv()? {
            Message::Vector(vector) => Ok(vector),
            other => Err(LinkError::UnexpectedMessage {
                expected: "vector",
                received: other.kind(),
            }),
        }
    }
}
