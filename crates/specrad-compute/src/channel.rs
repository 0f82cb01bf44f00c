//! In-process role links backed by `std::sync::mpsc` rendezvous channels.

use std::sync::mpsc;

use crate::link::{LinkError, Message, RoleLink};

/// A role link connecting two threads within one process.
///
/// Built from a pair of zero-capacity [`mpsc::sync_channel`]s, one per
/// direction. Zero capacity gives rendezvous semantics: a send blocks until
/// the peer performs the matching receive, so every exchange doubles as a
/// pairwise barrier.
pub struct ChannelLink {
    tx: mpsc::SyncSender<Message>,
    rx: mpsc::Receiver<Message>,
}

impl ChannelLink {
    /// Create the two endpoints of one bidirectional link.
    pub fn pair() -> (ChannelLink, ChannelLink) {
        let (tx_ab, rx_ab) = mpsc::sync_channel(0);
        let (tx_ba, rx_ba) = mpsc::sync_channel(0);
        (
            ChannelLink { tx: tx_ab, rx: rx_ba },
            ChannelLink { tx: tx_ba, rx: rx_ab },
        )
    }
}

impl RoleLink for ChannelLink {
    fn send(&self, message: Message) -> Result<(), LinkError> {
        self.tx.send(message).map_err(|_| LinkError::Disconnected)
    }

    fn recv(&self) -> Result<Message, LinkError> {
        self.rx.recv().map_err(|_| LinkError::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_round_trip_preserves_order() {
        let (a, b) = ChannelLink::pair();

        let echo = thread::spawn(move || {
            for _ in 0..3 {
                let msg = b.recv().unwrap();
                b.send(msg).unwrap();
            }
        });

        for i in 0..3 {
            let sent = Message::Vector(vec![i as f64, 2.0 * i as f64]);
            a.send(sent.clone()).unwrap();
            assert_eq!(a.recv().unwrap(), sent);
        }
        echo.join().unwrap();
    }

    #[test]
    fn test_disconnected_peer() {
        let (a, b) = ChannelLink::pair();
        drop(b);

        assert!(matches!(
            a.send(Message::Dimension(2)),
            Err(LinkError::Disconnected)
        ));
        assert!(matches!(a.recv(), Err(LinkError::Disconnected)));
    }

    #[test]
    fn test_typed_receive_rejects_wrong_variant() {
        let (a, b) = ChannelLink::pair();

        let sender = thread::spawn(move || {
            b.send(Message::Row(vec![1.0])).unwrap();
        });

        let err = a.recv_vector().unwrap_err();
        assert!(matches!(
            err,
            LinkError::UnexpectedMessage { expected: "vector", received: "row" }
        ));
        sender.join().unwrap();
    }
}
