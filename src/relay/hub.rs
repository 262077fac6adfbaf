//! In-process relay hub
//!
//! Broadcast channels keyed by user (lobbies) and by doubt-room triple.
//! Publishing is fire-and-forget: events sent to a channel nobody is
//! subscribed to are dropped, and the stale channel entry is reclaimed.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{RelayEvent, RoomKey};

/// Buffered events per channel before slow subscribers start lagging
const CHANNEL_CAPACITY: usize = 64;

/// Shared relay hub
#[derive(Clone, Default)]
pub struct RelayHub {
    inner: Arc<HubInner>,
}

#[derive(Default)]
struct HubInner {
    lobbies: RwLock<HashMap<Uuid, broadcast::Sender<RelayEvent>>>,
    rooms: RwLock<HashMap<RoomKey, broadcast::Sender<RelayEvent>>>,
}

impl RelayHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a user's notification lobby
    pub fn join_lobby(&self, user_id: Uuid) -> broadcast::Receiver<RelayEvent> {
        let mut lobbies = self.inner.lobbies.write().expect("relay lobby lock poisoned");
        lobbies
            .entry(user_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Subscribe to a doubt-chat room
    pub fn join_room(&self, key: RoomKey) -> broadcast::Receiver<RelayEvent> {
        let mut rooms = self.inner.rooms.write().expect("relay room lock poisoned");
        rooms
            .entry(key)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Push a notification to a user's lobby (no-op if nobody listens)
    pub fn notify_lobby(&self, user_id: &Uuid, event: RelayEvent) {
        let delivered = {
            let lobbies = self.inner.lobbies.read().expect("relay lobby lock poisoned");
            lobbies
                .get(user_id)
                .map(|tx| tx.send(event).is_ok())
                .unwrap_or(false)
        };

        if !delivered {
            // Nobody subscribed; reclaim the channel if one exists
            let mut lobbies = self.inner.lobbies.write().expect("relay lobby lock poisoned");
            if let Some(tx) = lobbies.get(user_id) {
                if tx.receiver_count() == 0 {
                    lobbies.remove(user_id);
                }
            }
        }
    }

    /// Push a message event into a doubt room (no-op if nobody listens)
    pub fn publish_to_room(&self, key: &RoomKey, event: RelayEvent) {
        let delivered = {
            let rooms = self.inner.rooms.read().expect("relay room lock poisoned");
            rooms
                .get(key)
                .map(|tx| tx.send(event).is_ok())
                .unwrap_or(false)
        };

        if !delivered {
            let mut rooms = self.inner.rooms.write().expect("relay room lock poisoned");
            if let Some(tx) = rooms.get(key) {
                if tx.receiver_count() == 0 {
                    rooms.remove(key);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_key() -> RoomKey {
        RoomKey {
            course_id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            tutor_id: Uuid::new_v4(),
        }
    }

    fn notification(message: &str) -> RelayEvent {
        RelayEvent::NewMessageNotification {
            course_id: Uuid::nil(),
            sender_id: Uuid::nil(),
            sender_name: "tester".to_string(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_lobby_delivery() {
        let hub = RelayHub::new();
        let user = Uuid::new_v4();

        let mut rx = hub.join_lobby(user);
        hub.notify_lobby(&user, notification("hello"));

        let event = rx.recv().await.unwrap();
        match event {
            RelayEvent::NewMessageNotification { message, .. } => assert_eq!(message, "hello"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_silent() {
        let hub = RelayHub::new();
        // Must not panic or error
        hub.notify_lobby(&Uuid::new_v4(), notification("into the void"));
        hub.publish_to_room(&room_key(), notification("into the void"));
    }

    #[tokio::test]
    async fn test_room_fanout_reaches_all_subscribers() {
        let hub = RelayHub::new();
        let key = room_key();

        let mut rx1 = hub.join_room(key);
        let mut rx2 = hub.join_room(key);
        hub.publish_to_room(&key, notification("fan-out"));

        assert!(rx1.recv().await.is_ok());
        assert!(rx2.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_rooms_are_isolated() {
        let hub = RelayHub::new();
        let key_a = room_key();
        let key_b = room_key();

        let mut rx_a = hub.join_room(key_a);
        let _rx_b = hub.join_room(key_b);

        hub.publish_to_room(&key_b, notification("b only"));
        assert!(rx_a.try_recv().is_err());
    }
}
