//! Relay wire events
//!
//! Plain JSON payloads tagged by an `event` field; no binary framing,
//! no versioning.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one doubt-chat room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomKey {
    pub course_id: Uuid,
    pub student_id: Uuid,
    pub tutor_id: Uuid,
}

/// Commands a connected client may send over the socket
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ClientCommand {
    /// Subscribe to the caller's notification lobby
    JoinUserLobby { user_id: Uuid },
    /// Subscribe to a tutor's notification lobby
    JoinTutorLobby { tutor_id: Uuid },
    /// Subscribe to a doubt-chat room
    JoinDoubtChat {
        course_id: Uuid,
        student_id: Uuid,
        tutor_id: Uuid,
    },
    /// Announce a doubt message to the room (relay-only echo; the
    /// durable write goes through the REST send endpoint)
    SendDoubt {
        course_id: Uuid,
        student_id: Uuid,
        tutor_id: Uuid,
        sender_id: Uuid,
        sender_name: String,
        message: String,
    },
}

/// Events pushed to subscribed clients
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum RelayEvent {
    /// Live message delivery inside an open doubt chat
    ReceiveDoubt {
        course_id: Uuid,
        student_id: Uuid,
        tutor_id: Uuid,
        sender_id: Uuid,
        sender_name: String,
        message: String,
    },
    /// Out-of-band notification delivered to a recipient's lobby
    NewMessageNotification {
        course_id: Uuid,
        sender_id: Uuid,
        sender_name: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_command_wire_names() {
        let cmd: ClientCommand = serde_json::from_str(
            r#"{"event":"join-user-lobby","user_id":"c0a80101-0000-0000-0000-000000000001"}"#,
        )
        .unwrap();
        assert!(matches!(cmd, ClientCommand::JoinUserLobby { .. }));

        let cmd: ClientCommand = serde_json::from_str(
            r#"{
                "event": "join-doubt-chat",
                "course_id": "c0a80101-0000-0000-0000-000000000001",
                "student_id": "c0a80101-0000-0000-0000-000000000002",
                "tutor_id": "c0a80101-0000-0000-0000-000000000003"
            }"#,
        )
        .unwrap();
        assert!(matches!(cmd, ClientCommand::JoinDoubtChat { .. }));
    }

    #[test]
    fn test_relay_event_serializes_tagged() {
        let event = RelayEvent::NewMessageNotification {
            course_id: Uuid::nil(),
            sender_id: Uuid::nil(),
            sender_name: "Alice".to_string(),
            message: "hi".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "new-message-notification");
        assert_eq!(json["sender_name"], "Alice");
    }
}
