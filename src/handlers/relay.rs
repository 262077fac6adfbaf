//! WebSocket relay handler
//!
//! Each connection runs two tasks: one draining an mpsc queue into the
//! socket, one parsing client commands. Join commands spawn forwarders
//! that copy events from the hub's broadcast channels into the queue, so
//! one socket can watch a lobby and several rooms at once.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
    routing::get,
    Router,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::{broadcast, mpsc};
use tracing::debug;
use uuid::Uuid;

use crate::{
    relay::{ClientCommand, RelayEvent, RelayHub, RoomKey},
    state::AppState,
};

/// Queued events per connection before the socket is considered stuck
const OUTBOUND_QUEUE: usize = 64;

/// Relay routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/ws", get(upgrade))
}

async fn upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sink, mut stream) = socket.split();
    let (outbound, mut queue) = mpsc::channel::<RelayEvent>(OUTBOUND_QUEUE);

    let mut send_task = tokio::spawn(async move {
        while let Some(event) = queue.recv().await {
            let Ok(text) = serde_json::to_string(&event) else {
                continue;
            };
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let relay = state.relay().clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            let Message::Text(text) = message else {
                continue;
            };

            match serde_json::from_str::<ClientCommand>(&text) {
                Ok(command) => handle_command(&relay, &outbound, command),
                Err(e) => debug!(error = %e, "Ignoring malformed relay command"),
            }
        }
    });

    // Whichever side closes first tears down the other
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
}

fn handle_command(relay: &RelayHub, outbound: &mpsc::Sender<RelayEvent>, command: ClientCommand) {
    match command {
        ClientCommand::JoinUserLobby { user_id } => {
            spawn_forwarder(relay.join_lobby(user_id), outbound.clone());
        }
        ClientCommand::JoinTutorLobby { tutor_id } => {
            spawn_forwarder(relay.join_lobby(tutor_id), outbound.clone());
        }
        ClientCommand::JoinDoubtChat {
            course_id,
            student_id,
            tutor_id,
        } => {
            let key = RoomKey {
                course_id,
                student_id,
                tutor_id,
            };
            spawn_forwarder(relay.join_room(key), outbound.clone());
        }
        ClientCommand::SendDoubt {
            course_id,
            student_id,
            tutor_id,
            sender_id,
            sender_name,
            message,
        } => {
            // Relay-only echo; the durable write goes through the REST
            // send endpoint
            let key = RoomKey {
                course_id,
                student_id,
                tutor_id,
            };

            relay.publish_to_room(
                &key,
                RelayEvent::ReceiveDoubt {
                    course_id,
                    student_id,
                    tutor_id,
                    sender_id,
                    sender_name: sender_name.clone(),
                    message: message.clone(),
                },
            );

            let recipient: Uuid = if sender_id == student_id {
                tutor_id
            } else {
                student_id
            };

            relay.notify_lobby(
                &recipient,
                RelayEvent::NewMessageNotification {
                    course_id,
                    sender_id,
                    sender_name,
                    message,
                },
            );
        }
    }
}

/// Copy events from a hub subscription into the connection's queue
fn spawn_forwarder(mut rx: broadcast::Receiver<RelayEvent>, outbound: mpsc::Sender<RelayEvent>) {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if outbound.send(event).await.is_err() {
                        break;
                    }
                }
                // Slow consumer skipped some events; clients re-fetch
                // history to reconcile
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Relay subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}
