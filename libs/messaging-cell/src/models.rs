use serde::{Deserialize, Serialize};

/// The two ends of a message; all that partner derivation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageParticipants {
    pub sender_id: String,
    pub receiver_id: String,
}

impl MessageParticipants {
    pub fn new(sender_id: &str, receiver_id: &str) -> Self {
        Self {
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
        }
    }

    /// The other side of the message as seen by `user_id`, if the user took part.
    pub fn counterpart_of(&self, user_id: &str) -> Option<&str> {
        if self.sender_id == user_id {
            Some(&self.receiver_id)
        } else if self.receiver_id == user_id {
            Some(&self.sender_id)
        } else {
            None
        }
    }
}

/// Paging arguments for `get_conversation_messages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { limit: 10, offset: 0 }
    }
}
