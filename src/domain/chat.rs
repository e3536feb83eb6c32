// Chat domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub user_text: String,
    pub bot_reply: String,
    pub replied_at: DateTime<Utc>,
}

impl ChatTurn {
    pub fn new(user_text: String, bot_reply: String) -> Self {
        Self {
            user_text,
            bot_reply,
            replied_at: Utc::now(),
        }
    }
}
