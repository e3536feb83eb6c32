// Chat service - Use case for answering chatbot messages
use crate::application::reply_matcher::ReplyMatcher;
use crate::domain::chat::ChatTurn;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct ChatService {
    matcher: Arc<ReplyMatcher>,
    reply_delay: Duration,
}

impl ChatService {
    pub fn new(matcher: ReplyMatcher, reply_delay: Duration) -> Self {
        Self {
            matcher: Arc::new(matcher),
            reply_delay,
        }
    }

    /// Answer one message after the presentation delay.
    /// Blank messages are ignored and produce no turn.
    pub async fn respond(&self, message: &str) -> Option<ChatTurn> {
        let message = message.trim();
        if message.is_empty() {
            tracing::debug!("Ignoring blank chat message");
            return None;
        }

        // Each request waits on its own timer; concurrent requests do not queue behind each other
        tokio::time::sleep(self.reply_delay).await;

        let reply = self.matcher.reply(message).to_string();
        Some(ChatTurn::new(message.to_string(), reply))
    }
}
