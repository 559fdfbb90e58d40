use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, instrument};

use crate::{
    app_error::{AppError, AppResult},
    application::ports::{clock::Clock, reply_picker::ReplyPicker},
    domain::entities::chat_message::{ChatMessage, SpeechBubble},
};

pub const CANNED_REPLIES: [&str; 6] = [
    "삐빅! 당신 덕분에 매일 새로운 것을 배우고 있어요!",
    "알고 계셨나요? 오늘 벌써 1,000개의 학습 데이터를 처리했답니다!",
    "에러 404: 농담을 찾을 수 없습니다. 농담이에요! 무엇을 도와드릴까요?",
    "신경망이 짜릿하네요... 정말 좋은 질문이에요!",
    "처리 중... 처리 중... 아하, 이제 이해했어요!",
    "매 순간 더 똑똑해지고 있어요. 고마워요, 트레이너님!",
];

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_BUBBLE_TTL: Duration = Duration::from_millis(3000);

/// Single-user demo store: one history shared by every client, kept in memory
/// for the life of the process.
#[derive(Default)]
struct ChatState {
    history: Vec<ChatMessage>,
    bubble: Option<SpeechBubble>,
}

/// Canned-reply chat. Every reply is picked independently of the conversation so far.
///
/// There is one conversation per instance; callers are not told apart.
#[derive(Clone)]
pub struct ChatUseCases {
    picker: Arc<dyn ReplyPicker>,
    clock: Arc<dyn Clock>,
    state: Arc<Mutex<ChatState>>,
    reply_delay: Duration,
    bubble_ttl: Duration,
}

/// Result of sending a message: the stored user entry and the reply still on its way.
pub struct ChatTurn {
    pub user: ChatMessage,
    pub reply: PendingReply,
}

/// Handle to a scheduled reply. Dropping it does not cancel the reply.
pub struct PendingReply {
    handle: JoinHandle<ChatMessage>,
}

impl PendingReply {
    pub async fn wait(self) -> AppResult<ChatMessage> {
        self.handle
            .await
            .map_err(|e| AppError::Internal(format!("Chat reply task failed: {e}")))
    }
}

impl ChatUseCases {
    pub fn new(picker: Arc<dyn ReplyPicker>, clock: Arc<dyn Clock>) -> Self {
        Self {
            picker,
            clock,
            state: Arc::new(Mutex::new(ChatState::default())),
            reply_delay: DEFAULT_REPLY_DELAY,
            bubble_ttl: DEFAULT_BUBBLE_TTL,
        }
    }

    pub fn with_timing(mut self, reply_delay: Duration, bubble_ttl: Duration) -> Self {
        self.reply_delay = reply_delay;
        self.bubble_ttl = bubble_ttl;
        self
    }

    /// Records the user's message right away and schedules one AI reply after the reply delay.
    #[instrument(skip(self))]
    pub async fn on_user_message(&self, content: &str) -> ChatTurn {
        let user = ChatMessage::user(content);
        self.state.lock().await.history.push(user.clone());

        let this = self.clone();
        let handle = tokio::spawn(async move { this.reply().await });

        ChatTurn {
            user,
            reply: PendingReply { handle },
        }
    }

    pub async fn history(&self) -> Vec<ChatMessage> {
        self.state.lock().await.history.clone()
    }

    /// The latest reply, if it has not been dismissed yet.
    pub async fn current_bubble(&self) -> Option<String> {
        let now = self.clock.now();
        self.state
            .lock()
            .await
            .bubble
            .as_ref()
            .filter(|bubble| bubble.is_visible(now))
            .map(|bubble| bubble.message.clone())
    }

    async fn reply(&self) -> ChatMessage {
        self.clock.sleep(self.reply_delay).await;

        let index = self.picker.pick(CANNED_REPLIES.len()) % CANNED_REPLIES.len();
        let message = ChatMessage::ai(CANNED_REPLIES[index]);
        let visible_until = self.dismiss_at(self.clock.now());

        let mut state = self.state.lock().await;
        state.history.push(message.clone());
        // A newer reply replaces the bubble and its deadline.
        state.bubble = Some(SpeechBubble {
            message: message.content.clone(),
            visible_until,
        });

        debug!(index, "Chat reply appended");
        message
    }

    fn dismiss_at(&self, shown_at: DateTime<Utc>) -> DateTime<Utc> {
        chrono::Duration::from_std(self.bubble_ttl)
            .ok()
            .and_then(|ttl| shown_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}
