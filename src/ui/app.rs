//! Chat UI state
//!
//! The state transitions here are pure so they can be tested without a
//! terminal or a network; spawning the actual request lives in the key
//! handler.

use crate::models::{ApiResponse, Conversation, Message};
use crate::ui::client::ProxyClient;

pub struct App {
    // Core state
    pub should_quit: bool,
    /// First paint shows a static placeholder; set after the first frame
    pub mounted: bool,

    // Conversation state
    pub history: Conversation,
    pub input: String,
    pub cursor: usize, // cursor position in input, in chars
    pub loading: bool,

    // Chat viewport (updated during render, used for scroll math)
    pub scroll: u16,
    pub chat_height: u16,
    pub chat_width: u16,

    // Animation state
    pub animation_frame: u8, // 0-2 for typing indicator

    // In-flight request, at most one
    pub pending: Option<tokio::task::JoinHandle<anyhow::Result<ApiResponse>>>,

    pub proxy: ProxyClient,
}

impl App {
    pub fn new(proxy_url: &str) -> Self {
        Self {
            should_quit: false,
            mounted: false,
            history: Conversation::new(),
            input: String::new(),
            cursor: 0,
            loading: false,
            scroll: 0,
            chat_height: 0,
            chat_width: 0,
            animation_frame: 0,
            pending: None,
            proxy: ProxyClient::new(proxy_url),
        }
    }

    /// Whether a submit would do anything right now
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() && !self.loading && self.pending.is_none()
    }

    /// Start a submit: append the user message and raise the loading flag.
    ///
    /// Returns the question to send, or None when the input is blank or a
    /// request is already in flight. The input field stays visible (but
    /// locked) until the response lands.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        let question = self.input.clone();
        self.history.push(Message::user(question.clone()));
        self.loading = true;
        self.scroll_to_bottom();
        Some(question)
    }

    /// Fold a completed request into the conversation.
    ///
    /// Success appends one bot message with its metadata; failure appends a
    /// warning message with no source tag. Loading flag and input are
    /// cleared either way.
    pub fn apply_result(&mut self, result: anyhow::Result<ApiResponse>) {
        match result {
            Ok(answer) => self.history.push(Message::bot(answer)),
            Err(error) => self.history.push(Message::warning(error)),
        }

        self.loading = false;
        self.input.clear();
        self.cursor = 0;
        self.scroll_to_bottom();
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.loading {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    /// Scroll the chat view so the latest message is visible
    pub fn scroll_to_bottom(&mut self) {
        // Use actual chat width for wrap calculation, default to 50 before
        // the first render
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            50
        };

        let mut total_lines: u16 = 0;

        for message in self.history.iter() {
            total_lines += 1; // Sender line
            for line in message.text.lines() {
                // Character count, not byte length, for proper UTF-8 handling
                let char_count = line.chars().count();
                if char_count == 0 {
                    total_lines += 1;
                } else {
                    total_lines += ((char_count / wrap_width) + 1) as u16;
                }
            }
            if message.source.is_some() {
                total_lines += 1; // Source tag line
            }
            total_lines += 1; // Blank line after message
        }

        if self.loading {
            total_lines += 2; // Typing indicator
        }

        let visible_height = if self.chat_height > 0 {
            self.chat_height
        } else {
            20
        };

        if total_lines > visible_height {
            self.scroll = total_lines.saturating_sub(visible_height);
        }
    }
}
