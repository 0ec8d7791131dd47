// Toast notification state.
// A single transient message with an auto-dismiss deadline.

use std::time::{Duration, Instant};

/// The one live toast. A new trigger replaces the message and restarts the timer.
#[derive(Debug, Clone)]
pub struct Toast {
    message: Option<String>,
    visible: bool,
    deadline: Option<Instant>,
    duration: Duration,
}

impl Toast {
    pub fn new(duration: Duration) -> Self {
        Self {
            message: None,
            visible: false,
            deadline: None,
            duration,
        }
    }

    /// Show a message, resetting any pending dismiss deadline.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.visible = true;
        self.deadline = Some(now + self.duration);
    }

    /// Hide the toast. The last message is kept for the fade-out frame.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.deadline = None;
    }

    /// Dismiss the toast if its deadline has passed. Returns true if it was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if self.visible && now >= deadline => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Message to draw while visible.
    pub fn visible_message(&self) -> Option<&str> {
        if self.visible {
            Some(self.message.as_deref().unwrap_or("Action Successful"))
        } else {
            None
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}
