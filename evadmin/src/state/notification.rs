/// Ticks a notification stays visible (the app loop ticks every 100 ms).
pub const NOTIFICATION_TICKS: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// A one-line status message that expires on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    remaining_ticks: u16,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            remaining_ticks: NOTIFICATION_TICKS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    /// Counts down one tick. Returns false once the notification has expired.
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_ttl() {
        let mut notification = Notification::info("hello");
        for _ in 1..NOTIFICATION_TICKS {
            assert!(notification.tick());
        }
        assert!(!notification.tick());
    }
}
