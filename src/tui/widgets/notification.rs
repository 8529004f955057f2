//! Toast notification widget
//!
//! Shows budget advisories and rejected operations until they expire.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// How long a notification stays on screen
const DEFAULT_DURATION: Duration = Duration::from_secs(4);

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Advisory that did not block the operation
    Warning,
    /// Operation was rejected
    Error,
}

impl NotificationType {
    /// Get the color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Get the popup title for this notification type
    pub fn title(&self) -> &'static str {
        match self {
            Self::Warning => " ! Warning ",
            Self::Error => " x Error ",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// Text shown in the popup
    pub message: String,
    /// Warning or error
    pub notification_type: NotificationType,
    /// When the notification was raised
    pub created_at: Instant,
    /// How long it stays visible
    pub duration: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Check if the notification has outlived its duration
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a widget rendering the given notification
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.notification.notification_type.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Notifications waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification behind any already queued
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The notification to show now, if any
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Check if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Number of queued notifications
    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}
