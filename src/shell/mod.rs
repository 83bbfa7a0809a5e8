//! Presentation-shell state: tab selection, form fields and the current
//! result set.
//!
//! Deliberately UI-free. A front end binds these fields to its controls and
//! renders `rows()` when `table_visible()` is set; every failure surfaces as
//! one generic notification while the typed error kind goes to the log.

use log::warn;

use crate::pipeline::IngestionPipeline;
use crate::platform::PlatformConnector;
use crate::utils::types::DisplayRow;

/// The one user-facing failure text; error kinds are not distinguished in
/// the shell.
pub const GENERIC_FAILURE_TEXT: &str = "Failed to perform inference. Please try again.";

/// The two mutually exclusive input modes of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    TelegramPaste,
    PlatformApi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Info,
}

/// Toast abstraction; presentation decides how to show it.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn generic_failure() -> Self {
        Self {
            kind: NotificationKind::Error,
            text: GENERIC_FAILURE_TEXT.to_string(),
        }
    }
}

/// Explicit widget state, decoupled from any UI binding.
#[derive(Debug)]
pub struct ShellState {
    mode: InputMode,
    telegram_message: String,
    api_key: String,
    selected_platform: String,
    show_table: bool,
    rows: Vec<DisplayRow>,
    notification: Option<Notification>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            mode: InputMode::TelegramPaste,
            telegram_message: String::new(),
            api_key: String::new(),
            selected_platform: String::new(),
            show_table: false,
            rows: Vec::new(),
            notification: None,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn select_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn set_telegram_message(&mut self, message: impl Into<String>) {
        self.telegram_message = message.into();
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = key.into();
    }

    pub fn select_platform(&mut self, platform: impl Into<String>) {
        self.selected_platform = platform.into();
    }

    /// Simulate button gating: disabled while the message box is empty.
    pub fn can_simulate(&self) -> bool {
        !self.telegram_message.is_empty()
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn table_visible(&self) -> bool {
        self.show_table
    }

    /// Hand the pending notification to the presenter, clearing it.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Mode-1 submission: run the current message through the pipeline.
    ///
    /// Success replaces the result set; failure leaves rows and table
    /// visibility untouched and raises the generic notification.
    pub async fn simulate(&mut self, pipeline: &IngestionPipeline) {
        if !self.can_simulate() {
            return;
        }

        match pipeline.submit(&self.telegram_message).await {
            Ok(rows) => self.on_simulate_success(rows),
            Err(e) => {
                warn!("simulation failed: {}", e);
                self.notification = Some(Notification::generic_failure());
            }
        }
    }

    /// Mode-2 submission: delegate to an external platform connector.
    pub async fn connect_platform(&mut self, connector: &dyn PlatformConnector) {
        match connector
            .simulate(&self.selected_platform, &self.api_key)
            .await
        {
            Ok(rows) => self.on_simulate_success(rows),
            Err(e) => {
                warn!("platform simulation failed: {}", e);
                self.notification = Some(Notification::generic_failure());
            }
        }
    }

    /// Success callback shared by both flows. Replace-on-next-submission:
    /// the previous result set is discarded, no history is kept.
    pub fn on_simulate_success(&mut self, rows: Vec<DisplayRow>) {
        self.rows = rows;
        self.show_table = true;
    }
}
