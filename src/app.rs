use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::widgets::ListState;
use tachyonfx::Interpolation;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::action::{ActionDispatcher, ActionHandler};
use crate::config::Config;
use crate::error::Result;
use crate::palette::{ColorId, ColorRecord, EffectSink, PaletteStore};
use crate::service::{self, Completion, LiveDispatcher, PaletteRepository};
use crate::tui::{render, Event, EventHandler, Terminal};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Editing a swatch's hex
    Insert,
    /// Carrying a swatch to a new slot
    Grab,
    Dialog,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "Normal"),
            Mode::Insert => write!(f, "Insert"),
            Mode::Grab => write!(f, "Grab"),
            Mode::Dialog => write!(f, "Dialog"),
        }
    }
}

/// Work the main loop performs outside of action handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOperation {
    /// Re-fetch the palette from storage
    Reload,
}

/// Live hex editor for one swatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexEditor {
    pub id: ColorId,
    pub order: u32,
    pub input: String,
}

impl HexEditor {
    pub fn new(record: &ColorRecord) -> Self {
        Self {
            id: record.id,
            order: record.order,
            input: record.hex.to_string(),
        }
    }
}

/// Swatch picked up for reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grab {
    pub id: ColorId,
    pub from_order: u32,
}

/// Dialog types (UI only - what to display)
#[derive(Debug, Clone, Default)]
pub enum DialogKind {
    #[default]
    None,
    ConfirmDelete {
        id: ColorId,
        label: String,
    },
    EditHex(HexEditor),
}

/// Notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Notification duration
const NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

/// Slide-out animation duration
const SLIDE_OUT_DURATION_MS: u128 = 300;

/// Notification with slide-out animation
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Instant::now() + NOTIFICATION_DURATION,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Slide-out offset (0 to popup_width) during the last 300ms
    pub fn slide_offset(&self, popup_width: u16) -> u16 {
        let now = Instant::now();
        if now >= self.expires_at {
            return popup_width;
        }
        let remaining_ms = self.expires_at.duration_since(now).as_millis();

        if remaining_ms >= SLIDE_OUT_DURATION_MS {
            return 0;
        }

        let progress = 1.0 - (remaining_ms as f32 / SLIDE_OUT_DURATION_MS as f32);
        let eased = Interpolation::QuadOut.alpha(progress);

        (popup_width as f32 * eased) as u16
    }
}

/// Main application state
///
/// Owns the session's palette. Background effects report back through
/// `completions`, which the main loop drains between key events.
pub struct App<S: EffectSink = LiveDispatcher> {
    pub config: Config,
    pub mode: Mode,
    pub dialog: DialogKind,
    pub pending_operation: Option<PendingOperation>,

    pub palette: PaletteStore<S>,
    pub list_state: ListState,
    pub grab: Option<Grab>,

    // Notifications (stacked, newest at end)
    pub notifications: Vec<Notification>,

    pub should_quit: bool,

    completions: UnboundedReceiver<Completion>,
    action_dispatcher: ActionDispatcher,
}

impl App<LiveDispatcher> {
    /// Connect collaborators and load the stored palette
    pub async fn load(config: Config) -> Result<Self> {
        let (dispatcher, completions) = service::connect(&config)?;
        let repository = Arc::clone(dispatcher.repository());

        let mut app = Self::new(config, PaletteStore::new(dispatcher), completions);
        app.reload_from(repository.as_ref()).await;

        Ok(app)
    }

    /// Run the application main loop
    pub async fn run(&mut self, mut terminal: Terminal) -> Result<()> {
        let event_handler = EventHandler::default();

        while !self.should_quit {
            terminal.draw(|frame| render(frame, self))?;

            if let Some(event) = event_handler.poll()? {
                self.handle_event(event);
            }

            self.drain_completions();

            if self.pending_operation.take() == Some(PendingOperation::Reload) {
                let repository = Arc::clone(self.palette.sink().repository());
                if self.reload_from(repository.as_ref()).await {
                    self.notify(Notification::info("Reloaded"));
                }
            }

            self.notifications.retain(|n| !n.is_expired());
        }

        Ok(())
    }
}

impl<S: EffectSink> App<S> {
    /// Create a session around an existing palette
    pub fn new(config: Config, palette: PaletteStore<S>, completions: UnboundedReceiver<Completion>) -> Self {
        let action_dispatcher = ActionDispatcher::new(&config);
        let palette = palette.with_fallback_name(config.naming.fallback_name());

        let mut app = Self {
            config,
            mode: Mode::Normal,
            dialog: DialogKind::None,
            pending_operation: None,
            palette,
            list_state: ListState::default(),
            grab: None,
            notifications: Vec::new(),
            should_quit: false,
            completions,
            action_dispatcher,
        };
        app.clamp_selection();
        app
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize => {
                // Terminal handles resize automatically
            }
            Event::Tick => {}
        }
    }

    /// Translate a key press into an action and apply it
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.action_dispatcher.dispatch(key, &self.mode) {
            ActionHandler::handle(self, action);
        }
    }

    /// Replace the palette with the stored snapshot
    ///
    /// A failed load keeps the current palette and surfaces the error.
    pub async fn reload_from<R: PaletteRepository>(&mut self, repository: &R) -> bool {
        match repository.load().await {
            Ok(records) => {
                tracing::info!(count = records.len(), "loaded palette");
                self.palette.replace(records);
                self.grab = None;
                self.clamp_selection();
                true
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load palette");
                self.show_error(format!("Load failed: {}", err));
                false
            }
        }
    }

    /// Apply every completion that has arrived so far
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions.try_recv() {
            self.apply_completion(completion);
            applied += 1;
        }
        applied
    }

    pub fn apply_completion(&mut self, completion: Completion) {
        match completion {
            Completion::NameResolved { id, hex, name } => {
                self.palette.apply_name(id, &hex, name);
            }
            Completion::Failed(err) => self.show_error(err.to_string()),
        }
    }

    /// Get selected swatch
    pub fn selected_color(&self) -> Option<&ColorRecord> {
        self.list_state
            .selected()
            .and_then(|idx| self.palette.records().get(idx))
    }

    /// Palette slot of the selection
    pub fn selected_order(&self) -> Option<u32> {
        self.list_state.selected().map(|idx| idx as u32 + 1)
    }

    pub fn select_order(&mut self, order: u32) {
        self.list_state.select(Some(order.saturating_sub(1) as usize));
        self.clamp_selection();
    }

    /// Keep the selection inside the palette
    pub fn clamp_selection(&mut self) {
        let len = self.palette.len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    /// Check if there's an active dialog
    pub fn has_active_dialog(&self) -> bool {
        !matches!(self.dialog, DialogKind::None)
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogKind::None;
        self.mode = Mode::Normal;
    }

    /// Show error notification
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::error(message));
    }

    /// Show notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        let len = self.palette.len();
        if len == 0 {
            return;
        }

        let current = self.list_state.selected().unwrap_or(0);
        let next = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(next));
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let len = self.palette.len();
        if len == 0 {
            return;
        }

        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// Move to top
    pub fn move_top(&mut self) {
        if !self.palette.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    /// Move to bottom
    pub fn move_bottom(&mut self) {
        let len = self.palette.len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display() {
        assert_eq!(format!("{}", Mode::Normal), "Normal");
        assert_eq!(format!("{}", Mode::Insert), "Insert");
        assert_eq!(format!("{}", Mode::Grab), "Grab");
        assert_eq!(format!("{}", Mode::Dialog), "Dialog");
    }

    #[test]
    fn test_hex_editor_starts_from_record() {
        let record = ColorRecord {
            order: 3,
            ..ColorRecord::new(ColorId::new())
        };
        let editor = HexEditor::new(&record);
        assert_eq!(editor.id, record.id);
        assert_eq!(editor.order, 3);
        assert_eq!(editor.input, "000000");
    }

    #[test]
    fn test_notification_not_immediately_expired() {
        let notification = Notification::info("Test");
        assert!(!notification.is_expired());
        assert_eq!(notification.slide_offset(100), 0);
    }

    #[test]
    fn test_notification_error_level() {
        let notification = Notification::error("Error message");
        assert_eq!(notification.message, "Error message");
        assert_eq!(notification.level, NotificationLevel::Error);
    }
}
