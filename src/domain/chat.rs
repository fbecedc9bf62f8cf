//! Chat-facing message types independent of the Telegram SDK.

use super::callback::CallbackAction;

/// Chat identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// How the message text should be rendered by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// Text is sent verbatim.
    #[default]
    Plain,
    /// Text is Telegram `MarkdownV2` and already escaped.
    MarkdownV2,
}

/// What happens when a keyboard button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Open a link directly, without a round-trip through the bot.
    Url(url::Url),
    /// Send a callback query carrying the encoded action back to the bot.
    Callback(CallbackAction),
}

/// A labeled inline keyboard button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn url(label: impl Into<String>, url: url::Url) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url),
        }
    }

    pub fn callback(label: impl Into<String>, action: CallbackAction) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(action),
        }
    }
}

/// Inline keyboard as rows of buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Iterate over every button in row order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// A message ready to be transmitted to a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub mode: TextMode,
    pub keyboard: Option<Keyboard>,
    /// Whether the client should render link previews.
    pub link_preview: bool,
}

impl OutboundMessage {
    /// Plain text message with no keyboard.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: TextMode::Plain,
            keyboard: None,
            link_preview: true,
        }
    }

    /// Pre-escaped `MarkdownV2` message with no keyboard.
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: TextMode::MarkdownV2,
            keyboard: None,
            link_preview: true,
        }
    }

    #[must_use]
    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = (!keyboard.is_empty()).then_some(keyboard);
        self
    }

    #[must_use]
    pub fn with_link_preview(mut self, enabled: bool) -> Self {
        self.link_preview = enabled;
        self
    }
}

/// A pressed inline button as delivered by the chat platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackEvent {
    /// Identifier used to acknowledge the press.
    pub id: String,
    /// Chat of the message the button was attached to, if still accessible.
    pub chat: Option<ChatId>,
    /// Opaque payload attached to the button.
    pub data: Option<String>,
}
