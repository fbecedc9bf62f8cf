//! Callback data schema for inline keyboard buttons.
//!
//! Callback data is a tagged string: `<tag>_<payload>`. The handler recovers
//! everything it needs from the payload, so no server-side session state is
//! kept between the reply and the button press.

use std::fmt;

/// Telegram rejects callback data longer than this many bytes.
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

const SEPARATOR: char = '_';
const COPY_TAG: &str = "copy";

/// Actions that can be carried by an inline button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    /// Re-send the contract address as copyable text.
    CopyAddress(String),
}

impl CallbackAction {
    /// Tag identifying the action in encoded callback data.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::CopyAddress(_) => COPY_TAG,
        }
    }

    /// Encode into callback data.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::CopyAddress(address) => format!("{}{SEPARATOR}{address}", self.tag()),
        }
    }

    /// Decode callback data. Returns `None` for unknown tags or empty payloads.
    #[must_use]
    pub fn decode(data: &str) -> Option<Self> {
        let (tag, payload) = data.split_once(SEPARATOR)?;
        if payload.is_empty() {
            return None;
        }
        match tag {
            COPY_TAG => Some(Self::CopyAddress(payload.to_string())),
            _ => None,
        }
    }

    /// Whether the encoded form fits within Telegram's callback data limit.
    #[must_use]
    pub fn fits_callback_limit(&self) -> bool {
        self.encode().len() <= MAX_CALLBACK_DATA_LEN
    }
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
