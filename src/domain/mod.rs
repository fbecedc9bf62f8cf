//! Platform-agnostic domain types.

mod address;
mod callback;
mod chat;
mod mint;
mod pair;

pub use address::{CandidateAddress, DEFAULT_MIN_ADDRESS_LEN};
pub use callback::{CallbackAction, MAX_CALLBACK_DATA_LEN};
pub use chat::{Button, ButtonAction, CallbackEvent, ChatId, Keyboard, OutboundMessage, TextMode};
pub use mint::{MintLookup, MintMetadata, UnavailableReason};
pub use pair::{PairLookup, PairSnapshot};
