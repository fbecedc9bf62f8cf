//! Reply formatting for token lookups.
//!
//! Pure functions that turn a [`PairSnapshot`] and a [`MintLookup`] into a
//! ready-to-send [`OutboundMessage`]. No I/O happens here.

pub mod markdown;
pub mod number;

use crate::domain::{
    Button, CallbackAction, CandidateAddress, Keyboard, MintLookup, OutboundMessage, PairSnapshot,
};

use markdown::{escape_code, escape_markdown, link};
use number::{fixed, grouped};

/// Literal shown for any value that is not available.
pub const NOT_AVAILABLE: &str = "N/A";

/// Reply when the market data service knows no pairs for an address.
pub const NOT_FOUND_TEXT: &str = "❌ No token data found for this address.";

/// Reply when the lookup failed unexpectedly.
pub const ERROR_TEXT: &str = "⚠️ Error fetching token info. Try again later.";

/// Toast shown when the copy button is pressed.
pub const COPY_ACK_TEXT: &str = "✅ CA copied!";

const PRICE_PLACES: u32 = 6;

/// Presentation options for token replies.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Let the client render a preview of the first link.
    pub link_preview: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { link_preview: true }
    }
}

/// Build the token info reply with its copy/chart keyboard.
#[must_use]
pub fn token_reply(
    address: &CandidateAddress,
    pair: &PairSnapshot,
    mint: &MintLookup,
    options: FormatOptions,
) -> OutboundMessage {
    OutboundMessage::markdown(token_text(pair, mint))
        .with_keyboard(token_keyboard(address, pair))
        .with_link_preview(options.link_preview)
}

/// Render the token info text in `MarkdownV2`.
#[must_use]
pub fn token_text(pair: &PairSnapshot, mint: &MintLookup) -> String {
    let symbol = pair.symbol.as_deref().unwrap_or(NOT_AVAILABLE);
    let name = pair.name.as_deref().unwrap_or("Unknown");
    let price_usd = fixed(pair.price_usd.unwrap_or_default(), PRICE_PLACES);
    let price_native = fixed(pair.price_native.unwrap_or_default(), PRICE_PLACES);
    let liquidity = pair
        .liquidity_usd
        .map_or_else(|| NOT_AVAILABLE.to_string(), grouped);
    let volume = pair
        .volume_24h_usd
        .map_or_else(|| NOT_AVAILABLE.to_string(), grouped);

    let metadata = mint.metadata();
    let decimals = metadata
        .and_then(|m| m.decimals)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.to_string());
    let supply = metadata
        .and_then(|m| m.supply)
        .map_or_else(|| NOT_AVAILABLE.to_string(), grouped);

    let mut text = format!(
        "*{}* — {}\n\
        \n\
        💰 *Price:* ${}\n\
        💎 *Price \\(SOL\\):* {} SOL\n\
        💧 *Liquidity:* ${}\n\
        📊 *24h Volume:* ${}\n\
        🔢 *Decimals:* {}\n\
        📦 *Supply:* {}\n",
        escape_markdown(symbol),
        escape_markdown(name),
        escape_markdown(&price_usd),
        escape_markdown(&price_native),
        escape_markdown(&liquidity),
        escape_markdown(&volume),
        escape_markdown(&decimals),
        escape_markdown(&supply),
    );

    if let Some(chart) = &pair.chart_url {
        text.push_str(&format!("\n🔗 {}", link("View Chart", chart)));
    }
    if let Some(logo) = &pair.logo_url {
        text.push_str(&format!("\n{}", link("🖼️ Token Logo", logo)));
    }

    text
}

/// Copy-address and view-chart buttons on a single row.
///
/// The copy button is left out when the encoded address would exceed the
/// platform's callback data limit; the chart button when no chart is known.
#[must_use]
pub fn token_keyboard(address: &CandidateAddress, pair: &PairSnapshot) -> Keyboard {
    let mut row = Vec::with_capacity(2);

    let copy = CallbackAction::CopyAddress(address.as_str().to_string());
    if copy.fits_callback_limit() {
        row.push(Button::callback("📋 Copy CA", copy));
    }
    if let Some(chart) = &pair.chart_url {
        row.push(Button::url("📊 View Chart", chart.clone()));
    }

    Keyboard { rows: vec![row] }
}

/// Message sent when the copy button is pressed.
#[must_use]
pub fn copy_address_reply(address: &str) -> OutboundMessage {
    OutboundMessage::markdown(format!(
        "📋 *Contract Address:*\n`{}`",
        escape_code(address)
    ))
}

/// Message sent when no pairs are known for the address.
#[must_use]
pub fn not_found_reply() -> OutboundMessage {
    OutboundMessage::plain(NOT_FOUND_TEXT)
}

/// Generic apology for unexpected failures. Never carries error details.
#[must_use]
pub fn error_reply() -> OutboundMessage {
    OutboundMessage::plain(ERROR_TEXT)
}
