//! Teloxide-backed [`Messenger`].

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, LinkPreviewOptions, ParseMode};

use crate::domain::{ButtonAction, ChatId, Keyboard, OutboundMessage, TextMode};
use crate::error::Result;
use crate::port::Messenger;

/// Sends replies and callback acknowledgements through the Bot API.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_message(&self, chat: ChatId, message: OutboundMessage) -> Result<()> {
        let mut request = self
            .bot
            .send_message(teloxide::types::ChatId(chat.0), message.text);

        if let Some(mode) = parse_mode(message.mode) {
            request = request.parse_mode(mode);
        }
        if let Some(keyboard) = message.keyboard.as_ref() {
            request = request.reply_markup(inline_keyboard(keyboard));
        }
        if !message.link_preview {
            request = request.link_preview_options(disabled_link_preview());
        }

        request.await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        let mut request = self.bot.answer_callback_query(callback_id.to_string());
        if let Some(text) = text {
            request = request.text(text);
        }
        request.await?;
        Ok(())
    }
}

fn parse_mode(mode: TextMode) -> Option<ParseMode> {
    match mode {
        TextMode::Plain => None,
        TextMode::MarkdownV2 => Some(ParseMode::MarkdownV2),
    }
}

fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// Convert a domain keyboard into Bot API inline markup.
#[must_use]
pub fn inline_keyboard(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    let rows = keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|button| match &button.action {
                ButtonAction::Url(url) => InlineKeyboardButton::url(&button.label, url.clone()),
                ButtonAction::Callback(action) => {
                    InlineKeyboardButton::callback(&button.label, action.encode())
                }
            })
            .collect::<Vec<_>>()
    });
    InlineKeyboardMarkup::new(rows)
}
