//! One async method per Bot API endpoint.
//!
//! All of them follow the same convention: `parameters` become the request
//! body, `options` may override the HTTP method, add headers or force
//! multipart. Validation and encoding rules come from
//! [`endpoints`](crate::client::endpoints).

use crate::client::core::BotApi;
use crate::client::endpoints::*;
use crate::types::{ApiEnvelope, CallOptions, Parameters};
use crate::Result;

macro_rules! endpoint_methods {
    (required: $($(#[$meta:meta])* $fn_name:ident => $endpoint:ident;)*) => {
        impl BotApi {
            $(
                $(#[$meta])*
                pub async fn $fn_name(
                    &self,
                    parameters: Parameters,
                    options: Option<CallOptions>,
                ) -> Result<ApiEnvelope> {
                    self.call_endpoint(&$endpoint, Some(parameters), options).await
                }
            )*
        }
    };
    (optional: $($(#[$meta:meta])* $fn_name:ident => $endpoint:ident;)*) => {
        impl BotApi {
            $(
                $(#[$meta])*
                pub async fn $fn_name(
                    &self,
                    parameters: Option<Parameters>,
                    options: Option<CallOptions>,
                ) -> Result<ApiEnvelope> {
                    self.call_endpoint(&$endpoint, parameters, options).await
                }
            )*
        }
    };
}

impl BotApi {
    /// Basic information about the bot. Sent as a `GET` with no body.
    pub async fn get_me(&self, options: Option<CallOptions>) -> Result<ApiEnvelope> {
        self.call_endpoint(&GET_ME, None, options).await
    }
}

endpoint_methods! {
    required:
    /// Requires `chat_id` and `text`.
    send_message => SEND_MESSAGE;
    /// Requires `chat_id`, `from_chat_id` and `message_id`.
    forward_message => FORWARD_MESSAGE;
    /// Requires `chat_id` and `photo` (an [`InputFile`](crate::types::InputFile) or a file id/URL).
    send_photo => SEND_PHOTO;
    /// Requires `chat_id` and `audio`.
    send_audio => SEND_AUDIO;
    /// Requires `chat_id` and `document`.
    send_document => SEND_DOCUMENT;
    /// Requires `chat_id` and `sticker`.
    send_sticker => SEND_STICKER;
    /// Requires `chat_id` and `video`.
    send_video => SEND_VIDEO;
    /// Requires `chat_id` and `voice`.
    send_voice => SEND_VOICE;
    /// Requires `chat_id`, `latitude` and `longitude`.
    send_location => SEND_LOCATION;
    /// Requires `chat_id`, `latitude`, `longitude`, `title` and `address`.
    send_venue => SEND_VENUE;
    /// Requires `chat_id`, `phone_number` and `first_name`.
    send_contact => SEND_CONTACT;
    /// Requires `chat_id` and `action` (`typing`, `upload_photo`, ...).
    send_chat_action => SEND_CHAT_ACTION;
    /// Requires `user_id`.
    get_user_profile_photos => GET_USER_PROFILE_PHOTOS;
    /// Requires `file_id`. On success `result.file_url` holds the download URL.
    get_file => GET_FILE;
    /// Requires `chat_id` and `user_id`.
    kick_chat_member => KICK_CHAT_MEMBER;
    /// Requires `chat_id` and `user_id`.
    unban_chat_member => UNBAN_CHAT_MEMBER;
    /// Requires `callback_query_id`.
    answer_callback_query => ANSWER_CALLBACK_QUERY;
    /// Requires `inline_query_id` and `results`; structured `results` are sent as JSON text.
    answer_inline_query => ANSWER_INLINE_QUERY;
    /// Requires `text`.
    edit_message_text => EDIT_MESSAGE_TEXT;
}

endpoint_methods! {
    optional:
    get_updates => GET_UPDATES;
    /// Multipart when `certificate` is an uploaded file. Pass no `url` to remove the webhook.
    set_webhook => SET_WEBHOOK;
    edit_message_caption => EDIT_MESSAGE_CAPTION;
    edit_message_reply_markup => EDIT_MESSAGE_REPLY_MARKUP;
}
