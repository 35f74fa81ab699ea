//! Endpoint table: what each Bot API method requires and which field, when
//! it holds a file, switches the body to multipart.

use crate::client::validation::require;
use crate::pipeline::stringify_fields;
use crate::types::{Body, CallOptions, HttpMethod, Parameters};
use crate::Result;

/// Extra work done on a successful envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    None,
    /// Add `result.file_url` built from `result.file_path`.
    FileUrl,
}

/// When the payload field switches the body to multipart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadTrigger {
    /// Any non-string value (an upload); strings are file ids or URLs.
    NonText,
    /// Any truthy value, strings included.
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub http_method: HttpMethod,
    /// `None` skips validation entirely (parameters may be absent).
    pub required: Option<&'static [&'static str]>,
    /// Field that can force multipart encoding.
    pub payload: Option<&'static str>,
    pub payload_trigger: PayloadTrigger,
    /// Fields JSON-encoded into strings before the body is built.
    pub encoded_fields: &'static [&'static str],
    /// Whether the parameters become the request body.
    pub sends_body: bool,
    pub post_process: PostProcess,
}

impl Endpoint {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            http_method: HttpMethod::Post,
            required: None,
            payload: None,
            payload_trigger: PayloadTrigger::NonText,
            encoded_fields: &[],
            sends_body: true,
            post_process: PostProcess::None,
        }
    }

    const fn required(mut self, fields: &'static [&'static str]) -> Self {
        self.required = Some(fields);
        self
    }

    const fn payload(mut self, field: &'static str) -> Self {
        self.payload = Some(field);
        self
    }

    const fn payload_when_present(mut self, field: &'static str) -> Self {
        self.payload = Some(field);
        self.payload_trigger = PayloadTrigger::Present;
        self
    }

    const fn encoded(mut self, fields: &'static [&'static str]) -> Self {
        self.encoded_fields = fields;
        self
    }

    const fn get_without_body(mut self) -> Self {
        self.http_method = HttpMethod::Get;
        self.sends_body = false;
        self
    }

    const fn post_process(mut self, post: PostProcess) -> Self {
        self.post_process = post;
        self
    }

    /// Validate parameters and assemble call options.
    ///
    /// Caller-supplied `method` and `multipart` take precedence over the
    /// endpoint defaults; the parameters always replace the caller's body
    /// for endpoints that send one.
    pub fn build_options(
        &self,
        parameters: Option<Parameters>,
        options: Option<CallOptions>,
    ) -> Result<CallOptions> {
        if let Some(required) = self.required {
            require(parameters.as_ref(), required)?;
        }

        let mut options = options.unwrap_or_default();
        if options.method.is_none() {
            options.method = Some(self.http_method);
        }
        if !self.sends_body {
            return Ok(options);
        }

        let parameters = parameters
            .map(|p| stringify_fields(p, self.encoded_fields))
            .transpose()?;

        if options.multipart.is_none() {
            let needs_form = match (self.payload, &parameters) {
                (Some(field), Some(params)) => {
                    params.get(field).is_some_and(|v| match self.payload_trigger {
                        PayloadTrigger::NonText => !v.is_text(),
                        PayloadTrigger::Present => v.is_truthy(),
                    })
                }
                _ => false,
            };
            if needs_form {
                options.multipart = Some(true);
            }
        }

        options.body = parameters.map(Body::Fields);
        Ok(options)
    }
}

pub const GET_ME: Endpoint = Endpoint::new("getMe").get_without_body();
pub const GET_UPDATES: Endpoint = Endpoint::new("getUpdates");
pub const SEND_MESSAGE: Endpoint = Endpoint::new("sendMessage").required(&["chat_id", "text"]);
pub const FORWARD_MESSAGE: Endpoint =
    Endpoint::new("forwardMessage").required(&["chat_id", "from_chat_id", "message_id"]);
pub const SEND_PHOTO: Endpoint = Endpoint::new("sendPhoto")
    .required(&["chat_id", "photo"])
    .payload("photo");
pub const SEND_AUDIO: Endpoint = Endpoint::new("sendAudio")
    .required(&["chat_id", "audio"])
    .payload("audio");
pub const SEND_DOCUMENT: Endpoint = Endpoint::new("sendDocument")
    .required(&["chat_id", "document"])
    .payload("document");
pub const SEND_STICKER: Endpoint = Endpoint::new("sendSticker")
    .required(&["chat_id", "sticker"])
    .payload("sticker");
pub const SEND_VIDEO: Endpoint = Endpoint::new("sendVideo")
    .required(&["chat_id", "video"])
    .payload("video");
pub const SEND_VOICE: Endpoint = Endpoint::new("sendVoice")
    .required(&["chat_id", "voice"])
    .payload("voice");
pub const SEND_LOCATION: Endpoint =
    Endpoint::new("sendLocation").required(&["chat_id", "latitude", "longitude"]);
pub const SEND_VENUE: Endpoint = Endpoint::new("sendVenue")
    .required(&["chat_id", "latitude", "longitude", "title", "address"]);
pub const SEND_CONTACT: Endpoint =
    Endpoint::new("sendContact").required(&["chat_id", "phone_number", "first_name"]);
pub const SEND_CHAT_ACTION: Endpoint =
    Endpoint::new("sendChatAction").required(&["chat_id", "action"]);
pub const GET_USER_PROFILE_PHOTOS: Endpoint =
    Endpoint::new("getUserProfilePhotos").required(&["user_id"]);
pub const GET_FILE: Endpoint = Endpoint::new("getFile")
    .required(&["file_id"])
    .post_process(PostProcess::FileUrl);
pub const KICK_CHAT_MEMBER: Endpoint =
    Endpoint::new("kickChatMember").required(&["chat_id", "user_id"]);
pub const UNBAN_CHAT_MEMBER: Endpoint =
    Endpoint::new("unbanChatMember").required(&["chat_id", "user_id"]);
pub const SET_WEBHOOK: Endpoint = Endpoint::new("setWebhook").payload_when_present("certificate");
pub const ANSWER_CALLBACK_QUERY: Endpoint =
    Endpoint::new("answerCallbackQuery").required(&["callback_query_id"]);
pub const ANSWER_INLINE_QUERY: Endpoint = Endpoint::new("answerInlineQuery")
    .required(&["inline_query_id", "results"])
    .encoded(&["results"]);
pub const EDIT_MESSAGE_TEXT: Endpoint = Endpoint::new("editMessageText").required(&["text"]);
pub const EDIT_MESSAGE_CAPTION: Endpoint = Endpoint::new("editMessageCaption");
pub const EDIT_MESSAGE_REPLY_MARKUP: Endpoint = Endpoint::new("editMessageReplyMarkup");

/// Every known endpoint.
pub const ENDPOINTS: &[Endpoint] = &[
    GET_ME,
    GET_UPDATES,
    SEND_MESSAGE,
    FORWARD_MESSAGE,
    SEND_PHOTO,
    SEND_AUDIO,
    SEND_DOCUMENT,
    SEND_STICKER,
    SEND_VIDEO,
    SEND_VOICE,
    SEND_LOCATION,
    SEND_VENUE,
    SEND_CONTACT,
    SEND_CHAT_ACTION,
    GET_USER_PROFILE_PHOTOS,
    GET_FILE,
    KICK_CHAT_MEMBER,
    UNBAN_CHAT_MEMBER,
    SET_WEBHOOK,
    ANSWER_CALLBACK_QUERY,
    ANSWER_INLINE_QUERY,
    EDIT_MESSAGE_TEXT,
    EDIT_MESSAGE_CAPTION,
    EDIT_MESSAGE_REPLY_MARKUP,
];

pub fn lookup(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InputFile;
    use serde_json::{json, Value};

    #[test]
    fn names_are_unique() {
        for (i, a) in ENDPOINTS.iter().enumerate() {
            assert!(
                ENDPOINTS[i + 1..].iter().all(|b| b.name != a.name),
                "duplicate endpoint {}",
                a.name
            );
        }
        assert_eq!(lookup("sendVenue"), Some(&SEND_VENUE));
        assert!(lookup("sendTelepathy").is_none());
    }

    #[test]
    fn file_payload_forces_multipart() {
        let params = Parameters::new()
            .with("chat_id", 1)
            .with("photo", InputFile::bytes("logo.png", vec![1u8]));
        let opts = SEND_PHOTO.build_options(Some(params), None).unwrap();
        assert_eq!(opts.multipart, Some(true));
        assert!(matches!(opts.body, Some(Body::Fields(_))));
    }

    #[test]
    fn string_payload_stays_json() {
        let params = Parameters::new().with("chat_id", 1).with("photo", "AgADBAADv6cxG");
        let opts = SEND_PHOTO.build_options(Some(params), None).unwrap();
        assert_eq!(opts.multipart, None);
    }

    #[test]
    fn voice_uses_its_own_payload_field() {
        let params = Parameters::new().with("chat_id", 1).with("voice", "file-id");
        let opts = SEND_VOICE.build_options(Some(params), None).unwrap();
        assert_eq!(opts.multipart, None);
    }

    #[test]
    fn caller_multipart_choice_wins() {
        let params = Parameters::new().with("chat_id", 1).with("photo", "file-id");
        let opts = SEND_PHOTO
            .build_options(Some(params), Some(CallOptions::new().multipart(true)))
            .unwrap();
        assert_eq!(opts.multipart, Some(true));
    }

    #[test]
    fn get_me_is_get_without_body() {
        let opts = GET_ME.build_options(None, None).unwrap();
        assert_eq!(opts.method, Some(HttpMethod::Get));
        assert!(opts.body.is_none());

        let opts = GET_ME
            .build_options(None, Some(CallOptions::new().method(HttpMethod::Post)))
            .unwrap();
        assert_eq!(opts.method, Some(HttpMethod::Post));
    }

    #[test]
    fn optional_endpoints_accept_absent_parameters() {
        for endpoint in [GET_UPDATES, SET_WEBHOOK, EDIT_MESSAGE_CAPTION, EDIT_MESSAGE_REPLY_MARKUP] {
            let opts = endpoint.build_options(None, None).unwrap();
            assert!(opts.body.is_none(), "{}", endpoint.name);
        }
    }

    #[test]
    fn webhook_certificate_forces_multipart() {
        let params = Parameters::new()
            .with("url", "https://example.com/hook")
            .with("certificate", InputFile::bytes("cert.pem", b"-----BEGIN".to_vec()));
        let opts = SET_WEBHOOK.build_options(Some(params), None).unwrap();
        assert_eq!(opts.multipart, Some(true));

        let params = Parameters::new().with("url", "");
        let opts = SET_WEBHOOK.build_options(Some(params), None).unwrap();
        assert_eq!(opts.multipart, None);
    }

    #[test]
    fn webhook_string_certificate_still_uses_multipart() {
        let params = Parameters::new()
            .with("url", "https://example.com/hook")
            .with("certificate", "/etc/ssl/hook.pem");
        let opts = SET_WEBHOOK.build_options(Some(params), None).unwrap();
        assert_eq!(opts.multipart, Some(true));

        let params = Parameters::new()
            .with("url", "https://example.com/hook")
            .with("certificate", "");
        let opts = SET_WEBHOOK.build_options(Some(params), None).unwrap();
        assert_eq!(opts.multipart, None);
    }

    #[test]
    fn string_media_payload_stays_json() {
        let params = Parameters::new().with("chat_id", 1).with("photo", "AgADBAADv6cxG");
        let opts = SEND_PHOTO.build_options(Some(params), None).unwrap();
        assert_eq!(opts.multipart, None);
    }

    #[test]
    fn inline_results_are_encoded() {
        let results = json!([{"type": "article", "id": "1", "title": "t"}]);
        let params = Parameters::new()
            .with("inline_query_id", "q1")
            .with("results", results.clone());
        let opts = ANSWER_INLINE_QUERY.build_options(Some(params), None).unwrap();
        let Some(Body::Fields(params)) = opts.body else {
            panic!("Expected field body");
        };
        let encoded = params.get("results").and_then(|v| v.as_json()).unwrap();
        let decoded: Value = serde_json::from_str(encoded.as_str().unwrap()).unwrap();
        assert_eq!(decoded, results);
    }

    #[test]
    fn missing_required_field_fails_before_options() {
        let params = Parameters::new()
            .with("chat_id", 1)
            .with("latitude", 48.85)
            .with("longitude", 2.35)
            .with("title", "Louvre");
        let err = SEND_VENUE.build_options(Some(params), None).unwrap_err();
        assert!(err.to_string().contains("'address' parameter is required."));
    }
}
