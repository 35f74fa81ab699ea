//! Request parameters: named fields carrying JSON values or file uploads.

use bytes::Bytes;
use futures::Stream;
use serde_json::Value;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::pin::Pin;

use crate::{Error, ErrorContext, Result};

/// Byte stream accepted as an upload body.
pub type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send + Sync + 'static>>;

/// Where the bytes of an [`InputFile`] come from.
pub enum FileSource {
    /// In-memory content.
    Bytes(Bytes),
    /// A local file, opened and streamed when the request is sent.
    Path(PathBuf),
    /// An arbitrary byte stream. It is consumed by the first request it is sent with.
    Stream(ByteStream),
}

/// A binary upload (photo, audio, document, certificate, ...).
///
/// Sending an `InputFile` always forces `multipart/form-data` encoding. To
/// reuse a file that Telegram already stores, pass its `file_id` (or an
/// HTTP URL) as a plain string instead.
pub struct InputFile {
    file_name: String,
    mime: Option<String>,
    source: FileSource,
}

impl InputFile {
    pub fn bytes(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: None,
            source: FileSource::Bytes(data.into()),
        }
    }

    /// Upload a local file. The file name sent to Telegram is the last path component.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Self {
            file_name,
            mime: None,
            source: FileSource::Path(path),
        }
    }

    pub fn stream<S>(file_name: impl Into<String>, stream: S) -> Self
    where
        S: Stream<Item = std::io::Result<Bytes>> + Send + Sync + 'static,
    {
        Self {
            file_name: file_name.into(),
            mime: None,
            source: FileSource::Stream(Box::pin(stream)),
        }
    }

    /// Set the MIME type of the part (e.g. `image/png`).
    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    pub fn source(&self) -> &FileSource {
        &self.source
    }

    pub fn into_parts(self) -> (String, Option<String>, FileSource) {
        (self.file_name, self.mime, self.source)
    }
}

impl fmt::Debug for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            FileSource::Bytes(b) => format!("bytes({})", b.len()),
            FileSource::Path(p) => format!("path({})", p.display()),
            FileSource::Stream(_) => "stream".to_string(),
        };
        f.debug_struct("InputFile")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("source", &source)
            .finish()
    }
}

/// Value of a single request field.
#[derive(Debug)]
pub enum FieldValue {
    /// Scalar or structured JSON value.
    Json(Value),
    /// Binary upload.
    File(InputFile),
}

impl FieldValue {
    /// True for plain strings (file ids, URLs, text).
    pub fn is_text(&self) -> bool {
        matches!(self, FieldValue::Json(Value::String(_)))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            FieldValue::Json(v) => Some(v),
            FieldValue::File(_) => None,
        }
    }

    /// Truthiness used by required-field validation.
    ///
    /// `null`, `false`, `0` and `""` are falsy; everything else (including
    /// empty arrays, empty objects and files) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::File(_) => true,
            FieldValue::Json(value) => match value {
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64().map_or(true, |x| x != 0.0),
                Value::String(s) => !s.is_empty(),
                Value::Array(_) | Value::Object(_) => true,
            },
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Json(value)
    }
}

impl From<InputFile> for FieldValue {
    fn from(file: InputFile) -> Self {
        FieldValue::File(file)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Json(Value::String(s.to_string()))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Json(Value::String(s))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Json(Value::Bool(b))
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Json(Value::from(n))
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Json(Value::from(n))
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Json(Value::from(n))
    }
}

/// Named request fields, kept in field-name order.
#[derive(Debug, Default)]
pub struct Parameters {
    fields: BTreeMap<String, FieldValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }

    /// Build parameters from a JSON object.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(Error::validation_with_context(
                "'parameters' must be a JSON object",
                ErrorContext::new()
                    .with_details(format!("got {}", other))
                    .with_source("parameters"),
            )),
        }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Parameters {
    type Item = (String, FieldValue);
    type IntoIter = btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_falsy_rules() {
        assert!(!FieldValue::from(json!(null)).is_truthy());
        assert!(!FieldValue::from(false).is_truthy());
        assert!(!FieldValue::from(0).is_truthy());
        assert!(!FieldValue::from(0.0).is_truthy());
        assert!(!FieldValue::from("").is_truthy());

        assert!(FieldValue::from(-1).is_truthy());
        assert!(FieldValue::from("0").is_truthy());
        assert!(FieldValue::from(json!([])).is_truthy());
        assert!(FieldValue::from(json!({})).is_truthy());
        assert!(FieldValue::from(InputFile::bytes("a.bin", vec![0u8])).is_truthy());
    }

    #[test]
    fn from_json_requires_object() {
        let params = Parameters::from_json(json!({"chat_id": 1, "text": "hi"})).unwrap();
        assert_eq!(params.len(), 2);
        assert!(params.get("text").unwrap().is_text());
        assert!(!params.get("chat_id").unwrap().is_text());

        let err = Parameters::from_json(json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn input_file_path_uses_last_component() {
        let file = InputFile::path("/tmp/photos/logo.png").mime("image/png");
        assert_eq!(file.file_name(), "logo.png");
        assert_eq!(file.mime_type(), Some("image/png"));
        assert!(matches!(file.source(), FileSource::Path(_)));
    }
}
