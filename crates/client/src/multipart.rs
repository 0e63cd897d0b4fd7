//! Multipart form encoding for file-bearing create/update calls
//!
//! The asset and employee endpoints accept `multipart/form-data` when a
//! photo is attached. Scalar fields become plain text parts; nested objects
//! (custom fields, address blocks) are flattened one level into bracketed
//! keys (`custom_fields[cpu]`), matching what the backend's form parser
//! expects. A nested object is never serialized as a single JSON string.

use crate::error::ClientError;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

/// An in-memory file attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Flatten a JSON object into `(key, value)` text parts.
///
/// With `prefix` set, every key is wrapped first: `employee[name]`,
/// `employee[custom_fields][cpu]`. Nulls are skipped entirely; arrays are
/// carried as their JSON encoding under a single key.
pub fn flatten_fields(prefix: Option<&str>, fields: &Map<String, Value>) -> Vec<(String, String)> {
    let mut parts = Vec::new();
    for (key, value) in fields {
        let outer = match prefix {
            Some(prefix) => format!("{prefix}[{key}]"),
            None => key.clone(),
        };
        match value {
            Value::Null => {}
            Value::Object(nested) => {
                for (sub_key, sub_value) in nested {
                    if let Some(text) = scalar_text(sub_value) {
                        parts.push((format!("{outer}[{sub_key}]"), text));
                    }
                }
            }
            _ => {
                if let Some(text) = scalar_text(value) {
                    parts.push((outer, text));
                }
            }
        }
    }
    parts
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        // Arrays and doubly nested objects go through as JSON text; the
        // backend treats these keys as opaque.
        other => Some(other.to_string()),
    }
}

/// Build the multipart form for a file-bearing payload.
///
/// `fields` must serialize to a JSON object (the file itself is not part of
/// it); the file is attached under `file_key`.
pub(crate) fn form_for<T: serde::Serialize>(
    prefix: Option<&str>,
    fields: &T,
    file_key: &str,
    file: Option<&FileUpload>,
) -> Result<Form, ClientError> {
    let value = serde_json::to_value(fields)?;
    let Value::Object(map) = value else {
        return Err(ClientError::Configuration(
            "multipart payload must serialize to an object".into(),
        ));
    };

    let mut form = Form::new();
    for (key, text) in flatten_fields(prefix, &map) {
        form = form.text(key, text);
    }
    if let Some(file) = file {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|_| {
                ClientError::Configuration(format!("invalid content type: {}", file.content_type))
            })?;
        form = form.part(file_key.to_string(), part);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn scalars_pass_through_unquoted() {
        let fields = object(json!({
            "name": "MacBook Pro",
            "purchase_price": 2499.0,
            "is_active": true,
        }));
        let parts = flatten_fields(None, &fields);
        assert!(parts.contains(&("name".into(), "MacBook Pro".into())));
        assert!(parts.contains(&("purchase_price".into(), "2499.0".into())));
        assert!(parts.contains(&("is_active".into(), "true".into())));
    }

    #[test]
    fn nested_objects_become_bracketed_keys() {
        let fields = object(json!({
            "name": "MacBook Pro",
            "custom_fields": { "cpu": "M3", "ram_gb": 32 },
        }));
        let parts = flatten_fields(None, &fields);
        assert!(parts.contains(&("custom_fields[cpu]".into(), "M3".into())));
        assert!(parts.contains(&("custom_fields[ram_gb]".into(), "32".into())));
        // The object itself must never appear as one JSON-stringified part.
        assert!(parts.iter().all(|(key, _)| key != "custom_fields"));
    }

    #[test]
    fn prefix_wraps_every_key() {
        let fields = object(json!({
            "first_name": "Ada",
            "custom_fields": { "badge": "B-12" },
        }));
        let parts = flatten_fields(Some("employee"), &fields);
        assert!(parts.contains(&("employee[first_name]".into(), "Ada".into())));
        assert!(parts.contains(&("employee[custom_fields][badge]".into(), "B-12".into())));
    }

    #[test]
    fn nulls_are_omitted() {
        let fields = object(json!({
            "notes": null,
            "custom_fields": { "empty": null, "kept": "yes" },
        }));
        let parts = flatten_fields(None, &fields);
        assert_eq!(parts, vec![("custom_fields[kept]".into(), "yes".into())]);
    }
}
