//! Response DTOs
//!
//! Every successful response uses the same envelope:
//! `{success, data?, count?, message?}`. Failures are rendered by
//! [`AppError`](crate::shared::error::AppError) with `success: false`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Standard success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// A collection with its length in `count`.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            message: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// A single record.
    pub fn item(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
        }
    }
}

impl ApiResponse<Value> {
    /// A create acknowledgement carrying the new ID under `id_field`.
    pub fn created(message: impl Into<String>, id_field: &str, id: i64) -> Self {
        let mut data = Map::new();
        data.insert(id_field.to_string(), Value::from(id));

        Self {
            success: true,
            data: Some(Value::Object(data)),
            count: None,
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// An acknowledgement with no payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            count: None,
            message: Some(message.into()),
        }
    }
}
