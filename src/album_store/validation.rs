//! Validation for album request bodies.
//!
//! Turns raw JSON into [`NewAlbum`] / [`AlbumUpdate`] values, collecting one
//! error per offending field so callers can report all of them at once.

use super::models::{AlbumUpdate, NewAlbum};
use serde_json::{Map, Value};
use std::fmt;

/// JSON type a field is required to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    String,
    Number,
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedType::String => write!(f, "string"),
            ExpectedType::Number => write!(f, "number"),
        }
    }
}

/// Validation error types
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NotAnObject,
    MissingField {
        field: &'static str,
    },
    WrongType {
        field: &'static str,
        expected: ExpectedType,
    },
    NegativeValue {
        field: &'static str,
        value: f64,
    },
}

impl ValidationError {
    /// Name of the offending field, if the error is about a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NotAnObject => None,
            ValidationError::MissingField { field }
            | ValidationError::WrongType { field, .. }
            | ValidationError::NegativeValue { field, .. } => Some(field),
        }
    }

    /// Short machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::NotAnObject => "model_type",
            ValidationError::MissingField { .. } => "missing",
            ValidationError::WrongType { expected, .. } => match expected {
                ExpectedType::Number => "float_type",
                ExpectedType::String => "string_type",
            },
            ValidationError::NegativeValue { .. } => "greater_than_equal",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotAnObject => {
                write!(f, "Request body must be a JSON object")
            }
            ValidationError::MissingField { field } => {
                write!(f, "Field '{}' is required", field)
            }
            ValidationError::WrongType { field, expected } => {
                write!(f, "Field '{}' must be a valid {}", field, expected)
            }
            ValidationError::NegativeValue { field, value } => {
                write!(f, "Field '{}' must be non-negative, got {}", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// Validate a create body: all four fields are required.
pub fn parse_new_album(body: &Value) -> ValidationResult<NewAlbum> {
    let fields = body.as_object().ok_or_else(|| vec![ValidationError::NotAnObject])?;
    let mut errors = Vec::new();

    let title = required(string_field(fields, "title"), "title", &mut errors);
    let artist = required(string_field(fields, "artist"), "artist", &mut errors);
    let price = required(price_field(fields, "price"), "price", &mut errors);
    let image_url = required(string_field(fields, "image_url"), "image_url", &mut errors);

    match (title, artist, price, image_url) {
        (Some(title), Some(artist), Some(price), Some(image_url)) if errors.is_empty() => {
            Ok(NewAlbum {
                title,
                artist,
                price,
                image_url,
            })
        }
        _ => Err(errors),
    }
}

/// Validate an update body: every field is optional, `null` counts as absent.
pub fn parse_album_update(body: &Value) -> ValidationResult<AlbumUpdate> {
    let fields = body.as_object().ok_or_else(|| vec![ValidationError::NotAnObject])?;
    let mut errors = Vec::new();

    let update = AlbumUpdate {
        title: optional(string_field(fields, "title"), &mut errors),
        artist: optional(string_field(fields, "artist"), &mut errors),
        price: optional(price_field(fields, "price"), &mut errors),
        image_url: optional(string_field(fields, "image_url"), &mut errors),
    };

    if errors.is_empty() {
        Ok(update)
    } else {
        Err(errors)
    }
}

fn required<T>(
    value: Result<Option<T>, ValidationError>,
    field: &'static str,
    errors: &mut Vec<ValidationError>,
) -> Option<T> {
    match value {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            errors.push(ValidationError::MissingField { field });
            None
        }
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

fn optional<T>(
    value: Result<Option<T>, ValidationError>,
    errors: &mut Vec<ValidationError>,
) -> Option<T> {
    value.unwrap_or_else(|err| {
        errors.push(err);
        None
    })
}

fn string_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: ExpectedType::String,
        }),
    }
}

fn price_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<f64>, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(value) if value < 0.0 => Err(ValidationError::NegativeValue { field, value }),
            Some(value) => Ok(Some(value)),
            None => Err(ValidationError::WrongType {
                field,
                expected: ExpectedType::Number,
            }),
        },
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: ExpectedType::Number,
        }),
    }
}
