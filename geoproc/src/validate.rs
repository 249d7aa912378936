//! Request validation.
//!
//! Turns a decoded JSON request body of the shape
//! `{"points": [{"lat": f64, "lng": f64}, ...]}` into a list of [`Point`]s,
//! or a [`ValidationErrors`] listing every offending field. Validation does
//! not stop at the first problem: a body with three bad coordinates reports
//! all three.
//!
//! Each error carries a machine-readable `type`, a `loc` path rooted at
//! `"body"`, a human-readable `msg`, the offending `input` and, for range
//! and length constraints, a `ctx` object:
//!
//! ```json
//! {
//!   "type": "less_than_equal",
//!   "loc": ["body", "points", 0, "lat"],
//!   "msg": "Input should be less than or equal to 90",
//!   "input": 91.0,
//!   "ctx": {"le": 90}
//! }
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::point::{Point, MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};

/// One element of an error location path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocItem {
    /// Object key.
    Key(String),
    /// Array index.
    Index(usize),
}

impl From<&str> for LocItem {
    fn from(key: &str) -> Self {
        LocItem::Key(key.to_string())
    }
}

impl From<usize> for LocItem {
    fn from(index: usize) -> Self {
        LocItem::Index(index)
    }
}

impl fmt::Display for LocItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocItem::Key(key) => write!(f, "{}", key),
            LocItem::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Kind of validation failure, serialized as its snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Body is not valid JSON.
    JsonInvalid,
    /// Required field absent.
    Missing,
    /// Expected an array.
    ListType,
    /// Expected an object.
    DictType,
    /// Array has fewer elements than required.
    TooShort,
    /// Expected a number.
    FloatType,
    /// String could not be parsed as a number.
    FloatParsing,
    /// Number below the allowed minimum.
    GreaterThanEqual,
    /// Number above the allowed maximum.
    LessThanEqual,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Failure kind.
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    /// Path to the offending field.
    pub loc: Vec<LocItem>,
    /// Human-readable message.
    pub msg: String,
    /// The value that failed validation.
    pub input: Value,
    /// Constraint context, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl FieldError {
    fn new(kind: ErrorKind, loc: Vec<LocItem>, msg: impl Into<String>, input: &Value) -> Self {
        Self {
            kind,
            loc,
            msg: msg.into(),
            input: input.clone(),
            ctx: None,
        }
    }

    fn with_ctx(mut self, ctx: Value) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// The location rendered as `body -> points -> 0 -> lat`.
    pub fn field_path(&self) -> String {
        self.loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field: '{}', Error: {}", self.field_path(), self.msg)
    }
}

/// Every validation failure found in one request.
///
/// Serializes as a plain JSON array of [`FieldError`]s.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Build from a list of field errors.
    ///
    /// Returns `None` if the list is empty.
    pub fn new(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Error for a body that could not be decoded as JSON.
    ///
    /// The location is `["body", <char offset of the error>]`.
    pub fn json_invalid(body: &[u8], err: &serde_json::Error) -> Self {
        let error = FieldError::new(
            ErrorKind::JsonInvalid,
            vec![LocItem::from("body"), LocItem::from(error_position(body, err))],
            "JSON decode error",
            &json!({}),
        )
        .with_ctx(json!({ "error": err.to_string() }));
        Self {
            errors: vec![error],
        }
    }

    /// The individual field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Number of field errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether there are no field errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Decode raw request bytes as JSON and validate them.
///
/// Undecodable input is reported as a single `json_invalid` error.
pub fn validate_body(body: &[u8]) -> Result<Vec<Point>, ValidationErrors> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ValidationErrors::json_invalid(body, &e))?;
    validate_points(&value)
}

/// Character offset of a decode error within the body.
///
/// Unexpected end of input points one past the last character.
fn error_position(body: &[u8], err: &serde_json::Error) -> usize {
    let end = if err.is_eof() {
        body.len()
    } else {
        let line_start: usize = body
            .split(|&b| b == b'\n')
            .take(err.line().saturating_sub(1))
            .map(|line| line.len() + 1)
            .sum();
        (line_start + err.column().saturating_sub(1)).min(body.len())
    };
    String::from_utf8_lossy(&body[..end]).chars().count()
}

/// Validate a decoded request body and extract its points.
///
/// # Example
///
/// ```
/// use geoproc::validate::validate_points;
/// use serde_json::json;
///
/// let points = validate_points(&json!({"points": [{"lat": 1.0, "lng": 2.0}]})).unwrap();
/// assert_eq!(points.len(), 1);
///
/// let errors = validate_points(&json!({
///     "points": [{"lat": 91.0, "lng": 0.0}, {"lat": 0.0, "lng": -181.0}]
/// }))
/// .unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_points(body: &Value) -> Result<Vec<Point>, ValidationErrors> {
    let mut errors = Vec::new();
    let points = validate_request(body, &mut errors);

    match ValidationErrors::new(errors) {
        Some(errors) => Err(errors),
        None => Ok(points),
    }
}

fn child(loc: &[LocItem], item: impl Into<LocItem>) -> Vec<LocItem> {
    let mut loc = loc.to_vec();
    loc.push(item.into());
    loc
}

fn validate_request(body: &Value, errors: &mut Vec<FieldError>) -> Vec<Point> {
    let root = vec![LocItem::from("body")];

    let Some(object) = body.as_object() else {
        errors.push(dict_type(root, body));
        return Vec::new();
    };

    let loc = child(&root, "points");
    let Some(points) = object.get("points") else {
        errors.push(FieldError::new(ErrorKind::Missing, loc, "Field required", body));
        return Vec::new();
    };

    let Some(items) = points.as_array() else {
        errors.push(FieldError::new(
            ErrorKind::ListType,
            loc,
            "Input should be a valid list",
            points,
        ));
        return Vec::new();
    };

    if items.is_empty() {
        errors.push(
            FieldError::new(
                ErrorKind::TooShort,
                loc,
                "List should have at least 1 item after validation, not 0",
                points,
            )
            .with_ctx(json!({ "field_type": "List", "min_length": 1, "actual_length": 0 })),
        );
        return Vec::new();
    }

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| validate_point(item, child(&loc, index), errors))
        .collect()
}

fn validate_point(item: &Value, loc: Vec<LocItem>, errors: &mut Vec<FieldError>) -> Option<Point> {
    let Some(object) = item.as_object() else {
        errors.push(dict_type(loc, item));
        return None;
    };

    // Both coordinates are checked before bailing so each gets reported.
    let lat = validate_coordinate(object, item, "lat", (MIN_LAT, MAX_LAT), &loc, errors);
    let lng = validate_coordinate(object, item, "lng", (MIN_LNG, MAX_LNG), &loc, errors);

    Some(Point {
        lat: lat?,
        lng: lng?,
    })
}

fn validate_coordinate(
    object: &Map<String, Value>,
    parent: &Value,
    field: &str,
    (min, max): (f64, f64),
    loc: &[LocItem],
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let loc = child(loc, field);

    let Some(value) = object.get(field) else {
        errors.push(FieldError::new(ErrorKind::Missing, loc, "Field required", parent));
        return None;
    };

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                errors.push(FieldError::new(
                    ErrorKind::FloatParsing,
                    loc,
                    "Input should be a valid number, unable to parse string as a number",
                    value,
                ));
                return None;
            }
        },
        _ => None,
    };

    let Some(number) = number else {
        errors.push(FieldError::new(
            ErrorKind::FloatType,
            loc,
            "Input should be a valid number",
            value,
        ));
        return None;
    };

    // NaN is reported against the lower bound.
    if number.is_nan() || number < min {
        errors.push(
            FieldError::new(
                ErrorKind::GreaterThanEqual,
                loc,
                format!("Input should be greater than or equal to {}", min),
                value,
            )
            .with_ctx(json!({ "ge": min as i64 })),
        );
        return None;
    }
    if number > max {
        errors.push(
            FieldError::new(
                ErrorKind::LessThanEqual,
                loc,
                format!("Input should be less than or equal to {}", max),
                value,
            )
            .with_ctx(json!({ "le": max as i64 })),
        );
        return None;
    }

    Some(number)
}

fn dict_type(loc: Vec<LocItem>, input: &Value) -> FieldError {
    FieldError::new(
        ErrorKind::DictType,
        loc,
        "Input should be a valid dictionary or object to extract fields from",
        input,
    )
}
