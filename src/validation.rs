//! Boundary validation for operation variables.
//!
//! Requests carry an untyped JSON `variables` object. Everything here turns
//! that object into typed inputs, collecting one message per offending field
//! so a caller sees every problem at once. Nothing reaches the store unless
//! the whole input is valid.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::database::{NewRecord, RecordPatch};

pub type Variables = Map<String, Value>;

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";
pub const INVALID_FIELDS_MESSAGE: &str = "Invalid field format";

const REQUIRED: &str = "This field is required";
const NOT_A_STRING: &str = "Expected a string";
const EMPTY: &str = "This field must not be empty";
const NOT_AN_ID: &str = "Expected an integer id";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    /// Field name -> reason
    pub field_errors: BTreeMap<String, String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_errors: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, field: impl Into<String>, reason: impl Into<String>) -> Self {
        self.field_errors.insert(field.into(), reason.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }
}

/// Validated login input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Accumulates per-field failures while reading variables
#[derive(Default)]
struct FieldCollector {
    errors: BTreeMap<String, String>,
}

impl FieldCollector {
    fn fail(&mut self, field: &str, reason: &str) {
        self.errors.insert(field.to_string(), reason.to_string());
    }

    /// Present, a string, and non-empty
    fn required_string(&mut self, vars: &Variables, field: &str) -> Option<String> {
        match vars.get(field) {
            None | Some(Value::Null) => {
                self.fail(field, REQUIRED);
                None
            }
            Some(Value::String(s)) if s.is_empty() => {
                self.fail(field, EMPTY);
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.fail(field, NOT_A_STRING);
                None
            }
        }
    }

    /// Absent or null means "not provided"; anything else must be a non-empty string
    fn optional_string(&mut self, vars: &Variables, field: &str) -> Option<String> {
        match vars.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => {
                self.fail(field, EMPTY);
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.fail(field, NOT_A_STRING);
                None
            }
        }
    }

    /// GraphQL `ID`: a JSON integer or a string holding one
    fn id(&mut self, vars: &Variables, field: &str) -> Option<i64> {
        let parsed = match vars.get(field) {
            None | Some(Value::Null) => {
                self.fail(field, REQUIRED);
                return None;
            }
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            Some(_) => None,
        };
        if parsed.is_none() {
            self.fail(field, NOT_AN_ID);
        }
        parsed
    }

    fn finish(self, message: &str) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                message: message.to_string(),
                field_errors: self.errors,
            })
        }
    }
}

/// Create requires non-empty `name`, `category` and `accessory`
pub fn validate_create(vars: &Variables) -> Result<NewRecord, ValidationError> {
    let mut fields = FieldCollector::default();
    let name = fields.required_string(vars, "name");
    let category = fields.required_string(vars, "category");
    let accessory = fields.required_string(vars, "accessory");
    fields.finish(REQUIRED_FIELDS_MESSAGE)?;

    match (name, category, accessory) {
        (Some(name), Some(category), Some(accessory)) => {
            Ok(NewRecord::new(name, category, accessory))
        }
        _ => Err(ValidationError::new(REQUIRED_FIELDS_MESSAGE)),
    }
}

/// Login requires non-empty `username` and `password`
pub fn validate_login(vars: &Variables) -> Result<LoginInput, ValidationError> {
    let mut fields = FieldCollector::default();
    let username = fields.required_string(vars, "username");
    let password = fields.required_string(vars, "password");
    fields.finish(REQUIRED_FIELDS_MESSAGE)?;

    match (username, password) {
        (Some(username), Some(password)) => Ok(LoginInput { username, password }),
        _ => Err(ValidationError::new(REQUIRED_FIELDS_MESSAGE)),
    }
}

/// Update requires `id`; the remaining fields are optional
pub fn validate_update(vars: &Variables) -> Result<(i64, RecordPatch), ValidationError> {
    let mut fields = FieldCollector::default();
    let id = fields.id(vars, "id");
    let patch = RecordPatch {
        name: fields.optional_string(vars, "name"),
        category: fields.optional_string(vars, "category"),
        accessory: fields.optional_string(vars, "accessory"),
    };
    fields.finish(INVALID_FIELDS_MESSAGE)?;

    id.map(|id| (id, patch))
        .ok_or_else(|| ValidationError::new(INVALID_FIELDS_MESSAGE))
}

pub fn parse_id(vars: &Variables) -> Result<i64, ValidationError> {
    let mut fields = FieldCollector::default();
    let id = fields.id(vars, "id");
    fields.finish(INVALID_FIELDS_MESSAGE)?;
    id.ok_or_else(|| ValidationError::new(INVALID_FIELDS_MESSAGE))
}

/// Optional string that may be empty; only a wrong type is an error
pub fn optional_identity(vars: &Variables, field: &str) -> Result<Option<String>, ValidationError> {
    match vars.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::new(INVALID_FIELDS_MESSAGE).with_field(field, NOT_A_STRING)),
    }
}
