// src/shared/validation.rs
use email_address::EmailAddress;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field, nested fields use `parent[index].child`
    #[schema(example = "email")]
    pub field: String,

    #[schema(example = "must be a valid email address")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Appends the failures of a later pass.
    pub fn and(mut self, other: ValidationErrors) -> Self {
        self.0.extend(other.0);
        self
    }
}

/// Collects every field failure of a payload instead of stopping at the first.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length is counted in characters, not bytes.
    pub fn length(mut self, field: &str, value: &str, min: usize, max: Option<usize>) -> Self {
        let len = value.chars().count();

        if len < min {
            let message = if min == 1 {
                "must not be empty".to_string()
            } else {
                format!("must be at least {min} characters")
            };
            self.push(field, message);
        } else if let Some(max) = max.filter(|max| len > *max) {
            self.push(field, format!("must be at most {max} characters"));
        }

        self
    }

    /// For fields where an empty value is allowed but absence is not.
    pub fn required(mut self, field: &str, present: bool) -> Self {
        if !present {
            self.push(field, "is required".to_string());
        }
        self
    }

    pub fn email(mut self, field: &str, value: &str) -> Self {
        if !EmailAddress::is_valid(value) {
            self.push(field, "must be a valid email address".to_string());
        }
        self
    }

    pub fn range(mut self, field: &str, value: i64, min: i64, max: i64) -> Self {
        if value < min || value > max {
            self.push(field, format!("must be between {min} and {max}"));
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }

    fn push(&mut self, field: &str, message: String) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message,
        });
    }
}
