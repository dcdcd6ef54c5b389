//! Domain-specific error types and error handling.

use thiserror::Error;
use uuid::Uuid;


/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{message}")]
    RequiredField { field: String, message: String },

    #[error("Missing required order details: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },
}

impl ValidationError {
    /// A single required field with a caller-facing message
    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Names of the offending fields
    pub fn fields(&self) -> Vec<String> {
        match self {
            ValidationError::RequiredField { field, .. } => vec![field.clone()],
            ValidationError::MissingFields { fields } => fields.clone(),
        }
    }
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Forbidden { message: String },

    #[error("Invalid OTP")]
    InvalidCode,

    #[error("{message}")]
    Delivery { message: String },

    #[error("{message}")]
    Persistence { message: String },

    /// The order was stored but its confirmation email could not be sent
    #[error("Order {order_id} was created but the confirmation email failed: {message}")]
    OrderConfirmation { order_id: Uuid, message: String },
}

impl DomainError {
    pub fn delivery(message: impl Into<String>) -> Self {
        DomainError::Delivery {
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        DomainError::Persistence {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
