//! Error types and error handling for the OpenSCENARIO library

use thiserror::Error;

/// Main error type for the OpenSCENARIO library
#[derive(Error, Debug)]
pub enum Error {
    // XML/Serialization
    /// XML deserialization failures
    #[error("XML parsing error: {0}")]
    XmlParseError(#[from] quick_xml::DeError),

    /// XML serialization failures
    #[error("XML serialization error: {0}")]
    XmlSerializeError(#[from] quick_xml::SeError),

    // I/O
    /// File I/O failures
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // File System Errors
    /// File not found at specified path
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory not found at specified path
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    /// Cannot read file
    #[error("Cannot read file {path}: {reason}")]
    FileReadError { path: String, reason: String },

    /// Cannot write file
    #[error("Cannot write file {path}: {reason}")]
    FileWriteError { path: String, reason: String },

    // Reference Errors
    /// Entity reference not found
    #[error("Entity '{entity}' not found")]
    EntityNotFound {
        entity: String,
        available: Vec<String>,
    },

    /// Catalog entry not found
    #[error("Catalog entry '{entry}' not found in catalog '{catalog}'")]
    CatalogEntryNotFound { catalog: String, entry: String },

    /// Catalog not found
    #[error("Catalog '{catalog}' not found")]
    CatalogNotFound {
        catalog: String,
        available: Vec<String>,
    },

    // Validation Errors
    /// Schema validation failures
    #[error("Validation error in field '{field}': {message}")]
    ValidationError { field: String, message: String },

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    /// Invalid value for field
    #[error("Invalid value for field '{field}': {value}. {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },

    /// Value out of expected range
    #[error("Value out of range for field '{field}': {value}. Expected {min} to {max}")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    /// Type mismatch
    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    // Parameter Errors
    /// Parameter resolution failures
    #[error("Parameter '{param}' error: {message}")]
    ParameterError { param: String, message: String },

    /// Parameter not found
    #[error("Parameter '{param}' not found")]
    ParameterNotFound {
        param: String,
        available: Vec<String>,
    },

    /// Circular dependency detected
    #[error("Circular dependency detected: {cycle}")]
    CircularDependency { cycle: String },

    // XML/Structure Errors
    /// Invalid XML structure
    #[error("Invalid XML structure: {message}")]
    InvalidXmlStructure { message: String },

    /// Malformed XML with location context
    #[error("Malformed XML: expected {expected}, found {found} at {location}")]
    MalformedXml {
        expected: String,
        found: String,
        location: String,
    },

    // Catalog Errors (remaining generic cases)
    /// Generic catalog system error
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// XSD Choice Group parsing errors
    #[error("Choice group error: {message}")]
    ChoiceGroupError { message: String },

    // Parsing/Expression Errors
    /// Failed to parse input
    #[error("Failed to parse '{input}': {reason}")]
    ParseError { input: String, reason: String },

    /// Expression evaluation failed
    #[error("Expression evaluation failed: {expression} - {reason}")]
    ExpressionError { expression: String, reason: String },

    // Constraint Violations
    /// Constraint violation
    #[error("Constraint violation: {constraint}")]
    ConstraintViolation { constraint: String },

    /// Inconsistent state
    #[error("Inconsistent state: {message}")]
    InconsistentState { message: String },
}

impl Error {
    // File System Errors

    /// Create a file not found error
    pub fn file_not_found(path: &str) -> Self {
        Error::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a directory not found error
    pub fn directory_not_found(path: &str) -> Self {
        Error::DirectoryNotFound {
            path: path.to_string(),
        }
    }

    /// Create a file read error
    pub fn file_read_error(path: &str, reason: &str) -> Self {
        Error::FileReadError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a file write error
    pub fn file_write_error(path: &str, reason: &str) -> Self {
        Error::FileWriteError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    // Reference Errors

    /// Create an entity not found error
    pub fn entity_not_found(entity: &str, available: &[String]) -> Self {
        Error::EntityNotFound {
            entity: entity.to_string(),
            available: available.to_vec(),
        }
    }

    /// Create a catalog entry not found error
    pub fn catalog_entry_not_found(catalog: &str, entry: &str) -> Self {
        Error::CatalogEntryNotFound {
            catalog: catalog.to_string(),
            entry: entry.to_string(),
        }
    }

    /// Create a catalog not found error
    pub fn catalog_not_found(catalog: &str, available: &[String]) -> Self {
        Error::CatalogNotFound {
            catalog: catalog.to_string(),
            available: available.to_vec(),
        }
    }

    // Validation Errors

    /// Create a validation error
    pub fn validation_error(field: &str, message: &str) -> Self {
        Error::ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a missing required field error
    pub fn missing_field(field: &str) -> Self {
        Error::MissingRequiredField {
            field: field.to_string(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: &str, value: &str, hint: &str) -> Self {
        Error::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            hint: hint.to_string(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(field: &str, value: &str, min: &str, max: &str) -> Self {
        Error::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(field: &str, expected: &str, actual: &str) -> Self {
        Error::TypeMismatch {
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    // Parameter Errors

    /// Create a parameter error
    pub fn parameter_error(param: &str, message: &str) -> Self {
        Error::ParameterError {
            param: param.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a parameter not found error
    pub fn parameter_not_found(param: &str, available: &[String]) -> Self {
        Error::ParameterNotFound {
            param: param.to_string(),
            available: available.to_vec(),
        }
    }

    // XML/Structure Errors

    /// Create an invalid XML structure error
    pub fn invalid_xml(message: &str) -> Self {
        Error::InvalidXmlStructure {
            message: message.to_string(),
        }
    }

    /// Create a malformed XML error with location
    pub fn malformed_xml(expected: &str, found: &str, location: &str) -> Self {
        Error::MalformedXml {
            expected: expected.to_string(),
            found: found.to_string(),
            location: location.to_string(),
        }
    }

    /// Create a parsing error with location information
    pub fn parsing_error(msg: &str, line: usize, col: usize) -> Self {
        Error::ValidationError {
            field: format!("line {}, column {}", line, col),
            message: msg.to_string(),
        }
    }

    // Other Errors

    /// Create a circular dependency error
    pub fn circular_dependency(cycle: &str) -> Self {
        Error::CircularDependency {
            cycle: cycle.to_string(),
        }
    }

    /// Create a parse error
    pub fn parse_error(input: &str, reason: &str) -> Self {
        Error::ParseError {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an expression error
    pub fn expression_error(expression: &str, reason: &str) -> Self {
        Error::ExpressionError {
            expression: expression.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint_violation(constraint: &str) -> Self {
        Error::ConstraintViolation {
            constraint: constraint.to_string(),
        }
    }

    /// Create a catalog error
    pub fn catalog_error(message: &str) -> Self {
        Error::CatalogError(message.to_string())
    }

    /// Create a choice group error
    pub fn choice_group_error(message: &str) -> Self {
        Error::ChoiceGroupError {
            message: message.to_string(),
        }
    }

    /// Add context to an error
    pub fn with_context(mut self, context: &str) -> Self {
        match &mut self {
            Error::ValidationError {
                ref mut message, ..
            } => {
                *message = format!("{}: {}", context, message);
            }
            Error::CatalogError(ref mut msg) => {
                *msg = format!("{}: {}", context, msg);
            }
            Error::ChoiceGroupError { ref mut message } => {
                *message = format!("{}: {}", context, message);
            }
            Error::ParameterError {
                ref mut message, ..
            } => {
                *message = format!("{}: {}", context, message);
            }
            Error::FileReadError { ref mut reason, .. } => {
                *reason = format!("{}: {}", context, reason);
            }
            Error::FileWriteError { ref mut reason, .. } => {
                *reason = format!("{}: {}", context, reason);
            }
            Error::ParseError { ref mut reason, .. } => {
                *reason = format!("{}: {}", context, reason);
            }
            Error::ExpressionError { ref mut reason, .. } => {
                *reason = format!("{}: {}", context, reason);
            }
            Error::InvalidValue { ref mut hint, .. } => {
                *hint = format!("{}: {}", context, hint);
            }
            Error::OutOfRange { ref mut value, .. } => {
                *value = format!("{}: {}", context, value);
            }
            _ => {}
        }
        self
    }
}

/// Result type alias for the OpenSCENARIO library
pub type Result<T> = std::result::Result<T, Error>;
