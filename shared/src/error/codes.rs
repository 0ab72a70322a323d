//! Unified error codes for the Galley POS backend
//!
//! This module defines all error codes used across the server and clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Product and menu errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has already been completed
    OrderAlreadyCompleted = 4002,
    /// Order targets an empty table
    OrderTableEmpty = 4003,
    /// Order line item quantity is negative
    OrderQuantityInvalid = 4004,

    // ==================== 6xxx: Product / Menu ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product has invalid price
    ProductInvalidPrice = 6002,
    /// Menu not found
    MenuNotFound = 6101,
    /// Menu price is negative or exceeds the sum of its product prices
    MenuInvalidPrice = 6102,
    /// Menu product quantity is negative
    MenuQuantityInvalid = 6103,
    /// Menu group not found
    MenuGroupNotFound = 6201,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is empty
    TableEmpty = 7002,
    /// Table belongs to a table group
    TableGrouped = 7003,
    /// Table has orders in cooking or meal status
    TableHasActiveOrders = 7004,
    /// Number of guests is negative
    GuestCountInvalid = 7005,
    /// Table group not found
    TableGroupNotFound = 7101,
    /// Table group has fewer than two tables
    TableGroupTooSmall = 7102,
    /// Table is not empty or already grouped
    TableNotGroupable = 7103,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderAlreadyCompleted => "Order has already been completed",
            ErrorCode::OrderTableEmpty => "Cannot create an order for an empty table",
            ErrorCode::OrderQuantityInvalid => "Order line item quantity must not be negative",

            // Product / Menu
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product price must not be negative",
            ErrorCode::MenuNotFound => "Menu not found",
            ErrorCode::MenuInvalidPrice => "Menu has invalid price",
            ErrorCode::MenuQuantityInvalid => "Menu product quantity must not be negative",
            ErrorCode::MenuGroupNotFound => "Menu group not found",

            // Table
            ErrorCode::TableNotFound => "Order table not found",
            ErrorCode::TableEmpty => "Order table is empty",
            ErrorCode::TableGrouped => "Order table belongs to a table group",
            ErrorCode::TableHasActiveOrders => "Order table has orders in cooking or meal status",
            ErrorCode::GuestCountInvalid => "Number of guests must not be negative",
            ErrorCode::TableGroupNotFound => "Table group not found",
            ErrorCode::TableGroupTooSmall => "A table group requires at least two tables",
            ErrorCode::TableNotGroupable => "Order table is not empty or already grouped",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderAlreadyCompleted),
            4003 => Ok(ErrorCode::OrderTableEmpty),
            4004 => Ok(ErrorCode::OrderQuantityInvalid),

            // Product / Menu
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6101 => Ok(ErrorCode::MenuNotFound),
            6102 => Ok(ErrorCode::MenuInvalidPrice),
            6103 => Ok(ErrorCode::MenuQuantityInvalid),
            6201 => Ok(ErrorCode::MenuGroupNotFound),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableEmpty),
            7003 => Ok(ErrorCode::TableGrouped),
            7004 => Ok(ErrorCode::TableHasActiveOrders),
            7005 => Ok(ErrorCode::GuestCountInvalid),
            7101 => Ok(ErrorCode::TableGroupNotFound),
            7102 => Ok(ErrorCode::TableGroupTooSmall),
            7103 => Ok(ErrorCode::TableNotGroupable),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);

        // Order
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::OrderAlreadyCompleted.code(), 4002);
        assert_eq!(ErrorCode::OrderTableEmpty.code(), 4003);
        assert_eq!(ErrorCode::OrderQuantityInvalid.code(), 4004);

        // Product / Menu
        assert_eq!(ErrorCode::ProductNotFound.code(), 6001);
        assert_eq!(ErrorCode::ProductInvalidPrice.code(), 6002);
        assert_eq!(ErrorCode::MenuNotFound.code(), 6101);
        assert_eq!(ErrorCode::MenuInvalidPrice.code(), 6102);
        assert_eq!(ErrorCode::MenuQuantityInvalid.code(), 6103);
        assert_eq!(ErrorCode::MenuGroupNotFound.code(), 6201);

        // Table
        assert_eq!(ErrorCode::TableNotFound.code(), 7001);
        assert_eq!(ErrorCode::TableEmpty.code(), 7002);
        assert_eq!(ErrorCode::TableGrouped.code(), 7003);
        assert_eq!(ErrorCode::TableHasActiveOrders.code(), 7004);
        assert_eq!(ErrorCode::GuestCountInvalid.code(), 7005);
        assert_eq!(ErrorCode::TableGroupNotFound.code(), 7101);
        assert_eq!(ErrorCode::TableGroupTooSmall.code(), 7102);
        assert_eq!(ErrorCode::TableNotGroupable.code(), 7103);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
        assert_eq!(ErrorCode::ConfigError.code(), 9005);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::TableNotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(4001), Ok(ErrorCode::OrderNotFound));
        assert_eq!(ErrorCode::try_from(7005), Ok(ErrorCode::GuestCountInvalid));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(5001), Err(InvalidErrorCode(5001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize() {
        let code = ErrorCode::NotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3");

        let code = ErrorCode::OrderNotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "4001");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("7001").unwrap();
        assert_eq!(code, ErrorCode::TableNotFound);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::MenuNotFound), "6101");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(ErrorCode::OrderNotFound.message(), "Order not found");
        assert_eq!(
            ErrorCode::TableEmpty.message(),
            "Order table is empty"
        );
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::OrderAlreadyCompleted,
            ErrorCode::MenuInvalidPrice,
            ErrorCode::TableGroupTooSmall,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }
}
