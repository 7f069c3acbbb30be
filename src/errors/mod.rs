//! API error codes.
//!
//! Codes are grouped by subsystem: HTTP 1xxx, database 5xxx, auth 6xxx,
//! users 7xxx, routes 8xxx, rides 9xxx. `Success` reuses 200.

use serde::{Serialize, Serializer};

/// Numeric result code carried in every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    Success = 200,

    // HTTP
    InvalidMethod = 1001,
    PathNotFound = 1002,
    MissingParams = 1003,

    // Database
    DatabaseConn = 5001,
    DatabaseQuery = 5002,

    // Auth
    InvalidToken = 6001,
    TokenExpired = 6002,
    Unauthorized = 6003,
    FailedToGenerateToken = 6004,

    // Users
    UserNotFound = 7001,
    InvalidUserInput = 7002,
    DuplicateEmail = 7003,
    FailedToHashPassword = 7004,
    FailedToCreateUser = 7005,
    FailedToAddFriend = 7006,

    // Routes
    RouteNotFound = 8001,
    InvalidRoute = 8002,
    FailedToCreateRoute = 8003,
    FailedToUpdateRoute = 8004,
    FailedToFetchRoutes = 8005,

    // Rides
    FailedToCreateRide = 9001,
}

/// Message for codes with no entry of their own.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";

impl ErrorCode {
    pub const ALL: [ErrorCode; 22] = [
        ErrorCode::Success,
        ErrorCode::InvalidMethod,
        ErrorCode::PathNotFound,
        ErrorCode::MissingParams,
        ErrorCode::DatabaseConn,
        ErrorCode::DatabaseQuery,
        ErrorCode::InvalidToken,
        ErrorCode::TokenExpired,
        ErrorCode::Unauthorized,
        ErrorCode::FailedToGenerateToken,
        ErrorCode::UserNotFound,
        ErrorCode::InvalidUserInput,
        ErrorCode::DuplicateEmail,
        ErrorCode::FailedToHashPassword,
        ErrorCode::FailedToCreateUser,
        ErrorCode::FailedToAddFriend,
        ErrorCode::RouteNotFound,
        ErrorCode::InvalidRoute,
        ErrorCode::FailedToCreateRoute,
        ErrorCode::FailedToUpdateRoute,
        ErrorCode::FailedToFetchRoutes,
        ErrorCode::FailedToCreateRide,
    ];

    /// Numeric value of the code.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Look up a code by its numeric value.
    pub fn from_u16(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_u16() == code)
    }

    /// Predefined message for the code.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::Success => "Success",

            ErrorCode::InvalidMethod => "Method is not allowed",
            ErrorCode::PathNotFound => "Path not found",
            ErrorCode::MissingParams => "Required parameters are missing",

            ErrorCode::DatabaseConn => "Database connection error",
            ErrorCode::DatabaseQuery => "Database query error",

            ErrorCode::InvalidToken => "Invalid token",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::Unauthorized => "Unauthorized access",
            ErrorCode::FailedToGenerateToken => "Failed to generate token",

            ErrorCode::UserNotFound => "User not found",
            ErrorCode::InvalidUserInput => "Invalid user input",
            ErrorCode::DuplicateEmail => "Email already exists",
            ErrorCode::FailedToHashPassword => "Failed to hash password",
            ErrorCode::FailedToCreateUser => "Failed to create user",
            ErrorCode::FailedToAddFriend => "Failed to add friend",

            ErrorCode::RouteNotFound => "Route not found",
            ErrorCode::InvalidRoute => "Invalid route data",
            ErrorCode::FailedToCreateRoute => "Failed to create route",
            ErrorCode::FailedToUpdateRoute => "Failed to update route",
            ErrorCode::FailedToFetchRoutes => "Failed to fetch routes",

            ErrorCode::FailedToCreateRide => "Failed to create ride",
        }
    }
}

/// Message for a raw numeric code; unknown codes get the generic message.
pub fn message_for(code: u16) -> &'static str {
    ErrorCode::from_u16(code).map_or(INTERNAL_ERROR_MESSAGE, ErrorCode::message)
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_lookup() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_u16(code.as_u16()), Some(code));
        }
        assert_eq!(ErrorCode::from_u16(4242), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(message_for(200), "Success");
        assert_eq!(message_for(1002), "Path not found");
        assert_eq!(message_for(4242), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::MissingParams).unwrap(), "1003");
    }
}
