use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    NotFound = 0x01,
    KeyExists = 0x02,
    InvalidArguments = 0x04,
    ArithOnNonNumeric = 0x06,
    Unavailable = 0x87,
}

impl CacheError {
    pub fn to_static_string(&self) -> &'static str {
        static NOT_FOUND: &str = "Not found";
        static KEY_EXISTS: &str = "Key exists";

        match self {
            CacheError::NotFound => NOT_FOUND,
            CacheError::KeyExists => KEY_EXISTS,
            CacheError::InvalidArguments => "Invalid arguments",
            CacheError::ArithOnNonNumeric => "Incr/Decr on non numeric value",
            CacheError::Unavailable => "Cache unavailable",
        }
    }

    /// A miss is the only failure that says nothing about the backend itself.
    pub fn is_miss(&self) -> bool {
        *self == CacheError::NotFound
    }
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_static_string())
    }
}

impl std::error::Error for CacheError {}

pub type Result<T> = std::result::Result<T, CacheError>;
