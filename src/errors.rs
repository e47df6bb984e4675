// Reason strings signalled by `require!`/`sc_panic!`. Each one names a
// single failure cause so callers can match on it.

pub const ERR_ZERO_ADDRESS: &str = "ZeroAddress";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_EXCEEDS_CAP: &str = "ExceedsCap";
pub const ERR_OVERFLOW: &str = "Overflow";
pub const ERR_UNDERFLOW: &str = "Underflow";
pub const ERR_INSUFFICIENT_BALANCE: &str = "InsufficientBalance";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "InsufficientAllowance";
pub const ERR_LENGTH_MISMATCH: &str = "LengthMismatch";
pub const ERR_INVALID_SIGNATURE: &str = "InvalidSignature";
pub const ERR_EXPIRED_DEADLINE: &str = "ExpiredDeadline";
pub const ERR_FUTURE_LOOKUP: &str = "FutureLookup";
