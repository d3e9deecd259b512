//! Domain identifier types with proper encapsulation.

use std::fmt;

/// Trade session identifier.
///
/// An opaque sequence number assigned by the automation engine when a
/// session is admitted from the queue. The inner u64 is private to ensure
/// all construction goes through the defined constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Create a new `SessionId` from a u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Initiating user identifier.
///
/// An opaque reference into the external channel system; the messaging
/// adapter resolves it to an actual recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(u64);

impl UserId {
    /// Create a new `UserId` from a u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric link code shown to the remote party so both sides meet in the
/// same search.
///
/// `Display` renders the on-screen form: eight digits split into two
/// zero-padded halves, `dddd dddd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkCode(u32);

impl LinkCode {
    /// Create a new `LinkCode` from its numeric value.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LinkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04} {:04}", self.0 / 10_000, self.0 % 10_000)
    }
}
