use std::fmt;

/// The side of the wire at which a payload is being checked.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Boundary {
    /// Immediately after deserialization.
    Inbound,
    /// Immediately before serialization.
    Outbound,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Inbound => f.write_str("after deserialization"),
            Boundary::Outbound => f.write_str("before serialization"),
        }
    }
}
