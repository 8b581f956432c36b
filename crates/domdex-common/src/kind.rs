use serde::Serialize;
use std::fmt;

/// Classification of a declared member on an element surface.
///
/// Legacy scripting-engine stubs expose three shapes: default-valued
/// properties, no-op methods, and `on*` event-handler hooks. The kind decides
/// which fields of a member descriptor are meaningful (`value_type` for
/// properties and events, `params`/`return_type` for methods).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MemberKind {
    Property,
    Method,
    Event,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MemberKind::Property => "property",
            MemberKind::Method => "method",
            MemberKind::Event => "event",
        };
        write!(f, "{label}")
    }
}
