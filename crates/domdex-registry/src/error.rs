use std::fmt;

/// The specific well-formedness rule a rejected descriptor violated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DescriptorRule {
    /// Two members share a name; member names are unique within a
    /// descriptor regardless of kind.
    DuplicateMember { member: String },
    /// A method declares the same parameter name twice.
    DuplicateParameter { member: String, param: String },
    /// A name that must refer to a declaration is not a valid identifier.
    InvalidIdentifier { name: String },
}

impl fmt::Display for DescriptorRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorRule::DuplicateMember { member } => {
                write!(f, "duplicate member name `{member}`")
            }
            DescriptorRule::DuplicateParameter { member, param } => {
                write!(f, "method `{member}` repeats parameter name `{param}`")
            }
            DescriptorRule::InvalidIdentifier { name } => {
                write!(f, "`{name}` is not a valid identifier")
            }
        }
    }
}

/// Error returned by registry operations.
///
/// Every variant is a local, synchronous, non-retryable condition scoped to
/// the call that produced it; the registry is left in its prior valid state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The descriptor failed a well-formedness check at registration.
    MalformedDescriptor {
        type_name: String,
        rule: DescriptorRule,
    },
    /// A descriptor with this type name is already registered.
    DuplicateType { type_name: String },
    /// A declared super type was never registered.
    UnknownSuperType {
        type_name: String,
        super_type: String,
    },
    /// Super-type resolution found a cycle; the path lists the types
    /// involved, ending where it re-entered.
    CyclicInheritance { cycle: Vec<String> },
    /// No descriptor registered under this type name.
    NotFound { type_name: String },
    /// The member was not found on the type or anywhere up its super chain.
    MemberNotFound {
        type_name: String,
        member_name: String,
    },
    /// The query needs resolved super types, but `finalize` has not run.
    NotFinalized { type_name: String },
    /// `register` was called after `finalize`.
    RegistryClosed,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::MalformedDescriptor { type_name, rule } => {
                write!(f, "malformed descriptor `{type_name}`: {rule}")
            }
            RegistryError::DuplicateType { type_name } => {
                write!(f, "type `{type_name}` is already registered")
            }
            RegistryError::UnknownSuperType {
                type_name,
                super_type,
            } => {
                write!(
                    f,
                    "type `{type_name}` declares unknown super type `{super_type}`"
                )
            }
            RegistryError::CyclicInheritance { cycle } => {
                write!(
                    f,
                    "cyclic inheritance involving {} types: {}",
                    cycle.len(),
                    cycle.join(" -> ")
                )
            }
            RegistryError::NotFound { type_name } => {
                write!(f, "type `{type_name}` is not registered")
            }
            RegistryError::MemberNotFound {
                type_name,
                member_name,
            } => {
                write!(f, "type `{type_name}` has no member `{member_name}`")
            }
            RegistryError::NotFinalized { type_name } => {
                write!(
                    f,
                    "type `{type_name}` has a super type; finalize the registry before inherited queries"
                )
            }
            RegistryError::RegistryClosed => {
                write!(f, "registry is finalized and no longer accepts registrations")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
