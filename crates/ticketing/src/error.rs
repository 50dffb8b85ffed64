//! Purchase rule violations and the unified purchase error.

use serde::Serialize;
use thiserror::Error;

/// Broad classification of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationClass {
    /// A number is outside its permitted range.
    RangeError,
    /// A business rule about the mix of tickets was broken.
    RuleError,
}

impl ViolationClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            ViolationClass::RangeError => "RangeError",
            ViolationClass::RuleError => "RuleError",
        }
    }
}

impl core::fmt::Display for ViolationClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which purchase rule was broken.
///
/// Declaration order is the order in which rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ViolationKind {
    TicketCountExceeded,
    InvalidQuantity,
    AdultTicketRequired,
    InvalidPurchaserId,
}

impl ViolationKind {
    pub const fn class(self) -> ViolationClass {
        match self {
            ViolationKind::AdultTicketRequired => ViolationClass::RuleError,
            ViolationKind::TicketCountExceeded
            | ViolationKind::InvalidQuantity
            | ViolationKind::InvalidPurchaserId => ViolationClass::RangeError,
        }
    }

    pub const fn detail(self) -> &'static str {
        match self {
            ViolationKind::TicketCountExceeded => "ticket count exceeded",
            ViolationKind::InvalidQuantity => "invalid ticket quantity",
            ViolationKind::AdultTicketRequired => "adult required",
            ViolationKind::InvalidPurchaserId => "invalid purchaser id",
        }
    }
}

/// A single broken rule, as `"<Class>: <detail>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{}: {detail}", .kind.class())]
pub struct Violation {
    pub kind: ViolationKind,
    pub detail: String,
}

impl Violation {
    pub fn new(kind: ViolationKind) -> Self {
        Self {
            kind,
            detail: kind.detail().to_string(),
        }
    }

    pub const fn class(&self) -> ViolationClass {
        self.kind.class()
    }
}

impl From<ViolationKind> for Violation {
    fn from(kind: ViolationKind) -> Self {
        Self::new(kind)
    }
}

/// The only error `purchase_tickets` returns.
///
/// Carries the first violation in check order plus every violation that was
/// detected, so callers can match on [`InvalidPurchaseError::kind`] instead of
/// parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid purchase: {primary}")]
pub struct InvalidPurchaseError {
    #[source]
    primary: Violation,
    violations: Vec<Violation>,
}

impl InvalidPurchaseError {
    /// Build from violations in check order. Returns `None` when the list is empty.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        let primary = violations.first()?.clone();
        Some(Self {
            primary,
            violations,
        })
    }

    pub fn kind(&self) -> ViolationKind {
        self.primary.kind
    }

    pub fn class(&self) -> ViolationClass {
        self.primary.class()
    }

    /// `"<Class>: <detail>"` of the primary violation.
    pub fn message(&self) -> String {
        self.primary.to_string()
    }

    pub fn primary(&self) -> &Violation {
        &self.primary
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn has(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }
}

impl From<Violation> for InvalidPurchaseError {
    fn from(violation: Violation) -> Self {
        Self {
            primary: violation.clone(),
            violations: vec![violation],
        }
    }
}

impl From<ViolationKind> for InvalidPurchaseError {
    fn from(kind: ViolationKind) -> Self {
        Violation::new(kind).into()
    }
}
