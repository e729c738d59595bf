//! Operator vocabulary.
//!
//! Symbolic operators recognised by the lexer. Precedence is owned by the (external) expression grammar, so this
//! registry only records spellings.
//!
//! ## Examples
//! ```rust
//! use tessera_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert_eq!(operators::as_str(OperatorId::Plus), "+");
//! ```

/// Stable identifier for operator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    OperatorInfo { id: OperatorId::Plus, canonical: "+" },
    OperatorInfo { id: OperatorId::Minus, canonical: "-" },
    OperatorInfo { id: OperatorId::Star, canonical: "*" },
    OperatorInfo { id: OperatorId::Slash, canonical: "/" },
    OperatorInfo { id: OperatorId::Percent, canonical: "%" },
    OperatorInfo { id: OperatorId::Eq, canonical: "=" },
    OperatorInfo { id: OperatorId::EqEq, canonical: "==" },
    OperatorInfo { id: OperatorId::NotEq, canonical: "!=" },
    OperatorInfo { id: OperatorId::Lt, canonical: "<" },
    OperatorInfo { id: OperatorId::LtEq, canonical: "<=" },
    OperatorInfo { id: OperatorId::Gt, canonical: ">" },
    OperatorInfo { id: OperatorId::GtEq, canonical: ">=" },
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    match OPERATORS.iter().find(|o| o.id == id) {
        Some(info) => info.canonical,
        None => unreachable!("operator registry is missing {id:?}"),
    }
}

/// Lookup by exact spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == s).map(|o| o.id)
}
