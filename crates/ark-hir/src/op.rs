//! Operators.

use std::fmt;

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnOp {
  Plus,
  Minus,
  Not,
  PreInc,
  PreDec,
  PostInc,
  PostDec,
  Deref,
  AddrOf,
}

impl UnOp {
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      UnOp::Plus => "+",
      UnOp::Minus => "-",
      UnOp::Not => "!",
      UnOp::PreInc | UnOp::PostInc => "++",
      UnOp::PreDec | UnOp::PostDec => "--",
      UnOp::Deref => "*",
      UnOp::AddrOf => "&",
    }
  }
}

impl fmt::Display for UnOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
  Assign,
  AddAssign,
  SubAssign,
  MulAssign,
  DivAssign,
  ModAssign,
  AndAssign,
  OrAssign,
  XorAssign,
  ShlAssign,
  ShrAssign,
  Add,
  Sub,
  Mul,
  Div,
  Mod,
  And,
  Or,
  Xor,
  Shl,
  Shr,
  Lt,
  Gt,
  Le,
  Ge,
  Eq,
  Ne,
}

impl BinOp {
  /// The loosest precedence any operator has.
  pub const MAX_PRECEDENCE: u8 = 8;

  const ALL: [BinOp; 27] = [
    BinOp::Assign,
    BinOp::AddAssign,
    BinOp::SubAssign,
    BinOp::MulAssign,
    BinOp::DivAssign,
    BinOp::ModAssign,
    BinOp::AndAssign,
    BinOp::OrAssign,
    BinOp::XorAssign,
    BinOp::ShlAssign,
    BinOp::ShrAssign,
    BinOp::Add,
    BinOp::Sub,
    BinOp::Mul,
    BinOp::Div,
    BinOp::Mod,
    BinOp::And,
    BinOp::Or,
    BinOp::Xor,
    BinOp::Shl,
    BinOp::Shr,
    BinOp::Lt,
    BinOp::Gt,
    BinOp::Le,
    BinOp::Ge,
    BinOp::Eq,
    BinOp::Ne,
  ];

  /// Returns whether this is an assignment.
  #[must_use]
  pub fn has_eq(self) -> bool {
    self.without_eq().is_some() || self == BinOp::Assign
  }

  /// For compound assignments like `+=`, returns the underlying operator, like `+`.
  #[must_use]
  pub fn without_eq(self) -> Option<BinOp> {
    let ret = match self {
      BinOp::AddAssign => BinOp::Add,
      BinOp::SubAssign => BinOp::Sub,
      BinOp::MulAssign => BinOp::Mul,
      BinOp::DivAssign => BinOp::Div,
      BinOp::ModAssign => BinOp::Mod,
      BinOp::AndAssign => BinOp::And,
      BinOp::OrAssign => BinOp::Or,
      BinOp::XorAssign => BinOp::Xor,
      BinOp::ShlAssign => BinOp::Shl,
      BinOp::ShrAssign => BinOp::Shr,
      _ => return None,
    };
    Some(ret)
  }

  /// Lower binds tighter.
  #[must_use]
  pub fn precedence(self) -> u8 {
    match self {
      BinOp::Mul | BinOp::Div | BinOp::Mod => 1,
      BinOp::Add | BinOp::Sub => 2,
      BinOp::Shl | BinOp::Shr => 3,
      BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge | BinOp::Eq | BinOp::Ne => 4,
      BinOp::And => 5,
      BinOp::Xor => 6,
      BinOp::Or => 7,
      BinOp::Assign
      | BinOp::AddAssign
      | BinOp::SubAssign
      | BinOp::MulAssign
      | BinOp::DivAssign
      | BinOp::ModAssign
      | BinOp::AndAssign
      | BinOp::OrAssign
      | BinOp::XorAssign
      | BinOp::ShlAssign
      | BinOp::ShrAssign => 8,
    }
  }

  /// Returns whether this is a comparison, producing a `bool`.
  #[must_use]
  pub fn is_cmp(self) -> bool {
    matches!(self, BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge | BinOp::Eq | BinOp::Ne)
  }

  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      BinOp::Assign => "=",
      BinOp::AddAssign => "+=",
      BinOp::SubAssign => "-=",
      BinOp::MulAssign => "*=",
      BinOp::DivAssign => "/=",
      BinOp::ModAssign => "%=",
      BinOp::AndAssign => "&=",
      BinOp::OrAssign => "|=",
      BinOp::XorAssign => "^=",
      BinOp::ShlAssign => "<<=",
      BinOp::ShrAssign => ">>=",
      BinOp::Add => "+",
      BinOp::Sub => "-",
      BinOp::Mul => "*",
      BinOp::Div => "/",
      BinOp::Mod => "%",
      BinOp::And => "&",
      BinOp::Or => "|",
      BinOp::Xor => "^",
      BinOp::Shl => "<<",
      BinOp::Shr => ">>",
      BinOp::Lt => "<",
      BinOp::Gt => ">",
      BinOp::Le => "<=",
      BinOp::Ge => ">=",
      BinOp::Eq => "==",
      BinOp::Ne => "!=",
    }
  }

  /// Returns the operator spelled by the symbol.
  #[must_use]
  pub fn from_symbol(s: &str) -> Option<BinOp> {
    BinOp::ALL.into_iter().find(|op| op.as_str() == s)
  }
}

impl fmt::Display for BinOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
