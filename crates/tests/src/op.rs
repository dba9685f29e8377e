//! Operators.

use crate::check::Cx;
use ark_hir::{BinOp, Prim, UnOp};
use pretty_assertions::assert_eq;

#[test]
fn arithmetic() {
  let mut cx = Cx::new();
  let one = cx.int(1);
  let two = cx.int(2);
  let add = cx.binary(BinOp::Add, one, two);
  let half = cx.float(0.5);
  let quarter = cx.float(0.25);
  let mul = cx.binary(BinOp::Mul, half, quarter);
  cx.top_exp(add);
  cx.top_exp(mul);
  let checked = cx.check();
  checked.assert_no_errors();
  assert_eq!(checked.exp(add), "i32");
  assert_eq!(checked.exp(mul), "f64");
}

#[test]
fn comparison_is_bool() {
  let mut cx = Cx::new();
  let one = cx.int(1);
  let two = cx.int(2);
  let lt = cx.binary(BinOp::Lt, one, two);
  let yes = cx.bool(true);
  let no = cx.bool(false);
  let eq = cx.binary(BinOp::Eq, yes, no);
  cx.top_exp(lt);
  cx.top_exp(eq);
  let checked = cx.check();
  checked.assert_no_errors();
  assert_eq!(checked.exp(lt), "bool");
  assert_eq!(checked.exp(eq), "bool");
}

#[test]
fn invalid_operand() {
  let mut cx = Cx::new();
  let yes = cx.bool(true);
  let no = cx.bool(false);
  let add = cx.binary(BinOp::Add, yes, no);
  cx.top_exp(add);
  let checked = cx.check();
  checked.assert_errors(&["invalid operand type for `+`: bool"]);
  assert_eq!(checked.exp(add), "{error}");
}

#[test]
fn mismatched_operands() {
  let mut cx = Cx::new();
  let one = cx.int(1);
  let half = cx.float(0.5);
  let sub = cx.binary(BinOp::Sub, one, half);
  cx.top_exp(sub);
  cx.check().assert_errors(&["incompatible types: expected i32, found f64"]);
}

#[test]
fn operand_default() {
  let mut cx = Cx::new();
  let (x_pat, x) = cx.id_pat("x");
  let (y_pat, y) = cx.id_pat("y");
  let param = cx.pat(ark_hir::Pat::Tuple(vec![x_pat, y_pat]));
  let x_exp = cx.path(x);
  let y_exp = cx.path(y);
  let body = cx.binary(BinOp::Mul, x_exp, y_exp);
  let lam = cx.lambda(param, body);
  let f = cx.top_let("f", lam);
  let checked = cx.check();
  checked.assert_no_errors();
  assert_eq!(checked.decl(f), "(i32, i32) -> i32");
}

#[test]
fn shift() {
  let mut cx = Cx::new();
  let i64_ = cx.prim(Prim::I64);
  let one = cx.int(1);
  let x = cx.top_let_typed("x", i64_, one);
  let x_exp = cx.path(x);
  let two = cx.int(2);
  let shr = cx.binary(BinOp::Shr, x_exp, two);
  cx.top_exp(shr);
  let checked = cx.check();
  checked.assert_no_errors();
  assert_eq!(checked.exp(two), "i32");
  assert_eq!(checked.exp(shr), "i64");
}

#[test]
fn shift_float() {
  let mut cx = Cx::new();
  let half = cx.float(0.5);
  let one = cx.int(1);
  let shl = cx.binary(BinOp::Shl, half, one);
  cx.top_exp(shl);
  cx.check().assert_errors(&["invalid operand type for `<<`: f64"]);
}

#[test]
fn assign() {
  let mut cx = Cx::new();
  let i64_ = cx.prim(Prim::I64);
  let one = cx.int(1);
  let x = cx.top_let_typed("x", i64_, one);
  let x_exp = cx.path(x);
  let two = cx.int(2);
  let assign = cx.binary(BinOp::Assign, x_exp, two);
  cx.top_exp(assign);
  let checked = cx.check();
  checked.assert_no_errors();
  assert_eq!(checked.exp(two), "i64");
  assert_eq!(checked.exp(assign), "()");
}

#[test]
fn assign_wrong_type() {
  let mut cx = Cx::new();
  let one = cx.int(1);
  let x = cx.top_let("x", one);
  let x_exp = cx.path(x);
  let yes = cx.bool(true);
  let assign = cx.binary(BinOp::Assign, x_exp, yes);
  cx.top_exp(assign);
  cx.check().assert_errors(&["incompatible types: expected i32, found bool"]);
}

#[test]
fn compound_assign() {
  let mut cx = Cx::new();
  let one = cx.int(1);
  let x = cx.top_let("x", one);
  let x_exp = cx.path(x);
  let two = cx.int(2);
  let add = cx.binary(BinOp::AddAssign, x_exp, two);
  cx.top_exp(add);
  let checked = cx.check();
  checked.assert_no_errors();
  assert_eq!(checked.exp(add), "()");
}

#[test]
fn shr_assign_is_its_own_op() {
  let mut cx = Cx::new();
  let one = cx.int(1);
  let x = cx.top_let("x", one);
  let x_exp = cx.path(x);
  let half = cx.float(0.5);
  let shr = cx.binary(BinOp::ShrAssign, x_exp, half);
  cx.top_exp(shr);
  let checked = cx.check();
  checked.assert_errors(&["invalid operand type for `>>=`: f64"]);
  assert_eq!(checked.exp(shr), "()");
  assert_eq!(BinOp::from_symbol(">>="), Some(BinOp::ShrAssign));
  assert_eq!(BinOp::ShrAssign.without_eq(), Some(BinOp::Shr));
}

#[test]
fn op_tags() {
  assert!(BinOp::Assign.has_eq());
  assert!(BinOp::ShrAssign.has_eq());
  assert!(!BinOp::Shr.has_eq());
  assert!(!BinOp::Eq.has_eq());
  assert!(BinOp::Mul.precedence() < BinOp::Add.precedence());
  assert!(BinOp::Eq.precedence() < BinOp::And.precedence());
  assert_eq!(BinOp::ShrAssign.precedence(), BinOp::MAX_PRECEDENCE);
  assert_eq!(BinOp::from_symbol(">>"), Some(BinOp::Shr));
  assert_eq!(BinOp::from_symbol("=>"), None);
}

#[test]
fn not() {
  let mut cx = Cx::new();
  let yes = cx.bool(true);
  let not_bool = cx.unary(UnOp::Not, yes);
  let one = cx.int(1);
  let not_int = cx.unary(UnOp::Not, one);
  let half = cx.float(0.5);
  let not_float = cx.unary(UnOp::Not, half);
  cx.top_exp(not_bool);
  cx.top_exp(not_int);
  cx.top_exp(not_float);
  let checked = cx.check();
  checked.assert_errors(&["invalid operand type for `!`: f64"]);
  assert_eq!(checked.exp(not_bool), "bool");
  assert_eq!(checked.exp(not_int), "i32");
}

#[test]
fn negate() {
  let mut cx = Cx::new();
  let half = cx.float(0.5);
  let neg = cx.unary(UnOp::Minus, half);
  let yes = cx.bool(true);
  let bad = cx.unary(UnOp::Minus, yes);
  cx.top_exp(neg);
  cx.top_exp(bad);
  let checked = cx.check();
  checked.assert_errors(&["invalid operand type for `-`: bool"]);
  assert_eq!(checked.exp(neg), "f64");
}

#[test]
fn addr_of_and_deref() {
  let mut cx = Cx::new();
  let one = cx.int(1);
  let addr = cx.unary(UnOp::AddrOf, one);
  let deref = cx.unary(UnOp::Deref, addr);
  cx.top_exp(deref);
  let two = cx.int(2);
  let bad = cx.unary(UnOp::Deref, two);
  cx.top_exp(bad);
  let checked = cx.check();
  checked.assert_errors(&["invalid operand type for `*`: i32"]);
  assert_eq!(checked.exp(addr), "*i32");
  assert_eq!(checked.exp(deref), "i32");
}

#[test]
fn deref_infers_ptr() {
  let mut cx = Cx::new();
  let (param, p) = cx.id_pat("p");
  let p_exp = cx.path(p);
  let deref = cx.unary(UnOp::Deref, p_exp);
  let one = cx.int(1);
  let add = cx.binary(BinOp::Add, deref, one);
  let lam = cx.lambda(param, add);
  let f = cx.top_let("f", lam);
  let checked = cx.check();
  checked.assert_no_errors();
  assert_eq!(checked.decl(f), "*i32 -> i32");
}

#[test]
fn index() {
  let mut cx = Cx::new();
  let elems = vec![cx.bool(true), cx.bool(false)];
  let arr = cx.array(elems);
  let zero = cx.int(0);
  let idx = cx.exp(ark_hir::Exp::Index(arr, zero));
  cx.top_exp(idx);
  let checked = cx.check();
  checked.assert_no_errors();
  assert_eq!(checked.exp(idx), "bool");
}

#[test]
fn index_not_array() {
  let mut cx = Cx::new();
  let one = cx.int(1);
  let zero = cx.int(0);
  let idx = cx.exp(ark_hir::Exp::Index(one, zero));
  cx.top_exp(idx);
  cx.check().assert_errors(&["expected an array type in index expression, found i32"]);
}

#[test]
fn index_with_bool() {
  let mut cx = Cx::new();
  let elems = vec![cx.int(1)];
  let arr = cx.array(elems);
  let yes = cx.bool(true);
  let idx = cx.exp(ark_hir::Exp::Index(arr, yes));
  cx.top_exp(idx);
  let checked = cx.check();
  checked.assert_errors(&["invalid operand type for `[]`: bool"]);
  assert_eq!(checked.exp(idx), "i32");
}
