//! Building trees to check, and checking them.
//!
//! There is no parser, so tests build the already-resolved tree directly. For instance, this is
//! `let x = (1, true)`:
//!
//! ```ignore
//! let mut cx = Cx::new();
//! let one = cx.int(1);
//! let yes = cx.bool(true);
//! let init = cx.tuple(vec![one, yes]);
//! let x = cx.top_let("x", init);
//! let checked = cx.check();
//! checked.assert_no_errors();
//! assert_eq!(checked.decl(x), "(i32, bool)");
//! ```

use ark_hir::{
  BinOp, Decl, DeclIdx, Exp, ExpIdx, FnRef, Lit, Name, Pat, PatIdx, Prim, Stmt, StmtIdx, Ty,
  TyIdx, UnOp,
};
use ark_statics_types::ty::Tys;

pub(crate) struct Cx {
  pub(crate) ars: ark_hir::Arenas,
  root: Vec<DeclIdx>,
  config: config::Config,
}

impl Cx {
  pub(crate) fn new() -> Self {
    let _ = env_logger::builder().is_test(true).try_init();
    Self { ars: ark_hir::Arenas::default(), root: Vec::new(), config: config::Config::default() }
  }

  pub(crate) fn with_config(mut self, config: config::Config) -> Self {
    self.config = config;
    self
  }

  // expressions //

  pub(crate) fn exp(&mut self, exp: Exp) -> ExpIdx {
    self.ars.exp.alloc(exp)
  }

  /// allocates a placeholder, for expressions that must know their own index, like a function
  /// that contains a `return`. replace it with [`Self::set_exp`].
  pub(crate) fn reserve_exp(&mut self) -> ExpIdx {
    self.exp(Exp::Continue)
  }

  pub(crate) fn set_exp(&mut self, idx: ExpIdx, exp: Exp) {
    self.ars.exp[idx] = exp;
  }

  pub(crate) fn int(&mut self, n: u64) -> ExpIdx {
    self.exp(Exp::Lit(Lit::Int(n)))
  }

  pub(crate) fn float(&mut self, n: f64) -> ExpIdx {
    self.exp(Exp::Lit(Lit::Float(n)))
  }

  pub(crate) fn bool(&mut self, b: bool) -> ExpIdx {
    self.exp(Exp::Lit(Lit::Bool(b)))
  }

  pub(crate) fn path(&mut self, decl: DeclIdx) -> ExpIdx {
    self.exp(Exp::Path(ark_hir::Path::decl(decl)))
  }

  pub(crate) fn tuple(&mut self, exps: Vec<ExpIdx>) -> ExpIdx {
    self.exp(Exp::Tuple(exps))
  }

  pub(crate) fn array(&mut self, exps: Vec<ExpIdx>) -> ExpIdx {
    self.exp(Exp::Array(exps))
  }

  pub(crate) fn call(&mut self, func: ExpIdx, arg: ExpIdx) -> ExpIdx {
    self.exp(Exp::Call(func, arg))
  }

  pub(crate) fn field(&mut self, exp: ExpIdx, name: &str) -> ExpIdx {
    self.exp(Exp::Field(exp, Name::new(name)))
  }

  pub(crate) fn unary(&mut self, op: UnOp, exp: ExpIdx) -> ExpIdx {
    self.exp(Exp::Unary(op, exp))
  }

  pub(crate) fn binary(&mut self, op: BinOp, lhs: ExpIdx, rhs: ExpIdx) -> ExpIdx {
    self.exp(Exp::Binary(op, lhs, rhs))
  }

  /// an anonymous function with no return type annotation.
  pub(crate) fn lambda(&mut self, param: PatIdx, body: ExpIdx) -> ExpIdx {
    self.exp(Exp::Fn(ark_hir::FnExp { param, ret: None, body }))
  }

  pub(crate) fn block(&mut self, stmts: Vec<Stmt>) -> ExpIdx {
    let stmts: Vec<_> = stmts.into_iter().map(|stmt| self.stmt(stmt)).collect();
    self.exp(Exp::Block(stmts))
  }

  /// like [`Self::block`], but the statements are already allocated.
  pub(crate) fn block_of(&mut self, stmts: Vec<StmtIdx>) -> ExpIdx {
    self.exp(Exp::Block(stmts))
  }

  pub(crate) fn stmt(&mut self, stmt: Stmt) -> StmtIdx {
    self.ars.stmt.alloc(stmt)
  }

  // patterns //

  pub(crate) fn pat(&mut self, pat: Pat) -> PatIdx {
    self.ars.pat.alloc(pat)
  }

  pub(crate) fn var(&mut self, name: &str) -> DeclIdx {
    self.decl(Decl::Var(Name::new(name)))
  }

  /// returns the pattern and the variable it binds.
  pub(crate) fn id_pat(&mut self, name: &str) -> (PatIdx, DeclIdx) {
    let var = self.var(name);
    (self.pat(Pat::Id(var)), var)
  }

  pub(crate) fn typed_pat(&mut self, name: &str, ty: TyIdx) -> (PatIdx, DeclIdx) {
    let (pat, var) = self.id_pat(name);
    (self.pat(Pat::Typed(pat, ty)), var)
  }

  pub(crate) fn unit_pat(&mut self) -> PatIdx {
    self.pat(Pat::Tuple(Vec::new()))
  }

  // types //

  pub(crate) fn ty(&mut self, ty: Ty) -> TyIdx {
    self.ars.ty.alloc(ty)
  }

  pub(crate) fn prim(&mut self, prim: Prim) -> TyIdx {
    self.ty(Ty::Prim(prim))
  }

  /// a path to a type, like `T` or `List[T]`.
  pub(crate) fn ty_path(&mut self, decl: DeclIdx, args: Vec<TyIdx>) -> TyIdx {
    self.ty(Ty::Path(decl, args))
  }

  // declarations //

  pub(crate) fn decl(&mut self, decl: Decl) -> DeclIdx {
    self.ars.decl.alloc(decl)
  }

  /// allocates a placeholder, for declarations that must know their own index, like a function
  /// that calls itself. replace it with [`Self::set_decl`].
  pub(crate) fn reserve_decl(&mut self) -> DeclIdx {
    self.decl(Decl::Var(Name::default()))
  }

  pub(crate) fn set_decl(&mut self, idx: DeclIdx, decl: Decl) {
    self.ars.decl[idx] = decl;
  }

  pub(crate) fn ty_param(&mut self, name: &str) -> DeclIdx {
    self.decl(Decl::TyParam(Name::new(name)))
  }

  /// returns the let declaration and the variable it binds.
  pub(crate) fn let_(&mut self, name: &str, init: ExpIdx) -> (DeclIdx, DeclIdx) {
    let (pat, var) = self.id_pat(name);
    (self.let_pat(pat, init), var)
  }

  pub(crate) fn let_pat(&mut self, pat: PatIdx, init: ExpIdx) -> DeclIdx {
    self.decl(Decl::Let(ark_hir::LetDecl { pat, init }))
  }

  pub(crate) fn fn_decl(
    &mut self,
    decl: DeclIdx,
    name: &str,
    ty_params: Vec<DeclIdx>,
    param: PatIdx,
    ret: Option<TyIdx>,
    body: ExpIdx,
  ) {
    let name = Name::new(name);
    self.set_decl(decl, Decl::Fn(ark_hir::FnDecl { name, ty_params, param, ret, body }));
  }

  /// a `return` from the function declared at `decl`.
  pub(crate) fn ret(&mut self, decl: DeclIdx, exp: Option<ExpIdx>) -> ExpIdx {
    self.exp(Exp::Return(Some(FnRef::Decl(decl)), exp))
  }

  // the root //

  pub(crate) fn top(&mut self, decl: DeclIdx) {
    self.root.push(decl);
  }

  /// adds `let name = init` to the root, and returns the variable.
  pub(crate) fn top_let(&mut self, name: &str, init: ExpIdx) -> DeclIdx {
    let (decl, var) = self.let_(name, init);
    self.top(decl);
    var
  }

  /// adds `let (name: ty) = init` to the root, and returns the variable.
  pub(crate) fn top_let_typed(&mut self, name: &str, ty: TyIdx, init: ExpIdx) -> DeclIdx {
    let (pat, var) = self.typed_pat(name, ty);
    let decl = self.let_pat(pat, init);
    self.top(decl);
    var
  }

  /// adds `let _ = exp` to the root, and returns `exp`.
  pub(crate) fn top_exp(&mut self, exp: ExpIdx) -> ExpIdx {
    let pat = self.pat(Pat::Wild);
    let decl = self.let_pat(pat, exp);
    self.top(decl);
    exp
  }

  pub(crate) fn check(self) -> Checked {
    let mut tys = Tys::default();
    let statics = ark_statics::get(&mut tys, &self.ars, &self.root, self.config);
    Checked { tys, statics }
  }
}

pub(crate) struct Checked {
  pub(crate) tys: Tys,
  pub(crate) statics: ark_statics::Statics,
}

impl Checked {
  #[track_caller]
  pub(crate) fn exp(&self, exp: ExpIdx) -> String {
    let Some(ty) = self.statics.info.exp_ty(exp) else { panic!("no type for {exp:?}") };
    self.tys.display(ty).to_string()
  }

  #[track_caller]
  pub(crate) fn decl(&self, decl: DeclIdx) -> String {
    let Some(ty) = self.statics.info.decl_ty(decl) else { panic!("no type for {decl:?}") };
    self.tys.display(ty).to_string()
  }

  pub(crate) fn errors(&self) -> Vec<String> {
    self.errors_with(config::DiagnosticLines::One)
  }

  pub(crate) fn errors_with(&self, lines: config::DiagnosticLines) -> Vec<String> {
    self.statics.errors.iter().map(|e| e.display(&self.tys, lines).to_string()).collect()
  }

  #[track_caller]
  pub(crate) fn assert_no_errors(&self) {
    let errors = self.errors();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert!(self.statics.complete);
  }

  #[track_caller]
  pub(crate) fn assert_errors(&self, want: &[&str]) {
    pretty_assertions::assert_eq!(self.errors(), want);
  }
}
