//! Checking expressions.
//!
//! There are two entry points. [`infer`] finds the type of an expression from the expression
//! alone. [`check`] checks the expression against a wanted type, which lets information flow
//! down into the expression, e.g. for an empty array literal or the parameter of an anonymous
//! function. Expressions without a rule of their own for `check` are inferred and then unified
//! with the wanted type.
//!
//! Each expression is visited once, and its type is recorded in the [`crate::info::Info`].

use crate::error::{ErrorKind, Item};
use crate::unify::{unify, unify_or};
use crate::{decl, op, pat, st::St, ty};
use ark_statics_types::generalize::{instantiate, subsume};
use ark_statics_types::nominal;
use ark_statics_types::ty::{FnData, Ty, TyData, VarKind};

pub(crate) fn infer(st: &mut St<'_>, ars: &ark_hir::Arenas, exp: ark_hir::ExpIdx) -> Ty {
  let ret = infer_(st, ars, exp);
  st.info.insert_exp(exp, ret);
  ret
}

pub(crate) fn check(st: &mut St<'_>, ars: &ark_hir::Arenas, exp: ark_hir::ExpIdx, want: Ty) -> Ty {
  let ret = check_(st, ars, exp, want);
  st.info.insert_exp(exp, ret);
  ret
}

fn infer_(st: &mut St<'_>, ars: &ark_hir::Arenas, exp: ark_hir::ExpIdx) -> Ty {
  match &ars.exp[exp] {
    ark_hir::Exp::Lit(lit) => match lit {
      ark_hir::Lit::Bool(_) => Ty::BOOL,
      ark_hir::Lit::Int(_) => Ty::I32,
      ark_hir::Lit::Float(_) => Ty::F64,
    },
    ark_hir::Exp::Path(path) => get_path(st, ars, exp, path),
    ark_hir::Exp::Tuple(exps) => {
      let tys: Vec<_> = exps.iter().map(|&exp| infer(st, ars, exp)).collect();
      st.tys.tuple(tys)
    }
    ark_hir::Exp::Array(exps) => {
      let Some((&fst, rest)) = exps.split_first() else {
        st.err(exp, ErrorKind::CannotInfer("array expression"));
        return Ty::ERROR;
      };
      // diverging elements say nothing about the element type.
      let mut elem = infer(st, ars, fst);
      let mut rest = rest.iter();
      while st.tys.find(elem) == Ty::NO_RET {
        let Some(&exp) = rest.next() else { break };
        elem = infer(st, ars, exp);
      }
      for &exp in rest {
        check(st, ars, exp, elem);
      }
      st.tys.sized_array(elem, exps.len() as u64)
    }
    ark_hir::Exp::Block(stmts) => get_block(st, ars, exp, stmts, None),
    ark_hir::Exp::Fn(f) => get_fn(st, ars, exp, f, None),
    ark_hir::Exp::Call(func, arg) => get_call(st, ars, exp, *func, *arg),
    ark_hir::Exp::If(cond, yes, no) => {
      check(st, ars, *cond, Ty::BOOL);
      match no {
        None => {
          check(st, ars, *yes, Ty::UNIT);
          Ty::UNIT
        }
        Some(no) => {
          let yes = infer(st, ars, *yes);
          let no = infer(st, ars, *no);
          join_branches(st, exp, yes, no)
        }
      }
    }
    ark_hir::Exp::While(cond, body) => {
      check(st, ars, *cond, Ty::BOOL);
      check(st, ars, *body, Ty::UNIT);
      Ty::UNIT
    }
    ark_hir::Exp::Break | ark_hir::Exp::Continue => Ty::NO_RET,
    ark_hir::Exp::Return(target, inner) => {
      let want = target.and_then(|target| st.returns.get(&target).copied());
      match (inner, want) {
        (Some(inner), Some(want)) => {
          check(st, ars, *inner, want);
        }
        (Some(inner), None) => {
          infer(st, ars, *inner);
        }
        (None, Some(want)) => {
          unify(st, exp, want, Ty::UNIT);
        }
        (None, None) => {}
      }
      Ty::NO_RET
    }
    ark_hir::Exp::Typed(inner, want) => {
      let want = ty::get(st, ars, *want);
      check(st, ars, *inner, want)
    }
    ark_hir::Exp::Field(inner, name) => get_field(st, ars, exp, *inner, name),
    ark_hir::Exp::Struct(s) => get_struct(st, ars, exp, s),
    ark_hir::Exp::Index(arr, idx) => {
      let arr_ty = infer(st, ars, *arr);
      let idx_ty = infer(st, ars, *idx);
      op::require(st, *idx, "[]", idx_ty, op::Class::Int);
      let arr_ty = st.tys.find(arr_ty);
      match st.tys.data(arr_ty) {
        TyData::SizedArray(elem, _) | TyData::UnsizedArray(elem) => *elem,
        TyData::Error => Ty::ERROR,
        TyData::Var(_) => {
          st.err(*arr, ErrorKind::CannotInfer("indexed expression"));
          Ty::ERROR
        }
        _ => {
          st.err(*arr, ErrorKind::NotAnArray(arr_ty));
          Ty::ERROR
        }
      }
    }
    ark_hir::Exp::Unary(un_op, inner) => op::unary(st, ars, exp, *un_op, *inner),
    ark_hir::Exp::Binary(bin_op, lhs, rhs) => op::binary(st, ars, exp, *bin_op, *lhs, *rhs),
  }
}

fn check_(st: &mut St<'_>, ars: &ark_hir::Arenas, exp: ark_hir::ExpIdx, want: Ty) -> Ty {
  let want = st.tys.find(want);
  let want_data = st.tys.data(want).clone();
  let want_is_var = matches!(want_data, TyData::Var(_));
  match (&ars.exp[exp], want_data) {
    // literals take the wanted type, if it is the right kind of primitive.
    (ark_hir::Exp::Lit(ark_hir::Lit::Int(_)), TyData::Prim(prim)) if prim.is_int() => want,
    (ark_hir::Exp::Lit(ark_hir::Lit::Float(_)), TyData::Prim(prim)) if prim.is_float() => want,
    (ark_hir::Exp::Tuple(exps), TyData::Tuple(want_tys)) => {
      if exps.len() != want_tys.len() {
        for &exp in exps {
          infer(st, ars, exp);
        }
        st.err(exp, ErrorKind::WrongArity(want_tys.len(), exps.len()));
        return Ty::ERROR;
      }
      let tys: Vec<_> =
        exps.iter().zip(want_tys).map(|(&exp, want)| check(st, ars, exp, want)).collect();
      st.tys.tuple(tys)
    }
    (ark_hir::Exp::Array(exps), TyData::SizedArray(elem, _) | TyData::UnsizedArray(elem)) => {
      for &exp in exps {
        check(st, ars, exp, elem);
      }
      let got = st.tys.sized_array(elem, exps.len() as u64);
      unify(st, exp, want, got)
    }
    // already reported.
    (ark_hir::Exp::Array(exps), TyData::Error) if exps.is_empty() => Ty::ERROR,
    (ark_hir::Exp::Block(stmts), _) => get_block(st, ars, exp, stmts, Some(want)),
    (ark_hir::Exp::Fn(f), TyData::Fn(want)) => get_fn(st, ars, exp, f, Some(want)),
    // if the wanted type is a variable, inferring is better, since then the branches can be
    // joined before the variable is bound.
    (ark_hir::Exp::If(cond, yes, Some(no)), _) if !want_is_var => {
      check(st, ars, *cond, Ty::BOOL);
      let yes = check(st, ars, *yes, want);
      let no = check(st, ars, *no, want);
      join_branches(st, exp, yes, no)
    }
    (ark_hir::Exp::Typed(inner, got), _) => {
      let got = ty::get(st, ars, *got);
      let got = check(st, ars, *inner, got);
      unify(st, exp, want, got)
    }
    _ => {
      let got = infer_(st, ars, exp);
      unify(st, exp, want, got)
    }
  }
}

/// a branch that diverges contributes nothing, so it must not bind a variable in the other branch
/// to `!`.
fn join_branches(st: &mut St<'_>, exp: ark_hir::ExpIdx, yes: Ty, no: Ty) -> Ty {
  if st.tys.find(yes) == Ty::NO_RET {
    return no;
  }
  if st.tys.find(no) == Ty::NO_RET {
    return yes;
  }
  unify_or(st, exp, yes, no, ErrorKind::NoJoin)
}

fn get_path(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  exp: ark_hir::ExpIdx,
  path: &ark_hir::Path,
) -> Ty {
  match &ars.decl[path.decl] {
    ark_hir::Decl::Var(_) => {
      if !path.ty_args.is_empty() {
        st.err(exp, ErrorKind::WrongNumTyArgs(0, path.ty_args.len()));
        return Ty::ERROR;
      }
      match st.info.decl_ty(path.decl) {
        Some(ty) => subsume(st.tys, ty),
        None => {
          st.err(exp, ErrorKind::CannotInfer("variable"));
          Ty::ERROR
        }
      }
    }
    ark_hir::Decl::Fn(d) => {
      let ty = decl::fn_ty(st, ars, path.decl);
      if path.ty_args.is_empty() {
        return subsume(st.tys, ty);
      }
      let args: Vec<_> = path.ty_args.iter().map(|&arg| ty::get(st, ars, arg)).collect();
      if args.len() != d.ty_params.len() {
        st.err(exp, ErrorKind::WrongNumTyArgs(d.ty_params.len(), args.len()));
        return Ty::ERROR;
      }
      let found = st.tys.find(ty);
      if matches!(st.tys.data(found), TyData::Forall(_)) {
        return instantiate(st.tys, found, &args);
      }
      // in its own body, a function is not generalized yet, so it can only be used at its own
      // type parameters.
      for (&ty_param, arg) in d.ty_params.iter().zip(args) {
        let ty_param = decl::param_ty(st, ars, ty_param);
        unify(st, exp, ty_param, arg);
      }
      ty
    }
    ark_hir::Decl::Enum(d) => {
      let Some(name) = &path.member else {
        st.err(exp, ErrorKind::NotAValue(d.name.clone()));
        return Ty::ERROR;
      };
      let nominal = decl::nominal_ty(st, ars, path.decl);
      let args: Vec<_> = path.ty_args.iter().map(|&arg| ty::get(st, ars, arg)).collect();
      let enum_ty = match ty::apply_or_fresh(st, ars, path.decl, nominal, args) {
        Ok(ty) => ty,
        Err(e) => {
          st.err(exp, e);
          return Ty::ERROR;
        }
      };
      let Some(idx) = nominal::member_idx(st.tys, enum_ty, name) else {
        st.err(exp, ErrorKind::Undefined(Item::Variant, name.clone()));
        return Ty::ERROR;
      };
      st.info.insert_member(exp, idx);
      match nominal::member_ty(st.tys, enum_ty, idx) {
        Some(payload) => st.tys.fun(payload, enum_ty),
        None => enum_ty,
      }
    }
    d => {
      let name = d.name().cloned().unwrap_or_default();
      st.err(exp, ErrorKind::NotAValue(name));
      Ty::ERROR
    }
  }
}

fn get_block(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  exp: ark_hir::ExpIdx,
  stmts: &[ark_hir::StmtIdx],
  want: Option<Ty>,
) -> Ty {
  let decls = stmts.iter().filter_map(|&stmt| match ars.stmt[stmt] {
    ark_hir::Stmt::Decl(decl) => Some(decl),
    ark_hir::Stmt::Exp(_) => None,
  });
  decl::declare_scope(st, ars, decls);
  let Some((&last, init)) = stmts.split_last() else {
    return unit_or(st, exp, want);
  };
  for (idx, &stmt) in init.iter().enumerate() {
    if st.is_stopped() {
      return Ty::ERROR;
    }
    match ars.stmt[stmt] {
      ark_hir::Stmt::Decl(decl) => decl::get(st, ars, decl),
      ark_hir::Stmt::Exp(inner) => {
        let got = infer(st, ars, inner);
        if st.tys.find(got) == Ty::NO_RET {
          let next = stmts[idx + 1];
          st.err_with_note(next, ErrorKind::UnreachableCode, stmt, "after this statement");
          return Ty::ERROR;
        }
        unify(st, inner, Ty::UNIT, got);
      }
    }
  }
  if st.is_stopped() {
    return Ty::ERROR;
  }
  match ars.stmt[last] {
    ark_hir::Stmt::Decl(decl) => {
      decl::get(st, ars, decl);
      unit_or(st, exp, want)
    }
    ark_hir::Stmt::Exp(inner) => match want {
      Some(want) => check(st, ars, inner, want),
      None => infer(st, ars, inner),
    },
  }
}

fn unit_or(st: &mut St<'_>, exp: ark_hir::ExpIdx, want: Option<Ty>) -> Ty {
  match want {
    Some(want) => unify(st, exp, want, Ty::UNIT),
    None => Ty::UNIT,
  }
}

fn get_fn(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  exp: ark_hir::ExpIdx,
  f: &ark_hir::FnExp,
  want: Option<FnData>,
) -> Ty {
  let (param, ret) = match want {
    Some(want) => {
      let param = pat::check(st, ars, f.param, want.dom);
      let ret = match f.ret {
        Some(ret) => {
          let ret = ty::get(st, ars, ret);
          unify(st, exp, want.codom, ret)
        }
        None => want.codom,
      };
      (param, ret)
    }
    None => {
      let param = pat::infer(st, ars, f.param);
      let ret = match f.ret {
        Some(ret) => ty::get(st, ars, ret),
        None => st.tys.var(),
      };
      (param, ret)
    }
  };
  let fn_ref = ark_hir::FnRef::Exp(exp);
  st.returns.insert(fn_ref, ret);
  check(st, ars, f.body, ret);
  st.returns.remove(&fn_ref);
  st.tys.fun(param, ret)
}

fn get_call(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  exp: ark_hir::ExpIdx,
  func: ark_hir::ExpIdx,
  arg: ark_hir::ExpIdx,
) -> Ty {
  let func_ty = infer(st, ars, func);
  let func_ty = st.tys.find(func_ty);
  match st.tys.data(func_ty).clone() {
    TyData::Fn(data) => {
      check(st, ars, arg, data.dom);
      data.codom
    }
    TyData::Var(v) if matches!(st.tys.var_data(v).kind, VarKind::Flexible) => {
      let arg_ty = infer(st, ars, arg);
      let ret = st.tys.var();
      let got = st.tys.fun(arg_ty, ret);
      unify(st, exp, func_ty, got);
      ret
    }
    TyData::Error => {
      infer(st, ars, arg);
      Ty::ERROR
    }
    _ => {
      infer(st, ars, arg);
      st.err(func, ErrorKind::NotCallable(func_ty));
      Ty::ERROR
    }
  }
}

fn get_field(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  exp: ark_hir::ExpIdx,
  inner: ark_hir::ExpIdx,
  name: &ark_hir::Name,
) -> Ty {
  let ty = infer(st, ars, inner);
  let ty = st.tys.find(ty);
  match st.tys.data(ty) {
    TyData::Error => return Ty::ERROR,
    TyData::Var(_) => {
      st.err(inner, ErrorKind::CannotInfer("field access"));
      return Ty::ERROR;
    }
    _ => {}
  }
  if !nominal::is_struct(st.tys, ty) {
    st.err(inner, ErrorKind::NotAStruct(ty));
    return Ty::ERROR;
  }
  let Some(idx) = nominal::member_idx(st.tys, ty, name) else {
    st.err(exp, ErrorKind::Undefined(Item::Field, name.clone()));
    return Ty::ERROR;
  };
  st.info.insert_member(exp, idx);
  nominal::member_ty(st.tys, ty, idx).unwrap_or(Ty::ERROR)
}

fn get_struct(
  st: &mut St<'_>,
  ars: &ark_hir::Arenas,
  exp: ark_hir::ExpIdx,
  s: &ark_hir::StructExp,
) -> Ty {
  let ark_hir::Decl::Struct(d) = &ars.decl[s.decl] else {
    for &(_, field) in &s.fields {
      infer(st, ars, field);
    }
    let kind = if ars.decl[s.decl].is_nominal() {
      ErrorKind::NotAStruct(decl::nominal_ty(st, ars, s.decl))
    } else {
      ErrorKind::NotAType(ars.decl[s.decl].name().cloned().unwrap_or_default())
    };
    st.err(exp, kind);
    return Ty::ERROR;
  };
  let nominal = decl::nominal_ty(st, ars, s.decl);
  let args: Vec<_> = s.ty_args.iter().map(|&arg| ty::get(st, ars, arg)).collect();
  let struct_ty = match ty::apply_or_fresh(st, ars, s.decl, nominal, args) {
    Ok(ty) => ty,
    Err(e) => {
      for &(_, field) in &s.fields {
        infer(st, ars, field);
      }
      st.err(exp, e);
      return Ty::ERROR;
    }
  };
  let mut seen = vec![false; d.fields.len()];
  for (name, field) in &s.fields {
    let Some(idx) = nominal::member_idx(st.tys, struct_ty, name) else {
      infer(st, ars, *field);
      st.err(*field, ErrorKind::Undefined(Item::Field, name.clone()));
      continue;
    };
    if std::mem::replace(&mut seen[idx], true) {
      infer(st, ars, *field);
      st.err(*field, ErrorKind::DuplicateField(name.clone()));
      continue;
    }
    let want = nominal::member_ty(st.tys, struct_ty, idx).unwrap_or(Ty::ERROR);
    check(st, ars, *field, want);
  }
  for (field, seen) in d.fields.iter().zip(seen) {
    if !seen {
      st.err(exp, ErrorKind::MissingField(field.name.clone()));
    }
  }
  struct_ty
}
