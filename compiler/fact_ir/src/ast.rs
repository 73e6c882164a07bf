//! Syntax tree for Fact programs.
//!
//! Built bottom-up by the parser and immutable afterwards. The tree derives
//! `Serialize` so external tooling (the CLI's JSON mode) can pretty-print it
//! without this crate knowing about any output format.

use serde::Serialize;
use std::rc::Rc;

/// A whole program: zero or more definitions plus an optional `exec`
/// statement whose expression produces the program's result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    /// Top-level `func`/`val` definitions, in textual order.
    ///
    /// Duplicate names are kept here as written; the evaluator applies the
    /// explicit last-definition-wins policy when seeding its environment.
    pub defs: Vec<Def>,
    /// The single `exec` expression, if the program has one.
    pub exec: Option<Expr>,
}

/// One `func` or `val` definition.
///
/// Definitions are reference-counted so the evaluator can share them between
/// environment frames and closures without cloning bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Def {
    Func(Rc<FuncDef>),
    Val(Rc<ValDef>),
}

impl Def {
    /// The defined name.
    pub fn name(&self) -> &str {
        match self {
            Def::Func(def) => &def.name,
            Def::Val(def) => &def.name,
        }
    }
}

/// `func Name[params] := body end`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuncDef {
    pub name: String,
    /// Ordered parameter names. Either identifier class is allowed.
    pub params: Vec<String>,
    pub body: Expr,
}

/// `val name := body end`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValDef {
    pub name: String,
    pub body: Expr,
}

/// An expression node.
///
/// Grouping parentheses are not represented; the parser promotes the inner
/// expression directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Literal(Literal),
    /// Variable-class identifier reference.
    Var(String),
    /// Bare function-class identifier: a reference to a function value,
    /// used to pass functions as arguments.
    FuncRef(String),
    /// `Name[arg, ...]`
    Call { callee: String, args: Vec<Expr> },
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `if cond then then_branch else else_branch end`
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    /// `let defs in body end`
    Let { defs: Vec<Def>, body: Box<Expr> },
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Literal {
    Number(i64),
    Str(String),
    Bool(bool),
    Nil,
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinOp {
    Or,
    And,
    Eq,
    Lt,
    Gt,
    Add,
    Sub,
    Mul,
    Div,
    Dot,
}

impl BinOp {
    /// Binding power, lowest to highest: `|` < `&` < `= < >` < `+ -`
    /// < `* /` < `.`. All operators are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Or => 1,
            BinOp::And => 2,
            BinOp::Eq | BinOp::Lt | BinOp::Gt => 3,
            BinOp::Add | BinOp::Sub => 4,
            BinOp::Mul | BinOp::Div => 5,
            BinOp::Dot => 6,
        }
    }

    /// Surface spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Or => "|",
            BinOp::And => "&",
            BinOp::Eq => "=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Dot => ".",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn precedence_orders_the_six_levels() {
        let levels = [
            BinOp::Or,
            BinOp::And,
            BinOp::Eq,
            BinOp::Add,
            BinOp::Mul,
            BinOp::Dot,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].precedence() < pair[1].precedence());
        }
        assert_eq!(BinOp::Eq.precedence(), BinOp::Lt.precedence());
        assert_eq!(BinOp::Add.precedence(), BinOp::Sub.precedence());
        assert_eq!(BinOp::Mul.precedence(), BinOp::Div.precedence());
    }

    #[test]
    fn def_name_covers_both_kinds() {
        let func = Def::Func(Rc::new(FuncDef {
            name: "Add".into(),
            params: vec!["x".into()],
            body: Expr::Var("x".into()),
        }));
        let val = Def::Val(Rc::new(ValDef {
            name: "x".into(),
            body: Expr::Literal(Literal::Number(1)),
        }));
        assert_eq!(func.name(), "Add");
        assert_eq!(val.name(), "x");
    }
}
