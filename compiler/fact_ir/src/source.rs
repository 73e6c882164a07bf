//! Printing the syntax tree back to Fact source.
//!
//! The printer emits text that lexes and parses back to a structurally
//! identical tree. Binary operands are fully parenthesized so the output
//! never depends on the precedence table; the parser discards the parens
//! again on the way back in.

use crate::{Def, Expr, FuncDef, Literal, Program, ValDef};
use std::fmt;

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for def in &self.defs {
            writeln!(f, "{def}")?;
        }
        if let Some(exec) = &self.exec {
            writeln!(f, "exec {exec}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Def {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Def::Func(def) => write!(f, "{def}"),
            Def::Val(def) => write!(f, "{def}"),
        }
    }
}

impl fmt::Display for FuncDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func {}[", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, "] := {} end", self.body)
    }
}

impl fmt::Display for ValDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "val {} := {} end", self.name, self.body)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{lit}"),
            Expr::Var(name) | Expr::FuncRef(name) => write!(f, "{name}"),
            Expr::Call { callee, args } => {
                write!(f, "{callee}[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, "]")
            }
            Expr::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "if {cond} then {then_branch} else {else_branch} end"),
            Expr::Let { defs, body } => {
                write!(f, "let ")?;
                for def in defs {
                    write!(f, "{def} ")?;
                }
                write!(f, "in {body} end")
            }
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Str(s) => write!(f, "\"{s}\""),
            Literal::Bool(true) => write!(f, "true"),
            Literal::Bool(false) => write!(f, "false"),
            Literal::Nil => write!(f, "nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinOp;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn num(n: i64) -> Expr {
        Expr::Literal(Literal::Number(n))
    }

    #[test]
    fn binary_is_fully_parenthesized() {
        let expr = Expr::Binary {
            op: BinOp::Add,
            lhs: Box::new(num(1)),
            rhs: Box::new(Expr::Binary {
                op: BinOp::Mul,
                lhs: Box::new(num(2)),
                rhs: Box::new(num(3)),
            }),
        };
        assert_eq!(expr.to_string(), "(1 + (2 * 3))");
    }

    #[test]
    fn program_prints_defs_then_exec() {
        let program = Program {
            defs: vec![Def::Val(Rc::new(ValDef {
                name: "x".into(),
                body: num(1),
            }))],
            exec: Some(Expr::Var("x".into())),
        };
        assert_eq!(program.to_string(), "val x := 1 end\nexec x\n");
    }

    #[test]
    fn call_and_let_shapes() {
        let expr = Expr::Let {
            defs: vec![Def::Val(Rc::new(ValDef {
                name: "y".into(),
                body: num(10),
            }))],
            body: Box::new(Expr::Call {
                callee: "Double".into(),
                args: vec![Expr::Var("y".into()), Expr::FuncRef("Twice".into())],
            }),
        };
        assert_eq!(
            expr.to_string(),
            "let val y := 10 end in Double[y, Twice] end"
        );
    }
}
