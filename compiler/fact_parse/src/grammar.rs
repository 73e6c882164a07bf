//! The Fact grammar.
//!
//! ```text
//! program   := facts [exec expr]
//! facts     := (func_def | val_def)*
//! func_def  := 'func' FUNC_ID '[' params ']' ':=' expr 'end'
//! val_def   := 'val' VAR_ID ':=' expr 'end'
//! params    := (VAR_ID | FUNC_ID) (',' (VAR_ID | FUNC_ID))*
//! expr      := binary operators over primary (precedence climbing)
//! primary   := literal | VAR_ID | FUNC_ID | FUNC_ID '[' args ']'
//!            | '(' expr ')' | 'if' expr 'then' expr 'else' expr 'end'
//!            | 'let' facts 'in' expr 'end'
//! args      := expr (',' expr)*
//! ```

use crate::cursor::Cursor;
use crate::recovery::{sync_set, synchronize};
use fact_diagnostic::{expected_syntax, expected_token, unexpected_token, Diagnostics};
use fact_ir::{BinOp, Def, Expr, FuncDef, LineMap, Literal, Program, TokenKind, ValDef};
use fact_stack::ensure_sufficient_stack;
use std::rc::Rc;
use tracing::trace;

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    line_map: &'a LineMap,
    diagnostics: Diagnostics,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a fact_ir::TokenList, line_map: &'a LineMap) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            line_map,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Parse a whole program. Always terminates; always returns a tree.
    pub fn program(&mut self) -> Program {
        let mut defs = Vec::new();
        let mut exec = None;

        loop {
            match self.cursor.current_kind() {
                TokenKind::Func => {
                    if let Some(def) = self.func_def() {
                        defs.push(Def::Func(Rc::new(def)));
                    } else {
                        self.recover_def();
                    }
                }
                TokenKind::Val => {
                    if let Some(def) = self.val_def() {
                        defs.push(Def::Val(Rc::new(def)));
                    } else {
                        self.recover_def();
                    }
                }
                TokenKind::Exec if exec.is_none() => {
                    self.cursor.advance();
                    exec = self.expr();
                }
                TokenKind::Eof => break,
                _ => {
                    self.report_unexpected();
                    // Consume the offender (it may itself be a sync token)
                    // so recovery always makes progress.
                    self.cursor.advance();
                    synchronize(&mut self.cursor, sync_set());
                }
            }
        }

        Program { defs, exec }
    }

    // Definitions

    /// `func Name[params] := expr end`
    fn func_def(&mut self) -> Option<FuncDef> {
        self.cursor.advance(); // 'func'
        let name = self.expect_func_name()?;
        trace!(name = %name, "parsing function definition");
        self.expect(&TokenKind::LBracket)?;
        let params = self.params()?;
        self.expect(&TokenKind::RBracket)?;
        self.expect(&TokenKind::Assign)?;
        let body = self.expr()?;
        self.expect(&TokenKind::End)?;
        Some(FuncDef { name, params, body })
    }

    /// `val name := expr end`
    fn val_def(&mut self) -> Option<ValDef> {
        self.cursor.advance(); // 'val'
        let name = self.expect_var_name()?;
        self.expect(&TokenKind::Assign)?;
        let body = self.expr()?;
        self.expect(&TokenKind::End)?;
        Some(ValDef { name, body })
    }

    /// Parameter list; either identifier class is allowed, and the list is
    /// never empty.
    fn params(&mut self) -> Option<Vec<String>> {
        let mut params = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::Ident(name) | TokenKind::FuncIdent(name) => {
                    params.push(name.clone());
                    self.cursor.advance();
                }
                found => {
                    let (line, column) = self.position();
                    self.diagnostics
                        .push(expected_syntax(line, column, "a parameter name", found));
                    synchronize(&mut self.cursor, sync_set());
                    return None;
                }
            }
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        Some(params)
    }

    // Expressions

    pub(crate) fn expr(&mut self) -> Option<Expr> {
        self.binary_expr(1)
    }

    /// Precedence climbing over the binary operator table. All operators
    /// are left-associative, so the recursive call uses `precedence + 1`.
    fn binary_expr(&mut self, min_prec: u8) -> Option<Expr> {
        ensure_sufficient_stack(|| {
            let mut lhs = self.primary()?;
            while let Some(op) = binop_of(self.cursor.current_kind()) {
                if op.precedence() < min_prec {
                    break;
                }
                self.cursor.advance();
                let rhs = self.binary_expr(op.precedence() + 1)?;
                lhs = Expr::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                };
            }
            Some(lhs)
        })
    }

    fn primary(&mut self) -> Option<Expr> {
        match self.cursor.current_kind() {
            TokenKind::Number(n) => {
                let n = *n;
                self.cursor.advance();
                Some(Expr::Literal(Literal::Number(n)))
            }
            TokenKind::Str(s) => {
                let s = s.clone();
                self.cursor.advance();
                Some(Expr::Literal(Literal::Str(s)))
            }
            TokenKind::True => {
                self.cursor.advance();
                Some(Expr::Literal(Literal::Bool(true)))
            }
            TokenKind::False => {
                self.cursor.advance();
                Some(Expr::Literal(Literal::Bool(false)))
            }
            TokenKind::Nil => {
                self.cursor.advance();
                Some(Expr::Literal(Literal::Nil))
            }
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.cursor.advance();
                Some(Expr::Var(name))
            }
            TokenKind::FuncIdent(name) => {
                let name = name.clone();
                self.cursor.advance();
                if self.cursor.eat(&TokenKind::LBracket) {
                    let args = self.call_args()?;
                    self.expect(&TokenKind::RBracket)?;
                    Some(Expr::Call { callee: name, args })
                } else {
                    // A bare function-class identifier is a reference to the
                    // function value (for passing functions as arguments).
                    Some(Expr::FuncRef(name))
                }
            }
            TokenKind::LParen => {
                self.cursor.advance();
                // Grouping carries no node of its own; the inner expression
                // is promoted directly.
                let inner = self.expr()?;
                self.expect(&TokenKind::RParen)?;
                Some(inner)
            }
            TokenKind::If => self.if_expr(),
            TokenKind::Let => self.let_expr(),
            _ => {
                self.report_unexpected();
                synchronize(&mut self.cursor, sync_set());
                None
            }
        }
    }

    /// `if expr then expr else expr end` — both branches are always
    /// present in the grammar.
    fn if_expr(&mut self) -> Option<Expr> {
        self.cursor.advance(); // 'if'
        let cond = self.expr()?;
        self.expect(&TokenKind::Then)?;
        let then_branch = self.expr()?;
        self.expect(&TokenKind::Else)?;
        let else_branch = self.expr()?;
        self.expect(&TokenKind::End)?;
        Some(Expr::If {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    /// `let facts in expr end`
    fn let_expr(&mut self) -> Option<Expr> {
        self.cursor.advance(); // 'let'
        let mut defs = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::Func => {
                    if let Some(def) = self.func_def() {
                        defs.push(Def::Func(Rc::new(def)));
                    } else {
                        self.recover_def();
                    }
                }
                TokenKind::Val => {
                    if let Some(def) = self.val_def() {
                        defs.push(Def::Val(Rc::new(def)));
                    } else {
                        self.recover_def();
                    }
                }
                _ => break,
            }
        }
        self.expect(&TokenKind::In)?;
        let body = self.expr()?;
        self.expect(&TokenKind::End)?;
        Some(Expr::Let {
            defs,
            body: Box::new(body),
        })
    }

    /// Call arguments; never empty. Bare function references parse through
    /// [`Parser::primary`] like any other expression.
    fn call_args(&mut self) -> Option<Vec<Expr>> {
        let mut args = vec![self.expr()?];
        while self.cursor.eat(&TokenKind::Comma) {
            args.push(self.expr()?);
        }
        Some(args)
    }

    // Diagnostics and recovery

    /// 1-based (line, column) of the current token.
    fn position(&self) -> (u32, u32) {
        self.line_map.span_location(self.cursor.current_span())
    }

    fn report_unexpected(&mut self) {
        let (line, column) = self.position();
        self.diagnostics
            .push(unexpected_token(line, column, self.cursor.current_kind()));
    }

    /// Require `kind`; on mismatch record a diagnostic and synchronize.
    fn expect(&mut self, kind: &TokenKind) -> Option<()> {
        if self.cursor.eat(kind) {
            return Some(());
        }
        let (line, column) = self.position();
        self.diagnostics.push(expected_token(
            line,
            column,
            kind,
            self.cursor.current_kind(),
        ));
        synchronize(&mut self.cursor, sync_set());
        None
    }

    fn expect_func_name(&mut self) -> Option<String> {
        if let TokenKind::FuncIdent(name) = self.cursor.current_kind() {
            let name = name.clone();
            self.cursor.advance();
            return Some(name);
        }
        let (line, column) = self.position();
        self.diagnostics.push(expected_syntax(
            line,
            column,
            "a function name",
            self.cursor.current_kind(),
        ));
        synchronize(&mut self.cursor, sync_set());
        None
    }

    fn expect_var_name(&mut self) -> Option<String> {
        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            let name = name.clone();
            self.cursor.advance();
            return Some(name);
        }
        let (line, column) = self.position();
        self.diagnostics.push(expected_syntax(
            line,
            column,
            "a variable name",
            self.cursor.current_kind(),
        ));
        synchronize(&mut self.cursor, sync_set());
        None
    }

    /// After a failed definition: the failure already synchronized, so the
    /// cursor sits on a sync token. If that token is the broken
    /// definition's own `end`, consume it so parsing resumes after the
    /// definition.
    fn recover_def(&mut self) {
        synchronize(&mut self.cursor, sync_set());
        if self.cursor.check(&TokenKind::End) {
            self.cursor.advance();
        }
    }
}

/// Map a token to its binary operator, if it is one.
fn binop_of(kind: &TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Pipe => Some(BinOp::Or),
        TokenKind::Amp => Some(BinOp::And),
        TokenKind::Eq => Some(BinOp::Eq),
        TokenKind::Lt => Some(BinOp::Lt),
        TokenKind::Gt => Some(BinOp::Gt),
        TokenKind::Plus => Some(BinOp::Add),
        TokenKind::Minus => Some(BinOp::Sub),
        TokenKind::Star => Some(BinOp::Mul),
        TokenKind::Slash => Some(BinOp::Div),
        TokenKind::Dot => Some(BinOp::Dot),
        _ => None,
    }
}
