//! The tree-walking interpreter.

use crate::environment::{bind_defs, Binding, Frame, FrameRef};
use crate::operators::evaluate_binary;
use crate::value::{Closure, Value};
use crate::EvalResult;
use fact_diagnostic::{
    arity_mismatch, not_a_function, recursion_limit_exceeded, undefined_function,
    undefined_variable,
};
use fact_ir::{Expr, Literal, Program};
use fact_stack::ensure_sufficient_stack;
use std::rc::Rc;
use tracing::debug;

const DEFAULT_MAX_DEPTH: usize = 1024;

/// Evaluates a program against parent-linked environment frames.
///
/// The depth counter covers every environment-extending step (calls, `let`
/// blocks, and `val` forcing), so unbounded recursion is reported as
/// [`RuntimeErrorKind::RecursionLimitExceeded`] instead of overflowing
/// the stack.
///
/// [`RuntimeErrorKind::RecursionLimitExceeded`]: fact_diagnostic::RuntimeErrorKind::RecursionLimitExceeded
pub struct Interpreter {
    max_depth: usize,
    depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Interpreter {
            max_depth,
            depth: 0,
        }
    }

    /// Run a whole program: install the top-level definitions into a root
    /// frame, then evaluate the `exec` expression. A program without an
    /// `exec` clause evaluates to `nil`.
    pub fn run(&mut self, program: &Program) -> EvalResult {
        debug!(defs = program.defs.len(), "running program");
        let globals = Frame::root();
        bind_defs(&globals, &program.defs);
        match &program.exec {
            Some(expr) => self.eval(expr, &globals),
            None => Ok(Value::Nil),
        }
    }

    pub fn eval(&mut self, expr: &Expr, env: &FrameRef) -> EvalResult {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(lit) => Ok(literal_value(lit)),
            Expr::Var(name) => self.eval_var(name, env),
            Expr::FuncRef(name) => self.eval_func_ref(name, env),
            Expr::Call { callee, args } => self.eval_call(callee, args, env),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.eval(lhs, env)?;
                let rhs = self.eval(rhs, env)?;
                evaluate_binary(*op, lhs, rhs)
            }
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval(cond, env)?.truthy() {
                    self.eval(then_branch, env)
                } else {
                    self.eval(else_branch, env)
                }
            }
            Expr::Let { defs, body } => self.with_depth(|this| {
                let frame = Frame::child(env);
                bind_defs(&frame, defs);
                this.eval(body, &frame)
            }),
        })
    }

    fn eval_var(&mut self, name: &str, env: &FrameRef) -> EvalResult {
        let binding = env.borrow().lookup(name);
        match binding {
            Some(Binding::Value(value)) => Ok(value),
            // A val body is re-evaluated in its defining frame on every
            // reference, so it may mention names defined later in the
            // same scope.
            Some(Binding::Val { def, env }) => {
                self.with_depth(|this| this.eval(&def.body, &env))
            }
            Some(Binding::Func(closure)) => Ok(Value::Function(closure)),
            None => Err(undefined_variable(name)),
        }
    }

    fn eval_func_ref(&mut self, name: &str, env: &FrameRef) -> EvalResult {
        match self.resolve_function(name, env)? {
            Some(closure) => Ok(Value::Function(closure)),
            None => Err(not_a_function(name)),
        }
    }

    fn eval_call(&mut self, callee: &str, args: &[Expr], env: &FrameRef) -> EvalResult {
        let Some(closure) = self.resolve_function(callee, env)? else {
            return Err(not_a_function(callee));
        };
        let def = &closure.def;
        if def.params.len() != args.len() {
            return Err(arity_mismatch(callee, def.params.len(), args.len()));
        }
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg, env)?);
        }
        self.with_depth(|this| {
            let frame = Frame::child(&closure.env);
            {
                let mut frame = frame.borrow_mut();
                for (param, value) in def.params.iter().zip(values) {
                    frame.define(param.clone(), Binding::Value(value));
                }
            }
            this.eval(&def.body, &frame)
        })
    }

    /// Resolve a function-class name to a closure. `Ok(None)` means the
    /// name is bound but does not denote a function.
    fn resolve_function(
        &mut self,
        name: &str,
        env: &FrameRef,
    ) -> Result<Option<Rc<Closure>>, fact_diagnostic::RuntimeError> {
        let binding = env.borrow().lookup(name);
        match binding {
            Some(Binding::Func(closure)) => Ok(Some(closure)),
            Some(Binding::Value(Value::Function(closure))) => Ok(Some(closure)),
            Some(Binding::Value(_)) => Ok(None),
            Some(Binding::Val { def, env }) => {
                match self.with_depth(|this| this.eval(&def.body, &env))? {
                    Value::Function(closure) => Ok(Some(closure)),
                    _ => Ok(None),
                }
            }
            None => Err(undefined_function(name)),
        }
    }

    /// Run `f` one environment level deeper, failing once the configured
    /// limit is reached.
    fn with_depth<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, fact_diagnostic::RuntimeError>,
    ) -> Result<T, fact_diagnostic::RuntimeError> {
        if self.depth >= self.max_depth {
            return Err(recursion_limit_exceeded(self.max_depth));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

fn literal_value(lit: &Literal) -> Value {
    match lit {
        Literal::Number(n) => Value::Int(*n),
        Literal::Str(s) => Value::Str(s.clone()),
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Nil => Value::Nil,
    }
}
