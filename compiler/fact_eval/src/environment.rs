//! Parent-linked environment frames.
//!
//! A frame owns the bindings introduced at one scope and points to the
//! frame enclosing it. Lookup walks the chain outward; definition only
//! ever touches the innermost frame, so entering a `let` or a call can
//! never disturb an outer scope.

use crate::value::{Closure, Value};
use fact_ir::{Def, ValDef};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

pub type FrameRef = Rc<RefCell<Frame>>;

/// What a name is bound to.
#[derive(Debug, Clone)]
pub enum Binding {
    /// A `val` definition. The body is re-evaluated in its defining frame
    /// every time the name is referenced, so a `val` may mention names
    /// defined later in the same scope.
    Val { def: Rc<ValDef>, env: FrameRef },
    /// A `func` definition, already closed over its defining frame.
    Func(Rc<Closure>),
    /// An already-computed value, used for call parameters.
    Value(Value),
}

#[derive(Debug, Default)]
pub struct Frame {
    bindings: FxHashMap<String, Binding>,
    parent: Option<FrameRef>,
}

impl Frame {
    /// A frame with no parent, for the top level of a program.
    pub fn root() -> FrameRef {
        Rc::new(RefCell::new(Frame::default()))
    }

    /// A fresh empty frame enclosed by `parent`.
    pub fn child(parent: &FrameRef) -> FrameRef {
        Rc::new(RefCell::new(Frame {
            bindings: FxHashMap::default(),
            parent: Some(Rc::clone(parent)),
        }))
    }

    /// Bind `name` in this frame. Re-defining a name in the same frame
    /// replaces the earlier binding, so the last definition wins.
    pub fn define(&mut self, name: String, binding: Binding) {
        self.bindings.insert(name, binding);
    }

    /// Resolve `name` against this frame and its ancestors.
    pub fn lookup(&self, name: &str) -> Option<Binding> {
        if let Some(binding) = self.bindings.get(name) {
            return Some(binding.clone());
        }
        self.parent.as_ref().and_then(|p| p.borrow().lookup(name))
    }
}

/// Install a list of definitions into `frame`, in textual order. Each
/// definition captures `frame` itself, so functions can call themselves
/// and each other regardless of definition order.
pub fn bind_defs(frame: &FrameRef, defs: &[Def]) {
    for def in defs {
        match def {
            Def::Func(func) => {
                let closure = Rc::new(Closure {
                    def: Rc::clone(func),
                    env: Rc::clone(frame),
                });
                frame
                    .borrow_mut()
                    .define(func.name.clone(), Binding::Func(closure));
            }
            Def::Val(val) => {
                frame.borrow_mut().define(
                    val.name.clone(),
                    Binding::Val {
                        def: Rc::clone(val),
                        env: Rc::clone(frame),
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fact_ir::{Expr, Literal};

    fn val(name: &str, n: i64) -> Def {
        Def::Val(Rc::new(ValDef {
            name: name.to_owned(),
            body: Expr::Literal(Literal::Number(n)),
        }))
    }

    #[test]
    fn lookup_walks_parent_chain() {
        let root = Frame::root();
        root.borrow_mut()
            .define("x".to_owned(), Binding::Value(Value::Int(1)));
        let inner = Frame::child(&root);
        assert!(inner.borrow().lookup("x").is_some());
        assert!(inner.borrow().lookup("y").is_none());
    }

    #[test]
    fn child_binding_shadows_parent() {
        let root = Frame::root();
        root.borrow_mut()
            .define("x".to_owned(), Binding::Value(Value::Int(1)));
        let inner = Frame::child(&root);
        inner
            .borrow_mut()
            .define("x".to_owned(), Binding::Value(Value::Int(2)));
        let Some(Binding::Value(v)) = inner.borrow().lookup("x") else {
            panic!("expected a value binding");
        };
        assert_eq!(v, Value::Int(2));
        let Some(Binding::Value(v)) = root.borrow().lookup("x") else {
            panic!("expected a value binding");
        };
        assert_eq!(v, Value::Int(1));
    }

    #[test]
    fn last_definition_wins() {
        let root = Frame::root();
        bind_defs(&root, &[val("x", 1), val("x", 2)]);
        let Some(Binding::Val { def, .. }) = root.borrow().lookup("x") else {
            panic!("expected a val binding");
        };
        assert_eq!(def.body, Expr::Literal(Literal::Number(2)));
    }
}
