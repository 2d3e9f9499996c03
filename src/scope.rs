// ABOUTME: The per-call local binding table, flowed by value down the call stack

use crate::value::Value;
use std::collections::HashMap;

/// A callee's local scope is a plain clone of the caller's — mutating it
/// (via `let`, or parameter binding on a user-function call) never leaks
/// back to the caller, because there is no shared storage underneath it.
#[derive(Debug, Clone, Default)]
pub struct LocalScope {
    bindings: HashMap<String, Value>,
}

impl LocalScope {
    pub fn new() -> Self {
        LocalScope {
            bindings: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn set(&mut self, name: String, value: Value) {
        self.bindings.insert(name, value);
    }
}
