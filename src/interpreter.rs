// ABOUTME: The facade a host embeds: owns globals, the builtin table and the host bridge

use std::collections::HashMap;
use std::sync::Mutex;

use crate::builtins;
use crate::eval::{eval, BuiltinFn};
use crate::host::{HostBridge, HostCallback};
use crate::parser::parse;
use crate::scope::LocalScope;
use crate::value::Value;

/// Owns the global binding table (mutex-guarded), the fixed builtin registry
/// (populated once at construction, read-only thereafter), and the host
/// bridge. Safe to share across threads: `run` may be called concurrently
/// from multiple host threads on the same instance.
pub struct Interpreter {
    globals: Mutex<HashMap<String, Value>>,
    builtins: HashMap<&'static str, BuiltinFn>,
    pub(crate) host: HostBridge,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            globals: Mutex::new(HashMap::new()),
            builtins: builtins::registry(),
            host: HostBridge::new(),
        }
    }

    pub fn register_var_f64(&mut self, name: &str, ptr: *mut f64, components: usize, readonly: bool) {
        self.host.register_f64(name, ptr, components, readonly);
    }

    pub fn register_var_f32(&mut self, name: &str, ptr: *mut f32, components: usize, readonly: bool) {
        self.host.register_f32(name, ptr, components, readonly);
    }

    pub fn register_var_i64(&mut self, name: &str, ptr: *mut i64, components: usize, readonly: bool) {
        self.host.register_i64(name, ptr, components, readonly);
    }

    pub fn register_var_u64(&mut self, name: &str, ptr: *mut u64, components: usize, readonly: bool) {
        self.host.register_u64(name, ptr, components, readonly);
    }

    pub fn register_var_i32(&mut self, name: &str, ptr: *mut i32, components: usize, readonly: bool) {
        self.host.register_i32(name, ptr, components, readonly);
    }

    pub fn register_var_u32(&mut self, name: &str, ptr: *mut u32, components: usize, readonly: bool) {
        self.host.register_u32(name, ptr, components, readonly);
    }

    pub fn register_var_bool(&mut self, name: &str, ptr: *mut bool, components: usize, readonly: bool) {
        self.host.register_bool(name, ptr, components, readonly);
    }

    pub fn register_func(&mut self, name: &str, callback: HostCallback) {
        self.host.register_func(name, callback);
    }

    pub(crate) fn get_global(&self, name: &str) -> Option<Value> {
        self.globals.lock().expect("global table poisoned").get(name).cloned()
    }

    pub(crate) fn set_global(&self, name: String, value: Value) {
        self.globals
            .lock()
            .expect("global table poisoned")
            .insert(name, value);
    }

    pub(crate) fn get_builtin(&self, name: &str) -> Option<Value> {
        self.builtins.get(name).map(|&func| Value::BuiltinFunc {
            name: name.into(),
            func,
        })
    }

    /// Parse and evaluate `text`, returning `(result, error)` per the
    /// host-facing contract: on success `error` is empty; on failure
    /// `result` is empty and `error` carries a human-readable message.
    pub fn run(&self, text: &str) -> (String, String) {
        let tree = parse(text);
        match eval(tree, &LocalScope::new(), self) {
            Ok(result) => (result.to_string(), String::new()),
            Err(err) => (String::new(), err.to_string()),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
