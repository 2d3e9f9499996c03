// ABOUTME: The bridge between interpreter values and host-owned typed memory and callbacks

use crate::error::EvalError;
use crate::value::Value;
use std::collections::HashMap;

/// A raw pointer into host memory, tagged with the element type it points at.
/// The host guarantees the pointee stays valid for at least as long as the
/// `Interpreter` that registered it.
#[derive(Clone, Copy)]
enum VarPtr {
    F64(*mut f64),
    F32(*mut f32),
    I64(*mut i64),
    U64(*mut u64),
    I32(*mut i32),
    U32(*mut u32),
    Bool(*mut bool),
}

struct ExternalVar {
    ptr: VarPtr,
    components: usize,
    readonly: bool,
}

/// Callback signature a host registers under a name: a list of printed
/// argument strings in, a list of result strings out.
pub type HostCallback = fn(Vec<String>) -> Vec<String>;

/// Registry of named external variables and named external callbacks. Both
/// registries are meant to be populated once at setup, before any `run`, and
/// are read-only thereafter; `get`/`set`/`call` only ever read from them.
#[derive(Default)]
pub struct HostBridge {
    variables: HashMap<String, ExternalVar>,
    functions: HashMap<String, HostCallback>,
}

// SAFETY: the raw pointers held here point at host-owned memory the host
// promises stays valid and is safe to touch from whatever thread runs a
// script; see DESIGN.md for the tradeoff this mirrors from the host bridge
// contract.
unsafe impl Send for HostBridge {}
unsafe impl Sync for HostBridge {}

impl HostBridge {
    pub fn new() -> Self {
        HostBridge::default()
    }

    pub fn register_f64(&mut self, name: &str, ptr: *mut f64, components: usize, readonly: bool) {
        self.insert(name, VarPtr::F64(ptr), components, readonly);
    }

    pub fn register_f32(&mut self, name: &str, ptr: *mut f32, components: usize, readonly: bool) {
        self.insert(name, VarPtr::F32(ptr), components, readonly);
    }

    pub fn register_i64(&mut self, name: &str, ptr: *mut i64, components: usize, readonly: bool) {
        self.insert(name, VarPtr::I64(ptr), components, readonly);
    }

    pub fn register_u64(&mut self, name: &str, ptr: *mut u64, components: usize, readonly: bool) {
        self.insert(name, VarPtr::U64(ptr), components, readonly);
    }

    pub fn register_i32(&mut self, name: &str, ptr: *mut i32, components: usize, readonly: bool) {
        self.insert(name, VarPtr::I32(ptr), components, readonly);
    }

    pub fn register_u32(&mut self, name: &str, ptr: *mut u32, components: usize, readonly: bool) {
        self.insert(name, VarPtr::U32(ptr), components, readonly);
    }

    pub fn register_bool(&mut self, name: &str, ptr: *mut bool, components: usize, readonly: bool) {
        self.insert(name, VarPtr::Bool(ptr), components, readonly);
    }

    fn insert(&mut self, name: &str, ptr: VarPtr, components: usize, readonly: bool) {
        self.variables.insert(
            name.to_string(),
            ExternalVar {
                ptr,
                components,
                readonly,
            },
        );
    }

    pub fn register_func(&mut self, name: &str, callback: HostCallback) {
        self.functions.insert(name.to_string(), callback);
    }

    /// Read a registered variable as a List of one Atom per component.
    pub fn get(&self, name: &str) -> Result<Value, EvalError> {
        let var = self
            .variables
            .get(name)
            .ok_or_else(|| EvalError::VariableNotFound(name.to_string()))?;

        let mut items = Vec::with_capacity(var.components);
        for i in 0..var.components {
            // SAFETY: the host promises `ptr` is valid for `components`
            // elements for the lifetime of this registration.
            let atom = unsafe {
                match var.ptr {
                    VarPtr::F64(p) => Value::from_f64(*p.add(i)),
                    VarPtr::F32(p) => Value::from_f64(*p.add(i) as f64),
                    VarPtr::I64(p) => Value::from_i64(*p.add(i)),
                    VarPtr::U64(p) => Value::from_u64(*p.add(i)),
                    VarPtr::I32(p) => Value::from_i64(*p.add(i) as i64),
                    VarPtr::U32(p) => Value::from_u64(*p.add(i) as u64),
                    VarPtr::Bool(p) => Value::from_i64(*p.add(i) as i64),
                }
            };
            items.push(atom);
        }
        Ok(Value::list(items))
    }

    /// Write a List value into a registered variable, coercing and narrowing
    /// each element to the variable's element type.
    pub fn set(&self, name: &str, value: Value) -> Result<Value, EvalError> {
        let items = value
            .as_list()
            .ok_or_else(|| EvalError::InvalidArgument(value.clone()))?;

        let var = self
            .variables
            .get(name)
            .ok_or_else(|| EvalError::VariableNotFound(name.to_string()))?;

        if var.readonly {
            return Err(EvalError::WriteToReadOnlyVariable(name.to_string()));
        }
        if items.len() < var.components {
            return Err(EvalError::InsufficientArguments(value.clone()));
        }

        for i in 0..var.components {
            let element = &items[i];
            // SAFETY: same contract as `get`.
            unsafe {
                match var.ptr {
                    VarPtr::F64(p) => *p.add(i) = element.as_f64(),
                    VarPtr::F32(p) => *p.add(i) = element.as_f64() as f32,
                    VarPtr::I64(p) => *p.add(i) = element.as_f64() as i64,
                    // Matches the host-side narrowing contract: a negative
                    // value truncates through the signed width first, then
                    // reinterprets as unsigned (so `-123` round-trips to the
                    // 64-bit two's-complement pattern, not zero).
                    VarPtr::U64(p) => *p.add(i) = (element.as_f64() as i64) as u64,
                    VarPtr::I32(p) => *p.add(i) = element.as_f64() as i32,
                    VarPtr::U32(p) => *p.add(i) = (element.as_f64() as i32) as u32,
                    VarPtr::Bool(p) => *p.add(i) = element.as_bool(),
                }
            }
        }

        Ok(Value::empty_atom())
    }

    /// Dispatch a registered callback synchronously.
    pub fn call(&self, name: &str, args: Vec<String>) -> Result<Vec<String>, EvalError> {
        let callback = self
            .functions
            .get(name)
            .ok_or_else(|| EvalError::FunctionNotFound(name.to_string()))?;
        Ok(callback(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_and_write_round_trips_through_the_target_type() {
        let mut x: f64 = 0.0;
        let mut bridge = HostBridge::new();
        bridge.register_f64("x", &mut x as *mut f64, 1, false);

        bridge
            .set("x", Value::list(vec![Value::atom("42")]))
            .unwrap();
        assert_eq!(x, 42.0);
        assert_eq!(format!("{}", bridge.get("x").unwrap()), "(42)");
    }

    #[test]
    fn negative_double_written_to_unsigned_wraps_two_complement() {
        let mut ull: u64 = 0;
        let mut bridge = HostBridge::new();
        bridge.register_u64("ull", &mut ull as *mut u64, 1, false);

        bridge
            .set("ull", Value::list(vec![Value::atom("-123")]))
            .unwrap();
        assert_eq!(ull, 18446744073709551493);
        assert_eq!(
            format!("{}", bridge.get("ull").unwrap()),
            "(18446744073709551493)"
        );
    }

    #[test]
    fn readonly_write_is_rejected() {
        let mut x: f64 = 1.0;
        let mut bridge = HostBridge::new();
        bridge.register_f64("ro", &mut x as *mut f64, 1, true);

        let err = bridge
            .set("ro", Value::list(vec![Value::atom("2")]))
            .unwrap_err();
        assert!(matches!(err, EvalError::WriteToReadOnlyVariable(_)));
    }

    #[test]
    fn unknown_variable_is_reported_by_name() {
        let bridge = HostBridge::new();
        let err = bridge.get("missing").unwrap_err();
        assert!(matches!(err, EvalError::VariableNotFound(name) if name == "missing"));
    }

    #[test]
    fn callback_round_trips_strings() {
        fn shout(args: Vec<String>) -> Vec<String> {
            args.into_iter().map(|s| s.to_uppercase()).collect()
        }

        let mut bridge = HostBridge::new();
        bridge.register_func("shout", shout);
        let out = bridge.call("shout", vec!["hi".to_string()]).unwrap();
        assert_eq!(out, vec!["HI".to_string()]);
    }
}
