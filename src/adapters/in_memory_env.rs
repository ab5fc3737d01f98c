use crate::ports::required::EnvClient;
use std::cell::RefCell;
use std::collections::HashMap;

/// Won't touch the global process environment.
///
/// All methods take `&self`, so a snapshot can be mutated while an
/// [`Env`](crate::Env) borrows it.
///
/// # Examples
///
/// ```
/// use envcast::{Env, InMemoryEnv};
///
/// let vars = InMemoryEnv::new();
/// let env = Env::new(&vars);
///
/// vars.set("WORKERS", "4");
/// assert_eq!(env.to_u32("WORKERS"), Ok(4));
///
/// vars.remove("WORKERS");
/// assert_eq!(env.to_u32_or("WORKERS", 1), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self {
            vars: RefCell::new(HashMap::new()),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RefCell::new(vars),
        }
    }
}

impl EnvClient for InMemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.borrow().get(key).cloned()
    }
}
