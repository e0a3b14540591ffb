use std::collections::HashMap;

/// Snapshot of environment variables for one run.
///
/// Built once at startup from the process environment; properties-file
/// entries are layered on top. Lookups and writes go through this table
/// instead of the process-wide environment, so nothing here races and
/// tests never have to touch real environment state.
#[derive(Debug, Default, Clone)]
pub struct EnvTable {
    vars: HashMap<String, String>,
}

impl EnvTable {
    /// Empty table, used as the in-memory stand-in in tests.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: String, value: String) {
        self.vars.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
