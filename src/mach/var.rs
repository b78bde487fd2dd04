use std::collections::HashMap;

/// ## Name binding memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, i64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, name: &str) -> Option<i64> {
        self.vars.get(name).copied()
    }

    pub fn store(&mut self, name: &str, value: i64) {
        match self.vars.get_mut(name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(name.to_string(), value);
            }
        }
    }
}
