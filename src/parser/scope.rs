use std::collections::HashMap;

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// One lexical frame: identifier name to declared type.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    variable_lookup: HashMap<String, String>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&String> {
        self.variable_lookup.get(variable_name)
    }

    pub fn contains(&self, variable_name: &str) -> bool {
        self.variable_lookup.contains_key(variable_name)
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }

    /// Inserts the binding unless the name is already taken in this frame.
    fn try_insert(&mut self, variable_name: String, variable_type: String) -> bool {
        if self.contains(&variable_name) {
            false
        } else {
            self.variable_lookup.insert(variable_name, variable_type);
            true
        }
    }
}

/// Stack of lexical frames, innermost last.
///
/// The bottom frame is the global scope and is never popped.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<Scope>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        ScopeStack::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack {
            frames: vec![Scope::new()],
        }
    }

    pub fn push(&mut self) {
        self.frames.push(Scope::new());
        debug!(depth = self.frames.len(), "entered scope");
    }

    pub fn pop(&mut self) -> Option<Scope> {
        if self.frames.len() <= 1 {
            return None;
        }

        let scope = self.frames.pop();
        debug!(depth = self.frames.len(), "left scope");
        scope
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn current(&self) -> &Scope {
        // The global frame is never popped, so the stack is never empty.
        &self.frames[self.frames.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Scope {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Declares a variable in the innermost frame. Outer frames may already
    /// hold the same name; the new binding shadows them.
    pub fn declare_variable(
        &mut self,
        variable_name: String,
        variable_type: String,
        position: Position,
    ) -> Result<(), Error> {
        if self.current_mut().try_insert(variable_name.clone(), variable_type) {
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::VariableAlreadyDefined {
                    variable: variable_name,
                },
                position,
            ))
        }
    }

    pub fn declare_parameter(
        &mut self,
        parameter_name: String,
        parameter_type: String,
        position: Position,
    ) -> Result<(), Error> {
        if self.current_mut().try_insert(parameter_name.clone(), parameter_type) {
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::ParameterAlreadyDefined {
                    parameter: parameter_name,
                },
                position,
            ))
        }
    }

    /// Finds the type of `variable_name`, searching from the innermost frame outwards.
    pub fn resolve(&self, variable_name: &str) -> Option<&String> {
        self.frames
            .iter()
            .rev()
            .find_map(|scope| scope.get_variable(variable_name))
    }

    pub fn is_defined(&self, variable_name: &str) -> bool {
        self.resolve(variable_name).is_some()
    }
}
