// Variable Store
// Ordered working memory of one translation run

use crate::translator::variable::{Category, Variable};

/// Translated variables in insertion order.
///
/// Lookups are first-match linear scans; the store of a material holds a few
/// dozen entries at most.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    variables: Vec<Variable>,
}

impl VariableStore {
    pub fn new() -> Self {
        VariableStore {
            variables: Vec::new(),
        }
    }

    /// Append a variable. Returns `false` if it was refused: a store holds at
    /// most one shader.
    pub fn add(&mut self, variable: Variable) -> bool {
        if variable.category == Category::Shader && self.has(Category::Shader) {
            log::warn!(
                "Refusing second shader variable \"{}\"",
                variable.value
            );
            return false;
        }

        log::trace!("Storing {:?} variable {}", variable.category, variable);
        self.variables.push(variable);
        true
    }

    pub fn has(&self, category: Category) -> bool {
        self.variables.iter().any(|v| v.category == category)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.variables.iter().any(|v| v.key == key)
    }

    pub fn get(&self, category: Category) -> Option<&Variable> {
        self.variables.iter().find(|v| v.category == category)
    }

    pub fn get_key(&self, key: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.key == key)
    }

    pub fn get_mut(&mut self, category: Category) -> Option<&mut Variable> {
        self.variables.iter_mut().find(|v| v.category == category)
    }

    /// Number of variables with the given category.
    pub fn count(&self, category: Category) -> usize {
        self.variables
            .iter()
            .filter(|v| v.category == category)
            .count()
    }

    /// Remove the first variable with the given category.
    pub fn remove(&mut self, category: Category) -> Option<Variable> {
        match self.variables.iter().position(|v| v.category == category) {
            Some(index) => Some(self.variables.remove(index)),
            None => {
                log::debug!("No {:?} variable to remove", category);
                None
            }
        }
    }

    /// Remove the first variable with the given key.
    pub fn remove_key(&mut self, key: &str) -> Option<Variable> {
        match self.variables.iter().position(|v| v.key == key) {
            Some(index) => Some(self.variables.remove(index)),
            None => {
                log::debug!("No variable with key \"{}\" to remove", key);
                None
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn into_vec(self) -> Vec<Variable> {
        self.variables
    }
}

impl<'a> IntoIterator for &'a VariableStore {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}
