use crate::parser::DeclarationNode;
use std::collections::BTreeMap;

/// Name to type lookup for declared variables
///
/// There is a single flat scope. Declaring a name again replaces its type.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    symbols: BTreeMap<String, String>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`
    pub fn declare(&mut self, name: impl Into<String>, symbol_type: impl Into<String>) {
        self.symbols.insert(name.into(), symbol_type.into());
    }

    /// Register the name and type of a parsed declaration
    pub fn declare_node(&mut self, decl: &DeclarationNode) {
        self.declare(decl.name.clone(), decl.var_type.clone());
    }

    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Declared type of `name`, or `""` when it was never declared
    #[must_use]
    pub fn type_of(&self, name: &str) -> &str {
        self.symbols.get(name).map_or("", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.symbols.iter().map(|(name, ty)| (name.as_str(), ty.as_str()))
    }
}
