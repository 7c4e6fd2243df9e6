use std::fmt;

/// Integer literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberNode {
    pub value: i32,
}

impl NumberNode {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn render(&self, indent: usize) -> String {
        format!("{}Number: {}\n", pad(indent), self.value)
    }
}

/// Reference to a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierNode {
    pub name: String,
}

impl IdentifierNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn render(&self, indent: usize) -> String {
        format!("{}Identifier: {}\n", pad(indent), self.name)
    }
}

/// The initializer slot of a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueNode {
    Number(NumberNode),
    Identifier(IdentifierNode),
}

impl ValueNode {
    pub fn render(&self, indent: usize) -> String {
        match self {
            ValueNode::Number(node) => node.render(indent),
            ValueNode::Identifier(node) => node.render(indent),
        }
    }
}

impl From<NumberNode> for ValueNode {
    fn from(node: NumberNode) -> Self {
        ValueNode::Number(node)
    }
}

impl From<IdentifierNode> for ValueNode {
    fn from(node: IdentifierNode) -> Self {
        ValueNode::Identifier(node)
    }
}

/// `<type> <name> = <value>;`
///
/// Always owns its value; the parser never hands out a declaration without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationNode {
    pub var_type: String,
    pub name: String,
    pub value: ValueNode,
}

impl DeclarationNode {
    pub fn new(
        var_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<ValueNode>,
    ) -> Self {
        Self {
            var_type: var_type.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn render(&self, indent: usize) -> String {
        let mut out = format!("{}Declaration: {} {}\n", pad(indent), self.var_type, self.name);
        out.push_str(&self.value.render(indent + 2));
        out
    }
}

/// Any AST node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    Number(NumberNode),
    Identifier(IdentifierNode),
    Declaration(DeclarationNode),
}

impl AstNode {
    /// Tree dump with this node's line padded by `indent` spaces and each
    /// level of children two spaces further in.
    pub fn render(&self, indent: usize) -> String {
        match self {
            AstNode::Number(node) => node.render(indent),
            AstNode::Identifier(node) => node.render(indent),
            AstNode::Declaration(node) => node.render(indent),
        }
    }

    /// Write [`AstNode::render`] to stdout
    pub fn print(&self, indent: usize) {
        print!("{}", self.render(indent));
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

impl From<NumberNode> for AstNode {
    fn from(node: NumberNode) -> Self {
        AstNode::Number(node)
    }
}

impl From<IdentifierNode> for AstNode {
    fn from(node: IdentifierNode) -> Self {
        AstNode::Identifier(node)
    }
}

impl From<DeclarationNode> for AstNode {
    fn from(node: DeclarationNode) -> Self {
        AstNode::Declaration(node)
    }
}

impl From<ValueNode> for AstNode {
    fn from(node: ValueNode) -> Self {
        match node {
            ValueNode::Number(n) => AstNode::Number(n),
            ValueNode::Identifier(n) => AstNode::Identifier(n),
        }
    }
}

fn pad(indent: usize) -> String {
    " ".repeat(indent)
}
