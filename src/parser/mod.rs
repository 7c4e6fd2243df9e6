pub mod ast;
pub mod declarations;
pub mod errors;

pub use ast::*;
pub use declarations::*;
pub use errors::*;
