pub mod ast;
pub mod types;

pub use ast::{ClassDecl, MethodBody, MethodDecl, NoBodyReason, SyntaxTree};
pub use types::{ClassLoc, LocReport, MethodLoc};
