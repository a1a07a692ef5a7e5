//! Shared data types of the contract compiler backend: dense index newtypes, the closed set of
//! foldable opcodes and the arena form of the annotated syntax tree.

pub mod ast;
pub mod index;
pub mod opcode;

pub use crate::{
    ast::{Ast, AstNode},
    index::*,
    opcode::{Opcode, ParseOpcodeError},
};

#[doc(hidden)]
pub use serde as __serde;
