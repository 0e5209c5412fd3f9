//! Value types.
use std::fmt;

/// Type of a value stored in a variable or returned from a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// 32-bit signed integer.
    Int,
    /// Absence of a value. There is no keyword for it in source,
    /// it only exists for trees built outside the parser.
    Void,
}

impl ValueType {
    /// Width in bytes a value of this type occupies in a stack frame.
    #[inline]
    pub fn size(&self) -> i32 {
        match self {
            ValueType::Int => std::mem::size_of::<i32>() as i32,
            ValueType::Void => 0,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValueType::Int => write!(f, "int"),
            ValueType::Void => write!(f, "void"),
        }
    }
}
