//! Containers shared by the compiler stages.
mod dyn_array;
mod offset_map;

pub use self::{
    dyn_array::DynArray,
    offset_map::{hash, OffsetMap},
};
