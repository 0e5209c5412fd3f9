use crate::{
    collections::OffsetMap,
    error::{TinycError, TinycResult},
    parsing::Ident,
    types::ValueType,
};

/// Variables of the function being compiled, mapped to their
/// byte offsets in the function's stack frame.
///
/// The frame is flat. Offsets are handed out in declaration order
/// and never reused, since there are no nested scopes to exit.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    offsets: OffsetMap,
    /// Running offset for the next declaration, which is also
    /// the total size of the frame so far.
    frame_size: i32,
}

impl SymbolTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve frame space for a new variable.
    ///
    /// # Errors
    ///
    /// Returns [`TinycError::VariableRedefinition`] if the name was
    /// already declared. No space is reserved in that case.
    pub fn declare(&mut self, ident: &Ident, ty: ValueType) -> TinycResult<i32> {
        if self.offsets.contains_key(ident.as_str()) {
            return Err(TinycError::VariableRedefinition {
                name: ident.name.clone(),
                span: ident.token.span.clone(),
            });
        }

        let offset = self.frame_size;
        self.offsets.insert(ident.as_str(), offset);
        self.frame_size += ty.size();

        log::debug!("variable '{}' at frame offset {}", ident.name, offset);
        Ok(offset)
    }

    /// Frame offset of a previously declared variable.
    pub fn resolve(&self, ident: &Ident) -> TinycResult<i32> {
        self.offsets
            .get(ident.as_str())
            .ok_or_else(|| TinycError::UndefinedVariable {
                name: ident.name.clone(),
                span: ident.token.span.clone(),
            })
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<i32> {
        self.offsets.get(name)
    }

    /// Total bytes reserved by declared variables.
    #[inline]
    pub fn frame_size(&self) -> i32 {
        self.frame_size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Declared variables ordered by frame offset.
    pub fn variables(&self) -> Vec<(&str, i32)> {
        let mut vars: Vec<(&str, i32)> = self.offsets.iter().collect();
        vars.sort_by_key(|(_, offset)| *offset);
        vars
    }
}
