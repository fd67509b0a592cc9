//! Name interning for rule and token vocabularies.
//!
//! Names are stored once and handed out as `Symbol` handles. Symbols are
//! dense and assigned in insertion order, so interning a rule-name table in
//! declaration order makes each symbol equal to the rule index.

use indexmap::IndexSet;

/// Handle to an interned name. Cheap to copy and compare.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Symbol(u32);

impl Symbol {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Build a symbol from a raw index, e.g. a rule index from the automaton.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

/// Insertion-ordered set of names.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    names: IndexSet<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern every name in order. Duplicates keep their first symbol.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut interner = Self::new();
        for name in names {
            interner.intern(name.as_ref());
        }
        interner
    }

    /// Intern a name, returning the existing symbol if it is already present.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(index) = self.names.get_index_of(name) {
            return Symbol(index as u32);
        }
        let (index, _) = self.names.insert_full(name.into());
        Symbol(index as u32)
    }

    /// Look up a name without interning it.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.names.get_index_of(name).map(|i| Symbol(i as u32))
    }

    /// Resolve a symbol. `None` for symbols this interner never produced.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> Option<&str> {
        self.names.get_index(sym.as_index()).map(|s| &**s)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, s)| (Symbol(i as u32), &**s))
    }
}
