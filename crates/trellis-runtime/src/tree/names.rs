//! Rule-name lookup for renderings.

use trellis_atn::RuleIndex;
use trellis_core::{Interner, Symbol};

/// Resolves a rule index to the rule's name.
pub trait RuleNames {
    fn rule_name(&self, rule_index: RuleIndex) -> Option<&str>;
}

impl<S: AsRef<str>> RuleNames for [S] {
    fn rule_name(&self, rule_index: RuleIndex) -> Option<&str> {
        self.get(rule_index as usize).map(|s| s.as_ref())
    }
}

impl<S: AsRef<str>, const N: usize> RuleNames for [S; N] {
    fn rule_name(&self, rule_index: RuleIndex) -> Option<&str> {
        self.as_slice().rule_name(rule_index)
    }
}

impl<S: AsRef<str>> RuleNames for Vec<S> {
    fn rule_name(&self, rule_index: RuleIndex) -> Option<&str> {
        self.as_slice().rule_name(rule_index)
    }
}

/// Symbols are rule indices when the interner was filled in declaration order.
impl RuleNames for Interner {
    fn rule_name(&self, rule_index: RuleIndex) -> Option<&str> {
        self.resolve(Symbol::from_raw(rule_index))
    }
}

impl<R: RuleNames + ?Sized> RuleNames for &R {
    fn rule_name(&self, rule_index: RuleIndex) -> Option<&str> {
        (**self).rule_name(rule_index)
    }
}
