//! Ordered precedence tables.
//!
//! A table is evaluated top to bottom and the first rule whose condition
//! holds decides the outcome, even when its derivation comes up empty. Later
//! rules are never consulted once one applies.

use std::path::PathBuf;

pub struct Rule<F> {
    pub name: &'static str,
    pub applies: fn(&F) -> bool,
    pub derive: fn(&F) -> Option<PathBuf>,
}

/// The first applicable rule and what it derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub rule: &'static str,
    pub path: Option<PathBuf>,
}

pub fn first_match<F>(rules: &[Rule<F>], facts: &F) -> Option<Decision> {
    rules.iter().find(|rule| (rule.applies)(facts)).map(|rule| Decision {
        rule: rule.name,
        path: (rule.derive)(facts),
    })
}
