// SPDX-License-Identifier: MIT

//! Ordered rule tables for query classification.
//!
//! Destination and duration resolution are first-match-wins: the table is
//! scanned top to bottom and evaluation stops at the first satisfied rule,
//! so table order is load-bearing. Interest resolution is accumulate-all:
//! every satisfied rule contributes its value. The two policies are kept
//! explicit on the table rather than implied by the call site.

/// How matches against a rule table are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinePolicy {
    /// Stop at the first satisfied rule.
    FirstMatch,
    /// Collect the value of every satisfied rule, in table order.
    Accumulate,
}

/// One rule: a set of substring patterns, any of which satisfies the rule.
#[derive(Debug, Clone)]
pub struct Rule<T> {
    patterns: &'static [&'static str],
    value: T,
}

impl<T> Rule<T> {
    pub const fn new(patterns: &'static [&'static str], value: T) -> Self {
        Self { patterns, value }
    }

    /// True if any pattern occurs in the (already lower-cased) text.
    fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| text.contains(p))
    }
}

/// An ordered table of rules with an explicit combination policy.
#[derive(Debug, Clone)]
pub struct RuleTable<T> {
    policy: CombinePolicy,
    rules: Vec<Rule<T>>,
}

impl<T> RuleTable<T> {
    pub fn new(policy: CombinePolicy, rules: Vec<Rule<T>>) -> Self {
        Self { policy, rules }
    }

    pub fn policy(&self) -> CombinePolicy {
        self.policy
    }

    /// Evaluate the table against lower-cased text.
    ///
    /// Under `FirstMatch` the result has at most one element; under
    /// `Accumulate` it holds every satisfied rule's value in table order.
    pub fn evaluate(&self, text: &str) -> Vec<&T> {
        match self.policy {
            CombinePolicy::FirstMatch => self
                .rules
                .iter()
                .find(|r| r.is_match(text))
                .map(|r| &r.value)
                .into_iter()
                .collect(),
            CombinePolicy::Accumulate => self
                .rules
                .iter()
                .filter(|r| r.is_match(text))
                .map(|r| &r.value)
                .collect(),
        }
    }

    /// First satisfied rule's value, if any.
    pub fn first_match(&self, text: &str) -> Option<&T> {
        self.rules.iter().find(|r| r.is_match(text)).map(|r| &r.value)
    }
}
