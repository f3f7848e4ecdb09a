//! Validation flags and the rules for merging them across providers

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a single flag is folded across every registered provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// True only if every provider reports true
    All,
    /// True if any provider reports true
    Any,
}

impl MergeStrategy {
    pub fn merge(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Self::All => lhs && rhs,
            Self::Any => lhs || rhs,
        }
    }
}

/// The eight named flags every provider tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    Pristine,
    Dirty,
    Touched,
    Untouched,
    Valid,
    Invalid,
    Pending,
    Validated,
}

impl Flag {
    pub const ALL: [Flag; 8] = [
        Flag::Pristine,
        Flag::Dirty,
        Flag::Touched,
        Flag::Untouched,
        Flag::Valid,
        Flag::Invalid,
        Flag::Pending,
        Flag::Validated,
    ];

    pub fn strategy(self) -> MergeStrategy {
        match self {
            Flag::Pristine | Flag::Untouched | Flag::Valid | Flag::Validated => MergeStrategy::All,
            Flag::Dirty | Flag::Touched | Flag::Invalid | Flag::Pending => MergeStrategy::Any,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Flag::Pristine => "pristine",
            Flag::Dirty => "dirty",
            Flag::Touched => "touched",
            Flag::Untouched => "untouched",
            Flag::Valid => "valid",
            Flag::Invalid => "invalid",
            Flag::Pending => "pending",
            Flag::Validated => "validated",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flag record of a single provider, or the merged record of many
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub pristine: bool,
    pub dirty: bool,
    pub touched: bool,
    pub untouched: bool,
    pub valid: bool,
    pub invalid: bool,
    pub pending: bool,
    pub validated: bool,
}

impl Flags {
    /// State of a provider nobody has interacted with or validated yet
    pub fn initial() -> Self {
        Self {
            pristine: true,
            untouched: true,
            ..Self::default()
        }
    }

    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Pristine => self.pristine,
            Flag::Dirty => self.dirty,
            Flag::Touched => self.touched,
            Flag::Untouched => self.untouched,
            Flag::Valid => self.valid,
            Flag::Invalid => self.invalid,
            Flag::Pending => self.pending,
            Flag::Validated => self.validated,
        }
    }

    pub fn set(&mut self, flag: Flag, value: bool) {
        let slot = match flag {
            Flag::Pristine => &mut self.pristine,
            Flag::Dirty => &mut self.dirty,
            Flag::Touched => &mut self.touched,
            Flag::Untouched => &mut self.untouched,
            Flag::Valid => &mut self.valid,
            Flag::Invalid => &mut self.invalid,
            Flag::Pending => &mut self.pending,
            Flag::Validated => &mut self.validated,
        };
        *slot = value;
    }

    /// Combine two records flag by flag using each flag's strategy.
    pub fn merge(&self, other: &Flags) -> Flags {
        let mut merged = Flags::default();
        for flag in Flag::ALL {
            merged.set(flag, flag.strategy().merge(self.get(flag), other.get(flag)));
        }
        merged
    }

    /// Fold any number of records. Returns `None` when there is nothing to fold.
    pub fn merge_all<'a, I>(records: I) -> Option<Flags>
    where
        I: IntoIterator<Item = &'a Flags>,
    {
        records.into_iter().fold(None, |acc, flags| match acc {
            None => Some(*flags),
            Some(acc) => Some(acc.merge(flags)),
        })
    }
}
