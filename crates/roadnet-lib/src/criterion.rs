//! Cost criteria, per-road weights and priority orders.
//!
//! Every road carries three independent weights. A [`Criterion`] selects
//! which one a search minimizes, and a [`PriorityOrder`] ranks criteria when
//! choosing a compromise route.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Cost dimension a route can be optimized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Distance,
    Time,
    Cost,
}

impl Criterion {
    /// All criteria in canonical order (distance, time, cost).
    pub const ALL: [Criterion; 3] = [Criterion::Distance, Criterion::Time, Criterion::Cost];

    /// Position of the criterion in canonical order.
    pub fn index(self) -> usize {
        match self {
            Criterion::Distance => 0,
            Criterion::Time => 1,
            Criterion::Cost => 2,
        }
    }

    /// Pick the weight this criterion minimizes.
    pub fn weight(self, weights: &Weights) -> u64 {
        match self {
            Criterion::Distance => weights.distance,
            Criterion::Time => weights.time,
            Criterion::Cost => weights.cost,
        }
    }

    /// Upper-case label used in textual reports.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Distance => "DISTANCE",
            Criterion::Time => "TIME",
            Criterion::Cost => "COST",
        }
    }

    /// Single-letter tag used in priority strings.
    pub fn letter(self) -> char {
        match self {
            Criterion::Distance => 'D',
            Criterion::Time => 'T',
            Criterion::Cost => 'C',
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Criterion::Distance => "distance",
            Criterion::Time => "time",
            Criterion::Cost => "cost",
        };
        f.write_str(value)
    }
}

impl FromStr for Criterion {
    type Err = Error;

    /// Accepts full names, single letters and the Cyrillic letters
    /// (`Д`, `В`, `С`) used by legacy input files. Matching ignores case.
    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_lowercase().as_str() {
            "d" | "distance" | "д" => Ok(Criterion::Distance),
            "t" | "time" | "в" => Ok(Criterion::Time),
            "c" | "cost" | "с" => Ok(Criterion::Cost),
            _ => Err(Error::UnknownCriterion {
                tag: tag.to_string(),
            }),
        }
    }
}

/// The three weights of a road, or the accumulated totals of a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Weights {
    pub distance: u64,
    pub time: u64,
    pub cost: u64,
}

impl Weights {
    pub fn new(distance: u64, time: u64, cost: u64) -> Self {
        Self {
            distance,
            time,
            cost,
        }
    }

    /// Component-wise sum, saturating at `u64::MAX`.
    pub fn saturating_add(self, other: Weights) -> Weights {
        Weights {
            distance: self.distance.saturating_add(other.distance),
            time: self.time.saturating_add(other.time),
            cost: self.cost.saturating_add(other.cost),
        }
    }
}

/// Ordered preference over criteria used to pick a compromise route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PriorityOrder(Vec<Criterion>);

impl PriorityOrder {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self(criteria)
    }

    /// Parse a free-form priority string such as `(T, D)` or `(Д,В,С)`.
    ///
    /// Surrounding parentheses and spaces are ignored and tags are split on
    /// commas. Unrecognized tags are skipped rather than rejected, so the
    /// result may be shorter than the input or even empty.
    pub fn parse(text: &str) -> Self {
        let cleaned: String = text
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let criteria = cleaned
            .split(',')
            .filter(|tag| !tag.is_empty())
            .filter_map(|tag| match tag.parse::<Criterion>() {
                Ok(criterion) => Some(criterion),
                Err(_) => {
                    debug!(tag, "skipping unrecognized priority tag");
                    None
                }
            })
            .collect();

        Self(criteria)
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Criterion> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PriorityOrder {
    fn default() -> Self {
        Self(Criterion::ALL.to_vec())
    }
}

impl fmt::Display for PriorityOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = self
            .0
            .iter()
            .map(|criterion| criterion.letter().to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "({letters})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_indices() {
        for (position, criterion) in Criterion::ALL.iter().enumerate() {
            assert_eq!(criterion.index(), position);
        }
    }

    #[test]
    fn weight_selects_matching_component() {
        let weights = Weights::new(10, 5, 2);
        assert_eq!(Criterion::Distance.weight(&weights), 10);
        assert_eq!(Criterion::Time.weight(&weights), 5);
        assert_eq!(Criterion::Cost.weight(&weights), 2);
    }

    #[test]
    fn parses_letters_names_and_cyrillic_tags() {
        assert_eq!("D".parse::<Criterion>().unwrap(), Criterion::Distance);
        assert_eq!("time".parse::<Criterion>().unwrap(), Criterion::Time);
        assert_eq!(" Cost ".parse::<Criterion>().unwrap(), Criterion::Cost);
        assert_eq!("Д".parse::<Criterion>().unwrap(), Criterion::Distance);
        assert_eq!("В".parse::<Criterion>().unwrap(), Criterion::Time);
        assert_eq!("С".parse::<Criterion>().unwrap(), Criterion::Cost);
        assert!("speed".parse::<Criterion>().is_err());
    }

    #[test]
    fn priority_parse_strips_parentheses_and_spaces() {
        let order = PriorityOrder::parse("( T , D )");
        assert_eq!(order.criteria(), &[Criterion::Time, Criterion::Distance]);
        assert_eq!(order.to_string(), "(T,D)");
    }

    #[test]
    fn priority_parse_skips_unknown_tags() {
        let order = PriorityOrder::parse("(X,C,??,D)");
        assert_eq!(order.criteria(), &[Criterion::Cost, Criterion::Distance]);

        assert!(PriorityOrder::parse("(Q)").is_empty());
        assert!(PriorityOrder::parse("").is_empty());
    }

    #[test]
    fn default_priority_is_canonical() {
        assert_eq!(PriorityOrder::default().criteria(), &Criterion::ALL);
        assert_eq!(PriorityOrder::default().to_string(), "(D,T,C)");
    }

    #[test]
    fn saturating_add_does_not_overflow() {
        let total = Weights::new(u64::MAX, 1, 2).saturating_add(Weights::new(5, 1, 2));
        assert_eq!(total, Weights::new(u64::MAX, 2, 4));
    }
}
