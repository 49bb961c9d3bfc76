//! Link speed classes and the weighted distribution they are drawn from.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bandwidth tier of a link.
///
/// The numeric value of a class is its cost when routing: a lower class is a
/// faster link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(u8)]
pub enum SpeedClass {
    /// 10 Gbps.
    TenGigabit = 1,
    /// 1 Gbps.
    Gigabit = 2,
    /// 100 Mbps.
    HundredMegabit = 4,
    /// 10 Mbps.
    TenMegabit = 8,
}

impl SpeedClass {
    /// All speed classes, fastest first.
    pub const ALL: [SpeedClass; 4] = [
        SpeedClass::TenGigabit,
        SpeedClass::Gigabit,
        SpeedClass::HundredMegabit,
        SpeedClass::TenMegabit,
    ];

    /// Numeric value of the class, as written in network files.
    #[inline(always)]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Nominal bandwidth of the class in megabits per second.
    pub fn bandwidth_mbps(self) -> u32 {
        match self {
            SpeedClass::TenGigabit => 10_000,
            SpeedClass::Gigabit => 1_000,
            SpeedClass::HundredMegabit => 100,
            SpeedClass::TenMegabit => 10,
        }
    }
}

impl From<SpeedClass> for u8 {
    #[inline(always)]
    fn from(speed: SpeedClass) -> Self {
        speed.value()
    }
}

impl TryFrom<u8> for SpeedClass {
    type Error = SpeedError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SpeedClass::TenGigabit),
            2 => Ok(SpeedClass::Gigabit),
            4 => Ok(SpeedClass::HundredMegabit),
            8 => Ok(SpeedClass::TenMegabit),
            value => Err(SpeedError::UnknownClass { value }),
        }
    }
}

impl std::fmt::Display for SpeedClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Errors raised while building speed classes or distributions.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum SpeedError {
    /// The value does not name a speed class.
    #[error("unknown speed class {value}; expected one of 1, 2, 4 or 8")]
    UnknownClass {
        /// The offending value.
        value: u8,
    },
    /// A weight was negative, NaN or infinite.
    #[error("invalid weight {weight} for speed class {class}")]
    InvalidWeight {
        /// The class the weight was given for.
        class: SpeedClass,
        /// The offending weight.
        weight: f64,
    },
    /// The same class was given more than one weight.
    #[error("speed class {class} was given more than once")]
    DuplicateClass {
        /// The repeated class.
        class: SpeedClass,
    },
    /// No class has a positive weight.
    #[error("the speed distribution has no positive weight")]
    Empty,
}

/// A categorical distribution over [`SpeedClass`]es.
///
/// Every link draws its class independently from this distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedDistribution {
    classes: Vec<SpeedClass>,
    weights: Vec<f64>,
    index: WeightedIndex<f64>,
}

impl SpeedDistribution {
    /// Default weights: 10% 10 Gbps, 30% 1 Gbps, 40% 100 Mbps and 20% 10 Mbps.
    pub const DEFAULT_WEIGHTS: [(SpeedClass, f64); 4] = [
        (SpeedClass::TenGigabit, 0.1),
        (SpeedClass::Gigabit, 0.3),
        (SpeedClass::HundredMegabit, 0.4),
        (SpeedClass::TenMegabit, 0.2),
    ];

    /// Creates a distribution from `(class, weight)` pairs.
    ///
    /// Weights are relative and need not sum to one. Classes with weight zero
    /// are never drawn.
    pub fn new(weights: impl IntoIterator<Item = (SpeedClass, f64)>) -> Result<Self, SpeedError> {
        let mut classes = Vec::with_capacity(SpeedClass::ALL.len());
        let mut values = Vec::with_capacity(SpeedClass::ALL.len());
        for (class, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SpeedError::InvalidWeight { class, weight });
            }
            if classes.contains(&class) {
                return Err(SpeedError::DuplicateClass { class });
            }
            classes.push(class);
            values.push(weight);
        }
        if !values.iter().any(|&w| w > 0.0) {
            return Err(SpeedError::Empty);
        }
        let index = WeightedIndex::new(values.iter().copied()).map_err(|_| SpeedError::Empty)?;
        Ok(Self {
            classes,
            weights: values,
            index,
        })
    }

    /// A distribution that always yields `class`.
    pub fn constant(class: SpeedClass) -> Self {
        Self::new([(class, 1.0)]).expect("a single positive weight is a valid distribution")
    }

    /// Probability of drawing `class`.
    pub fn probability(&self, class: SpeedClass) -> f64 {
        let total: f64 = self.weights.iter().sum();
        self.classes
            .iter()
            .zip(&self.weights)
            .find(|(c, _)| **c == class)
            .map_or(0.0, |(_, w)| w / total)
    }

    /// Iterates over the classes with their configured weights.
    pub fn weights(&self) -> impl Iterator<Item = (SpeedClass, f64)> + '_ {
        self.classes.iter().copied().zip(self.weights.iter().copied())
    }
}

impl Default for SpeedDistribution {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WEIGHTS).expect("default speed weights are valid")
    }
}

impl Distribution<SpeedClass> for SpeedDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SpeedClass {
        self.classes[self.index.sample(rng)]
    }
}
