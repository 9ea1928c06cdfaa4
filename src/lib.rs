//! A fair N-sided die and the probability model for the sum of two of them.
//!
//! ```rust
//! # use fair_die::{roll, roll_with, two_dice_sum_probability, Die};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), fair_die::DieError> {
//! // A standard six-sided die
//! let die = Die::default();
//! let rolled = die.roll();
//! assert!((1..=6).contains(&rolled));
//!
//! // Use a custom Rng that implements the rand::Rng trait
//! let mut rng = StdRng::seed_from_u64(1);
//! let d20 = Die::new(20)?;
//! let rolled = d20.roll_with(&mut rng);
//! assert!((1..=20).contains(&rolled));
//!
//! // Roll straight from notation
//! let rolled = roll("d%")?;
//! assert!((1..=100).contains(&rolled));
//! let rolled = roll_with("d8", &mut rng)?;
//! assert!((1..=8).contains(&rolled));
//!
//! // 7 is the most likely sum of two d6
//! assert_eq!(two_dice_sum_probability(7, 6), 1.0 / 6.0);
//!
//! // A die needs at least one side
//! assert!(Die::new(0).is_err());
//! # Ok(())
//! # }
//! ```

mod die;
mod error;
mod parse;
mod probability;

pub use die::{Die, DEFAULT_SIDES};
pub use error::DieError;
pub use probability::two_dice_sum_probability;

/// Parses the notation returning the result of rolling the die once.
pub fn roll(notation: &str) -> Result<u32, DieError> {
    let die = Die::parse(notation)?;
    Ok(die.roll())
}

/// Same as `roll()` but allows you to choose the rng you prefer to use.
pub fn roll_with(notation: &str, rng: &mut impl rand::Rng) -> Result<u32, DieError> {
    let die = Die::parse(notation)?;
    Ok(die.roll_with(rng))
}
