use std::fmt::Display;
use std::str::FromStr;

use rand::{thread_rng, Rng};

use crate::error::DieError;
use crate::parse::parse_notation;

/// Number of sides of a [Die](Die) created with `Die::default()`.
pub const DEFAULT_SIDES: u32 = 6;

/// A fair die with a fixed number of sides.
///
/// Every roll is drawn uniformly from `1..=sides` and is independent of every
/// previous roll, the die itself holds no state besides its side count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    sides: u32,
}

impl Die {
    /// Creates a die with `sides` sides.
    ///
    /// Fails with [DieError::InvalidConfiguration](DieError::InvalidConfiguration)
    /// if `sides` is less than 1 or larger than `u32::MAX`.
    pub fn new(sides: i64) -> Result<Self, DieError> {
        match u32::try_from(sides) {
            Ok(sides) if sides >= 1 => Ok(Self { sides }),
            _ => {
                tracing::debug!(sides, "rejected die configuration");
                Err(DieError::InvalidConfiguration(sides))
            }
        }
    }

    /// Parses a single die from its notation, `d{sides}` or `d%` as a shortcut for `d100`.
    pub fn parse(notation: &str) -> Result<Self, DieError> {
        // Anything past i64::MAX is too many sides either way
        let sides = i64::try_from(parse_notation(notation)?).unwrap_or(i64::MAX);
        Self::new(sides)
    }

    /// The number of sides, also the highest value the die can roll.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll the die once.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `roll_with()`
    pub fn roll(&self) -> u32 {
        self.roll_with(&mut thread_rng())
    }

    /// Roll the die once with the rng specified.
    /// If you don't care about which rng to use you can use `roll` instead.
    pub fn roll_with(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(1..=self.sides)
    }
}

impl Default for Die {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
        }
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides)
    }
}

impl FromStr for Die {
    type Err = DieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn test_default_is_d6() {
        assert_eq!(Die::default().sides(), 6);
        assert_eq!(Die::default(), Die::new(6).unwrap());
    }

    #[test]
    fn test_new_keeps_sides() {
        assert_eq!(Die::new(20).unwrap().sides(), 20);
        assert_eq!(Die::new(1).unwrap().sides(), 1);
    }

    #[test]
    fn test_new_zero_sides() {
        assert_eq!(Die::new(0), Err(DieError::InvalidConfiguration(0)));
    }

    #[test]
    fn test_new_negative_sides() {
        assert_eq!(Die::new(-1), Err(DieError::InvalidConfiguration(-1)));
        assert_eq!(
            Die::new(i64::MIN),
            Err(DieError::InvalidConfiguration(i64::MIN))
        );
    }

    #[test]
    fn test_new_too_many_sides() {
        let too_many = i64::from(u32::MAX) + 1;
        assert_eq!(
            Die::new(too_many),
            Err(DieError::InvalidConfiguration(too_many))
        );
        assert_eq!(Die::new(i64::from(u32::MAX)).unwrap().sides(), u32::MAX);
    }

    #[test]
    fn test_parse_too_many_sides() {
        assert_eq!(
            Die::parse("d4294967296"),
            Err(DieError::InvalidConfiguration(4_294_967_296))
        );
        assert_eq!(
            Die::parse("d18446744073709551615"),
            Err(DieError::InvalidConfiguration(i64::MAX))
        );
        assert_eq!(Die::parse("d4294967295").unwrap().sides(), u32::MAX);
    }

    #[test]
    fn test_one_sided_die_always_rolls_one() {
        let die = Die::new(1).unwrap();
        let mut rng = test_rng();
        assert!((0..1000).all(|_| die.roll_with(&mut rng) == 1));
    }

    #[test]
    fn test_roll_with_reaches_both_ends() {
        let die = Die::new(4).unwrap();
        let mut rng = test_rng();
        let rolls: Vec<u32> = (0..1000).map(|_| die.roll_with(&mut rng)).collect();

        assert!(rolls.contains(&1));
        assert!(rolls.contains(&4));
        assert!(rolls.iter().all(|r| (1..=4).contains(r)));
    }

    #[test]
    fn test_huge_die_stays_in_range() {
        let die = Die::new(i64::from(u32::MAX)).unwrap();
        let mut rng = test_rng();
        for _ in 0..1000 {
            assert!(die.roll_with(&mut rng) >= 1);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Die::default().to_string(), "d6");
        assert_eq!(Die::new(100).unwrap().to_string(), "d100");
    }

    #[test]
    fn test_display_parses_back() {
        let die = Die::new(12).unwrap();
        assert_eq!(die.to_string().parse::<Die>(), Ok(die));
    }

    #[test]
    fn test_die_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Die>();
    }
}
