use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionError {
    #[error("cannot share {dividend} treats among {divisor} animals")]
    InvalidDivisor { dividend: u32, divisor: u32 },
}

/// A fair-sharing problem: `dividend` treats shared among `divisor` animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionProblem {
    pub dividend: u32,
    pub divisor: u32,
}

/// Result of a division. `quotient * divisor + remainder == dividend` and
/// `remainder < divisor` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    pub dividend: u32,
    pub divisor: u32,
    pub quotient: u32,
    pub remainder: u32,
}

impl DivisionProblem {
    pub fn new(dividend: u32, divisor: u32) -> Self {
        Self { dividend, divisor }
    }

    pub fn solve(&self) -> Result<Division, DivisionError> {
        divide(self.dividend, self.divisor)
    }
}

impl Division {
    /// Treats handed out evenly, i.e. everything except the leftovers.
    pub fn fair_share(&self) -> u32 {
        self.quotient * self.divisor
    }

    pub fn is_even(&self) -> bool {
        self.remainder == 0
    }
}

pub fn divide(dividend: u32, divisor: u32) -> Result<Division, DivisionError> {
    if divisor == 0 {
        return Err(DivisionError::InvalidDivisor { dividend, divisor });
    }

    Ok(Division {
        dividend,
        divisor,
        quotient: dividend / divisor,
        remainder: dividend % divisor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names;

    #[test]
    fn division_algorithm_holds_across_slider_ranges() {
        for dividend in names::TREATS_MIN..=names::TREATS_MAX {
            for divisor in names::ANIMALS_MIN..=names::ANIMALS_MAX {
                let d = divide(dividend, divisor).unwrap();
                assert_eq!(d.quotient * divisor + d.remainder, dividend);
                assert!(d.remainder < divisor, "{dividend} / {divisor}");
            }
        }
    }

    #[test]
    fn twenty_among_five_is_even() {
        let d = divide(20, 5).unwrap();
        assert_eq!((d.quotient, d.remainder), (4, 0));
        assert!(d.is_even());
        assert_eq!(d.fair_share(), 20);
    }

    #[test]
    fn seventeen_by_three_leaves_two() {
        let d = DivisionProblem::new(17, 3).solve().unwrap();
        assert_eq!((d.quotient, d.remainder), (5, 2));
        assert_eq!(d.fair_share(), 15);
        assert!(!d.is_even());
    }

    #[test]
    fn zero_treats_share_nothing() {
        let d = divide(0, 4).unwrap();
        assert_eq!((d.quotient, d.remainder), (0, 0));
    }

    #[test]
    fn zero_divisor_is_rejected() {
        assert_eq!(
            divide(12, 0),
            Err(DivisionError::InvalidDivisor {
                dividend: 12,
                divisor: 0
            })
        );
    }

    #[test]
    fn repeated_division_is_stable() {
        let first = divide(37, 6).unwrap();
        for _ in 0..10 {
            assert_eq!(divide(37, 6).unwrap(), first);
        }
    }
}
