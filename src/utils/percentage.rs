use std::{fmt::Display, ops::Deref};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0.round())
    }
}

impl Percentage {
    pub const ZERO: Percentage = Percentage(0.);
}

impl Deref for Percentage {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Share of `part` in `whole`. An empty whole is reported as 0% instead of dividing by zero.
pub fn ratio_percentage(part: usize, whole: usize) -> Percentage {
    if whole == 0 {
        return Percentage::ZERO;
    }
    Percentage(part as f64 / whole as f64 * 100.)
}

#[cfg(test)]
mod tests {
    use super::{ratio_percentage, Percentage};

    #[test]
    fn test_ratio_empty_whole() {
        assert_eq!(ratio_percentage(0, 0), Percentage::ZERO);
    }

    #[test]
    fn test_ratio_values() {
        assert_eq!(*ratio_percentage(1, 4), 25.);
        assert_eq!(*ratio_percentage(3, 3), 100.);
        assert_eq!(ratio_percentage(1, 3).to_string(), "33%");
    }
}
