//! Human-readable rendering with an optional fixed decimal precision.

use std::fmt;

use linsys_decimal::Scalar;
use num_traits::Zero;

/// Rendering options for vectors, hyperplanes and systems.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    /// Digits after the decimal point. `None` prints the exact decimal
    /// expansion with trailing zeros removed.
    pub precision: Option<usize>,
}

impl FormatConfig {
    /// Renders every number with exactly `places` fractional digits.
    #[must_use]
    pub fn fixed(places: usize) -> Self {
        Self {
            precision: Some(places),
        }
    }

    /// Renders a single scalar under this configuration.
    #[must_use]
    pub fn scalar(&self, value: &Scalar) -> String {
        match self.precision {
            Some(places) => value.format_fixed(places),
            None => value.to_string(),
        }
    }

    /// Renders `coefficient * x_index` as a signed term such as `+3x_1`.
    ///
    /// Returns `None` when the coefficient rounds to zero. Unit coefficients
    /// print without the digit (`-x_2`).
    pub(crate) fn term(&self, coefficient: &Scalar, index: usize) -> Option<String> {
        if coefficient.is_zero() {
            return None;
        }
        let magnitude = self.scalar(&coefficient.abs());
        if magnitude.chars().all(|c| c == '0' || c == '.') {
            return None;
        }
        let sign = if coefficient.is_negative() { '-' } else { '+' };
        let magnitude = if magnitude == "1" { "" } else { magnitude.as_str() };
        Some(format!("{sign}{magnitude}x_{index}"))
    }
}

/// Types that can render themselves under a [`FormatConfig`].
pub trait DisplayWith {
    /// Writes `self` using the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors.
    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, config: &FormatConfig) -> fmt::Result;

    /// Wraps `self` so that `Display` uses the given configuration.
    fn display_with(&self, config: FormatConfig) -> Formatted<'_, Self> {
        Formatted {
            value: self,
            config,
        }
    }
}

/// A value paired with the configuration it should be displayed with.
pub struct Formatted<'a, T: ?Sized> {
    value: &'a T,
    config: FormatConfig,
}

impl<T: DisplayWith + ?Sized> fmt::Display for Formatted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt_with(f, &self.config)
    }
}
