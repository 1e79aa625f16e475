use crate::errors::RoundupError;
use clap::ValueEnum;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::fmt::{Debug, Display, Formatter};
use std::ops;

pub type Figure = Decimal;
pub type Cents = u32;

pub const MIN_AMOUNT: Amount = Amount::from_cents(50);
pub const MAX_AMOUNT: Amount = Amount::from_cents(500);
pub const MAX_FIRST_AMOUNT_FOR_TWO: Amount = Amount::from_cents(200);
pub const MAX_WINDOW_SPAN: Amount = Amount::from_cents(100);

/// A euro amount held as integer cents.
///
/// Arithmetic never leaves the integer domain; `Figure` only shows up when
/// parsing user or vault input and when formatting for display.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "Figure")]
pub struct Amount {
    cents: Cents,
}

impl Amount {
    pub const ZERO: Amount = Amount::from_cents(0);

    pub const fn from_cents(cents: Cents) -> Self {
        Self { cents }
    }

    pub const fn cents(&self) -> Cents {
        self.cents
    }

    pub fn figure(&self) -> Figure {
        Decimal::new(self.cents as i64, 2)
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    pub fn from_figure(figure: Figure) -> Result<Amount, RoundupError> {
        let rounded = figure.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        if rounded.is_zero() {
            return Ok(Amount::ZERO);
        }
        if rounded < Decimal::ZERO {
            return Err(RoundupError::InvalidAmount(format!(
                "{} is negative",
                figure
            )));
        }

        (rounded * Decimal::ONE_HUNDRED)
            .to_u32()
            .map(Amount::from_cents)
            .ok_or(RoundupError::InvalidAmount(format!("{} is too large", figure)))
    }

    /// Reads an amount typed by the customer. Both `1,50` and `1.50` are
    /// accepted, anything other than digits and separators is dropped.
    pub fn parse_custom(input: &str) -> Result<Amount, RoundupError> {
        let sanitized: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        if sanitized.is_empty() {
            return Err(RoundupError::InvalidAmount(format!(
                "{:?} does not contain a number",
                input
            )));
        }

        let figure = Decimal::from_str_exact(&sanitized).map_err(|error| {
            RoundupError::InvalidAmount(format!("{:?}: {}", input, error))
        })?;
        Amount::from_figure(figure)
    }

    pub fn saturating_sub(&self, other: Amount) -> Amount {
        Amount::from_cents(self.cents.saturating_sub(other.cents))
    }

    pub fn format(&self, locale: Locale) -> String {
        let euros = group_thousands(self.cents / 100, locale.grouping_separator());
        format!(
            "{}{}{:02}{}",
            euros,
            locale.decimal_separator(),
            self.cents % 100,
            locale.currency_suffix()
        )
    }
}

impl TryFrom<Figure> for Amount {
    type Error = RoundupError;

    fn try_from(figure: Figure) -> Result<Self, Self::Error> {
        Amount::from_figure(figure)
    }
}

impl ops::Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "€{}", self.figure())
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// How amounts are rendered next to the preset buttons and in the summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// `1.234,50€`
    #[default]
    Greek,
    /// `1.234,50 €`
    German,
    /// `1,234.50 €`
    Plain,
}

impl Locale {
    fn decimal_separator(self) -> char {
        match self {
            Locale::Greek | Locale::German => ',',
            Locale::Plain => '.',
        }
    }

    fn grouping_separator(self) -> char {
        match self {
            Locale::Greek | Locale::German => '.',
            Locale::Plain => ',',
        }
    }

    fn currency_suffix(self) -> &'static str {
        match self {
            Locale::Greek => "€",
            Locale::German | Locale::Plain => " €",
        }
    }
}

fn group_thousands(value: u32, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
