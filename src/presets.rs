use crate::amounts::{
    Amount, MAX_AMOUNT, MAX_FIRST_AMOUNT_FOR_TWO, MAX_WINDOW_SPAN, MIN_AMOUNT,
};
use crate::errors::RoundupError;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

mod window;

pub use window::{candidate_starts, max_start, Step, Window, START_INCREMENT};

pub const MAX_PRESETS: usize = 3;

/// Ascending, duplicate free and never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmountSet(Vec<Amount>);

impl AmountSet {
    fn from_unsorted(mut amounts: Vec<Amount>) -> Self {
        amounts.sort();
        amounts.dedup();
        AmountSet(amounts)
    }

    pub fn as_slice(&self) -> &[Amount] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Amount> {
        self.0.get(index).copied()
    }

    pub fn contains(&self, amount: &Amount) -> bool {
        self.0.contains(amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Amount> {
        self.0.iter()
    }

    pub fn min(&self) -> Option<Amount> {
        self.0.first().copied()
    }

    pub fn max(&self) -> Option<Amount> {
        self.0.last().copied()
    }
}

impl<'a> IntoIterator for &'a AmountSet {
    type Item = &'a Amount;
    type IntoIter = std::slice::Iter<'a, Amount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One run of the generator, with the random choices it made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetDraw {
    pub step: Step,
    pub window: Window,
    pub amounts: AmountSet,
}

/// How many amounts will actually be offered for a requested `count`.
pub fn clamp_count(count: i32, pool_size: usize) -> usize {
    let requested = usize::try_from(count).unwrap_or(0);
    requested.min(MAX_PRESETS).min(pool_size).max(1)
}

pub fn generate<R: Rng>(count: i32, rng: &mut R) -> AmountSet {
    draw(count, rng).amounts
}

pub fn draw<R: Rng>(count: i32, rng: &mut R) -> PresetDraw {
    if !(1..=MAX_PRESETS as i32).contains(&count) {
        warn!(count, "Preset count out of range, clamping");
    }

    let step = if rng.gen_bool(0.5) { Step::Half } else { Step::Whole };
    let size = clamp_count(count, step.pool_size());

    let start = candidate_starts(max_start(step, size))
        .choose(rng)
        .copied()
        .unwrap_or(MIN_AMOUNT);
    let window = Window::new(start, step);
    let amounts = draw_from_window(&window, size, rng);

    debug!(
        ?step,
        start = %window.start(),
        amounts = ?amounts.as_slice(),
        "Drew preset amounts"
    );

    PresetDraw {
        step,
        window,
        amounts,
    }
}

/// Takes `count` amounts at random out of the window's pool. Returns the whole
/// pool, sorted, when it holds fewer than `count` values.
pub fn draw_from_window<R: Rng>(window: &Window, count: usize, rng: &mut R) -> AmountSet {
    let mut pool = window.pool();
    pool.shuffle(rng);
    pool.truncate(count.max(1));
    AmountSet::from_unsorted(pool)
}

/// Index of the amount that starts out selected.
pub fn pick_default_index<R: Rng>(amounts: &AmountSet, rng: &mut R) -> usize {
    if amounts.is_empty() {
        return 0;
    }
    rng.gen_range(0..amounts.len())
}

/// Checked once at startup, the generator relies on these relations.
pub fn validate_parameters() -> Result<(), RoundupError> {
    if MIN_AMOUNT > MAX_AMOUNT {
        return Err(RoundupError::InvalidParameters(format!(
            "minimum amount {} is above maximum amount {}",
            MIN_AMOUNT, MAX_AMOUNT
        )));
    }

    if MIN_AMOUNT + MAX_WINDOW_SPAN > MAX_AMOUNT {
        return Err(RoundupError::InvalidParameters(format!(
            "a window of {} starting at {} does not fit under {}",
            MAX_WINDOW_SPAN, MIN_AMOUNT, MAX_AMOUNT
        )));
    }

    if MAX_FIRST_AMOUNT_FOR_TWO < MIN_AMOUNT || MAX_FIRST_AMOUNT_FOR_TWO > MAX_AMOUNT {
        return Err(RoundupError::InvalidParameters(format!(
            "first amount bound {} is outside of {} to {}",
            MAX_FIRST_AMOUNT_FOR_TWO, MIN_AMOUNT, MAX_AMOUNT
        )));
    }

    for step in Step::ALL {
        if MAX_WINDOW_SPAN.cents() % step.cents() != 0 {
            return Err(RoundupError::InvalidParameters(format!(
                "window span {} is not a multiple of step {}",
                MAX_WINDOW_SPAN,
                step.amount()
            )));
        }
    }

    if Step::ALL
        .iter()
        .any(|step| candidate_starts(max_start(*step, 2)).is_empty())
    {
        return Err(RoundupError::InvalidParameters(
            "no window start leaves room for two amounts".to_string(),
        ));
    }

    Ok(())
}
