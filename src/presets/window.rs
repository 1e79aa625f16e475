use crate::amounts::{
    Amount, Cents, MAX_AMOUNT, MAX_FIRST_AMOUNT_FOR_TWO, MAX_WINDOW_SPAN, MIN_AMOUNT,
};

/// Window starts are always a multiple of this increment above `MIN_AMOUNT`.
pub const START_INCREMENT: Amount = Amount::from_cents(50);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Half,
    Whole,
}

impl Step {
    pub const ALL: [Step; 2] = [Step::Half, Step::Whole];

    pub const fn cents(self) -> Cents {
        match self {
            Step::Half => 50,
            Step::Whole => 100,
        }
    }

    pub const fn amount(self) -> Amount {
        Amount::from_cents(self.cents())
    }

    /// Number of amounts a full window yields with this step, both ends included.
    pub const fn pool_size(self) -> usize {
        (MAX_WINDOW_SPAN.cents() / self.cents()) as usize + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    start: Amount,
    step: Step,
}

impl Window {
    pub fn new(start: Amount, step: Step) -> Self {
        Self { start, step }
    }

    pub fn start(&self) -> Amount {
        self.start
    }

    pub fn end(&self) -> Amount {
        self.start + MAX_WINDOW_SPAN
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Every amount from start to end inclusive, ascending.
    pub fn pool(&self) -> Vec<Amount> {
        (self.start.cents()..=self.end().cents())
            .step_by(self.step.cents() as usize)
            .map(Amount::from_cents)
            .collect()
    }
}

/// Highest window start for which `size` amounts drawn from a window of this
/// step respect every Amount Set invariant.
///
/// The whole window must fit under `MAX_AMOUNT`. A two-amount set must also
/// keep its smaller amount at or below `MAX_FIRST_AMOUNT_FOR_TWO`: when the
/// pool holds more values than are taken, the lowest ones may be left out, so
/// the start is pulled down by one step per value left out.
pub fn max_start(step: Step, size: usize) -> Amount {
    let window_bound = MAX_AMOUNT.cents().saturating_sub(MAX_WINDOW_SPAN.cents());
    if size != 2 {
        return Amount::from_cents(window_bound);
    }

    let left_out = step.pool_size().saturating_sub(size) as Cents;
    let two_bound = MAX_FIRST_AMOUNT_FOR_TWO
        .cents()
        .saturating_sub(left_out * step.cents());
    Amount::from_cents(two_bound.min(window_bound))
}

/// Window starts from `MIN_AMOUNT` up to `max_start` inclusive. Empty when
/// `max_start` is below `MIN_AMOUNT`.
pub fn candidate_starts(max_start: Amount) -> Vec<Amount> {
    (MIN_AMOUNT.cents()..=max_start.cents())
        .step_by(START_INCREMENT.cents() as usize)
        .map(Amount::from_cents)
        .collect()
}
