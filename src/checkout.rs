use crate::amounts::Amount;
use crate::session::DonationListener;
use derive_builder::Builder;

pub const DEFAULT_ORDER_TOTAL: Amount = Amount::from_cents(14999);

/// The order summary next to the widget. Receives the chosen donation and
/// recomputes the total shown to the customer.
#[derive(Clone, Debug, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct CheckoutSummary {
    #[builder(default = "DEFAULT_ORDER_TOTAL")]
    order_total: Amount,
    #[builder(default)]
    donation: Amount,
}

impl CheckoutSummary {
    pub fn order_total(&self) -> Amount {
        self.order_total
    }

    pub fn donation(&self) -> Amount {
        self.donation
    }

    pub fn total(&self) -> Amount {
        self.order_total + self.donation
    }
}

impl DonationListener for CheckoutSummary {
    fn on_amount_chosen(&mut self, amount: Amount) {
        self.donation = amount;
    }
}
