use crate::amounts::Amount;
use crate::errors::RoundupError;
use crate::nonprofits::{Catalog, Nonprofit};
use crate::presets::{generate, pick_default_index, AmountSet};
#[cfg(test)]
use mockall::automock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Receives the donation every time the customer changes it. Amounts are
/// plain values, formatting belongs to whoever listens.
#[cfg_attr(test, automock)]
pub trait DonationListener {
    fn on_amount_chosen(&mut self, amount: Amount);
}

/// Donation state for the selected nonprofit. The preset amounts are drawn
/// once when the nonprofit is selected and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub nonprofit: Nonprofit,
    pub presets: AmountSet,
    pub default_index: usize,
    pub chosen: Option<Amount>,
}

impl Selection {
    pub fn default_amount(&self) -> Option<Amount> {
        self.presets.get(self.default_index)
    }
}

/// One customer's widget. Owns its random source so sessions never share
/// generator state.
pub struct DonationSession<R: Rng> {
    rng: R,
    catalog: Catalog,
    preset_count: i32,
    selection: Option<Selection>,
}

impl DonationSession<StdRng> {
    pub fn from_entropy(catalog: Catalog, preset_count: i32) -> Self {
        DonationSession::new(StdRng::from_entropy(), catalog, preset_count)
    }

    pub fn seeded(seed: u64, catalog: Catalog, preset_count: i32) -> Self {
        DonationSession::new(StdRng::seed_from_u64(seed), catalog, preset_count)
    }
}

impl<R: Rng> DonationSession<R> {
    pub fn new(rng: R, catalog: Catalog, preset_count: i32) -> Self {
        Self {
            rng,
            catalog,
            preset_count,
            selection: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn donation(&self) -> Amount {
        self.selection
            .as_ref()
            .and_then(|selection| selection.chosen)
            .unwrap_or(Amount::ZERO)
    }

    /// Switching to another nonprofit replaces its preset amounts, drops the
    /// chosen amount and reports a zero donation. Selecting the current one
    /// again changes nothing and notifies nobody.
    pub fn select_nonprofit<L: DonationListener>(
        &mut self,
        id: &str,
        listener: &mut L,
    ) -> Result<&Selection, RoundupError> {
        let nonprofit = self.catalog.find(id)?.clone();

        let unchanged = matches!(&self.selection, Some(selection) if selection.nonprofit.id == id);
        if !unchanged {
            let presets = generate(self.preset_count, &mut self.rng);
            let default_index = pick_default_index(&presets, &mut self.rng);
            info!(
                nonprofit = %nonprofit.id,
                presets = ?presets.as_slice(),
                default_index,
                "Selected nonprofit"
            );

            self.selection = Some(Selection {
                nonprofit,
                presets,
                default_index,
                chosen: None,
            });

            listener.on_amount_chosen(Amount::ZERO);
        }

        self.selection.as_ref().ok_or(RoundupError::NoNonprofitSelected)
    }

    pub fn choose_preset<L: DonationListener>(
        &mut self,
        index: usize,
        listener: &mut L,
    ) -> Result<Amount, RoundupError> {
        let selection = self.selection.as_ref().ok_or(RoundupError::NoNonprofitSelected)?;
        let amount = selection
            .presets
            .get(index)
            .ok_or(RoundupError::PresetOutOfRange {
                index,
                len: selection.presets.len(),
            })?;
        self.choose_amount(amount, listener)
    }

    pub fn choose_default<L: DonationListener>(
        &mut self,
        listener: &mut L,
    ) -> Result<Amount, RoundupError> {
        let index = self
            .selection
            .as_ref()
            .ok_or(RoundupError::NoNonprofitSelected)?
            .default_index;
        self.choose_preset(index, listener)
    }

    pub fn choose_custom<L: DonationListener>(
        &mut self,
        input: &str,
        listener: &mut L,
    ) -> Result<Amount, RoundupError> {
        let amount = Amount::parse_custom(input)?;
        self.choose_amount(amount, listener)
    }

    /// Choosing the amount that is already chosen does not notify again.
    pub fn choose_amount<L: DonationListener>(
        &mut self,
        amount: Amount,
        listener: &mut L,
    ) -> Result<Amount, RoundupError> {
        let selection = self.selection.as_mut().ok_or(RoundupError::NoNonprofitSelected)?;
        if selection.chosen == Some(amount) {
            return Ok(amount);
        }

        selection.chosen = Some(amount);
        info!(nonprofit = %selection.nonprofit.id, %amount, "Chose donation");
        listener.on_amount_chosen(amount);
        Ok(amount)
    }

    pub fn clear<L: DonationListener>(&mut self, listener: &mut L) {
        self.selection = None;
        listener.on_amount_chosen(Amount::ZERO);
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::{DonationSession, MockDonationListener};
    use crate::amounts::Amount;
    use crate::errors::RoundupError;
    use crate::nonprofits::Catalog;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;

    fn session() -> DonationSession<StdRng> {
        DonationSession::seeded(1, Catalog::default(), 3)
    }

    fn silent_listener() -> MockDonationListener {
        let mut listener = MockDonationListener::new();
        listener.expect_on_amount_chosen().never();
        listener
    }

    fn zero_listener() -> MockDonationListener {
        let mut listener = MockDonationListener::new();
        listener
            .expect_on_amount_chosen()
            .with(eq(Amount::ZERO))
            .times(1)
            .return_const(());
        listener
    }

    #[test]
    fn select_nonprofit__draws_presets() {
        let mut session = session();
        let selection = session.select_nonprofit("arsis", &mut zero_listener()).unwrap();
        assert_eq!(selection.nonprofit.id, "arsis");
        assert!(!selection.presets.is_empty());
        assert!(selection.default_index < selection.presets.len());
        assert_eq!(selection.chosen, None);
    }

    #[test]
    fn select_nonprofit__unknown() {
        assert!(matches!(
            session().select_nonprofit("nope", &mut silent_listener()),
            Err(RoundupError::UnknownNonprofit(_))
        ))
    }

    #[test]
    fn select_nonprofit__same_nonprofit__presets_kept() {
        let mut session = session();
        let first = session
            .select_nonprofit("espi", &mut zero_listener())
            .unwrap()
            .clone();
        for _ in 0..20 {
            let again = session.select_nonprofit("espi", &mut silent_listener()).unwrap();
            assert_eq!(*again, first);
        }
    }

    #[test]
    fn select_nonprofit__same_seed__same_presets() {
        let first = session()
            .select_nonprofit("ariel", &mut zero_listener())
            .unwrap()
            .clone();
        let second = session()
            .select_nonprofit("ariel", &mut zero_listener())
            .unwrap()
            .clone();
        assert_eq!(first, second);
    }

    #[test]
    fn select_nonprofit__other_nonprofit_after_donation__resets_to_zero() {
        let mut session = session();
        session.select_nonprofit("arsis", &mut zero_listener()).unwrap();

        let mut listener = MockDonationListener::new();
        listener.expect_on_amount_chosen().times(1).return_const(());
        session.choose_default(&mut listener).unwrap();

        let mut listener = MockDonationListener::new();
        listener
            .expect_on_amount_chosen()
            .with(eq(Amount::ZERO))
            .times(1)
            .return_const(());
        let selection = session.select_nonprofit("moiazw", &mut listener).unwrap();
        assert_eq!(selection.nonprofit.id, "moiazw");
        assert_eq!(selection.chosen, None);
        assert_eq!(session.donation(), Amount::ZERO);
    }

    #[test]
    fn select_nonprofit__switching_without_donation__notifies_zero_each_time() {
        let mut session = session();
        let mut listener = MockDonationListener::new();
        listener
            .expect_on_amount_chosen()
            .with(eq(Amount::ZERO))
            .times(2)
            .return_const(());
        session.select_nonprofit("arsis", &mut listener).unwrap();
        session.select_nonprofit("espi", &mut listener).unwrap();
        session.select_nonprofit("espi", &mut listener).unwrap();
        assert_eq!(session.selection().unwrap().nonprofit.id, "espi");
    }

    #[test]
    fn choose_preset__notifies_listener() {
        let mut session = session();
        let expected = session
            .select_nonprofit("arsis", &mut zero_listener())
            .unwrap()
            .presets
            .get(0)
            .unwrap();

        let mut listener = MockDonationListener::new();
        listener
            .expect_on_amount_chosen()
            .with(eq(expected))
            .times(1)
            .return_const(());
        assert_eq!(session.choose_preset(0, &mut listener).unwrap(), expected);
        assert_eq!(session.donation(), expected);
    }

    #[test]
    fn choose_preset__out_of_range() {
        let mut session = session();
        session.select_nonprofit("arsis", &mut zero_listener()).unwrap();
        assert!(matches!(
            session.choose_preset(3, &mut silent_listener()),
            Err(RoundupError::PresetOutOfRange { index: 3, .. })
        ))
    }

    #[test]
    fn choose_preset__same_amount_twice__notifies_once() {
        let mut session = session();
        session.select_nonprofit("arsis", &mut zero_listener()).unwrap();

        let mut listener = MockDonationListener::new();
        listener.expect_on_amount_chosen().times(1).return_const(());
        session.choose_preset(0, &mut listener).unwrap();
        session.choose_preset(0, &mut listener).unwrap();
    }

    #[test]
    fn choose_default__picks_default_amount() {
        let mut session = session();
        let expected = session
            .select_nonprofit("arsis", &mut zero_listener())
            .unwrap()
            .default_amount()
            .unwrap();

        let mut listener = MockDonationListener::new();
        listener
            .expect_on_amount_chosen()
            .with(eq(expected))
            .times(1)
            .return_const(());
        assert_eq!(session.choose_default(&mut listener).unwrap(), expected);
    }

    #[test]
    fn choose_amount__without_nonprofit__rejected() {
        assert!(matches!(
            session().choose_amount(Amount::from_cents(100), &mut silent_listener()),
            Err(RoundupError::NoNonprofitSelected)
        ))
    }

    #[test]
    fn choose_custom__parses_and_notifies() {
        let mut session = session();
        session.select_nonprofit("arsis", &mut zero_listener()).unwrap();

        let mut listener = MockDonationListener::new();
        listener
            .expect_on_amount_chosen()
            .with(eq(Amount::from_cents(750)))
            .times(1)
            .return_const(());
        assert_eq!(
            session.choose_custom("7,50", &mut listener).unwrap(),
            Amount::from_cents(750)
        );
    }

    #[test]
    fn choose_custom__invalid_input__nothing_chosen() {
        let mut session = session();
        session.select_nonprofit("arsis", &mut zero_listener()).unwrap();
        assert!(session.choose_custom("lots", &mut silent_listener()).is_err());
        assert_eq!(session.donation(), Amount::ZERO);
    }

    #[test]
    fn clear__drops_selection_and_notifies_zero() {
        let mut session = session();
        session.select_nonprofit("arsis", &mut zero_listener()).unwrap();

        let mut listener = MockDonationListener::new();
        listener
            .expect_on_amount_chosen()
            .with(eq(Amount::ZERO))
            .times(1)
            .return_const(());
        session.clear(&mut listener);
        assert!(session.selection().is_none());
    }
}
