use crate::checkout::{CheckoutSummaryBuilder, DEFAULT_ORDER_TOTAL};
use crate::errors::RoundupError;
use crate::nonprofits::Catalog;
use crate::presets::validate_parameters;
use crate::session::DonationSession;
use crate::vault::{CheckoutVaultValues, Vault, VaultReadable};
use clap::Parser;
use tracing::error;

pub use argument_parsing::CheckoutOptions;

mod argument_parsing;
mod formatting;
mod tests;

pub const DEFAULT_PRESET_COUNT: i32 = 3;

pub fn checkout_preview() {
    let result: Result<String, RoundupError> = (|| {
        let arguments = CheckoutOptions::parse();
        run(arguments)
    })();

    match result {
        Ok(screen) => print!("{}", screen),
        Err(error) => {
            error!(%error, "Checkout preview failed");
            println!("Could not build checkout preview: {}", error)
        }
    }
}

pub fn run(options: CheckoutOptions) -> Result<String, RoundupError> {
    validate_parameters()?;

    let (catalog, checkout_values) = match &options.vault {
        Some(path) => {
            let vault = Vault::new(path.clone());
            (
                Catalog::from_vault_or_default(&vault)?,
                CheckoutVaultValues::from_vault_or_default(&vault)?,
            )
        }
        None => (Catalog::default(), CheckoutVaultValues::default()),
    };

    if options.list {
        let query = options.search.as_deref().unwrap_or("");
        return Ok(formatting::format_nonprofits(
            &catalog.filter(query, options.category),
        ));
    }

    let locale = options.locale.or(checkout_values.locale).unwrap_or_default();
    let preset_count = options
        .count
        .or(checkout_values.preset_count)
        .unwrap_or(DEFAULT_PRESET_COUNT);

    let mut session = match options.seed {
        Some(seed) => DonationSession::seeded(seed, catalog, preset_count),
        None => DonationSession::from_entropy(catalog, preset_count),
    };

    let mut summary = CheckoutSummaryBuilder::default()
        .order_total(
            options
                .order_total
                .or(checkout_values.order_total)
                .unwrap_or(DEFAULT_ORDER_TOTAL),
        )
        .build()?;

    let nonprofit_id = match options.nonprofit.or(checkout_values.default_nonprofit) {
        Some(id) => id,
        None => session.catalog().first()?.id.clone(),
    };
    session.select_nonprofit(&nonprofit_id, &mut summary)?;

    match (&options.custom, options.pick) {
        (Some(custom), _) => session.choose_custom(custom, &mut summary)?,
        (None, Some(index)) => session.choose_preset(index, &mut summary)?,
        (None, None) => session.choose_default(&mut summary)?,
    };

    let selection = session
        .selection()
        .ok_or(RoundupError::NoNonprofitSelected)?;
    Ok(formatting::format_checkout_screen(
        selection, &summary, locale,
    ))
}
