use crate::amounts::{Amount, Locale};
use crate::nonprofits::Category;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

fn parse_order_total(s: &str) -> Result<Amount, String> {
    let figure = Decimal::from_str_exact(s).map_err(|_| {
        format!(
            "Could not decode order total {}: Format is {{EUROS}}.{{CENTS}}, eg. 149.99",
            s
        )
    })?;
    Amount::from_figure(figure).map_err(|error| error.to_string())
}

/// Preview the round-up donation widget of a checkout page.
#[derive(Parser, Debug)]
#[command()]
pub struct CheckoutOptions {
    /// Directory holding config.json
    #[arg(short = 'V', long)]
    pub vault: Option<PathBuf>,

    /// Id of the nonprofit to donate to, defaults to the first of the catalog
    #[arg(short = 'n', long)]
    pub nonprofit: Option<String>,

    /// Number of preset amounts to offer, 1 to 3
    #[arg(short = 'c', long, allow_negative_numbers = true)]
    pub count: Option<i32>,

    /// Seed for a reproducible draw
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    #[arg(short = 'o', long = "order-total", value_parser = parse_order_total)]
    pub order_total: Option<Amount>,

    #[arg(short = 'l', long, value_enum)]
    pub locale: Option<Locale>,

    /// Index of the preset amount to choose instead of the default one
    #[arg(short = 'p', long, conflicts_with = "custom")]
    pub pick: Option<usize>,

    /// Amount typed by the customer, eg. 2,50
    #[arg(long)]
    pub custom: Option<String>,

    /// List the nonprofits instead of previewing the widget
    #[arg(long)]
    pub list: bool,

    #[arg(long, requires = "list")]
    pub search: Option<String>,

    #[arg(long, value_enum, requires = "list")]
    pub category: Option<Category>,
}
