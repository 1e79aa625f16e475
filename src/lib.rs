//! Round-up donation preview: preset donation amounts, nonprofit catalog and
//! the checkout summary they feed into.

pub mod amounts;
pub mod checkout;
pub mod cli;
pub mod errors;
pub mod logging;
pub mod nonprofits;
pub mod presets;
pub mod session;
pub mod vault;
