use crate::amounts::{Amount, Locale};
use crate::errors::RoundupError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{from_reader, from_value, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "config.json";

/// A directory holding `config.json`. Each component reads its own top level key.
pub struct Vault {
    path: PathBuf,
}

impl Vault {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_config(&self) -> Result<Value, RoundupError> {
        let file = File::open(self.path.join(CONFIG_FILE))?;
        Ok(from_reader(BufReader::new(file))?)
    }

    pub fn read_vault_values<T: DeserializeOwned>(&self, key: &str) -> Result<T, RoundupError> {
        self.read_optional_vault_values(key)?
            .ok_or_else(|| RoundupError::MissingVaultKey(key.to_string()))
    }

    pub fn read_optional_vault_values<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, RoundupError> {
        let mut config = self.read_config()?;
        match config.get_mut(key).map(Value::take) {
            Some(value) => Ok(Some(from_value(value)?)),
            None => Ok(None),
        }
    }
}

pub trait VaultReadable: DeserializeOwned {
    const KEY: &'static str;

    fn from_vault(vault: &Vault) -> Result<Self, RoundupError> {
        vault.read_vault_values(Self::KEY)
    }

    fn from_vault_or_default(vault: &Vault) -> Result<Self, RoundupError>
    where
        Self: Default,
    {
        Ok(vault
            .read_optional_vault_values(Self::KEY)?
            .unwrap_or_default())
    }
}

/// Settings of the checkout page the widget is embedded in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckoutVaultValues {
    pub order_total: Option<Amount>,
    pub locale: Option<Locale>,
    pub preset_count: Option<i32>,
    pub default_nonprofit: Option<String>,
}

impl VaultReadable for CheckoutVaultValues {
    const KEY: &'static str = "checkout";
}
