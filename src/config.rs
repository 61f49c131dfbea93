//! Operator credentials and network selection.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory:
//!
//! ```text
//! OPERATOR_ACCOUNT_ID=0.0.1234
//! OPERATOR_PRIVATE_KEY=302e0201...
//! HEDERA_NETWORK=testnet                 # optional: testnet | previewnet | mainnet
//! DEFAULT_MAX_TRANSACTION_FEE_HBAR=100   # optional
//! ```

use std::fmt;
use std::str::FromStr;

use hedera::{AccountId, Client, Hbar, PrivateKey};

use crate::error::{Error, Result};

pub const OPERATOR_ACCOUNT_ID_ENV: &str = "OPERATOR_ACCOUNT_ID";
pub const OPERATOR_PRIVATE_KEY_ENV: &str = "OPERATOR_PRIVATE_KEY";
pub const NETWORK_ENV: &str = "HEDERA_NETWORK";
pub const MAX_TRANSACTION_FEE_ENV: &str = "DEFAULT_MAX_TRANSACTION_FEE_HBAR";

const DEFAULT_MAX_TRANSACTION_FEE_HBAR: i64 = 100;

/// Hedera network the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Network {
    #[default]
    Testnet,
    Previewnet,
    Mainnet,
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Previewnet => "previewnet",
            Network::Mainnet => "mainnet",
        }
    }

    /// Client for this network with no operator set.
    pub fn client(&self) -> Client {
        match self {
            Network::Testnet => Client::for_testnet(),
            Network::Previewnet => Client::for_previewnet(),
            Network::Mainnet => Client::for_mainnet(),
        }
    }

    /// HashScan link for an entity, e.g. `hashscan_url("account", &id)`.
    pub fn hashscan_url(&self, kind: &str, id: &impl fmt::Display) -> String {
        format!("https://hashscan.io/{}/{}/{}", self.name(), kind, id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "previewnet" => Ok(Network::Previewnet),
            "mainnet" => Ok(Network::Mainnet),
            other => Err(Error::InvalidConfig {
                name: NETWORK_ENV,
                reason: format!("unknown network `{other}`"),
            }),
        }
    }
}

/// Operator account and client defaults.
#[derive(Clone)]
pub struct Config {
    pub network: Network,
    pub operator_account_id: AccountId,
    pub operator_private_key: PrivateKey,
    pub default_max_transaction_fee: Hbar,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("network", &self.network)
            .field("operator_account_id", &format_args!("{}", self.operator_account_id))
            .field("operator_private_key", &"<redacted>")
            .field("default_max_transaction_fee", &format_args!("{}", self.default_max_transaction_fee))
            .finish()
    }
}

impl Config {
    /// Load from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any name -> value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(Error::MissingEnv(name));

        let operator_account_id = required(OPERATOR_ACCOUNT_ID_ENV)?;
        let operator_private_key = required(OPERATOR_PRIVATE_KEY_ENV)?;

        let operator_account_id =
            AccountId::from_str(operator_account_id.trim()).map_err(|e| Error::InvalidConfig {
                name: OPERATOR_ACCOUNT_ID_ENV,
                reason: e.to_string(),
            })?;
        let operator_private_key = PrivateKey::from_str(operator_private_key.trim())
            .map_err(|e| Error::InvalidConfig {
                name: OPERATOR_PRIVATE_KEY_ENV,
                reason: e.to_string(),
            })?;

        let network = match get(NETWORK_ENV) {
            Some(value) => value.parse()?,
            None => Network::default(),
        };

        let max_fee = match get(MAX_TRANSACTION_FEE_ENV) {
            Some(value) => value.trim().parse::<i64>().map_err(|e| Error::InvalidConfig {
                name: MAX_TRANSACTION_FEE_ENV,
                reason: e.to_string(),
            })?,
            None => DEFAULT_MAX_TRANSACTION_FEE_HBAR,
        };

        Ok(Self {
            network,
            operator_account_id,
            operator_private_key,
            default_max_transaction_fee: Hbar::new(max_fee),
        })
    }

    /// Client for the configured network with the operator and max fee applied.
    pub fn client(&self) -> Client {
        let client = self.network.client();
        self.restore_operator(&client);
        client.set_default_max_transaction_fee(self.default_max_transaction_fee);

        tracing::info!(
            network = %self.network,
            operator = %self.operator_account_id,
            "Client initialized"
        );
        client
    }

    /// Point the client back at the configured operator account.
    pub fn restore_operator(&self, client: &Client) {
        client.set_operator(self.operator_account_id.clone(), self.operator_private_key.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn operator_key() -> String {
        PrivateKey::generate_ed25519().to_string()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let key = operator_key();
        let config = Config::from_lookup(lookup(&[
            (OPERATOR_ACCOUNT_ID_ENV, "0.0.1234"),
            (OPERATOR_PRIVATE_KEY_ENV, &key),
        ]))
        .unwrap();

        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.operator_account_id, AccountId::from_str("0.0.1234").unwrap());
        assert_eq!(config.default_max_transaction_fee, Hbar::new(100));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let key = operator_key();
        let config = Config::from_lookup(lookup(&[
            (OPERATOR_ACCOUNT_ID_ENV, " 0.0.42 "),
            (OPERATOR_PRIVATE_KEY_ENV, &key),
            (NETWORK_ENV, "PreviewNet"),
            (MAX_TRANSACTION_FEE_ENV, "25"),
        ]))
        .unwrap();

        assert_eq!(config.network, Network::Previewnet);
        assert_eq!(config.operator_account_id.num, 42);
        assert_eq!(config.default_max_transaction_fee, Hbar::new(25));
    }

    #[test]
    fn test_missing_credentials() {
        let err = Config::from_lookup(lookup(&[(OPERATOR_ACCOUNT_ID_ENV, "0.0.1234")])).unwrap_err();
        assert!(matches!(err, Error::MissingEnv(OPERATOR_PRIVATE_KEY_ENV)));

        let key = operator_key();
        let err = Config::from_lookup(lookup(&[
            (OPERATOR_ACCOUNT_ID_ENV, "  "),
            (OPERATOR_PRIVATE_KEY_ENV, &key),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::MissingEnv(OPERATOR_ACCOUNT_ID_ENV)));
    }

    #[test]
    fn test_invalid_values() {
        let key = operator_key();
        let err = Config::from_lookup(lookup(&[
            (OPERATOR_ACCOUNT_ID_ENV, "not-an-account"),
            (OPERATOR_PRIVATE_KEY_ENV, &key),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { name: OPERATOR_ACCOUNT_ID_ENV, .. }));

        let err = Config::from_lookup(lookup(&[
            (OPERATOR_ACCOUNT_ID_ENV, "0.0.1234"),
            (OPERATOR_PRIVATE_KEY_ENV, &key),
            (NETWORK_ENV, "devnet"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { name: NETWORK_ENV, .. }));

        let err = Config::from_lookup(lookup(&[
            (OPERATOR_ACCOUNT_ID_ENV, "0.0.1234"),
            (OPERATOR_PRIVATE_KEY_ENV, &key),
            (MAX_TRANSACTION_FEE_ENV, "lots"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { name: MAX_TRANSACTION_FEE_ENV, .. }));
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let key = operator_key();
        let config = Config::from_lookup(lookup(&[
            (OPERATOR_ACCOUNT_ID_ENV, "0.0.1234"),
            (OPERATOR_PRIVATE_KEY_ENV, &key),
        ]))
        .unwrap();

        let debug = format!("{config:?}");
        assert!(!debug.contains(&key));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("0.0.1234"));
    }

    #[tokio::test]
    async fn test_restore_operator() {
        let key = operator_key();
        let config = Config::from_lookup(lookup(&[
            (OPERATOR_ACCOUNT_ID_ENV, "0.0.1234"),
            (OPERATOR_PRIVATE_KEY_ENV, &key),
        ]))
        .unwrap();

        let client = config.network.client();
        assert_eq!(client.get_operator_account_id(), None);

        config.restore_operator(&client);
        assert_eq!(client.get_operator_account_id(), Some(config.operator_account_id.clone()));

        let other = AccountId::from_str("0.0.5678").unwrap();
        client.set_operator(other.clone(), PrivateKey::generate_ed25519());
        assert_eq!(client.get_operator_account_id(), Some(other));

        config.restore_operator(&client);
        assert_eq!(client.get_operator_account_id(), Some(config.operator_account_id.clone()));
    }

    #[test]
    fn test_hashscan_url() {
        let id = AccountId::from_str("0.0.98").unwrap();
        assert_eq!(
            Network::Testnet.hashscan_url("account", &id),
            "https://hashscan.io/testnet/account/0.0.98"
        );
        assert_eq!(
            Network::Mainnet.hashscan_url("token", &"0.0.7"),
            "https://hashscan.io/mainnet/token/0.0.7"
        );
    }
}
