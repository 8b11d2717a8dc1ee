//! Request parameter objects.
//!
//! Every optional field is an `Option` skipped when `None`: the node treats
//! "present but null" as a type error on some endpoints, so absent means
//! absent from the JSON. Text payloads are hex encoded when they are set,
//! through [`PayloadParams::text`].

use pasc_operations::RawOperations;
use pasc_types::{to_hex, DataType, KeyRef, Pasc, PayloadMethod};
use serde::{Serialize, Serializer};

macro_rules! key_params {
    ($(#[$meta:meta])* $name:ident, $enc:tt, $b58:tt) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
        pub struct $name {
            #[serde(rename = $enc, skip_serializing_if = "Option::is_none")]
            pub enc_pubkey: Option<String>,
            #[serde(rename = $b58, skip_serializing_if = "Option::is_none")]
            pub b58_pubkey: Option<String>,
        }

        impl From<KeyRef> for $name {
            fn from(key: KeyRef) -> Self {
                let (enc, b58) = key.as_params();
                Self {
                    enc_pubkey: enc.map(str::to_string),
                    b58_pubkey: b58.map(str::to_string),
                }
            }
        }

        impl From<Option<KeyRef>> for $name {
            fn from(key: Option<KeyRef>) -> Self {
                key.map(Self::from).unwrap_or_default()
            }
        }
    };
}

key_params!(
    /// `enc_pubkey` / `b58_pubkey`.
    KeyParams, "enc_pubkey", "b58_pubkey"
);
key_params!(NewKeyParams, "new_enc_pubkey", "new_b58_pubkey");
key_params!(OldKeyParams, "old_enc_pubkey", "old_b58_pubkey");
key_params!(SenderKeyParams, "sender_enc_pubkey", "sender_b58_pubkey");
key_params!(TargetKeyParams, "target_enc_pubkey", "target_b58_pubkey");
key_params!(SignerKeyParams, "signer_enc_pubkey", "signer_b58_pubkey");

/// Payload bytes plus how the node should protect them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PayloadParams {
    /// Already hex encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_method: Option<PayloadMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwd: Option<String>,
}

impl PayloadParams {
    pub fn text(text: &str, method: PayloadMethod) -> Self {
        Self {
            payload: Some(to_hex(text)),
            payload_method: Some(method),
            pwd: None,
        }
    }

    /// Password-encrypted text payload.
    pub fn with_password(text: &str, password: impl Into<String>) -> Self {
        Self {
            pwd: Some(password.into()),
            ..Self::text(text, PayloadMethod::Aes)
        }
    }
}

fn braced_guid<S: Serializer>(guid: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match guid {
        Some(g) => {
            let bare = g.trim_start_matches('{').trim_end_matches('}');
            serializer.serialize_str(&format!("{{{bare}}}"))
        }
        None => serializer.serialize_none(),
    }
}

fn comma_joined<S: Serializer>(accounts: &[u32], serializer: S) -> Result<S::Ok, S::Error> {
    let joined: Vec<String> = accounts.iter().map(u32::to_string).collect();
    serializer.serialize_str(&joined.join(","))
}

fn non_empty_guid(guid: &str) -> Option<String> {
    (!guid.is_empty()).then(|| guid.to_string())
}

/// `start` / `max` paging. `start = -1` includes pending operations where
/// the node supports it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl Page {
    pub fn new(start: i32, max: u32) -> Self {
        Self {
            start: Some(start),
            max: Some(max),
        }
    }
}

/// Filter for `getwalletaccounts` and `getwalletaccountscount`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WalletAccountsFilter {
    #[serde(flatten)]
    pub key: KeyParams,
    #[serde(flatten)]
    pub page: Page,
}

/// `getaccountoperations`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AccountOperationsQuery {
    pub account: u32,
    /// Blocks to search back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    #[serde(flatten)]
    pub page: Page,
}

impl AccountOperationsQuery {
    pub fn new(account: u32) -> Self {
        Self {
            account,
            ..Default::default()
        }
    }
}

/// `findaccounts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FindAccounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// When false, `name` matches as a substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_balance: Option<Pasc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_balance: Option<Pasc>,
    #[serde(flatten)]
    pub key: KeyParams,
}

/// `sendto`; flattened into `signsendto` by [`ColdSign`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SendTo {
    pub sender: u32,
    pub target: u32,
    pub amount: Pasc,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Pasc>,
    #[serde(flatten)]
    pub payload: PayloadParams,
}

impl SendTo {
    pub fn new(sender: u32, target: u32, amount: Pasc) -> Self {
        Self {
            sender,
            target,
            amount,
            ..Default::default()
        }
    }

    pub fn fee(mut self, fee: Pasc) -> Self {
        self.fee = Some(fee);
        self
    }

    pub fn payload(mut self, payload: PayloadParams) -> Self {
        self.payload = payload;
        self
    }
}

/// `senddata`; flattened into `signdata` by [`ColdSign`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SendData {
    pub sender: u32,
    pub target: u32,
    /// Account paying the fee, the sender when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer: Option<u32>,
    /// Sent wrapped in braces.
    #[serde(serialize_with = "braced_guid", skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_sequence: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Pasc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Pasc>,
    #[serde(flatten)]
    pub payload: PayloadParams,
}

impl SendData {
    pub fn new(sender: u32, target: u32) -> Self {
        Self {
            sender,
            target,
            ..Default::default()
        }
    }

    pub fn guid(mut self, guid: &str) -> Self {
        self.guid = non_empty_guid(guid);
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn payload(mut self, payload: PayloadParams) -> Self {
        self.payload = payload;
        self
    }
}

/// `finddataoperations`. Needs a sender or a target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FindDataOperations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    #[serde(serialize_with = "braced_guid", skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_sequence: Option<u32>,
    #[serde(flatten)]
    pub page: Page,
}

/// `changekey`; flattened into `signchangekey` by [`ColdSign`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChangeKey {
    pub account: u32,
    #[serde(flatten)]
    pub new_key: NewKeyParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Pasc>,
    #[serde(flatten)]
    pub payload: PayloadParams,
}

impl ChangeKey {
    pub fn new(account: u32, new_key: KeyRef) -> Self {
        Self {
            account,
            new_key: new_key.into(),
            ..Default::default()
        }
    }
}

/// `changekeys`: one key change per listed account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChangeKeys {
    /// Sent as a comma separated list.
    #[serde(serialize_with = "comma_joined")]
    pub accounts: Vec<u32>,
    #[serde(flatten)]
    pub new_key: NewKeyParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Pasc>,
    #[serde(flatten)]
    pub payload: PayloadParams,
}

impl ChangeKeys {
    pub fn new(accounts: impl IntoIterator<Item = u32>, new_key: KeyRef) -> Self {
        Self {
            accounts: accounts.into_iter().collect(),
            new_key: new_key.into(),
            ..Default::default()
        }
    }
}

/// `listaccountforsale`; flattened into `signlistaccountforsale`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListAccountForSale {
    pub account_target: u32,
    /// Receives the price when the account is bought.
    pub seller_account: u32,
    pub price: Pasc,
    pub account_signer: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Pasc>,
    /// Set for a private sale: only this key may buy.
    #[serde(flatten)]
    pub new_key: NewKeyParams,
    pub locked_until_block: u32,
    #[serde(flatten)]
    pub payload: PayloadParams,
}

impl ListAccountForSale {
    pub fn new(account_target: u32, seller_account: u32, price: Pasc, account_signer: u32) -> Self {
        Self {
            account_target,
            seller_account,
            price,
            account_signer,
            ..Default::default()
        }
    }
}

/// `delistaccountforsale`; flattened into `signdelistaccountforsale`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DelistAccountForSale {
    pub account_target: u32,
    pub account_signer: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Pasc>,
    #[serde(flatten)]
    pub payload: PayloadParams,
}

impl DelistAccountForSale {
    pub fn new(account_target: u32, account_signer: u32) -> Self {
        Self {
            account_target,
            account_signer,
            ..Default::default()
        }
    }
}

/// `buyaccount`; flattened into `signbuyaccount`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuyAccount {
    pub buyer_account: u32,
    pub account_to_purchase: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Pasc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_account: Option<u32>,
    #[serde(flatten)]
    pub new_key: NewKeyParams,
    /// Coins moved from the buyer; at least the price.
    pub amount: Pasc,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Pasc>,
    #[serde(flatten)]
    pub payload: PayloadParams,
}

impl BuyAccount {
    pub fn new(buyer_account: u32, account_to_purchase: u32, amount: Pasc) -> Self {
        Self {
            buyer_account,
            account_to_purchase,
            amount,
            ..Default::default()
        }
    }
}

/// `changeaccountinfo`; flattened into `signchangeaccountinfo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChangeAccountInfo {
    pub account_target: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_signer: Option<u32>,
    #[serde(flatten)]
    pub new_key: NewKeyParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_type: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Pasc>,
    #[serde(flatten)]
    pub payload: PayloadParams,
}

impl ChangeAccountInfo {
    pub fn new(account_target: u32) -> Self {
        Self {
            account_target,
            ..Default::default()
        }
    }
}

/// Public keys a cold wallet has to name because it cannot look them up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ColdKeys {
    #[serde(flatten)]
    pub sender: SenderKeyParams,
    #[serde(flatten)]
    pub target: TargetKeyParams,
    #[serde(flatten)]
    pub signer: SignerKeyParams,
    #[serde(flatten)]
    pub old: OldKeyParams,
}

/// An operation signed offline into a raw operations container.
///
/// The caller supplies the signer's last `n_operation` and public keys;
/// a node without chain state cannot look them up. `rawoperations`, when
/// set, is the container the signed operation gets appended to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ColdSign<P> {
    #[serde(flatten)]
    pub operation: P,
    pub last_n_operation: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rawoperations: Option<RawOperations>,
    #[serde(flatten)]
    pub keys: ColdKeys,
}

impl<P> ColdSign<P> {
    pub fn new(operation: P, last_n_operation: u32) -> Self {
        Self {
            operation,
            last_n_operation,
            rawoperations: None,
            keys: ColdKeys::default(),
        }
    }

    pub fn append_to(mut self, raw: RawOperations) -> Self {
        self.rawoperations = Some(raw);
        self
    }

    pub fn keys(mut self, keys: ColdKeys) -> Self {
        self.keys = keys;
        self
    }
}
