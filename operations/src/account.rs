//! Account and block objects as returned by the node.

use pasc_types::{AccountState, Pasc, Timestamp};
use serde::{Deserialize, Serialize};

/// A PascalCoin account.
///
/// Sale fields are only meaningful while the account is for sale; the
/// client reads them as optional and never rejects an account whose state
/// and sale fields disagree (see [`Account::sale_listing`]).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account: u32,
    pub enc_pubkey: String,
    pub balance: Pasc,
    pub n_operation: u32,
    pub updated_b: u32,
    #[serde(default)]
    pub updated_b_active_mode: u32,
    #[serde(default)]
    pub updated_b_passive_mode: u32,
    #[serde(default)]
    pub state: AccountState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_until_block: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Pasc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_account: Option<u32>,
    #[serde(default)]
    pub private_sale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_enc_pubkey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed_secret: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub account_type: u16,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub seal: String,
}

/// The sale terms of a listed account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaleListing {
    pub seller_account: u32,
    pub price: Pasc,
    pub locked_until_block: u32,
    /// Set for private sales: only this key may buy.
    pub new_enc_pubkey: Option<String>,
}

impl Account {
    /// Sale terms, present only when the state says "for sale" and both
    /// seller and price were sent.
    pub fn sale_listing(&self) -> Option<SaleListing> {
        if !self.state.is_for_sale() {
            return None;
        }
        Some(SaleListing {
            seller_account: self.seller_account?,
            price: self.price?,
            locked_until_block: self.locked_until_block.unwrap_or(0),
            new_enc_pubkey: self
                .new_enc_pubkey
                .clone()
                .filter(|k| !k.trim_start_matches('0').is_empty()),
        })
    }

    /// True when the state and the sale fields agree: seller and price are
    /// set if and only if the account is for sale.
    pub fn listing_is_consistent(&self) -> bool {
        let has_terms = self.seller_account.is_some() && self.price.is_some();
        self.state.is_for_sale() == has_terms
    }
}

/// A block header plus summary, from `getblock` / `getblocks`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub block: u32,
    pub enc_pubkey: String,
    pub reward: Pasc,
    pub fee: Pasc,
    pub ver: u16,
    pub ver_a: u16,
    pub timestamp: Timestamp,
    pub target: u64,
    pub nonce: u64,
    pub payload: String,
    pub sbh: String,
    pub oph: String,
    pub pow: String,
    #[serde(default)]
    pub hashratekhs: u64,
    #[serde(default)]
    pub maturation: u32,
    pub operations: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT_296: &str = r#"{"account":296,"enc_pubkey":"CA022000662084946291B2620108EBD6A0653B742E3673529751FF6BB565D9F47D920ADA200005CDF25090FFFA9A72181D13E457C7CF061CCAF4D4618EBCF9EA1D124E39EDCB","balance":1500,"balance_s":"1500.0000","n_operation":2,"updated_b":8714,"updated_b_active_mode":8714,"updated_b_passive_mode":8069,"state":"normal","name":"test","type":0,"data":"","seal":"F58A811034633B916BF45AD3F3340090475650A9"}"#;

    #[test]
    fn parses_normal_account() {
        let a: Account = serde_json::from_str(ACCOUNT_296).unwrap();
        assert_eq!(a.account, 296);
        assert_eq!(a.balance, Pasc::from_pasc(1500));
        assert_eq!(a.n_operation, 2);
        assert_eq!(a.updated_b_passive_mode, 8069);
        assert_eq!(a.state, AccountState::Normal);
        assert_eq!(a.name, "test");
        assert_eq!(a.seal, "F58A811034633B916BF45AD3F3340090475650A9");
        assert_eq!(a.locked_until_block, None);
        assert_eq!(a.price, None);
        assert!(!a.private_sale);
        assert!(a.sale_listing().is_none());
        assert!(a.listing_is_consistent());
    }

    #[test]
    fn parses_listed_account() {
        let json = r#"{"account":32320,"enc_pubkey":"CA02","balance":0.1,"n_operation":3,"updated_b":100,"state":"listed","locked_until_block":0,"price":0.1,"seller_account":296,"private_sale":false,"new_enc_pubkey":"000000000000","name":"","type":0}"#;
        let a: Account = serde_json::from_str(json).unwrap();
        let listing = a.sale_listing().unwrap();
        assert_eq!(listing.seller_account, 296);
        assert_eq!(listing.price.molinas(), 1_000);
        assert_eq!(listing.locked_until_block, 0);
        assert_eq!(listing.new_enc_pubkey, None);
        assert!(a.listing_is_consistent());
    }

    #[test]
    fn inconsistent_listing_is_reported_not_rejected() {
        let json = r#"{"account":1,"enc_pubkey":"","balance":0,"n_operation":0,"updated_b":0,"state":"listed"}"#;
        let a: Account = serde_json::from_str(json).unwrap();
        assert!(a.sale_listing().is_none());
        assert!(!a.listing_is_consistent());
    }

    #[test]
    fn parses_block() {
        let json = r#"{"block":9781,"enc_pubkey":"CA02","reward":100.0000,"reward_s":"100.0000","fee":0.0000,"fee_s":"0.0000","ver":5,"ver_a":5,"timestamp":1615490160,"target":276415760,"nonce":3868460252,"payload":"New Node","sbh":"18","oph":"FD","pow":"0000","hashratekhs":4,"maturation":66,"operations":1}"#;
        let b: Block = serde_json::from_str(json).unwrap();
        assert_eq!(b.block, 9781);
        assert_eq!(b.reward, Pasc::from_pasc(100));
        assert_eq!(b.nonce, 3868460252);
        assert_eq!(b.timestamp.as_secs(), 1615490160);
        assert_eq!(b.operations, 1);
    }
}
