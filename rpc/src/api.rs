//! Typed wrappers for every node method.
//!
//! Each method returns the node's [`Response`] untouched apart from result
//! typing. The few methods that can fail locally before any network call
//! return `Result<Response<_>, ClientError>` instead.

use pasc_operations::{
    Account, AccountKeyPair, Block, Changer, ColdWalletOperation, ConnectionInfo,
    DecryptedPayload, EPasa, MessageSignature, MultiOperation, NodeStatus, Operation,
    PublicKey, RawOperation, RawOperations, Receiver, Sender, WalletPublicKey,
};
use pasc_types::{
    to_hex, CurveId, KeyRef, Pasc, PayloadEncode, PayloadMethod, PubKeyPayloadMethod, Transport,
};
use serde::Serialize;
use serde_json::json;

use crate::client::PascClient;
use crate::envelope::Response;
use crate::error::ClientError;
use crate::params::{
    AccountOperationsQuery, BuyAccount, ChangeAccountInfo, ChangeKey, ChangeKeys, ColdSign,
    DelistAccountForSale, FindAccounts, FindDataOperations, KeyParams, ListAccountForSale, Page,
    SendData, SendTo, WalletAccountsFilter,
};

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

#[derive(Serialize)]
struct MultiOperationAdd<'a> {
    #[serde(skip_serializing_if = "is_empty")]
    senders: &'a [Sender],
    #[serde(skip_serializing_if = "is_empty")]
    receivers: &'a [Receiver],
    #[serde(skip_serializing_if = "is_empty")]
    changers: &'a [Changer],
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_n_operation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rawoperations: Option<&'a RawOperations>,
}

#[derive(Serialize)]
struct SignedMessage<'a> {
    digest: String,
    #[serde(flatten)]
    key: KeyParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    signature: Option<&'a str>,
}

#[derive(Serialize)]
struct PayloadEncrypt {
    payload: String,
    payload_method: PubKeyPayloadMethod,
    #[serde(flatten)]
    key: KeyParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pwd: Option<String>,
}

#[derive(Serialize)]
struct PayloadDecrypt<'a> {
    payload: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    pwds: &'a [&'a str],
}

#[derive(Serialize)]
struct ValidateEPasa {
    account: String,
    payload_method: PayloadMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pwd: Option<String>,
    payload_encode: PayloadEncode,
    payload: String,
}

fn observe_snapshot(method: &str, response: &Response<MultiOperation>) {
    if let Some(snapshot) = &response.result {
        if let Err(e) = snapshot.validate() {
            tracing::warn!(method, id = response.id, error = %e, "node returned inconsistent multi-operation");
        }
    }
}

impl<T: Transport> PascClient<T> {
    // ── Node and wallet ────────────────────────────────────────────────

    /// Connect to the given `ip:port;ip:port` list. Returns how many were added.
    pub async fn add_node(&self, nodes: &str) -> Response<u32> {
        self.invoke("addnode", json!({ "nodes": nodes })).await
    }

    pub async fn node_status(&self) -> Response<NodeStatus> {
        self.invoke("nodestatus", ()).await
    }

    pub async fn get_connections(&self) -> Response<Vec<ConnectionInfo>> {
        self.invoke("getconnections", ()).await
    }

    pub async fn lock(&self) -> Response<bool> {
        self.invoke("lock", ()).await
    }

    pub async fn unlock(&self, pwd: &str) -> Response<bool> {
        self.invoke("unlock", json!({ "pwd": pwd })).await
    }

    pub async fn set_wallet_password(&self, pwd: &str) -> Response<bool> {
        self.invoke("setwalletpassword", json!({ "pwd": pwd })).await
    }

    pub async fn stop_node(&self) -> Response<bool> {
        self.invoke("stopnode", ()).await
    }

    pub async fn start_node(&self) -> Response<bool> {
        self.invoke("startnode", ()).await
    }

    /// Create a key in the node's wallet.
    pub async fn add_new_key(&self, curve: CurveId, name: &str) -> Response<PublicKey> {
        self.invoke("addnewkey", json!({ "ec_nid": curve, "name": name })).await
    }

    // ── Accounts ───────────────────────────────────────────────────────

    pub async fn get_account(&self, account: u32) -> Response<Account> {
        self.invoke("getaccount", json!({ "account": account })).await
    }

    pub async fn get_wallet_accounts(&self, filter: &WalletAccountsFilter) -> Response<Vec<Account>> {
        self.invoke("getwalletaccounts", filter).await
    }

    pub async fn get_wallet_accounts_count(&self, filter: &WalletAccountsFilter) -> Response<u32> {
        self.invoke("getwalletaccountscount", filter).await
    }

    pub async fn get_wallet_pub_keys(&self, page: Page) -> Response<Vec<WalletPublicKey>> {
        self.invoke("getwalletpubkeys", page).await
    }

    pub async fn get_wallet_pub_key(&self, key: KeyRef) -> Response<PublicKey> {
        self.invoke("getwalletpubkey", KeyParams::from(key)).await
    }

    /// Total balance of the wallet, or of one of its keys.
    pub async fn get_wallet_coins(&self, key: Option<KeyRef>) -> Response<Pasc> {
        self.invoke("getwalletcoins", KeyParams::from(key)).await
    }

    pub async fn find_accounts(&self, query: &FindAccounts) -> Response<Vec<Account>> {
        self.invoke("findaccounts", query).await
    }

    // ── Blocks ─────────────────────────────────────────────────────────

    pub async fn get_block(&self, block: u32) -> Response<Block> {
        self.invoke("getblock", json!({ "block": block })).await
    }

    /// The last `last` blocks.
    pub async fn get_last_blocks(&self, last: u32) -> Response<Vec<Block>> {
        self.invoke("getblocks", json!({ "last": last })).await
    }

    /// Blocks `start..=end`.
    pub async fn get_blocks(&self, start: u32, end: u32) -> Response<Vec<Block>> {
        self.invoke("getblocks", json!({ "start": start, "end": end })).await
    }

    pub async fn get_block_count(&self) -> Response<u32> {
        self.invoke("getblockcount", ()).await
    }

    pub async fn get_block_operation(&self, block: u32, opblock: u32) -> Response<Operation> {
        self.invoke("getblockoperation", json!({ "block": block, "opblock": opblock }))
            .await
    }

    pub async fn get_block_operations(&self, block: u32, page: Page) -> Response<Vec<Operation>> {
        #[derive(Serialize)]
        struct Params {
            block: u32,
            #[serde(flatten)]
            page: Page,
        }
        self.invoke("getblockoperations", Params { block, page }).await
    }

    // ── Operations ─────────────────────────────────────────────────────

    pub async fn get_account_operations(
        &self,
        query: &AccountOperationsQuery,
    ) -> Response<Vec<Operation>> {
        self.invoke("getaccountoperations", query).await
    }

    pub async fn get_pendings(&self, page: Page) -> Response<Vec<Operation>> {
        self.invoke("getpendings", page).await
    }

    pub async fn get_pendings_count(&self) -> Response<u32> {
        self.invoke("getpendingscount", ()).await
    }

    pub async fn find_operation(&self, ophash: &str) -> Response<Operation> {
        self.invoke("findoperation", json!({ "ophash": ophash })).await
    }

    pub async fn find_data_operations(
        &self,
        query: &FindDataOperations,
    ) -> Response<Vec<Operation>> {
        self.invoke("finddataoperations", query).await
    }

    // ── Online operations ──────────────────────────────────────────────

    pub async fn send_to(&self, params: &SendTo) -> Response<Operation> {
        self.invoke("sendto", params).await
    }

    pub async fn send_data(&self, params: &SendData) -> Response<Operation> {
        self.invoke("senddata", params).await
    }

    pub async fn change_key(&self, params: &ChangeKey) -> Response<Operation> {
        self.invoke("changekey", params).await
    }

    pub async fn change_keys(&self, params: &ChangeKeys) -> Response<Vec<Operation>> {
        self.invoke("changekeys", params).await
    }

    pub async fn list_account_for_sale(&self, params: &ListAccountForSale) -> Response<Operation> {
        self.invoke("listaccountforsale", params).await
    }

    pub async fn delist_account_for_sale(
        &self,
        params: &DelistAccountForSale,
    ) -> Response<Operation> {
        self.invoke("delistaccountforsale", params).await
    }

    pub async fn buy_account(&self, params: &BuyAccount) -> Response<Operation> {
        self.invoke("buyaccount", params).await
    }

    pub async fn change_account_info(&self, params: &ChangeAccountInfo) -> Response<Operation> {
        self.invoke("changeaccountinfo", params).await
    }

    // ── Cold wallet signing ────────────────────────────────────────────

    pub async fn sign_send_to(&self, params: &ColdSign<SendTo>) -> Response<RawOperation> {
        self.invoke("signsendto", params).await
    }

    pub async fn sign_data(&self, params: &ColdSign<SendData>) -> Response<RawOperation> {
        self.invoke("signdata", params).await
    }

    pub async fn sign_change_key(&self, params: &ColdSign<ChangeKey>) -> Response<RawOperation> {
        self.invoke("signchangekey", params).await
    }

    pub async fn sign_list_account_for_sale(
        &self,
        params: &ColdSign<ListAccountForSale>,
    ) -> Response<RawOperation> {
        self.invoke("signlistaccountforsale", params).await
    }

    pub async fn sign_delist_account_for_sale(
        &self,
        params: &ColdSign<DelistAccountForSale>,
    ) -> Response<RawOperation> {
        self.invoke("signdelistaccountforsale", params).await
    }

    pub async fn sign_buy_account(&self, params: &ColdSign<BuyAccount>) -> Response<RawOperation> {
        self.invoke("signbuyaccount", params).await
    }

    pub async fn sign_change_account_info(
        &self,
        params: &ColdSign<ChangeAccountInfo>,
    ) -> Response<RawOperation> {
        self.invoke("signchangeaccountinfo", params).await
    }

    /// Describe the operations in a raw container without executing them.
    pub async fn operations_info(&self, raw: &RawOperations) -> Response<Vec<Operation>> {
        self.invoke("operationsinfo", json!({ "rawoperations": raw })).await
    }

    /// Submit a raw container. Each entry succeeds or fails on its own.
    pub async fn execute_operations(
        &self,
        raw: &RawOperations,
    ) -> Response<Vec<ColdWalletOperation>> {
        self.invoke("executeoperations", json!({ "rawoperations": raw })).await
    }

    /// Remove the operation at `index` from a raw container.
    ///
    /// Checked locally against the container's count header first.
    pub async fn operations_delete(
        &self,
        raw: &RawOperations,
        index: u32,
    ) -> Result<Response<RawOperation>, ClientError> {
        let count = raw.operations_count()?;
        if index >= count {
            return Err(ClientError::IndexOutOfRange { index, count });
        }
        Ok(self
            .invoke("operationsdelete", json!({ "rawoperations": raw, "index": index }))
            .await)
    }

    // ── Multi-operations ───────────────────────────────────────────────

    /// Add parties to the multi-operation in `raw`, or start a new one.
    ///
    /// Appending to a container that already carries signatures changes the
    /// digest; whatever the node does with the old signatures, they no
    /// longer cover the content. [`crate::MultiOperationSession`] refuses
    /// that case unless asked explicitly.
    pub async fn multi_operation_add_operation(
        &self,
        raw: Option<&RawOperations>,
        senders: &[Sender],
        receivers: &[Receiver],
        changers: &[Changer],
        auto_n_operation: Option<bool>,
    ) -> Result<Response<MultiOperation>, ClientError> {
        for sender in senders {
            sender.validate()?;
        }
        for receiver in receivers {
            receiver.validate()?;
        }
        for changer in changers {
            changer.validate()?;
        }
        let params = MultiOperationAdd {
            senders,
            receivers,
            changers,
            auto_n_operation,
            rawoperations: raw,
        };
        let response = self.invoke("multioperationaddoperation", params).await;
        observe_snapshot("multioperationaddoperation", &response);
        Ok(response)
    }

    /// Sign with wallet keys for the given accounts. Works without chain
    /// state: every signer's `n_operation` must already be in `raw`.
    pub async fn multi_operation_sign_offline(
        &self,
        raw: &RawOperations,
        accounts_and_keys: &[AccountKeyPair],
    ) -> Response<MultiOperation> {
        let response = self
            .invoke(
                "multioperationsignoffline",
                json!({ "rawoperations": raw, "accounts_and_keys": accounts_and_keys }),
            )
            .await;
        observe_snapshot("multioperationsignoffline", &response);
        response
    }

    /// Sign with whatever wallet keys the node holds, using its chain state.
    pub async fn multi_operation_sign_online(&self, raw: &RawOperations) -> Response<MultiOperation> {
        let response = self
            .invoke("multioperationsignonline", json!({ "rawoperations": raw }))
            .await;
        observe_snapshot("multioperationsignonline", &response);
        response
    }

    // ── Keys and payloads ──────────────────────────────────────────────

    pub async fn encode_pub_key(&self, curve: CurveId, x: &str, y: &str) -> Response<String> {
        self.invoke("encodepubkey", json!({ "ec_nid": curve, "x": x, "y": y }))
            .await
    }

    pub async fn decode_pub_key(&self, key: KeyRef) -> Response<PublicKey> {
        self.invoke("decodepubkey", KeyParams::from(key)).await
    }

    /// Encrypt `text` without creating an operation. Returns the payload hex.
    pub async fn payload_encrypt(
        &self,
        text: &str,
        method: PubKeyPayloadMethod,
        key: Option<KeyRef>,
        pwd: Option<&str>,
    ) -> Response<String> {
        let params = PayloadEncrypt {
            payload: to_hex(text),
            payload_method: method,
            key: key.into(),
            pwd: pwd.map(str::to_string),
        };
        self.invoke("payloadencrypt", params).await
    }

    /// Try the wallet keys and the given passwords on an encrypted payload.
    pub async fn payload_decrypt(&self, payload_hex: &str, pwds: &[&str]) -> Response<DecryptedPayload> {
        let params = PayloadDecrypt {
            payload: payload_hex,
            pwds,
        };
        self.invoke("payloaddecrypt", params).await
    }

    // ── Message signing ────────────────────────────────────────────────

    /// Sign `message` (sent hex encoded) with a wallet key.
    pub async fn sign_message(&self, message: &str, key: KeyRef) -> Response<MessageSignature> {
        let params = SignedMessage {
            digest: to_hex(message),
            key: key.into(),
            signature: None,
        };
        self.invoke("signmessage", params).await
    }

    /// Verify a message signature.
    ///
    /// The node answers `verifysign` with the signature it checked; the
    /// result is true only when signature, digest and public key all match
    /// what was asked. A Base58 key is first resolved with `decodepubkey`,
    /// whose error is returned as is.
    pub async fn verify_signed_message(
        &self,
        message: &str,
        signature: &str,
        key: KeyRef,
    ) -> Response<bool> {
        let digest = to_hex(message);
        let params = SignedMessage {
            digest: digest.clone(),
            key: key.clone().into(),
            signature: Some(signature),
        };
        let verified: Response<MessageSignature> = self.invoke("verifysign", params).await;
        if verified.error.is_some() {
            return verified.map(|_| false);
        }

        let encoded_key = match &key {
            KeyRef::Encoded(enc) => enc.clone(),
            KeyRef::Base58(_) => {
                let decoded = self.decode_pub_key(key).await;
                match decoded.as_result() {
                    Ok(public_key) => public_key.enc_pubkey.clone(),
                    Err(_) => return decoded.map(|_| false),
                }
            }
        };

        verified.map(|info| {
            info.signature.eq_ignore_ascii_case(signature)
                && info.digest.eq_ignore_ascii_case(&digest)
                && info.enc_pubkey.eq_ignore_ascii_case(&encoded_key)
        })
    }

    // ── E-PASA ─────────────────────────────────────────────────────────

    pub async fn check_epasa(&self, account_epasa: &str) -> Response<EPasa> {
        self.invoke("checkepasa", json!({ "account_epasa": account_epasa }))
            .await
    }

    /// Build an E-PASA for `account` (number or name) carrying `payload`.
    pub async fn validate_epasa(
        &self,
        account: &str,
        payload: &str,
        encode: PayloadEncode,
        method: PayloadMethod,
        pwd: Option<&str>,
    ) -> Response<EPasa> {
        let params = ValidateEPasa {
            account: account.to_string(),
            payload_method: method,
            pwd: pwd.map(str::to_string),
            payload_encode: encode,
            payload: to_hex(payload),
        };
        self.invoke("validateepasa", params).await
    }
}
