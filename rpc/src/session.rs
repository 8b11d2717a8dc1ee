//! Client-side tracking of one multi-operation through its signing cycle.
//!
//! ```text
//!   Empty ──add──▶ Composed ──sign──▶ Composed ──sign──▶ FullySigned ──execute──▶ Submitted
//!                     ▲                  │
//!                     └──add (discarding signatures)
//! ```
//!
//! Submitted is terminal. Once the node has accepted `executeoperations`
//! every further add, sign or execute is refused locally.
//!
//! The node owns the container. The session only keeps the latest snapshot
//! and refuses transitions that cannot succeed.

use pasc_operations::{
    AccountKeyPair, Changer, ColdWalletOperation, MultiOperation, MultiOperationState,
    RawOperations, Receiver, Sender,
};
use pasc_types::Transport;

use crate::client::PascClient;
use crate::envelope::Response;
use crate::error::ClientError;

pub struct MultiOperationSession<'c, T: Transport> {
    client: &'c PascClient<T>,
    snapshot: Option<MultiOperation>,
    submitted: bool,
}

impl<'c, T: Transport> MultiOperationSession<'c, T> {
    pub fn new(client: &'c PascClient<T>) -> Self {
        Self {
            client,
            snapshot: None,
            submitted: false,
        }
    }

    /// Continue from a container built elsewhere, e.g. passed between
    /// offline signers.
    pub fn resume(client: &'c PascClient<T>, snapshot: MultiOperation) -> Self {
        Self {
            client,
            snapshot: Some(snapshot),
            submitted: false,
        }
    }

    pub fn snapshot(&self) -> Option<&MultiOperation> {
        self.snapshot.as_ref()
    }

    pub fn state(&self) -> MultiOperationState {
        if self.submitted {
            return MultiOperationState::Submitted;
        }
        self.snapshot
            .as_ref()
            .map_or(MultiOperationState::Empty, MultiOperation::state)
    }

    fn ensure_open(&self) -> Result<(), ClientError> {
        if self.submitted {
            return Err(ClientError::AlreadySubmitted);
        }
        Ok(())
    }

    fn raw(&self) -> Option<&RawOperations> {
        self.snapshot.as_ref().map(|s| &s.rawoperations)
    }

    fn raw_or_nothing(&self) -> Result<RawOperations, ClientError> {
        match self.snapshot.as_ref() {
            Some(s) if !s.rawoperations.is_empty() => Ok(s.rawoperations.clone()),
            _ => Err(ClientError::NothingComposed),
        }
    }

    fn keep(&mut self, response: &Response<MultiOperation>) {
        if let Some(snapshot) = &response.result {
            self.snapshot = Some(snapshot.clone());
        }
    }

    /// Add parties. Refused once anyone has signed: a new party changes the
    /// digest and the existing signatures no longer cover it.
    pub async fn add_operation(
        &mut self,
        senders: &[Sender],
        receivers: &[Receiver],
        changers: &[Changer],
    ) -> Result<Response<MultiOperation>, ClientError> {
        self.ensure_open()?;
        if let Some(snapshot) = self.snapshot.as_ref().filter(|s| s.has_signatures()) {
            return Err(ClientError::AppendAfterSign {
                signed: snapshot.signed_count,
            });
        }
        self.append(senders, receivers, changers).await
    }

    /// Add parties even after signing. Every party has to sign again.
    pub async fn add_operation_discarding_signatures(
        &mut self,
        senders: &[Sender],
        receivers: &[Receiver],
        changers: &[Changer],
    ) -> Result<Response<MultiOperation>, ClientError> {
        self.ensure_open()?;
        if let Some(snapshot) = self.snapshot.as_ref().filter(|s| s.has_signatures()) {
            tracing::info!(
                signed = snapshot.signed_count,
                "appending to a signed multi-operation, signatures will be invalidated"
            );
        }
        self.append(senders, receivers, changers).await
    }

    async fn append(
        &mut self,
        senders: &[Sender],
        receivers: &[Receiver],
        changers: &[Changer],
    ) -> Result<Response<MultiOperation>, ClientError> {
        let raw = self.raw().filter(|r| !r.is_empty()).cloned();
        let response = self
            .client
            .multi_operation_add_operation(raw.as_ref(), senders, receivers, changers, None)
            .await?;
        self.keep(&response);
        Ok(response)
    }

    /// Sign with wallet keys using the node's chain state.
    pub async fn sign_online(&mut self) -> Result<Response<MultiOperation>, ClientError> {
        self.ensure_open()?;
        let raw = self.raw_or_nothing()?;
        let response = self.client.multi_operation_sign_online(&raw).await;
        self.keep(&response);
        Ok(response)
    }

    /// Sign for the given accounts without chain state.
    pub async fn sign_offline(
        &mut self,
        accounts_and_keys: &[AccountKeyPair],
    ) -> Result<Response<MultiOperation>, ClientError> {
        self.ensure_open()?;
        let raw = self.raw_or_nothing()?;
        let response = self
            .client
            .multi_operation_sign_offline(&raw, accounts_and_keys)
            .await;
        self.keep(&response);
        Ok(response)
    }

    /// Submit the container. Only a fully signed snapshot that passes
    /// `validate` is sent. After the node answers with a result the session
    /// is Submitted; a node error leaves it open for another attempt.
    pub async fn execute(
        &mut self,
    ) -> Result<Response<Vec<ColdWalletOperation>>, ClientError> {
        self.ensure_open()?;
        let snapshot = self.snapshot.as_ref().ok_or(ClientError::NothingComposed)?;
        if !snapshot.can_execute() {
            return Err(ClientError::NotExecutable {
                not_signed: snapshot.not_signed_count,
            });
        }
        snapshot.validate()?;
        tracing::info!(
            senders = snapshot.senders_count,
            receivers = snapshot.receivers_count,
            changers = snapshot.changesinfo_count,
            "executing multi-operation"
        );
        let response = self.client.execute_operations(&snapshot.rawoperations).await;
        if response.is_ok() {
            self.submitted = true;
        }
        Ok(response)
    }
}
