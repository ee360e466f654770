//! Wallet endpoints.

use arena_types::{
    ApiEnvelope, DepositRequest, Transaction, TransactionsPage, Wallet, WithdrawRequest,
};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `GET wallet`
    pub async fn wallet(&self) -> ApiResult<Wallet> {
        let envelope: ApiEnvelope<Wallet> = self.get("wallet", &[]).await?;
        Self::unwrap_data(envelope)
    }

    /// `GET wallet/transactions?per_page&type`
    pub async fn transactions(
        &self,
        per_page: u32,
        kind: Option<&str>,
    ) -> ApiResult<Vec<Transaction>> {
        let mut query = vec![("per_page", per_page.to_string())];
        if let Some(kind) = kind {
            query.push(("type", kind.to_string()));
        }
        let envelope: ApiEnvelope<TransactionsPage> =
            self.get("wallet/transactions", &query).await?;
        Self::unwrap_data(envelope).map(|page| page.transactions)
    }

    /// `POST wallet/deposit`
    pub async fn initiate_deposit(&self, request: &DepositRequest) -> ApiResult<String> {
        let envelope: ApiEnvelope<serde_json::Value> = self.post("wallet/deposit", request).await?;
        Self::unwrap_ack(envelope)
    }

    /// `POST wallet/withdraw`
    pub async fn request_withdraw(&self, request: &WithdrawRequest) -> ApiResult<String> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.post("wallet/withdraw", request).await?;
        Self::unwrap_ack(envelope)
    }

    /// `GET wallet/withdraw-requests`
    pub async fn withdraw_requests(&self) -> ApiResult<serde_json::Value> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.get("wallet/withdraw-requests", &[]).await?;
        Self::unwrap_data(envelope)
    }

    /// `DELETE wallet/withdraw-requests/{id}`
    pub async fn cancel_withdraw_request(&self, id: &str) -> ApiResult<String> {
        let envelope: ApiEnvelope<serde_json::Value> =
            self.delete(&format!("wallet/withdraw-requests/{id}")).await?;
        Self::unwrap_ack(envelope)
    }
}
