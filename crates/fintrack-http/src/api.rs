//! Typed operations on the finance API.

use tracing::{debug, info, instrument};

use fintrack_core::{
    Credentials, Insights, NewTransaction, NewUser, Result, TokenPair, Transaction, User,
};

use crate::client::ApiClient;
use crate::endpoints::{
    INSIGHTS, LOGIN, LoginRequest, LoginResponse, REGISTER, TRANSACTIONS, transaction_path,
};

/// The finance API: authentication, transactions, and insights.
///
/// Every call goes through the wrapped [`ApiClient`] and its pipeline, so
/// an expired access token is refreshed transparently.
///
/// # Example
///
/// ```no_run
/// use fintrack_core::{Amount, ApiUrl, NewTransaction, TransactionType};
/// use fintrack_http::{ApiClient, FinanceApi};
///
/// # async fn example() -> Result<(), fintrack_core::Error> {
/// let api = FinanceApi::new(ApiClient::new(ApiUrl::default())?);
/// let created = api
///     .create_transaction(&NewTransaction {
///         amount: Amount::new("12.50")?,
///         kind: TransactionType::Expense,
///         category: "Food".into(),
///         description: None,
///         date: None,
///     })
///     .await?;
/// println!("created #{}", created.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FinanceApi {
    client: ApiClient,
}

impl FinanceApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Log in and store the issued access/refresh pair.
    ///
    /// Returns the user profile when the server includes it.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Option<User>> {
        info!("Logging in");

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        let response: LoginResponse = self.client.post(LOGIN, &request).await?.json()?;

        self.client
            .credentials()
            .save_pair(&TokenPair::new(response.access, response.refresh))
            .await?;

        debug!("Credentials stored");
        Ok(response.user)
    }

    /// Create a new account. Does not log in.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn register(&self, user: &NewUser) -> Result<User> {
        info!("Registering account");
        self.client.post(REGISTER, user).await?.json()
    }

    /// Delete both stored tokens. No request is made.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        info!("Logging out");
        self.client.credentials().clear().await
    }

    /// True when an access token is stored.
    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.client.credentials().access_token().await?.is_some())
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// List the user's transactions, newest first.
    #[instrument(skip(self))]
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        debug!("Listing transactions");
        self.client.get(TRANSACTIONS).await?.json()
    }

    #[instrument(skip(self))]
    pub async fn get_transaction(&self, id: u64) -> Result<Transaction> {
        debug!("Getting transaction");
        self.client.get(&transaction_path(id)).await?.json()
    }

    #[instrument(skip(self, transaction), fields(kind = %transaction.kind, category = %transaction.category))]
    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction> {
        debug!("Creating transaction");
        self.client.post(TRANSACTIONS, transaction).await?.json()
    }

    /// Replace every editable field of a transaction.
    #[instrument(skip(self, transaction))]
    pub async fn update_transaction(
        &self,
        id: u64,
        transaction: &NewTransaction,
    ) -> Result<Transaction> {
        debug!("Updating transaction");
        self.client
            .put(&transaction_path(id), transaction)
            .await?
            .json()
    }

    #[instrument(skip(self))]
    pub async fn delete_transaction(&self, id: u64) -> Result<()> {
        debug!("Deleting transaction");
        self.client.delete(&transaction_path(id)).await?;
        Ok(())
    }

    // ========================================================================
    // Insights
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn insights(&self) -> Result<Insights> {
        debug!("Fetching insights");
        self.client.get(INSIGHTS).await?.json()
    }
}
