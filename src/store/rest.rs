use crate::config::RestBackendConfig;
use crate::error::{Error, Result};
use crate::models::{Lead, LeadPage, NewLead, NewLeadPage, PageDefinition, Plan, Session};
use crate::store::{LEAD_PAGES_TABLE, LEADS_TABLE, PageStore, SUBSCRIPTIONS_TABLE};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Serialize)]
struct LeadInsert<'a> {
    user_id: &'a str,

    #[serde(flatten)]
    lead: &'a NewLead,
}

#[derive(Debug, Deserialize)]
struct PlanRow {
    plan: String,
}

/// Store backed by a PostgREST-style table API
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: Url,
    api_key: String,
    access_token: Option<String>,
}

impl RestStore {
    pub fn new(config: &RestBackendConfig) -> Result<Self> {
        Self::with_builder(config, Client::builder())
    }

    /// Create the store from a caller-tuned client builder
    pub fn with_builder(config: &RestBackendConfig, builder: ClientBuilder) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.api_key)
                .map_err(|e| Error::Config(format!("invalid api key: {}", e)))?,
        );
        headers.insert(
            "x-client-info",
            HeaderValue::from_str(&config.client_info)
                .map_err(|e| Error::Config(format!("invalid client info: {}", e)))?,
        );

        let client = builder.default_headers(headers).build()?;

        let mut base_url = config.url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
            access_token: config.access_token.clone(),
        })
    }

    /// Endpoint of a table
    pub fn table_url(&self, table: &str) -> Result<Url> {
        Ok(self.base_url.join(&format!("rest/v1/{}", table))?)
    }

    /// Query selecting all rows of a table owned by a user, newest first
    pub fn owned_rows_url(&self, table: &str, user_id: &str, limit: Option<usize>) -> Result<Url> {
        let mut url = self.table_url(table)?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("select", "*")
                .append_pair("user_id", &format!("eq.{}", user_id))
                .append_pair("order", "created_at.desc");
            if let Some(limit) = limit {
                query.append_pair("limit", &limit.to_string());
            }
        }
        Ok(url)
    }

    /// Query for the plan of the user's active subscription
    pub fn active_plan_url(&self, user_id: &str) -> Result<Url> {
        let mut url = self.table_url(SUBSCRIPTIONS_TABLE)?;
        url.query_pairs_mut()
            .append_pair("select", "plan")
            .append_pair("user_id", &format!("eq.{}", user_id))
            .append_pair("status", "eq.active");
        Ok(url)
    }

    /// Bearer token for a request: the user's token, else the configured one, else the API key
    fn bearer<'a>(&'a self, session: &'a Session) -> &'a str {
        session
            .access_token
            .as_deref()
            .or(self.access_token.as_deref())
            .unwrap_or(self.api_key.as_str())
    }

    fn authorized(&self, request: RequestBuilder, session: &Session) -> RequestBuilder {
        request.bearer_auth(self.bearer(session))
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, session: &Session, url: Url) -> Result<Vec<T>> {
        ::log::debug!("GET {}", url);
        let response = self
            .authorized(self.client.get(url), session)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn insert_row<B: Serialize, T: DeserializeOwned>(
        &self,
        session: &Session,
        table: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.table_url(table)?;
        ::log::debug!("POST {}", url);
        let response = self
            .authorized(self.client.post(url), session)
            .header("Prefer", "return=representation")
            .json(&[body])
            .send()
            .await?;
        let response = check_status(response).await?;
        let mut rows: Vec<T> = response.json().await?;
        if rows.is_empty() {
            return Err(Error::NotFound(format!("inserted row in {}", table)));
        }
        Ok(rows.swap_remove(0))
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            ::log::warn!("Failed to read error body of {} response: {}", status, e);
            String::new()
        }
    };
    ::log::error!("Backend returned {}: {}", status, message);
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

impl PageStore for RestStore {
    async fn insert_page(&self, session: &Session, page: PageDefinition) -> Result<LeadPage> {
        let body = NewLeadPage {
            user_id: &session.user_id,
            page: &page,
        };
        match self
            .insert_row::<_, LeadPage>(session, LEAD_PAGES_TABLE, &body)
            .await
        {
            Err(Error::Api { status, .. }) if status == StatusCode::CONFLICT.as_u16() => {
                Err(Error::DuplicateSlug(page.slug))
            }
            other => other,
        }
    }

    async fn list_pages(&self, session: &Session) -> Result<Vec<LeadPage>> {
        let url = self.owned_rows_url(LEAD_PAGES_TABLE, &session.user_id, None)?;
        self.fetch_rows(session, url).await
    }

    async fn insert_lead(&self, session: &Session, lead: NewLead) -> Result<Lead> {
        let body = LeadInsert {
            user_id: &session.user_id,
            lead: &lead,
        };
        self.insert_row(session, LEADS_TABLE, &body).await
    }

    async fn recent_leads(&self, session: &Session, limit: usize) -> Result<Vec<Lead>> {
        let url = self.owned_rows_url(LEADS_TABLE, &session.user_id, Some(limit))?;
        self.fetch_rows(session, url).await
    }

    async fn active_plan(&self, session: &Session) -> Result<Plan> {
        let url = self.active_plan_url(&session.user_id)?;
        let rows: Vec<PlanRow> = self.fetch_rows(session, url).await?;
        Ok(rows
            .first()
            .map(|row| Plan::from_name(&row.plan))
            .unwrap_or_default())
    }
}
