pub mod memory;
pub mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use crate::error::Result;
use crate::models::{Lead, LeadPage, NewLead, PageDefinition, Plan, Session};

/// Table holding lead pages
pub const LEAD_PAGES_TABLE: &str = "lead_pages";
/// Table holding captured leads
pub const LEADS_TABLE: &str = "leads";
/// Table holding subscriptions
pub const SUBSCRIPTIONS_TABLE: &str = "subscriptions";

/// Record store behind the dashboard and the page-creation flow
///
/// Every call is scoped to the user of the given session.
#[allow(async_fn_in_trait)]
pub trait PageStore {
    /// Persist a page definition and return the stored record
    async fn insert_page(&self, session: &Session, page: PageDefinition) -> Result<LeadPage>;

    /// All pages of the user, newest first
    async fn list_pages(&self, session: &Session) -> Result<Vec<LeadPage>>;

    /// Record a captured lead
    async fn insert_lead(&self, session: &Session, lead: NewLead) -> Result<Lead>;

    /// Most recent leads of the user, newest first
    async fn recent_leads(&self, session: &Session, limit: usize) -> Result<Vec<Lead>>;

    /// Plan of the user's active subscription, free if there is none
    async fn active_plan(&self, session: &Session) -> Result<Plan>;
}
