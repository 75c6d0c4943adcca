use crate::config::AppConfig;
use crate::error::Result;
use crate::generator::{
    MagicPageGenerator, Pick, WizardSelection, blank_page, from_wizard, generate_share_message,
};
use crate::models::{Lead, LeadPage, PageDefinition, Plan, PlanLimits, Session};
use crate::store::PageStore;
use chrono::Utc;
use serde::Serialize;
use url::Url;

/// Number of leads shown on the dashboard
pub const RECENT_LEADS_LIMIT: usize = 10;

/// Everything the dashboard shows for one user
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub pages: Vec<LeadPage>,
    pub recent_leads: Vec<Lead>,
    pub plan: Plan,
    pub limits: PlanLimits,
}

impl DashboardSummary {
    pub fn published_count(&self) -> usize {
        self.pages.iter().filter(|page| page.published).count()
    }

    pub fn total_views(&self) -> i64 {
        self.pages.iter().map(|page| page.views).sum()
    }

    /// Whether the plan allows another page
    pub fn can_create_page(&self) -> bool {
        self.limits.pages.is_none_or(|max| self.pages.len() < max)
    }
}

/// Page-creation flow and dashboard reads on top of a store
pub struct LeadPages<S> {
    store: S,
    generator: MagicPageGenerator,
    site_url: Url,
}

impl<S: PageStore> LeadPages<S> {
    /// Create the flow with default generator tables and site URL
    pub fn new(store: S) -> Self {
        Self {
            store,
            generator: MagicPageGenerator::default(),
            site_url: AppConfig::default().site_url,
        }
    }

    /// Use a generator with custom lookup tables
    pub fn with_generator(mut self, generator: MagicPageGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Set the public site pages are served under
    pub fn with_site_url(mut self, mut site_url: Url) -> Self {
        if !site_url.path().ends_with('/') {
            let path = format!("{}/", site_url.path());
            site_url.set_path(&path);
        }
        self.site_url = site_url;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn generator(&self) -> &MagicPageGenerator {
        &self.generator
    }

    /// Generate a page from the session's email and store it
    pub async fn create_magic_page(&self, session: &Session) -> Result<LeadPage> {
        // The thread RNG is not Send, so it is dropped before the insert is awaited
        let page = self.generator.generate_magic_page(&session.email);
        self.store_page(session, page).await
    }

    /// Store a page already built for the session
    pub async fn store_page(&self, session: &Session, page: PageDefinition) -> Result<LeadPage> {
        ::log::info!("Creating page '{}' for {}", page.title, session.email);
        self.store.insert_page(session, page).await
    }

    /// Store the draft built by the quick-start wizard
    pub async fn create_from_wizard(
        &self,
        session: &Session,
        selection: &WizardSelection,
    ) -> Result<LeadPage> {
        let page = from_wizard(selection, Utc::now());
        ::log::info!(
            "Creating wizard page '{}' for {}: {}",
            page.title,
            session.email,
            selection.describe()
        );
        self.store.insert_page(session, page).await
    }

    /// Store an empty draft page
    pub async fn create_blank_page(&self, session: &Session) -> Result<LeadPage> {
        let page = blank_page(Utc::now());
        ::log::info!("Creating blank page {} for {}", page.slug, session.email);
        self.store.insert_page(session, page).await
    }

    /// Public URL of a page
    pub fn page_url(&self, page: &LeadPage) -> Result<Url> {
        Ok(self.site_url.join(&format!("p/{}", page.slug))?)
    }

    /// Share text pointing at the page
    pub fn share_message<P: Pick + ?Sized>(
        &self,
        page: &LeadPage,
        picker: &mut P,
    ) -> Result<String> {
        let url = self.page_url(page)?;
        Ok(generate_share_message(&page.title, url.as_str(), picker))
    }

    /// Pages, recent leads and plan of the session's user
    pub async fn dashboard(&self, session: &Session) -> Result<DashboardSummary> {
        let pages = self.store.list_pages(session).await?;
        let recent_leads = self.store.recent_leads(session, RECENT_LEADS_LIMIT).await?;
        let plan = self.store.active_plan(session).await?;

        ::log::debug!(
            "Dashboard for {}: {} pages, {} recent leads, plan {:?}",
            session.user_id,
            pages.len(),
            recent_leads.len(),
            plan
        );

        Ok(DashboardSummary {
            pages,
            recent_leads,
            limits: plan.limits(),
            plan,
        })
    }
}
