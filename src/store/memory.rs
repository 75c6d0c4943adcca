use crate::error::{Error, Result};
use crate::models::{Lead, LeadPage, NewLead, PageDefinition, Plan, Session};
use crate::store::PageStore;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Default)]
struct MemoryState {
    pages: Vec<LeadPage>,
    leads: Vec<Lead>,
    plans: HashMap<String, Plan>,
}

/// In-process store used by the demo backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give a user an active subscription
    pub async fn set_plan(&self, user_id: &str, plan: Plan) {
        let mut state = self.state.lock().await;
        state.plans.insert(user_id.to_string(), plan);
    }
}

/// Newest first; equal timestamps keep most recent insert first
fn newest_first<T>(items: Vec<T>, created_at: impl Fn(&T) -> chrono::DateTime<Utc>) -> Vec<T> {
    let mut items: Vec<T> = items.into_iter().rev().collect();
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    items
}

impl PageStore for MemoryStore {
    async fn insert_page(&self, session: &Session, page: PageDefinition) -> Result<LeadPage> {
        let mut state = self.state.lock().await;

        if state.pages.iter().any(|existing| existing.slug == page.slug) {
            ::log::warn!("Rejected duplicate slug: {}", page.slug);
            return Err(Error::DuplicateSlug(page.slug));
        }

        let record = LeadPage::from_definition(&session.user_id, page, Utc::now());
        ::log::debug!("Stored page {} for user {}", record.id, session.user_id);
        state.pages.push(record.clone());
        Ok(record)
    }

    async fn list_pages(&self, session: &Session) -> Result<Vec<LeadPage>> {
        let state = self.state.lock().await;
        let pages = state
            .pages
            .iter()
            .filter(|page| page.user_id == session.user_id)
            .cloned()
            .collect();
        Ok(newest_first(pages, |page| page.created_at))
    }

    async fn insert_lead(&self, session: &Session, lead: NewLead) -> Result<Lead> {
        let mut state = self.state.lock().await;

        if let Some(page_id) = lead.page_id {
            let page = state
                .pages
                .iter_mut()
                .find(|page| page.id == page_id)
                .ok_or_else(|| Error::NotFound(format!("lead page {}", page_id)))?;
            page.conversions += 1;
        }

        let record = Lead {
            id: Uuid::new_v4(),
            page_id: lead.page_id,
            user_id: session.user_id.clone(),
            email: lead.email,
            name: lead.name,
            metadata: lead.metadata,
            created_at: Utc::now(),
        };
        state.leads.push(record.clone());
        Ok(record)
    }

    async fn recent_leads(&self, session: &Session, limit: usize) -> Result<Vec<Lead>> {
        let state = self.state.lock().await;
        let leads = state
            .leads
            .iter()
            .filter(|lead| lead.user_id == session.user_id)
            .cloned()
            .collect();
        let mut leads = newest_first(leads, |lead| lead.created_at);
        leads.truncate(limit);
        Ok(leads)
    }

    async fn active_plan(&self, session: &Session) -> Result<Plan> {
        let state = self.state.lock().await;
        Ok(state
            .plans
            .get(&session.user_id)
            .copied()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{MagicPageGenerator, blank_page};

    fn session(user: &str) -> Session {
        Session::new(user, format!("{}@gmail.com", user))
    }

    #[tokio::test]
    async fn test_insert_and_list_pages() {
        let store = MemoryStore::new();
        let alice = session("alice");
        let generator = MagicPageGenerator::default();

        let first = store
            .insert_page(&alice, generator.generate_magic_page(&alice.email))
            .await
            .unwrap();
        let mut second_def = blank_page(Utc::now());
        second_def.slug = "page-second".to_string();
        let second = store.insert_page(&alice, second_def).await.unwrap();
        store
            .insert_page(&session("bob"), blank_page(Utc::now()))
            .await
            .unwrap();

        let pages = store.list_pages(&alice).await.unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].id, second.id);
        assert_eq!(pages[1].id, first.id);
        assert!(pages.iter().all(|page| page.user_id == "alice"));
        assert_eq!(first.views, 0);
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_rejected() {
        let store = MemoryStore::new();
        let alice = session("alice");
        let page = blank_page(Utc::now());

        store.insert_page(&alice, page.clone()).await.unwrap();
        let err = store.insert_page(&alice, page).await.unwrap_err();
        assert!(matches!(err, Error::DuplicateSlug(_)));
    }

    #[tokio::test]
    async fn test_leads_are_limited_and_counted() {
        let store = MemoryStore::new();
        let alice = session("alice");
        let page = store.insert_page(&alice, blank_page(Utc::now())).await.unwrap();

        for i in 0..12 {
            let lead = NewLead {
                page_id: Some(page.id),
                email: format!("visitor{}@example.com", i),
                name: None,
                metadata: serde_json::json!({ "source": "test" }),
            };
            store.insert_lead(&alice, lead).await.unwrap();
        }

        let leads = store.recent_leads(&alice, 10).await.unwrap();
        assert_eq!(leads.len(), 10);
        assert_eq!(leads[0].email, "visitor11@example.com");

        let pages = store.list_pages(&alice).await.unwrap();
        assert_eq!(pages[0].conversions, 12);

        let missing = NewLead {
            page_id: Some(Uuid::new_v4()),
            email: "x@example.com".to_string(),
            name: None,
            metadata: serde_json::Value::Null,
        };
        assert!(matches!(
            store.insert_lead(&alice, missing).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_plan_defaults_to_free() {
        let store = MemoryStore::new();
        assert_eq!(store.active_plan(&session("alice")).await.unwrap(), Plan::Free);

        store.set_plan("alice", Plan::Pro).await;
        assert_eq!(store.active_plan(&session("alice")).await.unwrap(), Plan::Pro);
        assert_eq!(store.active_plan(&session("bob")).await.unwrap(), Plan::Free);
    }
}
