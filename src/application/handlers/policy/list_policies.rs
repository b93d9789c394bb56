//! ListPoliciesHandler - Query handler for searching and paging policies.
//!
//! Filtering, sorting and pagination run over the repository listing, which
//! keeps insertion order when no sort field is given.

use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::handlers::paging::{Page, PageRequest, DEFAULT_LIMIT};
use crate::domain::foundation::{DocumentId, DomainError, ValidationError};
use crate::domain::planning::{Policy, PolicyStatus, PolicyType};
use crate::ports::RecordRepository;

/// Field to order policies by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicySortField {
    Reference,
    Title,
}

impl FromStr for PolicySortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reference" => Ok(Self::Reference),
            "title" => Ok(Self::Title),
            other => Err(ValidationError::invalid_format(
                "sortBy",
                format!("unknown sort field '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ValidationError::invalid_format(
                "order",
                format!("expected 'asc' or 'desc', got '{}'", other),
            )),
        }
    }
}

/// Query to list policies.
#[derive(Debug, Clone)]
pub struct ListPoliciesQuery {
    /// Case-insensitive term matched against reference, title and wording.
    pub search: Option<String>,
    pub status: Option<PolicyStatus>,
    pub policy_type: Option<PolicyType>,
    pub document_id: Option<DocumentId>,
    /// `None` keeps insertion order.
    pub sort_by: Option<PolicySortField>,
    pub order: SortOrder,
    pub offset: usize,
    pub limit: usize,
}

impl Default for ListPoliciesQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            policy_type: None,
            document_id: None,
            sort_by: None,
            order: SortOrder::Asc,
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListPoliciesQuery {
    fn page_request(&self) -> PageRequest {
        PageRequest::new(self.offset, self.limit)
    }

    fn matches(&self, policy: &Policy) -> bool {
        if let Some(status) = self.status {
            if policy.status != status {
                return false;
            }
        }
        if let Some(policy_type) = self.policy_type {
            if policy.policy_type != policy_type {
                return false;
            }
        }
        if let Some(document_id) = &self.document_id {
            if &policy.document_id != document_id {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => policy.matches_search(term),
            _ => true,
        }
    }
}

/// One page of policies.
pub type ListPoliciesResult = Page<Policy>;

/// Handler for listing policies.
pub struct ListPoliciesHandler {
    policies: Arc<dyn RecordRepository<Policy>>,
}

impl ListPoliciesHandler {
    pub fn new(policies: Arc<dyn RecordRepository<Policy>>) -> Self {
        Self { policies }
    }

    pub async fn handle(&self, query: ListPoliciesQuery) -> Result<ListPoliciesResult, DomainError> {
        let window = query.page_request();
        window.validate()?;

        let mut matching: Vec<Policy> = self
            .policies
            .list()
            .await?
            .into_iter()
            .filter(|p| query.matches(p))
            .collect();

        if let Some(field) = query.sort_by {
            matching.sort_by(|a, b| {
                let ordering = compare(field, a, b);
                match query.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        let result = window.paginate(matching);

        debug!(
            total = result.total,
            returned = result.items.len(),
            offset = query.offset,
            limit = query.limit,
            "Listed policies"
        );

        Ok(result)
    }
}

fn compare(field: PolicySortField, a: &Policy, b: &Policy) -> Ordering {
    match field {
        PolicySortField::Reference => a.reference.cmp(&b.reference),
        PolicySortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}
