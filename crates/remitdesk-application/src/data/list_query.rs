use remitdesk_core::agent::{Agent, AgentTier};
use remitdesk_core::business::Business;
use remitdesk_core::currency::{CountryCurrency, CurrencyRoute};
use remitdesk_core::settlement::Settlement;
use remitdesk_core::transaction::Transaction;
use remitdesk_core::user::User;
use remitdesk_core::virtual_account::VirtualAccount;
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Records that list screens can search and filter.
pub trait Listable {
    /// Text the search box matches against.
    fn search_text(&self) -> Vec<&str>;

    /// Status label the status filter compares with.
    fn status_label(&self) -> String;
}

/// Client-side search, status filter and pagination over a fetched list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    /// 1-based.
    pub page: usize,
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matching records before pagination.
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl ListQuery {
    pub fn matches<T: Listable>(&self, record: &T) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                record
                    .search_text()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        };
        let status_ok = match self.status.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(status) => status.eq_ignore_ascii_case("all")
                || record.status_label().eq_ignore_ascii_case(status),
        };
        search_ok && status_ok
    }

    /// Filters `records` and cuts out the requested page.
    ///
    /// A page past the end yields no items; `page` 0 is treated as 1.
    pub fn apply<T: Listable + Clone>(&self, records: &[T]) -> Page<T> {
        let matching: Vec<&T> = records.iter().filter(|r| self.matches(*r)).collect();
        let limit = self.limit.max(1);
        let page = self.page.max(1);
        let total = matching.len();

        Page {
            items: matching
                .into_iter()
                .skip((page - 1) * limit)
                .take(limit)
                .cloned()
                .collect(),
            total,
            page,
            total_pages: total.div_ceil(limit),
        }
    }
}

impl Listable for User {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ];
        fields.extend(self.phone.as_deref());
        fields
    }

    fn status_label(&self) -> String {
        self.kyc_status.to_string()
    }
}

impl Listable for Business {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        fields.extend(self.phone.as_deref());
        fields.extend(self.country.as_deref());
        fields
    }

    fn status_label(&self) -> String {
        self.kyb_status.to_string()
    }
}

impl Listable for Transaction {
    fn search_text(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.user_email.as_str()]
    }

    fn status_label(&self) -> String {
        self.status.to_string()
    }
}

impl Listable for Settlement {
    fn search_text(&self) -> Vec<&str> {
        vec![self.reference.as_str(), self.beneficiary.as_str()]
    }

    fn status_label(&self) -> String {
        self.status.to_string()
    }
}

impl Listable for VirtualAccount {
    fn search_text(&self) -> Vec<&str> {
        vec![
            self.account_name.as_str(),
            self.owned_by.as_str(),
            self.email.as_str(),
        ]
    }

    fn status_label(&self) -> String {
        self.status.to_string()
    }
}

impl Listable for Agent {
    fn search_text(&self) -> Vec<&str> {
        vec![self.email.as_str()]
    }

    fn status_label(&self) -> String {
        String::new()
    }
}

impl Listable for AgentTier {
    fn search_text(&self) -> Vec<&str> {
        vec![self.tier_name.as_str()]
    }

    fn status_label(&self) -> String {
        self.status.to_string()
    }
}

impl Listable for CountryCurrency {
    fn search_text(&self) -> Vec<&str> {
        vec![
            self.country.as_str(),
            self.currency.as_str(),
            self.payin_partner.as_str(),
            self.payout_partner.as_str(),
        ]
    }

    fn status_label(&self) -> String {
        self.status.to_string()
    }
}

impl Listable for CurrencyRoute {
    fn search_text(&self) -> Vec<&str> {
        vec![
            self.source_currency.as_str(),
            self.destination_currency.as_str(),
            self.payin_partner.as_str(),
            self.payout_partner.as_str(),
        ]
    }

    fn status_label(&self) -> String {
        self.status.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remitdesk_infrastructure::mock::fixtures;

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let users = fixtures::users();
        let query = ListQuery {
            search: Some("NWOSU".to_string()),
            ..ListQuery::default()
        };

        let page = query.apply(&users);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].first_name, "Amara");

        let query = ListQuery {
            search: Some("+1 905".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(query.apply(&users).items[0].id, "3");
    }

    #[test]
    fn test_status_filter_uses_display_labels() {
        let transactions = fixtures::transactions();
        let query = ListQuery {
            status: Some("completed".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(query.apply(&transactions).total, 4);

        let query = ListQuery {
            status: Some("All".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(query.apply(&transactions).total, 6);

        let businesses = fixtures::businesses();
        let query = ListQuery {
            status: Some("Awaiting KYB Review".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(query.apply(&businesses).items[0].name, "African Trade Partners");
    }

    #[test]
    fn test_pagination() {
        let transactions = fixtures::transactions();
        let query = ListQuery {
            page: 2,
            limit: 4,
            ..ListQuery::default()
        };

        let page = query.apply(&transactions);
        assert_eq!(page.total, 6);
        assert_eq!(page.total_pages, 2);
        assert_eq!(
            page.items.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["123460", "123461"]
        );

        let past_end = ListQuery {
            page: 5,
            limit: 4,
            ..ListQuery::default()
        };
        assert!(past_end.apply(&transactions).items.is_empty());
    }

    #[test]
    fn test_zero_page_and_limit_are_clamped() {
        let routes = fixtures::routes();
        let query = ListQuery {
            page: 0,
            limit: 0,
            ..ListQuery::default()
        };

        let page = query.apply(&routes);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 4);
    }
}
