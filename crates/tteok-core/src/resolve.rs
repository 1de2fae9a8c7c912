use crate::service::{DictionaryService, RecordId, ServiceError};

/// What the user asked to look up. Category names are resolved to
/// service codes before a selector is built, so the resolver only
/// ever sees codes.
#[derive(Debug, Clone)]
pub enum Selector {
    /// Literal words, each resolved by exact-match search.
    Words(Vec<String>),
    SubjectCategory(u32),
    MeaningCategory(u32),
}

/// Pagination policy for search and category listing.
#[derive(Debug, Clone, Copy)]
pub struct PagingPolicy {
    /// Results requested per page.
    pub per_page: usize,
    /// Hard ceiling on pages fetched per query, in case the service
    /// never returns a short page.
    pub max_pages: usize,
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self {
            per_page: 100,
            max_pages: 999,
        }
    }
}

#[derive(Clone, Copy)]
enum Query<'a> {
    Word(&'a str),
    Subject(u32),
    Meaning(u32),
}

/// Resolve a selector to an ordered sequence of record identifiers.
///
/// Order is service result order; duplicates are kept. For multi-word
/// selectors, each word's matches are appended in turn, so the output
/// groups identifiers by input word.
pub async fn resolve<S>(
    service: &S,
    selector: &Selector,
    paging: PagingPolicy,
) -> Result<Vec<RecordId>, ServiceError>
where
    S: DictionaryService + ?Sized,
{
    match selector {
        Selector::Words(words) => {
            let mut ids = Vec::new();
            for word in words {
                let matches = collect_pages(service, Query::Word(word), paging).await?;
                tracing::debug!(word, matches = matches.len(), "resolved word");
                ids.extend(matches);
            }
            Ok(ids)
        }
        Selector::SubjectCategory(code) => {
            collect_pages(service, Query::Subject(*code), paging).await
        }
        Selector::MeaningCategory(code) => {
            collect_pages(service, Query::Meaning(*code), paging).await
        }
    }
}

/// Fetch pages until one comes back with fewer than `per_page`
/// results, which is the service's only end-of-results signal.
async fn collect_pages<S>(
    service: &S,
    query: Query<'_>,
    paging: PagingPolicy,
) -> Result<Vec<RecordId>, ServiceError>
where
    S: DictionaryService + ?Sized,
{
    let mut ids = Vec::new();
    for page in 1..=paging.max_pages {
        let results = match query {
            Query::Word(word) => service.search_exact(word, page, paging.per_page).await?,
            Query::Subject(code) => {
                service
                    .subject_category_members(code, page, paging.per_page)
                    .await?
            }
            Query::Meaning(code) => {
                service
                    .meaning_category_members(code, page, paging.per_page)
                    .await?
            }
        };
        let exhausted = results.len() < paging.per_page;
        ids.extend(results);
        if exhausted {
            return Ok(ids);
        }
    }
    tracing::warn!(max_pages = paging.max_pages, "page ceiling hit before service exhausted");
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LexicalRecord;
    use std::sync::Mutex;

    /// Serves canned pages and records how many were requested.
    struct PagedService {
        pages: Vec<Vec<RecordId>>,
        requested: Mutex<Vec<usize>>,
    }

    impl PagedService {
        fn new(pages: Vec<Vec<RecordId>>) -> Self {
            Self {
                pages,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn page(&self, page: usize) -> Vec<RecordId> {
            self.requested.lock().unwrap().push(page);
            self.pages.get(page - 1).cloned().unwrap_or_default()
        }
    }

    #[async_trait::async_trait]
    impl DictionaryService for PagedService {
        async fn search_exact(
            &self,
            _word: &str,
            page: usize,
            _per_page: usize,
        ) -> Result<Vec<RecordId>, ServiceError> {
            Ok(self.page(page))
        }

        async fn subject_category_members(
            &self,
            _category: u32,
            page: usize,
            _per_page: usize,
        ) -> Result<Vec<RecordId>, ServiceError> {
            Ok(self.page(page))
        }

        async fn meaning_category_members(
            &self,
            _category: u32,
            page: usize,
            _per_page: usize,
        ) -> Result<Vec<RecordId>, ServiceError> {
            Ok(self.page(page))
        }

        async fn view(&self, id: &RecordId) -> Result<LexicalRecord, ServiceError> {
            Err(ServiceError::NotFound(id.clone()))
        }
    }

    fn ids(prefix: &str, n: usize) -> Vec<RecordId> {
        (0..n).map(|i| format!("{prefix}{i}")).collect()
    }

    #[tokio::test]
    async fn stops_after_first_short_page() {
        let service = PagedService::new(vec![ids("a", 100), ids("b", 37), ids("c", 100)]);
        let selector = Selector::Words(vec!["말".to_string()]);

        let resolved = resolve(&service, &selector, PagingPolicy::default())
            .await
            .unwrap();

        assert_eq!(resolved.len(), 137);
        assert_eq!(resolved[0], "a0");
        assert_eq!(resolved[136], "b36");
        // Page 3 must never be requested once page 2 came back short.
        assert_eq!(*service.requested.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn full_final_page_takes_one_extra_request() {
        let service = PagedService::new(vec![ids("a", 100)]);
        let selector = Selector::Words(vec!["말".to_string()]);

        let resolved = resolve(&service, &selector, PagingPolicy::default())
            .await
            .unwrap();

        assert_eq!(resolved.len(), 100);
        assert_eq!(*service.requested.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn accumulates_across_words() {
        let service = PagedService::new(vec![ids("x", 2)]);
        let selector = Selector::Words(vec!["사랑".to_string(), "말".to_string()]);

        let resolved = resolve(&service, &selector, PagingPolicy::default())
            .await
            .unwrap();

        // Both words hit the same canned page; results for the second
        // word are appended, not substituted.
        assert_eq!(resolved, vec!["x0", "x1", "x0", "x1"]);
    }

    #[tokio::test]
    async fn categories_paginate_like_words() {
        let service = PagedService::new(vec![ids("a", 100), ids("b", 3)]);
        let selector = Selector::SubjectCategory(7);

        let resolved = resolve(&service, &selector, PagingPolicy::default())
            .await
            .unwrap();

        assert_eq!(resolved.len(), 103);
        assert_eq!(*service.requested.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn page_ceiling_bounds_a_misbehaving_service() {
        let service = PagedService::new(vec![ids("a", 100); 10]);
        let selector = Selector::MeaningCategory(3);
        let paging = PagingPolicy {
            per_page: 100,
            max_pages: 4,
        };

        let resolved = resolve(&service, &selector, paging).await.unwrap();

        assert_eq!(resolved.len(), 400);
        assert_eq!(*service.requested.lock().unwrap(), vec![1, 2, 3, 4]);
    }
}
