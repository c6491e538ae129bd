use crate::ports::RecordFetcher;
use caalookup_domain::{CaaRecordSet, DomainError, DomainName, RecursionBudget};
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::{debug, info};

/// Finds the CAA record set that governs issuance for a name (RFC 8659 §3).
///
/// Starting at the queried name, each step checks for a CNAME first, then
/// for CAA records, then for a DNAME, and finally climbs to the parent. The
/// first non-empty set stops the walk. Every step is awaited before the
/// next one is issued, so the ordering above is also the query order seen
/// by the resolver.
pub struct ResolveCaaUseCase {
    fetcher: Arc<dyn RecordFetcher>,
    max_recursions: usize,
}

impl ResolveCaaUseCase {
    pub fn new(fetcher: Arc<dyn RecordFetcher>, max_recursions: usize) -> Self {
        Self {
            fetcher,
            max_recursions,
        }
    }

    /// Resolves `name` with a fresh recursion budget.
    ///
    /// An empty set means no CAA policy was found anywhere on the path to
    /// the root. Any error means the walk was aborted and the result must
    /// not be read as "unrestricted".
    pub async fn execute(&self, name: &DomainName) -> Result<CaaRecordSet, DomainError> {
        let mut budget = RecursionBudget::new(self.max_recursions);

        let result = self.resolve(name.clone(), &mut budget).await;

        match &result {
            Ok(set) => info!(
                domain = %name,
                records = set.len(),
                owner = ?set.owner().map(|o| o.as_str()),
                steps = budget.used(),
                "CAA resolution finished"
            ),
            Err(e) => info!(
                domain = %name,
                error = %e,
                steps = budget.used(),
                "CAA resolution aborted"
            ),
        }

        result
    }

    /// One resolution step. Recurses into alias targets and the parent,
    /// all drawing from the same `budget`.
    pub fn resolve<'a>(
        &'a self,
        name: DomainName,
        budget: &'a mut RecursionBudget,
    ) -> BoxFuture<'a, Result<CaaRecordSet, DomainError>> {
        Box::pin(async move {
            budget.consume()?;

            if name.is_root() {
                return Ok(CaaRecordSet::empty());
            }

            debug!(
                name = %name,
                labels = name.label_count(),
                step = budget.used(),
                remaining = budget.remaining(),
                "Resolving CAA"
            );

            match self.fetcher.query_cname(&name).await? {
                // A CNAME owner holds no other records, so CAA and DNAME are not queried here.
                Some(target) => {
                    debug!(name = %name, target = %target, "Following CNAME");
                    let found = self.resolve(target, budget).await?;
                    if !found.is_empty() {
                        return Ok(found);
                    }
                }
                None => {
                    let records = self.fetcher.query_caa(&name).await?;
                    if !records.is_empty() {
                        debug!(name = %name, records = records.len(), "CAA record set found");
                        return Ok(CaaRecordSet::found(name, records));
                    }

                    if let Some(target) = self.fetcher.query_dname(&name).await? {
                        debug!(name = %name, target = %target, "Following DNAME");
                        let found = self.resolve(target, budget).await?;
                        if !found.is_empty() {
                            return Ok(found);
                        }
                    }
                }
            }

            let parent = name.parent();
            debug!(name = %name, parent = %parent, "Climbing to parent");
            self.resolve(parent, budget).await
        })
    }
}
