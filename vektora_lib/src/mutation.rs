//! The mutation executor: every write travels through one settlement path.
//!
//! On success the executor applies the declarative invalidation plan for
//! the mutated resource and emits a localized success notice; on failure it
//! emits an error notice (the server's message when it sent one) and
//! re-throws, leaving the cache untouched. There are no optimistic updates
//! and no manual cache patching: caches change only via invalidation after
//! server confirmation.

use std::future::Future;

use vektora_api::types::{Entity, Quotation, QuotationAction};
use vektora_api::Resource;

use crate::client::CachedClient;
use crate::error::VektoraError;
use crate::invalidation;
use crate::messages::{self, MutationVerb};

impl CachedClient {
    /// Creates a new `E` record and invalidates its namespaces.
    pub async fn create<E: Entity>(&self, payload: &E::Create) -> Result<E, VektoraError> {
        self.settle(
            E::RESOURCE,
            None,
            MutationVerb::Created,
            self.api.create::<E>(payload),
        )
        .await
    }

    /// Applies a partial update to an `E` record and invalidates its
    /// namespaces and detail entry.
    pub async fn update<E: Entity>(
        &self,
        id: i64,
        payload: &E::Update,
    ) -> Result<E, VektoraError> {
        self.settle(
            E::RESOURCE,
            Some(id),
            MutationVerb::Updated,
            self.api.update::<E>(id, payload),
        )
        .await
    }

    /// Deletes an `E` record and invalidates its namespaces and detail
    /// entry.
    pub async fn delete<E: Entity>(&self, id: i64) -> Result<(), VektoraError> {
        self.settle(
            E::RESOURCE,
            Some(id),
            MutationVerb::Deleted,
            self.api.delete::<E>(id),
        )
        .await
    }

    /// Requests a quotation workflow transition; the returned quotation
    /// carries its new status.
    pub async fn quotation_action(
        &self,
        id: i64,
        action: &QuotationAction,
    ) -> Result<Quotation, VektoraError> {
        let verb = match action {
            QuotationAction::Submit => MutationVerb::Submitted,
            QuotationAction::Approve => MutationVerb::Approved,
            QuotationAction::Reject { .. } => MutationVerb::Rejected,
        };
        self.settle(
            Resource::Quotation,
            Some(id),
            verb,
            self.api.quotation_action(id, action),
        )
        .await
    }

    async fn settle<T>(
        &self,
        resource: Resource,
        id: Option<i64>,
        verb: MutationVerb,
        operation: impl Future<Output = Result<T, vektora_api::Error>>,
    ) -> Result<T, VektoraError> {
        let locale = self.api.session().locale();
        match operation.await {
            Ok(value) => {
                let plan = invalidation::plan(resource, id);
                tracing::debug!(
                    "mutation on {} settled, invalidating {:?}",
                    resource,
                    plan.namespaces
                );
                plan.apply(&self.cache);
                self.notifier
                    .success(&messages::success_notice(locale, resource, verb));
                Ok(value)
            }
            Err(err) => {
                self.notifier.error(&messages::error_notice(locale, &err));
                Err(err.into())
            }
        }
    }
}
