//! Translation between the declarative model and the wire domain.
//!
//! Every conversion is pure and total: no I/O, no error path. A variant tag
//! with no matching payload survives as an `Unpopulated` variant instead of
//! failing. Write-only secrets are never copied from domain to model;
//! [`crate::adapter::RetainSecrets`] restores them from the caller's prior
//! state.

mod check;
mod group;
mod host;
mod journey;
mod maintenance;

pub use journey::{fan_in_suppressions, fan_out_suppressions};

use crate::domain::IdRef;

/// Model → domain.
pub trait ToDomain {
    type Domain;

    fn to_domain(&self) -> Self::Domain;
}

/// Domain → model.
pub trait ToModel {
    type Model;

    fn to_model(&self) -> Self::Model;
}

pub(crate) fn all_to_domain<T: ToDomain>(items: &[T]) -> Vec<T::Domain> {
    items.iter().map(ToDomain::to_domain).collect()
}

pub(crate) fn all_to_model<T: ToModel>(items: &[T]) -> Vec<T::Model> {
    items.iter().map(ToModel::to_model).collect()
}

/// A missing id stays missing; it never turns into a reference to id 0.
pub(crate) fn reference(id: Option<i64>) -> Option<IdRef> {
    id.map(IdRef::new)
}

pub(crate) fn referenced_id(reference: Option<&IdRef>) -> Option<i64> {
    reference.map(|r| r.id)
}

pub(crate) fn references(ids: &[i64]) -> Vec<IdRef> {
    ids.iter().copied().map(IdRef::new).collect()
}

pub(crate) fn referenced_ids(references: &[IdRef]) -> Vec<i64> {
    references.iter().map(|r| r.id).collect()
}
