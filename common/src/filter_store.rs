//! Observable holder of the page's single [`FilterSet`].
//!
//! The store publishes on every successful mutation; each subscriber re-derives
//! its own request from the new value. Nothing is cached here.

use chrono::NaiveDate;

use crate::{
    error::DashboardError,
    filter_set::{FilterSet, IntoFilterId, ObservationStatus},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&FilterSet, u64)>;

#[derive(Default)]
pub struct FilterStore {
    filters: FilterSet,
    revision: u64,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl std::fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStore")
            .field("filters", &self.filters)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl FilterStore {
    pub fn new(filters: FilterSet) -> Self {
        Self { filters, ..Default::default() }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Bumped on every mutation and on [`FilterStore::invalidate`].
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&FilterSet, u64) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Applies `mutation` to a copy; the live value only changes (and
    /// subscribers only hear about it) when the mutation succeeds.
    pub fn update<R>(
        &mut self,
        mutation: impl FnOnce(&mut FilterSet) -> Result<R, DashboardError>,
    ) -> Result<R, DashboardError> {
        let (result, next) = self.apply(mutation)?;
        self.filters = next;
        self.publish();
        Ok(result)
    }

    /// Same as [`FilterStore::update`], except that a mutation leaving the
    /// filters equal to the current ones publishes nothing. Returns whether
    /// subscribers were notified.
    pub fn update_if_changed(
        &mut self,
        mutation: impl FnOnce(&mut FilterSet) -> Result<(), DashboardError>,
    ) -> Result<bool, DashboardError> {
        let ((), next) = self.apply(mutation)?;
        if next == self.filters {
            return Ok(false);
        }
        self.filters = next;
        self.publish();
        Ok(true)
    }

    fn apply<R>(
        &self,
        mutation: impl FnOnce(&mut FilterSet) -> Result<R, DashboardError>,
    ) -> Result<(R, FilterSet), DashboardError> {
        let mut next = self.filters.clone();
        let result = mutation(&mut next).inspect_err(|e| {
            tracing::warn!("rejected filter mutation: {e}");
        })?;
        Ok((result, next))
    }

    pub fn replace(&mut self, filters: FilterSet) {
        self.filters = filters;
        self.publish();
    }

    /// Re-notify without touching the filters, e.g. after observations were
    /// marked as seen server-side and every view must refetch.
    pub fn invalidate(&mut self) {
        self.publish();
    }

    pub fn set_species<I, T>(&mut self, ids: I) -> Result<(), DashboardError>
    where
        I: IntoIterator<Item = T>,
        T: IntoFilterId,
    {
        self.update(|f| f.set_species(ids))
    }

    pub fn set_datasets<I, T>(&mut self, ids: I) -> Result<(), DashboardError>
    where
        I: IntoIterator<Item = T>,
        T: IntoFilterId,
    {
        self.update(|f| f.set_datasets(ids))
    }

    pub fn set_areas<I, T>(&mut self, ids: I) -> Result<(), DashboardError>
    where
        I: IntoIterator<Item = T>,
        T: IntoFilterId,
    {
        self.update(|f| f.set_areas(ids))
    }

    pub fn set_initial_data_imports<I, T>(&mut self, ids: I) -> Result<(), DashboardError>
    where
        I: IntoIterator<Item = T>,
        T: IntoFilterId,
    {
        self.update(|f| f.set_initial_data_imports(ids))
    }

    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), DashboardError> {
        self.update(|f| f.set_date_range(start, end))
    }

    pub fn set_status(&mut self, status: Option<ObservationStatus>) {
        self.filters.set_status(status);
        self.publish();
    }

    fn publish(&mut self) {
        self.revision += 1;
        let revision = self.revision;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.filters, revision);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn subscribers_hear_every_successful_mutation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = FilterStore::default();
        let sink = seen.clone();
        store.subscribe(move |f, rev| sink.borrow_mut().push((f.species_ids.len(), rev)));

        store.set_species([1_u64, 2]).unwrap();
        store.set_status(Some(ObservationStatus::Seen));
        assert!(store.set_species(["x"]).is_err());

        assert_eq!(*seen.borrow(), vec![(2, 1), (2, 2)]);
        assert_eq!(store.revision(), 2);
        assert_eq!(store.filters().species_ids.len(), 2);
    }

    #[test]
    fn unchanged_filters_are_not_republished() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = FilterStore::default();
        let sink = calls.clone();
        store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        assert_eq!(store.update_if_changed(|f| f.set_species([5_u64])), Ok(true));
        assert_eq!(store.update_if_changed(|f| f.set_species([5_u64])), Ok(false));
        assert!(store.update_if_changed(|f| f.set_species(["five"])).is_err());
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.revision(), 1);

        store.set_status(None);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn invalidate_notifies_with_unchanged_filters() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = FilterStore::default();
        let sink = calls.clone();
        store.subscribe(move |_, _| *sink.borrow_mut() += 1);
        store.invalidate();
        assert_eq!(*calls.borrow(), 1);
        assert!(store.filters().is_empty());
    }

    #[test]
    fn unsubscribed_callbacks_stop_receiving() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = FilterStore::default();
        let sink = calls.clone();
        let id = store.subscribe(move |_, _| *sink.borrow_mut() += 1);
        store.set_areas([3_u64]).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_areas([4_u64]).unwrap();
        assert_eq!(*calls.borrow(), 1);
    }
}
