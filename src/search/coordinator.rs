//! Search coordination
//!
//! The coordinator owns the current [`SearchState`] and a facility
//! provider, and serializes searches through generation tickets. Because a
//! search may complete after a delay, every search is issued as a ticket
//! carrying the generation counter at issue time; a completion whose ticket
//! is no longer the newest is discarded, so a stale delayed result can
//! never overwrite a newer one.

use crate::facility::{Facility, FacilityProvider};
use crate::geo::Position;
use crate::search::state::SearchState;
use crate::types::FacilityCategory;
use tracing::{debug, info, warn};

/// A handle for one issued search
///
/// Carries the position and filter captured at issue time, so the result
/// can be produced later without re-reading mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchTicket {
    /// Generation counter value this search was issued at
    pub generation: u64,
    /// Position captured when the search was issued
    pub position: Position,
    /// Filter captured when the search was issued
    pub filter: FacilityCategory,
}

/// Coordinates position updates, filter changes, and search completion
#[derive(Debug)]
pub struct SearchCoordinator<P: FacilityProvider> {
    provider: P,
    state: SearchState,
}

impl<P: FacilityProvider> SearchCoordinator<P> {
    /// Create a coordinator with an empty state
    pub fn new(provider: P) -> Self {
        Self { provider, state: SearchState::new() }
    }

    /// The current search state
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Record a newly acquired position and refresh the facility list
    pub fn set_position(&mut self, position: Position) -> &SearchState {
        info!(lat = position.lat, lng = position.lng, "Position updated");
        self.state.position = Some(position);
        self.refresh();
        &self.state
    }

    /// Change the active filter, refreshing the list when a position is known
    pub fn set_filter(&mut self, filter: FacilityCategory) -> &SearchState {
        info!(filter = %filter, "Filter updated");
        self.state.filter = filter;
        if self.state.has_position() {
            self.refresh();
        }
        &self.state
    }

    /// Issue a new search, invalidating any still-pending one.
    ///
    /// Returns `None` when no position has been acquired yet; acquiring a
    /// position first is the caller's responsibility.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        let position = self.state.position?;
        self.state.generation += 1;
        debug!(generation = self.state.generation, "Search issued");
        Some(SearchTicket { generation: self.state.generation, position, filter: self.state.filter })
    }

    /// Apply the results of an issued search.
    ///
    /// The facility list is replaced wholesale if the ticket is still the
    /// newest; a stale ticket's results are discarded and `false` is
    /// returned.
    pub fn complete_search(&mut self, ticket: SearchTicket, facilities: Vec<Facility>) -> bool {
        if ticket.generation != self.state.generation {
            warn!(
                ticket_generation = ticket.generation,
                current_generation = self.state.generation,
                "Discarding stale search result"
            );
            return false;
        }

        info!(count = facilities.len(), filter = %ticket.filter, "Search completed");
        self.state.facilities = facilities;
        true
    }

    /// Run the provider for the given ticket
    pub fn run_search(&mut self, ticket: &SearchTicket) -> Vec<Facility> {
        self.provider.find_nearby(&ticket.position, ticket.filter)
    }

    /// Issue, run, and complete a search in one step
    fn refresh(&mut self) {
        if let Some(ticket) = self.begin_search() {
            let facilities = self.run_search(&ticket);
            self.complete_search(ticket, facilities);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::SimulatedFacilityProvider;

    fn coordinator() -> SearchCoordinator<SimulatedFacilityProvider> {
        SearchCoordinator::new(SimulatedFacilityProvider::with_seed(99))
    }

    #[test]
    fn test_filter_change_without_position_does_not_search() {
        let mut coordinator = coordinator();
        let state = coordinator.set_filter(FacilityCategory::Dental);

        assert_eq!(state.filter, FacilityCategory::Dental);
        assert_eq!(state.result_count(), 0);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_position_acquisition_triggers_search() {
        let mut coordinator = coordinator();
        let state = coordinator.set_position(Position::new(37.5665, 126.9780));

        assert!(state.has_position());
        assert_eq!(state.result_count(), 10);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_filter_change_with_position_replaces_list() {
        let mut coordinator = coordinator();
        coordinator.set_position(Position::new(37.5665, 126.9780));

        let state = coordinator.set_filter(FacilityCategory::GeneralHospital);
        assert_eq!(state.result_count(), 6);
        assert!(state.facilities.iter().all(|f| f.category == FacilityCategory::GeneralHospital));
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn test_begin_search_requires_position() {
        let mut coordinator = coordinator();
        assert!(coordinator.begin_search().is_none());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut coordinator = coordinator();
        coordinator.state.position = Some(Position::new(37.5665, 126.9780));

        let first = coordinator.begin_search().unwrap();
        let first_results = coordinator.run_search(&first);

        // A newer search is issued before the first completes
        let second = coordinator.begin_search().unwrap();
        let second_results = coordinator.run_search(&second);

        assert!(coordinator.complete_search(second, second_results.clone()));
        assert!(!coordinator.complete_search(first, first_results));

        // The newer results survived
        assert_eq!(coordinator.state().facilities, second_results);
    }

    #[test]
    fn test_out_of_order_completion_keeps_newest() {
        let mut coordinator = coordinator();
        coordinator.state.position = Some(Position::new(37.5665, 126.9780));
        coordinator.state.filter = FacilityCategory::Pharmacy;

        let stale = coordinator.begin_search().unwrap();
        coordinator.set_filter(FacilityCategory::GeneralHospital);

        // The stale pharmacy search finishing late cannot overwrite
        let stale_results = coordinator.run_search(&stale);
        assert!(!coordinator.complete_search(stale, stale_results));
        assert!(coordinator
            .state()
            .facilities
            .iter()
            .all(|f| f.category == FacilityCategory::GeneralHospital));
    }

    #[test]
    fn test_each_search_replaces_wholesale() {
        let mut coordinator = coordinator();
        coordinator.set_position(Position::new(37.5665, 126.9780));
        let first: Vec<_> =
            coordinator.state().facilities.iter().map(|f| f.distance_m).collect();

        coordinator.set_filter(FacilityCategory::InternalMedicine);
        let second: Vec<_> =
            coordinator.state().facilities.iter().map(|f| f.distance_m).collect();

        assert_eq!(first.len(), second.len());
        assert_ne!(first, second, "refresh should regenerate, not merge");
    }
}
