//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for boards that change state only by applying their own events.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate produces and consumes.
    type Event: DomainEvent + Clone;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the current version (number of events applied).
    fn version(&self) -> i64;

    /// Apply an event to mutate internal state.
    fn apply(&mut self, event: &Self::Event);

    /// Returns uncommitted events produced by command handling.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Clears uncommitted events once they have been applied.
    fn clear_uncommitted_events(&mut self);

    /// Applies all uncommitted events in order, clears them and returns them.
    fn commit(&mut self) -> Vec<Self::Event> {
        let events = self.uncommitted_events().to_vec();
        for event in &events {
            self.apply(event);
        }
        self.clear_uncommitted_events();
        events
    }
}
