//! Bootstrap seeding
//!
//! Installs the three sample events (and a zero tally for each) before the
//! server accepts requests. Seeding must run against empty stores and must
//! produce ids 1, 2 and 3; anything else is reported as a [`SeedError`] and
//! the caller is expected to abort startup.

use thiserror::Error;
use tracing::info;

use pulse_core::entities::{Event, NewEvent};
use pulse_core::traits::{EventRepository, ReactionRepository};
use pulse_core::value_objects::{EventId, IdAllocator};

/// A sample event installed at startup: (title, description, date)
pub type SeedEvent = (&'static str, &'static str, &'static str);

/// The sample events, in id order
pub const DEFAULT_EVENTS: [SeedEvent; 3] = [
    (
        "KMIT Evening Saanjh",
        "An enchanting evening of music, culture, and celebration. Join us for a memorable cultural fest featuring performances, food, and fun activities.",
        "2026-03-20T18:00:00",
    ),
    (
        "Patang Utsav",
        "Celebrate the spirit of kite flying! Join us for a colorful kite festival with competitions, food stalls, and exciting prizes. Let your kites soar high!",
        "2026-04-05T15:00:00",
    ),
    (
        "V-MUN",
        "Virtual Model United Nations - A prestigious forum for debate, diplomacy, and global leadership. Participate in engaging discussions on international issues.",
        "2026-04-15T09:00:00",
    ),
];

/// Seeding errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("event store already holds {0} events")]
    NotEmpty(usize),

    #[error("seeded event '{title}' got id {actual}, expected {expected}")]
    UnexpectedId {
        title: &'static str,
        expected: EventId,
        actual: EventId,
    },
}

/// Seed the default events and their zero tallies
pub fn seed_default_events<E, R>(events: &E, reactions: &R) -> Result<Vec<Event>, SeedError>
where
    E: EventRepository + ?Sized,
    R: ReactionRepository + ?Sized,
{
    let existing = events.count();
    if existing > 0 {
        return Err(SeedError::NotEmpty(existing));
    }

    let mut seeded = Vec::with_capacity(DEFAULT_EVENTS.len());
    for (expected, (title, description, date)) in (IdAllocator::FIRST..).zip(DEFAULT_EVENTS) {
        let event = events.create(NewEvent::new(title, description, date));
        let expected = EventId::new(expected);
        if event.id != expected {
            return Err(SeedError::UnexpectedId {
                title,
                expected,
                actual: event.id,
            });
        }
        reactions.ensure(event.id);
        seeded.push(event);
    }

    info!(count = seeded.len(), "Default events seeded");
    Ok(seeded)
}
