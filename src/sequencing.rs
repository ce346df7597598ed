//! Ordering of overlapping event requests from the same page view.
//!
//! Each page view gets a [ViewId]. The page is split into [Region]s that are
//! loaded independently, and every event request takes one [Ticket] per region
//! it reloads, with a sequence number higher than any issued before it for
//! that region. Once the request's loads finish, the results for a region are
//! only sent if no newer ticket has been issued for it in the meantime, so a
//! slow response can never overwrite the result of a later event. Regions the
//! later event does not reload are still delivered.

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Identifies one rendering of the dashboard page in a browser.
pub type ViewId = u64;

/// A part of the dashboard that is reloaded as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The transactions table and pager, which follow the month, search text and page.
    Transactions,
    /// The statistics and charts, which only follow the month.
    Month,
}

/// The position of an event request within its page view and region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    /// The page view that sent the request.
    pub view: ViewId,
    /// The region the request reloads.
    pub region: Region,
    /// Increases by one for every request from `view` that reloads `region`.
    pub sequence: u64,
}

/// Hands out tickets and remembers the latest one for each page view and region.
///
/// Clones share the same state.
#[derive(Debug, Clone)]
pub struct ViewSequencer {
    inner: Arc<Mutex<Sequences>>,
}

#[derive(Debug)]
struct Sequences {
    next_view: ViewId,
    capacity: usize,
    latest: HashMap<ViewId, RegionSequences>,
    /// View IDs from oldest to newest, used for eviction.
    order: VecDeque<ViewId>,
}

#[derive(Debug, Default)]
struct RegionSequences {
    transactions: u64,
    month: u64,
}

impl RegionSequences {
    fn get(&self, region: Region) -> u64 {
        match region {
            Region::Transactions => self.transactions,
            Region::Month => self.month,
        }
    }

    fn get_mut(&mut self, region: Region) -> &mut u64 {
        match region {
            Region::Transactions => &mut self.transactions,
            Region::Month => &mut self.month,
        }
    }
}

impl Sequences {
    /// Start tracking `view`, which must not be tracked already.
    fn track(&mut self, view: ViewId) -> &mut RegionSequences {
        self.order.push_back(view);

        while self.latest.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };

            self.latest.remove(&oldest);
        }

        self.latest.entry(view).or_default()
    }
}

impl ViewSequencer {
    /// Create a sequencer that tracks at most `capacity` page views.
    ///
    /// When more views are registered, the oldest are forgotten. Requests from
    /// a forgotten view are always treated as the latest.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Sequences {
                next_view: 1,
                capacity: capacity.max(1),
                latest: HashMap::new(),
                order: VecDeque::new(),
            })),
        }
    }

    fn sequences(&self) -> MutexGuard<'_, Sequences> {
        // The maps stay consistent even if a holder panicked.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start tracking a new page view.
    ///
    /// Ids already in use, e.g. by a page rendered before a restart that has
    /// since sent events, are skipped.
    pub fn register_view(&self) -> ViewId {
        let mut sequences = self.sequences();

        let mut view = sequences.next_view;
        while sequences.latest.contains_key(&view) {
            view = view.wrapping_add(1);
        }

        sequences.next_view = view.wrapping_add(1);
        sequences.track(view);

        view
    }

    /// Issue the next ticket for `region` of `view`.
    ///
    /// A view that is not tracked, e.g. one rendered before a restart, starts
    /// being tracked again.
    pub fn issue(&self, view: ViewId, region: Region) -> Ticket {
        let mut sequences = self.sequences();

        let regions = if sequences.latest.contains_key(&view) {
            sequences.latest.entry(view).or_default()
        } else {
            sequences.track(view)
        };

        let latest = regions.get_mut(region);
        *latest += 1;

        Ticket {
            view,
            region,
            sequence: *latest,
        }
    }

    /// Whether `ticket` is still the newest ticket issued for its view and region.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.sequences()
            .latest
            .get(&ticket.view)
            .is_none_or(|regions| regions.get(ticket.region) == ticket.sequence)
    }
}
