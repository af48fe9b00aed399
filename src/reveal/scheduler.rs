//! Reveal Scheduler
//!
//! Drives a [`RevealRegistry`] through settle → stagger → observe →
//! activate, with cancellation on teardown.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::geometry::{intersection_ratio, Rect, RootMargin, Viewport};
use super::registry::{RevealId, RevealRegistry};
use super::RevealConfig;

/// Registry shared between mounting components and the scheduler
pub type SharedRegistry = Arc<RwLock<RevealRegistry>>;

/// One visibility report from a watcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub id: RevealId,
    pub ratio: f64,
}

/// Viewport-intersection capability
pub trait ViewportWatcher: Send + Sync {
    /// Start watching `id`; `delay` is its assigned transition delay
    fn observe(&self, id: RevealId, delay: Duration);

    /// Stop watching `id`
    fn unobserve(&self, id: RevealId);

    /// Stop watching everything
    fn disconnect(&self);

    /// Whether `id` is being watched right now
    fn is_observing(&self, id: RevealId) -> bool;
}

#[derive(Debug, Default)]
struct WatcherState {
    layout: HashMap<RevealId, Rect>,
    observed: BTreeMap<RevealId, Duration>,
    disconnects: usize,
}

/// Watcher that computes intersections from known element rectangles
#[derive(Debug, Default)]
pub struct GeometryWatcher {
    root_margin: RootMargin,
    state: Mutex<WatcherState>,
}

impl GeometryWatcher {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            root_margin: config.root_margin,
            state: Mutex::new(WatcherState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, WatcherState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record where an element was laid out
    pub fn place(&self, id: RevealId, rect: Rect) {
        self.lock().layout.insert(id, rect);
    }

    /// Currently observed elements, in id order
    pub fn observed(&self) -> Vec<RevealId> {
        self.lock().observed.keys().copied().collect()
    }

    /// Transition delay an observed element was handed
    pub fn delay(&self, id: RevealId) -> Option<Duration> {
        self.lock().observed.get(&id).copied()
    }

    /// How many times the watcher has been disconnected
    pub fn disconnects(&self) -> usize {
        self.lock().disconnects
    }

    /// Report intersections for every observed, laid-out element
    pub fn scroll_to(&self, viewport: &Viewport) -> Vec<IntersectionEntry> {
        let state = self.lock();
        let root = self.root_margin.apply(viewport.rect());

        state
            .observed
            .keys()
            .filter_map(|id| {
                state.layout.get(id).map(|rect| IntersectionEntry {
                    id: *id,
                    ratio: intersection_ratio(&root, rect),
                })
            })
            .collect()
    }
}

impl ViewportWatcher for GeometryWatcher {
    fn observe(&self, id: RevealId, delay: Duration) {
        self.lock().observed.insert(id, delay);
    }

    fn unobserve(&self, id: RevealId) {
        self.lock().observed.remove(&id);
    }

    fn disconnect(&self) {
        let mut state = self.lock();
        state.observed.clear();
        state.disconnects += 1;
    }

    fn is_observing(&self, id: RevealId) -> bool {
        self.lock().observed.contains_key(&id)
    }
}

/// Schedules reveal candidates after each route or data change
pub struct RevealScheduler {
    registry: SharedRegistry,
    watcher: Option<Arc<dyn ViewportWatcher>>,
    config: RevealConfig,
    pending: Option<JoinHandle<()>>,
}

impl RevealScheduler {
    /// Scheduler over an intersection watcher
    pub fn with_watcher(
        registry: SharedRegistry,
        watcher: Arc<dyn ViewportWatcher>,
        config: RevealConfig,
    ) -> Self {
        Self {
            registry,
            watcher: Some(watcher),
            config,
            pending: None,
        }
    }

    /// Scheduler for a target with no intersection capability.
    /// Nothing ever activates.
    pub fn without_watcher(registry: SharedRegistry, config: RevealConfig) -> Self {
        Self {
            registry,
            watcher: None,
            config,
            pending: None,
        }
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Whether a settle delay is still running
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Start a new reveal pass after a route or data change.
    ///
    /// Tears down the previous pass first. Must be called inside a tokio
    /// runtime.
    pub fn schedule(&mut self) {
        self.teardown();

        let Some(watcher) = self.watcher.clone() else {
            tracing::debug!("no intersection watcher, reveal disabled");
            return;
        };

        let registry = Arc::clone(&self.registry);
        let settle = self.config.settle_delay();
        let step = self.config.stagger_step();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(settle).await;

            let assigned = registry.write().await.assign_stagger(step);
            for (id, delay) in &assigned {
                watcher.observe(*id, *delay);
            }

            tracing::debug!(candidates = assigned.len(), "reveal candidates observed");
        }));
    }

    /// Apply a batch of intersection reports.
    ///
    /// Returns the elements that became active in this batch. Each of them
    /// is unobserved immediately. Reports for elements the watcher is no
    /// longer observing are late deliveries and are ignored.
    pub async fn handle_intersections(&self, entries: &[IntersectionEntry]) -> Vec<RevealId> {
        let Some(watcher) = &self.watcher else {
            return Vec::new();
        };

        let mut registry = self.registry.write().await;
        let mut activated = Vec::new();

        for entry in entries {
            if !self.config.is_visible(entry.ratio) || !watcher.is_observing(entry.id) {
                continue;
            }
            if registry.activate(entry.id) {
                watcher.unobserve(entry.id);
                activated.push(entry.id);
            }
        }

        activated
    }

    /// Cancel the pending delay and disconnect the watcher
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        if let Some(watcher) = &self.watcher {
            watcher.disconnect();
        }
    }
}

impl Drop for RevealScheduler {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealState;

    type Fixture = (SharedRegistry, Vec<RevealId>, Arc<GeometryWatcher>, RevealScheduler);

    fn setup(count: usize) -> Fixture {
        let config = RevealConfig::default();
        let registry: SharedRegistry = Arc::new(RwLock::new(RevealRegistry::new()));
        let watcher = Arc::new(GeometryWatcher::new(&config));

        let mut ids = Vec::new();
        {
            let mut reg = registry.try_write().unwrap();
            for i in 0..count {
                let id = reg.register(format!("card-{}", i));
                // Stack cards 400px apart starting at the top
                watcher.place(id, Rect::new(0.0, i as f64 * 400.0, 300.0, 300.0));
                ids.push(id);
            }
        }

        let scheduler =
            RevealScheduler::with_watcher(Arc::clone(&registry), watcher.clone(), config);
        (registry, ids, watcher, scheduler)
    }

    #[tokio::test(start_paused = true)]
    async fn test_candidates_observed_after_settle_delay() {
        let (_registry, ids, watcher, mut scheduler) = setup(3);

        scheduler.schedule();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(watcher.observed().is_empty());
        assert!(scheduler.is_pending());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(watcher.observed(), ids);
        assert_eq!(watcher.delay(ids[2]), Some(Duration::from_millis(160)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_pending_delay() {
        let (_registry, _ids, watcher, mut scheduler) = setup(2);

        scheduler.schedule();
        tokio::time::sleep(Duration::from_millis(20)).await;
        scheduler.teardown();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(watcher.observed().is_empty());
        assert!(!scheduler.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reports_after_teardown_are_ignored() {
        let (registry, ids, watcher, mut scheduler) = setup(2);
        scheduler.schedule();
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(watcher.observed(), ids);

        // Route changes while a report batch is still in flight
        let in_flight = watcher.scroll_to(&Viewport::new(1200.0, 800.0));
        scheduler.teardown();

        assert!(scheduler.handle_intersections(&in_flight).await.is_empty());
        let reg = registry.read().await;
        assert!(ids.iter().all(|id| reg.state(*id) == Some(RevealState::Pending)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reports_before_settle_are_ignored() {
        let (registry, ids, _watcher, mut scheduler) = setup(1);
        scheduler.schedule();

        let early = [IntersectionEntry { id: ids[0], ratio: 1.0 }];
        assert!(scheduler.handle_intersections(&early).await.is_empty());
        assert!(!registry.read().await.is_active(ids[0]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_activation_happens_once() {
        let (registry, ids, watcher, mut scheduler) = setup(3);
        scheduler.schedule();
        tokio::time::sleep(Duration::from_millis(150)).await;

        let viewport = Viewport::new(1200.0, 800.0);
        let activated = scheduler.handle_intersections(&watcher.scroll_to(&viewport)).await;

        // Cards at 0 and 400 are in view, the one at 800 is below the fold
        assert_eq!(activated, vec![ids[0], ids[1]]);
        assert!(!watcher.is_observing(ids[0]));
        assert!(watcher.is_observing(ids[2]));

        // Re-delivering the same reports changes nothing
        let stale = [IntersectionEntry { id: ids[0], ratio: 1.0 }];
        assert!(scheduler.handle_intersections(&stale).await.is_empty());

        let activated = scheduler
            .handle_intersections(&watcher.scroll_to(&viewport.scrolled_to(600.0)))
            .await;
        assert_eq!(activated, vec![ids[2]]);

        let reg = registry.read().await;
        assert!(ids.iter().all(|id| reg.state(*id) == Some(RevealState::Active)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_skips_active_elements() {
        let (registry, ids, watcher, mut scheduler) = setup(2);
        scheduler.schedule();
        tokio::time::sleep(Duration::from_millis(150)).await;
        scheduler
            .handle_intersections(&[IntersectionEntry { id: ids[0], ratio: 0.5 }])
            .await;

        // Data arrives, a new card mounts
        let late = registry.write().await.register("late");

        scheduler.schedule();
        assert_eq!(watcher.disconnects(), 2);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(watcher.observed(), vec![ids[1], late]);
        assert_eq!(watcher.delay(late), Some(Duration::from_millis(80)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_without_watcher_nothing_activates() {
        let registry: SharedRegistry = Arc::new(RwLock::new(RevealRegistry::new()));
        let id = registry.write().await.register("hero");

        let mut scheduler =
            RevealScheduler::without_watcher(Arc::clone(&registry), RevealConfig::default());
        scheduler.schedule();
        tokio::time::sleep(Duration::from_millis(500)).await;

        let activated = scheduler
            .handle_intersections(&[IntersectionEntry { id, ratio: 1.0 }])
            .await;
        assert!(activated.is_empty());
        assert_eq!(registry.read().await.state(id), Some(RevealState::Pending));
    }

    #[tokio::test(start_paused = true)]
    async fn test_below_threshold_does_not_activate() {
        let (registry, ids, _watcher, mut scheduler) = setup(1);
        scheduler.schedule();
        tokio::time::sleep(Duration::from_millis(150)).await;

        let activated = scheduler
            .handle_intersections(&[IntersectionEntry { id: ids[0], ratio: 0.05 }])
            .await;
        assert!(activated.is_empty());
        assert!(!registry.read().await.is_active(ids[0]));
    }
}
