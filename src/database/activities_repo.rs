use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::models::Activity;

/// In-memory activity registry shared by all request handlers.
///
/// Cloning is cheap and every clone sees the same map. Readers get snapshots;
/// writers run their whole check-then-mutate step under the write lock, so two
/// concurrent signups of one email cannot both append.
#[derive(Debug, Clone, Default)]
pub struct ActivitiesRepo {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivitiesRepo {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Fresh registry holding the school's fixed club list.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn list_activities(&self) -> BTreeMap<String, Activity> {
        // Every critical section leaves the map consistent, so a poisoned lock is still usable.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    #[cfg(test)]
    pub fn get_activity(&self, name: &str) -> Option<Activity> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(name).cloned()
    }

    /// Runs `f` against the named activity while holding the write lock.
    /// Returns `None` without calling `f` when no activity has that name.
    pub fn update_activity<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> T,
    ) -> Option<T> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.get_mut(name).map(f)
    }
}

pub fn seed_activities() -> BTreeMap<String, Activity> {
    let rows = [
        (
            "Basketball Club",
            Activity::new(
                "Learn basketball skills and compete in friendly matches",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Develop tennis techniques and participate in tournaments",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                10,
                &["sarah@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing, and various art techniques",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
                &["maya@mergington.edu"],
            ),
        ),
        (
            "Music Ensemble",
            Activity::new(
                "Play instruments and perform in concerts",
                "Fridays, 4:00 PM - 5:30 PM",
                25,
                &["alex@mergington.edu", "lucas@mergington.edu"],
            ),
        ),
        (
            "Debate Club",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Mondays, 3:30 PM - 4:30 PM",
                14,
                &["ava@mergington.edu"],
            ),
        ),
        (
            "Robotics Team",
            Activity::new(
                "Design and build robots to solve engineering challenges",
                "Thursdays, 4:00 PM - 6:00 PM",
                16,
                &["noah@mergington.edu", "isabella@mergington.edu"],
            ),
        ),
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ];

    rows.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}
