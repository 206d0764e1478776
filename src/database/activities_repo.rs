use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::database::seed_data;
use crate::error::{SeedError, SignupError};
use crate::models::{Activity, ActivityCatalog};

/// In-memory activity store.
///
/// The set of activities is fixed when the repo is built. Each activity sits
/// behind its own lock, so roster changes on one activity are serialized while
/// different activities never contend.
pub struct ActivitiesRepo {
    slots: Vec<Mutex<Activity>>,
    index: HashMap<String, usize>,
}

impl ActivitiesRepo {
    pub fn new(activities: Vec<Activity>) -> Result<Self, SeedError> {
        let mut index = HashMap::with_capacity(activities.len());
        let mut slots = Vec::with_capacity(activities.len());

        for activity in activities {
            validate_seed(&activity)?;
            if index.contains_key(&activity.name) {
                return Err(SeedError::DuplicateActivity(activity.name));
            }
            index.insert(activity.name.clone(), slots.len());
            slots.push(Mutex::new(activity));
        }

        Ok(Self { slots, index })
    }

    /// Repo loaded with the compiled-in catalog.
    pub fn seeded() -> Result<Self, SeedError> {
        Self::new(seed_data::default_activities())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.lock(name).ok().map(|guard| guard.clone())
    }

    pub fn list(&self) -> ActivityCatalog {
        let activities = self
            .slots
            .iter()
            .map(|slot| lock_slot(slot).clone())
            .collect();
        ActivityCatalog::new(activities)
    }

    pub fn add_participant(&self, name: &str, email: &str) -> Result<(), SignupError> {
        let mut activity = self.lock(name)?;
        if activity.has_participant(email) {
            return Err(SignupError::AlreadyRegistered);
        }
        if activity.is_full() {
            return Err(SignupError::CapacityExceeded);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn remove_participant(&self, name: &str, email: &str) -> Result<(), SignupError> {
        let mut activity = self.lock(name)?;
        let pos = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(SignupError::NotRegistered)?;
        activity.participants.remove(pos);
        Ok(())
    }

    fn lock(&self, name: &str) -> Result<MutexGuard<'_, Activity>, SignupError> {
        let idx = self.index.get(name).ok_or(SignupError::NotFound)?;
        Ok(lock_slot(&self.slots[*idx]))
    }
}

// Every mutation is a single push/remove, so a poisoned slot still holds a
// valid roster.
fn lock_slot(slot: &Mutex<Activity>) -> MutexGuard<'_, Activity> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn validate_seed(activity: &Activity) -> Result<(), SeedError> {
    if activity.max_participants == 0 {
        return Err(SeedError::ZeroCapacity(activity.name.clone()));
    }

    let mut seen = HashSet::with_capacity(activity.participants.len());
    for email in &activity.participants {
        if !seen.insert(email.as_str()) {
            return Err(SeedError::DuplicateParticipant {
                activity: activity.name.clone(),
                email: email.clone(),
            });
        }
    }

    if activity.participants.len() > activity.max_participants {
        return Err(SeedError::OverCapacity {
            activity: activity.name.clone(),
            participants: activity.participants.len(),
            max_participants: activity.max_participants,
        });
    }
    Ok(())
}
