//! Listing State
//!
//! The in-memory car list behind the home and search views.
//!
//! Writes are optimistic with rollback: update and delete patch the local
//! list first, keep a [`Rollback`], and restore it if the request fails.
//! Only one write may be in flight at a time.

use crate::error::FormError;
use crate::models::{CarRecord, CarUpdate};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// What the grid area renders
#[derive(Debug, PartialEq)]
pub enum ListingPhase<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Cars(&'a [CarRecord]),
}

/// Snapshot needed to undo one optimistic write
#[derive(Debug, Clone, PartialEq)]
pub enum Rollback {
    Deleted { index: usize, record: CarRecord },
    Updated { previous: CarRecord },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    cars: Vec<CarRecord>,
    status: LoadStatus,
    /// Last failed write, shown above the grid
    pub error: Option<String>,
    pending_delete: Option<CarRecord>,
    busy: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            cars: Vec::new(),
            status: LoadStatus::Loading,
            error: None,
            pending_delete: None,
            busy: false,
        }
    }
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cars(&self) -> &[CarRecord] {
        &self.cars
    }

    pub fn start_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Replace the whole list with a fresh fetch
    pub fn loaded(&mut self, cars: Vec<CarRecord>) {
        self.cars = cars;
        self.status = LoadStatus::Loaded;
    }

    pub fn failed(&mut self, message: String) {
        self.cars.clear();
        self.status = LoadStatus::Failed(message);
    }

    pub fn phase(&self) -> ListingPhase<'_> {
        match &self.status {
            LoadStatus::Loading => ListingPhase::Loading,
            LoadStatus::Failed(msg) => ListingPhase::Failed(msg),
            LoadStatus::Loaded if self.cars.is_empty() => ListingPhase::Empty,
            LoadStatus::Loaded => ListingPhase::Cars(&self.cars),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    // ========================
    // Delete
    // ========================

    pub fn confirm_delete(&mut self, record: CarRecord) {
        self.pending_delete = Some(record);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<&CarRecord> {
        self.pending_delete.as_ref()
    }

    /// Remove the confirmed record locally. Returns its id and the undo
    /// snapshot, or `None` if nothing is pending or a write is in flight.
    pub fn begin_delete(&mut self) -> Option<(String, Rollback)> {
        if self.busy {
            return None;
        }
        let target = self.pending_delete.take()?;
        let index = self.cars.iter().position(|car| car.id == target.id)?;
        let record = self.cars.remove(index);
        self.busy = true;
        self.error = None;
        Some((record.id.clone(), Rollback::Deleted { index, record }))
    }

    // ========================
    // Update
    // ========================

    /// Patch a record locally. Rejected while another write is in flight or
    /// when the record has left the list.
    pub fn begin_update(&mut self, id: &str, update: &CarUpdate) -> Result<Rollback, FormError> {
        if self.busy {
            return Err(FormError::Busy);
        }
        let car = self
            .cars
            .iter_mut()
            .find(|car| car.id == id)
            .ok_or(FormError::ListingGone)?;
        let previous = car.clone();
        update.apply_to(car);
        self.busy = true;
        self.error = None;
        Ok(Rollback::Updated { previous })
    }

    /// Settle an optimistic write; a failure restores the snapshot
    pub fn finish_write(&mut self, rollback: Rollback, result: Result<(), String>) {
        self.busy = false;
        let Err(message) = result else { return };
        match rollback {
            Rollback::Deleted { index, record } => {
                let index = index.min(self.cars.len());
                self.cars.insert(index, record);
            }
            Rollback::Updated { previous } => {
                if let Some(car) = self.cars.iter_mut().find(|car| car.id == previous.id) {
                    *car = previous;
                }
            }
        }
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Image;

    fn make_car(id: &str) -> CarRecord {
        CarRecord {
            id: id.to_string(),
            title: format!("Car {}", id),
            desc: "desc".to_string(),
            tags: vec!["sedan".to_string()],
            images: vec![Image::DataUrl("data:image/png;base64,AA==".to_string())],
        }
    }

    fn loaded(ids: &[&str]) -> ListingState {
        let mut state = ListingState::new();
        state.loaded(ids.iter().map(|id| make_car(id)).collect());
        state
    }

    fn ids(state: &ListingState) -> Vec<&str> {
        state.cars().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_phases() {
        let mut state = ListingState::new();
        assert_eq!(state.phase(), ListingPhase::Loading);
        state.loaded(vec![]);
        assert_eq!(state.phase(), ListingPhase::Empty);
        state.failed("Failed to fetch cars".to_string());
        assert_eq!(state.phase(), ListingPhase::Failed("Failed to fetch cars"));
        state.loaded(vec![make_car("a")]);
        assert!(matches!(state.phase(), ListingPhase::Cars(cars) if cars.len() == 1));
    }

    #[test]
    fn test_delete_removes_only_target() {
        let mut state = loaded(&["a", "b", "c"]);
        state.confirm_delete(make_car("b"));
        let (id, rollback) = state.begin_delete().unwrap();
        assert_eq!(id, "b");
        assert_eq!(ids(&state), vec!["a", "c"]);
        assert!(state.pending_delete().is_none());

        state.finish_write(rollback, Ok(()));
        assert_eq!(ids(&state), vec!["a", "c"]);
        assert!(!state.is_busy());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failed_delete_restores_position() {
        let mut state = loaded(&["a", "b", "c"]);
        state.confirm_delete(make_car("b"));
        let (_, rollback) = state.begin_delete().unwrap();
        state.finish_write(rollback, Err("Failed to delete car".to_string()));
        assert_eq!(ids(&state), vec!["a", "b", "c"]);
        assert_eq!(state.error.as_deref(), Some("Failed to delete car"));
    }

    #[test]
    fn test_delete_without_confirmation_is_noop() {
        let mut state = loaded(&["a"]);
        assert!(state.begin_delete().is_none());
        assert_eq!(ids(&state), vec!["a"]);

        state.confirm_delete(make_car("a"));
        state.cancel_delete();
        assert!(state.begin_delete().is_none());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_second_write_rejected_while_busy() {
        let mut state = loaded(&["a", "b"]);
        state.confirm_delete(make_car("a"));
        let (_, rollback) = state.begin_delete().unwrap();

        state.confirm_delete(make_car("b"));
        assert!(state.begin_delete().is_none());
        let update = CarUpdate {
            title: "x".into(),
            desc: "y".into(),
            tags: vec![],
            images: vec![],
        };
        assert_eq!(state.begin_update("b", &update), Err(FormError::Busy));
        assert_eq!(ids(&state), vec!["b"]);

        state.finish_write(rollback, Ok(()));
        assert!(state.begin_delete().is_some());
    }

    #[test]
    fn test_update_patches_and_rolls_back() {
        let mut state = loaded(&["a", "b"]);
        let update = CarUpdate {
            title: "Renamed".into(),
            desc: "New".into(),
            tags: vec!["coupe".into()],
            images: vec!["data:image/jpeg;base64,AQ==".into()],
        };
        let rollback = state.begin_update("b", &update).unwrap();
        assert_eq!(state.cars()[1].title, "Renamed");
        assert_eq!(state.cars()[1].images[0], Image::DataUrl("data:image/jpeg;base64,AQ==".into()));

        state.finish_write(rollback, Err("Failed to update car".to_string()));
        assert_eq!(state.cars()[1], make_car("b"));
        assert_eq!(state.error.as_deref(), Some("Failed to update car"));
    }

    #[test]
    fn test_update_unknown_id() {
        let mut state = loaded(&["a"]);
        let update = CarUpdate { title: "t".into(), desc: "d".into(), tags: vec![], images: vec![] };
        assert_eq!(state.begin_update("zzz", &update), Err(FormError::ListingGone));
        assert!(!state.is_busy());
        assert_eq!(state.cars()[0], make_car("a"));
    }
}
