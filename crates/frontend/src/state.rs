use std::collections::HashMap;

use dioxus::logger::tracing::debug;
use parkfinder_shared::models::ParkingLot;

/// Every seeded lot starts with one booked hour.
pub const DEFAULT_BOOKED_HOURS: u32 = 1;

/// How the detail sheet was closed. The three triggers behave
/// identically and are distinguished only in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    Backdrop,
    SwipeDown,
}

/// Discrete user inputs. Handlers deliver these synchronously to
/// `ScreenState::apply`; there is no other mutation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    MarkerTapped(u32),
    DetailRequested(u32),
    DetailDismissed(DismissReason),
    HoursSet { lot_id: u32, hours: u32 },
}

/// All mutable state for the screen. Owned by `MapScreen` behind a
/// `Signal` and threaded to child components as an explicit handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    lots: Vec<ParkingLot>,
    selected_lot_id: Option<u32>,
    active_detail: Option<ParkingLot>,
    booked_hours: HashMap<u32, u32>,
}

impl ScreenState {
    pub fn new(lots: Vec<ParkingLot>) -> Self {
        let booked_hours = lots
            .iter()
            .map(|lot| (lot.id, DEFAULT_BOOKED_HOURS))
            .collect();
        Self {
            lots,
            selected_lot_id: None,
            active_detail: None,
            booked_hours,
        }
    }

    pub fn lots(&self) -> &[ParkingLot] {
        &self.lots
    }

    pub fn selected_lot_id(&self) -> Option<u32> {
        self.selected_lot_id
    }

    pub fn active_detail(&self) -> Option<&ParkingLot> {
        self.active_detail.as_ref()
    }

    pub fn booked_hours(&self, lot_id: u32) -> u32 {
        self.booked_hours
            .get(&lot_id)
            .copied()
            .unwrap_or(DEFAULT_BOOKED_HOURS)
    }

    fn lot(&self, id: u32) -> Option<&ParkingLot> {
        self.lots.iter().find(|lot| lot.id == id)
    }

    /// Single state-update function. Events naming an unknown lot id
    /// are dropped rather than surfaced, which keeps both invariants:
    /// selection and detail always reference a seeded lot, and
    /// `booked_hours` never grows beyond the seeded id set.
    pub fn apply(&mut self, event: ScreenEvent) {
        debug!(?event, "screen event");
        match event {
            ScreenEvent::MarkerTapped(id) => {
                if self.lot(id).is_some() {
                    self.selected_lot_id = Some(id);
                }
            }
            ScreenEvent::DetailRequested(id) => {
                if let Some(lot) = self.lot(id) {
                    self.active_detail = Some(lot.clone());
                }
            }
            ScreenEvent::DetailDismissed(_) => {
                self.active_detail = None;
            }
            ScreenEvent::HoursSet { lot_id, hours } => {
                if self.lot(lot_id).is_some() {
                    self.booked_hours.insert(lot_id, hours);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkfinder_shared::models::seed_lots;

    fn mounted() -> ScreenState {
        ScreenState::new(seed_lots())
    }

    #[test]
    fn test_mount_defaults_one_hour_per_seeded_lot() {
        let state = mounted();
        assert_eq!(state.booked_hours.len(), 3);
        for lot in state.lots() {
            assert_eq!(state.booked_hours(lot.id), DEFAULT_BOOKED_HOURS);
        }
        assert_eq!(state.selected_lot_id(), None);
        assert!(state.active_detail().is_none());
    }

    #[test]
    fn test_marker_tap_sets_only_selection() {
        let mut state = mounted();
        let before = state.clone();
        state.apply(ScreenEvent::MarkerTapped(2));
        assert_eq!(state.selected_lot_id(), Some(2));
        assert_eq!(state.active_detail(), before.active_detail());
        assert_eq!(state.booked_hours, before.booked_hours);
        assert_eq!(state.lots(), before.lots());
    }

    #[test]
    fn test_marker_tap_unknown_id_is_noop() {
        let mut state = mounted();
        state.apply(ScreenEvent::MarkerTapped(99));
        assert_eq!(state.selected_lot_id(), None);
    }

    #[test]
    fn test_detail_opens_and_dismisses() {
        let mut state = mounted();
        state.apply(ScreenEvent::DetailRequested(3));
        assert_eq!(state.active_detail().map(|l| l.id), Some(3));

        for reason in [
            DismissReason::CloseButton,
            DismissReason::Backdrop,
            DismissReason::SwipeDown,
        ] {
            state.apply(ScreenEvent::DetailRequested(3));
            state.apply(ScreenEvent::DetailDismissed(reason));
            assert!(state.active_detail().is_none());
        }
    }

    #[test]
    fn test_detail_request_unknown_id_is_noop() {
        let mut state = mounted();
        state.apply(ScreenEvent::DetailRequested(42));
        assert!(state.active_detail().is_none());
    }

    #[test]
    fn test_hours_set_known_and_unknown() {
        let mut state = mounted();
        state.apply(ScreenEvent::HoursSet {
            lot_id: 1,
            hours: 4,
        });
        assert_eq!(state.booked_hours(1), 4);

        state.apply(ScreenEvent::HoursSet {
            lot_id: 77,
            hours: 4,
        });
        assert_eq!(state.booked_hours.len(), 3, "unknown ids must not be recorded");
    }

    #[test]
    fn test_tap_then_buy_then_swipe_scenario() {
        let mut state = mounted();
        state.apply(ScreenEvent::MarkerTapped(2));
        assert_eq!(state.selected_lot_id(), Some(2));

        state.apply(ScreenEvent::DetailRequested(3));
        assert_eq!(state.active_detail().map(|l| l.id), Some(3));

        state.apply(ScreenEvent::DetailDismissed(DismissReason::SwipeDown));
        assert!(state.active_detail().is_none());
        assert_eq!(state.selected_lot_id(), Some(2), "dismiss keeps selection");
    }

    #[test]
    fn test_empty_lot_list_never_panics() {
        let mut state = ScreenState::new(Vec::new());
        assert!(state.lots().is_empty());
        assert!(state.booked_hours.is_empty());
        state.apply(ScreenEvent::MarkerTapped(1));
        state.apply(ScreenEvent::DetailRequested(1));
        state.apply(ScreenEvent::HoursSet {
            lot_id: 1,
            hours: 2,
        });
        assert_eq!(state.selected_lot_id(), None);
        assert!(state.active_detail().is_none());
        assert!(state.booked_hours.is_empty());
    }
}
