//! Coordinate editing shared between the branch form and the map widget.
//!
//! One authoritative (lat, lng) pair, mutable from three channels: the
//! numeric text fields, marker drag-end and map click. The last channel to
//! act wins, and the map channels always overwrite both axes together so
//! no reader ever sees a torn pair.
//!
//! Map initialization is fire-and-forget: `begin_load` hands the
//! collaborator the current coordinate plus an attempt id, and the
//! eventual callback lands in `resolve_load`. A retry supersedes the
//! previous attempt; late callbacks from a superseded attempt are ignored.

use crate::advisory::Advisory;
use crate::errors::AppError;
use crate::models::branch::Coordinate;

/// Lifecycle of the external map surface.
#[derive(Debug, Clone, PartialEq)]
pub enum MapState {
    /// No load requested yet; only the text-field channel exists.
    Idle,
    Loading { attempt: u64 },
    Ready,
    /// Load failed; the text-field channel stays fully functional.
    Failed { message: String },
}

/// Everything the map collaborator needs to initialize.
#[derive(Debug, Clone)]
pub struct MapInit {
    pub attempt: u64,
    pub token: String,
    pub center: Coordinate,
    pub style: String,
    pub zoom: u8,
}

pub struct GeoEditor {
    coordinate: Coordinate,
    state: MapState,
    last_attempt: u64,
}

impl GeoEditor {
    pub fn new(initial: Coordinate) -> Self {
        Self {
            coordinate: initial,
            state: MapState::Idle,
            last_attempt: 0,
        }
    }

    /// The authoritative coordinate every channel currently reflects.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn map_state(&self) -> &MapState {
        &self.state
    }

    /// Channel A: direct overwrite of the latitude field.
    pub fn set_lat(&mut self, lat: f64) {
        self.coordinate.lat = lat;
    }

    /// Channel A: direct overwrite of the longitude field.
    pub fn set_lng(&mut self, lng: f64) {
        self.coordinate.lng = lng;
    }

    /// Channels B and C: a coordinate-change event from the map
    /// collaborator (drag-end or click). Both axes are overwritten as a
    /// single update.
    pub fn apply_map_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinate = coordinate;
    }

    /// Request map initialization. Returns what the collaborator needs,
    /// including the current authoritative coordinate as the map center.
    /// A second call supersedes any in-flight attempt.
    pub fn begin_load(&mut self, token: &str) -> Result<MapInit, AppError> {
        if token.trim().is_empty() {
            return Err(AppError::Integration("Mapbox token daxil edilməyib".into()));
        }

        self.last_attempt += 1;
        self.state = MapState::Loading {
            attempt: self.last_attempt,
        };

        let map = &crate::config::get_config().map;
        Ok(MapInit {
            attempt: self.last_attempt,
            token: token.to_string(),
            center: self.coordinate,
            style: map.style.clone(),
            zoom: map.zoom,
        })
    }

    /// Callback from the collaborator for a given attempt. Callbacks from
    /// superseded attempts are dropped. On failure the editor surfaces a
    /// user-visible advisory and keeps the text-field channel usable.
    pub fn resolve_load(
        &mut self,
        attempt: u64,
        result: Result<(), String>,
    ) -> Option<Advisory> {
        if attempt != self.last_attempt {
            // Stale callback from a superseded attempt.
            return None;
        }

        match result {
            Ok(()) => {
                self.state = MapState::Ready;
                None
            }
            Err(message) => {
                self.state = MapState::Failed {
                    message: message.clone(),
                };
                crate::log_warn!("GEO", "map collaborator failed to initialize");
                Some(Advisory::error("Xəta", "Xəritə yüklənmədi. Token-i yoxlayın."))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> GeoEditor {
        GeoEditor::new(Coordinate::new(40.4093, 49.8671))
    }

    #[test]
    fn marker_drag_overwrites_both_axes_atomically() {
        let mut geo = editor();
        geo.apply_map_coordinate(Coordinate::new(40.1, 49.9));

        let c = geo.coordinate();
        assert_eq!((c.lat, c.lng), (40.1, 49.9));
    }

    #[test]
    fn last_channel_to_act_wins() {
        let mut geo = editor();

        geo.set_lat(41.0); // channel A
        geo.apply_map_coordinate(Coordinate::new(40.2, 49.5)); // channel B/C
        geo.set_lng(50.0); // channel A again

        let c = geo.coordinate();
        assert_eq!((c.lat, c.lng), (40.2, 50.0));
    }

    #[test]
    fn begin_load_supplies_current_coordinate() {
        let mut geo = editor();
        geo.apply_map_coordinate(Coordinate::new(40.5897, 49.6686));

        let init = geo.begin_load("pk.test-token").unwrap();
        assert_eq!(init.center, Coordinate::new(40.5897, 49.6686));
        assert!(matches!(geo.map_state(), MapState::Loading { .. }));
    }

    #[test]
    fn empty_token_refuses_to_load() {
        let mut geo = editor();
        assert!(geo.begin_load("  ").is_err());
        assert_eq!(*geo.map_state(), MapState::Idle);
    }

    #[test]
    fn failure_surfaces_advisory_and_keeps_text_channel() {
        let mut geo = editor();
        let init = geo.begin_load("pk.bad-token").unwrap();

        let advisory = geo.resolve_load(init.attempt, Err("401 Unauthorized".into()));
        assert!(advisory.is_some());
        assert!(matches!(geo.map_state(), MapState::Failed { .. }));

        // Coordinates stay defined and editable.
        geo.set_lat(40.0);
        geo.set_lng(49.0);
        assert_eq!(geo.coordinate(), Coordinate::new(40.0, 49.0));
    }

    #[test]
    fn stale_callback_from_superseded_attempt_is_ignored() {
        let mut geo = editor();
        let first = geo.begin_load("pk.first").unwrap();
        let second = geo.begin_load("pk.second").unwrap();

        // The superseded attempt reports failure late: dropped.
        assert!(geo.resolve_load(first.attempt, Err("timeout".into())).is_none());
        assert!(matches!(geo.map_state(), MapState::Loading { .. }));

        // The live attempt still resolves normally.
        assert!(geo.resolve_load(second.attempt, Ok(())).is_none());
        assert_eq!(*geo.map_state(), MapState::Ready);
    }

    #[test]
    fn retry_after_failure_supersedes() {
        let mut geo = editor();
        let first = geo.begin_load("pk.bad").unwrap();
        geo.resolve_load(first.attempt, Err("401".into()));

        let retry = geo.begin_load("pk.good").unwrap();
        assert!(retry.attempt > first.attempt);
        geo.resolve_load(retry.attempt, Ok(()));
        assert_eq!(*geo.map_state(), MapState::Ready);
    }
}
