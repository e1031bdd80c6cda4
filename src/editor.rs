//! Typed form-draft controller.
//!
//! Every editor (discount, branch, profile) follows the same contract:
//! seed a working copy from the repository value, stage field mutations
//! on the copy only, validate the whole entity on save and commit
//! atomically or not at all. One generic controller instead of three
//! per-entity reimplementations.

use crate::advisory::Advisory;
use crate::errors::AppError;
use crate::geo::{GeoEditor, MapInit, MapState};
use crate::models::branch::{Branch, Coordinate};
use crate::validation::Validate;

pub struct FormDraft<T: Validate + Clone> {
    original: T,
    working: T,
}

impl<T: Validate + Clone> FormDraft<T> {
    /// Seed the draft from the repository's current value.
    pub fn seeded(entity: T) -> Self {
        Self {
            working: entity.clone(),
            original: entity,
        }
    }

    /// The staged working copy.
    pub fn working(&self) -> &T {
        &self.working
    }

    /// Stage a mutation on the working copy. The repository value is
    /// untouched until commit.
    pub fn edit(&mut self, mutate: impl FnOnce(&mut T)) {
        mutate(&mut self.working);
    }

    /// Validate the working copy. Returns the validated entity only when
    /// every check passes; otherwise reports all failing fields and the
    /// draft stays editable.
    pub fn commit(&self) -> Result<T, AppError> {
        let errors = self.working.validate();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(self.working.clone())
    }

    /// Discard the working copy and return the value the draft was
    /// seeded from.
    pub fn cancel(self) -> T {
        self.original
    }
}

/// Branch form controller: the generic draft plus the coordinate editor,
/// kept in lockstep so the numeric fields and the map marker never show
/// divergent coordinates at rest.
pub struct BranchEditor {
    draft: FormDraft<Branch>,
    geo: GeoEditor,
}

impl BranchEditor {
    pub fn new(branch: Branch) -> Self {
        Self {
            geo: GeoEditor::new(branch.coordinate()),
            draft: FormDraft::seeded(branch),
        }
    }

    pub fn working(&self) -> &Branch {
        self.draft.working()
    }

    /// Stage a non-coordinate field mutation.
    pub fn edit(&mut self, mutate: impl FnOnce(&mut Branch)) {
        self.draft.edit(mutate);
    }

    /// Channel A: latitude field edit — the marker reconciles on render.
    pub fn set_lat(&mut self, lat: f64) {
        self.geo.set_lat(lat);
        self.draft.edit(|b| b.lat = lat);
    }

    /// Channel A: longitude field edit.
    pub fn set_lng(&mut self, lng: f64) {
        self.geo.set_lng(lng);
        self.draft.edit(|b| b.lng = lng);
    }

    /// Channels B/C: marker drag-end or map click — both axes land in the
    /// draft as one update.
    pub fn apply_map_coordinate(&mut self, coordinate: Coordinate) {
        self.geo.apply_map_coordinate(coordinate);
        self.draft.edit(|b| b.set_coordinate(coordinate));
    }

    pub fn coordinate(&self) -> Coordinate {
        self.geo.coordinate()
    }

    pub fn map_state(&self) -> &MapState {
        self.geo.map_state()
    }

    pub fn load_map(&mut self, token: &str) -> Result<MapInit, AppError> {
        self.geo.begin_load(token)
    }

    pub fn resolve_map_load(
        &mut self,
        attempt: u64,
        result: Result<(), String>,
    ) -> Option<Advisory> {
        self.geo.resolve_load(attempt, result)
    }

    pub fn commit(&self) -> Result<Branch, AppError> {
        self.draft.commit()
    }

    pub fn cancel(self) -> Branch {
        self.draft.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_data;

    #[test]
    fn edits_stay_on_the_working_copy_until_commit() {
        let branch = seed_data().branches.remove(0);
        let mut draft = FormDraft::seeded(branch.clone());

        draft.edit(|b| b.name = "Yeni Ad".to_string());
        assert_eq!(draft.working().name, "Yeni Ad");

        // Cancel returns the seeded value unchanged.
        let restored = draft.cancel();
        assert_eq!(restored.name, branch.name);
    }

    #[test]
    fn commit_reports_every_failing_field() {
        let branch = seed_data().branches.remove(0);
        let mut draft = FormDraft::seeded(branch);

        draft.edit(|b| {
            b.name = String::new();
            b.lat = 95.0;
        });

        let err = draft.commit().unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors.fields(), vec!["name", "lat"]);
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn drag_end_reaches_the_text_fields_as_one_pair() {
        let branch = seed_data().branches.remove(0);
        let mut editor = BranchEditor::new(branch);

        editor.apply_map_coordinate(Coordinate::new(40.1, 49.9));

        // Reading the form fields yields exactly the dragged pair, never
        // an old-lat/new-lng mix.
        let working = editor.working();
        assert_eq!((working.lat, working.lng), (40.1, 49.9));
        assert_eq!(editor.coordinate(), Coordinate::new(40.1, 49.9));
    }

    #[test]
    fn field_edit_and_map_channels_converge() {
        let branch = seed_data().branches.remove(0);
        let mut editor = BranchEditor::new(branch);

        editor.set_lat(41.0);
        editor.apply_map_coordinate(Coordinate::new(40.2, 49.5));
        editor.set_lng(50.1);

        let working = editor.working();
        assert_eq!((working.lat, working.lng), (40.2, 50.1));
        assert_eq!(editor.coordinate(), Coordinate::new(40.2, 50.1));
    }

    #[test]
    fn map_failure_keeps_the_form_channel_working() {
        let branch = seed_data().branches.remove(0);
        let mut editor = BranchEditor::new(branch);

        let init = editor.load_map("pk.bad").unwrap();
        let advisory = editor.resolve_map_load(init.attempt, Err("401".into()));
        assert!(advisory.is_some());

        editor.set_lat(40.5);
        assert_eq!(editor.working().lat, 40.5);
        assert!(editor.commit().is_ok());
    }

    #[test]
    fn commit_passes_after_re_edit() {
        let branch = seed_data().branches.remove(0);
        let mut draft = FormDraft::seeded(branch);

        draft.edit(|b| b.lat = 95.0);
        assert!(draft.commit().is_err());

        draft.edit(|b| b.lat = 40.41);
        let committed = draft.commit().unwrap();
        assert_eq!(committed.lat, 40.41);
    }
}
