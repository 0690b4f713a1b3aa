//! Selection controller: the single source of truth for the highlighted course
//!
//! The controller owns the current [`Selection`] and two injected collaborators:
//! a [`Location`] holding the externally visible fragment (`#cs2150` or empty),
//! and exactly one [`SelectionListener`] (the view). Every transition updates the
//! state, then the fragment, then notifies the listener, all inside one `&mut self`
//! call, so no caller can observe a half-applied selection.

use super::error::SelectionError;
use super::models::{Catalog, Course};
use crate::{debug, info, warn};

/// Current selection state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No course is highlighted
    #[default]
    NoneSelected,
    /// The course with this id is highlighted
    Selected(String),
}

impl Selection {
    /// Id of the selected course, if any
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::NoneSelected => None,
            Self::Selected(id) => Some(id),
        }
    }
}

/// Events the view forwards to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A course node was clicked
    NodeClicked(String),
    /// Empty canvas was clicked
    BackgroundClicked,
}

/// Durable home of the selection, e.g. a URL fragment
pub trait Location {
    /// Current fragment, `"#<id>"` or empty
    fn fragment(&self) -> &str;

    /// Replace the fragment
    fn set_fragment(&mut self, fragment: &str);
}

/// In-memory [`Location`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    fragment: String,
}

impl MemoryLocation {
    /// Create a location starting at `fragment`
    #[must_use]
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
        }
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> &str {
        &self.fragment
    }

    fn set_fragment(&mut self, fragment: &str) {
        fragment.clone_into(&mut self.fragment);
    }
}

/// Receiver of selection changes
pub trait SelectionListener {
    /// Called after every transition with the selected course, or `None` when cleared
    fn selection_changed(&mut self, course: Option<&Course>);
}

impl<F> SelectionListener for F
where
    F: FnMut(Option<&Course>),
{
    fn selection_changed(&mut self, course: Option<&Course>) {
        self(course);
    }
}

/// Fragment written for a selected course
#[must_use]
pub fn fragment_for(id: &str) -> String {
    format!("#{id}")
}

/// Course id named by a fragment; `None` for an empty fragment
///
/// Accepts the fragment with or without its leading `#`.
#[must_use]
pub fn id_from_fragment(fragment: &str) -> Option<&str> {
    let id = fragment.trim();
    let id = id.strip_prefix('#').unwrap_or(id).trim();
    (!id.is_empty()).then_some(id)
}

/// Owns the selection and keeps location and listener in sync with it
pub struct SelectionController<'a, L: Location, V: SelectionListener> {
    catalog: &'a Catalog,
    location: L,
    listener: V,
    state: Selection,
}

impl<'a, L: Location, V: SelectionListener> SelectionController<'a, L, V> {
    /// Create a controller in the `NoneSelected` state
    ///
    /// Nothing is written to the location or listener until the first transition;
    /// call [`restore_from_location`](Self::restore_from_location) at startup.
    pub const fn new(catalog: &'a Catalog, location: L, listener: V) -> Self {
        Self {
            catalog,
            location,
            listener,
            state: Selection::NoneSelected,
        }
    }

    /// Current state
    pub const fn state(&self) -> &Selection {
        &self.state
    }

    /// The selected course, if any
    pub fn selected(&self) -> Option<&'a Course> {
        self.state.id().and_then(|id| self.catalog.get(id))
    }

    /// Select a course by id
    ///
    /// # Errors
    /// Returns [`SelectionError::UnknownCourse`] if the catalog has no such id;
    /// state, location and listener are left untouched.
    pub fn select(&mut self, id: &str) -> Result<&'a Course, SelectionError> {
        let catalog = self.catalog;
        let course = catalog
            .get(id)
            .ok_or_else(|| SelectionError::UnknownCourse(id.to_string()))?;
        self.enter(Some(course));
        Ok(course)
    }

    /// Drop the selection unconditionally
    pub fn clear(&mut self) {
        self.enter(None);
    }

    /// Restore the selection from a startup fragment
    ///
    /// A fragment naming a catalog course behaves like [`select`](Self::select);
    /// an empty or unknown fragment leaves nothing selected.
    pub fn restore_from_location(&mut self, fragment: &str) -> Option<&'a Course> {
        match id_from_fragment(fragment) {
            Some(id) => match self.select(id) {
                Ok(course) => Some(course),
                Err(err) => {
                    warn!("Ignoring location fragment '{fragment}': {err}");
                    self.clear();
                    None
                }
            },
            None => {
                self.clear();
                None
            }
        }
    }

    /// Restore from whatever fragment the injected location currently holds
    pub fn restore(&mut self) -> Option<&'a Course> {
        let fragment = self.location.fragment().to_string();
        self.restore_from_location(&fragment)
    }

    /// Apply a view event
    ///
    /// # Errors
    /// Returns [`SelectionError::UnknownCourse`] if a clicked node is not in the catalog
    pub fn handle(&mut self, event: ViewEvent) -> Result<(), SelectionError> {
        match event {
            ViewEvent::NodeClicked(id) => self.select(&id).map(|_| ()),
            ViewEvent::BackgroundClicked => {
                self.clear();
                Ok(())
            }
        }
    }

    fn enter(&mut self, course: Option<&'a Course>) {
        match course {
            Some(course) => {
                info!("Selected course {}", course.id);
                self.state = Selection::Selected(course.id.clone());
                self.location.set_fragment(&fragment_for(&course.id));
            }
            None => {
                debug!("Selection cleared");
                self.state = Selection::NoneSelected;
                self.location.set_fragment("");
            }
        }
        self.listener.selection_changed(course);
    }

    /// The injected location
    pub const fn location(&self) -> &L {
        &self.location
    }

    /// The injected listener
    pub const fn listener(&self) -> &V {
        &self.listener
    }

    /// Mutable access to the listener, e.g. to drive a viewport animation
    pub fn listener_mut(&mut self) -> &mut V {
        &mut self.listener
    }

    /// Catalog the controller resolves ids against
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Give back the location and listener
    pub fn into_parts(self) -> (L, V) {
        (self.location, self.listener)
    }
}
