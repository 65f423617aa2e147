//! # Movie Table Session
//!
//! Explicit context object for one table on screen:
//! 1. Holds the immutable dataset (base collection + relation indices)
//! 2. Holds the mutable state: view, current criteria, sort toggles
//! 3. Applies [`Command`]s synchronously, one at a time
//!
//! A session can only be built from a loaded [`Dataset`], so there is no
//! way to filter or sort before loading has finished.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use data_loader::Dataset;
use pipeline::{apply_filters, apply_sort, FilterCriteria, SortColumn, SortOrder, SortToggles, ViewState};

use crate::command::Command;
use crate::render::{display_rows, DisplayRow, Renderer};

/// Session state for an interactive movie table
#[derive(Debug, Clone)]
pub struct MovieTableSession {
    dataset: Arc<Dataset>,
    view: ViewState,
    criteria: FilterCriteria,
    toggles: SortToggles,
    last_sort: Option<(SortColumn, SortOrder)>,
}

impl MovieTableSession {
    /// Start a session showing the whole base collection in file order.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let view = ViewState::full(&dataset);
        info!("Session started with {} movies", view.len());
        Self {
            dataset,
            view,
            criteria: FilterCriteria::default(),
            toggles: SortToggles::new(),
            last_sort: None,
        }
    }

    /// Apply one command and return the resulting view.
    pub fn dispatch(&mut self, command: Command) -> &ViewState {
        match command {
            Command::SetFilterCriteria(criteria) => self.apply_filters(criteria),
            Command::ToggleSort(column) => {
                self.toggle_sort(column);
                &self.view
            }
        }
    }

    /// Apply a command, then render the new view.
    pub fn dispatch_and_render(&mut self, command: Command, renderer: &mut impl Renderer) -> Result<()> {
        self.dispatch(command);
        self.render(renderer)
    }

    /// Recompute the view from the base collection.
    ///
    /// The result is in base order; any earlier sort is dropped.
    pub fn apply_filters(&mut self, criteria: FilterCriteria) -> &ViewState {
        self.view = apply_filters(&self.dataset, &criteria);
        debug!(
            "Filtered to {} of {} movies with {:?}",
            self.view.len(),
            self.dataset.len(),
            criteria
        );
        self.criteria = criteria;
        self.last_sort = None;
        &self.view
    }

    /// Flip the order remembered for `column` and sort by it.
    pub fn toggle_sort(&mut self, column: SortColumn) -> SortOrder {
        let order = self.toggles.toggle(column);
        self.apply_sort(column, order);
        order
    }

    /// Sort the current view in an explicit order. Toggle state is untouched.
    pub fn apply_sort(&mut self, column: SortColumn, order: SortOrder) -> &ViewState {
        apply_sort(&mut self.view, &self.dataset, column, order);
        self.last_sort = Some((column, order));
        &self.view
    }

    pub fn render(&self, renderer: &mut impl Renderer) -> Result<()> {
        renderer.render(&self.rows())
    }

    /// Display rows for the current view
    pub fn rows(&self) -> Vec<DisplayRow> {
        display_rows(&self.dataset, &self.view)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Order the next toggle of `column` will flip from
    pub fn sort_order(&self, column: SortColumn) -> Option<SortOrder> {
        self.toggles.current(column)
    }

    /// Column and order the current view is sorted by, if any
    pub fn active_sort(&self) -> Option<(SortColumn, SortOrder)> {
        self.last_sort
    }
}
