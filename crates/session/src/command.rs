//! User actions, decoupled from whatever UI produced them.

use pipeline::{FilterCriteria, SortColumn};

/// One user action against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A filter control changed; carries the full set of criteria
    SetFilterCriteria(FilterCriteria),
    /// A column header was activated
    ToggleSort(SortColumn),
}

impl From<FilterCriteria> for Command {
    fn from(criteria: FilterCriteria) -> Self {
        Command::SetFilterCriteria(criteria)
    }
}

impl From<SortColumn> for Command {
    fn from(column: SortColumn) -> Self {
        Command::ToggleSort(column)
    }
}
