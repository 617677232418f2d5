use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, FacetValue, SelectionState};
use crate::store::StateStore;
use tracing::debug;

/// Filters the catalog with an ad hoc selection. Nothing is saved.
pub fn run(catalog: &Catalog, selection: &SelectionState) -> CmdResult {
    let view = filter::apply(catalog.records(), selection);
    debug!(matched = view.len(), total = catalog.len(), "filtered catalog");
    CmdResult::default()
        .with_listed_projects(view)
        .with_selection(selection.clone())
}

pub fn show<S: StateStore>(store: &S) -> Result<CmdResult> {
    let selection = store.load_selection()?;
    Ok(CmdResult::default().with_selection(selection))
}

/// Flips a facet value in the saved selection. Results are not recomputed.
pub fn toggle<S: StateStore>(store: &mut S, value: FacetValue) -> Result<CmdResult> {
    let mut selection = store.load_selection()?;
    let active = selection.toggle(value);
    store.save_selection(&selection)?;

    let mut result = CmdResult::default().with_selection(selection);
    let verb = if active { "Added" } else { "Removed" };
    result.add_message(CmdMessage::success(format!("{} filter: {}", verb, value)));
    Ok(result)
}

pub fn set_query<S: StateStore>(store: &mut S, query: &str) -> Result<CmdResult> {
    let mut selection = store.load_selection()?;
    selection.set_query(query);
    store.save_selection(&selection)?;

    let mut result = CmdResult::default().with_selection(selection);
    if query.is_empty() {
        result.add_message(CmdMessage::success("Search cleared"));
    } else {
        result.add_message(CmdMessage::success(format!("Search set to \"{}\"", query)));
    }
    Ok(result)
}

/// Recomputes the view from the saved selection.
pub fn apply<S: StateStore>(store: &S, catalog: &Catalog) -> Result<CmdResult> {
    let selection = store.load_selection()?;
    Ok(run(catalog, &selection))
}

/// Clears the saved selection and returns the whole catalog.
pub fn reset<S: StateStore>(store: &mut S, catalog: &Catalog) -> Result<CmdResult> {
    let mut selection = store.load_selection()?;
    let had_filters = !selection.is_empty();
    selection.reset();
    store.save_selection(&selection)?;

    let mut result = run(catalog, &selection);
    if had_filters {
        result.add_message(CmdMessage::success("Filters reset"));
    }
    Ok(result)
}
