use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{MarketError, Result};
use crate::store::StateStore;

/// The listing page of one project, with the current cart for its item count.
pub fn run<S: StateStore>(store: &S, catalog: &Catalog, id: u32) -> Result<CmdResult> {
    let detail = catalog
        .detail(id)
        .cloned()
        .ok_or(MarketError::ProjectNotFound(id))?;
    let cart = store.load_cart()?;
    Ok(CmdResult::default().with_detail(detail).with_cart(cart))
}
