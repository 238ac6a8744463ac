//! Browse command - the interactive search screen

use crate::{
    RoboSearchError,
    backend::SearchBackend,
    controller::SearchController,
    query::QueryState,
    ui::SearchApp,
};

type Result<T> = std::result::Result<T, RoboSearchError>;

/// Open the search screen with `state` as the initial filter
///
/// Must be awaited inside a [`tokio::task::LocalSet`].
///
/// # Errors
/// Returns an error if the terminal cannot be used
pub async fn execute<B>(backend: B, backend_label: &str, state: QueryState) -> Result<()>
where
    B: SearchBackend + Clone + 'static,
{
    let app = SearchApp::new(backend, SearchController::new(state), backend_label);
    app.run().await?;
    Ok(())
}
