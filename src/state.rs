//! Shared state handed to every handler.

use std::sync::Arc;

use crate::application::HBnBFacade;

/// Application state cloned into each request.
///
/// Holds the single process-wide facade; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub facade: Arc<HBnBFacade>,
}

impl AppState {
    pub fn new(facade: Arc<HBnBFacade>) -> Self {
        Self { facade }
    }
}
