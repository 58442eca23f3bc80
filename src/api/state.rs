use std::sync::Arc;

use crate::catalog::Catalog;
use crate::harness::Invoker;
use crate::history::History;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub history: History,
    pub invoker: Arc<dyn Invoker>,
}
