use crate::db::OrmConn;

/// Persistence gateway handed to every command.
#[derive(Clone)]
pub struct AppState {
    pub orm: OrmConn,
}
