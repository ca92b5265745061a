/// Every user-facing and log-facing message taskd emits.
///
/// Text lives in [`super::display`]; call sites only pick a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted,
    TaskDeletedWithId(i64),
    TaskNotFound,
    TaskCreateFailed,
    TaskFetchFailed,
    TasksFetchFailed,
    TasksListed(usize),
    InvalidTaskBody(String),

    // === DATABASE MESSAGES ===
    DbOpened(String),      // path
    DbQueryFailed(String), // error
    DbInitFailed(String),  // error
    DbSchemaReady(i64),    // existing rows

    // === CONFIGURATION MESSAGES ===
    ConfigLoaded(String),
    ConfigFileNotFound(String),
    ConfigParseError(String),
    ConfigSaved(String),

    // === SERVER MESSAGES ===
    ServerStarting(String), // address
    ServerBindFailed(String),
    ServerStopped,
    ShutdownSignalReceived,
    ShutdownSignalFailed(String), // error
}
