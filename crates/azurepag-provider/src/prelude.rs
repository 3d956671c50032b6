pub use azurepag_types::error::{Error, PagResult};

pub use tracing::{debug, info, warn};

// vim: ts=4
