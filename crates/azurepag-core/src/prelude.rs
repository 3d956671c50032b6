pub use azurepag_types::error::{ApiError, ApiResult, Error, PagResult};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
