//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_CERTIFICATE_ID: &str = "certificate_id";
pub const FIELD_FILTER_VALUE: &str = "filter_value";

// Collection sizes
pub const FIELD_CATALOG_LEN: &str = "catalog_len";
pub const FIELD_RESULT_LEN: &str = "result_len";
pub const FIELD_ACTIVE_FILTERS: &str = "active_filters";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
