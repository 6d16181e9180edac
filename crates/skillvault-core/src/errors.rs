use skillvault_core_types::RequestId;
use thiserror::Error;

/// Result type alias using SkillVaultError
pub type Result<T> = std::result::Result<T, SkillVaultError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Catalog loading
    InvalidInput,
    MissingField,
    InvalidFieldType,
    DuplicateId,

    // Lookup / state
    NotFound,
    InvariantViolation,

    // Environment
    DownloadFailed,
    Config,
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidFieldType => "ERR_INVALID_FIELD_TYPE",
            ExErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::DownloadFailed => "ERR_DOWNLOAD_FAILED",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the record
/// position and field name when the failure comes from the catalog loader.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    index: Option<usize>,
    field: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            index: None,
            field: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add certificate ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add catalog record index context
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Add field name context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (certificate_id: {})", entity_id)?;
        }
        if let Some(index) = self.index {
            write!(f, " (index: {})", index)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for SkillVault operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkillVaultError {
    // ===== Catalog Loading =====
    /// Catalog document is not valid JSON or not a JSON array
    #[error("Catalog parse error: {message}")]
    CatalogParse { message: String },

    /// A catalog entry is not a JSON object
    #[error("Catalog entry {index} is not an object")]
    NotAnObject { index: usize },

    /// A required field is absent from a catalog entry
    #[error("Catalog entry {index} is missing required field '{field}'")]
    MissingField { index: usize, field: String },

    /// A field is present but has the wrong JSON type
    #[error("Catalog entry {index} field '{field}' must be {expected}")]
    InvalidFieldType {
        index: usize,
        field: String,
        expected: String,
    },

    /// Two catalog entries share an id
    #[error("Duplicate certificate id '{id}' at entry {index} (first seen at entry {first_index})")]
    DuplicateCertificateId {
        id: String,
        first_index: usize,
        index: usize,
    },

    // ===== Lookup =====
    /// Certificate not found in the catalog
    #[error("Certificate not found: {id}")]
    CertificateNotFound { id: String },

    /// The selection holds a certificate that is not in the catalog
    #[error("Selected certificate is not in the catalog: {id}")]
    StaleSelection { id: String },

    // ===== Environment =====
    /// The download trigger could not deliver the file
    #[error("Download of {url} failed: {message}")]
    Download { url: String, message: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Filesystem error
    #[error("IO error: {message}")]
    Io { message: String },
}

impl From<SkillVaultError> for ExError {
    fn from(err: SkillVaultError) -> Self {
        match err {
            SkillVaultError::CatalogParse { message } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("load_catalog")
                .with_message(message),

            SkillVaultError::NotAnObject { index } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("load_catalog")
                .with_index(index)
                .with_message("Catalog entry is not an object"),

            SkillVaultError::MissingField { index, field } => {
                ExError::new(ExErrorKind::MissingField)
                    .with_op("load_catalog")
                    .with_index(index)
                    .with_field(field)
                    .with_message("Required field is missing")
            }

            SkillVaultError::InvalidFieldType {
                index,
                field,
                expected,
            } => ExError::new(ExErrorKind::InvalidFieldType)
                .with_op("load_catalog")
                .with_index(index)
                .with_field(field)
                .with_message(format!("Expected {}", expected)),

            SkillVaultError::DuplicateCertificateId {
                id,
                first_index,
                index,
            } => ExError::new(ExErrorKind::DuplicateId)
                .with_op("load_catalog")
                .with_entity_id(id)
                .with_index(index)
                .with_message(format!("Id already used by entry {}", first_index)),

            SkillVaultError::CertificateNotFound { id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(id)
                .with_message("Certificate not found"),

            SkillVaultError::StaleSelection { id } => {
                ExError::new(ExErrorKind::InvariantViolation)
                    .with_op("check_selection")
                    .with_entity_id(id)
                    .with_message("Selection references a certificate outside the catalog")
            }

            SkillVaultError::Download { url, message } => {
                ExError::new(ExErrorKind::DownloadFailed)
                    .with_op("download")
                    .with_message(format!("{}: {}", url, message))
            }

            SkillVaultError::Config { message } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(message),

            SkillVaultError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}
