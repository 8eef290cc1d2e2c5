pub mod env_validator;
pub mod log_redact;
pub mod logging;
