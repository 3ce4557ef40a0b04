//! Error types for armature-scaffold

use thiserror::Error;

/// Result type alias using armature-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Stack identifier not present in the registry
    #[error("Unknown stack: {stack}. Available stacks: {available}")]
    UnknownStack { stack: String, available: String },

    /// Stack registry document missing or unreadable
    #[error("Stack registry not found: {path}")]
    RegistryNotFound { path: String },

    /// Stack configuration document missing or unreadable
    #[error("Stack configuration not found: {path}")]
    ConfigNotFound { path: String },

    /// Configuration document failed shape validation
    #[error("Invalid stack configuration {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Declared template source file is missing from the source tree
    #[error("Template source not found: {path}")]
    TemplateNotFound { path: String },

    /// Textual template failed to render (including undefined keys)
    #[error("Template rendering failed for {path}: {message}")]
    TemplateRender { path: String, message: String },

    /// Destination file or directory could not be written
    #[error("Failed to write {path}: {source}")]
    DestinationWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid project name after slugging
    #[error("Invalid project name: {name}. Must contain at least one alphanumeric character")]
    InvalidProjectName { name: String },

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Required external command is not on PATH
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// External process exited non-zero
    #[error("{command} failed: {message}")]
    ProcessFailed { command: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown stack error
    pub fn unknown_stack(stack: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownStack {
            stack: stack.into(),
            available: available.into(),
        }
    }

    /// Create a registry not found error
    pub fn registry_not_found(path: impl Into<String>) -> Self {
        Self::RegistryNotFound { path: path.into() }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a template not found error
    pub fn template_not_found(path: impl Into<String>) -> Self {
        Self::TemplateNotFound { path: path.into() }
    }

    /// Create a template render error
    pub fn template_render(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TemplateRender {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a destination write error
    pub fn destination_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::DestinationWrite {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a process failed error
    pub fn process_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProcessFailed {
            command: command.into(),
            message: message.into(),
        }
    }
}
