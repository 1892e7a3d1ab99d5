use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("No file argument provided.")]
    Usage,
    #[error("Could not determine executable directory.")]
    Resolution,
    #[error("VBS script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),
    #[error("Launcher error: {0:?}")]
    Unexpected(#[from] color_eyre::Report),
}

impl LauncherError {
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Unexpected(_) => 1,
            Self::Usage => 2,
            Self::Resolution => 3,
            Self::ScriptNotFound(_) => 4,
        }
    }
}
