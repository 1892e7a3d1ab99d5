use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;

/// Where the running launcher lives and what it is called
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExeIdentity {
    dir: Option<PathBuf>,
    file_name: Option<String>,
}

impl ExeIdentity {
    pub const fn new(dir: Option<PathBuf>, file_name: Option<String>) -> Self {
        Self { dir, file_name }
    }

    /// Resolve the identity of the current process.
    ///
    /// `std::env::current_exe` is tried first; if the OS cannot tell us, the
    /// first process argument is resolved instead.
    pub fn current() -> Self {
        let exe = match std::env::current_exe().and_then(dunce::canonicalize) {
            Ok(exe) => Some(exe),
            Err(error) => {
                tracing::warn!("could not resolve the current executable ({error}), falling back to argv[0]");
                std::env::args_os()
                    .next()
                    .and_then(|arg0| resolve_argv0(&arg0))
            }
        };

        exe.map_or_else(Self::default, |exe| Self::from_exe_path(&exe))
    }

    pub fn from_exe_path(exe: &Path) -> Self {
        let dir = exe
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf);

        let file_name = exe
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        tracing::debug!(
            "resolved executable {} in {:?}",
            exe.display(),
            dir.as_deref()
        );

        Self { dir, file_name }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }
}

/// Turn `argv[0]` into an absolute executable path. Bare program names are
/// looked up on the executable search path.
pub(crate) fn resolve_argv0(arg0: &OsStr) -> Option<PathBuf> {
    let path = Path::new(arg0);
    if path.as_os_str().is_empty() {
        return None;
    }

    let bare = !path.has_root() && path.components().count() == 1;

    match dunce::canonicalize(path) {
        Ok(resolved) => Some(resolved),
        Err(_) if bare => which::which(arg0).ok(),
        Err(_) => None,
    }
}
