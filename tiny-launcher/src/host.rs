use std::fmt::Display;
use std::fmt::Formatter;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;

/// The Windows Script Host binary, looked up through the executable search path
pub const SCRIPT_HOST: &str = "wscript.exe";
/// Suppresses the script host banner
pub const NO_BANNER_FLAG: &str = "//nologo";

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Wrap a value in double quotes. Embedded quotes are left as they are.
#[must_use]
pub fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

/// A single request to run a script through the script host
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HostInvocation {
    script: PathBuf,
    file: String,
}

impl HostInvocation {
    pub fn new(script: PathBuf, file: impl Into<String>) -> Self {
        Self {
            script,
            file: file.into(),
        }
    }

    #[must_use]
    pub const fn program(&self) -> &'static str {
        SCRIPT_HOST
    }

    #[must_use]
    pub fn script(&self) -> &Path {
        &self.script
    }

    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[must_use]
    pub fn quoted_file(&self) -> String {
        quote(&self.file)
    }

    /// The argument string handed to the script host, e.g.
    /// `//nologo "C:\tools\open-in-nvim.vbs" "C:\notes\todo.txt"`
    #[must_use]
    pub fn command_line(&self) -> String {
        format!(
            "{NO_BANNER_FLAG} {} {}",
            quote(&self.script.display().to_string()),
            self.quoted_file()
        )
    }
}

impl Display for HostInvocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.program(), self.command_line())
    }
}

pub trait Spawn {
    /// Start the invocation without waiting on it
    fn spawn(&self, invocation: &HostInvocation) -> io::Result<()>;
}

/// Starts the script host as a windowless child and forgets about it
#[derive(Copy, Clone, Debug, Default)]
pub struct DetachedSpawner;

impl Spawn for DetachedSpawner {
    fn spawn(&self, invocation: &HostInvocation) -> io::Result<()> {
        let mut command = Command::new(invocation.program());
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // The command line is pre-quoted, so it must reach the script host untouched
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;

            command
                .creation_flags(CREATE_NO_WINDOW)
                .raw_arg(invocation.command_line());
        }

        #[cfg(not(windows))]
        {
            command
                .arg(NO_BANNER_FLAG)
                .arg(invocation.script())
                .arg(invocation.file());
        }

        // Dropping the handle neither kills nor waits on the child
        let _child = command.spawn()?;

        Ok(())
    }
}
