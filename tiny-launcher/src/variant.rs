use strum::Display;
use strum::EnumString;

pub const NEW_INSTANCE_SCRIPT: &str = "open-in-nvim.vbs";
pub const CURRENT_SESSION_SCRIPT: &str = "open-in-nvim-current.vbs";

const NEW_INSTANCE_TOKEN: &str = "new";

/// Which Neovim session the opened file should land in
#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Variant {
    /// Start a fresh Neovim instance
    NewInstance,
    /// Hand the file to the already running Neovim session
    CurrentSession,
}

impl Variant {
    /// Pick a variant from the launcher's own file name: any case-insensitive
    /// occurrence of "new" selects [`Variant::NewInstance`].
    #[must_use]
    pub fn from_exe_name(exe_name: &str) -> Self {
        if exe_name.to_lowercase().contains(NEW_INSTANCE_TOKEN) {
            Self::NewInstance
        } else {
            Self::CurrentSession
        }
    }

    /// The script expected to sit next to the launcher for this variant
    #[must_use]
    pub const fn script_name(self) -> &'static str {
        match self {
            Self::NewInstance => NEW_INSTANCE_SCRIPT,
            Self::CurrentSession => CURRENT_SESSION_SCRIPT,
        }
    }
}
