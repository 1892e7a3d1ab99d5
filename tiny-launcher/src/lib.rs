#![warn(clippy::all)]
#![allow(clippy::missing_errors_doc, clippy::doc_markdown)]

pub use error::LauncherError;
pub use host::DetachedSpawner;
pub use host::HostInvocation;
pub use host::Spawn;
pub use identity::ExeIdentity;
pub use launcher::launch;
pub use variant::Variant;

pub mod error;
pub mod host;
pub mod identity;
pub mod launcher;
pub mod variant;

/// The variant baked in at build time through `TINY_LAUNCHER_VARIANT`.
///
/// `None` means the launcher falls back to inspecting its own file name, which
/// keeps existing `tiny-launcher-new.exe` / `tiny-launcher-current.exe` builds
/// working.
#[must_use]
pub fn configured_variant() -> Option<Variant> {
    option_env!("TINY_LAUNCHER_VARIANT").and_then(|variant| variant.parse().ok())
}
