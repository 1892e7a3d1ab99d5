use std::ffi::OsStr;

use color_eyre::eyre::WrapErr;
use color_eyre::eyre::eyre;

use crate::ExeIdentity;
use crate::HostInvocation;
use crate::LauncherError;
use crate::Spawn;
use crate::Variant;
use crate::host::SCRIPT_HOST;

/// Hand `args[0]` to the script selected for this launcher and start the
/// script host without waiting for it.
///
/// Every argument is taken as given, hyphen-leading ones included. A
/// `configured` variant wins over the file-name heuristic. Nothing is
/// spawned unless every check before the spawn has passed.
#[tracing::instrument(skip(args, identity, spawner))]
pub fn launch<A: AsRef<OsStr>, S: Spawn + ?Sized>(
    args: &[A],
    identity: &ExeIdentity,
    configured: Option<Variant>,
    spawner: &S,
) -> Result<HostInvocation, LauncherError> {
    let file = args.first().ok_or(LauncherError::Usage)?.as_ref();
    let file = file.to_str().ok_or_else(|| {
        eyre!(
            "file argument is not valid Unicode: {}",
            file.to_string_lossy()
        )
    })?;

    if file.trim().is_empty() {
        return Err(LauncherError::Usage);
    }

    let dir = identity.dir().ok_or(LauncherError::Resolution)?;

    let variant = configured.unwrap_or_else(|| {
        identity
            .file_name()
            .map_or(Variant::CurrentSession, Variant::from_exe_name)
    });

    tracing::info!(
        "selected {variant} variant for {:?}",
        identity.file_name().unwrap_or_default()
    );

    let script = std::path::absolute(dir.join(variant.script_name()))
        .wrap_err("could not build an absolute script path")?;

    if !script.is_file() {
        return Err(LauncherError::ScriptNotFound(script));
    }

    let invocation = HostInvocation::new(script, file);

    spawner
        .spawn(&invocation)
        .wrap_err_with(|| format!("could not start {SCRIPT_HOST}"))?;

    tracing::info!("launched: {invocation}");

    Ok(invocation)
}
