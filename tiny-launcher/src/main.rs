#![warn(clippy::all)]
#![cfg_attr(all(windows, feature = "no-console"), windows_subsystem = "windows")]

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use color_eyre::config::HookBuilder;
use color_eyre::config::Theme;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

use tiny_launcher::DetachedSpawner;
use tiny_launcher::ExeIdentity;
use tiny_launcher::LauncherError;
use tiny_launcher::launch;

const LOG_FILE: &str = "tiny-launcher.log";

#[derive(Parser)]
#[command(about, disable_help_flag = true, disable_version_flag = true)]
struct Opts {
    /// The file to open in Neovim; anything after it is ignored
    #[arg(value_parser = clap::value_parser!(OsString), num_args = 0..)]
    args: Vec<OsString>,
}

impl Opts {
    /// Parse the process arguments without recognising any of them as a flag
    fn from_process_args() -> Self {
        let mut args = std::env::args_os();
        let bin = args
            .next()
            .unwrap_or_else(|| OsString::from("tiny-launcher"));

        Self::parse_from(
            std::iter::once(bin)
                .chain(std::iter::once(OsString::from("--")))
                .chain(args),
        )
    }
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(std::env::temp_dir, |dir| dir.join("tiny-launcher"))
}

fn setup() -> Result<Option<WorkerGuard>> {
    if std::io::stderr().is_terminal() {
        HookBuilder::default().install()?;
    } else {
        HookBuilder::default().theme(Theme::new()).install()?;
    }

    // A launcher that cannot write its log file should still launch
    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(log_dir())
    {
        Ok(appender) => appender,
        Err(_) => return Ok(None),
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            ),
    )?;

    std::panic::set_hook(Box::new(|panic| {
        if let Some(location) = panic.location() {
            tracing::error!(
                message = %panic,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
            );
        } else {
            tracing::error!(message = %panic);
        }
    }));

    Ok(Some(guard))
}

fn main() -> ExitCode {
    let opts = Opts::from_process_args();

    // File logging worker guard has to have an assignment in the main fn to work
    let _guard = match setup() {
        Ok(guard) => guard,
        Err(error) => {
            eprintln!("Launcher error: {error:?}");
            return ExitCode::from(1);
        }
    };

    let identity = ExeIdentity::current();

    match launch(
        &opts.args,
        &identity,
        tiny_launcher::configured_variant(),
        &DetachedSpawner,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            match &error {
                LauncherError::Unexpected(report) => {
                    tracing::error!("launcher error: {report:#}");
                }
                _ => tracing::error!("{error}"),
            }

            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}
