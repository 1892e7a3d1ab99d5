#[cfg(test)]
mod cli_tests {
    use std::ffi::OsStr;
    use std::path::Path;
    use std::path::PathBuf;
    use std::process::Command;
    use std::process::Output;

    use tempfile::TempDir;

    /// An install directory holding the built launcher under `exe_stem` plus
    /// the given scripts
    fn install(exe_stem: &str, scripts: &[&str]) -> (TempDir, PathBuf) {
        let dir = tempfile::Builder::new()
            .prefix("tiny-launcher-cli")
            .tempdir_in(env!("CARGO_TARGET_TMPDIR"))
            .unwrap();

        let exe = dir
            .path()
            .join(format!("{exe_stem}{}", std::env::consts::EXE_SUFFIX));

        // A hard link never leaves a writable handle around for a concurrent exec
        let built = Path::new(env!("CARGO_BIN_EXE_tiny-launcher"));
        if std::fs::hard_link(built, &exe).is_err() {
            std::fs::copy(built, &exe).unwrap();
        }

        for script in scripts {
            std::fs::write(dir.path().join(script), b"' script").unwrap();
        }

        (dir, exe)
    }

    fn run<S: AsRef<OsStr>>(dir: &TempDir, exe: &Path, args: &[S]) -> Output {
        Command::new(exe)
            .args(args)
            .env("XDG_DATA_HOME", dir.path())
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }

    #[test]
    fn test_missing_argument_exits_2() {
        let (dir, exe) = install("tiny-launcher-new", &["open-in-nvim.vbs"]);

        let output = run::<&str>(&dir, &exe, &[]);

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("No file argument provided."));
    }

    #[test]
    fn test_blank_argument_exits_2() {
        let (dir, exe) = install("tiny-launcher-new", &["open-in-nvim.vbs"]);

        let output = run(&dir, &exe, &["   "]);

        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_missing_script_exits_4() {
        let (dir, exe) = install("tiny-launcher-current", &["open-in-nvim.vbs"]);

        let output = run(&dir, &exe, &["report.md"]);

        assert_eq!(output.status.code(), Some(4));
        assert!(stderr(&output).contains("VBS script not found"));
        assert!(stderr(&output).contains("open-in-nvim-current.vbs"));
    }

    #[test]
    fn test_flag_lookalikes_are_file_arguments() {
        // No scripts installed, so reaching the script check proves the
        // argument was treated as a file
        let (dir, exe) = install("tiny-launcher-new", &[]);

        for file in ["-h", "--help", "-V", "--version", "--"] {
            let output = run(&dir, &exe, &[file]);

            assert_eq!(output.status.code(), Some(4), "{file}");
            assert!(output.stdout.is_empty(), "{file}");
            assert!(stderr(&output).contains("open-in-nvim.vbs"), "{file}");
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn test_flag_lookalike_reaches_the_script_host() {
        if which::which("wscript.exe").is_ok() {
            return;
        }

        let (dir, exe) = install("tiny-launcher-new", &["open-in-nvim.vbs"]);

        let output = run(&dir, &exe, &["-h"]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).starts_with("Launcher error: "));
        assert!(stderr(&output).contains("could not start wscript.exe"));
        assert!(!stderr(&output).contains('\u{1b}'));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_argument_exits_1() {
        use std::os::unix::ffi::OsStrExt;

        let (dir, exe) = install("tiny-launcher-new", &["open-in-nvim.vbs"]);

        let output = run(&dir, &exe, &[OsStr::from_bytes(b"notes-\xff.txt")]);

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).starts_with("Launcher error: "));
        assert!(stderr(&output).contains("not valid Unicode"));
        assert!(!stderr(&output).contains('\u{1b}'));
    }
}
