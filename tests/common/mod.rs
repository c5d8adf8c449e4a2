use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

pub struct CmdResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    pub log_path: PathBuf,
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn resolve_bin_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_arrcon") {
        return PathBuf::from(path);
    }

    let exe_name = if cfg!(windows) { "arrcon.exe" } else { "arrcon" };
    let fallback = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .and_then(|deps| deps.parent().map(PathBuf::from))
        .map(|debug_dir| debug_dir.join(exe_name));

    match fallback {
        Some(path) if path.exists() => path,
        _ => panic!("unable to resolve arrcon binary path for integration test"),
    }
}

/// Run `arrcon` with `args`, feeding `stdin` and capturing both output streams.
///
/// HOME points at an empty scratch directory so no user config leaks in.
pub fn run_cli_case(case_name: &str, args: &[&str], stdin: &str) -> CmdResult {
    run_cli_case_with_env(case_name, args, &[], stdin)
}

/// Like [`run_cli_case`], with extra environment variables set on the child.
pub fn run_cli_case_with_env(
    case_name: &str,
    args: &[&str],
    envs: &[(&str, &str)],
    stdin: &str,
) -> CmdResult {
    let root = std::env::temp_dir().join("arrcon-test-logs");
    fs::create_dir_all(&root).expect("create temp test log dir");

    let stamp = now_millis();
    let log_path = root.join(format!("{}-{stamp}.log", sanitize(case_name)));
    let home = root.join(format!("home-{}-{stamp}", sanitize(case_name)));
    fs::create_dir_all(&home).expect("create scratch home");
    let bin_path = resolve_bin_path();

    let mut child = Command::new(&bin_path)
        .args(args)
        .env("HOME", &home)
        .env("NO_COLOR", "1")
        .env_remove("ARRCON_INITIAL_CAPACITY")
        .env_remove("ARRCON_MAX_ELEMENTS")
        .env_remove("ARRCON_COLOR")
        .env_remove("ARRCON_BANNER")
        .env_remove("ARRCON_OUTPUT_FORMAT")
        .env("RUST_BACKTRACE", "1")
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn arrcon");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait for arrcon");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let mut log_content = String::new();
    log_content.push_str(&format!("case={case_name}\n"));
    log_content.push_str(&format!("bin={}\n", bin_path.display()));
    log_content.push_str(&format!("args={args:?}\n"));
    log_content.push_str(&format!("envs={envs:?}\n"));
    log_content.push_str(&format!("stdin={stdin:?}\n"));
    log_content.push_str(&format!("status={}\n", output.status));
    log_content.push_str("----- stdout -----\n");
    log_content.push_str(&stdout);
    log_content.push('\n');
    log_content.push_str("----- stderr -----\n");
    log_content.push_str(&stderr);
    log_content.push('\n');
    fs::write(&log_path, log_content).expect("write test log");

    CmdResult {
        status: output.status,
        stdout,
        stderr,
        log_path,
    }
}
