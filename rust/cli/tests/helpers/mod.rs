//! Shared helpers for CLI integration tests.
//!
//! `CliRunner` drives `pokersum_cli::run` in-process and captures stdout,
//! stderr and the exit code. Environment overrides are restored on drop, so
//! callers must hold `#[serial]` while the runner is in use.

#![allow(dead_code)]

use std::time::{Duration, Instant};

pub const CONFIG_VARS: [&str; 5] = [
    "POKERSUM_CONFIG",
    "POKERSUM_SEED",
    "POKERSUM_SLOTS",
    "POKERSUM_ASCII",
    "POKERSUM_LIMIT",
];

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            let previous = std::env::var(key).ok();
            unsafe { std::env::set_var(key, value) };
            restores.push((key.to_string(), previous));
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CliRunner;

impl CliRunner {
    /// Clears every `POKERSUM_*` setting so runs start from defaults.
    pub fn new() -> Self {
        for key in CONFIG_VARS {
            unsafe { std::env::remove_var(key) };
        }
        CliRunner
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        let _guard = EnvGuard::apply(env);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let start = Instant::now();
        let argv: Vec<String> = std::iter::once("pokersum".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let code = pokersum_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
            duration: start.elapsed(),
        }
    }
}
