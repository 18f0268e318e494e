use std::ffi::{OsStr, OsString};
use std::process::Command;

use log::debug;
use serde::Serialize;

use crate::layout::OutputLayout;
use crate::settings::ToolSettings;

/// One external command line, program plus argv.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append `--name=value`.
    pub fn flag(mut self, name: &str, value: impl AsRef<OsStr>) -> Self {
        let mut arg = OsString::from(format!("--{name}="));
        arg.push(value.as_ref());
        self.args.push(arg);
        self
    }

    /// Value of `--name=...`, if present.
    pub fn flag_value(&self, name: &str) -> Option<String> {
        let prefix = format!("--{name}=");
        self.args.iter().find_map(|arg| {
            arg.to_string_lossy()
                .strip_prefix(&prefix)
                .map(str::to_string)
        })
    }

    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

pub fn skeleton_invocation(settings: &ToolSettings, layout: &OutputLayout) -> Invocation {
    Invocation::new(&settings.skeleton_tool)
        .flag("file", layout.pose_file(&settings.pose_file))
        .flag("skeleton", layout.skeleton_path())
}

pub fn animation_invocation(
    settings: &ToolSettings,
    layout: &OutputLayout,
    entry: &OsStr,
) -> Invocation {
    Invocation::new(&settings.animation_tool)
        .flag("log_level", &settings.animation_log_level)
        .flag("file", layout.source_path(entry))
        .flag("skeleton", layout.skeleton_path())
        .flag("animation", layout.animation_path(entry))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolOutcome {
    /// `code` is `None` when the tool was killed by a signal.
    Exited { code: Option<i32>, success: bool },
    SpawnFailed { reason: String },
}

impl ToolOutcome {
    pub fn exited(code: Option<i32>, success: bool) -> Self {
        ToolOutcome::Exited { code, success }
    }

    pub fn spawn_failed(reason: impl Into<String>) -> Self {
        ToolOutcome::SpawnFailed {
            reason: reason.into(),
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, ToolOutcome::Exited { success: true, .. })
    }
}

pub trait ToolRunner {
    fn run(&mut self, invocation: &Invocation) -> ToolOutcome;
}

/// Runs tools as child processes with inherited stdio and waits for each.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> ToolOutcome {
        debug!("spawning {}", invocation.command_line());
        match Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
        {
            Ok(status) => ToolOutcome::exited(status.code(), status.success()),
            Err(err) => ToolOutcome::spawn_failed(err.to_string()),
        }
    }
}
