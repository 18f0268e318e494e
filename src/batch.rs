use std::fs::{self, File};

use log::{info, warn};

use crate::error::ConvertError;
use crate::layout::{OutputLayout, is_pseudo_entry};
use crate::report::{BatchReport, InvocationRecord};
use crate::settings::ToolSettings;
use crate::tools::{Invocation, ToolOutcome, ToolRunner, animation_invocation, skeleton_invocation};

/// Extracts the skeleton once, then one animation per input directory entry.
pub struct BatchConverter {
    settings: ToolSettings,
    layout: OutputLayout,
    strict: bool,
}

impl BatchConverter {
    pub fn new(settings: ToolSettings, layout: OutputLayout) -> Self {
        Self {
            settings,
            layout,
            strict: false,
        }
    }

    /// Abort on the first tool that fails to spawn or exits unsuccessfully.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn run(&self, runner: &mut dyn ToolRunner) -> Result<BatchReport, ConvertError> {
        let mut report = BatchReport {
            skeleton: self.layout.skeleton_path().display().to_string(),
            archive: self.layout.archive_path().display().to_string(),
            ..Default::default()
        };

        let skeleton = skeleton_invocation(&self.settings, &self.layout);
        let outcome = self.invoke(runner, &skeleton)?;
        report.skeleton_run = Some(InvocationRecord::new(&skeleton, "skeleton", outcome));

        // Created empty, the handle is dropped at the end of this scope.
        {
            let archive = self.layout.archive_path();
            let _archive =
                File::create(&archive).map_err(|e| ConvertError::create_archive(&archive, e))?;

            let input_dir = &self.layout.input_dir;
            let entries =
                fs::read_dir(input_dir).map_err(|e| ConvertError::read_input_dir(input_dir, e))?;

            for entry in entries {
                let entry = entry.map_err(|e| ConvertError::read_dir_entry(input_dir, e))?;
                let name = entry.file_name();
                if is_pseudo_entry(&name) {
                    continue;
                }

                let animation = animation_invocation(&self.settings, &self.layout, &name);
                let outcome = self.invoke(runner, &animation)?;
                report.animations.push(InvocationRecord::new(&animation, "animation", outcome));
            }
        }

        info!(
            "converted {} animation(s) into {}, {} tool failure(s)",
            report.animations.len(),
            self.layout.output_dir.display(),
            report.failures()
        );
        Ok(report)
    }

    fn invoke(
        &self,
        runner: &mut dyn ToolRunner,
        invocation: &Invocation,
    ) -> Result<ToolOutcome, ConvertError> {
        info!("{}", invocation.command_line());
        let outcome = runner.run(invocation);
        match &outcome {
            ToolOutcome::Exited { success: true, .. } => {}
            ToolOutcome::Exited { code, .. } => {
                if self.strict {
                    return Err(ConvertError::tool_failed(&invocation.program, *code));
                }
                match code {
                    Some(code) => warn!("{} exited with {}", invocation.program, code),
                    None => warn!("{} was killed by a signal", invocation.program),
                }
            }
            ToolOutcome::SpawnFailed { reason } => {
                if self.strict {
                    return Err(ConvertError::tool_spawn(&invocation.program, reason));
                }
                warn!("could not run {}: {}", invocation.program, reason);
            }
        }
        Ok(outcome)
    }
}
