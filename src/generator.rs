use std::fmt;
use std::process::{Command, ExitStatus};

use anyhow::Error;

use crate::paths::ProjectPaths;

const GENERATOR_PACKAGE: &str = "@openapitools/openapi-generator-cli";
const GENERATOR_TARGET: &str = "typescript-fetch";

/// A single `npx @openapitools/openapi-generator-cli generate ...` invocation.
///
/// Paths are interpolated literally. The rendered command line carries no
/// quoting, so a path containing spaces displays exactly as passed. Execution
/// goes through an argument vector rather than a shell, so such paths still
/// reach the generator intact.
#[derive(Debug, Clone)]
pub struct GeneratorInvocation {
    program: String,
    args: Vec<String>,
}

impl GeneratorInvocation {
    pub fn new(paths: &ProjectPaths) -> Self {
        let args = vec![
            GENERATOR_PACKAGE.to_string(),
            "generate".to_string(),
            "-g".to_string(),
            GENERATOR_TARGET.to_string(),
            "-i".to_string(),
            paths.spec.display().to_string(),
            "-o".to_string(),
            paths.output_dir.display().to_string(),
            "-c".to_string(),
            paths.config.display().to_string(),
        ];
        GeneratorInvocation {
            program: "npx".to_string(),
            args,
        }
    }

    /// Spawn the generator and wait for it to finish. Stdio, environment and
    /// working directory are inherited, so the generator's own output passes
    /// through unmodified.
    pub fn run(&self) -> Result<ExitStatus, Error> {
        let status = Command::new(&self.program).args(&self.args).status()?;
        Ok(status)
    }
}

impl fmt::Display for GeneratorInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
