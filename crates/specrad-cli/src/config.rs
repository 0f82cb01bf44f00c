//! TOML configuration deserialisation for solver jobs.

use serde::Deserialize;

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input section: where the matrix comes from.
#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// Path to the plain-text matrix file.
    pub matrix: String,
}

/// Solver section: iteration budget and execution mode.
#[derive(Debug, Deserialize)]
pub struct SolverConfig {
    /// Fixed number of power-iteration steps.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Execution mode: "single" or "quad". Default: "single".
    #[serde(default)]
    pub mode: SolverMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            mode: SolverMode::default(),
        }
    }
}

fn default_iterations() -> usize {
    100
}

/// Execution mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverMode {
    /// Full power iteration in one control flow.
    #[default]
    Single,
    /// Four-role quadrant protocol (one coordinator, three workers).
    Quad,
}

/// Output section.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to also save the run report as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config: JobConfig = toml::from_str("[input]\nmatrix = \"m.txt\"\n").unwrap();
        assert_eq!(config.solver.iterations, 100);
        assert_eq!(config.solver.mode, SolverMode::Single);
        assert!(!config.output.save_json);
    }

    #[test]
    fn test_quad_mode_parsed() {
        let toml_text = "[input]\nmatrix = \"m.txt\"\n[solver]\nmode = \"quad\"\niterations = 25\n";
        let config: JobConfig = toml::from_str(toml_text).unwrap();
        assert_eq!(config.solver.mode, SolverMode::Quad);
        assert_eq!(config.solver.iterations, 25);
    }
}
