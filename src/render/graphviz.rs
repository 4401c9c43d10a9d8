use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::dot::to_dot;
use crate::config::RenderConfig;
use crate::error::{IntentGraphError, Result};
use crate::graph::IntentGraph;

/// Files produced by a render
#[derive(Debug, Clone)]
pub struct RenderedGraph {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
}

/// Writes DOT source and drives the Graphviz `dot` program.
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// `<output_dir>/<output_name>.gv`
    pub fn source_path(&self) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}.gv", self.config.output_name))
    }

    /// `<output_dir>/<output_name>.<format>`
    pub fn output_path(&self) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}.{}", self.config.output_name, self.config.format))
    }

    /// Write the DOT source, lay it out with Graphviz and optionally open it.
    pub fn render(&self, graph: &IntentGraph, comment: &str) -> Result<RenderedGraph> {
        prepare_output_dir(&self.config.output_dir)?;

        let source_path = self.source_path();
        std::fs::write(&source_path, to_dot(graph, comment))?;
        log::debug!("Wrote DOT source to {}", source_path.display());

        let output_path = self.output_path();
        self.run_dot(&source_path, &output_path)?;
        log::info!("Rendered intent graph to {}", output_path.display());

        if self.config.view {
            open_in_viewer(&output_path)?;
        }

        Ok(RenderedGraph {
            source_path,
            output_path,
        })
    }

    fn run_dot(&self, source_path: &Path, output_path: &Path) -> Result<()> {
        let output = Command::new(&self.config.dot_binary)
            .arg(format!("-T{}", self.config.format))
            .arg("-o")
            .arg(output_path)
            .arg(source_path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                IntentGraphError::Render(format!(
                    "failed to execute {:?} (is Graphviz installed and on PATH?): {}",
                    self.config.dot_binary, e
                ))
            })?;

        if !output.status.success() {
            return Err(IntentGraphError::Render(format!(
                "{} exited with {}: {}",
                self.config.dot_binary,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}

/// Create the output directory if needed; an existing file at that path is an error.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(IntentGraphError::Render(format!(
                "output path is a file: {}",
                dir.display()
            )));
        }
    } else {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Launch the platform's default viewer for `path` without waiting for it.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = viewer_command(path);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    command.spawn().map_err(|e| {
        IntentGraphError::Render(format!("failed to open {}: {}", path.display(), e))
    })?;
    log::debug!("Opened {} in the default viewer", path.display());
    Ok(())
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}
