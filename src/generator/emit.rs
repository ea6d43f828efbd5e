use anyhow::Context;
use std::fs;
use std::path::PathBuf;

use crate::builder::Artifact;

/// The emission boundary: a host registering finished artifact text.
///
/// The orchestrator guarantees ids are unique within a run before they reach
/// the sink, so implementations may treat every `accept` as a fresh artifact.
pub trait ArtifactSink {
    /// Register one finished artifact.
    ///
    /// # Errors
    ///
    /// Implementations return an error when registration fails (e.g. an
    /// unwritable output directory); generation stops at the first failure.
    fn accept(&mut self, artifact: &Artifact) -> anyhow::Result<()>;
}

/// Sink writing each artifact to `<dir>/<id>.cs`.
#[derive(Debug)]
pub struct FsSink {
    dir: PathBuf,
}

impl FsSink {
    /// Create the sink, creating the output directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        Ok(Self { dir })
    }
}

impl ArtifactSink for FsSink {
    fn accept(&mut self, artifact: &Artifact) -> anyhow::Result<()> {
        let path = self.dir.join(format!("{}.cs", artifact.id));
        fs::write(&path, &artifact.text)
            .with_context(|| format!("Failed to write artifact: {}", path.display()))?;
        println!("✅ Generated {}", path.display());
        Ok(())
    }
}

/// Sink collecting artifacts in memory. Used by tests and by hosts that
/// register sources with a compilation themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Vec<Artifact>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The artifacts accepted so far, in emission order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Consume the sink, returning the collected artifacts.
    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }
}

impl ArtifactSink for MemorySink {
    fn accept(&mut self, artifact: &Artifact) -> anyhow::Result<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}
