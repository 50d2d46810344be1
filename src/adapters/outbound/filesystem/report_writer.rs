use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ExportError;
use crate::shared::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem layout for one export run: `<artifacts>/<timestamp>/`.
///
/// The timestamp is captured once per invocation and shared by the run
/// folder and every report filename inside it.
pub struct ReportWorkspace {
    artifacts_dir: PathBuf,
    run_dir: PathBuf,
    timestamp: String,
}

impl ReportWorkspace {
    /// Timestamp format shared by folder and file names.
    const TIMESTAMP_FORMAT: &'static str = "%Y%m%dT%H%M";

    pub fn new(artifacts_dir: &Path, now: DateTime<Local>) -> Self {
        let timestamp = now.format(Self::TIMESTAMP_FORMAT).to_string();
        let run_dir = artifacts_dir.join(&timestamp);
        Self {
            artifacts_dir: artifacts_dir.to_path_buf(),
            run_dir,
            timestamp,
        }
    }

    /// Creates the artifacts folder and the run folder, announcing each.
    pub fn ensure_created(&self) -> Result<()> {
        Self::create_dir_reporting(&self.artifacts_dir)?;
        Self::create_dir_reporting(&self.run_dir)?;
        Ok(())
    }

    /// Report path for one extraction target:
    /// `<artifacts>/<ts>/<name>-sbom-<ts>.csv`.
    pub fn report_path(&self, target_name: &str) -> PathBuf {
        self.run_dir
            .join(format!("{}-sbom-{}.csv", target_name, self.timestamp))
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    fn create_dir_reporting(dir: &Path) -> Result<()> {
        if dir.exists() {
            eprintln!("Folder already exists: {}", dir.display());
        } else {
            fs::create_dir_all(dir).map_err(|e| ExportError::FileWriteError {
                path: dir.to_path_buf(),
                details: e.to_string(),
            })?;
            eprintln!("Created folder: {}", dir.display());
        }
        Ok(())
    }
}

/// FileSystemWriter adapter for writing report content to a file
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(ExportError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;

        fs::write(&self.output_path, content).map_err(|e| ExportError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        eprintln!("✅ Report written: {}", self.output_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_run_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_workspace_timestamp_format() {
        let dir = TempDir::new().unwrap();
        let workspace = ReportWorkspace::new(dir.path(), fixed_run_time());
        assert_eq!(workspace.timestamp(), "20240301T1430");
    }

    #[test]
    fn test_workspace_report_path_pattern() {
        let dir = TempDir::new().unwrap();
        let workspace = ReportWorkspace::new(&dir.path().join("artifacts"), fixed_run_time());

        let path = workspace.report_path("orgA-p1");
        assert_eq!(
            path,
            dir.path()
                .join("artifacts")
                .join("20240301T1430")
                .join("orgA-p1-sbom-20240301T1430.csv")
        );
    }

    #[test]
    fn test_workspace_ensure_created_builds_both_folders() {
        let dir = TempDir::new().unwrap();
        let artifacts = dir.path().join("artifacts");
        let workspace = ReportWorkspace::new(&artifacts, fixed_run_time());

        workspace.ensure_created().unwrap();
        assert!(artifacts.is_dir());
        assert!(artifacts.join("20240301T1430").is_dir());

        // A second call is a no-op on existing folders
        workspace.ensure_created().unwrap();
    }

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("report.csv");

        let writer = FileSystemWriter::new(output_path.clone());
        let result = writer.present("a,b,c\n");

        assert!(result.is_ok());
        let written_content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(written_content, "a,b,c\n");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/report.csv");

        let writer = FileSystemWriter::new(output_path);
        let result = writer.present("a,b,c\n");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }
}
