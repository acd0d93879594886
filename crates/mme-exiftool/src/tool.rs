//! The metadata tool interface and its exiftool implementation.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::{debug, trace};

use mme_model::{OperationOutcome, Standard};

use crate::config::ToolConfig;
use crate::error::{Result, ToolError};

/// Capability to rewrite a file's embedded metadata.
///
/// Both operations block until the tool has finished with the file. An
/// `Ok` outcome may still be a [`OperationOutcome::Failure`]; `Err` is
/// reserved for a broken integration.
pub trait MetadataTool {
    /// Remove every tag in `standard`'s namespace from the file.
    fn delete_namespace(&mut self, standard: Standard, path: &Path) -> Result<OperationOutcome>;

    /// Set a single tag to `value`, exactly as given.
    fn write_tag(
        &mut self,
        standard: Standard,
        tag: &str,
        value: &str,
        path: &Path,
    ) -> Result<OperationOutcome>;
}

impl<T: MetadataTool + ?Sized> MetadataTool for &mut T {
    fn delete_namespace(&mut self, standard: Standard, path: &Path) -> Result<OperationOutcome> {
        (**self).delete_namespace(standard, path)
    }

    fn write_tag(
        &mut self,
        standard: Standard,
        tag: &str,
        value: &str,
        path: &Path,
    ) -> Result<OperationOutcome> {
        (**self).write_tag(standard, tag, value, path)
    }
}

/// Command-line argument assigning `value` to `tag`.
pub fn tag_assignment(tag: &str, value: &str) -> String {
    format!("-{tag}={value}")
}

/// Rewrite exiftool's status phrases into the log's upper-case form.
pub fn prettify_status(message: &str) -> String {
    message
        .replace("Rewriting", "REWRITING:")
        .replace("Editing tags in", "EDITING TAGS IN")
}

/// Fold a multi-line channel into a single log-friendly line.
fn flatten_channel(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .replace("\r\n", "\n")
        .replace('\n', "|")
}

/// Runs the `exiftool` executable once per operation.
#[derive(Debug, Clone, Default)]
pub struct ExifTool {
    config: ToolConfig,
}

impl ExifTool {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Arguments for clearing a namespace, verbose so the tool always
    /// reports what it did.
    pub fn delete_args(&self, standard: Standard, path: &Path) -> Vec<OsString> {
        vec![
            OsString::from("-v"),
            OsString::from(format!("-{}:all=", standard.namespace())),
            path.as_os_str().to_os_string(),
        ]
    }

    /// Arguments for writing one tag. Custom namespaces load their profile
    /// first, as the tool requires `-config` to lead.
    pub fn write_args(&self, standard: Standard, tag: &str, value: &str, path: &Path) -> Vec<OsString> {
        let mut args = Vec::with_capacity(4);
        if let Some(profile) = self.config.profile_path(standard) {
            args.push(OsString::from("-config"));
            args.push(profile.into_os_string());
        }
        args.push(OsString::from(tag_assignment(tag, value)));
        args.push(path.as_os_str().to_os_string());
        args
    }

    fn invoke(&self, action: String, args: &[OsString], path: &Path) -> Result<OperationOutcome> {
        trace!(program = %self.config.program.display(), ?args, "invoking metadata tool");
        let output = Command::new(&self.config.program)
            .args(args)
            .output()
            .map_err(|source| ToolError::Spawn {
                program: self.config.program.display().to_string(),
                source,
            })?;
        let stdout = prettify_status(&flatten_channel(&output.stdout));
        let stderr = flatten_channel(&output.stderr);
        debug!(
            action = %action,
            path = %path.display(),
            status = ?output.status.code(),
            "metadata tool finished"
        );
        OperationOutcome::from_channels(&stdout, &stderr).ok_or_else(|| ToolError::Anomaly {
            action,
            path: path.to_path_buf(),
        })
    }
}

impl MetadataTool for ExifTool {
    fn delete_namespace(&mut self, standard: Standard, path: &Path) -> Result<OperationOutcome> {
        let args = self.delete_args(standard, path);
        self.invoke(standard.delete_action(), &args, path)
    }

    fn write_tag(
        &mut self,
        standard: Standard,
        tag: &str,
        value: &str,
        path: &Path,
    ) -> Result<OperationOutcome> {
        let args = self.write_args(standard, tag, value, path);
        self.invoke(standard.write_action(), &args, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn delete_args_target_namespace() {
        let tool = ExifTool::default();
        let args = tool.delete_args(Standard::Isadg, Path::new("box/a.jpg"));
        assert_eq!(strings(&args), vec!["-v", "-xmp-isadg:all=", "box/a.jpg"]);
    }

    #[test]
    fn custom_namespaces_load_profile() {
        let tool = ExifTool::new(ToolConfig::default().with_profile_dir("profiles"));
        let args = tool.write_args(Standard::Vrae, "XMP-vrae:Autor", "Ana", Path::new("a.jpg"));
        let expected_profile = PathBuf::from("profiles").join("vrae.config");
        assert_eq!(
            strings(&args),
            vec![
                "-config".to_string(),
                expected_profile.to_string_lossy().into_owned(),
                "-XMP-vrae:Autor=Ana".to_string(),
                "a.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn dublin_core_uses_builtin_namespace() {
        let tool = ExifTool::default();
        let args = tool.write_args(Standard::Dc, "dc:title", "Foo", Path::new("a.jpg"));
        assert_eq!(strings(&args), vec!["-dc:title=Foo", "a.jpg"]);
    }

    #[test]
    fn prettify_known_phrases() {
        assert_eq!(
            prettify_status("Rewriting a.jpg...|    1 image files updated|"),
            "REWRITING: a.jpg...|    1 image files updated|"
        );
        assert_eq!(
            prettify_status("======== a.jpg|Editing tags in: XMP|"),
            "======== a.jpg|EDITING TAGS IN: XMP|"
        );
    }

    #[test]
    fn flatten_joins_lines() {
        assert_eq!(flatten_channel(b"one\r\ntwo\n"), "one|two|");
        assert_eq!(flatten_channel(b""), "");
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut tool =
            ExifTool::new(ToolConfig::default().with_program(dir.path().join("no-such-tool")));
        let err = tool
            .delete_namespace(Standard::Dc, Path::new("a.jpg"))
            .unwrap_err();
        assert!(matches!(err, ToolError::Spawn { .. }));
    }
}
