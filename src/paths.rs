use std::path::{Path, PathBuf};

use anyhow::{Context, Error};

/// The filesystem locations a generator invocation is built from.
///
/// Everything is derived from the tool's own install path: the project root is
/// the parent of the directory holding the tool (it ships in `<root>/scripts`),
/// so the layout survives the project being moved or checked out anywhere.
/// None of these paths are created, read, or checked for existence here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub spec: PathBuf,
    pub output_dir: PathBuf,
    pub config: PathBuf,
}

impl ProjectPaths {
    /// Derive the layout for a tool installed at `tool_path`.
    pub fn from_tool_path(tool_path: &Path) -> Result<Self, Error> {
        let tool_dir = tool_path
            .parent()
            .context("Tool path has no containing directory")?;
        let root = tool_dir
            .parent()
            .context("Tool directory has no parent to use as the project root")?;
        Ok(Self::from_root(root.to_path_buf()))
    }

    fn from_root(root: PathBuf) -> Self {
        let spec = root.join("openapi.json");
        let output_dir = root.join("src").join("api").join("generated");
        let config = output_dir.join("config.json");
        ProjectPaths {
            root,
            spec,
            output_dir,
            config,
        }
    }

    /// Derive the layout from the running executable's location. Independent
    /// of the current working directory.
    pub fn discover() -> Result<Self, Error> {
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        Self::from_tool_path(&exe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_derived_from_tool_location() {
        let paths = ProjectPaths::from_tool_path(Path::new("/work/frontend/scripts/gen-api"))
            .expect("layout should resolve");
        assert_eq!(paths.root, Path::new("/work/frontend"));
        assert_eq!(paths.spec, Path::new("/work/frontend/openapi.json"));
        assert_eq!(paths.output_dir, Path::new("/work/frontend/src/api/generated"));
        assert_eq!(
            paths.config,
            Path::new("/work/frontend/src/api/generated/config.json")
        );
    }

    #[test]
    fn test_spec_path_is_untransformed() {
        let paths = ProjectPaths::from_tool_path(Path::new("/a/b/tool")).unwrap();
        assert_eq!(paths.spec, paths.root.join("openapi.json"));
    }

    #[test]
    fn test_tool_at_filesystem_root_is_rejected() {
        assert!(ProjectPaths::from_tool_path(Path::new("/gen-api")).is_err());
    }

    #[test]
    fn test_bare_tool_name_is_rejected() {
        assert!(ProjectPaths::from_tool_path(Path::new("gen-api")).is_err());
    }
}
