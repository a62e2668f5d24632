//! Resource and artifact version discovery.
//!
//! Resources are looked up across an ordered list of root directories,
//! the first root holding the resource wins.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::properties::parse_properties;

/// Path of the `pom.properties` resource of an artifact, relative to a root.
pub fn pom_properties_resource(group_id: &str, artifact_id: &str) -> String {
    format!("META-INF/maven/{}/{}/pom.properties", group_id, artifact_id)
}

/// Find and parse a properties resource.
///
/// Returns `None` if no root holds the resource, or if the first matching
/// resource cannot be read.
pub fn discover_properties<P: AsRef<Path>>(
    roots: &[P],
    resource_name: &str,
) -> Option<BTreeMap<String, String>> {
    for root in roots {
        let path = root.as_ref().join(resource_name);
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!("Loaded {}", path.display());
                return Some(parse_properties(&text));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                tracing::debug!("Could not read {}: {}", path.display(), e);
                return None;
            }
        }
    }
    None
}

/// Discover the version of an artifact from its `pom.properties`.
///
/// Falls back to `default_version` when the resource or its `version` key
/// is missing, or when the value is an unfiltered `${...}` placeholder.
pub fn discover_artifact_version<P: AsRef<Path>>(
    roots: &[P],
    group_id: &str,
    artifact_id: &str,
    default_version: Option<&str>,
) -> Option<String> {
    let discovered = discover_properties(roots, &pom_properties_resource(group_id, artifact_id))
        .and_then(|mut props| props.remove("version"));

    match discovered {
        Some(version) => {
            let version = version.trim();
            if version.starts_with("${") {
                default_version.map(str::to_string)
            } else {
                Some(version.to_string())
            }
        }
        None => default_version.map(str::to_string),
    }
}

/// Default resource roots: just the current working directory.
pub fn default_resource_roots() -> Vec<PathBuf> {
    std::env::current_dir().map(|d| vec![d]).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_pom_properties(root: &Path, group: &str, artifact: &str, content: &str) {
        let path = root.join(pom_properties_resource(group, artifact));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn missing_resource_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(discover_properties(&[temp.path()], "runtime-requirements.properties").is_none());
    }

    #[test]
    fn first_root_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("x.properties"), "key=first").unwrap();
        fs::write(second.path().join("x.properties"), "key=second").unwrap();

        let props = discover_properties(&[first.path(), second.path()], "x.properties").unwrap();
        assert_eq!(props["key"], "first");
    }

    #[test]
    fn later_root_used_when_earlier_lacks_resource() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(second.path().join("x.properties"), "key=second").unwrap();

        let props = discover_properties(&[first.path(), second.path()], "x.properties").unwrap();
        assert_eq!(props["key"], "second");
    }

    #[test]
    fn unreadable_resource_is_none() {
        let temp = TempDir::new().unwrap();
        // A directory where a file is expected cannot be read as text.
        fs::create_dir(temp.path().join("x.properties")).unwrap();
        assert!(discover_properties(&[temp.path()], "x.properties").is_none());
    }

    #[test]
    fn artifact_version_from_pom_properties() {
        let temp = TempDir::new().unwrap();
        write_pom_properties(
            temp.path(),
            "org.apache.maven",
            "maven-core",
            "groupId=org.apache.maven\nartifactId=maven-core\nversion= 3.9.10 \n",
        );

        let version =
            discover_artifact_version(&[temp.path()], "org.apache.maven", "maven-core", None);
        assert_eq!(version.as_deref(), Some("3.9.10"));
    }

    #[test]
    fn unfiltered_placeholder_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        write_pom_properties(temp.path(), "g", "a", "version=${project.version}\n");

        let version = discover_artifact_version(&[temp.path()], "g", "a", Some("0.0.0"));
        assert_eq!(version.as_deref(), Some("0.0.0"));
    }

    #[test]
    fn missing_artifact_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            discover_artifact_version(&[temp.path()], "g", "a", Some("1.0")).as_deref(),
            Some("1.0")
        );
        assert_eq!(discover_artifact_version(&[temp.path()], "g", "a", None), None);
    }

    #[test]
    fn missing_version_key_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        write_pom_properties(temp.path(), "g", "a", "groupId=g\n");
        assert_eq!(discover_artifact_version(&[temp.path()], "g", "a", None), None);
    }
}
