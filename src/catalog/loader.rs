use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Deserialize;

use crate::error::AppError;
use crate::utils::debug_enabled;

use super::builtin::BUILTIN_CATALOG;
use super::db::Catalog;
use super::types::ProviderRecord;

/// A catalog file holds either one provider or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum ProviderFile {
    Many(Vec<ProviderRecord>),
    One(ProviderRecord),
}

impl ProviderFile {
    fn into_records(self) -> Vec<ProviderRecord> {
        match self {
            ProviderFile::Many(records) => records,
            ProviderFile::One(record) => vec![record],
        }
    }
}

fn parse_records(content: &str, origin: &str) -> Result<Vec<ProviderRecord>, AppError> {
    serde_json::from_str::<ProviderFile>(content)
        .map(ProviderFile::into_records)
        .map_err(|source| AppError::Json {
            path: origin.to_string(),
            source,
        })
}

fn load_file(path: &Path) -> Result<Vec<ProviderRecord>, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_records(&content, &path.display().to_string())
}

/// Load every `*.json` file in `dir`, concatenated in path order.
fn load_dir(dir: &Path) -> Result<Vec<ProviderRecord>, AppError> {
    let pattern = format!(
        "{}/*.json",
        glob::Pattern::escape(&dir.to_string_lossy())
    );

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry.map_err(|e| AppError::Read {
            path: e.path().display().to_string(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(AppError::EmptyCatalogDir {
            path: dir.display().to_string(),
        });
    }

    let mut records = Vec::new();
    for file in &files {
        records.extend(load_file(file)?);
    }
    Ok(records)
}

/// Load the provider catalog from `path`, or the built-in table when `None`.
///
/// `path` may name a JSON file or a directory of JSON files.
pub(crate) fn load_catalog(path: Option<&Path>, quiet: bool) -> Result<Catalog, AppError> {
    let start = Instant::now();

    let (records, origin) = match path {
        None => (
            parse_records(BUILTIN_CATALOG, "built-in catalog")?,
            "built-in catalog".to_string(),
        ),
        Some(dir) if dir.is_dir() => (load_dir(dir)?, dir.display().to_string()),
        Some(file) => (load_file(file)?, file.display().to_string()),
    };

    let catalog = Catalog::new(records);

    if !quiet {
        eprintln!(
            "Loaded {} providers ({} models) from {}",
            catalog.len(),
            catalog.model_count(),
            origin
        );
        if catalog.shadowed() > 0 {
            eprintln!(
                "Warning: ignored {} duplicate provider entries (first entry wins)",
                catalog.shadowed()
            );
        }
    }
    if debug_enabled() {
        eprintln!(
            "[debug] catalog load took {:.2}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn builtin_catalog_parses() {
        let catalog = load_catalog(None, true).unwrap();
        assert!(catalog.len() > 0);
        assert!(catalog.provider("openai").is_some());
        assert_eq!(catalog.shadowed(), 0);
    }

    #[test]
    fn load_single_file_array() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(
            tmp.path(),
            "catalog.json",
            r#"[{"id": "openai", "chatModels": [{"id": "gpt-4o"}]}, {"id": "groq"}]"#,
        );
        let catalog = load_catalog(Some(&path), true).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.providers()[0].id, "openai");
    }

    #[test]
    fn load_single_file_object() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "openai.json", r#"{"id": "openai"}"#);
        let catalog = load_catalog(Some(&path), true).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn load_directory_in_path_order() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "20-openai.json", r#"{"id": "openai"}"#);
        write(
            tmp.path(),
            "10-anthropic.json",
            r#"[{"id": "anthropic"}, {"id": "bedrock"}]"#,
        );
        write(tmp.path(), "notes.txt", "not a catalog");

        let catalog = load_catalog(Some(tmp.path()), true).unwrap();
        let ids: Vec<_> = catalog.providers().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["anthropic", "bedrock", "openai"]);
    }

    #[test]
    fn directory_duplicates_keep_earliest_file() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "a.json",
            r#"{"id": "openai", "chatModels": [{"id": "gpt-4o"}]}"#,
        );
        write(
            tmp.path(),
            "b.json",
            r#"{"id": "openai", "chatModels": [{"id": "gpt-3.5-turbo"}]}"#,
        );
        let catalog = load_catalog(Some(tmp.path()), true).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.shadowed(), 1);
        assert_eq!(catalog.provider("openai").unwrap().chat_models[0].id, "gpt-4o");
    }

    #[test]
    fn empty_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_catalog(Some(tmp.path()), true).unwrap_err();
        assert!(matches!(err, AppError::EmptyCatalogDir { .. }));
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_catalog(Some(&tmp.path().join("nope.json")), true).unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "broken.json", r#"[{"id": "openai""#);
        let err = load_catalog(Some(&path), true).unwrap_err();
        assert!(matches!(err, AppError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
