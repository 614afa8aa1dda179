//! End-to-end merge run: validate inputs, discover, union, write back

use crate::{merge, write_all, Error, Result};
use dictmerge_core::PathResolver;
use dictmerge_lookup::DictionaryLookup;
use dictmerge_provider::{DictionaryFormat, DictionaryProvider};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What to merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeRequest {
    /// IDEA XML dictionaries named explicitly
    pub structured: Vec<PathBuf>,
    /// Plain-text dictionaries named explicitly
    pub plaintext: Vec<PathBuf>,
    /// Project root to search; `None` restricts discovery to application data
    pub lookup_dir: Option<PathBuf>,
    /// Owner name of project XML dictionaries (`{name}.xml`)
    pub dictionary_name: Option<String>,
}

impl MergeRequest {
    /// Request with environment defaults: lookup root from `PROJECTS`,
    /// dictionary name from the current user
    pub fn with_defaults(resolver: &PathResolver) -> Self {
        let projects = resolver.projects_dir();
        let user = resolver.user_name();
        Self {
            lookup_dir: (!projects.is_empty()).then(|| PathBuf::from(projects)),
            dictionary_name: (!user.is_empty()).then_some(user),
            ..Self::default()
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Fewer than two dictionaries; nothing was read or written
    NothingToMerge { found: usize },
    /// `words` distinct words written to `providers` dictionaries
    Merged { providers: usize, words: usize },
}

pub struct MergeWorkflow {
    resolver: PathResolver,
}

impl MergeWorkflow {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    pub fn run(&self, request: &MergeRequest) -> Result<MergeOutcome> {
        // Every explicit file is checked before any provider is opened
        let mut sources = Vec::new();
        for path in &request.structured {
            sources.push(validate_explicit(DictionaryFormat::Structured, path)?);
        }
        for path in &request.plaintext {
            sources.push(validate_explicit(DictionaryFormat::PlainText, path)?);
        }
        info!("{} dictionaries to merge", sources.len());

        sources.extend(self.discover(request)?);

        let mut providers = Vec::new();
        for (format, path) in dedupe(sources) {
            providers.push(DictionaryProvider::open(format, path, false)?);
        }

        if providers.len() < 2 {
            info!(
                "Only {} dictionaries has been found, nothing to merge",
                providers.len()
            );
            return Ok(MergeOutcome::NothingToMerge {
                found: providers.len(),
            });
        }

        let merged = merge(&providers);
        info!(
            "Merge complete, size of resulting dictionary is {} words",
            merged.len()
        );
        write_all(&mut providers, &merged)?;

        Ok(MergeOutcome::Merged {
            providers: providers.len(),
            words: merged.len(),
        })
    }

    fn discover(&self, request: &MergeRequest) -> Result<Vec<(DictionaryFormat, PathBuf)>> {
        let Some(lookup_dir) = request.lookup_dir.as_deref() else {
            info!("Lookup directory not specified, lookup AppData only");
            return Ok(DictionaryLookup::lookup_appdata(&self.resolver)
                .into_iter()
                .map(|path| (DictionaryFormat::from_path(&path), path))
                .collect());
        };

        let lookup_dir = std::path::absolute(lookup_dir)?;
        info!("Lookup directory: {}", lookup_dir.display());
        let lookup = DictionaryLookup::new(lookup_dir, self.resolver.clone())?;

        let mut found: Vec<_> = lookup
            .lookup_plaintext()?
            .into_iter()
            .map(|path| (DictionaryFormat::PlainText, path))
            .collect();
        found.extend(
            lookup
                .lookup_structured(request.dictionary_name.as_deref())
                .into_iter()
                .map(|path| (DictionaryFormat::Structured, path)),
        );
        Ok(found)
    }
}

fn validate_explicit(format: DictionaryFormat, path: &Path) -> Result<(DictionaryFormat, PathBuf)> {
    let path = std::path::absolute(path)?;
    info!("User {} dictionary file: {}", format, path.display());

    if !path.is_file() {
        warn!("{} {} dict not found", path.display(), format);
        return Err(Error::MissingFile { format, path });
    }
    if std::fs::metadata(&path)?.len() == 0 {
        warn!("{} {} dict has zero size", path.display(), format);
        return Err(Error::EmptyFile { format, path });
    }
    Ok((format, path))
}

/// Keep the first occurrence of each path
fn dedupe(sources: Vec<(DictionaryFormat, PathBuf)>) -> Vec<(DictionaryFormat, PathBuf)> {
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .filter(|(_, path)| seen.insert(path.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictmerge_core::{Environment, Platform};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    const BOB_XML: &str = r#"<component name="X"><dictionary name="bob"><words><w>cat</w><w>dog</w></words></dictionary></component>"#;

    struct Fixture {
        dir: TempDir,
        workflow: MergeWorkflow,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempdir().unwrap();
            let home = dir.path().join("home");
            fs::create_dir_all(&home).unwrap();
            let env = Environment::empty()
                .with_var("HOME", home.to_str().unwrap())
                .with_var("USER", "bob");
            Self {
                workflow: MergeWorkflow::new(PathResolver::new(Platform::Other, env)),
                dir,
            }
        }

        fn file(&self, relative: &str, content: &str) -> PathBuf {
            let path = self.dir.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, content).unwrap();
            path
        }

        fn home(&self) -> PathBuf {
            self.dir.path().join("home")
        }
    }

    #[test]
    fn test_merges_explicit_files() {
        let f = Fixture::new();
        let xml = f.file("bob.xml", BOB_XML);
        let txt = f.file("words.txt", "dog\nbird\n");

        let request = MergeRequest {
            structured: vec![xml.clone()],
            plaintext: vec![txt.clone()],
            ..MergeRequest::default()
        };
        let outcome = f.workflow.run(&request).unwrap();

        assert_eq!(outcome, MergeOutcome::Merged { providers: 2, words: 3 });
        assert_eq!(fs::read_to_string(&txt).unwrap(), "bird\ncat\ndog");
        let xml_text = fs::read_to_string(&xml).unwrap();
        assert!(xml_text.contains("<component name=\"ProjectDictionaryState\">"));
        assert!(xml_text.contains("<dictionary name=\"bob\">"));
        assert!(xml_text.contains("<w>bird</w>\n      <w>cat</w>\n      <w>dog</w>"));
    }

    #[test]
    fn test_single_dictionary_is_left_alone() {
        let f = Fixture::new();
        let txt = f.file("words.txt", "zebra\napple\n");

        let request = MergeRequest {
            plaintext: vec![txt.clone()],
            ..MergeRequest::default()
        };
        let outcome = f.workflow.run(&request).unwrap();

        assert_eq!(outcome, MergeOutcome::NothingToMerge { found: 1 });
        assert_eq!(fs::read_to_string(&txt).unwrap(), "zebra\napple\n");
    }

    #[test]
    fn test_empty_explicit_file_is_rejected_before_any_write() {
        let f = Fixture::new();
        let xml = f.file("bob.xml", BOB_XML);
        let empty = f.file("empty.txt", "");

        let request = MergeRequest {
            structured: vec![xml.clone()],
            plaintext: vec![empty.clone()],
            ..MergeRequest::default()
        };
        let err = f.workflow.run(&request).unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(matches!(err, Error::EmptyFile { format: DictionaryFormat::PlainText, ref path } if *path == empty));
        assert!(err.to_string().contains("empty.txt"));
        assert_eq!(fs::read_to_string(&xml).unwrap(), BOB_XML);
    }

    #[test]
    fn test_missing_explicit_file_is_rejected() {
        let f = Fixture::new();
        let missing = f.dir.path().join("nope.xml");

        let request = MergeRequest {
            structured: vec![missing.clone()],
            ..MergeRequest::default()
        };
        let err = f.workflow.run(&request).unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(matches!(err, Error::MissingFile { format: DictionaryFormat::Structured, ref path } if *path == missing));
    }

    #[test]
    fn test_missing_lookup_directory_fails() {
        let f = Fixture::new();
        let request = MergeRequest {
            lookup_dir: Some(f.dir.path().join("no-projects")),
            ..MergeRequest::default()
        };
        let err = f.workflow.run(&request).unwrap_err();

        assert!(!err.is_invalid_argument());
        assert!(matches!(
            err,
            Error::Lookup(dictmerge_lookup::Error::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_lookup_directory_merges_discovered_dictionaries() {
        let f = Fixture::new();
        let xml = f.file("projects/app/.idea/dictionaries/bob.xml", BOB_XML);
        let words = f.file("projects/app/UserWords.txt", "bird\n");
        let other = f.file("projects/lib/dictionary.dic", "ant\n");
        let ignored = f.file("projects/app/.idea/dictionaries/carol.xml", BOB_XML);

        let request = MergeRequest {
            lookup_dir: Some(f.dir.path().join("projects")),
            dictionary_name: Some("bob".to_string()),
            ..MergeRequest::default()
        };
        let outcome = f.workflow.run(&request).unwrap();

        // UserWords.txt, dictionary.dic, the system dictionary and bob.xml
        assert_eq!(outcome, MergeOutcome::Merged { providers: 4, words: 4 });
        let system = f.home().join(".idea/dictionaries/dictionary.dic");
        for path in [&words, &other, &system] {
            assert_eq!(fs::read_to_string(path).unwrap(), "ant\nbird\ncat\ndog");
        }
        assert!(fs::read_to_string(&xml).unwrap().contains("<w>ant</w>"));
        assert_eq!(fs::read_to_string(&ignored).unwrap(), BOB_XML);
    }

    #[test]
    fn test_appdata_only_discovery() {
        let f = Fixture::new();
        let cache = f.file(
            "home/JetBrains/IntelliJIdea2024.1/options/cachedDictionary.xml",
            BOB_XML,
        );
        let words = f.file("home/VisualAssist/UserWords.txt", "emu\n");

        let outcome = f.workflow.run(&MergeRequest::default()).unwrap();

        assert_eq!(outcome, MergeOutcome::Merged { providers: 2, words: 3 });
        assert_eq!(fs::read_to_string(&words).unwrap(), "cat\ndog\nemu");
        let cache_text = fs::read_to_string(&cache).unwrap();
        assert!(cache_text.contains("<dictionary name=\"cachedDictionary\">"));
        assert!(cache_text.contains("<w>emu</w>"));
        assert!(!f.home().join(".idea/dictionaries/dictionary.dic").exists());
    }

    #[test]
    fn test_repeated_paths_count_once() {
        let f = Fixture::new();
        let txt = f.file("words.txt", "b\na\n");

        let request = MergeRequest {
            plaintext: vec![txt.clone(), txt.clone()],
            ..MergeRequest::default()
        };
        assert_eq!(
            f.workflow.run(&request).unwrap(),
            MergeOutcome::NothingToMerge { found: 1 }
        );
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let f = Fixture::new();
        let xml = f.file("bob.xml", BOB_XML);
        let txt = f.file("words.txt", "dog\nbird\n");
        let request = MergeRequest {
            structured: vec![xml.clone()],
            plaintext: vec![txt.clone()],
            ..MergeRequest::default()
        };

        f.workflow.run(&request).unwrap();
        let xml_after_first = fs::read(&xml).unwrap();
        let txt_after_first = fs::read(&txt).unwrap();

        f.workflow.run(&request).unwrap();
        assert_eq!(fs::read(&xml).unwrap(), xml_after_first);
        assert_eq!(fs::read(&txt).unwrap(), txt_after_first);
    }

    #[test]
    fn test_request_defaults_from_environment() {
        let env = Environment::empty()
            .with_var("PROJECTS", "/work")
            .with_var("USER", "alice");
        let request = MergeRequest::with_defaults(&PathResolver::new(Platform::Other, env));
        assert_eq!(request.lookup_dir, Some(PathBuf::from("/work")));
        assert_eq!(request.dictionary_name.as_deref(), Some("alice"));
        assert!(request.structured.is_empty() && request.plaintext.is_empty());

        let bare = MergeRequest::with_defaults(&PathResolver::new(Platform::Other, Environment::empty()));
        assert_eq!(bare, MergeRequest::default());
    }
}
