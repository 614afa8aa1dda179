//! Known dictionary locations on a developer workstation

use crate::{files_lookup, Error, Result};
use dictmerge_core::PathResolver;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Spell checker state files kept by JetBrains IDEs in their vendor directory
pub const IDEA_CACHE_FILES: [&str; 2] = ["spellchecker-dictionary.xml", "cachedDictionary.xml"];

/// Plain-text dictionaries that live inside project trees
pub const PROJECT_PLAINTEXT_FILES: [&str; 2] = ["dictionary.dic", "UserWords.txt"];

/// Visual Assist / newer IDEA user word list
pub const USER_WORDS_FILE: &str = "UserWords.txt";

/// Discovery rooted at a projects directory
#[derive(Debug, Clone)]
pub struct DictionaryLookup {
    projects_dir: PathBuf,
    resolver: PathResolver,
}

impl DictionaryLookup {
    /// Fails if `projects_dir` is not an existing directory
    pub fn new(projects_dir: impl Into<PathBuf>, resolver: PathResolver) -> Result<Self> {
        let projects_dir = projects_dir.into();
        if !projects_dir.is_dir() {
            warn!("Directory {} does not exist", projects_dir.display());
            return Err(Error::NotADirectory { path: projects_dir });
        }
        Ok(Self {
            projects_dir,
            resolver,
        })
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    /// IDEA XML dictionaries: `{name}.xml` in the project tree plus the IDE
    /// cache files. `name` falls back to the current user name.
    pub fn lookup_structured(&self, dict_name: Option<&str>) -> Vec<PathBuf> {
        let dict_name = match dict_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.resolver.user_name(),
        };

        let mut found = files_lookup(&self.projects_dir, &[format!("{dict_name}.xml")]);
        found.extend(idea_cache_dictionaries(&self.resolver));

        debug!("Found following dictionaries: {:?}", found);
        found
    }

    /// Plain-text dictionaries in the project tree and application data,
    /// always followed by the system dictionary (created empty if absent).
    pub fn lookup_plaintext(&self) -> Result<Vec<PathBuf>> {
        let mut found = files_lookup(&self.projects_dir, &PROJECT_PLAINTEXT_FILES);
        found.extend(user_words_dictionaries(&self.resolver));

        let system_dict = self.resolver.system_dictionary_path();
        ensure_system_dictionary(&system_dict)?;
        found.push(system_dict);

        debug!("Found following dictionaries: {:?}", found);
        Ok(found)
    }

    /// Structured then plain-text results, not deduplicated
    pub fn lookup(&self) -> Result<Vec<PathBuf>> {
        let mut found = self.lookup_structured(None);
        found.extend(self.lookup_plaintext()?);
        Ok(found)
    }

    /// Discovery without a project root: IDE cache files and user word lists
    /// in application data only. Never creates files.
    pub fn lookup_appdata(resolver: &PathResolver) -> Vec<PathBuf> {
        let mut found = idea_cache_dictionaries(resolver);
        found.extend(user_words_dictionaries(resolver));
        debug!("Found following dictionaries: {:?}", found);
        found
    }
}

fn idea_cache_dictionaries(resolver: &PathResolver) -> Vec<PathBuf> {
    match resolver.jetbrains_appdata() {
        Some(dir) => files_lookup(&dir, &IDEA_CACHE_FILES),
        None => Vec::new(),
    }
}

fn user_words_dictionaries(resolver: &PathResolver) -> Vec<PathBuf> {
    files_lookup(Path::new(&resolver.appdata_dir()), &[USER_WORDS_FILE])
}

fn ensure_system_dictionary(path: &Path) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, "")?;
    info!("Created empty system dictionary {}", path.display());
    Ok(())
}
