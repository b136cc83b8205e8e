use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::asset_resolver::AssetResolver;
use crate::file_utils::FileManager;
use crate::filters;
use crate::models::{Catalog, Character, CharacterSource, GroupDefinition, ImageHint, Lang};
use crate::name_utils;
use crate::stamps;
use crate::translation_store;

// @module: Catalog orchestration

// Input and output locations under the data directory
const CHAR_DATA_FILE: &str = "data/char_data.json";
const CLUBS_FILE: &str = "manual/clubs.yaml";
const SCHOOLS_FILE: &str = "manual/schools.yaml";
const TRANSLATION_STORE_FILE: &str = "lang/char.yaml";
const NO_SCHOOL_REPORT_FILE: &str = "manual/noschool.generated.txt";
const NO_CLUB_REPORT_FILE: &str = "manual/noclub.generated.txt";

/// Main catalog builder for the data-preparation pipeline
pub struct CatalogBuilder {
    // @field: App configuration
    config: Config,
}

impl CatalogBuilder {
    // @method: Create a new builder with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run the full pipeline and return the in-memory catalog
    ///
    /// Translation-store and diagnostic writes happen as side effects; a
    /// fatal data error aborts before any output is finalized.
    pub fn run(&self) -> Result<Catalog> {
        let start_time = std::time::Instant::now();

        let (characters, avatar_files, image_config) = self.build_characters()?;
        let stamps = stamps::list_stamps(&self.config.res_root)?;
        let filters = filters::build_filters(&self.config.data_dir)?;

        info!(
            "Catalog built in {:.2?}: {} characters, {} avatars, {} stamps, {} filter groups",
            start_time.elapsed(),
            characters.len(),
            avatar_files.len(),
            stamps.len(),
            filters.len()
        );

        Ok(Catalog {
            characters,
            avatar_files,
            image_config,
            stamps,
            filters,
        })
    }

    /// Load, merge, and normalize the character records
    #[allow(clippy::type_complexity)]
    fn build_characters(
        &self,
    ) -> Result<(
        Vec<Character>,
        BTreeMap<String, PathBuf>,
        BTreeMap<PathBuf, ImageHint>,
    )> {
        let data_dir = &self.config.data_dir;

        let char_data_path = data_dir.join(CHAR_DATA_FILE);
        let char_data: Vec<CharacterSource> = FileManager::read_json(&char_data_path)
            .with_context(|| format!("Failed to load character data: {:?}", char_data_path))?;
        debug!("Loaded {} character records", char_data.len());

        let club_data: Vec<GroupDefinition> = FileManager::read_yaml(data_dir.join(CLUBS_FILE))?;
        let school_data: Vec<GroupDefinition> = FileManager::read_yaml(data_dir.join(SCHOOLS_FILE))?;

        let store_path = data_dir.join(TRANSLATION_STORE_FILE);
        let existing = translation_store::load_translations(&store_path)?;
        let (translations, changed) = translation_store::merge_translations(&existing, &char_data);

        let mut resolver = AssetResolver::new(data_dir, &self.config.res_root)?;

        let mut result = Vec::new();
        let mut chars_without_school: Vec<Character> = Vec::new();
        let mut chars_without_club: Vec<Character> = Vec::new();

        for data in &char_data {
            let trans = translations
                .get(&data.id)
                .ok_or_else(|| anyhow!("Translation missing after merge: {}", data.id))?;

            let short_names = name_utils::derive_short_names(trans.short_name.as_ref(), &trans.name);

            let mut groups: Vec<String> = club_data
                .iter()
                .chain(school_data.iter())
                .filter(|gp| gp.contains(&data.id))
                .map(|gp| gp.id.clone())
                .collect();
            groups.sort();

            let images = resolver.resolve_images(data)?;

            let character = Character {
                id: data.id.clone(),
                names: trans.name.clone(),
                short_names,
                relations: Vec::new(),
                images,
                groups,
            };

            if !school_data.iter().any(|gp| gp.contains(&data.id)) {
                chars_without_school.push(character.clone());
            }
            if !club_data.iter().any(|gp| gp.contains(&data.id)) {
                chars_without_club.push(character.clone());
            }
            result.push(character);
        }

        if changed {
            translation_store::save_translations(&store_path, &translations)?;
        }

        write_report(&data_dir.join(NO_SCHOOL_REPORT_FILE), &chars_without_school)?;
        write_report(&data_dir.join(NO_CLUB_REPORT_FILE), &chars_without_club)?;

        let (avatar_files, image_config) = resolver.into_parts();
        Ok((result, avatar_files, image_config))
    }
}

/// Write a missing-membership diagnostic report
///
/// One block per character: id, Japanese name, first sorted image name,
/// separated by blank lines. Always overwritten, even when empty.
fn write_report(path: &Path, characters: &[Character]) -> Result<()> {
    let mut content = String::new();
    for ch in characters {
        let ja_name = ch.names.get(&Lang::Ja).map(String::as_str).unwrap_or("");
        let first_image = ch.images.first().map(String::as_str).unwrap_or("");
        writeln!(content, "{}\n  {}\n  {}\n", ch.id, ja_name, first_image)?;
    }

    FileManager::write_to_file(path, &content)
}
