use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::errors::CatalogError;
use crate::file_utils::FileManager;
use crate::models::{CharacterSource, CropAlignment, ImageHint};

// @module: Portrait asset resolution

// @const: Marker separating the canonical short name inside a basename
const PORTRAIT_MARKER: &str = "Portrait_";

// @const: Stem suffix of collection artwork needing a top-aligned crop
const COLLECTION_SUFFIX: &str = "_Collection";

/// Legacy name mapping file, canonical name to historical path fragment
const LEGACY_MAPPINGS_FILE: &str = "legacy/img_mappings.json";

/// Curated list of known-bad or duplicate portrait basenames
const EXCLUDED_PORTRAITS_FILE: &str = "manual/excluded_portraits.txt";

/// Image file extension appended to every resolved reference
const IMAGE_EXT: &str = "png";

/// Load the legacy image-name mapping, keyed by historical basename
///
/// The file maps canonical names to the old path fragments they replaced.
/// The lookup direction is inverted here, keyed on the final path segment;
/// entries with an empty fragment are dropped.
pub fn load_legacy_name_mappings(path: &Path) -> Result<HashMap<String, String>> {
    let mappings: BTreeMap<String, String> = FileManager::read_json(path)
        .with_context(|| format!("Failed to load legacy image mappings: {:?}", path))?;

    Ok(mappings
        .into_iter()
        .filter(|(_, old_path)| !old_path.is_empty())
        .map(|(canonical, old_path)| (final_segment(&old_path).to_string(), canonical))
        .collect())
}

// @returns: Final '/'-separated segment of a path fragment
fn final_segment(fragment: &str) -> &str {
    fragment.rsplit('/').next().unwrap_or(fragment)
}

/// Resolves character image references to canonical names and on-disk files
///
/// Canonical names are unique across the whole catalog: each successful
/// resolution claims its name in a registry, and a second claim by any
/// character is a fatal data error.
pub struct AssetResolver {
    /// Root directory holding the referenced image files
    asset_root: PathBuf,

    /// Historical basename to current canonical name
    legacy_names: HashMap<String, String>,

    /// Basenames skipped without comment
    excluded: HashSet<String>,

    /// Canonical name to the character id that claimed it
    claims: HashMap<String, String>,

    /// Canonical name to resolved file path
    avatar_files: BTreeMap<String, PathBuf>,

    /// Per-file rendering hints
    image_config: BTreeMap<PathBuf, ImageHint>,
}

impl AssetResolver {
    /// Create a resolver, loading the legacy mapping and exclusion list
    pub fn new(data_dir: &Path, res_root: &Path) -> Result<Self> {
        let legacy_names = load_legacy_name_mappings(&data_dir.join(LEGACY_MAPPINGS_FILE))?;

        let exclusions_path = data_dir.join(EXCLUDED_PORTRAITS_FILE);
        let excluded = FileManager::read_line_set(&exclusions_path)
            .with_context(|| format!("Failed to load portrait exclusions: {:?}", exclusions_path))?;

        Ok(Self {
            asset_root: res_root.join("assets"),
            legacy_names,
            excluded,
            claims: HashMap::new(),
            avatar_files: BTreeMap::new(),
            image_config: BTreeMap::new(),
        })
    }

    /// Resolve every image reference of a character
    ///
    /// Returns the character's canonical image names, sorted. Excluded
    /// basenames are silently omitted. An unresolvable name, a name already
    /// claimed this run, or a missing file aborts the run.
    pub fn resolve_images(&mut self, data: &CharacterSource) -> Result<Vec<String>> {
        let mut images = Vec::new();

        for img in &data.image_files {
            let basename = final_segment(img);
            if self.excluded.contains(basename) {
                continue;
            }

            let name = self.canonical_name(&data.id, img, basename)?;
            self.claim(&name, &data.id)?;

            let img_file = self.asset_root.join(format!("{}.{}", img, IMAGE_EXT));
            if !img_file.is_file() {
                return Err(CatalogError::MissingAsset { path: img_file }.into());
            }

            images.push(name.clone());
            if file_stem_of(&img_file).ends_with(COLLECTION_SUFFIX) {
                self.image_config.insert(
                    img_file.clone(),
                    ImageHint {
                        h_crop: CropAlignment::Top,
                    },
                );
            }
            self.avatar_files.insert(name, img_file);
        }

        images.sort();
        Ok(images)
    }

    /// Reduce a basename to its canonical short name
    ///
    /// A legacy mapping hit substitutes the current name; otherwise
    /// everything up to and including the portrait marker is stripped.
    fn canonical_name(
        &self,
        char_id: &str,
        reference: &str,
        basename: &str,
    ) -> Result<String, CatalogError> {
        if let Some(mapped) = self.legacy_names.get(basename) {
            return Ok(mapped.clone());
        }

        let stripped = basename
            .find(PORTRAIT_MARKER)
            .map(|idx| &basename[idx + PORTRAIT_MARKER.len()..]);

        match stripped {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(CatalogError::InvalidImageName {
                char_id: char_id.to_string(),
                reference: reference.to_string(),
            }),
        }
    }

    /// Claim a canonical name for a character
    ///
    /// Uniqueness is global over the whole run, not per character.
    fn claim(&mut self, name: &str, char_id: &str) -> Result<(), CatalogError> {
        if let Some(first_id) = self.claims.get(name) {
            return Err(CatalogError::DuplicateAssetName {
                name: name.to_string(),
                first_id: first_id.clone(),
                second_id: char_id.to_string(),
            });
        }

        self.claims.insert(name.to_string(), char_id.to_string());
        Ok(())
    }

    /// Consume the resolver, yielding the accumulated asset and hint maps
    pub fn into_parts(self) -> (BTreeMap<String, PathBuf>, BTreeMap<PathBuf, ImageHint>) {
        (self.avatar_files, self.image_config)
    }
}

// @returns: File stem as a string, empty when absent
fn file_stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
