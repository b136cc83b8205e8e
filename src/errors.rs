/*!
 * Error types for the charcat application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving portrait assets for the catalog
///
/// All of these indicate corrupt or inconsistent input data. The run aborts
/// rather than producing a partially-correct catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when an image reference cannot be reduced to a canonical name
    #[error("image reference '{reference}' for character '{char_id}' yields no canonical name")]
    InvalidImageName {
        /// Owning character id
        char_id: String,
        /// Offending image path fragment
        reference: String,
    },

    /// Error when two characters claim the same canonical image name
    #[error("duplicate image name '{name}': first claimed by '{first_id}', then by '{second_id}'")]
    DuplicateAssetName {
        /// Colliding canonical name
        name: String,
        /// Character that claimed the name first
        first_id: String,
        /// Character whose claim collided
        second_id: String,
    },

    /// Error when a resolved image path does not exist on disk
    #[error("missing image asset: {path:?}")]
    MissingAsset {
        /// Resolved path that was not found
        path: PathBuf,
    },
}

/// Errors raised while listing stamp images
#[derive(Error, Debug)]
pub enum StampError {
    /// Error when a stamp filename carries no parsable index
    #[error("stamp filename '{file_name}' has no numeric index")]
    InvalidIndex {
        /// Offending filename
        file_name: String,
    },
}
