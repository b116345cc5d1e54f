//! Deriver: relative path, identifier and resource path of an asset.

use resmap_core::{
    PathError, RESOURCE_SCHEME, RootContext, segments, strip_extension, to_pascal_case,
};
use resmap_ir::{AssetEntry, Category, ClassifiedAsset};

/// Build the [`AssetEntry`] for a classified asset.
///
/// The relative path keeps its extension since it is a loadable resource
/// reference; only the identifier drops it.
pub fn derive_entry(asset: &ClassifiedAsset, root: &RootContext) -> Result<AssetEntry, PathError> {
    let relative_path = root.relative_path(&asset.source_path)?;
    let identifier = derive_identifier(&relative_path, asset.category)?;

    log::debug!("'{}' -> {}::{}", relative_path, asset.category.type_name(), identifier);

    Ok(AssetEntry {
        identifier,
        resource_path: format!("{}{}", RESOURCE_SCHEME, relative_path),
        relative_path,
        source_path: asset.source_path.clone(),
    })
}

/// Derive the PascalCase identifier for a project-relative path.
///
/// Everything after the first directory segment naming the category folder is
/// kept, the extension is dropped, and the remaining segments are joined with
/// `_` before conversion. Characters that cannot appear in an identifier act
/// as word boundaries.
///
/// ```
/// use resmap_codegen::assets::derive_identifier;
/// use resmap_ir::Category;
///
/// let id = derive_identifier("Prefabs/Enemies/goblin_warrior.tscn", Category::Prefab).unwrap();
/// assert_eq!(id, "EnemiesGoblinWarrior");
/// ```
pub fn derive_identifier(relative_path: &str, category: Category) -> Result<String, PathError> {
    let parts: Vec<&str> = segments(relative_path).collect();
    let dir_count = parts.len().saturating_sub(1);

    let folder = parts[..dir_count]
        .iter()
        .position(|segment| category.matches_folder(segment))
        .ok_or_else(|| PathError::CategoryNotFound {
            path: relative_path.to_string(),
            folder: category.folder().to_string(),
        })?;

    let suffix = parts[folder + 1..].join("/");
    let words: String = strip_extension(&suffix)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    let identifier = to_pascal_case(&words);
    if identifier.is_empty() {
        return Err(PathError::EmptyIdentifier {
            path: relative_path.to_string(),
        });
    }
    Ok(identifier)
}
