//! Snapshot tests for C# code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use resmap_codegen::pipeline::{GenerationInput, Pipeline};
use resmap_codegen_csharp::{Generator, LanguageCodegen};

fn generate_files(candidates: &[&str]) -> Vec<(String, String)> {
    let input = GenerationInput::new(
        candidates.iter().map(|c| c.to_string()).collect(),
        "MyGame.Assets",
    )
    .with_project_dir(r"C:\dev\MyGame");
    let ctx = Pipeline::new().run(input).expect("pipeline failed");

    Generator::from_context(ctx)
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("{} not generated", path))
}

const CANDIDATES: &[&str] = &[
    r"C:\dev\MyGame\Prefabs\Enemies\goblin_warrior.tscn",
    r"C:\dev\MyGame\Prefabs\chest.tscn",
    r"C:\dev\MyGame\Scenes\main_menu.tscn",
];

#[test]
fn test_prefabs_file() {
    let files = generate_files(CANDIDATES);
    insta::assert_snapshot!(get_file(&files, "Prefabs.g.cs"), @r#"
// <auto-generated />
// Generated by resmap. Do not edit.

namespace MyGame.Assets;

/// <summary>Every prefab found under a Prefabs folder.</summary>
public enum Prefab
{
    /// <summary>res://Prefabs/Enemies/goblin_warrior.tscn</summary>
    EnemiesGoblinWarrior,
    /// <summary>res://Prefabs/chest.tscn</summary>
    Chest,
}

public static class MapPrefabsToPaths
{
    /// <summary>Resource path of a prefab.</summary>
    public static string GetPath(Prefab prefab) => prefab switch
    {
        Prefab.EnemiesGoblinWarrior => "res://Prefabs/Enemies/goblin_warrior.tscn",
        Prefab.Chest => "res://Prefabs/chest.tscn",
        _ => throw new System.ArgumentOutOfRangeException(nameof(prefab)),
    };
}
"#);
}

#[test]
fn test_empty_scenes_file() {
    let files = generate_files(&[r"C:\dev\MyGame\Prefabs\chest.tscn"]);
    insta::assert_snapshot!(get_file(&files, "Scenes.g.cs"), @r#"
// <auto-generated />
// Generated by resmap. Do not edit.

namespace MyGame.Assets;

/// <summary>Every scene found under a Scenes folder.</summary>
public enum Scene
{
}

public static class MapScenesToPaths
{
    /// <summary>Resource path of a scene.</summary>
    public static string GetPath(Scene scene) => scene switch
    {
        _ => throw new System.ArgumentOutOfRangeException(nameof(scene)),
    };
}
"#);
}

#[test]
fn test_output_is_deterministic() {
    assert_eq!(generate_files(CANDIDATES), generate_files(CANDIDATES));
}
