use std::fs;

use recipe_box::{DelimitedCodec, Recipe, RecipeError, RecipeStore, RecordCodec};
use tempfile::TempDir;

fn soup() -> Recipe {
    Recipe::new(
        "Soup",
        "Starter",
        vec!["Water".to_string(), "Salt".to_string()],
        vec!["Boil".to_string(), "Serve".to_string()],
        "",
        "",
    )
}

#[test]
fn test_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = RecipeStore::open(dir.path().join("recipes.txt")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_add_reload_search_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.txt");
    fs::write(&path, "").unwrap();

    let mut store = RecipeStore::open(&path).unwrap();
    assert!(store.is_empty());
    store.add(soup()).unwrap();

    let reloaded = RecipeStore::open(&path).unwrap();
    let found = reloaded.search("salt");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].to_string(), "Soup (Category: Starter)");
    assert_eq!(reloaded.recipes(), store.recipes());
}

#[test]
fn test_file_layout_has_no_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.txt");
    let mut store = RecipeStore::open(&path).unwrap();

    store.add(soup()).unwrap();
    let mut cake = Recipe::new(
        "Cake",
        "Dessert",
        vec!["Flour".to_string()],
        vec![],
        "c.png",
        "",
    );
    cake.rating = 5.0;
    cake.review = "Lovely".to_string();
    store.add(cake).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Soup|Starter|Water,Salt|Boil,Serve|||0|\nCake|Dessert|Flour||c.png||5|Lovely"
    );
}

#[test]
fn test_persist_rewrites_whole_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.txt");
    let mut store = RecipeStore::open(&path).unwrap();
    store.add(soup()).unwrap();

    store.delete("soup").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
    assert!(RecipeStore::open(&path).unwrap().is_empty());
}

#[test]
fn test_loads_existing_file_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.txt");
    fs::write(
        &path,
        "Pancakes|Breakfast|Flour,Milk|Mix,Fry|||4|Fluffy\n\
         Chili|Main|Beans,Beef|Simmer|chili.jpg|chili.mp4|NaN|\n",
    )
    .unwrap();

    let store = RecipeStore::open(&path).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.recipes()[0].name, "Pancakes");
    assert_eq!(store.recipes()[0].rating, 4.0);
    assert_eq!(store.recipes()[1].image_path, "chili.jpg");
    assert!(store.recipes()[1].rating.is_nan());
}

#[test]
fn test_malformed_line_aborts_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.txt");
    fs::write(
        &path,
        "Pancakes|Breakfast|Flour|Mix|||4|\nnot a recipe\nSoup|Starter|||||0|",
    )
    .unwrap();

    match RecipeStore::open(&path).unwrap_err() {
        RecipeError::MalformedRecord { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("expected 8 fields"));
        }
        other => panic!("Expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_unreadable_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    // a directory exists but cannot be read as a file
    let err = RecipeStore::open(dir.path()).unwrap_err();
    assert!(matches!(err, RecipeError::IoError(_)));
}

#[test]
fn test_failed_write_keeps_memory_change() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("recipes.txt");
    let mut store = RecipeStore::open(&path).unwrap();

    let err = store.add(soup()).unwrap_err();

    assert!(matches!(err, RecipeError::IoError(_)));
    assert_eq!(store.len(), 1);
}

/// A codec that stores only names, to check the store is codec-agnostic.
struct NameOnlyCodec;

impl RecordCodec for NameOnlyCodec {
    fn encode(&self, recipe: &Recipe) -> String {
        recipe.name.clone()
    }

    fn decode(&self, line: &str) -> Result<Recipe, RecipeError> {
        Ok(Recipe::new(line, "", vec![], vec![], "", ""))
    }
}

#[test]
fn test_store_with_custom_codec() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("names.txt");
    let mut store = RecipeStore::open_with_codec(&path, NameOnlyCodec).unwrap();
    store.add(soup()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Soup");
    let reloaded = RecipeStore::open_with_codec(&path, NameOnlyCodec).unwrap();
    assert_eq!(reloaded.recipes()[0].name, "Soup");
}

#[test]
fn test_codec_round_trip_through_store_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.txt");
    let mut store = RecipeStore::open(&path).unwrap();
    let mut recipe = soup();
    recipe.rating = 3.25;
    recipe.review = "Warming, simple".to_string();
    store.add(recipe.clone()).unwrap();

    let line = fs::read_to_string(&path).unwrap();
    assert_eq!(DelimitedCodec.decode(&line).unwrap(), recipe);
}
