/// Tests for MappingStore

use super::*;
use crate::error::Error;
use crate::mapping::collect_unique;
use crate::resource::{AssetCatalog, AssetDatabase, MaterialDesc, MaterialIdentity};
use crate::scene::{MeshRenderer, SceneGraph};

// ============================================================================
// Helper Functions
// ============================================================================

fn id(value: &str) -> MaterialIdentity {
    MaterialIdentity::new(value)
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("matremap_store_{}_{}", std::process::id(), name))
}

fn sample() -> Mapping {
    vec![(id("id_a"), id("id_x")), (id("id_b"), id("id_y"))].into_iter().collect()
}

/// Object uses a, b. Project contains `project`.
fn fixture(project: &[&str]) -> (UniqueMaterialSet, ProjectMaterialIndex) {
    let mut object_db = AssetDatabase::new();
    for name in ["a", "b"] {
        object_db.import_material_with_identity(
            format!("Assets/{}.mat", name),
            id(&format!("id_{}", name)),
            MaterialDesc { name: name.to_string(), ..Default::default() },
        ).unwrap();
    }
    let mut graph = SceneGraph::new();
    let root = graph.create_node("Root");
    let slots = vec![
        object_db.load_material(&id("id_a")).unwrap(),
        object_db.load_material(&id("id_b")).unwrap(),
    ];
    graph.set_renderer(root, MeshRenderer::new(slots)).unwrap();
    let object = collect_unique(&graph, root, &object_db).unwrap();

    let mut project_db = AssetDatabase::new();
    for name in project {
        project_db.import_material_with_identity(
            format!("Assets/{}.mat", name),
            id(&format!("id_{}", name)),
            MaterialDesc { name: name.to_string(), ..Default::default() },
        ).unwrap();
    }
    let mut index = ProjectMaterialIndex::new();
    index.rescan(&project_db);

    (object, index)
}

// ============================================================================
// Tests: File persistence
// ============================================================================

#[test]
fn test_save_then_load() {
    let path = temp_path("roundtrip.mapping");

    let written = MappingStore::save(&path, &sample()).unwrap();
    assert_eq!(written, path);

    let loaded = MappingStore::load(&written).unwrap();
    assert_eq!(loaded, sample());

    let _ = std::fs::remove_file(&written);
}

#[test]
fn test_save_appends_extension() {
    let path = temp_path("no_extension");

    let written = MappingStore::save(&path, &sample()).unwrap();
    assert_eq!(written.extension().and_then(|e| e.to_str()), Some(MAPPING_EXTENSION));
    assert!(written.exists());

    let _ = std::fs::remove_file(&written);
}

#[test]
fn test_load_missing_file() {
    let result = MappingStore::load(temp_path("does_not_exist.mapping"));
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_load_corrupt_file() {
    let path = temp_path("corrupt.mapping");
    std::fs::write(&path, b"not a mapping").unwrap();

    let result = MappingStore::load(&path);
    assert!(matches!(result, Err(Error::MalformedMapping(_))));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_save_into_missing_directory() {
    let path = temp_path("missing_dir").join("out.mapping");
    let result = MappingStore::save(&path, &sample());
    assert!(matches!(result, Err(Error::IoError(_))));
}

// ============================================================================
// Tests: reconcile_loaded
// ============================================================================

#[test]
fn test_reconcile_all_found() {
    let (object, project) = fixture(&["x", "y"]);

    let result = MappingStore::reconcile_loaded(&sample(), &object, &project, &[None, None]).unwrap();

    assert_eq!(result.selection, vec![project.position(&id("id_x")), project.position(&id("id_y"))]);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_reconcile_missing_destination_keeps_selection() {
    let (object, project) = fixture(&["x"]);
    let current = vec![None, Some(0)];

    let result = MappingStore::reconcile_loaded(&sample(), &object, &project, &current).unwrap();

    assert_eq!(result.selection, vec![Some(0), Some(0)]);
    assert_eq!(result.warnings, vec![RemapWarning::DestinationNotInProject {
        source: id("id_b"),
        destination: id("id_y"),
    }]);
}

#[test]
fn test_reconcile_missing_source_warns() {
    let (object, project) = fixture(&["x", "y"]);
    let mut loaded = sample();
    loaded.insert(id("id_zz"), id("id_x"));

    let result = MappingStore::reconcile_loaded(&loaded, &object, &project, &[None, None]).unwrap();

    assert_eq!(result.selection.iter().filter(|s| s.is_some()).count(), 2);
    assert_eq!(result.warnings, vec![RemapWarning::SourceNotOnObject { source: id("id_zz") }]);
}

#[test]
fn test_reconcile_warnings_in_source_order() {
    let (object, project) = fixture(&[]);
    let loaded: Mapping = vec![
        (id("id_q"), id("id_x")),
        (id("id_b"), id("id_y")),
        (id("id_a"), id("id_x")),
    ].into_iter().collect();

    let result = MappingStore::reconcile_loaded(&loaded, &object, &project, &[None, None]).unwrap();

    assert_eq!(result.warnings, vec![
        RemapWarning::DestinationNotInProject { source: id("id_a"), destination: id("id_x") },
        RemapWarning::DestinationNotInProject { source: id("id_b"), destination: id("id_y") },
        RemapWarning::SourceNotOnObject { source: id("id_q") },
    ]);
    assert_eq!(result.selection, vec![None, None]);
}

#[test]
fn test_reconcile_selection_length_mismatch() {
    let (object, project) = fixture(&["x"]);
    let result = MappingStore::reconcile_loaded(&sample(), &object, &project, &[None]);
    assert!(matches!(result, Err(Error::InvalidSelection(_))));
}
