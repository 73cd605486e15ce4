/// Tests for MeshRenderer slot writes

use super::*;
use crate::resource::MaterialDesc;

fn material(name: &str) -> Arc<Material> {
    Material::procedural(MaterialDesc { name: name.to_string(), ..Default::default() })
}

#[test]
fn test_set_shared_material_on_empty_renderer() {
    let mut renderer = MeshRenderer::new(Vec::new());
    assert!(renderer.shared_material().is_none());

    let m = material("M");
    renderer.set_shared_material(m.clone());

    assert_eq!(renderer.slot_count(), 1);
    assert!(Arc::ptr_eq(renderer.shared_material().unwrap(), &m));
}

#[test]
fn test_set_shared_material_keeps_other_slots() {
    let (a, b, c) = (material("A"), material("B"), material("C"));
    let mut renderer = MeshRenderer::new(vec![a, b.clone()]);

    renderer.set_shared_material(c.clone());

    let slots = renderer.shared_materials();
    assert_eq!(slots.len(), 2);
    assert!(Arc::ptr_eq(&slots[0], &c));
    assert!(Arc::ptr_eq(&slots[1], &b));
}

#[test]
fn test_writes_do_not_leak_into_shared_array() {
    let a = material("A");
    let array: SharedMaterialArray = Arc::from(vec![a.clone(), material("B")]);
    let mut first = MeshRenderer::with_shared_array(Arc::clone(&array));
    let second = MeshRenderer::with_shared_array(Arc::clone(&array));
    assert!(first.shares_array_with(&second));

    first.set_shared_material(material("C"));

    assert!(!first.shares_array_with(&second));
    assert!(Arc::ptr_eq(&second.shared_materials()[0], &a));
    assert!(Arc::ptr_eq(&array[0], &a));
}
