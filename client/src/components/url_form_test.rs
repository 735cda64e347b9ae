use super::*;

fn orgs(ids: &[i64]) -> Vec<Organization> {
    ids.iter().map(|&id| Organization { id, name: format!("org-{id}"), ..Organization::default() }).collect()
}

#[test]
fn defaults_to_first_organization() {
    assert_eq!(initial_organization(&orgs(&[7, 3]), None), Some(7));
}

#[test]
fn keeps_preset_when_member() {
    assert_eq!(initial_organization(&orgs(&[7, 3]), Some(3)), Some(3));
}

#[test]
fn ignores_unknown_preset() {
    assert_eq!(initial_organization(&orgs(&[7, 3]), Some(99)), Some(7));
}

#[test]
fn nothing_to_select_without_organizations() {
    assert_eq!(initial_organization(&[], Some(3)), None);
}
