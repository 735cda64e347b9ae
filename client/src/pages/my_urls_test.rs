use super::*;

#[test]
fn showing_label_uses_backend_total() {
    let pager = Pager { page: 1, total_pages: 3, total_elements: 23 };
    assert_eq!(showing_label(10, &pager), "Showing 10 of 23 URLs");
    assert_eq!(showing_label(0, &Pager::default()), "Showing 0 of 0 URLs");
}
