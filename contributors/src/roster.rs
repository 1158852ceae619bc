use clients::api::Contributor;

/// Returns a new list sorted by contribution count in descending order.
///
/// The sort is stable, so contributors with equal counts keep the order the
/// endpoint returned them in.
pub fn sorted_by_contributions(mut contributors: Vec<Contributor>) -> Vec<Contributor> {
    contributors.sort_by(|a, b| b.contributions.cmp(&a.contributions));
    contributors
}

/// Tests

#[test]
fn sort_is_descending() {
    let sorted = sorted_by_contributions(vec![
        Contributor::new("low".into(), "".into(), "".into(), 1),
        Contributor::new("high".into(), "".into(), "".into(), 10),
        Contributor::new("mid".into(), "".into(), "".into(), 5),
    ]);
    let counts: Vec<u32> = sorted.iter().map(|c| c.contributions).collect();
    assert_eq!(counts, vec![10, 5, 1]);
}

#[test]
fn sort_keeps_input_order_on_ties() {
    let sorted = sorted_by_contributions(vec![
        Contributor::new("first".into(), "".into(), "".into(), 3),
        Contributor::new("second".into(), "".into(), "".into(), 3),
    ]);
    assert_eq!(sorted[0].login, "first");
    assert_eq!(sorted[1].login, "second");
}
