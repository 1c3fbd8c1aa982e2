use super::*;

#[test]
fn declared_order_sweeps_west_to_east() {
    let ids: Vec<&str> = DECLARED_REGIONS.iter().map(|r| r.id).collect();
    assert_eq!(ids, ["west", "southwest", "midwest", "southeast", "northeast"]);
    assert_eq!(declared_index("midwest"), Some(2));
    assert_eq!(declared_index("atlantis"), None);
    assert_eq!(
        declared_ids(),
        "west, southwest, midwest, southeast, northeast"
    );
}

#[test]
fn outlines_stay_inside_map_space() {
    for region in &DECLARED_REGIONS {
        assert!(region.outline.len() >= 3, "{}", region.id);
        for (x, y) in region.outline {
            assert!((0.0..=MAP_WIDTH).contains(x), "{}", region.id);
            assert!((0.0..=MAP_HEIGHT).contains(y), "{}", region.id);
        }
    }
}

#[test]
fn label_anchor_is_the_vertex_average() {
    let (x, y) = DECLARED_REGIONS[2].label_anchor();
    assert!((x - 520.0).abs() < 1e-9);
    assert!((y - 200.0).abs() < 1e-9);
}
