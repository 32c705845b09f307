use super::*;

fn cells(pts: &[(i32, i32)]) -> CellSet {
    CellSet::from_points(pts.iter().copied())
}

#[test]
fn empty_set_is_vacuously_connected() {
    let empty = CellSet::new();
    assert!(is_connected(&empty));
    assert_eq!(component_count(&empty), 0);
}

#[test]
fn single_cell_is_connected() {
    assert!(is_connected(&cells(&[(7, -3)])));
}

#[test]
fn cross_is_connected() {
    let c = cells(&[(1, 0), (0, 1), (1, 1), (2, 1), (3, 1), (1, 2)]);
    assert!(is_connected(&c));
    assert_eq!(component_count(&c), 1);
}

#[test]
fn scattered_pairs_are_not_connected() {
    let c = cells(&[(0, 0), (0, 1), (5, 5), (5, 6), (9, 9), (9, 10)]);
    assert!(!is_connected(&c));
    assert_eq!(component_count(&c), 3);
}

#[test]
fn diagonal_contact_does_not_connect() {
    let c = cells(&[(0, 0), (1, 1)]);
    assert!(!is_connected(&c));
    assert_eq!(component_count(&c), 2);
}

#[test]
fn component_of_is_bfs_from_seed() {
    let c = cells(&[(0, 0), (1, 0), (2, 0), (0, 1), (9, 9)]);
    let comp = component_of(&c, Point::new(0, 0));
    assert_eq!(comp[0], Point::new(0, 0));
    assert_eq!(comp.len(), 4);
    assert!(!comp.contains(&Point::new(9, 9)));
    assert!(component_of(&c, Point::new(4, 4)).is_empty());
}

#[test]
fn cellset_dedups_and_keeps_insertion_order() {
    let mut c = cells(&[(3, 3), (1, 1), (3, 3), (2, 2)]);
    assert_eq!(c.len(), 3);
    assert_eq!(c.first(), Some(Point::new(3, 3)));
    assert!(!c.insert(Point::new(1, 1)));
    assert!(c.remove(Point::new(3, 3)));
    assert_eq!(c.first(), Some(Point::new(1, 1)));
    assert!(!c.remove(Point::new(3, 3)));
}

#[test]
fn toggle_matches_editor_clicks() {
    let mut c = CellSet::new();
    assert!(c.toggle(Point::new(0, 0)));
    assert!(c.toggle(Point::new(1, 0)));
    assert!(!c.toggle(Point::new(0, 0)));
    assert_eq!(c.as_slice(), &[Point::new(1, 0)]);
    assert!(c.toggle(Point::new(0, 0)));
    // re-added cells go to the back
    assert_eq!(c.as_slice(), &[Point::new(1, 0), Point::new(0, 0)]);
}

#[test]
fn equality_ignores_order() {
    assert_eq!(cells(&[(0, 0), (1, 0)]), cells(&[(1, 0), (0, 0)]));
    assert_ne!(cells(&[(0, 0), (1, 0)]), cells(&[(0, 0), (0, 1)]));
}

#[test]
fn direction_deltas_follow_grid_convention() {
    let p = Point::new(5, 5);
    assert_eq!(p.step(FoldDirection::Up), Some(Point::new(5, 4)));
    assert_eq!(p.step(FoldDirection::Down), Some(Point::new(5, 6)));
    assert_eq!(p.step(FoldDirection::Left), Some(Point::new(4, 5)));
    assert_eq!(p.step(FoldDirection::Right), Some(Point::new(6, 5)));
    for d in FoldDirection::ALL {
        assert_eq!(p.step(d).and_then(|q| q.step(d.opposite())), Some(p));
    }
}

#[test]
fn neighbors_only_reports_present_cells() {
    let c = cells(&[(1, 1), (2, 1), (1, 0)]);
    let ns: Vec<_> = c.neighbors(Point::new(1, 1)).collect();
    assert_eq!(
        ns,
        vec![
            (FoldDirection::Right, Point::new(2, 1)),
            (FoldDirection::Up, Point::new(1, 0)),
        ]
    );
}

#[test]
fn parse_cells_accepts_mixed_separators() {
    let c = parse_cells("1,0 0,1; (1,1) 2 1").unwrap();
    assert_eq!(
        c.as_slice(),
        &[
            Point::new(1, 0),
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(2, 1),
        ]
    );
    assert!(parse_cells("").unwrap().is_empty());
}

#[test]
fn parse_cells_reports_errors() {
    assert_eq!(
        parse_cells("1,0 2"),
        Err(ParseError::DanglingCoordinate { value: 2 })
    );
    assert!(matches!(
        parse_cells("1,x"),
        Err(ParseError::BadNumber { .. })
    ));
}

#[test]
fn parse_grid_reads_rows_as_y() {
    let text = "
        .#..
        ####
        .#..
    ";
    let c = parse_grid(text).unwrap();
    assert_eq!(c.len(), 6);
    assert_eq!(c.first(), Some(Point::new(1, 0)));
    assert!(c.contains(Point::new(3, 1)));
    assert!(c.contains(Point::new(1, 2)));
    assert_eq!(render_grid(&c), ".#..\n####\n.#..\n");
}

#[test]
fn parse_grid_rejects_unknown_chars() {
    assert_eq!(
        parse_grid("10\n0x"),
        Err(ParseError::BadGridChar {
            row: 1,
            col: 1,
            ch: 'x'
        })
    );
}

#[test]
fn steps_stop_at_the_coordinate_border() {
    let corner = Point::new(i32::MAX, i32::MIN);
    assert_eq!(corner.step(FoldDirection::Right), None);
    assert_eq!(corner.step(FoldDirection::Up), None);
    assert_eq!(corner.step(FoldDirection::Left), Some(Point::new(i32::MAX - 1, i32::MIN)));
    assert_eq!(corner.offset(1, 0), None);
    assert_eq!(Point::new(i32::MIN, 0).offset(-1, 0), None);
}

#[test]
fn border_cells_never_wrap_into_neighbors() {
    let lone = cells(&[(i32::MAX, 0)]);
    assert!(is_connected(&lone));
    assert_eq!(lone.neighbors(Point::new(i32::MAX, 0)).count(), 0);

    let far_apart = cells(&[(i32::MAX, 0), (i32::MIN, 0)]);
    assert!(!is_connected(&far_apart));
    assert_eq!(component_count(&far_apart), 2);

    let column = cells(&[(i32::MIN, 5), (i32::MIN + 1, 5), (i32::MIN, 6)]);
    assert!(is_connected(&column));
}

#[test]
fn translation_past_the_border_is_refused() {
    let c = cells(&[(0, 0), (1, 0)]);
    assert_eq!(c.translated(i32::MAX, 0), None);
    let moved = c.translated(i32::MAX - 1, -3).unwrap();
    assert_eq!(moved.as_slice(), &[Point::new(i32::MAX - 1, -3), Point::new(i32::MAX, -3)]);
}
