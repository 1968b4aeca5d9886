use gridbattle::geometry::clamp_axis;
use gridbattle::{BoundingBox, Orientation, Ship, ShipType};

#[test]
fn test_single_cell_box() {
    assert_eq!(
        BoundingBox::strip(1, 1, 1, true),
        BoundingBox { x1: 1, y1: 1, x2: 1, y2: 1 }
    );
    // position relative to the board does not matter
    assert_eq!(
        BoundingBox::strip(-1, 70, 1, false),
        BoundingBox { x1: -1, y1: 70, x2: -1, y2: 70 }
    );
}

#[test]
fn test_ship_bbox_extends_along_orientation() {
    let carrier = Ship::new(ShipType::new("Ship5", 5), Orientation::Horizontal, 10, 10);
    assert_eq!(carrier.bbox(), BoundingBox { x1: 10, y1: 10, x2: 14, y2: 10 });

    let battleship = Ship::new(ShipType::new("Ship4", 4), Orientation::Vertical, 10, 10);
    assert_eq!(battleship.bbox(), BoundingBox { x1: 10, y1: 10, x2: 10, y2: 13 });

    let cruiser = Ship::new(ShipType::new("Ship3", 3), Orientation::Horizontal, -1, -1);
    assert_eq!(cruiser.bbox(), BoundingBox { x1: -1, y1: -1, x2: 1, y2: -1 });
}

#[test]
fn test_intersects_edges_inclusive() {
    let a = BoundingBox::strip(1, 1, 3, true);
    let touching = BoundingBox::strip(3, 1, 2, false);
    let beside = BoundingBox::strip(4, 1, 2, false);
    let below = BoundingBox::strip(1, 2, 3, true);
    assert!(a.intersects(&touching));
    assert!(!a.intersects(&beside));
    assert!(!a.intersects(&below));
    assert!(a.intersects(&a));
}

#[test]
fn test_contains() {
    let b = BoundingBox::strip(2, 5, 4, false);
    assert!(b.contains(2, 5));
    assert!(b.contains(2, 8));
    assert!(!b.contains(2, 9));
    assert!(!b.contains(3, 5));
}

#[test]
fn test_clamp_axis() {
    assert_eq!(clamp_axis(0, 1, 10), 1);
    assert_eq!(clamp_axis(11, 1, 10), 10);
    assert_eq!(clamp_axis(5, 1, 10), 5);
}
