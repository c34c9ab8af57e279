#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for the serpentine panel mapping.

use led_marquee::canvas::wiring::PanelWiring;

type Wiring = PanelWiring<32, 8>;

#[test]
fn strip_enters_at_the_top_right_corner() {
    assert_eq!(Wiring::led_index(31, 0), Some(0));
    assert_eq!(Wiring::led_index(31, 7), Some(7));
}

#[test]
fn odd_physical_columns_run_bottom_to_top() {
    // Logical x=30 is physical column 1, which is wired upward.
    assert_eq!(Wiring::led_index(30, 0), Some(15));
    assert_eq!(Wiring::led_index(30, 7), Some(8));
}

#[test]
fn mapping_matches_the_closed_form() {
    for x in 0..32 {
        let real_x = 31 - x;
        for y in 0..8 {
            let expected = if real_x % 2 == 0 {
                real_x * 8 + y
            } else {
                real_x * 8 + (7 - y)
            };
            assert_eq!(Wiring::led_index(x, y), Some(expected), "at ({x}, {y})");
        }
    }
}

#[test]
fn mapping_is_a_bijection_over_the_panel() {
    let mut seen = [false; 256];
    for x in 0..32 {
        for y in 0..8 {
            let index = Wiring::led_index(x, y).expect("in-range coordinate must map");
            assert!(index < 256, "index {index} out of range at ({x}, {y})");
            assert!(!seen[index], "index {index} hit twice at ({x}, {y})");
            seen[index] = true;
        }
    }
    assert!(seen.iter().all(|&covered| covered), "every index must be hit");
}

#[test]
fn out_of_range_coordinates_do_not_map() {
    assert_eq!(Wiring::led_index(32, 0), None);
    assert_eq!(Wiring::led_index(0, 8), None);
    assert_eq!(Wiring::led_index(usize::MAX, usize::MAX), None);
}

#[test]
fn index_to_xy_inverts_led_index() {
    for x in 0..32 {
        for y in 0..8 {
            let index = Wiring::led_index(x, y).expect("in-range coordinate must map");
            assert_eq!(Wiring::index_to_xy(index), Some((x, y)));
        }
    }
    assert_eq!(Wiring::index_to_xy(256), None);
}

#[test]
fn small_panel_matches_hand_worked_layout() {
    // 4×3 panel from the module docs: strip enters top-right, snakes columns.
    type Small = PanelWiring<4, 3>;
    let expected = [
        [11, 6, 5, 0], // y = 0
        [10, 7, 4, 1], // y = 1
        [9, 8, 3, 2],  // y = 2
    ];
    for (y, row) in expected.iter().enumerate() {
        for (x, &index) in row.iter().enumerate() {
            assert_eq!(Small::led_index(x, y), Some(index), "at ({x}, {y})");
        }
    }
}
