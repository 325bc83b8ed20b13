//! Reading a value array at the center of its grid.
//!
//! The grids built by the pricers are log-symmetric around the reference
//! level, so the center falls on the middle node for odd sizes and midway
//! between the two middle nodes for even sizes.

use dfd_core::Real;
use dfd_math::Array;

/// Value at the grid center.
pub fn value_at_center(a: &Array) -> Real {
    assert!(!a.is_empty());
    let mid = a.size() / 2;
    if a.size() % 2 == 1 {
        a[mid]
    } else {
        (a[mid] + a[mid - 1]) / 2.0
    }
}

/// First derivative `dV/dS` at the grid center.
pub fn first_derivative_at_center(a: &Array, grid: &Array) -> Real {
    assert_eq!(a.size(), grid.size());
    assert!(a.size() >= 3, "need at least 3 points for a derivative");
    let mid = a.size() / 2;
    if a.size() % 2 == 1 {
        (a[mid + 1] - a[mid - 1]) / (grid[mid + 1] - grid[mid - 1])
    } else {
        (a[mid] - a[mid - 1]) / (grid[mid] - grid[mid - 1])
    }
}

/// Second derivative `d²V/dS²` at the grid center.
pub fn second_derivative_at_center(a: &Array, grid: &Array) -> Real {
    assert_eq!(a.size(), grid.size());
    assert!(
        a.size() >= 4,
        "need at least 4 points for a second derivative"
    );
    let mid = a.size() / 2;
    if a.size() % 2 == 1 {
        let ds = (grid[mid + 1] - grid[mid - 1]) / 2.0;
        let delta_plus = (a[mid + 1] - a[mid]) / ds;
        let delta_minus = (a[mid] - a[mid - 1]) / ds;
        (delta_plus - delta_minus) / ds
    } else {
        let delta_plus = (a[mid + 1] - a[mid - 1]) / (grid[mid + 1] - grid[mid - 1]);
        let delta_minus = (a[mid] - a[mid - 2]) / (grid[mid] - grid[mid - 2]);
        (delta_plus - delta_minus) / (grid[mid] - grid[mid - 1])
    }
}
