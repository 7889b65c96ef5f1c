//! Avatar vs. obstacle overlap tests
//!
//! Horizontal overlap is a strict AABB test; vertically the avatar is hit when
//! any part of it leaves the gap. All comparisons are strict, so touching an
//! edge is not a hit.

use super::avatar::Avatar;
use super::obstacles::{Obstacle, ObstacleField};

/// Whether the avatar and obstacle overlap on the x axis
#[inline]
pub fn overlaps_horizontally(avatar: &Avatar, obstacle: &Obstacle) -> bool {
    avatar.left() < obstacle.trailing_edge() && avatar.right() > obstacle.x
}

/// Whether any part of the avatar lies outside the obstacle's gap
#[inline]
pub fn outside_gap(avatar: &Avatar, obstacle: &Obstacle) -> bool {
    avatar.top() < obstacle.gap_top || avatar.bottom() > obstacle.gap_bottom()
}

/// Check a single obstacle
#[inline]
pub fn avatar_hits_obstacle(avatar: &Avatar, obstacle: &Obstacle) -> bool {
    overlaps_horizontally(avatar, obstacle) && outside_gap(avatar, obstacle)
}

/// Find the first obstacle the avatar collides with, if any
pub fn first_collision<'a>(avatar: &Avatar, field: &'a ObstacleField) -> Option<&'a Obstacle> {
    field.iter().find(|o| avatar_hits_obstacle(avatar, o))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn obstacle_at(x: f32, gap_top: f32) -> Obstacle {
        Obstacle {
            id: 0,
            x,
            gap_top,
            width: 52.0,
            gap_size: 100.0,
        }
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let avatar = Avatar::new(&Tuning::default());
        let obstacle = obstacle_at(50.0, 100.0);

        assert!(overlaps_horizontally(&avatar, &obstacle));
        assert!(!avatar_hits_obstacle(&avatar, &obstacle));
    }

    #[test]
    fn test_above_gap_hits() {
        let avatar = Avatar::new(&Tuning::default());
        // Avatar top 150 < gap top 160
        let obstacle = obstacle_at(50.0, 160.0);

        assert!(avatar_hits_obstacle(&avatar, &obstacle));
    }

    #[test]
    fn test_below_gap_hits() {
        let avatar = Avatar::new(&Tuning::default());
        // Avatar bottom 170 > gap bottom 60 + 100
        let obstacle = obstacle_at(50.0, 60.0);

        assert!(avatar_hits_obstacle(&avatar, &obstacle));
    }

    #[test]
    fn test_edges_touching_do_not_hit() {
        let avatar = Avatar::new(&Tuning::default());

        // Gap exactly hugs the avatar: top == gap_top, bottom == gap_bottom
        assert!(!avatar_hits_obstacle(&avatar, &obstacle_at(50.0, 150.0)));
        assert!(!avatar_hits_obstacle(&avatar, &obstacle_at(50.0, 70.0)));

        // Obstacle right edge meets avatar left edge (50)
        assert!(!overlaps_horizontally(&avatar, &obstacle_at(-2.0, 400.0)));
        // Obstacle left edge meets avatar right edge (70)
        assert!(!overlaps_horizontally(&avatar, &obstacle_at(70.0, 400.0)));
        // One pixel in
        assert!(avatar_hits_obstacle(&avatar, &obstacle_at(69.0, 400.0)));
    }

    #[test]
    fn test_first_collision_scans_all() {
        let tuning = Tuning::default();
        let avatar = Avatar::new(&tuning);
        let mut field = ObstacleField::new();
        field.spawn_at(140.0, &tuning);
        field.spawn_at(0.0, &tuning);

        // Both start at x=320; neither overlaps
        assert!(first_collision(&avatar, &field).is_none());

        for _ in 0..130 {
            field.advance(&tuning);
        }
        // x = 60 now; the first gap holds the avatar, the second does not
        let hit = first_collision(&avatar, &field).map(|o| o.id);
        assert_eq!(hit, Some(1));
    }
}
