/// Grid cell. Signed on purpose: an invincible snake is allowed to leave the
/// grid, so out-of-range coordinates must stay representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    Golden,
    Freeze,
    Explosive,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Golden,
        PowerUpKind::Freeze,
        PowerUpKind::Explosive,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerUp {
    pub pos: Point,
    pub kind: PowerUpKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    Exploded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Died(DeathReason),
    Won,
}

#[derive(Clone, Copy, Debug)]
pub struct Grid {
    pub extent: i32,
}

impl Grid {
    pub fn new(extent: i32) -> Self {
        Self { extent }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.extent && point.y >= 0 && point.y < self.extent
    }

    pub fn cell_count(&self) -> usize {
        (self.extent * self.extent) as usize
    }

    pub fn center(&self) -> Point {
        Point::new(self.extent / 2, self.extent / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rejects_out_of_bounds_points() {
        let grid = Grid::new(20);
        for i in 0..20 {
            assert!(!grid.contains(Point::new(-1, i)));
            assert!(!grid.contains(Point::new(i, -1)));
            assert!(!grid.contains(Point::new(20, i)));
            assert!(!grid.contains(Point::new(i, 20)));
        }
        assert!(grid.contains(Point::new(0, 0)));
        assert!(grid.contains(Point::new(19, 19)));
    }

    #[test]
    fn test_direction_deltas_are_unit_vectors() {
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Direction::Up.axis(), Direction::Down.axis());
        assert_ne!(Direction::Up.axis(), Direction::Left.axis());
    }
}
