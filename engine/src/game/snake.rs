use std::collections::VecDeque;

use super::types::Point;

/// Snake body, head at the front. The body may contain duplicate cells:
/// an invincible snake passes through itself, and a golden power-up appends
/// a copy of the tail. Collision checks therefore scan rather than hash.
#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start_pos);
        Self { body }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn grow_head(&mut self, new_head: Point) {
        self.body.push_front(new_head);
    }

    pub fn drop_tail(&mut self) {
        self.body
            .pop_back()
            .expect("Snake body should never be empty");
    }

    /// Golden power-up growth: one extra segment on top of the normal
    /// head insertion, as a copy of the current tail.
    pub fn duplicate_tail(&mut self) {
        let tail = *self.body.back().expect("Snake body should never be empty");
        self.body.push_back(tail);
    }

    /// True iff the head occupies any non-head cell.
    pub fn is_self_collided(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_reentering_body_is_self_collision() {
        let mut snake = Snake::new(Point::new(5, 5));
        snake.body = VecDeque::from([Point::new(5, 5), Point::new(6, 5), Point::new(5, 5)]);
        assert!(snake.is_self_collided());
    }

    #[test]
    fn test_straight_body_is_not_self_collision() {
        let mut snake = Snake::new(Point::new(5, 5));
        snake.body = VecDeque::from([Point::new(5, 5), Point::new(6, 5), Point::new(7, 5)]);
        assert!(!snake.is_self_collided());
    }

    #[test]
    fn test_duplicate_tail_grows_by_one() {
        let mut snake = Snake::new(Point::new(3, 3));
        snake.grow_head(Point::new(3, 2));
        snake.duplicate_tail();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body[1], snake.body[2]);
    }
}
