//! Snake entity logic.
//!
//! A snake owns its body, its speed gate and its heading pair. Movement and
//! growth are independent operations: `advance` always drops the tail, and
//! `grow` duplicates the tail so the next `advance` leaves one extra segment.

use std::collections::VecDeque;
use std::time::Duration;

use log::trace;

use crate::config::game::MIN_SNAKE_SPEED;
use crate::config::SnakeSpawn;
use crate::game::error::GameError;
use crate::game::grid::Grid;
use crate::game::types::{Color, CollisionKind, Coordinate, Heading, KeyBindings, SnakeId};

/// Ordered body segments, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    segments: VecDeque<Coordinate>,
}

impl Body {
    /// `length` segments stacked on `start`. Length is at least one.
    pub fn collapsed(start: Coordinate, length: usize) -> Self {
        Self {
            segments: std::iter::repeat_n(start, length.max(1)).collect(),
        }
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let segments: VecDeque<Coordinate> = segments.into_iter().collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn head(&self) -> Coordinate {
        self.segments[0]
    }

    pub fn tail(&self) -> Coordinate {
        self.segments[self.segments.len() - 1]
    }

    /// Everything behind the head.
    pub fn trailing(&self) -> impl Iterator<Item = &Coordinate> {
        self.segments.iter().skip(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.segments.iter()
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        self.segments.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// New head in front, old tail dropped; length is unchanged.
    fn shift_to(&mut self, new_head: Coordinate) {
        self.segments.push_front(new_head);
        self.segments.pop_back();
    }

    fn duplicate_tail(&mut self) {
        let tail = self.tail();
        self.segments.push_back(tail);
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    pub id: SnakeId,
    pub name: String,
    pub color: Color,
    pub bindings: KeyBindings,
    body: Body,
    min_interval: Duration,
    heading_current: Heading,
    heading_pending: Heading,
    /// `None` until the first move; the first move is never gated.
    last_move_time: Option<Duration>,
}

impl Snake {
    pub fn new(
        id: SnakeId,
        name: impl Into<String>,
        body: Body,
        heading: Heading,
        color: Color,
        bindings: KeyBindings,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            bindings,
            body,
            min_interval: Duration::ZERO,
            heading_current: heading,
            heading_pending: heading,
            last_move_time: None,
        }
    }

    /// Build a snake from its spawn entry, collapsed on the start cell.
    pub fn spawn(spawn: &SnakeSpawn, length: usize, speed: u32, max_tick_rate: u32) -> Result<Self, GameError> {
        let mut snake = Snake::new(
            spawn.id,
            spawn.name.clone(),
            Body::collapsed(spawn.start, length),
            spawn.heading,
            spawn.color,
            spawn.bindings.clone(),
        );
        snake.set_speed(speed, max_tick_rate)?;
        Ok(snake)
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn head(&self) -> Coordinate {
        self.body.head()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> Heading {
        self.heading_current
    }

    pub fn pending_heading(&self) -> Heading {
        self.heading_pending
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Record a requested heading. It only takes effect on the next move,
    /// and not at all if it is the reverse of the current heading.
    pub fn request_heading(&mut self, heading: Heading) {
        trace!("[Snake] {} requests {:?}", self.id, heading);
        self.heading_pending = heading;
    }

    /// Append a copy of the tail segment.
    pub fn grow(&mut self) {
        self.body.duplicate_tail();
    }

    /// Set speed in moves per second, stored as the minimum interval between moves.
    pub fn set_speed(&mut self, ticks_per_second: u32, max_tick_rate: u32) -> Result<(), GameError> {
        if ticks_per_second < MIN_SNAKE_SPEED || ticks_per_second > max_tick_rate {
            return Err(GameError::InvalidSpeed {
                speed: ticks_per_second,
                min: MIN_SNAKE_SPEED,
                max: max_tick_rate,
            });
        }
        self.min_interval = Duration::from_secs(1) / ticks_per_second;
        Ok(())
    }

    /// Move one cell if the speed gate allows it. Returns whether a move happened.
    pub fn advance(&mut self, now: Duration) -> bool {
        if let Some(last) = self.last_move_time {
            if now < last + self.min_interval {
                return false;
            }
        }

        if !self.heading_pending.is_opposite(self.heading_current) {
            self.heading_current = self.heading_pending;
        }

        let new_head = self.body.head() + self.heading_current;
        self.body.shift_to(new_head);
        self.last_move_time = Some(now);
        true
    }

    pub fn collided_with_wall(&self, grid: &Grid) -> bool {
        !grid.contains(self.head())
    }

    pub fn collided_with_self(&self) -> bool {
        let head = self.head();
        self.body.trailing().any(|segment| *segment == head)
    }

    /// True if the head sits on any segment of a snake with a different id.
    pub fn collided_with_other<'a>(&self, others: impl IntoIterator<Item = &'a Snake>) -> bool {
        let head = self.head();
        others
            .into_iter()
            .filter(|other| other.id != self.id)
            .any(|other| other.body.contains(head))
    }

    /// First collision found, checked opponent, wall, then self.
    pub fn collision<'a>(&self, others: impl IntoIterator<Item = &'a Snake>, grid: &Grid) -> Option<CollisionKind> {
        if self.collided_with_other(others) {
            Some(CollisionKind::Opponent)
        } else if self.collided_with_wall(grid) {
            Some(CollisionKind::Wall)
        } else if self.collided_with_self() {
            Some(CollisionKind::SelfBody)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_at(id: u8, segments: &[(i32, i32)], heading: Heading) -> Snake {
        let body = Body::from_segments(segments.iter().map(|&(r, c)| Coordinate::new(r, c)))
            .expect("non-empty body");
        let mut snake = Snake::new(SnakeId(id), format!("snake-{id}"), body, heading, Color::BLUE, KeyBindings::default());
        snake.set_speed(10, 60).expect("valid speed");
        snake
    }

    fn segments(snake: &Snake) -> Vec<Coordinate> {
        snake.body().iter().copied().collect()
    }

    #[test]
    fn test_set_speed_bounds() {
        let mut snake = snake_at(1, &[(5, 5)], Heading::Right);
        assert!(matches!(snake.set_speed(2, 60), Err(GameError::InvalidSpeed { speed: 2, .. })));
        assert!(matches!(snake.set_speed(61, 60), Err(GameError::InvalidSpeed { speed: 61, .. })));
        assert!(snake.set_speed(3, 60).is_ok());
        assert!(snake.set_speed(60, 60).is_ok());
        assert_eq!(snake.min_interval(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_advance_shifts_body_toward_head() {
        let mut snake = snake_at(1, &[(5, 5), (5, 4), (5, 3)], Heading::Right);
        assert!(snake.advance(Duration::from_secs(1)));
        assert_eq!(
            segments(&snake),
            vec![Coordinate::new(5, 6), Coordinate::new(5, 5), Coordinate::new(5, 4)]
        );
    }

    #[test]
    fn test_advance_is_gated_by_speed() {
        let mut snake = snake_at(1, &[(5, 5), (5, 4)], Heading::Right);
        assert!(snake.advance(Duration::from_millis(1000)));
        let after_first = segments(&snake);

        // 10 moves per second: anything under 100ms later is ignored.
        for ms in [1000, 1050, 1099] {
            assert!(!snake.advance(Duration::from_millis(ms)));
            assert_eq!(segments(&snake), after_first);
        }
        assert!(snake.advance(Duration::from_millis(1100)));
        assert_ne!(segments(&snake), after_first);
    }

    #[test]
    fn test_first_advance_is_not_gated() {
        let mut snake = snake_at(1, &[(5, 3), (5, 3)], Heading::Right);
        assert!(snake.advance(Duration::ZERO));
        assert_eq!(snake.head(), Coordinate::new(5, 4));
    }

    #[test]
    fn test_reverse_request_is_ignored() {
        let mut snake = snake_at(1, &[(5, 5), (5, 4), (5, 3)], Heading::Right);
        let neck = segments(&snake)[1];
        snake.request_heading(Heading::Left);
        snake.advance(Duration::from_secs(1));
        assert_ne!(snake.head(), neck);
        assert_eq!(snake.head(), Coordinate::new(5, 6));
        assert_eq!(snake.heading(), Heading::Right);
    }

    #[test]
    fn test_turn_is_applied_on_next_move() {
        let mut snake = snake_at(1, &[(5, 5), (5, 4)], Heading::Right);
        snake.request_heading(Heading::Up);
        assert_eq!(snake.heading(), Heading::Right);
        snake.advance(Duration::from_secs(1));
        assert_eq!(snake.heading(), Heading::Up);
        assert_eq!(snake.head(), Coordinate::new(4, 5));
    }

    #[test]
    fn test_grow_then_advance_adds_one_segment() {
        let mut plain = snake_at(1, &[(5, 5), (5, 4), (5, 3)], Heading::Right);
        let mut fed = plain.clone();

        plain.advance(Duration::from_secs(1));
        plain.advance(Duration::from_secs(2));

        fed.advance(Duration::from_secs(1));
        fed.grow();
        fed.advance(Duration::from_secs(2));

        assert_eq!(fed.len(), plain.len() + 1);
        assert_eq!(fed.head(), plain.head());

        let mut fed_first = snake_at(1, &[(5, 5), (5, 4), (5, 3)], Heading::Right);
        fed_first.grow();
        fed_first.advance(Duration::from_secs(1));
        fed_first.advance(Duration::from_secs(2));
        assert_eq!(segments(&fed_first), segments(&fed));
    }

    #[test]
    fn test_wall_collision_only_outside_grid() {
        let grid = Grid::new(25, 25);
        assert!(!snake_at(1, &[(0, 0)], Heading::Up).collided_with_wall(&grid));
        assert!(!snake_at(1, &[(24, 24)], Heading::Up).collided_with_wall(&grid));
        assert!(snake_at(1, &[(-1, 4)], Heading::Up).collided_with_wall(&grid));
        assert!(snake_at(1, &[(4, 25)], Heading::Up).collided_with_wall(&grid));
    }

    #[test]
    fn test_self_collision() {
        let looped = snake_at(1, &[(5, 5), (5, 6), (6, 6), (6, 5), (5, 5)], Heading::Up);
        assert!(looped.collided_with_self());
        let straight = snake_at(1, &[(5, 5), (5, 6), (5, 7)], Heading::Left);
        assert!(!straight.collided_with_self());
    }

    #[test]
    fn test_other_collision_ignores_same_id() {
        let a = snake_at(1, &[(5, 5), (5, 4)], Heading::Right);
        let b = snake_at(2, &[(6, 5), (5, 5)], Heading::Up);
        let c = snake_at(3, &[(9, 9)], Heading::Up);
        assert!(a.collided_with_other([&a, &b]));
        assert!(!a.collided_with_other([&a, &c]));
        assert_eq!(a.collision([&a, &b], &Grid::new(25, 25)), Some(CollisionKind::Opponent));
    }
}
