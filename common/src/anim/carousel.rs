#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

impl Direction {
    // css class suffix for the slide-in animation
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

// index over a fixed number of slides, with autoplay that pauses while hovered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    direction: Direction,
    autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel {
            len,
            index: 0,
            direction: Direction::None,
            autoplay: true,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Forward;
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Backward;
        self.index = (self.index + self.len - 1) % self.len;
    }

    // out-of-range indices are ignored
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len || index == self.index {
            return;
        }
        self.direction = if index > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = index;
    }

    // one autoplay period elapsed
    pub fn tick(&mut self) -> bool {
        if self.autoplay {
            self.next();
        }
        self.autoplay
    }

    pub fn pause(&mut self) {
        self.autoplay = false;
    }

    pub fn resume(&mut self) {
        self.autoplay = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_previous_wrap() {
        let mut carousel = Carousel::new(3);

        carousel.previous();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.direction(), Direction::Backward);

        carousel.next();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn test_go_to() {
        let mut carousel = Carousel::new(5);

        carousel.go_to(3);
        assert_eq!((carousel.index(), carousel.direction()), (3, Direction::Forward));

        carousel.go_to(1);
        assert_eq!((carousel.index(), carousel.direction()), (1, Direction::Backward));

        carousel.go_to(9);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_paused_carousel_does_not_advance() {
        let mut carousel = Carousel::new(4);

        carousel.pause();
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 0);

        carousel.resume();
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);

        carousel.next();
        carousel.previous();
        carousel.go_to(0);
        carousel.tick();

        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
    }
}
