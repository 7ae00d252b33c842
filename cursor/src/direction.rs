/// Wire code reserved for the "no direction" sentinel. Never a valid payload.
pub const INVALID_DIRECTION_CODE: i64 = 3;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn code(&self) -> i64 {
        match self {
            Self::Prev => 1,
            Self::Next => 2,
        }
    }

    pub fn from_code(code: &i64) -> Option<Self> {
        match code {
            1 => Some(Self::Prev),
            2 => Some(Self::Next),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(Direction::Prev.code(), 1);
        assert_eq!(Direction::Next.code(), 2);
        assert_eq!(Direction::from_code(&1), Some(Direction::Prev));
        assert_eq!(Direction::from_code(&2), Some(Direction::Next));
        assert_eq!(Direction::from_code(&INVALID_DIRECTION_CODE), None);
        assert_eq!(Direction::from_code(&0), None);
    }
}
