use uuid::Uuid;

use crate::{codec, direction::Direction};

/// A decoded position in a keyset-ordered result set.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Cursor {
    id: Uuid,
    serial: i64,
    direction: Direction,
}

impl Cursor {
    pub fn new(id: &Uuid, serial: &i64, direction: &Direction) -> Self {
        Self {
            id: *id,
            serial: *serial,
            direction: *direction,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn serial(&self) -> &i64 {
        &self.serial
    }

    pub fn direction(&self) -> &Direction {
        &self.direction
    }

    /// Keyset sort key: serial first, identifier as tiebreaker.
    pub fn key(&self) -> (i64, Uuid) {
        (self.serial, self.id)
    }

    pub fn to_token(&self) -> String {
        codec::encode(&self.id, &self.serial, &self.direction)
    }
}
