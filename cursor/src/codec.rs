use base64::{engine::general_purpose::STANDARD, Engine};
use ks_error::{Error, Result};
use uuid::Uuid;

use crate::{
    cursor::Cursor,
    direction::{Direction, INVALID_DIRECTION_CODE},
};

/// Field separator. Canonical UUID text and decimal integers never contain it.
pub const SEPARATOR: char = ';';

const FIELD_COUNT: usize = 3;

pub fn encode(id: &Uuid, serial: &i64, direction: &Direction) -> String {
    STANDARD.encode(format!(
        "{}{SEPARATOR}{serial}{SEPARATOR}{}",
        id.hyphenated(),
        direction.code()
    ))
}

pub fn decode(token: &str, expected: &Direction) -> Result<Cursor> {
    let bytes = match STANDARD.decode(token) {
        Ok(bytes) => bytes,
        Err(err) => return Err(Error::MalformedToken(format!("not valid base64: {err}"))),
    };

    let payload = match String::from_utf8(bytes) {
        Ok(payload) => payload,
        Err(_) => return Err(Error::MalformedToken("payload is not UTF-8".to_owned())),
    };

    let fields = payload.split(SEPARATOR).collect::<Vec<_>>();
    let [id, serial, code] = fields.as_slice() else {
        return Err(Error::MalformedToken(format!(
            "expected {FIELD_COUNT} fields, found {}",
            fields.len()
        )));
    };

    let id = match Uuid::try_parse(id) {
        Ok(id) => id,
        Err(err) => return Err(Error::MalformedToken(format!("invalid identifier: {err}"))),
    };

    let serial = match serial.parse::<i64>() {
        Ok(serial) => serial,
        Err(err) => return Err(Error::MalformedToken(format!("invalid serial: {err}"))),
    };

    let code = match code.parse::<i64>() {
        Ok(code) => code,
        Err(err) => {
            return Err(Error::MalformedToken(format!(
                "invalid direction code: {err}"
            )))
        }
    };

    let direction = match Direction::from_code(&code) {
        Some(direction) => direction,
        None if code == INVALID_DIRECTION_CODE => return Err(Error::InherentlyInvalidDirection),
        None => {
            return Err(Error::MalformedToken(format!(
                "unknown direction code {code}"
            )))
        }
    };

    if &direction != expected {
        return Err(Error::DirectionMismatch {
            expected: expected.to_str(),
            found: direction.to_str(),
        });
    }

    Ok(Cursor::new(&id, &serial, &direction))
}
