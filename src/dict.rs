//! Dictionary representations of the geometric value types.
//!
//! The dictionary is a string-keyed, type-tagged store
//! ([`serde_json::Map`]); this module only ever reads and writes numeric
//! entries under the fixed keys below. How the store is persisted or
//! transported is the caller's concern.

use serde_json::{Map, Number, Value};

use crate::error::{DictError, Result};
use crate::geometry::{Point, Rect, Size};

/// Key for the x-coordinate of a point or rectangle origin.
pub const KEY_X: &str = "X";
/// Key for the y-coordinate of a point or rectangle origin.
pub const KEY_Y: &str = "Y";
/// Key for the horizontal extent of a size or rectangle.
pub const KEY_WIDTH: &str = "Width";
/// Key for the vertical extent of a size or rectangle.
pub const KEY_HEIGHT: &str = "Height";

/// Boxes a coordinate for the store. Non-finite values have no number
/// representation there and encode as `Null`, which fails a later decode.
fn number(value: f64) -> Value {
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// Reads a required numeric entry.
fn required(dict: &Map<String, Value>, key: &'static str) -> Result<f64> {
    dict.get(key)
        .ok_or(DictError::MissingKey(key))?
        .as_f64()
        .ok_or(DictError::NotANumber(key))
}

impl Point {
    /// Encodes as a dictionary with `"X"` and `"Y"` entries.
    #[must_use]
    pub fn to_dictionary(self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert(KEY_X.to_owned(), number(self.x));
        dict.insert(KEY_Y.to_owned(), number(self.y));
        dict
    }

    /// Decodes from a dictionary carrying `"X"` and `"Y"` entries.
    ///
    /// # Errors
    ///
    /// Fails when either key is missing or holds a non-numeric value. No
    /// partially decoded point is ever produced.
    pub fn from_dictionary(dict: &Map<String, Value>) -> Result<Point> {
        Ok(Point::new(required(dict, KEY_X)?, required(dict, KEY_Y)?))
    }
}

impl Size {
    /// Encodes as a dictionary with `"Width"` and `"Height"` entries.
    #[must_use]
    pub fn to_dictionary(self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert(KEY_WIDTH.to_owned(), number(self.width));
        dict.insert(KEY_HEIGHT.to_owned(), number(self.height));
        dict
    }

    /// Decodes from a dictionary carrying `"Width"` and `"Height"` entries.
    ///
    /// # Errors
    ///
    /// Fails when either key is missing or holds a non-numeric value.
    pub fn from_dictionary(dict: &Map<String, Value>) -> Result<Size> {
        Ok(Size::new(
            required(dict, KEY_WIDTH)?,
            required(dict, KEY_HEIGHT)?,
        ))
    }
}

impl Rect {
    /// Encodes as a flat dictionary with `"X"`, `"Y"`, `"Width"`, and
    /// `"Height"` entries; origin and size are not nested.
    #[must_use]
    pub fn to_dictionary(self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert(KEY_X.to_owned(), number(self.origin.x));
        dict.insert(KEY_Y.to_owned(), number(self.origin.y));
        dict.insert(KEY_WIDTH.to_owned(), number(self.size.width));
        dict.insert(KEY_HEIGHT.to_owned(), number(self.size.height));
        dict
    }

    /// Decodes from a flat dictionary carrying all four entries.
    ///
    /// # Errors
    ///
    /// Fails when any of the four keys is missing or holds a non-numeric
    /// value. No partially decoded rectangle is ever produced.
    pub fn from_dictionary(dict: &Map<String, Value>) -> Result<Rect> {
        Ok(Rect::new(
            required(dict, KEY_X)?,
            required(dict, KEY_Y)?,
            required(dict, KEY_WIDTH)?,
            required(dict, KEY_HEIGHT)?,
        ))
    }
}
