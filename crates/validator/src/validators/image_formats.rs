//! Thumbnail image format validator

use crate::consts::IMAGE_FORMATS;

use super::membership::contains_ignore_case;

crate::validator! {
    /// Accepts the raster formats thumbnails can be rendered in, ignoring
    /// case. Non-strings are rejected.
    pub ImageFormats;
    templates { NotInArray => "'%value%' is not a supported image format" }
    rule(value) {
        value
            .as_str()
            .is_some_and(|format| contains_ignore_case(IMAGE_FORMATS, format))
    }
    error NotInArray;
    fn image_formats();
}
