//! Fixed parameters of the ReportingCloud service contract.

/// Timestamp format of the backend: ISO 8601 extended, seconds precision,
/// colon-separated numeric offset (`2016-06-02T15:49:57+00:00`).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Number of characters in a timestamp rendered with [`DATE_TIME_FORMAT`].
pub const DATE_TIME_LENGTH: usize = 25;

/// Offset every timestamp must carry, in seconds east of UTC.
pub const UTC_OFFSET_SECONDS: i32 = 0;

/// Smallest zoom factor (percent) the rendering engine accepts.
pub const MIN_ZOOM_FACTOR: i64 = 1;

/// Largest zoom factor (percent) the rendering engine accepts.
pub const MAX_ZOOM_FACTOR: i64 = 400;

/// Extensions of documents the service can read or produce.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["doc", "docx", "htm", "html", "pdf", "rtf", "tx"];

/// Extensions of templates the service stores.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["tx"];

/// Raster formats thumbnails can be rendered in.
pub const IMAGE_FORMATS: &[&str] = &["bmp", "gif", "jpg", "png", "tif"];
