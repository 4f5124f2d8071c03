/// `OpenAPI` tag for service endpoints (health).
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for avatar rendering endpoints.
pub const AVATAR_TAG: &str = "Avatar";

/// Raster size used when the caller omits or garbles `width`/`height`.
pub const DEFAULT_RASTER_SIZE: u32 = 300;
/// Upper bound for a requested raster edge unless configured otherwise.
pub const DEFAULT_MAX_DIMENSION: u32 = 4096;

/// Query keys that size the raster output and never reach the resolver.
pub const WIDTH_PARAM: &str = "width";
pub const HEIGHT_PARAM: &str = "height";

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
pub const PNG_CONTENT_TYPE: &str = "image/png";
