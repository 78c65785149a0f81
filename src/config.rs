//! Site-wide constants. Copy lives next to the sections that render it;
//! everything that is a contact point or shared label lives here.

pub const SITE_NAME: &str = "Spatial.Properties";

pub const DEFAULT_TITLE: &str = "Spatial.Properties — Spatial context, delivered like software";

/// Scheduling destination for the inline Calendly widget and its
/// plain-link fallback.
pub const CALENDLY_URL: &str = "https://calendly.com/spatial-properties/30min";

pub const CALENDLY_SCRIPT_URL: &str = "https://assets.calendly.com/assets/external/widget.js";

pub const CONTACT_EMAIL: &str = "hello@spatial.properties";
pub const INVESTORS_EMAIL: &str = "investors@spatial.properties";

pub const COPYRIGHT_HOLDER: &str = "Future Bridge AI";
