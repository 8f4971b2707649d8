//! Protocol constants for the mobile-app API.
//!
//! Header values and limits matching what the GMA Android app sends.

/// Base URL of the production API for the AP region.
pub const PRODUCTION_BASE_URL: &str = "https://ap-prod.api.mcd.com";

/// Market identifier sent with every request.
pub const MARKET_ID: &str = "AU";

/// Source application identifier sent with every request.
pub const SOURCE_APP: &str = "GMA";

/// Accept-Language the app pins regardless of device locale.
pub const ACCEPT_LANGUAGE: &str = "en-AU";

/// User agent of the app build this client imitates.
pub const USER_AGENT: &str = "MCDSDK/20.0.14 (Android; 31; en-AU) GMA/6.2";

/// Header carrying the Akamai bot-detection sensor payload.
pub const SENSOR_DATA_HEADER: &str = "x-acf-sensor-data";

/// Length of the random device id generated for login and registration.
pub const DEVICE_ID_LEN: usize = 16;
