//! Setup for the running application: configuration, logging, static time
//! anchors and the periodic display jobs.
pub mod app;
pub mod jobs;
pub mod logging;
