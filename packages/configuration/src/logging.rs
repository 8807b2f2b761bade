use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Logging {
    /// Logging threshold. Possible values are: `off`, `error`, `warn`,
    /// `info`, `debug` and `trace`. Default is `info`.
    #[serde(default = "Logging::default_threshold")]
    pub threshold: Threshold,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
        }
    }
}

impl Logging {
    fn default_threshold() -> Threshold {
        Threshold::Info
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Threshold {
    /// A threshold lower than all logging levels.
    Off,
    /// Corresponds to the `Error` logging level.
    Error,
    /// Corresponds to the `Warn` logging level.
    Warn,
    /// Corresponds to the `Info` logging level.
    Info,
    /// Corresponds to the `Debug` logging level.
    Debug,
    /// Corresponds to the `Trace` logging level.
    Trace,
}
