//! Configuration for myads-core
//!
//! Centralized settings for notification windows and arXiv class
//! validation. Defaults match the production notification schedule.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// System-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyadsConfig {
    /// Date window settings for notification runs
    pub windows: WindowConfig,
    /// arXiv classes accepted on arXiv notifications
    pub allowed_arxiv_classes: Vec<String>,
}

impl Default for MyadsConfig {
    fn default() -> Self {
        Self {
            windows: WindowConfig::default(),
            allowed_arxiv_classes: ARXIV_CLASSES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Date window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Days covered by a weekly notification window
    pub weekly_time_range: u32,
    /// Days reached back on Mondays to cover the weekend gap
    pub daily_time_range: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            weekly_time_range: 25,
            daily_time_range: 2,
        }
    }
}

impl MyadsConfig {
    /// Create configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.windows.weekly_time_range == 0 {
            return Err(ConfigError::InvalidConfig(
                "weekly_time_range must be positive".to_string(),
            ));
        }

        if self.windows.daily_time_range == 0 {
            return Err(ConfigError::InvalidConfig(
                "daily_time_range must be positive".to_string(),
            ));
        }

        if self.allowed_arxiv_classes.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "allowed_arxiv_classes must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether an arXiv class (parent category or dotted sub-category) is
    /// recognized
    pub fn is_allowed_class(&self, class: &str) -> bool {
        self.allowed_arxiv_classes.iter().any(|c| c == class)
    }
}

/// The arXiv taxonomy accepted on arXiv notifications: parent archives plus
/// their dotted sub-categories.
pub const ARXIV_CLASSES: &[&str] = &[
    "astro-ph",
    "astro-ph.GA",
    "astro-ph.CO",
    "astro-ph.EP",
    "astro-ph.HE",
    "astro-ph.IM",
    "astro-ph.SR",
    "cond-mat",
    "cond-mat.dis-nn",
    "cond-mat.mtrl-sci",
    "cond-mat.mes-hall",
    "cond-mat.other",
    "cond-mat.quant-gas",
    "cond-mat.soft",
    "cond-mat.stat-mech",
    "cond-mat.str-el",
    "cond-mat.supr-con",
    "gr-qc",
    "hep-ex",
    "hep-lat",
    "hep-ph",
    "hep-th",
    "math-ph",
    "nlin",
    "nlin.AO",
    "nlin.CG",
    "nlin.CD",
    "nlin.SI",
    "nlin.PS",
    "nucl-ex",
    "nucl-th",
    "physics",
    "physics.acc-ph",
    "physics.app-ph",
    "physics.ao-ph",
    "physics.atm-clus",
    "physics.atom-ph",
    "physics.bio-ph",
    "physics.chem-ph",
    "physics.class-ph",
    "physics.comp-ph",
    "physics.data-an",
    "physics.flu-dyn",
    "physics.gen-ph",
    "physics.geo-ph",
    "physics.hist-ph",
    "physics.ins-det",
    "physics.med-ph",
    "physics.optics",
    "physics.soc-ph",
    "physics.ed-ph",
    "physics.plasm-ph",
    "physics.pop-ph",
    "physics.space-ph",
    "quant-ph",
    "math",
    "math.AG",
    "math.AT",
    "math.AP",
    "math.CT",
    "math.CA",
    "math.CO",
    "math.AC",
    "math.CV",
    "math.DG",
    "math.DS",
    "math.FA",
    "math.GM",
    "math.GN",
    "math.GT",
    "math.GR",
    "math.HO",
    "math.IT",
    "math.KT",
    "math.LO",
    "math.MP",
    "math.MG",
    "math.NT",
    "math.NA",
    "math.OA",
    "math.OC",
    "math.PR",
    "math.QA",
    "math.RT",
    "math.RA",
    "math.SP",
    "math.ST",
    "math.SG",
    "cs",
    "cs.AI",
    "cs.CL",
    "cs.CC",
    "cs.CE",
    "cs.CG",
    "cs.GT",
    "cs.CV",
    "cs.CY",
    "cs.CR",
    "cs.DS",
    "cs.DB",
    "cs.DL",
    "cs.DM",
    "cs.DC",
    "cs.ET",
    "cs.FL",
    "cs.GL",
    "cs.GR",
    "cs.AR",
    "cs.HC",
    "cs.IR",
    "cs.IT",
    "cs.LO",
    "cs.LG",
    "cs.MS",
    "cs.MA",
    "cs.MM",
    "cs.NI",
    "cs.NE",
    "cs.NA",
    "cs.OS",
    "cs.OH",
    "cs.PF",
    "cs.PL",
    "cs.RO",
    "cs.SI",
    "cs.SE",
    "cs.SD",
    "cs.SC",
    "cs.SY",
    "q-bio",
    "q-bio.BM",
    "q-bio.CB",
    "q-bio.GN",
    "q-bio.MN",
    "q-bio.NC",
    "q-bio.OT",
    "q-bio.PE",
    "q-bio.QM",
    "q-bio.SC",
    "q-bio.TO",
    "q-fin",
    "q-fin.CP",
    "q-fin.EC",
    "q-fin.GN",
    "q-fin.MF",
    "q-fin.PM",
    "q-fin.PR",
    "q-fin.RM",
    "q-fin.ST",
    "q-fin.TR",
    "stat",
    "stat.AP",
    "stat.CO",
    "stat.ML",
    "stat.ME",
    "stat.OT",
    "stat.TH",
    "eess",
    "eess.AS",
    "eess.IV",
    "eess.SP",
    "eess.SY",
    "econ",
    "econ.EM",
    "econ.GN",
    "econ.TH",
];
