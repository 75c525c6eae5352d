//! Skill Service
//!
//! Detects skill labels in free-text job and role descriptions using a fixed
//! vocabulary, a synonym map, topic expansion and two role/cloud special
//! cases. Served over HTTP by the `skill-service` binary.
//!
//! ```ignore
//! use skill_service::SkillMatcher;
//!
//! let matcher = SkillMatcher::new()?;
//! let skills = matcher.predict("frontend engineer, some k8s");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod matcher;
pub mod router;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError};
pub use matcher::{Detection, MatchRule, MatcherError, SkillMatcher};
pub use router::{build_router, AppState};
