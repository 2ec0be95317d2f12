//! Theater credit schema.
//!
//! One entry per production, with the full cast list:
//!
//! ```yaml
//! title: Der Besuch der alten Dame
//! author: Friedrich Dürrenmatt
//! location: Stadttheater
//! date: 2019-11-09
//! director: A. Regisseur
//! producer: Theatergruppe
//! cover:
//!   src: /images/dame.jpg
//!   alt: Bühnenbild
//! roles:
//!   - role: Claire Zachanassian
//!     actor: E. Darstellerin
//! ```

use super::images::ImageRef;
use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Serialize};

/// URL segment theater credits are published under.
pub const THEATER_BASE: &str = "theater";

/// One role/actor pair; order in the file is the billing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: String,
    pub actor: String,
}

/// A validated theater credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheaterCredit {
    pub title: String,
    pub author: String,
    pub location: String,
    pub date: DateTimeUtc,
    pub director: String,
    pub producer: String,
    pub cover: ImageRef,
    /// Additional production photos.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageRef>,
    pub roles: Vec<RoleAssignment>,
}
