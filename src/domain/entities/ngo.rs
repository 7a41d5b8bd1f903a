//! Environmental NGOs matching the user's interests

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ngo {
    pub name: String,
    pub location: String,
    pub focus: String,
}
