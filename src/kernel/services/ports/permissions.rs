use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

pub const PERMISSION_MANAGE_PAGES: &str = "manage:pages";
pub const PERMISSION_READ_PAGES: &str = "read:pages";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureFlag {
    /// Granular access control: page actions follow page permissions.
    LicenseGacEnabled,
}

impl FeatureFlag {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "license_gac_enabled" => Some(Self::LicenseGacEnabled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    enabled: FxHashSet<FeatureFlag>,
}

impl FeatureFlags {
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut flags = Self::default();
        for name in names {
            match FeatureFlag::from_name(name) {
                Some(flag) => flags.set(flag, true),
                None => tracing::warn!(flag = name, "unknown feature flag"),
            }
        }
        flags
    }

    pub fn set(&mut self, flag: FeatureFlag, enabled: bool) {
        if enabled {
            self.enabled.insert(flag);
        } else {
            self.enabled.remove(&flag);
        }
    }

    pub fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.enabled.contains(&flag)
    }
}

/// Whether the current user may rename, add to, or use the context menu of page widgets.
///
/// Without granular access control every editor manages pages.
pub fn has_manage_page_permission(gac_enabled: bool, page_permissions: &[String]) -> bool {
    if !gac_enabled {
        return true;
    }
    page_permissions.iter().any(|p| p == PERMISSION_MANAGE_PAGES)
}
