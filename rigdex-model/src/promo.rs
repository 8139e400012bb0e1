use crate::error::{ModelError, Result};
use crate::ids::PlacementId;
use serde::{Deserialize, Serialize};

/// An admin-managed banner placement competing for an ad slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default)]
    pub id: PlacementId,
    pub title: String,
    pub image_url: String,
    pub target_url: String,
    /// Rotation weight. A placement with weight 3 is shown three times as
    /// often as one with weight 1.
    pub priority: u32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Placement {
    /// Construct an active placement, rejecting a zero weight up front.
    pub fn new(
        title: impl Into<String>,
        image_url: impl Into<String>,
        target_url: impl Into<String>,
        priority: u32,
    ) -> Result<Self> {
        if priority == 0 {
            return Err(ModelError::InvalidPlacement(
                "priority must be a positive integer".into(),
            ));
        }
        Ok(Self {
            id: PlacementId::new(),
            title: title.into(),
            image_url: image_url.into(),
            target_url: target_url.into(),
            priority,
            active: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_priority() {
        assert!(Placement::new("Summer sale", "/img/sale.png", "https://example.com", 0).is_err());
    }

    #[test]
    fn deserializes_with_active_default() {
        let placement: Placement = serde_json::from_str(
            r#"{"title":"GPU drop","image_url":"/img/gpu.png","target_url":"https://example.com/gpus","priority":2}"#,
        )
        .unwrap();
        assert!(placement.active);
        assert_eq!(placement.priority, 2);
    }
}
