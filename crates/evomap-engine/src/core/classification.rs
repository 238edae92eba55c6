use serde::{Deserialize, Serialize};

/// Sourcing decision assigned to a component.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    #[display("build")]
    Build,
    #[display("buy")]
    Buy,
    #[display("repurpose")]
    Repurpose,
}

impl Classification {
    pub const ALL: [Self; 3] = [Self::Build, Self::Buy, Self::Repurpose];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Buy => "buy",
            Self::Repurpose => "repurpose",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_conversion() {
        for class in Classification::ALL {
            assert_eq!(class.as_str().parse::<Classification>().ok(), Some(class));
            assert_eq!(class.to_string(), class.as_str());
            assert_eq!(
                serde_json::to_string(&class).unwrap(),
                format!("\"{}\"", class.as_str())
            );
        }
        assert!("outsource".parse::<Classification>().is_err());
    }
}
