/// Closed catalog of streaming platforms a subscription can be tracked for.
/// The wire representation keeps the display names the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ServiceType {
    #[serde(rename = "NETFLIX")]
    Netflix,
    #[serde(rename = "AMAZON PRIME")]
    AmazonPrime,
    #[serde(rename = "DISNEY+")]
    DisneyPlus,
    #[serde(rename = "HBO MAX")]
    HboMax,
    #[serde(rename = "SPOTIFY")]
    Spotify,
    #[serde(rename = "YOUTUBE PREMIUM")]
    YoutubePremium,
    #[serde(rename = "APPLE TV+")]
    AppleTvPlus,
    #[serde(rename = "PARAMOUNT+")]
    ParamountPlus,
}

impl ServiceType {
    pub fn all() -> [ServiceType; 8] {
        [
            ServiceType::Netflix,
            ServiceType::AmazonPrime,
            ServiceType::DisneyPlus,
            ServiceType::HboMax,
            ServiceType::Spotify,
            ServiceType::YoutubePremium,
            ServiceType::AppleTvPlus,
            ServiceType::ParamountPlus,
        ]
    }

    pub fn parse(service: String) -> Result<ServiceType, String> {
        match service.as_str() {
            "NETFLIX" => Ok(ServiceType::Netflix),
            "AMAZON PRIME" => Ok(ServiceType::AmazonPrime),
            "DISNEY+" => Ok(ServiceType::DisneyPlus),
            "HBO MAX" => Ok(ServiceType::HboMax),
            "SPOTIFY" => Ok(ServiceType::Spotify),
            "YOUTUBE PREMIUM" => Ok(ServiceType::YoutubePremium),
            "APPLE TV+" => Ok(ServiceType::AppleTvPlus),
            "PARAMOUNT+" => Ok(ServiceType::ParamountPlus),
            _ => Err(format!("{} is not a supported streaming service", service)),
        }
    }
}

impl AsRef<str> for ServiceType {
    fn as_ref(&self) -> &str {
        match self {
            ServiceType::Netflix => "NETFLIX",
            ServiceType::AmazonPrime => "AMAZON PRIME",
            ServiceType::DisneyPlus => "DISNEY+",
            ServiceType::HboMax => "HBO MAX",
            ServiceType::Spotify => "SPOTIFY",
            ServiceType::YoutubePremium => "YOUTUBE PREMIUM",
            ServiceType::AppleTvPlus => "APPLE TV+",
            ServiceType::ParamountPlus => "PARAMOUNT+",
        }
    }
}
