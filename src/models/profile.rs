use serde::{Deserialize, Serialize};

/// Brendin sosial şəbəkə keçidləri.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub twitter: String,
}

/// Merchant-in brend profili.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantProfile {
    pub brand_name: String,
    pub description: String,
    pub category: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub social_links: SocialLinks,
    /// Logo reference (URI or data blob)
    pub logo: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    pub brand_name: String,
    pub description: String,
    pub category: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub social_links: SocialLinks,
    pub logo: String,
}
