use serde::{Deserialize, Serialize};

/// Fulfillment channel as stored on order records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentChannel {
    /// Amazon-fulfilled (FBA)
    Afn,
    /// Merchant-fulfilled (FBM)
    Mfn,
}

impl FulfillmentChannel {
    /// The code Amazon writes on the order record
    pub fn code(&self) -> &'static str {
        match self {
            FulfillmentChannel::Afn => "AFN",
            FulfillmentChannel::Mfn => "MFN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AFN" => Some(FulfillmentChannel::Afn),
            "MFN" => Some(FulfillmentChannel::Mfn),
            _ => None,
        }
    }
}

/// Fulfillment filter as presented to the user.
///
/// The UI vocabulary (FBA/FBM) differs from the stored channel codes
/// (AFN/MFN); `matches` performs that translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FulfillmentFilter {
    #[default]
    All,
    Fba,
    Fbm,
}

impl FulfillmentFilter {
    pub fn code(&self) -> &'static str {
        match self {
            FulfillmentFilter::All => "All",
            FulfillmentFilter::Fba => "FBA",
            FulfillmentFilter::Fbm => "FBM",
        }
    }

    /// Parse a filter value; anything unrecognized falls back to All.
    pub fn from_code(code: &str) -> Self {
        match code {
            "FBA" => FulfillmentFilter::Fba,
            "FBM" => FulfillmentFilter::Fbm,
            _ => FulfillmentFilter::All,
        }
    }

    /// Does an order's stored fulfillment_channel pass this filter?
    pub fn matches(&self, channel: &str) -> bool {
        match self {
            FulfillmentFilter::All => true,
            FulfillmentFilter::Fba => channel == FulfillmentChannel::Afn.code(),
            FulfillmentFilter::Fbm => channel == FulfillmentChannel::Mfn.code(),
        }
    }
}

/// Order status filter: exact match against the stored status, or All.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Exact(String),
}

impl StatusFilter {
    pub fn from_code(code: &str) -> Self {
        if code == "All" {
            StatusFilter::All
        } else {
            StatusFilter::Exact(code.to_string())
        }
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Exact(wanted) => status == wanted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fba_maps_to_afn_and_fbm_to_mfn() {
        assert!(FulfillmentFilter::Fba.matches("AFN"));
        assert!(!FulfillmentFilter::Fba.matches("MFN"));
        assert!(FulfillmentFilter::Fbm.matches("MFN"));
        assert!(!FulfillmentFilter::Fbm.matches("AFN"));
        assert!(FulfillmentFilter::All.matches("AFN"));
        assert!(FulfillmentFilter::All.matches(""));
    }

    #[test]
    fn status_filter_is_exact_equality() {
        let f = StatusFilter::from_code("Shipped");
        assert!(f.matches("Shipped"));
        assert!(!f.matches("shipped"));
        assert!(StatusFilter::from_code("All").matches("anything"));
    }
}
