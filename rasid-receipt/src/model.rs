//! Receipt Data Model

use rasid_words::to_indian_words;
use serde::{Deserialize, Serialize};

/// Payment receipt payload (one value per rendered receipt)
///
/// Amounts are whole rupees held as `f64` so that absent, blank or
/// fractional form input degrades gracefully through the formatting
/// layer instead of failing validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptData {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_address: String,
    /// Installed system size in kilowatts
    #[serde(default)]
    pub system_kw: f64,
    /// Total installation fee in rupees
    #[serde(default)]
    pub total_amount: f64,
    /// Financed portion, if any
    pub loan_amount: Option<f64>,
    /// Customer margin money, if any
    pub margin_amount: Option<f64>,
    /// Primary line item description; blank falls back to
    /// "{kw}kw Ongrid Solar System"
    #[serde(default)]
    pub item_description: String,
}

impl Default for ReceiptData {
    fn default() -> Self {
        Self {
            customer_name: "Udaya Singh Banara".to_string(),
            customer_address: "Jajapur".to_string(),
            system_kw: 3.0,
            total_amount: 210_000.0,
            loan_amount: Some(189_000.0),
            margin_amount: Some(21_000.0),
            item_description: "3kw Ongrid Solar System".to_string(),
        }
    }
}

impl ReceiptData {
    /// System size label such as "3kw". Unknown sizes fall back to the
    /// standard 3kw installation.
    pub fn system_kw_label(&self) -> String {
        if self.system_kw > 0.0 {
            if self.system_kw.fract().abs() < 1e-6 {
                format!("{:.0}kw", self.system_kw)
            } else {
                format!("{}kw", self.system_kw)
            }
        } else {
            "3kw".to_string()
        }
    }

    /// Description for the primary line item
    pub fn line_item(&self) -> String {
        let trimmed = self.item_description.trim();
        if trimmed.is_empty() {
            format!("{} Ongrid Solar System", self.system_kw_label())
        } else {
            trimmed.to_string()
        }
    }

    /// The fee sentence printed under the amount table, with the total
    /// spelled out in words
    pub fn fees_message(&self) -> String {
        format!(
            "Our Fees of solar installation is {} for installation of {} on grid solar system.",
            to_indian_words(Some(self.total_amount)),
            self.system_kw_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_values() {
        let receipt = ReceiptData::default();
        assert_eq!(receipt.customer_name, "Udaya Singh Banara");
        assert_eq!(receipt.customer_address, "Jajapur");
        assert_eq!(receipt.total_amount, 210_000.0);
        assert_eq!(receipt.loan_amount, Some(189_000.0));
        assert_eq!(receipt.margin_amount, Some(21_000.0));
    }

    #[test]
    fn test_line_item_fallback() {
        let receipt = ReceiptData {
            item_description: "  ".to_string(),
            system_kw: 5.0,
            ..ReceiptData::default()
        };
        assert_eq!(receipt.line_item(), "5kw Ongrid Solar System");

        let receipt = ReceiptData::default();
        assert_eq!(receipt.line_item(), "3kw Ongrid Solar System");
    }

    #[test]
    fn test_kw_label_fallback() {
        let receipt = ReceiptData {
            system_kw: 0.0,
            ..ReceiptData::default()
        };
        assert_eq!(receipt.system_kw_label(), "3kw");

        let receipt = ReceiptData {
            system_kw: 7.5,
            ..ReceiptData::default()
        };
        assert_eq!(receipt.system_kw_label(), "7.5kw");
    }

    #[test]
    fn test_fees_message_spells_total() {
        let receipt = ReceiptData::default();
        assert_eq!(
            receipt.fees_message(),
            "Our Fees of solar installation is Two Lakh Ten Thousand rupees \
             for installation of 3kw on grid solar system."
        );
    }

    #[test]
    fn test_json_defaults_for_missing_fields() {
        let receipt: ReceiptData = serde_json::from_str(r#"{"total_amount": 100000}"#).unwrap();
        assert_eq!(receipt.total_amount, 100_000.0);
        assert_eq!(receipt.customer_name, "");
        assert_eq!(receipt.loan_amount, None);
    }
}
