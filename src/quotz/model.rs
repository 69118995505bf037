use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle status of a quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    #[serde(default)]
    pub name: String,
    /// Tax/identity document, typically digits only.
    #[serde(default)]
    pub document: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    // Serialized under the historical field name so existing blobs keep loading.
    #[serde(rename = "nome_fantasia", default)]
    pub trade_name: String,
}

/// One persisted quote/estimate record.
///
/// The storage layer only inspects the fields below; everything else the
/// form produces (line items, totals, payment terms) rides along in `extra`
/// and survives the round trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Internal identifier `O<n>`, assigned on first save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// User-facing display number, usually `ORC<n>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default)]
    pub client: ClientInfo,
    #[serde(default)]
    pub company: CompanyInfo,
    /// Quote date as entered in the form; searched as text, never parsed.
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<QuoteStatus>,
    /// Epoch milliseconds, stamped by the storage layer on every mutation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Quote {
    /// A fresh, unsaved record for the given client and date.
    pub fn draft(client: ClientInfo, company: CompanyInfo, date: impl Into<String>) -> Self {
        Self {
            client,
            company,
            date: date.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&QuoteStatus::Approved).unwrap(),
            "\"approved\""
        );
    }

    #[test]
    fn wire_format_uses_historical_field_names() {
        let mut quote = Quote::draft(
            ClientInfo {
                name: "Acme".into(),
                document: "123".into(),
            },
            CompanyInfo {
                trade_name: "Officina".into(),
            },
            "2024-05-01",
        );
        quote.id = Some("O3".into());
        quote.last_updated = Some(1_700_000_000_000);

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["company"]["nome_fantasia"], "Officina");
        assert_eq!(json["lastUpdated"], 1_700_000_000_000i64);
        assert!(json.get("status").is_none());
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = r#"{"id":"O1","client":{"name":"A","document":""},
            "company":{"nome_fantasia":""},"date":"2024-01-01",
            "items":[{"qty":2}],"total":150.5}"#;
        let quote: Quote = serde_json::from_str(raw).unwrap();
        assert_eq!(quote.extra["total"], 150.5);

        let back = serde_json::to_value(&quote).unwrap();
        assert_eq!(back["items"][0]["qty"], 2);
    }
}
