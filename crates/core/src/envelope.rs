//! Response envelopes of the catalogue REST API.

use serde::Deserialize;

use crate::Catalogue;

/// Wrapper the backend puts around every JSON answer.
///
/// Reads carry `data` or `success: false` + `error`; writes carry `message`
/// or `error`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: Option<bool>,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// What a well-formed envelope says about the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Accepted(T),
    Rejected(String),
}

impl<T> Envelope<T> {
    fn rejection(&mut self) -> Option<String> {
        if let Some(error) = self.error.take() {
            return Some(error);
        }
        if self.success == Some(false) {
            return Some(self.message.take().unwrap_or_else(|| "Request was rejected.".to_owned()));
        }
        None
    }

    /// `None` when the body has neither payload nor error.
    pub fn into_read_outcome(mut self) -> Option<Outcome<T>> {
        if let Some(reason) = self.rejection() {
            return Some(Outcome::Rejected(reason));
        }
        self.data.map(Outcome::Accepted)
    }

    /// `None` when the body has neither message nor error.
    pub fn into_write_outcome(mut self) -> Option<Outcome<String>> {
        if let Some(reason) = self.rejection() {
            return Some(Outcome::Rejected(reason));
        }
        self.message.map(Outcome::Accepted)
    }
}

/// Body of the collection endpoint: the enveloped form, or the bare array the
/// documented API variant returns.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListBody {
    Bare(Vec<Catalogue>),
    Enveloped(Envelope<Vec<Catalogue>>),
}

impl ListBody {
    pub fn into_outcome(self) -> Option<Outcome<Vec<Catalogue>>> {
        match self {
            Self::Bare(records) => Some(Outcome::Accepted(records)),
            Self::Enveloped(envelope) => envelope.into_read_outcome(),
        }
    }
}

/// Body of the item endpoint, enveloped or bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemBody {
    Bare(Catalogue),
    Enveloped(Envelope<Catalogue>),
}

impl ItemBody {
    pub fn into_outcome(self) -> Option<Outcome<Catalogue>> {
        match self {
            Self::Bare(record) => Some(Outcome::Accepted(record)),
            Self::Enveloped(envelope) => envelope.into_read_outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_envelope_with_data() {
        let body: ListBody = serde_json::from_value(json!({
            "success": true,
            "message": "Catalogues fetched successfully",
            "data": [{ "catalogue_id": 1, "catalogue_name": "A" }]
        }))
        .unwrap();
        match body.into_outcome() {
            Some(Outcome::Accepted(records)) => assert_eq!(records.len(), 1),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_bare_list_is_accepted() {
        let body: ListBody = serde_json::from_value(json!([
            { "catalogue_id": 1 }, { "catalogue_id": 2 }
        ]))
        .unwrap();
        assert!(matches!(body.into_outcome(), Some(Outcome::Accepted(r)) if r.len() == 2));
    }

    #[test]
    fn test_item_rejection_keeps_error_text() {
        let body: ItemBody = serde_json::from_value(json!({
            "success": false,
            "error": "Catalogue with the specified ID does not exist."
        }))
        .unwrap();
        assert_eq!(
            body.into_outcome(),
            Some(Outcome::Rejected("Catalogue with the specified ID does not exist.".to_owned()))
        );
    }

    #[test]
    fn test_write_message_and_error() {
        let ok: Envelope<serde_json::Value> =
            serde_json::from_value(json!({ "message": "Catalogue 4 updated successfully", "success": true }))
                .unwrap();
        assert_eq!(
            ok.into_write_outcome(),
            Some(Outcome::Accepted("Catalogue 4 updated successfully".to_owned()))
        );

        let err: Envelope<serde_json::Value> =
            serde_json::from_value(json!({ "error": "not found" })).unwrap();
        assert_eq!(err.into_write_outcome(), Some(Outcome::Rejected("not found".to_owned())));
    }

    #[test]
    fn test_empty_object_has_no_outcome() {
        let body: Envelope<Vec<Catalogue>> = serde_json::from_value(json!({})).unwrap();
        assert!(body.into_read_outcome().is_none());
    }
}
