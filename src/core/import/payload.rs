//! Payload encoding and batch request assembly

use crate::domain::{BatchRequest, FormatPolicy, Result, SubmissionInput};
use base64::{engine::general_purpose, Engine as _};

/// Base64-encodes the raw XML text
///
/// Absent input is treated as the empty string, so the result is never null.
/// The text is not inspected: non-XML input is encoded as-is.
///
/// # Examples
///
/// ```
/// use batch_import_client::core::import::encode_payload;
///
/// assert_eq!(encode_payload(Some("<a/>")), "PGEvPg==");
/// assert_eq!(encode_payload(None), "");
/// ```
pub fn encode_payload(xml: Option<&str>) -> String {
    general_purpose::STANDARD.encode(xml.unwrap_or_default().as_bytes())
}

/// Assembles the batch envelope for one submission
///
/// Blank filename and external reference values are sent as `null`. The
/// format tag goes through `policy`.
///
/// # Errors
///
/// Returns [`BatchImportError::UnknownFormat`](crate::domain::BatchImportError::UnknownFormat)
/// when the format tag is rejected by a restricted policy.
pub fn build_request(input: &SubmissionInput, policy: &FormatPolicy) -> Result<BatchRequest> {
    let format = match input.format.as_deref() {
        Some(raw) => policy.parse(raw)?,
        None => None,
    };

    Ok(BatchRequest {
        payload: encode_payload(input.xml.as_deref()),
        update_null: input.update_null,
        format,
        filename: non_blank(input.filename.as_deref()),
        external_reference: non_blank(input.external_reference.as_deref()),
    })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BatchImportError;
    use test_case::test_case;

    fn decode(encoded: &str) -> Vec<u8> {
        general_purpose::STANDARD.decode(encoded).unwrap()
    }

    #[test_case("<a/>" ; "simple xml")]
    #[test_case("" ; "empty")]
    #[test_case("not xml at all" ; "plain text")]
    #[test_case("<note>héllo ✓ 日本</note>" ; "multi-byte")]
    #[test_case("<a>\r\n\t</a>\0" ; "control characters")]
    fn test_payload_decodes_to_utf8_bytes(text: &str) {
        assert_eq!(decode(&encode_payload(Some(text))), text.as_bytes());
    }

    #[test]
    fn test_absent_payload_is_empty_not_null() {
        let request = build_request(&SubmissionInput::default(), &FormatPolicy::Passthrough).unwrap();
        assert_eq!(request.payload, "");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["Data"], serde_json::json!(""));
    }

    #[test]
    fn test_build_request_copies_metadata() {
        let input = SubmissionInput::new("<a/>")
            .with_filename("f.xml")
            .with_external_reference("ref1")
            .with_format("Xml")
            .with_update_null(true);

        let request = build_request(&input, &FormatPolicy::Passthrough).unwrap();

        assert_eq!(request.payload, "PGEvPg==");
        assert_eq!(request.filename.as_deref(), Some("f.xml"));
        assert_eq!(request.external_reference.as_deref(), Some("ref1"));
        assert_eq!(request.format.as_ref().map(|f| f.as_str()), Some("Xml"));
        assert!(request.update_null);
    }

    #[test]
    fn test_blank_metadata_becomes_none() {
        let input = SubmissionInput::new("<a/>")
            .with_filename("")
            .with_external_reference("   ")
            .with_format("");

        let request = build_request(&input, &FormatPolicy::Passthrough).unwrap();

        assert_eq!(request.filename, None);
        assert_eq!(request.external_reference, None);
        assert_eq!(request.format, None);
    }

    #[test]
    fn test_unknown_format_rejected_by_restricted_policy() {
        let policy = FormatPolicy::from_allowed(&["Xml".to_string()]);
        let input = SubmissionInput::new("<a/>").with_format("Csv");

        let err = build_request(&input, &policy).unwrap_err();
        assert!(matches!(err, BatchImportError::UnknownFormat { .. }));
    }
}
