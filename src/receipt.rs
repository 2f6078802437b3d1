//! Receipt image uploads.
//!
//! Uploaded receipts are validated and handed to an [ExpenseExtractor]. Reading
//! expenses off the image is left to the extractor, the provided
//! [LoggingExtractor] only records that a receipt arrived.

use std::{fmt::Debug, sync::Arc};

use axum::{
    extract::{FromRef, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    alert::Alert,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, dialog},
};

/// The name of the file input in the upload form.
const RECEIPT_FIELD: &str = "receipt";

/// The largest receipt image accepted, in bytes.
pub const RECEIPT_SIZE_LIMIT: usize = 10 * 1024 * 1024;

/// An uploaded receipt image. The image bytes are not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// The name of the file on the user's device.
    pub file_name: String,
    /// The MIME type the browser reported, always `image/*`.
    pub content_type: String,
    /// The size of the image in bytes.
    pub size: usize,
}

/// Turns receipt images into expenses.
pub trait ExpenseExtractor: Debug + Send + Sync {
    /// Accept a receipt for processing.
    fn submit(&self, receipt: &Receipt);
}

/// An [ExpenseExtractor] that logs each receipt and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingExtractor;

impl ExpenseExtractor for LoggingExtractor {
    fn submit(&self, receipt: &Receipt) {
        tracing::info!(
            "Uploading file: {} ({}, {} bytes)",
            receipt.file_name,
            receipt.content_type,
            receipt.size
        );
    }
}

/// The state needed to upload receipts.
#[derive(Debug, Clone)]
pub struct ReceiptState {
    pub extractor: Arc<dyn ExpenseExtractor>,
}

impl FromRef<AppState> for ReceiptState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            extractor: state.extractor.clone(),
        }
    }
}

/// A route handler for uploading a receipt image, responds with an alert.
pub async fn upload_receipt_endpoint(
    State(state): State<ReceiptState>,
    multipart: Multipart,
) -> Response {
    match read_receipt(multipart).await {
        Ok(receipt) => {
            state.extractor.submit(&receipt);

            (
                StatusCode::ACCEPTED,
                Alert::Success {
                    message: "Receipt uploaded".to_owned(),
                    details: "Your receipt is being processed".to_owned(),
                }
                .into_html(),
            )
                .into_response()
        }
        Err(error) => {
            tracing::debug!("Rejected receipt upload: {error}");
            error.into_alert_response()
        }
    }
}

async fn read_receipt(mut multipart: Multipart) -> Result<Receipt, Error> {
    while let Some(field) = multipart.next_field().await.map_err(|error| {
        tracing::error!("Could not read multipart form field: {error}");
        Error::MultipartError(error.body_text())
    })? {
        if field.name() != Some(RECEIPT_FIELD) {
            continue;
        }

        // Browsers send an empty file name when the file input is left empty.
        let file_name = field.file_name().unwrap_or_default().trim().to_owned();
        if file_name.is_empty() {
            return Err(Error::NoReceiptSelected);
        }

        let content_type = field.content_type().unwrap_or_default().to_lowercase();
        if !content_type.starts_with("image/") {
            return Err(Error::NotAnImage(content_type));
        }

        let data = field.bytes().await.map_err(|error| {
            tracing::error!("Could not read data from multipart form field: {error}");
            Error::MultipartError(error.body_text())
        })?;

        tracing::debug!("Received receipt '{}' that is {} bytes", file_name, data.len());

        return Ok(Receipt {
            file_name,
            content_type,
            size: data.len(),
        });
    }

    Err(Error::NoReceiptSelected)
}

/// The dialog for uploading a receipt image.
pub fn upload_receipt_dialog() -> Markup {
    let body = html! {
        form
            hx-post=(endpoints::RECEIPTS_API)
            hx-encoding="multipart/form-data"
            hx-target="#alert-container"
            hx-swap="outerHTML"
            data-close-dialog="upload-receipt-dialog"
            class="space-y-4"
        {
            div
                class="flex flex-col items-center gap-3 p-6 text-center border-2
                    border-dashed rounded-lg border-gray-300 dark:border-gray-600"
            {
                label for="receipt-image" class=(FORM_LABEL_STYLE) { "Select Receipt Image" }

                input
                    id="receipt-image"
                    type="file"
                    name=(RECEIPT_FIELD)
                    accept="image/*"
                    class="text-sm";

                p class="text-xs text-gray-500 dark:text-gray-400" { "PNG, JPG or WEBP" }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Upload" }
        }
    };

    dialog("upload-receipt-dialog", "Upload Receipt Image", &body)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{FromRequest, Multipart, State},
        http::{Request, StatusCode},
        response::IntoResponse,
    };

    use crate::{
        endpoints,
        receipt::{ExpenseExtractor, Receipt, ReceiptState, upload_receipt_endpoint},
        test_utils::{assert_alert_error, assert_alert_success, parse_html_fragment},
    };

    #[derive(Debug, Default)]
    struct RecordingExtractor {
        receipts: Mutex<Vec<Receipt>>,
    }

    impl ExpenseExtractor for RecordingExtractor {
        fn submit(&self, receipt: &Receipt) {
            self.receipts.lock().unwrap().push(receipt.clone());
        }
    }

    async fn must_make_multipart(file_name: &str, content_type: &str) -> Multipart {
        let boundary = "MY_BOUNDARY123456789";
        let data = [
            format!("--{boundary}"),
            format!("Content-Disposition: form-data; name=\"receipt\"; filename=\"{file_name}\""),
            format!("Content-Type: {content_type}"),
            String::new(),
            "fake image bytes".to_owned(),
            format!("--{boundary}--"),
        ]
        .join("\r\n")
        .into_bytes();

        let request = Request::builder()
            .method("POST")
            .uri(endpoints::RECEIPTS_API)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(data.into())
            .unwrap();

        Multipart::from_request(request, &()).await.unwrap()
    }

    #[tokio::test]
    async fn accepts_image_and_hands_it_to_extractor() {
        let extractor = Arc::new(RecordingExtractor::default());
        let state = ReceiptState {
            extractor: extractor.clone(),
        };

        let response = upload_receipt_endpoint(
            State(state),
            must_make_multipart("lunch.png", "image/png").await,
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let html = parse_html_fragment(response).await;
        assert_alert_success(
            &html,
            "Receipt uploaded",
            Some("Your receipt is being processed"),
        );
        assert_eq!(
            *extractor.receipts.lock().unwrap(),
            vec![Receipt {
                file_name: "lunch.png".to_owned(),
                content_type: "image/png".to_owned(),
                size: "fake image bytes".len(),
            }]
        );
    }

    #[tokio::test]
    async fn rejects_missing_file() {
        let extractor = Arc::new(RecordingExtractor::default());
        let state = ReceiptState {
            extractor: extractor.clone(),
        };

        let response = upload_receipt_endpoint(
            State(state),
            must_make_multipart("", "application/octet-stream").await,
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_alert_error(
            &html,
            "No file selected",
            Some("Please select a receipt image to upload"),
        );
        assert!(extractor.receipts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_non_image() {
        let extractor = Arc::new(RecordingExtractor::default());
        let state = ReceiptState {
            extractor: extractor.clone(),
        };

        let response = upload_receipt_endpoint(
            State(state),
            must_make_multipart("notes.txt", "text/plain").await,
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_alert_error(&html, "Invalid file type", Some("Please upload an image file"));
        assert!(extractor.receipts.lock().unwrap().is_empty());
    }
}
