//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, transaction::TransactionId};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Tried to update a transaction that does not exist.
    #[error("tried to update transaction {0}, which is not in the store")]
    UpdateMissingTransaction(TransactionId),

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete transaction {0}, which is not in the store")]
    DeleteMissingTransaction(TransactionId),

    /// The receipt upload form did not contain a file.
    #[error("no receipt file was selected")]
    NoReceiptSelected,

    /// The uploaded receipt is not an image.
    ///
    /// Holds the content type the client sent for the file.
    #[error("receipt has content type \"{0}\", expected an image")]
    NotAnImage(String),

    /// The multipart form could not be parsed.
    #[error("could not parse multipart form: {0}")]
    MultipartError(String),

    /// Could not acquire the lock on shared application state.
    ///
    /// This only happens if a thread panicked while holding the lock.
    #[error("could not acquire the state lock")]
    StateLockError,

    /// The monthly budget is not a non-negative number.
    #[error("\"{0}\" is not a valid budget")]
    InvalidBudget(String),

    /// The seed transactions could not be read or parsed.
    #[error("could not load seed data: {0}")]
    InvalidSeedData(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::StateLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::UpdateMissingTransaction(_) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not update transaction".to_owned(),
                    details: "The transaction could not be found.".to_owned(),
                },
            ),
            Error::DeleteMissingTransaction(_) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete transaction".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted."
                        .to_owned(),
                },
            ),
            Error::NoReceiptSelected => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "No file selected".to_owned(),
                    details: "Please select a receipt image to upload".to_owned(),
                },
            ),
            Error::NotAnImage(_) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid file type".to_owned(),
                    details: "Please upload an image file".to_owned(),
                },
            ),
            Error::MultipartError(error) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Could not read the upload".to_owned(),
                    details: error,
                },
            ),
            Error::InvalidBudget(budget) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid budget".to_owned(),
                    details: format!(
                        "\"{budget}\" is not a valid amount. Enter a number that is zero or more."
                    ),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::Error;

    #[test]
    fn missing_transaction_is_not_found() {
        let response = Error::DeleteMissingTransaction(4).into_alert_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn upload_errors_are_bad_requests() {
        assert_eq!(
            Error::NoReceiptSelected.into_alert_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::NotAnImage("text/plain".to_owned())
                .into_alert_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn lock_error_is_internal() {
        assert_eq!(
            Error::StateLockError.into_alert_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
