//! The "Run agent" button handler.
//!
//! The handler shows a placeholder, checks that both files were picked, reads and posts them and
//! replaces the placeholder with whatever came back. It never retries and never guards against being
//! invoked again while a previous request is still in flight.

use crate::{PickedFile, Result, RunAgentRequest, Status, Transport};

pub const RUN_AGENT_PATH: &str = "/run-agent";

/// Run one submission, reporting every status change to `on_status`.
///
/// Files are only read after the placeholder is up, so a failed read shows as `Error: ...`.
/// The final status is returned as well so callers without a UI can inspect it.
pub async fn run_agent<T: Transport, F: PickedFile>(
    transport: &T,
    params_file: Option<F>,
    pdf_file: Option<F>,
    key: &str,
    mut on_status: impl FnMut(&Status),
) -> Status {
    on_status(&Status::Running);

    let status = match (params_file, pdf_file) {
        (Some(params_file), Some(pdf_file)) => match load(params_file, pdf_file, key).await {
            Ok(request) => submit(transport, request).await,
            Err(err) => {
                tracing::error!("Could not read the selected files: {err}");
                Status::failed(err)
            }
        },
        _ => {
            tracing::debug!("Submission skipped, a file is missing");
            Status::MissingFiles
        }
    };

    on_status(&status);
    status
}

async fn load<F: PickedFile>(params_file: F, pdf_file: F, key: &str) -> Result<RunAgentRequest> {
    let params_file = params_file.load().await?;
    let pdf_file = pdf_file.load().await?;
    Ok(RunAgentRequest::new(params_file, pdf_file, key))
}

async fn submit<T: Transport>(transport: &T, request: RunAgentRequest) -> Status {
    match transport.post_form(RUN_AGENT_PATH, request).await {
        Ok(value) => Status::Done(value),
        Err(err) => {
            tracing::error!("Run agent request failed: {err}");
            Status::failed(err)
        }
    }
}
