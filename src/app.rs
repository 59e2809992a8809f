use crate::{ClientConfig, Error, HttpTransport, PickedFile, Result, SelectedFile, Status, run_agent};
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    use_context_provider(|| HttpTransport::new(&ClientConfig::from_env()));

    rsx! {
        div { display: "flex", flex_direction: "column", gap: "12px", max_width: "640px",
            h1 { "PDF parameter merge" }
            ServerStatus {}
            RunAgentForm {}
        }
    }
}

/// The two file pickers, the key field, the button and the output area.
#[component]
pub fn RunAgentForm() -> Element {
    let transport = use_context::<HttpTransport>();

    // Only the handles are kept, the bytes are read when the button is pressed.
    // A multi-file selection keeps its first file.
    let mut params_file = use_signal(|| None as Option<FileData>);
    let mut pdf_file = use_signal(|| None as Option<FileData>);
    let mut key = use_signal(String::new);
    let mut output = use_signal(|| Status::Idle.to_string());

    let onclick = move |_| {
        let transport = transport.clone();
        let key = key.cloned();
        async move {
            run_agent(&transport, params_file(), pdf_file(), &key, move |status| {
                output.set(status.to_string())
            })
            .await;
        }
    };

    rsx! {
        div {
            label { r#for: "params", "Parameter table (.csv or .json)" }
            input {
                r#type: "file",
                id: "params",
                name: "params_file",
                accept: ".csv,.json",
                onchange: move |evt| params_file.set(evt.files().into_iter().next()),
            }
        }
        div {
            label { r#for: "pdf", "PDF document" }
            input {
                r#type: "file",
                id: "pdf",
                name: "pdf_file",
                accept: ".pdf",
                onchange: move |evt| pdf_file.set(evt.files().into_iter().next()),
            }
        }
        div {
            label { r#for: "key", "Join key (optional)" }
            input {
                r#type: "text",
                id: "key",
                name: "key",
                value: "{key}",
                oninput: move |evt| key.set(evt.value()),
            }
        }
        button { id: "run", onclick, "Run agent" }
        pre { id: "output", "{output}" }
    }
}

/// Pings the server once when mounted.
#[component]
pub fn ServerStatus() -> Element {
    let transport = use_context::<HttpTransport>();

    let health = use_resource(move || {
        let transport = transport.clone();
        async move {
            transport.ping().await.unwrap_or_else(|err| {
                tracing::warn!("Ping failed: {err}");
                false
            })
        }
    });

    let label = match *health.read() {
        None => "Checking server...",
        Some(true) => "Server online",
        Some(false) => "Server offline",
    };

    rsx! {
        p { id: "server-status", "{label}" }
    }
}

impl PickedFile for FileData {
    async fn load(self) -> Result<SelectedFile> {
        let name = self.name();
        let bytes = self.read_bytes().await.map_err(|err| Error::FileRead {
            name: name.clone(),
            message: err.to_string(),
        })?;

        Ok(SelectedFile::new(name, bytes))
    }
}
