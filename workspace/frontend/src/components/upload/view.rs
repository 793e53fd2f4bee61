use controller::UploadClient;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use super::status::UploadStatusView;

#[derive(Properties, PartialEq)]
pub struct UploadProps {
    pub upload: UploadClient,
    /// Receives the selected file, or `None` when the input is empty
    pub on_upload: Callback<Option<File>>,
}

#[function_component(Upload)]
pub fn upload(props: &UploadProps) -> Html {
    let file_input = use_node_ref();

    let onclick = {
        let file_input = file_input.clone();
        let on_upload = props.on_upload.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let file = file_input
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            log::debug!("Upload clicked, file selected: {}", file.is_some());
            on_upload.emit(file);
        })
    };

    let uploading = props.upload.is_uploading();

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Upload records"}</h2>
                <p class="text-sm text-base-content/70">
                    {"CSV with columns date, season, medicine and quantity."}
                </p>
                <div class="flex flex-wrap items-center gap-4 mt-2">
                    <input
                        id="csvFile"
                        ref={file_input}
                        type="file"
                        accept=".csv,text/csv"
                        class="file-input file-input-bordered w-full max-w-xs"
                    />
                    <button id="uploadBtn" class="btn btn-primary" disabled={uploading} {onclick}>
                        <i class="fas fa-upload"></i>
                        {" Upload"}
                    </button>
                </div>
                <UploadStatusView status={props.upload.status().clone()} />
            </div>
        </div>
    }
}
