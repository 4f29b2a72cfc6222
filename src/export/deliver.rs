use super::ExportedImage;
use crate::error::ExportResult;

#[cfg(not(target_arch = "wasm32"))]
impl ExportedImage {
    /// Write the image into `dir` under its file name
    pub fn save_to(&self, dir: &std::path::Path) -> ExportResult<std::path::PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.png)?;
        log::info!("Saved export to {}", path.display());
        Ok(path)
    }
}

#[cfg(target_arch = "wasm32")]
impl ExportedImage {
    /// Hand the image to the browser as a file download
    pub fn download(&self) -> ExportResult<()> {
        use crate::error::ExportError;
        use wasm_bindgen::{JsCast as _, JsValue};

        fn js_error(err: JsValue) -> ExportError {
            ExportError::Download(format!("{err:?}"))
        }

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(self.png.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ExportError::Download("no document available".to_owned()))?;
        let anchor = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Download("failed to create link".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(&self.file_name);
        anchor.click();

        web_sys::Url::revoke_object_url(&url).map_err(js_error)?;
        log::info!("Started download of {}", self.file_name);
        Ok(())
    }
}
