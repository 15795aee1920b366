use crate::model::{self, MeshData};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let buf = JsFuture::from(buf)
        .await
        .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch, parse and place the body model.
pub async fn load_model(url: &str, scale: f32) -> anyhow::Result<MeshData> {
    let bytes = fetch_bytes(url).await?;
    let mut mesh = model::parse_glb(&bytes)?;
    let raw = mesh.bounds;
    mesh.fit(scale);
    log::info!(
        "[model] {} loaded: {} vertices, size=({:.2},{:.2},{:.2}) center=({:.2},{:.2},{:.2})",
        url,
        mesh.vertices.len(),
        raw.size().x,
        raw.size().y,
        raw.size().z,
        raw.center().x,
        raw.center().y,
        raw.center().z
    );
    Ok(mesh)
}
