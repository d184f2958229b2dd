use shared::constants::SPIN_ENDPOINT;
use shared::shared_prize_wheel::WheelPageData;
use web_sys::window;

/// Element the host page embeds the prize list in.
pub const PAGE_DATA_ELEMENT_ID: &str = "wheel-data";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(location) = window.location().host() {
            if !location.is_empty() {
                // Use the current hostname and port so the page works from other machines
                let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
                return format!("{}//{}", protocol, location);
            }
        }
    }

    // Default to the local outcome server for development
    "http://127.0.0.1:5000".to_string()
}

pub fn get_spin_url() -> String {
    format!("{}{}", get_api_base_url(), SPIN_ENDPOINT)
}

/// Reads the `<script id="wheel-data" type="application/json">` block from the page.
pub fn load_page_data() -> Result<WheelPageData, String> {
    let text = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PAGE_DATA_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .ok_or_else(|| format!("Missing #{} element", PAGE_DATA_ELEMENT_ID))?;

    serde_json::from_str(&text).map_err(|e| format!("Error parsing wheel data: {}", e))
}
