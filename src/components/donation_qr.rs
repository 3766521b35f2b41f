//! Donation QR - locally rendered QR code for the funding page.

use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;

use crate::theme::colors::{SLATE_950, TEXT_PRIMARY};

/// Props for the donation QR component.
#[derive(Props, Clone, PartialEq)]
pub struct DonationQrProps {
    /// Data to encode in QR code
    pub data: String,
    /// Minimum render size in pixels; CSS controls the displayed size
    #[props(default = 250)]
    pub size: u32,
}

/// Render `data` as an SVG QR code with its fixed width/height stripped so
/// it scales with its container.
pub fn render_qr_svg(data: &str, size: u32) -> Option<String> {
    let code = match QrCode::new(data.as_bytes()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Failed to generate QR code: {:?}", e);
            return None;
        }
    };

    let svg_string = code
        .render()
        .min_dimensions(size, size)
        .dark_color(svg::Color(SLATE_950))
        .light_color(svg::Color(TEXT_PRIMARY))
        .build();

    Some(strip_dimensions(&svg_string))
}

/// Remove the root element's `width` and `height` attributes.
fn strip_dimensions(svg: &str) -> String {
    let Some(end) = svg.find("viewBox") else {
        return svg.to_string();
    };
    let (head, tail) = svg.split_at(end);
    let head: Vec<&str> = head
        .split(' ')
        .filter(|attr| !attr.starts_with("width=") && !attr.starts_with("height="))
        .collect();
    format!("{} {}", head.join(" ").trim_end(), tail)
}

#[component]
pub fn DonationQr(props: DonationQrProps) -> Element {
    let qr_svg = use_memo(move || render_qr_svg(&props.data, props.size));

    rsx! {
        if let Some(svg) = qr_svg() {
            div {
                class: "donation-qr",
                dangerous_inner_html: "{svg}",
            }
        } else {
            div { class: "qr-error", "QR code unavailable" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_svg_has_no_fixed_size() {
        let svg = render_qr_svg("AION-LABS-FUND", 250).unwrap();
        assert!(svg.contains("viewBox"));
        let root = &svg[..svg.find("viewBox").unwrap()];
        assert!(!root.contains("width="));
        assert!(!root.contains("height="));
    }

    #[test]
    fn strip_keeps_other_attributes() {
        let svg = r#"<svg xmlns="x" width="10" height="10" viewBox="0 0 10 10"><rect/></svg>"#;
        assert_eq!(
            strip_dimensions(svg),
            r#"<svg xmlns="x" viewBox="0 0 10 10"><rect/></svg>"#
        );
    }
}
