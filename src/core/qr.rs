//! QR codes for registration links, rendered as inline SVG.

use qrcode::QrCode;
use qrcode::render::svg;
use qrcode::types::QrError;

/// Edge length of a registration QR code in CSS pixels.
pub const QR_SIZE: u32 = 128;

/// Encode `data` as a square SVG of at least `size` pixels.
///
/// The XML prolog is left out so the markup can go straight into `inner_html`.
pub fn qr_svg(data: &str, size: u32) -> Result<String, QrError> {
    let code = QrCode::new(data.as_bytes())?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(match image.find("<svg") {
        Some(start) => image[start..].to_string(),
        None => image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sections::{RERA_PORTAL_URL, ReraRecord};

    #[test]
    fn test_svg_is_inline_markup() {
        let svg = qr_svg("https://maharera.example/P52100012345", QR_SIZE).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<?xml"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn test_different_links_give_different_codes() {
        let a = qr_svg("https://example.test/a", QR_SIZE).unwrap();
        let b = qr_svg("https://example.test/b", QR_SIZE).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_without_url_encodes_portal() {
        let record = ReraRecord::default();
        let from_record = qr_svg(&record.portal_url(), QR_SIZE).unwrap();
        let from_portal = qr_svg(RERA_PORTAL_URL, QR_SIZE).unwrap();
        assert_eq!(from_record, from_portal);
    }

    #[test]
    fn test_oversized_data_is_rejected() {
        let data = "x".repeat(8000);
        assert_eq!(qr_svg(&data, QR_SIZE), Err(QrError::DataTooLong));
    }
}
